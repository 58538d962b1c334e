use super::{Policy, ProcId, ProcTable, Ticks, position_min_by_key};

/// Shortest job first, non-preemptive.
pub struct Sjf;

impl Policy for Sjf {
    fn pick(&self, table: &ProcTable, ready: &[ProcId], _now: Ticks) -> usize {
        position_min_by_key(table, ready, |p| (p.burst, p.arrival, p.id))
    }
}
