use super::{Policy, ProcId, ProcTable, Ticks, position_min_by_key};

/// First-come first-served: earliest arrival runs to completion.
pub struct Fcfs;

impl Policy for Fcfs {
    fn pick(&self, table: &ProcTable, ready: &[ProcId], _now: Ticks) -> usize {
        position_min_by_key(table, ready, |p| (p.arrival, p.id))
    }
}
