use super::{Policy, ProcId, ProcTable, Ticks, position_min_by_key};

/// Shortest remaining time first. An arrival preempts only when its whole
/// burst is strictly shorter than what the running process still needs.
pub struct Srtf;

impl Policy for Srtf {
    fn pick(&self, table: &ProcTable, ready: &[ProcId], _now: Ticks) -> usize {
        position_min_by_key(table, ready, |p| (p.remaining, p.arrival, p.id))
    }

    fn preemptive(&self) -> bool {
        true
    }

    fn preempts(&self, table: &ProcTable, running: ProcId, elapsed: Ticks, arriving: ProcId) -> bool {
        let left = table.proc(running).remaining.saturating_sub(elapsed);
        table.proc(arriving).remaining < left
    }
}
