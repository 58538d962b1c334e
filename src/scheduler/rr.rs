use super::{Policy, ProcId, ProcTable, Ticks};

/// Round robin over a FIFO ready queue.
///
/// The driver appends new arrivals before re-queueing the process whose
/// slice just ended, so an arrival landing exactly on that boundary is
/// served first.
pub struct RoundRobin {
    quantum: Ticks,
}

impl RoundRobin {
    pub fn new(quantum: Ticks) -> Self {
        debug_assert!(quantum > 0, "Round robin needs a positive quantum");
        Self { quantum }
    }
}

impl Policy for RoundRobin {
    fn pick(&self, _table: &ProcTable, _ready: &[ProcId], _now: Ticks) -> usize {
        0
    }

    fn slice(&self) -> Option<Ticks> {
        Some(self.quantum)
    }
}
