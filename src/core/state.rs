// Index into the process arena; equals the position in the caller's input
pub type ProcId = usize;
pub type Ticks = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcState {
    Pending,
    Ready,
    Running,
    Completed,
}

#[derive(Debug, Clone)]
pub struct Proc {
    pub id: ProcId,
    pub label: String,
    pub arrival: Ticks,
    pub burst: Ticks,
    // Lower value runs first; zero when the workload carries no priorities
    pub priority: i64,
    pub state: ProcState,
    pub remaining: Ticks,
    pub first_dispatch: Option<Ticks>,
    pub completion: Option<Ticks>,
}

/// Per-run process arena. Owned by exactly one driver for the length of one
/// simulation and never shared across runs.
#[derive(Debug, Default)]
pub struct ProcTable {
    procs: Vec<Proc>,
}

impl ProcTable {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            procs: Vec::with_capacity(capacity),
        }
    }

    pub fn create_proc(&mut self, label: String, arrival: Ticks, burst: Ticks, priority: i64) -> ProcId {
        let id = self.procs.len();
        debug_assert!(burst > 0, "Process {label} must need at least one tick");

        self.procs.push(Proc {
            id,
            label,
            arrival,
            burst,
            priority,
            state: ProcState::Pending,
            remaining: burst,
            first_dispatch: None,
            completion: None,
        });

        id
    }

    pub fn len(&self) -> usize {
        self.procs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.procs.is_empty()
    }

    pub fn proc(&self, id: ProcId) -> &Proc {
        &self.procs[id]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Proc> {
        self.procs.iter()
    }

    // Admission order: ascending arrival, ties by input position
    pub fn arrival_order(&self) -> Vec<ProcId> {
        let mut order: Vec<ProcId> = (0..self.procs.len()).collect();
        order.sort_by_key(|&id| (self.procs[id].arrival, id));
        order
    }

    pub fn mark_ready(&mut self, id: ProcId) {
        let proc = &mut self.procs[id];
        debug_assert!(
            proc.state != ProcState::Completed,
            "Completed process {} cannot become ready",
            proc.label
        );
        proc.state = ProcState::Ready;
    }

    // Return true on the first dispatch of `id`
    pub fn set_running(&mut self, id: ProcId, now: Ticks) -> bool {
        let proc = &mut self.procs[id];
        debug_assert_eq!(
            proc.state,
            ProcState::Ready,
            "Process {} must be ready before dispatch",
            proc.label
        );
        debug_assert!(now >= proc.arrival, "Process {} dispatched before arrival", proc.label);

        proc.state = ProcState::Running;
        if proc.first_dispatch.is_none() {
            proc.first_dispatch = Some(now);
            return true;
        }
        false
    }

    pub fn consume(&mut self, id: ProcId, ticks: Ticks) {
        let proc = &mut self.procs[id];
        debug_assert!(
            ticks > 0 && ticks <= proc.remaining,
            "Process {} cannot consume {ticks} of {} remaining ticks",
            proc.label,
            proc.remaining
        );
        proc.remaining -= ticks;
    }

    pub fn mark_completed(&mut self, id: ProcId, completion_time: Ticks) {
        let proc = &mut self.procs[id];
        debug_assert_eq!(
            proc.state,
            ProcState::Running,
            "Process {} must have been running before marked complete",
            proc.label
        );
        debug_assert_eq!(proc.remaining, 0, "Process {} completed with work left", proc.label);

        proc.state = ProcState::Completed;
        proc.completion = Some(completion_time);
    }

    pub fn all_completed(&self) -> bool {
        self.procs.iter().all(|p| p.state == ProcState::Completed)
    }
}
