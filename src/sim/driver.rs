use super::{
    job::{Process, normalize, normalize_quantum},
    workload::Workload,
};
use crate::{
    core::{
        driver::SchedCore,
        observer,
        result::ScheduleResult,
        state::{ProcTable, Ticks},
    },
    error::InvalidInput,
    scheduler::{
        Fcfs, Hrrn, NonPreemptivePriority, Policy, PolicyKind, PreemptivePriority, RoundRobin,
        Sjf, Srtf,
    },
};

/// One simulation run: a fresh process arena driven by policy `P`.
pub struct Sim<P: Policy> {
    pub core: SchedCore<P>,
    kind: PolicyKind,
    has_priority: bool,
}

impl<P: Policy> Sim<P> {
    pub fn new(kind: PolicyKind, policy: P, processes: &[Process]) -> Self {
        let mut table = ProcTable::with_capacity(processes.len());
        for p in processes {
            table.create_proc(p.label.clone(), p.arrival, p.burst, p.priority.unwrap_or_default());
        }

        Self {
            core: SchedCore::new(table, policy),
            kind,
            has_priority: processes.iter().any(|p| p.priority.is_some()),
        }
    }

    pub fn step(&mut self) -> bool {
        self.core.step()
    }

    pub fn all_jobs_completed(&self) -> bool {
        self.core.table.all_completed()
    }

    pub fn finish(self) -> ScheduleResult {
        let (table, timeline) = self.core.run();
        let result = ScheduleResult::from_run(self.kind, &table, timeline.into_segments(), self.has_priority);

        if cfg!(debug_assertions) {
            if let Err(violation) = observer::audit(&result) {
                panic!("{} produced an invalid schedule: {violation}", self.kind);
            }
        }
        result
    }
}

/// Simulates `policy` over the given sequences.
///
/// `quantum` is required for RR and ignored otherwise; `priority` is required
/// for NPP and PP. Invalid input is rejected before any work starts.
pub fn simulate(
    policy: PolicyKind,
    arrival: &[i64],
    burst: &[i64],
    quantum: Option<i64>,
    priority: Option<&[i64]>,
) -> Result<ScheduleResult, InvalidInput> {
    let quantum = normalize_quantum(policy, quantum)?;
    let processes = normalize(policy, arrival, burst, priority)?;
    log::debug!("simulating {policy} over {} processes", processes.len());
    Ok(run(policy, &processes, quantum))
}

pub fn simulate_workload(
    policy: PolicyKind,
    workload: &Workload,
    quantum: Option<i64>,
) -> Result<ScheduleResult, InvalidInput> {
    simulate(
        policy,
        &workload.arrival,
        &workload.burst,
        quantum,
        workload.priority.as_deref(),
    )
}

/// Runs every policy the workload can feed. RR needs `quantum`, NPP and PP
/// need priorities; policies missing their input are skipped.
pub fn simulate_all(
    workload: &Workload,
    quantum: Option<i64>,
) -> Result<Vec<ScheduleResult>, InvalidInput> {
    PolicyKind::ALL
        .into_iter()
        .filter(|kind| !kind.needs_quantum() || quantum.is_some())
        .filter(|kind| !kind.needs_priority() || workload.priority.is_some())
        .map(|kind| simulate_workload(kind, workload, quantum))
        .collect()
}

fn run(kind: PolicyKind, processes: &[Process], quantum: Option<Ticks>) -> ScheduleResult {
    match kind {
        PolicyKind::Fcfs => Sim::new(kind, Fcfs, processes).finish(),
        PolicyKind::Sjf => Sim::new(kind, Sjf, processes).finish(),
        PolicyKind::Srtf => Sim::new(kind, Srtf, processes).finish(),
        PolicyKind::Rr => {
            // normalize_quantum guarantees a positive quantum for RR
            let quantum = quantum.unwrap_or(1);
            Sim::new(kind, RoundRobin::new(quantum), processes).finish()
        }
        PolicyKind::Npp => Sim::new(kind, NonPreemptivePriority, processes).finish(),
        PolicyKind::Pp => Sim::new(kind, PreemptivePriority, processes).finish(),
        PolicyKind::Hrrn => Sim::new(kind, Hrrn, processes).finish(),
    }
}
