use average::{Estimate, Mean};
use serde::Serialize;

use super::{
    state::{ProcTable, Ticks},
    timeline::Segment,
};
use crate::scheduler::PolicyKind;

/// Metrics for one finished process.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessReport {
    pub label: String,
    pub arrival: Ticks,
    pub burst: Ticks,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    pub completion: Ticks,
    pub turnaround: Ticks,
    pub waiting: Ticks,
    pub response: Ticks,
    pub weighted_turnaround: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Averages {
    pub turnaround: f64,
    pub waiting: f64,
    pub weighted_turnaround: f64,
    pub response: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleResult {
    pub policy: PolicyKind,
    /// Ascending arrival, ties broken by label.
    pub processes: Vec<ProcessReport>,
    pub timeline: Vec<Segment>,
    pub averages: Averages,
}

impl ScheduleResult {
    /// Builds the report from a finished run. `has_priority` controls whether
    /// priorities are echoed back.
    pub fn from_run(
        policy: PolicyKind,
        table: &ProcTable,
        timeline: Vec<Segment>,
        has_priority: bool,
    ) -> Self {
        let mut processes: Vec<ProcessReport> = table
            .iter()
            .map(|p| {
                let completion = p.completion.unwrap_or_default();
                let first_dispatch = p.first_dispatch.unwrap_or(p.arrival);
                let turnaround = completion.saturating_sub(p.arrival);
                ProcessReport {
                    label: p.label.clone(),
                    arrival: p.arrival,
                    burst: p.burst,
                    priority: has_priority.then_some(p.priority),
                    completion,
                    turnaround,
                    waiting: turnaround.saturating_sub(p.burst),
                    response: first_dispatch - p.arrival,
                    weighted_turnaround: turnaround as f64 / p.burst as f64,
                }
            })
            .collect();
        processes.sort_by(|a, b| a.arrival.cmp(&b.arrival).then_with(|| a.label.cmp(&b.label)));

        let averages = Averages {
            turnaround: avg(processes.iter().map(|p| p.turnaround as f64)),
            waiting: avg(processes.iter().map(|p| p.waiting as f64)),
            weighted_turnaround: avg(processes.iter().map(|p| p.weighted_turnaround)),
            response: avg(processes.iter().map(|p| p.response as f64)),
        };

        Self {
            policy,
            processes,
            timeline,
            averages,
        }
    }

    pub fn makespan(&self) -> Ticks {
        self.timeline.last().map_or(0, |s| s.stop)
    }

    pub fn idle_time(&self) -> Ticks {
        self.timeline
            .iter()
            .filter(|s| s.is_idle())
            .map(Segment::duration)
            .sum()
    }

    pub fn process(&self, label: &str) -> Option<&ProcessReport> {
        self.processes.iter().find(|p| p.label == label)
    }
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<Mean>().estimate()
}
