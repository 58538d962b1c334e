use rustc_hash::FxHashMap;
use thiserror::Error;

use super::{
    result::ScheduleResult,
    state::Ticks,
    timeline::Job,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuditError {
    #[error("segment for {job} at t={start} is empty")]
    EmptySegment { job: String, start: Ticks },
    #[error("segment for {job} at t={start} overlaps the previous one ending at t={prev_stop}")]
    Overlap { job: String, start: Ticks, prev_stop: Ticks },
    #[error("unaccounted gap between t={from} and t={to}")]
    Gap { from: Ticks, to: Ticks },
    #[error("timeline spans [{start}, {stop}) but processes span [{expected_start}, {expected_stop})")]
    Span {
        start: Ticks,
        stop: Ticks,
        expected_start: Ticks,
        expected_stop: Ticks,
    },
    #[error("timeline references unknown process {0}")]
    UnknownJob(String),
    #[error("process {0} is reported more than once")]
    Duplicate(String),
    #[error("process {label} ran before its arrival at t={arrival}")]
    RunBeforeArrival { label: String, arrival: Ticks },
    #[error("process {label} received {served} ticks of service for a burst of {burst}")]
    Conservation { label: String, served: Ticks, burst: Ticks },
    #[error("process {label} reports completion t={completion} but its last run ends at t={last_stop}")]
    Completion { label: String, completion: Ticks, last_stop: Ticks },
    #[error("process {0} has inconsistent turnaround, waiting or response metrics")]
    Metrics(String),
    #[error("process reports are not ordered by arrival then label")]
    Order,
}

#[derive(Default)]
struct Service {
    served: Ticks,
    first_start: Option<Ticks>,
    last_stop: Ticks,
}

/// Checks a finished schedule against the invariants every policy upholds:
/// segments are ordered and contiguous from the first arrival to the last
/// completion, each process receives exactly its burst, and the reported
/// metrics agree with the timeline.
pub fn audit(result: &ScheduleResult) -> Result<(), AuditError> {
    let mut service: FxHashMap<&str, Service> = FxHashMap::default();
    for report in &result.processes {
        if service.insert(report.label.as_str(), Service::default()).is_some() {
            return Err(AuditError::Duplicate(report.label.clone()));
        }
    }

    let mut prev_stop: Option<Ticks> = None;
    for segment in &result.timeline {
        if segment.start >= segment.stop {
            return Err(AuditError::EmptySegment {
                job: segment.job.to_string(),
                start: segment.start,
            });
        }
        if let Some(prev_stop) = prev_stop {
            if segment.start < prev_stop {
                return Err(AuditError::Overlap {
                    job: segment.job.to_string(),
                    start: segment.start,
                    prev_stop,
                });
            }
            if segment.start > prev_stop {
                return Err(AuditError::Gap {
                    from: prev_stop,
                    to: segment.start,
                });
            }
        }
        prev_stop = Some(segment.stop);

        if let Job::Proc(label) = &segment.job {
            let entry = service
                .get_mut(label.as_str())
                .ok_or_else(|| AuditError::UnknownJob(label.clone()))?;
            entry.served += segment.duration();
            entry.first_start.get_or_insert(segment.start);
            entry.last_stop = segment.stop;
        }
    }

    let expected_start = result.processes.iter().map(|p| p.arrival).min().unwrap_or(0);
    let expected_stop = result.processes.iter().map(|p| p.completion).max().unwrap_or(0);
    let start = result.timeline.first().map_or(0, |s| s.start);
    let stop = result.timeline.last().map_or(0, |s| s.stop);
    if (start, stop) != (expected_start, expected_stop) {
        return Err(AuditError::Span {
            start,
            stop,
            expected_start,
            expected_stop,
        });
    }

    for report in &result.processes {
        let label = report.label.clone();
        let entry = &service[report.label.as_str()];
        if entry.served != report.burst {
            return Err(AuditError::Conservation {
                label,
                served: entry.served,
                burst: report.burst,
            });
        }
        if entry.first_start.is_some_and(|s| s < report.arrival) {
            return Err(AuditError::RunBeforeArrival {
                label,
                arrival: report.arrival,
            });
        }
        if entry.last_stop != report.completion {
            return Err(AuditError::Completion {
                label,
                completion: report.completion,
                last_stop: entry.last_stop,
            });
        }
        let consistent = report.completion >= report.arrival + report.burst
            && report.turnaround == report.completion - report.arrival
            && report.waiting == report.turnaround - report.burst
            && Some(report.arrival + report.response) == entry.first_start
            && report.response <= report.waiting;
        if !consistent {
            return Err(AuditError::Metrics(label));
        }
    }

    let ordered = result
        .processes
        .windows(2)
        .all(|w| (w[0].arrival, &w[0].label) <= (w[1].arrival, &w[1].label));
    if !ordered {
        return Err(AuditError::Order);
    }

    Ok(())
}
