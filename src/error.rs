use thiserror::Error;

use crate::scheduler::PolicyKind;

/// Rejected simulation request. Raised before any simulation work starts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("no processes to schedule")]
    Empty,
    #[error("{field} has {found} values but {expected} processes were given")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("{0} requires a time quantum")]
    MissingQuantum(PolicyKind),
    #[error("time quantum must be positive, got {0}")]
    NonPositiveQuantum(i64),
    #[error("{0} requires one priority per process")]
    MissingPriorities(PolicyKind),
    #[error("process {label} has arrival time {arrival}; arrival times cannot be negative")]
    NegativeArrival { label: String, arrival: i64 },
    #[error("process {label} has burst time {burst}; burst times must be positive")]
    NonPositiveBurst { label: String, burst: i64 },
    #[error("latest arrival plus total burst time exceeds the simulated clock range")]
    HorizonOverflow,
}
