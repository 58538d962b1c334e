//! Discrete-event simulation of single-CPU process scheduling.
//!
//! [`simulate`] runs one of seven policies (FCFS, SJF, SRTF, RR, NPP, PP,
//! HRRN) over per-process arrival and burst times and returns the Gantt
//! timeline together with per-process and average metrics.
//!
//! ```
//! use sched_sim::{PolicyKind, simulate};
//!
//! let result = simulate(PolicyKind::Srtf, &[0, 1], &[5, 2], None, None)?;
//! assert_eq!(result.process("A").map(|p| p.completion), Some(7));
//! # Ok::<(), sched_sim::InvalidInput>(())
//! ```

pub mod core;
pub mod error;
pub mod scheduler;
pub mod sim;

pub use crate::core::{AuditError, Job, ProcessReport, ScheduleResult, Segment, audit};
pub use error::InvalidInput;
pub use scheduler::{Policy, PolicyKind};
pub use sim::{Workload, simulate, simulate_all, simulate_workload};
