pub mod fifo;
pub mod hrrn;
pub mod priority;
pub mod rr;
pub mod sjf;
pub mod srtf;

use std::{fmt, str::FromStr};

use serde::Serialize;
use thiserror::Error;

use crate::core::state::{Proc, ProcId, ProcTable, Ticks};
pub use fifo::Fcfs;
pub use hrrn::{Hrrn, ResponseRatio};
pub use priority::{NonPreemptivePriority, PreemptivePriority};
pub use rr::RoundRobin;
pub use sjf::Sjf;
pub use srtf::Srtf;

/// Selection and interruption rules for one scheduling policy.
///
/// The driver owns the clock, the ready set and the timeline. A policy only
/// answers three questions: which ready process runs next, how long a single
/// dispatch may last, and whether an arrival interrupts the running process.
pub trait Policy {
    /// Position in `ready` of the process to dispatch at `now`.
    ///
    /// `ready` is never empty and lists processes in the order they entered
    /// the ready set. The ranking must be derived from `table` and `now` on
    /// every call.
    fn pick(&self, table: &ProcTable, ready: &[ProcId], now: Ticks) -> usize;

    /// Longest uninterrupted run granted per dispatch. `None` runs the
    /// process until it completes or is preempted.
    fn slice(&self) -> Option<Ticks> {
        None
    }

    fn preemptive(&self) -> bool {
        false
    }

    /// Whether `arriving` interrupts `running` after it has run for
    /// `elapsed` ticks of the current dispatch.
    fn preempts(&self, _table: &ProcTable, _running: ProcId, _elapsed: Ticks, _arriving: ProcId) -> bool {
        false
    }
}

// Position of the ready process with the smallest key
pub(crate) fn position_min_by_key<K: Ord>(
    table: &ProcTable,
    ready: &[ProcId],
    key: impl Fn(&Proc) -> K,
) -> usize {
    ready
        .iter()
        .enumerate()
        .min_by_key(|&(_, &id)| key(table.proc(id)))
        .map_or(0, |(slot, _)| slot)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PolicyKind {
    Fcfs,
    Sjf,
    Srtf,
    Rr,
    Npp,
    Pp,
    Hrrn,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 7] = [
        Self::Fcfs,
        Self::Sjf,
        Self::Srtf,
        Self::Rr,
        Self::Npp,
        Self::Pp,
        Self::Hrrn,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Srtf => "SRTF",
            Self::Rr => "RR",
            Self::Npp => "NPP",
            Self::Pp => "PP",
            Self::Hrrn => "HRRN",
        }
    }

    pub fn needs_quantum(self) -> bool {
        self == Self::Rr
    }

    pub fn needs_priority(self) -> bool {
        matches!(self, Self::Npp | Self::Pp)
    }

    pub fn is_preemptive(self) -> bool {
        matches!(self, Self::Srtf | Self::Rr | Self::Pp)
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown scheduling policy `{0}` (expected one of FCFS, SJF, SRTF, RR, NPP, PP, HRRN)")]
pub struct UnknownPolicy(pub String);

impl FromStr for PolicyKind {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPolicy(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("srtf".parse(), Ok(PolicyKind::Srtf));
        assert_eq!(" HRRN ".parse(), Ok(PolicyKind::Hrrn));
        assert_eq!(
            "lottery".parse::<PolicyKind>(),
            Err(UnknownPolicy("lottery".into()))
        );
    }

    #[test]
    fn requirements() {
        let needs_priority: Vec<_> = PolicyKind::ALL
            .into_iter()
            .filter(|k| k.needs_priority())
            .collect();
        assert_eq!(needs_priority, [PolicyKind::Npp, PolicyKind::Pp]);
        assert!(PolicyKind::Rr.needs_quantum());
        assert!(!PolicyKind::Hrrn.is_preemptive());
    }
}
