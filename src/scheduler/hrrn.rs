use std::cmp::{Ordering, Reverse};

use super::{Policy, ProcId, ProcTable, Ticks, position_min_by_key};
use crate::core::state::Proc;

/// `(waiting + burst) / burst`, kept as an exact fraction.
#[derive(Debug, Clone, Copy)]
pub struct ResponseRatio {
    num: u128,
    den: u128,
}

impl ResponseRatio {
    pub fn at(proc: &Proc, now: Ticks) -> Self {
        let waited = now.saturating_sub(proc.arrival);
        Self {
            num: u128::from(waited) + u128::from(proc.burst),
            den: u128::from(proc.burst),
        }
    }

    pub fn as_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl PartialEq for ResponseRatio {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ResponseRatio {}

impl PartialOrd for ResponseRatio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ResponseRatio {
    fn cmp(&self, other: &Self) -> Ordering {
        // Validated horizons keep num and den below 2^64, so products fit in u128
        (self.num * other.den).cmp(&(other.num * self.den))
    }
}

/// Highest response ratio next, non-preemptive. The ratio is recomputed from
/// the current clock at every decision point.
pub struct Hrrn;

impl Policy for Hrrn {
    fn pick(&self, table: &ProcTable, ready: &[ProcId], now: Ticks) -> usize {
        position_min_by_key(table, ready, |p| {
            (Reverse(ResponseRatio::at(p, now)), p.arrival, p.id)
        })
    }
}
