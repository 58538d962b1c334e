//! Workload sources: whitespace-separated lists, workload files and a seeded
//! Bernoulli arrival generator.
//!
//! A workload file has one `key: values` line per sequence:
//!
//! ```text
//! # three processes
//! arrival:  0 1 2
//! burst:    4 3 2
//! priority: 2 1 3
//! ```
//!
//! `priority` is optional. Blank lines and `#` comments are ignored.

use rand::prelude::*;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkloadError {
    #[error("line {line}: `{token}` is not an integer")]
    BadToken { line: usize, token: String },
    #[error("line {line}: expected `key: values`")]
    MissingKey { line: usize },
    #[error("line {line}: unknown key `{key}` (expected arrival, burst or priority)")]
    UnknownKey { line: usize, key: String },
    #[error("line {line}: `{key}` given twice")]
    DuplicateKey { line: usize, key: &'static str },
    #[error("workload has no `{0}` line")]
    MissingField(&'static str),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Workload {
    pub arrival: Vec<i64>,
    pub burst: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Vec<i64>>,
}

/// Splits `input` on whitespace into integers. Line numbers in errors are
/// 1-based and refer to `line`.
pub fn parse_list(input: &str, line: usize) -> Result<Vec<i64>, WorkloadError> {
    input
        .split_whitespace()
        .map(|token| {
            token.parse().map_err(|_| WorkloadError::BadToken {
                line,
                token: token.to_owned(),
            })
        })
        .collect()
}

impl Workload {
    pub fn from_lists(arrival: &str, burst: &str, priority: Option<&str>) -> Result<Self, WorkloadError> {
        Ok(Self {
            arrival: parse_list(arrival, 1)?,
            burst: parse_list(burst, 1)?,
            priority: priority.map(|p| parse_list(p, 1)).transpose()?,
        })
    }

    pub fn parse(text: &str) -> Result<Self, WorkloadError> {
        let mut arrival = None;
        let mut burst = None;
        let mut priority = None;

        for (i, raw) in text.lines().enumerate() {
            let line = i + 1;
            let content = raw.split('#').next().unwrap_or_default().trim();
            if content.is_empty() {
                continue;
            }

            let (key, values) = content
                .split_once(':')
                .ok_or(WorkloadError::MissingKey { line })?;
            let (key, slot) = match key.trim().to_ascii_lowercase().as_str() {
                "arrival" => ("arrival", &mut arrival),
                "burst" => ("burst", &mut burst),
                "priority" => ("priority", &mut priority),
                other => {
                    return Err(WorkloadError::UnknownKey {
                        line,
                        key: other.to_owned(),
                    });
                }
            };
            if slot.is_some() {
                return Err(WorkloadError::DuplicateKey { line, key });
            }
            *slot = Some(parse_list(values, line)?);
        }

        Ok(Self {
            arrival: arrival.ok_or(WorkloadError::MissingField("arrival"))?,
            burst: burst.ok_or(WorkloadError::MissingField("burst"))?,
            priority,
        })
    }

    pub fn len(&self) -> usize {
        self.arrival.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrival.is_empty()
    }
}

/// Parameters of a Bernoulli workload: at each tick a process arrives with
/// probability `p_arrival`, and is short with probability `p_short`.
#[derive(Debug, Clone, Copy)]
pub struct BernoulliParams {
    pub ticks: u64,
    pub p_arrival: f64,
    pub p_short: f64,
    pub short_ticks: i64,
    pub long_ticks: i64,
    /// Priorities are drawn uniformly from `0..priority_levels`.
    pub priority_levels: i64,
}

impl Default for BernoulliParams {
    fn default() -> Self {
        Self {
            ticks: 50,
            p_arrival: 0.3,
            p_short: 0.3,
            short_ticks: 2,
            long_ticks: 6,
            priority_levels: 5,
        }
    }
}

/// Deterministic for a given `seed`. May be empty when no tick draws an
/// arrival.
pub fn bernoulli(params: &BernoulliParams, seed: u64) -> Workload {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut workload = Workload {
        priority: Some(Vec::new()),
        ..Workload::default()
    };
    let levels = params.priority_levels.max(1);

    for t in 0..params.ticks {
        if rng.random::<f64>() < params.p_arrival {
            let burst = if rng.random::<f64>() < params.p_short {
                params.short_ticks
            } else {
                params.long_ticks
            };

            workload.arrival.push(t as i64);
            workload.burst.push(burst);
            if let Some(priority) = workload.priority.as_mut() {
                priority.push(rng.random_range(0..levels));
            }
        }
    }

    workload
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_split_on_any_whitespace() {
        assert_eq!(parse_list(" 0\t1\n 2 ", 1), Ok(vec![0, 1, 2]));
        assert_eq!(parse_list("", 1), Ok(vec![]));
        assert_eq!(
            parse_list("1 x 3", 4),
            Err(WorkloadError::BadToken {
                line: 4,
                token: "x".into()
            })
        );
    }

    #[test]
    fn parses_workload_files() {
        let text = "# demo\narrival: 0 1 2\n\nBurst: 4 3 2  # trailing\npriority: 2 1 3\n";
        let workload = Workload::parse(text).unwrap();
        assert_eq!(workload.arrival, [0, 1, 2]);
        assert_eq!(workload.burst, [4, 3, 2]);
        assert_eq!(workload.priority, Some(vec![2, 1, 3]));
    }

    #[test]
    fn workload_file_errors() {
        assert_eq!(
            Workload::parse("arrival: 0\n"),
            Err(WorkloadError::MissingField("burst"))
        );
        assert_eq!(
            Workload::parse("arrival: 0\narrival: 1\n"),
            Err(WorkloadError::DuplicateKey {
                line: 2,
                key: "arrival"
            })
        );
        assert_eq!(
            Workload::parse("quantum: 2\n"),
            Err(WorkloadError::UnknownKey {
                line: 1,
                key: "quantum".into()
            })
        );
        assert_eq!(
            Workload::parse("0 1 2\n"),
            Err(WorkloadError::MissingKey { line: 1 })
        );
    }

    #[test]
    fn bernoulli_is_seeded() {
        let params = BernoulliParams::default();
        let a = bernoulli(&params, 7);
        assert_eq!(a, bernoulli(&params, 7));
        assert_eq!(a.arrival.len(), a.burst.len());
        assert!(a.burst.iter().all(|&b| b == 2 || b == 6));
        assert!(a.arrival.windows(2).all(|w| w[0] < w[1]));
        assert!(a.priority.unwrap().iter().all(|p| (0..5).contains(p)));
    }
}
