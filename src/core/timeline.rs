use std::fmt;

use serde::Serialize;

use super::state::Ticks;

pub const IDLE_LABEL: &str = "idle";

/// Occupant of the CPU during one segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Job {
    Proc(String),
    Idle,
}

impl Job {
    pub fn label(&self) -> &str {
        match self {
            Self::Proc(label) => label,
            Self::Idle => IDLE_LABEL,
        }
    }
}

impl From<Job> for String {
    fn from(job: Job) -> Self {
        match job {
            Job::Proc(label) => label,
            Job::Idle => IDLE_LABEL.to_owned(),
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One uninterrupted span of CPU occupancy, `[start, stop)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub job: Job,
    pub start: Ticks,
    pub stop: Ticks,
}

impl Segment {
    pub fn duration(&self) -> Ticks {
        self.stop - self.start
    }

    pub fn is_idle(&self) -> bool {
        self.job == Job::Idle
    }
}

/// Append-only Gantt sequence built by the driver.
#[derive(Debug, Default)]
pub struct Timeline {
    segments: Vec<Segment>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_run(&mut self, label: &str, start: Ticks, stop: Ticks) {
        self.push(Segment {
            job: Job::Proc(label.to_owned()),
            start,
            stop,
        });
    }

    pub fn push_idle(&mut self, start: Ticks, stop: Ticks) {
        self.push(Segment {
            job: Job::Idle,
            start,
            stop,
        });
    }

    fn push(&mut self, segment: Segment) {
        debug_assert!(
            segment.start < segment.stop,
            "Empty segment for {} at t={}",
            segment.job,
            segment.start
        );
        if let Some(last) = self.segments.last() {
            debug_assert!(
                last.stop <= segment.start,
                "Segment for {} at t={} overlaps {} ending at t={}",
                segment.job,
                segment.start,
                last.job,
                last.stop
            );
        }
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }
}
