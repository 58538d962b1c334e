//! Plain-text rendering of a [`ScheduleResult`].

use std::fmt::Write;

use crate::core::result::ScheduleResult;

pub fn render(result: &ScheduleResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", result.policy);
    out.push_str(&render_table(result));
    out.push_str(&render_gantt(result));
    out.push('\n');
    out.push_str(&render_averages(result));
    out
}

pub fn render_table(result: &ScheduleResult) -> String {
    let with_priority = result.processes.iter().any(|p| p.priority.is_some());
    let mut out = String::new();

    let _ = write!(out, "{:<6}{:>8}{:>8}", "job", "arrival", "burst");
    if with_priority {
        let _ = write!(out, "{:>9}", "priority");
    }
    let _ = writeln!(
        out,
        "{:>8}{:>8}{:>8}{:>9}{:>8}",
        "finish", "tat", "wait", "resp", "w.tat"
    );

    for p in &result.processes {
        let _ = write!(out, "{:<6}{:>8}{:>8}", p.label, p.arrival, p.burst);
        if with_priority {
            match p.priority {
                Some(priority) => {
                    let _ = write!(out, "{priority:>9}");
                }
                None => out.push_str(&" ".repeat(9)),
            }
        }
        let _ = writeln!(
            out,
            "{:>8}{:>8}{:>8}{:>9}{:>8.2}",
            p.completion, p.turnaround, p.waiting, p.response, p.weighted_turnaround
        );
    }
    out
}

/// One line of `|job start-stop|` cells.
pub fn render_gantt(result: &ScheduleResult) -> String {
    let mut out = String::from("|");
    for segment in &result.timeline {
        let _ = write!(out, " {} {}-{} |", segment.job, segment.start, segment.stop);
    }
    out
}

pub fn render_averages(result: &ScheduleResult) -> String {
    let a = &result.averages;
    format!(
        "avg turnaround {:.2}  avg waiting {:.2}  avg response {:.2}  avg weighted turnaround {:.2}\n",
        a.turnaround, a.waiting, a.response, a.weighted_turnaround
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PolicyKind, simulate};

    #[test]
    fn gantt_line() {
        let result = simulate(PolicyKind::Fcfs, &[0, 3], &[1, 1], None, None).unwrap();
        assert_eq!(render_gantt(&result), "| A 0-1 | idle 1-3 | B 3-4 |");
    }

    #[test]
    fn table_includes_priority_column_when_present() {
        let result = simulate(PolicyKind::Npp, &[0], &[2], None, Some(&[4][..])).unwrap();
        let table = render_table(&result);
        assert!(table.lines().next().unwrap().contains("priority"));
        assert_eq!(table.lines().count(), 2);

        let result = simulate(PolicyKind::Fcfs, &[0], &[2], None, None).unwrap();
        assert!(!render_table(&result).contains("priority"));
    }

    #[test]
    fn averages_use_two_decimals() {
        let result = simulate(PolicyKind::Fcfs, &[0, 1, 2], &[4, 3, 2], None, None).unwrap();
        assert!(render_averages(&result).starts_with("avg turnaround 5.67  avg waiting 2.67"));
        assert!(render(&result).starts_with("== FCFS ==\n"));
    }
}
