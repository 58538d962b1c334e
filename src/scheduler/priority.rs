use super::{Policy, ProcId, ProcTable, Ticks, position_min_by_key};

// Lower value wins; equal priorities fall back to arrival, then input position
fn pick_by_priority(table: &ProcTable, ready: &[ProcId]) -> usize {
    position_min_by_key(table, ready, |p| (p.priority, p.arrival, p.id))
}

/// Runs the highest-priority ready process to completion.
pub struct NonPreemptivePriority;

impl Policy for NonPreemptivePriority {
    fn pick(&self, table: &ProcTable, ready: &[ProcId], _now: Ticks) -> usize {
        pick_by_priority(table, ready)
    }
}

/// Like [`NonPreemptivePriority`], but an arrival with a strictly smaller
/// priority value interrupts the running process at its arrival instant.
pub struct PreemptivePriority;

impl Policy for PreemptivePriority {
    fn pick(&self, table: &ProcTable, ready: &[ProcId], _now: Ticks) -> usize {
        pick_by_priority(table, ready)
    }

    fn preemptive(&self) -> bool {
        true
    }

    fn preempts(&self, table: &ProcTable, running: ProcId, _elapsed: Ticks, arriving: ProcId) -> bool {
        table.proc(arriving).priority < table.proc(running).priority
    }
}

#[cfg(test)]
mod tests {
    use crate::{PolicyKind, ScheduleResult, simulate};

    fn spans(result: &ScheduleResult) -> Vec<(String, u64, u64)> {
        result
            .timeline
            .iter()
            .map(|s| (s.job.to_string(), s.start, s.stop))
            .collect()
    }

    #[test]
    fn npp_orders_ready_set_by_priority() {
        let result = simulate(
            PolicyKind::Npp,
            &[0, 1, 2, 3],
            &[4, 3, 2, 1],
            None,
            Some(&[3, 2, 1, 1][..]),
        )
        .unwrap();

        let order: Vec<_> = spans(&result).into_iter().map(|(job, ..)| job).collect();
        // C and D share priority 1; C arrived first.
        assert_eq!(order, ["A", "C", "D", "B"]);
    }

    #[test]
    fn npp_does_not_interrupt() {
        let result = simulate(PolicyKind::Npp, &[0, 1], &[5, 1], None, Some(&[9, 0][..])).unwrap();
        assert_eq!(spans(&result), [("A".into(), 0, 5), ("B".into(), 5, 6)]);
    }

    #[test]
    fn pp_interrupts_on_strictly_higher_priority() {
        let result = simulate(PolicyKind::Pp, &[0, 1], &[5, 2], None, Some(&[2, 1][..])).unwrap();

        assert_eq!(
            spans(&result),
            [("A".into(), 0, 1), ("B".into(), 1, 3), ("A".into(), 3, 7)]
        );
        assert_eq!(result.processes[0].waiting, 2);
        assert_eq!(result.processes[0].response, 0);
    }

    #[test]
    fn pp_equal_priority_keeps_running() {
        let result = simulate(PolicyKind::Pp, &[0, 1], &[3, 1], None, Some(&[1, 1][..])).unwrap();
        assert_eq!(spans(&result), [("A".into(), 0, 3), ("B".into(), 3, 4)]);
    }

    #[test]
    fn pp_skips_to_future_arrival_after_idle() {
        // A finishes at 2; B arrives at 6 and is interrupted by C at 7.
        let result = simulate(
            PolicyKind::Pp,
            &[0, 6, 7],
            &[2, 4, 1],
            None,
            Some(&[1, 5, 0][..]),
        )
        .unwrap();

        assert_eq!(
            spans(&result),
            [
                ("A".into(), 0, 2),
                ("idle".into(), 2, 6),
                ("B".into(), 6, 7),
                ("C".into(), 7, 8),
                ("B".into(), 8, 11),
            ]
        );
        let b = &result.processes[1];
        assert_eq!((b.completion, b.waiting, b.response), (11, 1, 0));
    }

    #[test]
    fn pp_chain_of_preemptions() {
        let result = simulate(
            PolicyKind::Pp,
            &[0, 1, 2],
            &[4, 4, 1],
            None,
            Some(&[3, 2, 1][..]),
        )
        .unwrap();

        let order: Vec<_> = spans(&result).into_iter().map(|(job, ..)| job).collect();
        assert_eq!(order, ["A", "B", "C", "B", "A"]);
        let completions: Vec<_> = result.processes.iter().map(|p| p.completion).collect();
        assert_eq!(completions, [9, 6, 3]);
    }
}
