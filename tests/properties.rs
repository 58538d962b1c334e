//! Property tests: schedule invariants for every policy over random
//! workloads.

use proptest::prelude::*;

use sched_sim::{PolicyKind, audit, simulate};

#[derive(Clone, Debug)]
struct Case {
    arrival: Vec<i64>,
    burst: Vec<i64>,
    priority: Vec<i64>,
    quantum: i64,
}

fn case_strategy() -> impl Strategy<Value = Case> {
    (1usize..=12)
        .prop_flat_map(|n| {
            (
                proptest::collection::vec(0i64..30, n),
                proptest::collection::vec(1i64..10, n),
                proptest::collection::vec(-2i64..4, n),
                1i64..5,
            )
        })
        .prop_map(|(arrival, burst, priority, quantum)| Case {
            arrival,
            burst,
            priority,
            quantum,
        })
}

fn run(kind: PolicyKind, case: &Case) -> sched_sim::ScheduleResult {
    simulate(
        kind,
        &case.arrival,
        &case.burst,
        Some(case.quantum),
        Some(case.priority.as_slice()),
    )
    .expect("generated cases are valid")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_every_policy_passes_audit(case in case_strategy()) {
        for kind in PolicyKind::ALL {
            let result = run(kind, &case);
            prop_assert_eq!(audit(&result), Ok(()), "{}", kind);
            prop_assert_eq!(result.processes.len(), case.arrival.len());
        }
    }

    #[test]
    fn prop_idempotent(case in case_strategy()) {
        for kind in PolicyKind::ALL {
            prop_assert_eq!(run(kind, &case), run(kind, &case));
        }
    }

    #[test]
    fn prop_total_work_is_policy_independent(case in case_strategy()) {
        // Every policy here is work-conserving, so busy and idle time match FCFS.
        let fcfs = run(PolicyKind::Fcfs, &case);
        for kind in PolicyKind::ALL {
            let result = run(kind, &case);
            prop_assert_eq!(result.makespan(), fcfs.makespan(), "{}", kind);
            prop_assert_eq!(result.idle_time(), fcfs.idle_time(), "{}", kind);
        }
    }

    #[test]
    fn prop_non_preemptive_runs_are_whole(case in case_strategy()) {
        for kind in PolicyKind::ALL.into_iter().filter(|k| !k.is_preemptive()) {
            let result = run(kind, &case);
            let busy = result.timeline.iter().filter(|s| !s.is_idle()).count();
            prop_assert_eq!(busy, case.arrival.len(), "{}", kind);
        }
    }

    #[test]
    fn prop_srtf_minimizes_mean_waiting(case in case_strategy()) {
        let srtf = run(PolicyKind::Srtf, &case);
        for kind in PolicyKind::ALL {
            let other = run(kind, &case);
            prop_assert!(srtf.averages.waiting <= other.averages.waiting + 1e-9, "{}", kind);
        }
    }

    #[test]
    fn prop_rr_slices_bounded_by_quantum(case in case_strategy()) {
        let result = run(PolicyKind::Rr, &case);
        let quantum = case.quantum as u64;
        prop_assert!(result
            .timeline
            .iter()
            .filter(|s| !s.is_idle())
            .all(|s| s.duration() <= quantum));
    }
}
