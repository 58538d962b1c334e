use crate::{core::state::Ticks, error::InvalidInput, scheduler::PolicyKind};

// Letters cover up to this many processes; larger sets use P1, P2, ...
pub const LETTER_LABELS: usize = 26;

/// Validated input process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub label: String,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub priority: Option<i64>,
}

/// Label for the process at input position `index` out of `count`.
pub fn label_for(index: usize, count: usize) -> String {
    match u8::try_from(index) {
        Ok(offset) if count <= LETTER_LABELS => char::from(b'A' + offset).to_string(),
        _ => format!("P{}", index + 1),
    }
}

/// Validates raw sequences and builds the process set, labelled by input
/// position. Nothing is simulated unless every check passes.
pub fn normalize(
    policy: PolicyKind,
    arrival: &[i64],
    burst: &[i64],
    priority: Option<&[i64]>,
) -> Result<Vec<Process>, InvalidInput> {
    let count = arrival.len();
    if count == 0 && burst.is_empty() {
        return Err(InvalidInput::Empty);
    }
    check_len("burst times", count, burst.len())?;
    if let Some(priority) = priority {
        check_len("priorities", count, priority.len())?;
    }
    if policy.needs_priority() && priority.is_none() {
        return Err(InvalidInput::MissingPriorities(policy));
    }

    let mut horizon: Ticks = 0;
    let mut latest: Ticks = 0;
    let processes = (0..count)
        .map(|i| {
            let label = label_for(i, count);
            let arrival = Ticks::try_from(arrival[i]).map_err(|_| InvalidInput::NegativeArrival {
                label: label.clone(),
                arrival: arrival[i],
            })?;
            let burst = match Ticks::try_from(burst[i]) {
                Ok(b) if b > 0 => b,
                _ => {
                    return Err(InvalidInput::NonPositiveBurst {
                        label,
                        burst: burst[i],
                    });
                }
            };
            horizon = horizon.checked_add(burst).ok_or(InvalidInput::HorizonOverflow)?;
            latest = latest.max(arrival);

            Ok(Process {
                label,
                arrival,
                burst,
                priority: priority.map(|p| p[i]),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    latest.checked_add(horizon).ok_or(InvalidInput::HorizonOverflow)?;
    Ok(processes)
}

pub fn normalize_quantum(policy: PolicyKind, quantum: Option<i64>) -> Result<Option<Ticks>, InvalidInput> {
    match quantum {
        None if policy.needs_quantum() => Err(InvalidInput::MissingQuantum(policy)),
        None => Ok(None),
        Some(q) => match Ticks::try_from(q) {
            Ok(q) if q > 0 => Ok(Some(q)),
            _ if policy.needs_quantum() => Err(InvalidInput::NonPositiveQuantum(q)),
            // Ignored by every policy but RR
            _ => Ok(None),
        },
    }
}

fn check_len(field: &'static str, expected: usize, found: usize) -> Result<(), InvalidInput> {
    if expected == found {
        Ok(())
    } else {
        Err(InvalidInput::LengthMismatch {
            field,
            expected,
            found,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_switch_to_numbers_past_26() {
        assert_eq!(label_for(0, 3), "A");
        assert_eq!(label_for(25, 26), "Z");
        assert_eq!(label_for(0, 27), "P1");
        assert_eq!(label_for(26, 27), "P27");
    }

    #[test]
    fn labels_follow_input_order_not_arrival() {
        let procs = normalize(PolicyKind::Fcfs, &[9, 0], &[1, 1], None).unwrap();
        assert_eq!(procs[0].label, "A");
        assert_eq!(procs[0].arrival, 9);
    }

    #[test]
    fn rejects_bad_shapes() {
        assert_eq!(normalize(PolicyKind::Fcfs, &[], &[], None), Err(InvalidInput::Empty));
        assert_eq!(
            normalize(PolicyKind::Fcfs, &[0, 1], &[1], None),
            Err(InvalidInput::LengthMismatch {
                field: "burst times",
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            normalize(PolicyKind::Sjf, &[0], &[1], Some(&[1, 2][..])),
            Err(InvalidInput::LengthMismatch {
                field: "priorities",
                expected: 1,
                found: 2
            })
        );
        assert_eq!(
            normalize(PolicyKind::Pp, &[0], &[1], None),
            Err(InvalidInput::MissingPriorities(PolicyKind::Pp))
        );
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            normalize(PolicyKind::Fcfs, &[0, -1], &[1, 1], None),
            Err(InvalidInput::NegativeArrival {
                label: "B".into(),
                arrival: -1
            })
        );
        assert_eq!(
            normalize(PolicyKind::Fcfs, &[0], &[0], None),
            Err(InvalidInput::NonPositiveBurst {
                label: "A".into(),
                burst: 0
            })
        );
        assert_eq!(
            normalize(PolicyKind::Fcfs, &[i64::MAX, 0], &[i64::MAX, i64::MAX], None),
            Err(InvalidInput::HorizonOverflow)
        );
    }

    #[test]
    fn quantum_rules() {
        assert_eq!(
            normalize_quantum(PolicyKind::Rr, None),
            Err(InvalidInput::MissingQuantum(PolicyKind::Rr))
        );
        assert_eq!(
            normalize_quantum(PolicyKind::Rr, Some(0)),
            Err(InvalidInput::NonPositiveQuantum(0))
        );
        assert_eq!(normalize_quantum(PolicyKind::Rr, Some(3)), Ok(Some(3)));
        assert_eq!(normalize_quantum(PolicyKind::Fcfs, Some(-2)), Ok(None));
    }
}
