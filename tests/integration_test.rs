// Integration tests for the sorting stepper

use sortty::algorithms::Algorithm;
use sortty::interpreter::engine::{StepOutcome, Stepper};
use sortty::interpreter::errors::StepError;
use sortty::interpreter::machine::Machine;
use sortty::memory::SortArray;
use sortty::sink::{NullSink, RecordingSink, SinkEvent};
use sortty::snapshot::Line;

fn sorted(values: &[i32]) -> Vec<i32> {
    let mut expected = values.to_vec();
    expected.sort();
    expected
}

fn inputs_for(algorithm: Algorithm) -> Vec<Vec<i32>> {
    let mut inputs = vec![
        vec![],
        vec![1],
        vec![2, 1],
        vec![3, 1, 2],
        vec![5, 4, 3, 2, 1],
        vec![1, 2, 3, 4, 5],
        vec![4, 4, 1, 4, 1],
        vec![38, 27, 43, 3, 9, 82, 10, 57, 21, 64],
    ];
    if !algorithm.uses_buckets() {
        inputs.push(vec![0, -7, 12, -7, 3, -100]);
    }
    inputs
}

#[test]
fn test_every_algorithm_sorts_and_rewinds() {
    for algorithm in Algorithm::ALL {
        for values in inputs_for(algorithm) {
            let mut stepper = Stepper::new(algorithm, values.clone(), NullSink).expect("valid input");

            let steps = stepper.run_to_end().expect("run to end");
            assert_eq!(
                stepper.array().to_vec(),
                Some(sorted(&values)),
                "{} on {:?}",
                algorithm,
                values
            );
            assert!(stepper.is_finished());
            assert!(stepper.current().frames().is_empty(), "{} leaves frames", algorithm);
            assert_eq!(stepper.array().buckets().total_len(), 0);

            let undone = stepper.rewind_to_start().expect("rewind");
            assert_eq!(undone, steps);
            assert_eq!(stepper.history_len(), 1);
            assert_eq!(stepper.swaps(), 0);
            assert_eq!(stepper.comparisons(), 0);
            assert_eq!(stepper.array().to_vec(), Some(values.clone()));
        }
    }
}

#[test]
fn test_bubble_sort_scenario() {
    let mut stepper = Stepper::new(Algorithm::Bubble, vec![3, 1, 2], RecordingSink::new()).unwrap();

    let mut operations = Vec::new();
    while stepper.step_forward().unwrap() == StepOutcome::Stepped {
        operations.extend(stepper.sink_mut().drain().into_iter().filter(|e| {
            matches!(e, SinkEvent::CompareGreater(..) | SinkEvent::Swap(..))
        }));
    }

    assert_eq!(operations[0], SinkEvent::CompareGreater(0, 1, true));
    assert_eq!(operations[1], SinkEvent::Swap(0, 1));
    assert_eq!(stepper.array().to_vec(), Some(vec![1, 2, 3]));
    assert_eq!(stepper.comparisons(), 3);
    assert_eq!(stepper.swaps(), 2);

    let events = stepper.sink_mut().drain();
    assert!(events.ends_with(&[
        SinkEvent::MoveFinished,
        SinkEvent::SortingFinished,
        SinkEvent::Counts {
            swaps: 2,
            comparisons: 3
        },
    ]));
}

#[test]
fn test_step_backward_reverses_swap_and_redisplays() {
    let mut stepper = Stepper::new(Algorithm::Bubble, vec![3, 1, 2], RecordingSink::new()).unwrap();
    // outer, inner, compare, swap
    for _ in 0..4 {
        stepper.step_forward().unwrap();
    }
    assert_eq!(stepper.array().to_vec(), Some(vec![1, 3, 2]));
    stepper.sink_mut().drain();

    assert_eq!(stepper.step_backward(), Ok(StepOutcome::Stepped));
    assert_eq!(stepper.array().to_vec(), Some(vec![3, 1, 2]));
    assert_eq!(
        stepper.sink_mut().drain(),
        vec![
            SinkEvent::Swap(1, 0),
            SinkEvent::Pseudocode(Line::new(3), vec![]),
            SinkEvent::Subset(Some((0, 2))),
            SinkEvent::Indices(vec![("i", 2), ("j", 0)]),
            SinkEvent::Counts {
                swaps: 0,
                comparisons: 1
            },
        ]
    );
}

#[test]
fn test_insert_scenario() {
    let mut machine = Machine::new(SortArray::new(vec![10, 20, 30, 40, 50]), RecordingSink::new());
    machine.insert(4, 1).unwrap();
    assert_eq!(machine.array().to_vec(), Some(vec![10, 50, 20, 30, 40]));
    assert_eq!(machine.swaps(), 1);

    machine.undo_insert(4, 1).unwrap();
    assert_eq!(machine.array().to_vec(), Some(vec![10, 20, 30, 40, 50]));
    assert_eq!(machine.swaps(), 0);
    assert_eq!(
        machine.sink().events,
        vec![SinkEvent::Insert(4, 1), SinkEvent::Insert(1, 4)]
    );
}

#[test]
fn test_undo_without_forward_is_refused() {
    let mut machine = Machine::new(SortArray::new(vec![1, 2]), NullSink);
    assert_eq!(
        machine.undo_swap(0, 1),
        Err(StepError::CounterUnderflow { counter: "swap" })
    );
    assert_eq!(machine.array().to_vec(), Some(vec![1, 2]));
}

#[test]
fn test_quicksort_recursion_uses_call_stack() {
    let mut stepper = Stepper::new(Algorithm::Quick, vec![5, 4, 3, 2, 1], NullSink).unwrap();
    let mut deepest = 0;
    while stepper.step_forward().unwrap() == StepOutcome::Stepped {
        deepest = deepest.max(stepper.current().call_depth());
    }
    assert!(deepest >= 2, "deepest call depth {}", deepest);
    assert_eq!(stepper.current().call_depth(), 0);
    assert_eq!(stepper.array().to_vec(), Some(vec![1, 2, 3, 4, 5]));
}

#[test]
fn test_quicksort_depth_stays_below_input_length() {
    for values in [(1..=40).collect::<Vec<i32>>(), (1..=40).rev().collect()] {
        let len = values.len();
        let mut stepper = Stepper::new(Algorithm::Quick, values, NullSink).unwrap();
        let mut deepest = 0;
        while stepper.step_forward().unwrap() == StepOutcome::Stepped {
            deepest = deepest.max(stepper.current().call_depth());
        }
        assert!(deepest < len, "deepest call depth {}", deepest);
        assert!(deepest >= len / 2, "deepest call depth {}", deepest);
    }
}

#[test]
fn test_recorded_snapshots_are_never_changed() {
    let mut stepper = Stepper::new(Algorithm::Merge, vec![4, 1, 3, 2], NullSink).unwrap();
    for _ in 0..12 {
        stepper.step_forward().unwrap();
    }
    let recorded: Vec<_> = stepper.history().iter().cloned().collect();

    stepper.run_to_end().unwrap();
    for (index, snapshot) in recorded.iter().enumerate() {
        assert_eq!(stepper.history().get(index), Some(snapshot));
    }
}

#[test]
fn test_replay_after_undo_is_identical() {
    let mut stepper = Stepper::new(Algorithm::Heap, vec![2, 9, 4, 7, 1], NullSink).unwrap();
    for _ in 0..20 {
        stepper.step_forward().unwrap();
    }
    let snapshot = stepper.current().clone();
    let counts = (stepper.swaps(), stepper.comparisons());
    let data = stepper.array().to_vec();

    for _ in 0..8 {
        stepper.step_backward().unwrap();
    }
    for _ in 0..8 {
        stepper.step_forward().unwrap();
    }
    assert_eq!(stepper.current(), &snapshot);
    assert_eq!((stepper.swaps(), stepper.comparisons()), counts);
    assert_eq!(stepper.array().to_vec(), data);
}

#[test]
fn test_radix_moves_through_buckets() {
    let mut stepper = Stepper::new(Algorithm::Radix, vec![5, 12], RecordingSink::new()).unwrap();
    assert_eq!(stepper.sink_mut().drain()[0], SinkEvent::ShowBuckets);

    let mut saw_bucket = false;
    while stepper.step_forward().unwrap() == StepOutcome::Stepped {
        if stepper.array().buckets().total_len() > 0 {
            saw_bucket = true;
            assert!(stepper.array().to_vec().is_none());
        }
    }
    assert!(saw_bucket);
    assert_eq!(stepper.array().to_vec(), Some(vec![5, 12]));
    // two digits, two elements, into and out of a bucket each time
    assert_eq!(stepper.swaps(), 8);
    assert_eq!(stepper.comparisons(), 0);

    let events = stepper.sink_mut().drain();
    assert!(events.contains(&SinkEvent::MaxValue(1)));
    assert!(events.contains(&SinkEvent::MoveToBucket(0, 5)));
    assert!(events.contains(&SinkEvent::MoveFromBucket(0, 2, 12)));

    stepper.rewind_to_start().unwrap();
    assert_eq!(stepper.array().to_vec(), Some(vec![5, 12]));
    assert_eq!(stepper.swaps(), 0);
}

#[test]
fn test_step_limit_errors_are_reported() {
    assert!(matches!(
        "shell".parse::<Algorithm>(),
        Err(StepError::UnknownAlgorithm(_))
    ));
    let err = Stepper::new(Algorithm::Radix, vec![-1], NullSink).err();
    assert!(matches!(err, Some(StepError::UnsupportedInput { .. })));
    assert!(err.map(|e| e.to_string()).unwrap_or_default().contains("radix"));
}
