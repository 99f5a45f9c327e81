// Property tests: stepping forwards then backwards always restores the input

use proptest::prelude::*;

use sortty::algorithms::Algorithm;
use sortty::interpreter::engine::{StepOutcome, Stepper};
use sortty::interpreter::machine::Machine;
use sortty::memory::SortArray;
use sortty::sink::NullSink;

fn algorithm_with_values() -> impl Strategy<Value = (Algorithm, Vec<i32>)> {
    (0..Algorithm::ALL.len()).prop_flat_map(|index| {
        let algorithm = Algorithm::ALL[index];
        let values = if algorithm.uses_buckets() {
            prop::collection::vec(0..1000i32, 0..24)
        } else {
            prop::collection::vec(-50..50i32, 0..24)
        };
        (Just(algorithm), values)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sorts_like_std((algorithm, values) in algorithm_with_values()) {
        let mut stepper = Stepper::new(algorithm, values.clone(), NullSink).unwrap();
        prop_assert!(stepper.current().frames().is_empty());

        stepper.run_to_end().unwrap();
        let mut expected = values.clone();
        expected.sort();
        prop_assert_eq!(stepper.array().to_vec(), Some(expected));
        prop_assert!(stepper.current().frames().is_empty());
        prop_assert_eq!(stepper.array().buckets().total_len(), 0);
    }

    #[test]
    fn stepping_back_restores_input((algorithm, values) in algorithm_with_values()) {
        let mut stepper = Stepper::new(algorithm, values.clone(), NullSink).unwrap();
        stepper.run_to_end().unwrap();

        let mut work = stepper.swaps() + stepper.comparisons();
        loop {
            let outcome = stepper.step_backward().unwrap();
            let now = stepper.swaps() + stepper.comparisons();
            prop_assert!(now <= work);
            work = now;
            if outcome == StepOutcome::AtStart {
                break;
            }
        }
        prop_assert_eq!(work, 0);
        prop_assert_eq!(stepper.history_len(), 1);
        prop_assert_eq!(stepper.array().to_vec(), Some(values));
    }

    #[test]
    fn replay_after_undo_is_deterministic(
        (algorithm, values) in algorithm_with_values(),
        forward in 0usize..200,
        back in 0usize..50,
    ) {
        let mut stepper = Stepper::new(algorithm, values, NullSink).unwrap();
        for _ in 0..forward {
            stepper.step_forward().unwrap();
        }
        let snapshot = stepper.current().clone();
        let data = stepper.array().to_vec();
        let counts = (stepper.swaps(), stepper.comparisons());
        let len = stepper.history_len();

        let back = back.min(len - 1);
        for _ in 0..back {
            stepper.step_backward().unwrap();
        }
        for _ in 0..back {
            stepper.step_forward().unwrap();
        }
        prop_assert_eq!(stepper.current(), &snapshot);
        prop_assert_eq!(stepper.array().to_vec(), data);
        prop_assert_eq!((stepper.swaps(), stepper.comparisons()), counts);
        prop_assert_eq!(stepper.history_len(), len);
    }

    #[test]
    fn swap_and_insert_invert(
        values in prop::collection::vec(-100..100i32, 1..16),
        a in 0usize..16,
        b in 0usize..16,
    ) {
        let len = values.len();
        let (a, b) = ((a % len) as i32, (b % len) as i32);
        let mut machine = Machine::new(SortArray::new(values.clone()), NullSink);

        machine.swap(a, b).unwrap();
        machine.undo_swap(a, b).unwrap();
        prop_assert_eq!(machine.array().to_vec(), Some(values.clone()));

        machine.insert(a, b).unwrap();
        prop_assert_eq!(machine.array().get(b as usize), Some(values[a as usize]));
        machine.undo_insert(a, b).unwrap();
        prop_assert_eq!(machine.array().to_vec(), Some(values));
        prop_assert_eq!(machine.swaps(), 0);
    }
}
