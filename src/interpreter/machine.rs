//! Primitive data operations
//!
//! [`Machine`] owns the array, the buckets, the swap/comparison counters and
//! the sink. Every primitive has an exact inverse:
//!
//! | forward | inverse |
//! |---|---|
//! | `swap(i, j)` | `undo_swap(i, j)` (swap is self-inverse) |
//! | `insert(from, to)` | `undo_insert(from, to)` = `insert(to, from)` |
//! | `compare_greater(i, j)` | `undo_greater(i, j)` (counter only) |
//! | `move_to_bucket(from, b)` | `undo_move_to_bucket(from, b, value)` |
//! | `move_from_bucket(to, b, value)` | `undo_move_from_bucket(to, b)` |
//!
//! Arguments are validated before anything is mutated, so a failed primitive
//! leaves data, counters and sink untouched.

use crate::interpreter::errors::StepError;
use crate::memory::SortArray;
use crate::sink::VisualizationSink;

pub struct Machine<S> {
    array: SortArray,
    swaps: u32,
    comparisons: u32,
    sink: S,
}

impl<S: VisualizationSink> Machine<S> {
    pub fn new(array: SortArray, sink: S) -> Self {
        Machine {
            array,
            swaps: 0,
            comparisons: 0,
            sink,
        }
    }

    pub fn array(&self) -> &SortArray {
        &self.array
    }

    pub fn swaps(&self) -> u32 {
        self.swaps
    }

    pub fn comparisons(&self) -> u32 {
        self.comparisons
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub(crate) fn reset_counters(&mut self) {
        self.swaps = 0;
        self.comparisons = 0;
    }

    fn fewer_swaps(&self) -> Result<u32, StepError> {
        self.swaps
            .checked_sub(1)
            .ok_or(StepError::CounterUnderflow { counter: "swap" })
    }

    fn fewer_comparisons(&self) -> Result<u32, StepError> {
        self.comparisons
            .checked_sub(1)
            .ok_or(StepError::CounterUnderflow {
                counter: "comparison",
            })
    }

    /// Both positions must be occupied
    fn occupied_pair(&self, operation: &'static str, i: i32, j: i32) -> Result<(usize, usize), StepError> {
        self.array.value(operation, i)?;
        self.array.value(operation, j)?;
        Ok((i as usize, j as usize))
    }

    // ========== Swap ==========

    pub fn swap(&mut self, i: i32, j: i32) -> Result<(), StepError> {
        let (i, j) = self.occupied_pair("swap", i, j)?;
        self.array.swap(i, j);
        self.swaps += 1;
        self.sink.swap(i, j);
        Ok(())
    }

    pub fn undo_swap(&mut self, i: i32, j: i32) -> Result<(), StepError> {
        let (i, j) = self.occupied_pair("swap", i, j)?;
        let swaps = self.fewer_swaps()?;
        self.array.swap(i, j);
        self.swaps = swaps;
        self.sink.swap(j, i);
        Ok(())
    }

    // ========== Insert ==========

    pub fn insert(&mut self, from: i32, to: i32) -> Result<(), StepError> {
        let (from, to) = self.occupied_pair("insert", from, to)?;
        self.array.insert(from, to);
        self.swaps += 1;
        self.sink.insert(from, to);
        Ok(())
    }

    pub fn undo_insert(&mut self, from: i32, to: i32) -> Result<(), StepError> {
        let (from, to) = self.occupied_pair("insert", from, to)?;
        let swaps = self.fewer_swaps()?;
        self.array.insert(to, from);
        self.swaps = swaps;
        self.sink.insert(to, from);
        Ok(())
    }

    // ========== Compare ==========

    /// Returns `A[i] > A[j]`
    pub fn compare_greater(&mut self, i: i32, j: i32) -> Result<bool, StepError> {
        let a = self.array.value("compare", i)?;
        let b = self.array.value("compare", j)?;
        let result = a > b;
        self.comparisons += 1;
        self.sink.compare_greater(i as usize, j as usize, result);
        Ok(result)
    }

    /// Takes back one comparison; the sink sees the comparison again for display
    pub fn undo_greater(&mut self, i: i32, j: i32) -> Result<(), StepError> {
        let a = self.array.value("compare", i)?;
        let b = self.array.value("compare", j)?;
        self.comparisons = self.fewer_comparisons()?;
        self.sink.compare_greater(i as usize, j as usize, a > b);
        Ok(())
    }

    // ========== Buckets ==========

    pub fn visualize_max_value(&mut self, index: i32) -> Result<(), StepError> {
        self.array.value("visualize max", index)?;
        self.sink.visualize_max_value(index as usize);
        Ok(())
    }

    pub fn visualize_bucket_number(&mut self, index: i32, bucket: i32) -> Result<(), StepError> {
        let i = self.array.checked_index("visualize bucket", index)?;
        let b = self.array.buckets().checked_bucket(bucket)?;
        self.sink.visualize_bucket_number(i, b);
        Ok(())
    }

    /// Take the element at `from` out of the array and append it to `bucket`
    pub fn move_to_bucket(&mut self, from: i32, bucket: i32) -> Result<i32, StepError> {
        let b = self.array.buckets().checked_bucket(bucket)?;
        let i = self.array.checked_index("move to bucket", from)?;
        let value = self.array.take("move to bucket", i)?;
        self.array.buckets_mut().push_back(b, value);
        self.swaps += 1;
        self.sink.move_to_bucket(i, b);
        Ok(value)
    }

    pub fn undo_move_to_bucket(&mut self, from: i32, bucket: i32, value: i32) -> Result<(), StepError> {
        let b = self.array.buckets().checked_bucket(bucket)?;
        let i = self.array.checked_index("undo move to bucket", from)?;
        if self.array.get(i).is_some() {
            return Err(StepError::SlotOccupied {
                operation: "undo move to bucket",
                index: i,
            });
        }
        let found = self
            .array
            .buckets()
            .get(b)
            .and_then(|q| q.back().copied())
            .ok_or(StepError::EmptyBucket { bucket: b })?;
        if found != value {
            return Err(StepError::BucketValueMismatch {
                bucket: b,
                expected: value,
                found,
            });
        }
        let swaps = self.fewer_swaps()?;
        let value = self.array.buckets_mut().pop_back(b)?;
        self.array.put("undo move to bucket", i, value)?;
        self.swaps = swaps;
        self.sink.undo_move_to_bucket(i, b, value);
        Ok(())
    }

    /// Move the first element of `bucket` into the empty slot `to`
    pub fn move_from_bucket(&mut self, to: i32, bucket: i32, value: i32) -> Result<(), StepError> {
        let b = self.array.buckets().checked_bucket(bucket)?;
        let i = self.array.checked_index("move from bucket", to)?;
        if self.array.get(i).is_some() {
            return Err(StepError::SlotOccupied {
                operation: "move from bucket",
                index: i,
            });
        }
        let found = self
            .array
            .buckets()
            .front(b)
            .ok_or(StepError::EmptyBucket { bucket: b })?;
        if found != value {
            return Err(StepError::BucketValueMismatch {
                bucket: b,
                expected: value,
                found,
            });
        }
        let value = self.array.buckets_mut().pop_front(b)?;
        self.array.put("move from bucket", i, value)?;
        self.swaps += 1;
        self.sink.move_from_bucket(i, b, value);
        Ok(())
    }

    pub fn undo_move_from_bucket(&mut self, to: i32, bucket: i32) -> Result<(), StepError> {
        let b = self.array.buckets().checked_bucket(bucket)?;
        let i = self.array.checked_index("undo move from bucket", to)?;
        self.array.value("undo move from bucket", to)?;
        let swaps = self.fewer_swaps()?;
        let value = self.array.take("undo move from bucket", i)?;
        self.array.buckets_mut().push_front(b, value);
        self.swaps = swaps;
        self.sink.undo_move_from_bucket(i, b);
        Ok(())
    }

    // ========== Display ==========

    pub(crate) fn emit_counts(&mut self) {
        self.sink.set_swaps_comparisons(self.swaps, self.comparisons);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{RecordingSink, SinkEvent};

    fn machine(values: Vec<i32>) -> Machine<RecordingSink> {
        Machine::new(SortArray::new(values), RecordingSink::new())
    }

    #[test]
    fn swap_then_undo_restores_everything() {
        let mut m = machine(vec![5, 6, 7]);
        m.swap(0, 2).unwrap();
        assert_eq!(m.array().to_vec(), Some(vec![7, 6, 5]));
        assert_eq!(m.swaps(), 1);
        m.undo_swap(0, 2).unwrap();
        assert_eq!(m.array().to_vec(), Some(vec![5, 6, 7]));
        assert_eq!(m.swaps(), 0);
        assert_eq!(
            m.sink().events,
            vec![SinkEvent::Swap(0, 2), SinkEvent::Swap(2, 0)]
        );
    }

    #[test]
    fn insert_then_undo_restores_everything() {
        let mut m = machine(vec![10, 11, 12, 13, 14]);
        // the element at `from` lands on `to`, the ones between shift right
        m.insert(4, 1).unwrap();
        assert_eq!(m.array().to_vec(), Some(vec![10, 14, 11, 12, 13]));
        assert_eq!(m.swaps(), 1);
        m.undo_insert(4, 1).unwrap();
        assert_eq!(m.array().to_vec(), Some(vec![10, 11, 12, 13, 14]));
        assert_eq!(m.swaps(), 0);
    }

    #[test]
    fn insert_moves_towards_the_end() {
        let mut m = machine(vec![10, 11, 12, 13, 14]);
        m.insert(1, 3).unwrap();
        assert_eq!(m.array().to_vec(), Some(vec![10, 12, 13, 11, 14]));
        m.undo_insert(1, 3).unwrap();
        assert_eq!(m.array().to_vec(), Some(vec![10, 11, 12, 13, 14]));
    }

    #[test]
    fn compare_counts_and_reports_result() {
        let mut m = machine(vec![3, 1]);
        assert_eq!(m.compare_greater(0, 1), Ok(true));
        assert_eq!(m.compare_greater(1, 0), Ok(false));
        assert_eq!(m.comparisons(), 2);
        m.undo_greater(1, 0).unwrap();
        assert_eq!(m.comparisons(), 1);
        assert_eq!(m.array().to_vec(), Some(vec![3, 1]));
    }

    #[test]
    fn undo_below_zero_is_rejected_without_mutation() {
        let mut m = machine(vec![1, 2]);
        assert_eq!(
            m.undo_swap(0, 1),
            Err(StepError::CounterUnderflow { counter: "swap" })
        );
        assert_eq!(m.array().to_vec(), Some(vec![1, 2]));
        assert!(m.undo_greater(0, 1).is_err());
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let mut m = machine(vec![1, 2]);
        assert!(matches!(
            m.swap(0, 2),
            Err(StepError::IndexOutOfBounds { index: 2, .. })
        ));
        assert!(m.insert(-1, 0).is_err());
        assert_eq!(m.swaps(), 0);
        assert!(m.sink().events.is_empty());
    }

    #[test]
    fn bucket_moves_round_trip() {
        let mut m = machine(vec![21, 13]);
        assert_eq!(m.move_to_bucket(0, 1), Ok(21));
        assert_eq!(m.move_to_bucket(1, 3), Ok(13));
        assert_eq!(m.array().to_vec(), None);
        assert_eq!(m.swaps(), 2);

        m.move_from_bucket(0, 1, 21).unwrap();
        assert!(matches!(
            m.move_from_bucket(1, 3, 99),
            Err(StepError::BucketValueMismatch { expected: 99, found: 13, .. })
        ));
        m.move_from_bucket(1, 3, 13).unwrap();
        assert_eq!(m.array().to_vec(), Some(vec![21, 13]));

        m.undo_move_from_bucket(1, 3).unwrap();
        m.undo_move_from_bucket(0, 1).unwrap();
        m.undo_move_to_bucket(1, 3, 13).unwrap();
        m.undo_move_to_bucket(0, 1, 21).unwrap();
        assert_eq!(m.array().to_vec(), Some(vec![21, 13]));
        assert_eq!(m.array().buckets().total_len(), 0);
        assert_eq!(m.swaps(), 0);
    }
}
