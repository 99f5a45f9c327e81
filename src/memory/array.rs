//! The sortable array
//!
//! [`SortArray`] holds the elements being sorted plus the buckets used by the
//! bucket-based algorithms. A slot is `None` while its element sits in a
//! bucket; every other algorithm only ever sees fully occupied slots.

use super::buckets::Buckets;
use crate::interpreter::constants::BUCKET_COUNT;
use crate::interpreter::errors::StepError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortArray {
    slots: Vec<Option<i32>>,
    buckets: Buckets,
}

impl SortArray {
    pub fn new(values: Vec<i32>) -> Self {
        SortArray {
            slots: values.into_iter().map(Some).collect(),
            buckets: Buckets::new(BUCKET_COUNT),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Element at `index`, or `None` if out of range or currently in a bucket
    pub fn get(&self, index: usize) -> Option<i32> {
        self.slots.get(index).copied().flatten()
    }

    pub fn slots(&self) -> &[Option<i32>] {
        &self.slots
    }

    pub fn buckets(&self) -> &Buckets {
        &self.buckets
    }

    pub(crate) fn buckets_mut(&mut self) -> &mut Buckets {
        &mut self.buckets
    }

    /// All elements in order, or `None` while any slot is empty
    pub fn to_vec(&self) -> Option<Vec<i32>> {
        self.slots.iter().copied().collect()
    }

    pub fn is_sorted(&self) -> bool {
        self.to_vec()
            .is_some_and(|values| values.windows(2).all(|w| w[0] <= w[1]))
    }

    /// Validate a register value as an index into this array
    pub fn checked_index(&self, operation: &'static str, index: i32) -> Result<usize, StepError> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.slots.len())
            .ok_or(StepError::IndexOutOfBounds {
                operation,
                index,
                len: self.slots.len(),
            })
    }

    /// Read an occupied slot
    pub fn value(&self, operation: &'static str, index: i32) -> Result<i32, StepError> {
        let i = self.checked_index(operation, index)?;
        self.slots[i].ok_or(StepError::EmptySlot {
            operation,
            index: i,
        })
    }

    /// Index of the largest element (first one on ties)
    pub fn max_index(&self) -> Option<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|v| (i, v)))
            .fold(None, |best: Option<(usize, i32)>, (i, v)| match best {
                Some((_, bv)) if bv >= v => best,
                _ => Some((i, v)),
            })
            .map(|(i, _)| i)
    }

    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        self.slots.swap(i, j);
    }

    /// Move the element at `from` to position `to`, shifting the elements in
    /// between by one towards `from`
    pub(crate) fn insert(&mut self, from: usize, to: usize) {
        if from < to {
            self.slots[from..=to].rotate_left(1);
        } else if to < from {
            self.slots[to..=from].rotate_right(1);
        }
    }

    /// Take an element out of its slot, leaving the slot empty
    pub(crate) fn take(&mut self, operation: &'static str, index: usize) -> Result<i32, StepError> {
        self.slots
            .get_mut(index)
            .and_then(Option::take)
            .ok_or(StepError::EmptySlot { operation, index })
    }

    /// Fill an empty slot
    pub(crate) fn put(
        &mut self,
        operation: &'static str,
        index: usize,
        value: i32,
    ) -> Result<(), StepError> {
        match self.slots.get_mut(index) {
            Some(slot @ None) => {
                *slot = Some(value);
                Ok(())
            }
            Some(Some(_)) => Err(StepError::SlotOccupied { operation, index }),
            None => Err(StepError::IndexOutOfBounds {
                operation,
                index: index as i32,
                len: self.slots.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_moves_right_to_left() {
        let mut array = SortArray::new(vec![1, 2, 3, 4, 5]);
        array.insert(4, 1);
        assert_eq!(array.to_vec(), Some(vec![1, 5, 2, 3, 4]));
        array.insert(1, 4);
        assert_eq!(array.to_vec(), Some(vec![1, 2, 3, 4, 5]));
    }

    #[test]
    fn insert_onto_itself_is_a_no_op() {
        let mut array = SortArray::new(vec![7, 8]);
        array.insert(1, 1);
        assert_eq!(array.to_vec(), Some(vec![7, 8]));
    }

    #[test]
    fn checked_index_rejects_negative_and_past_end() {
        let array = SortArray::new(vec![1, 2, 3]);
        assert_eq!(array.checked_index("t", 2), Ok(2));
        assert!(matches!(
            array.checked_index("t", -1),
            Err(StepError::IndexOutOfBounds { index: -1, len: 3, .. })
        ));
        assert!(array.checked_index("t", 3).is_err());
    }

    #[test]
    fn take_and_put_round_trip() {
        let mut array = SortArray::new(vec![4, 9]);
        let v = array.take("t", 1).unwrap();
        assert_eq!(v, 9);
        assert_eq!(array.to_vec(), None);
        assert!(!array.is_sorted());
        assert!(matches!(array.take("t", 1), Err(StepError::EmptySlot { index: 1, .. })));
        assert!(matches!(array.put("t", 0, 1), Err(StepError::SlotOccupied { index: 0, .. })));
        array.put("t", 1, v).unwrap();
        assert_eq!(array.to_vec(), Some(vec![4, 9]));
    }

    #[test]
    fn max_index_prefers_first_maximum() {
        let array = SortArray::new(vec![3, 8, 1, 8]);
        assert_eq!(array.max_index(), Some(1));
        assert_eq!(SortArray::new(Vec::new()).max_index(), None);
    }
}
