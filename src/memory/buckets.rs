//! FIFO buckets for the bucket-based algorithms

use crate::interpreter::errors::StepError;
use std::collections::VecDeque;

/// A fixed number of FIFO queues
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buckets {
    queues: Vec<VecDeque<i32>>,
}

impl Buckets {
    pub fn new(count: usize) -> Self {
        Buckets {
            queues: vec![VecDeque::new(); count],
        }
    }

    /// Validate a register value as a bucket number
    pub fn checked_bucket(&self, bucket: i32) -> Result<usize, StepError> {
        usize::try_from(bucket)
            .ok()
            .filter(|&b| b < self.queues.len())
            .ok_or(StepError::BucketOutOfRange {
                bucket,
                count: self.queues.len(),
            })
    }

    pub fn get(&self, bucket: usize) -> Option<&VecDeque<i32>> {
        self.queues.get(bucket)
    }

    pub fn front(&self, bucket: usize) -> Option<i32> {
        self.queues.get(bucket).and_then(|q| q.front().copied())
    }

    pub fn is_empty(&self, bucket: usize) -> bool {
        self.queues.get(bucket).map_or(true, VecDeque::is_empty)
    }

    /// Total number of elements across all buckets
    pub fn total_len(&self) -> usize {
        self.queues.iter().map(VecDeque::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VecDeque<i32>> {
        self.queues.iter()
    }

    pub(crate) fn push_back(&mut self, bucket: usize, value: i32) {
        self.queues[bucket].push_back(value);
    }

    pub(crate) fn push_front(&mut self, bucket: usize, value: i32) {
        self.queues[bucket].push_front(value);
    }

    pub(crate) fn pop_back(&mut self, bucket: usize) -> Result<i32, StepError> {
        self.queues[bucket]
            .pop_back()
            .ok_or(StepError::EmptyBucket { bucket })
    }

    pub(crate) fn pop_front(&mut self, bucket: usize) -> Result<i32, StepError> {
        self.queues[bucket]
            .pop_front()
            .ok_or(StepError::EmptyBucket { bucket })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queues_are_fifo() {
        let mut buckets = Buckets::new(3);
        buckets.push_back(1, 10);
        buckets.push_back(1, 11);
        assert_eq!(buckets.front(1), Some(10));
        assert_eq!(buckets.pop_front(1), Ok(10));
        buckets.push_front(1, 10);
        assert_eq!(buckets.pop_back(1), Ok(11));
        assert_eq!(buckets.total_len(), 1);
    }

    #[test]
    fn checked_bucket_bounds() {
        let buckets = Buckets::new(10);
        assert_eq!(buckets.checked_bucket(9), Ok(9));
        assert!(buckets.checked_bucket(10).is_err());
        assert!(buckets.checked_bucket(-1).is_err());
        assert!(buckets.is_empty(42));
    }
}
