//! Error types for the sorting stepper
//!
//! This module defines [`StepError`], which represents every failure a step can
//! report. Reaching the end of an algorithm and stepping backward at the start
//! are *not* errors; they are reported through
//! [`StepOutcome`](crate::interpreter::engine::StepOutcome).
//!
//! Most variants describe a defect in an algorithm's line table (a register
//! read before it was written, an index outside the array, unbalanced bucket
//! moves). The stepper refuses the step instead of recording it, so the history
//! never holds a snapshot whose undo would be wrong.

use crate::snapshot::Line;
use std::fmt;

/// Errors that can occur while stepping an algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    /// A line read a register that was never assigned
    UndefinedVariable { name: &'static str, line: Line },

    /// The algorithm has no such pseudocode line
    InvalidLine { algorithm: &'static str, line: Line },

    /// A primitive addressed a position outside the array
    IndexOutOfBounds {
        operation: &'static str,
        index: i32,
        len: usize,
    },

    /// A primitive read a slot whose element currently sits in a bucket
    EmptySlot {
        operation: &'static str,
        index: usize,
    },

    /// A bucket move tried to fill a slot that still holds an element
    SlotOccupied {
        operation: &'static str,
        index: usize,
    },

    /// Bucket number outside the configured bucket range
    BucketOutOfRange { bucket: i32, count: usize },

    /// Tried to take an element out of an empty bucket
    EmptyBucket { bucket: usize },

    /// A bucket undo found a different element than the one recorded
    BucketValueMismatch {
        bucket: usize,
        expected: i32,
        found: i32,
    },

    /// Subroutine frames exceeded the configured bound
    CallDepthExceeded { depth: usize, limit: usize },

    /// An undo would drive a counter below zero
    CounterUnderflow { counter: &'static str },

    /// Snapshot history memory limit exceeded
    HistoryLimitExceeded { current: usize, limit: usize },

    /// The algorithm cannot sort this input
    UnsupportedInput {
        algorithm: &'static str,
        message: String,
    },

    /// Algorithm name not recognised
    UnknownAlgorithm(String),
}

impl StepError {
    pub fn line(&self) -> Option<Line> {
        match self {
            StepError::UndefinedVariable { line, .. } => Some(*line),
            StepError::InvalidLine { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::UndefinedVariable { name, line } => {
                write!(
                    f,
                    "Read from unassigned variable '{}' at line {}",
                    name,
                    line.index()
                )
            }
            StepError::InvalidLine { algorithm, line } => {
                write!(f, "{} has no pseudocode line {}", algorithm, line.index())
            }
            StepError::IndexOutOfBounds {
                operation,
                index,
                len,
            } => {
                write!(
                    f,
                    "{}: index {} out of bounds for array of length {}",
                    operation, index, len
                )
            }
            StepError::EmptySlot { operation, index } => {
                write!(f, "{}: slot {} is empty", operation, index)
            }
            StepError::SlotOccupied { operation, index } => {
                write!(f, "{}: slot {} is already occupied", operation, index)
            }
            StepError::BucketOutOfRange { bucket, count } => {
                write!(
                    f,
                    "Bucket {} out of range (there are {} buckets)",
                    bucket, count
                )
            }
            StepError::EmptyBucket { bucket } => {
                write!(f, "Bucket {} is empty", bucket)
            }
            StepError::BucketValueMismatch {
                bucket,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Bucket {} holds {} where {} was expected",
                    bucket, found, expected
                )
            }
            StepError::CallDepthExceeded { depth, limit } => {
                write!(
                    f,
                    "Subroutine depth {} exceeds the limit of {}",
                    depth, limit
                )
            }
            StepError::CounterUnderflow { counter } => {
                write!(f, "Undo would make the {} counter negative", counter)
            }
            StepError::HistoryLimitExceeded { current, limit } => {
                write!(
                    f,
                    "Snapshot memory limit exceeded: {} bytes used, limit is {}",
                    current, limit
                )
            }
            StepError::UnsupportedInput { algorithm, message } => {
                write!(f, "{} cannot sort this input: {}", algorithm, message)
            }
            StepError::UnknownAlgorithm(name) => {
                write!(f, "Unknown algorithm '{}'", name)
            }
        }
    }
}

impl std::error::Error for StepError {}
