// LSD radix sort through ten FIFO buckets.
//
// Moving an element into a bucket empties its slot, so each move records the
// moved value in the snapshot's `value` register for the undo to check.

use super::{invalid_line, len_of, Line};
use crate::interpreter::constants::{BUCKET_COUNT, RADIX};
use crate::interpreter::errors::StepError;
use crate::interpreter::machine::Machine;
use crate::memory::SortArray;
use crate::sink::VisualizationSink;
use crate::snapshot::{Snapshot, Variables};

pub(super) const PSEUDOCODE: &[&str] = &[
    "radixSort(A):",
    "  m ← number of digits of max(A)",
    "  for d ← 0 to m-1:",
    "    for i ← 0 to n-1:",
    "      b ← digit d of A[i]",
    "      move A[i] to bucket b",
    "    k ← 0",
    "    for b ← 0 to 9:",
    "      while bucket b is not empty:",
    "        move first of bucket b to A[k]",
    "        k ← k+1",
];

const FIND_MAX: Line = Line::new(1);
const DIGIT_LOOP: Line = Line::new(2);
const SCATTER_LOOP: Line = Line::new(3);
const PICK_BUCKET: Line = Line::new(4);
const TO_BUCKET: Line = Line::new(5);
const RESET_K: Line = Line::new(6);
const BUCKET_LOOP: Line = Line::new(7);
const DRAIN_CHECK: Line = Line::new(8);
const FROM_BUCKET: Line = Line::new(9);
const ADVANCE_K: Line = Line::new(10);

pub(super) fn initial(_len: usize) -> Variables {
    Variables::new()
}

/// Decimal digits needed to write `value` (at least one)
pub(super) fn digit_count(value: i32) -> i32 {
    let mut digits = 1;
    let mut rest = value / RADIX;
    while rest > 0 {
        digits += 1;
        rest /= RADIX;
    }
    digits
}

/// Digit `d` of `value`, counting from the least significant
pub(super) fn digit(value: i32, d: i32) -> i32 {
    let scale = RADIX.checked_pow(d as u32).unwrap_or(i32::MAX);
    (value / scale) % RADIX
}

pub(super) fn enter(from: Line, snap: &mut Snapshot, array: &SortArray) -> Result<(), StepError> {
    let n = len_of(array);
    match snap.line() {
        FIND_MAX => {
            match array.max_index() {
                Some(max) => {
                    let max = max as i32;
                    snap.set("max", max);
                    snap.set("m", digit_count(array.value("radix", max)?));
                }
                None => snap.set("m", 0),
            }
            snap.goto(DIGIT_LOOP);
        }
        DIGIT_LOOP => {
            let d = if from == FIND_MAX { 0 } else { snap.var("d")? + 1 };
            snap.set("d", d);
            if d < snap.var("m")? {
                snap.goto(SCATTER_LOOP);
            } else {
                snap.leave_subroutine();
            }
        }
        SCATTER_LOOP => {
            let i = if from == DIGIT_LOOP { 0 } else { snap.var("i")? + 1 };
            snap.set("i", i);
            if i < n {
                snap.goto(PICK_BUCKET);
            } else {
                snap.goto(RESET_K);
            }
        }
        PICK_BUCKET => {
            let value = array.value("radix", snap.var("i")?)?;
            snap.set("value", value);
            snap.set("b", digit(value, snap.var("d")?));
            snap.goto(TO_BUCKET);
        }
        TO_BUCKET => snap.goto(SCATTER_LOOP),
        RESET_K => {
            snap.set("k", 0);
            snap.goto(BUCKET_LOOP);
        }
        BUCKET_LOOP => {
            let b = if from == RESET_K { 0 } else { snap.var("b")? + 1 };
            snap.set("b", b);
            if b < BUCKET_COUNT as i32 {
                snap.goto(DRAIN_CHECK);
            } else {
                snap.goto(DIGIT_LOOP);
            }
        }
        DRAIN_CHECK => {
            let b = array.buckets().checked_bucket(snap.var("b")?)?;
            if array.buckets().is_empty(b) {
                snap.goto(BUCKET_LOOP);
            } else {
                snap.goto(FROM_BUCKET);
            }
        }
        FROM_BUCKET => {
            let b = array.buckets().checked_bucket(snap.var("b")?)?;
            let value = array
                .buckets()
                .front(b)
                .ok_or(StepError::EmptyBucket { bucket: b })?;
            snap.set("value", value);
            snap.goto(ADVANCE_K);
        }
        ADVANCE_K => {
            let k = snap.var("k")?;
            snap.set("k", k + 1);
            snap.goto(DRAIN_CHECK);
        }
        _ => return Err(invalid_line(snap)),
    }
    Ok(())
}

pub(super) fn execute<S: VisualizationSink>(snap: &mut Snapshot, m: &mut Machine<S>) -> Result<(), StepError> {
    match snap.line() {
        FIND_MAX => {
            if let Some(max) = snap.variables().get("max") {
                snap.wait();
                m.visualize_max_value(max)?;
            }
        }
        PICK_BUCKET => {
            snap.wait();
            m.visualize_bucket_number(snap.var("i")?, snap.var("b")?)?;
        }
        TO_BUCKET => {
            snap.wait();
            let (i, b, expected) = (snap.var("i")?, snap.var("b")?, snap.var("value")?);
            let found = m.array().value("move to bucket", i)?;
            if found != expected {
                return Err(StepError::BucketValueMismatch {
                    bucket: b.max(0) as usize,
                    expected,
                    found,
                });
            }
            m.move_to_bucket(i, b)?;
        }
        FROM_BUCKET => {
            snap.wait();
            m.move_from_bucket(snap.var("k")?, snap.var("b")?, snap.var("value")?)?;
        }
        _ => {}
    }
    Ok(())
}

pub(super) fn undo<S: VisualizationSink>(snap: &Snapshot, m: &mut Machine<S>) -> Result<(), StepError> {
    match snap.line() {
        TO_BUCKET => m.undo_move_to_bucket(snap.var("i")?, snap.var("b")?, snap.var("value")?),
        FROM_BUCKET => m.undo_move_from_bucket(snap.var("k")?, snap.var("b")?),
        _ => Ok(()),
    }
}

pub(super) fn subset(_snap: &Snapshot) -> Option<(usize, usize)> {
    None
}

pub(super) fn index_variables(snap: &Snapshot) -> Vec<(&'static str, i32)> {
    match snap.line() {
        FIND_MAX => snap.variables().select(&["max"]),
        RESET_K | BUCKET_LOOP | DRAIN_CHECK | FROM_BUCKET | ADVANCE_K => {
            snap.variables().select(&["k"])
        }
        _ => snap.variables().select(&["i"]),
    }
}

pub(super) fn extra_variables(snap: &Snapshot) -> Vec<(&'static str, i32)> {
    snap.variables().select(&["m", "d", "b"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_helpers() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(i32::MAX), 10);
        assert_eq!(digit(472, 0), 2);
        assert_eq!(digit(472, 1), 7);
        assert_eq!(digit(472, 2), 4);
        assert_eq!(digit(472, 3), 0);
        assert_eq!(digit(i32::MAX, 9), 2);
    }
}
