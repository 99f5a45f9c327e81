// Bubble sort: adjacent compare-and-swap, largest element bubbles up first

use super::{invalid_line, len_of, Line};
use crate::interpreter::errors::StepError;
use crate::interpreter::machine::Machine;
use crate::memory::SortArray;
use crate::sink::VisualizationSink;
use crate::snapshot::{Snapshot, Variables};

pub(super) const PSEUDOCODE: &[&str] = &[
    "bubbleSort(A):",
    "  for i ← n-1 down to 1:",
    "    for j ← 0 to i-1:",
    "      if A[j] > A[j+1]:",
    "        swap A[j], A[j+1]",
];

const OUTER: Line = Line::new(1);
const INNER: Line = Line::new(2);
const COMPARE: Line = Line::new(3);
const SWAP: Line = Line::new(4);

pub(super) fn initial(_len: usize) -> Variables {
    Variables::new()
}

pub(super) fn enter(from: Line, snap: &mut Snapshot, array: &SortArray) -> Result<(), StepError> {
    match snap.line() {
        OUTER => {
            let i = if from.is_terminal() {
                len_of(array) - 1
            } else {
                snap.var("i")? - 1
            };
            snap.set("i", i);
            if i >= 1 {
                snap.goto(INNER);
            } else {
                snap.leave_subroutine();
            }
        }
        INNER => {
            let j = if from == OUTER { 0 } else { snap.var("j")? + 1 };
            snap.set("j", j);
            if j < snap.var("i")? {
                snap.goto(COMPARE);
            } else {
                snap.goto(OUTER);
            }
        }
        COMPARE => snap.goto(INNER),
        SWAP => snap.goto(INNER),
        _ => return Err(invalid_line(snap)),
    }
    Ok(())
}

pub(super) fn execute<S: VisualizationSink>(snap: &mut Snapshot, m: &mut Machine<S>) -> Result<(), StepError> {
    match snap.line() {
        COMPARE => {
            let j = snap.var("j")?;
            snap.wait();
            if m.compare_greater(j, j + 1)? {
                snap.goto(SWAP);
            }
        }
        SWAP => {
            let j = snap.var("j")?;
            snap.wait();
            m.swap(j, j + 1)?;
        }
        _ => {}
    }
    Ok(())
}

pub(super) fn undo<S: VisualizationSink>(snap: &Snapshot, m: &mut Machine<S>) -> Result<(), StepError> {
    match snap.line() {
        COMPARE => {
            let j = snap.var("j")?;
            m.undo_greater(j, j + 1)
        }
        SWAP => {
            let j = snap.var("j")?;
            m.undo_swap(j, j + 1)
        }
        _ => Ok(()),
    }
}

pub(super) fn subset(snap: &Snapshot) -> Option<(usize, usize)> {
    // unsorted prefix
    snap.variables()
        .get("i")
        .and_then(|i| super::inclusive(0, i))
}

pub(super) fn index_variables(snap: &Snapshot) -> Vec<(&'static str, i32)> {
    snap.variables().select(&["i", "j"])
}
