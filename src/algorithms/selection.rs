// Selection sort: find the minimum of the unsorted suffix, swap it into place

use super::{inclusive, invalid_line, len_of, Line};
use crate::interpreter::errors::StepError;
use crate::interpreter::machine::Machine;
use crate::memory::SortArray;
use crate::sink::VisualizationSink;
use crate::snapshot::{Snapshot, Variables};

pub(super) const PSEUDOCODE: &[&str] = &[
    "selectionSort(A):",
    "  for i ← 0 to n-2:",
    "    min ← i",
    "    for j ← i+1 to n-1:",
    "      if A[min] > A[j]:",
    "        min ← j",
    "    swap A[i], A[min]",
];

const OUTER: Line = Line::new(1);
const RESET_MIN: Line = Line::new(2);
const INNER: Line = Line::new(3);
const COMPARE: Line = Line::new(4);
const NEW_MIN: Line = Line::new(5);
const SWAP: Line = Line::new(6);

pub(super) fn initial(_len: usize) -> Variables {
    Variables::new()
}

pub(super) fn enter(from: Line, snap: &mut Snapshot, array: &SortArray) -> Result<(), StepError> {
    let n = len_of(array);
    match snap.line() {
        OUTER => {
            let i = if from.is_terminal() { 0 } else { snap.var("i")? + 1 };
            snap.set("i", i);
            if i <= n - 2 {
                snap.goto(RESET_MIN);
            } else {
                snap.leave_subroutine();
            }
        }
        RESET_MIN => {
            let i = snap.var("i")?;
            snap.set("min", i);
            snap.goto(INNER);
        }
        INNER => {
            let j = if from == RESET_MIN {
                snap.var("i")? + 1
            } else {
                snap.var("j")? + 1
            };
            snap.set("j", j);
            if j <= n - 1 {
                snap.goto(COMPARE);
            } else {
                snap.goto(SWAP);
            }
        }
        COMPARE => snap.goto(INNER),
        NEW_MIN => {
            let j = snap.var("j")?;
            snap.set("min", j);
            snap.goto(INNER);
        }
        SWAP => snap.goto(OUTER),
        _ => return Err(invalid_line(snap)),
    }
    Ok(())
}

pub(super) fn execute<S: VisualizationSink>(snap: &mut Snapshot, m: &mut Machine<S>) -> Result<(), StepError> {
    match snap.line() {
        COMPARE => {
            snap.wait();
            if m.compare_greater(snap.var("min")?, snap.var("j")?)? {
                snap.goto(NEW_MIN);
            }
        }
        SWAP => {
            let (i, min) = (snap.var("i")?, snap.var("min")?);
            if i != min {
                snap.wait();
                m.swap(i, min)?;
            }
        }
        _ => {}
    }
    Ok(())
}

pub(super) fn undo<S: VisualizationSink>(snap: &Snapshot, m: &mut Machine<S>) -> Result<(), StepError> {
    match snap.line() {
        COMPARE => m.undo_greater(snap.var("min")?, snap.var("j")?),
        SWAP => {
            let (i, min) = (snap.var("i")?, snap.var("min")?);
            if i != min {
                m.undo_swap(i, min)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

pub(super) fn subset(snap: &Snapshot) -> Option<(usize, usize)> {
    let vars = snap.variables();
    let i = vars.get("i")?;
    // the scan covers i..n-1; j marks how far it has got
    let end = vars.get("j").filter(|&j| j > i).unwrap_or(i);
    inclusive(i, end)
}

pub(super) fn index_variables(snap: &Snapshot) -> Vec<(&'static str, i32)> {
    snap.variables().select(&["i", "j", "min"])
}
