// Insertion sort: scan left for the insertion point, then one shift-insert

use super::{inclusive, invalid_line, len_of, Line};
use crate::interpreter::errors::StepError;
use crate::interpreter::machine::Machine;
use crate::memory::SortArray;
use crate::sink::VisualizationSink;
use crate::snapshot::{Snapshot, Variables};

pub(super) const PSEUDOCODE: &[&str] = &[
    "insertionSort(A):",
    "  for i ← 1 to n-1:",
    "    j ← i-1",
    "    while j ≥ 0 and A[j] > A[i]:",
    "      j ← j-1",
    "    insert A[i] at position j+1",
];

const OUTER: Line = Line::new(1);
const START_SCAN: Line = Line::new(2);
const SCAN: Line = Line::new(3);
const STEP_LEFT: Line = Line::new(4);
const INSERT: Line = Line::new(5);

pub(super) fn initial(_len: usize) -> Variables {
    Variables::new()
}

pub(super) fn enter(from: Line, snap: &mut Snapshot, array: &SortArray) -> Result<(), StepError> {
    match snap.line() {
        OUTER => {
            let i = if from.is_terminal() { 1 } else { snap.var("i")? + 1 };
            snap.set("i", i);
            if i <= len_of(array) - 1 {
                snap.goto(START_SCAN);
            } else {
                snap.leave_subroutine();
            }
        }
        START_SCAN => {
            let i = snap.var("i")?;
            snap.set("j", i - 1);
            snap.goto(SCAN);
        }
        // only falls through to STEP_LEFT on a successful comparison
        SCAN => snap.goto(INSERT),
        STEP_LEFT => {
            let j = snap.var("j")?;
            snap.set("j", j - 1);
            snap.goto(SCAN);
        }
        INSERT => snap.goto(OUTER),
        _ => return Err(invalid_line(snap)),
    }
    Ok(())
}

pub(super) fn execute<S: VisualizationSink>(snap: &mut Snapshot, m: &mut Machine<S>) -> Result<(), StepError> {
    match snap.line() {
        SCAN => {
            let j = snap.var("j")?;
            if j >= 0 {
                snap.wait();
                if m.compare_greater(j, snap.var("i")?)? {
                    snap.goto(STEP_LEFT);
                }
            }
        }
        INSERT => {
            let (i, to) = (snap.var("i")?, snap.var("j")? + 1);
            if i != to {
                snap.wait();
                m.insert(i, to)?;
            }
        }
        _ => {}
    }
    Ok(())
}

pub(super) fn undo<S: VisualizationSink>(snap: &Snapshot, m: &mut Machine<S>) -> Result<(), StepError> {
    match snap.line() {
        SCAN => {
            let j = snap.var("j")?;
            if j >= 0 {
                m.undo_greater(j, snap.var("i")?)?;
            }
            Ok(())
        }
        INSERT => {
            let (i, to) = (snap.var("i")?, snap.var("j")? + 1);
            if i != to {
                m.undo_insert(i, to)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

pub(super) fn subset(snap: &Snapshot) -> Option<(usize, usize)> {
    // sorted prefix plus the element being placed
    snap.variables().get("i").and_then(|i| inclusive(0, i))
}

pub(super) fn index_variables(snap: &Snapshot) -> Vec<(&'static str, i32)> {
    snap.variables().select(&["i", "j"])
}
