// Top-down merge sort with an in-place merge built from shift-inserts.
//
// `merge` is entered as a tail call from the last line of `mergeSort`, so when
// it finishes both frames are left in one step.

use super::{inclusive, invalid_line, Line};
use crate::interpreter::errors::StepError;
use crate::interpreter::machine::Machine;
use crate::memory::SortArray;
use crate::sink::VisualizationSink;
use crate::snapshot::{Snapshot, Variables};

pub(super) const PSEUDOCODE: &[&str] = &[
    "mergeSort(A, left, right):",
    "  if left < right:",
    "    mid ← (left+right) / 2",
    "    mergeSort(A, left, mid)",
    "    mergeSort(A, mid+1, right)",
    "    merge(A, left, mid, right)",
    "merge(A, left, mid, right):",
    "  i ← left, j ← mid+1",
    "  while i ≤ mid and j ≤ right:",
    "    if A[i] > A[j]:",
    "      insert A[j] at position i",
    "      mid ← mid+1, j ← j+1",
    "    i ← i+1",
];

const CHECK: Line = Line::new(1);
const SPLIT: Line = Line::new(2);
const SORT_LEFT: Line = Line::new(3);
const SORT_RIGHT: Line = Line::new(4);
const MERGE: Line = Line::new(5);
const MERGE_INIT: Line = Line::new(7);
const MERGE_LOOP: Line = Line::new(8);
const COMPARE: Line = Line::new(9);
const INSERT: Line = Line::new(10);
const SHIFT: Line = Line::new(11);
const ADVANCE: Line = Line::new(12);

pub(super) fn initial(len: usize) -> Variables {
    Variables::new().with("left", 0).with("right", len as i32 - 1)
}

pub(super) fn enter(_from: Line, snap: &mut Snapshot, _array: &SortArray) -> Result<(), StepError> {
    match snap.line() {
        CHECK => {
            if snap.var("left")? < snap.var("right")? {
                snap.goto(SPLIT);
            } else {
                snap.leave_subroutine();
            }
        }
        SPLIT => {
            let mid = (snap.var("left")? + snap.var("right")?) / 2;
            snap.set("mid", mid);
            snap.goto(SORT_LEFT);
        }
        SORT_LEFT => {
            let args = Variables::new()
                .with("left", snap.var("left")?)
                .with("right", snap.var("mid")?);
            snap.call(SORT_RIGHT, CHECK, args)?;
        }
        SORT_RIGHT => {
            let args = Variables::new()
                .with("left", snap.var("mid")? + 1)
                .with("right", snap.var("right")?);
            snap.call(MERGE, CHECK, args)?;
        }
        MERGE => {
            let args = Variables::new()
                .with("left", snap.var("left")?)
                .with("mid", snap.var("mid")?)
                .with("right", snap.var("right")?);
            snap.call(Line::NONE, MERGE_INIT, args)?;
        }
        MERGE_INIT => {
            let (left, mid) = (snap.var("left")?, snap.var("mid")?);
            snap.set("i", left);
            snap.set("j", mid + 1);
            snap.goto(MERGE_LOOP);
        }
        MERGE_LOOP => {
            let (i, j) = (snap.var("i")?, snap.var("j")?);
            if i <= snap.var("mid")? && j <= snap.var("right")? {
                snap.goto(COMPARE);
            } else {
                snap.leave_subroutine();
            }
        }
        COMPARE => snap.goto(ADVANCE),
        INSERT => snap.goto(SHIFT),
        SHIFT => {
            let (mid, j) = (snap.var("mid")?, snap.var("j")?);
            snap.set("mid", mid + 1);
            snap.set("j", j + 1);
            snap.goto(ADVANCE);
        }
        ADVANCE => {
            let i = snap.var("i")?;
            snap.set("i", i + 1);
            snap.goto(MERGE_LOOP);
        }
        _ => return Err(invalid_line(snap)),
    }
    Ok(())
}

pub(super) fn execute<S: VisualizationSink>(snap: &mut Snapshot, m: &mut Machine<S>) -> Result<(), StepError> {
    match snap.line() {
        COMPARE => {
            snap.wait();
            if m.compare_greater(snap.var("i")?, snap.var("j")?)? {
                snap.goto(INSERT);
            }
        }
        INSERT => {
            snap.wait();
            m.insert(snap.var("j")?, snap.var("i")?)?;
        }
        _ => {}
    }
    Ok(())
}

pub(super) fn undo<S: VisualizationSink>(snap: &Snapshot, m: &mut Machine<S>) -> Result<(), StepError> {
    match snap.line() {
        COMPARE => m.undo_greater(snap.var("i")?, snap.var("j")?),
        INSERT => m.undo_insert(snap.var("j")?, snap.var("i")?),
        _ => Ok(()),
    }
}

pub(super) fn subset(snap: &Snapshot) -> Option<(usize, usize)> {
    let vars = snap.variables();
    inclusive(vars.get("left")?, vars.get("right")?)
}

pub(super) fn index_variables(snap: &Snapshot) -> Vec<(&'static str, i32)> {
    let vars = snap.variables();
    if vars.contains("i") {
        vars.select(&["i", "j", "mid"])
    } else {
        vars.select(&["left", "mid", "right"])
    }
}
