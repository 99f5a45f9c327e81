// Quicksort with Lomuto partitioning.
//
// Both recursive calls go through the snapshot's call stack. The second call
// is a tail call: it resumes at `Line::NONE`, so when it returns the caller's
// frame is unwound in the same step.

use super::{inclusive, invalid_line, Line};
use crate::interpreter::errors::StepError;
use crate::interpreter::machine::Machine;
use crate::memory::SortArray;
use crate::sink::VisualizationSink;
use crate::snapshot::{Snapshot, Variables};

pub(super) const PSEUDOCODE: &[&str] = &[
    "quickSort(A, lo, hi):",
    "  if lo < hi:",
    "    p ← A[hi]",
    "    i ← lo-1",
    "    for j ← lo to hi-1:",
    "      if A[j] ≤ p:",
    "        i ← i+1",
    "        swap A[i], A[j]",
    "    swap A[i+1], A[hi]",
    "    quickSort(A, lo, i)",
    "    quickSort(A, i+2, hi)",
];

const CHECK: Line = Line::new(1);
const PIVOT: Line = Line::new(2);
const INIT_I: Line = Line::new(3);
const SCAN: Line = Line::new(4);
const COMPARE: Line = Line::new(5);
const ADVANCE: Line = Line::new(6);
const SWAP: Line = Line::new(7);
const PLACE_PIVOT: Line = Line::new(8);
const RECURSE_LEFT: Line = Line::new(9);
const RECURSE_RIGHT: Line = Line::new(10);

pub(super) fn initial(len: usize) -> Variables {
    Variables::new().with("lo", 0).with("hi", len as i32 - 1)
}

fn range(lo: i32, hi: i32) -> Variables {
    Variables::new().with("lo", lo).with("hi", hi)
}

pub(super) fn enter(from: Line, snap: &mut Snapshot, array: &SortArray) -> Result<(), StepError> {
    match snap.line() {
        CHECK => {
            if snap.var("lo")? < snap.var("hi")? {
                snap.goto(PIVOT);
            } else {
                snap.leave_subroutine();
            }
        }
        PIVOT => {
            let p = array.value("pivot", snap.var("hi")?)?;
            snap.set("p", p);
            snap.goto(INIT_I);
        }
        INIT_I => {
            let lo = snap.var("lo")?;
            snap.set("i", lo - 1);
            snap.goto(SCAN);
        }
        SCAN => {
            let j = if from == INIT_I {
                snap.var("lo")?
            } else {
                snap.var("j")? + 1
            };
            snap.set("j", j);
            if j < snap.var("hi")? {
                snap.goto(COMPARE);
            } else {
                snap.goto(PLACE_PIVOT);
            }
        }
        COMPARE => snap.goto(ADVANCE),
        ADVANCE => {
            let i = snap.var("i")?;
            snap.set("i", i + 1);
            snap.goto(SWAP);
        }
        SWAP => snap.goto(SCAN),
        PLACE_PIVOT => snap.goto(RECURSE_LEFT),
        RECURSE_LEFT => {
            let (lo, i) = (snap.var("lo")?, snap.var("i")?);
            snap.call(RECURSE_RIGHT, CHECK, range(lo, i))?;
        }
        RECURSE_RIGHT => {
            let (i, hi) = (snap.var("i")?, snap.var("hi")?);
            snap.call(Line::NONE, CHECK, range(i + 2, hi))?;
        }
        _ => return Err(invalid_line(snap)),
    }
    Ok(())
}

pub(super) fn execute<S: VisualizationSink>(snap: &mut Snapshot, m: &mut Machine<S>) -> Result<(), StepError> {
    match snap.line() {
        COMPARE => {
            snap.wait();
            if m.compare_greater(snap.var("j")?, snap.var("hi")?)? {
                snap.goto(SCAN);
            }
        }
        SWAP => {
            let (i, j) = (snap.var("i")?, snap.var("j")?);
            if i != j {
                snap.wait();
                m.swap(i, j)?;
            }
        }
        PLACE_PIVOT => {
            let (i, hi) = (snap.var("i")? + 1, snap.var("hi")?);
            if i != hi {
                snap.wait();
                m.swap(i, hi)?;
            }
        }
        _ => {}
    }
    Ok(())
}

pub(super) fn undo<S: VisualizationSink>(snap: &Snapshot, m: &mut Machine<S>) -> Result<(), StepError> {
    match snap.line() {
        COMPARE => m.undo_greater(snap.var("j")?, snap.var("hi")?),
        SWAP => {
            let (i, j) = (snap.var("i")?, snap.var("j")?);
            if i != j {
                m.undo_swap(i, j)?;
            }
            Ok(())
        }
        PLACE_PIVOT => {
            let (i, hi) = (snap.var("i")? + 1, snap.var("hi")?);
            if i != hi {
                m.undo_swap(i, hi)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

pub(super) fn subset(snap: &Snapshot) -> Option<(usize, usize)> {
    let vars = snap.variables();
    inclusive(vars.get("lo")?, vars.get("hi")?)
}

pub(super) fn index_variables(snap: &Snapshot) -> Vec<(&'static str, i32)> {
    snap.variables().select(&["lo", "hi", "i", "j"])
}

pub(super) fn extra_variables(snap: &Snapshot) -> Vec<(&'static str, i32)> {
    snap.variables().select(&["p"])
}
