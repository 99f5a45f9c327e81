// Gnome sort: one cursor that steps back after every swap

use super::{invalid_line, len_of, Line};
use crate::interpreter::errors::StepError;
use crate::interpreter::machine::Machine;
use crate::memory::SortArray;
use crate::sink::VisualizationSink;
use crate::snapshot::{Snapshot, Variables};

pub(super) const PSEUDOCODE: &[&str] = &[
    "gnomeSort(A):",
    "  i ← 0",
    "  while i < n:",
    "    if i > 0 and A[i-1] > A[i]:",
    "      swap A[i-1], A[i]",
    "      i ← i-1",
    "    else: i ← i+1",
];

const INIT: Line = Line::new(1);
const LOOP: Line = Line::new(2);
const COMPARE: Line = Line::new(3);
const SWAP: Line = Line::new(4);
const STEP_BACK: Line = Line::new(5);
const STEP_FORWARD: Line = Line::new(6);

pub(super) fn initial(_len: usize) -> Variables {
    Variables::new()
}

pub(super) fn enter(_from: Line, snap: &mut Snapshot, array: &SortArray) -> Result<(), StepError> {
    match snap.line() {
        INIT => {
            snap.set("i", 0);
            snap.goto(LOOP);
        }
        LOOP => {
            if snap.var("i")? < len_of(array) {
                snap.goto(COMPARE);
            } else {
                snap.leave_subroutine();
            }
        }
        COMPARE => snap.goto(STEP_FORWARD),
        SWAP => snap.goto(STEP_BACK),
        STEP_BACK => {
            let i = snap.var("i")?;
            snap.set("i", i - 1);
            snap.goto(LOOP);
        }
        STEP_FORWARD => {
            let i = snap.var("i")?;
            snap.set("i", i + 1);
            snap.goto(LOOP);
        }
        _ => return Err(invalid_line(snap)),
    }
    Ok(())
}

pub(super) fn execute<S: VisualizationSink>(snap: &mut Snapshot, m: &mut Machine<S>) -> Result<(), StepError> {
    match snap.line() {
        COMPARE => {
            let i = snap.var("i")?;
            if i > 0 {
                snap.wait();
                if m.compare_greater(i - 1, i)? {
                    snap.goto(SWAP);
                }
            }
        }
        SWAP => {
            let i = snap.var("i")?;
            snap.wait();
            m.swap(i - 1, i)?;
        }
        _ => {}
    }
    Ok(())
}

pub(super) fn undo<S: VisualizationSink>(snap: &Snapshot, m: &mut Machine<S>) -> Result<(), StepError> {
    match snap.line() {
        COMPARE => {
            let i = snap.var("i")?;
            if i > 0 {
                m.undo_greater(i - 1, i)?;
            }
            Ok(())
        }
        SWAP => {
            let i = snap.var("i")?;
            m.undo_swap(i - 1, i)
        }
        _ => Ok(()),
    }
}

pub(super) fn subset(_snap: &Snapshot) -> Option<(usize, usize)> {
    None
}

pub(super) fn index_variables(snap: &Snapshot) -> Vec<(&'static str, i32)> {
    snap.variables().select(&["i"])
}
