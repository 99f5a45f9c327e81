// Heap sort: build a max-heap, then repeatedly move the root behind the heap.
// `siftDown` is a subroutine called from both loops.

use super::{inclusive, invalid_line, len_of, Line};
use crate::interpreter::errors::StepError;
use crate::interpreter::machine::Machine;
use crate::memory::SortArray;
use crate::sink::VisualizationSink;
use crate::snapshot::{Snapshot, Variables};

pub(super) const PSEUDOCODE: &[&str] = &[
    "heapSort(A):",
    "  for k ← n/2-1 down to 0:",
    "    siftDown(A, k, n)",
    "  for end ← n-1 down to 1:",
    "    swap A[0], A[end]",
    "    siftDown(A, 0, end)",
    "siftDown(A, root, size):",
    "  while 2·root+1 < size:",
    "    child ← 2·root+1",
    "    if child+1 < size and A[child+1] > A[child]:",
    "      child ← child+1",
    "    if A[child] ≤ A[root]: return",
    "    swap A[root], A[child]",
    "    root ← child",
];

const BUILD: Line = Line::new(1);
const BUILD_SIFT: Line = Line::new(2);
const EXTRACT: Line = Line::new(3);
const SWAP_ROOT: Line = Line::new(4);
const EXTRACT_SIFT: Line = Line::new(5);
const SIFT_LOOP: Line = Line::new(7);
const LEFT_CHILD: Line = Line::new(8);
const PICK_CHILD: Line = Line::new(9);
const RIGHT_CHILD: Line = Line::new(10);
const CHECK_ORDER: Line = Line::new(11);
const SWAP_CHILD: Line = Line::new(12);
const DESCEND: Line = Line::new(13);

pub(super) fn initial(_len: usize) -> Variables {
    Variables::new()
}

fn sift_args(root: i32, size: i32) -> Variables {
    Variables::new().with("root", root).with("size", size)
}

pub(super) fn enter(from: Line, snap: &mut Snapshot, array: &SortArray) -> Result<(), StepError> {
    let n = len_of(array);
    match snap.line() {
        BUILD => {
            // entered from the start or on return from siftDown
            let k = if from.is_terminal() {
                n / 2 - 1
            } else {
                snap.var("k")? - 1
            };
            snap.set("k", k);
            if k >= 0 {
                snap.goto(BUILD_SIFT);
            } else {
                snap.goto(EXTRACT);
            }
        }
        BUILD_SIFT => {
            let k = snap.var("k")?;
            snap.call(BUILD, SIFT_LOOP, sift_args(k, n))?;
        }
        EXTRACT => {
            let end = if from == BUILD { n - 1 } else { snap.var("end")? - 1 };
            snap.set("end", end);
            if end >= 1 {
                snap.goto(SWAP_ROOT);
            } else {
                snap.leave_subroutine();
            }
        }
        SWAP_ROOT => snap.goto(EXTRACT_SIFT),
        EXTRACT_SIFT => {
            let end = snap.var("end")?;
            snap.call(EXTRACT, SIFT_LOOP, sift_args(0, end))?;
        }
        SIFT_LOOP => {
            if 2 * snap.var("root")? + 1 < snap.var("size")? {
                snap.goto(LEFT_CHILD);
            } else {
                snap.leave_subroutine();
            }
        }
        LEFT_CHILD => {
            let root = snap.var("root")?;
            snap.set("child", 2 * root + 1);
            snap.goto(PICK_CHILD);
        }
        PICK_CHILD => snap.goto(CHECK_ORDER),
        RIGHT_CHILD => {
            let child = snap.var("child")?;
            snap.set("child", child + 1);
            snap.goto(CHECK_ORDER);
        }
        CHECK_ORDER => snap.goto(SWAP_CHILD),
        SWAP_CHILD => snap.goto(DESCEND),
        DESCEND => {
            let child = snap.var("child")?;
            snap.set("root", child);
            snap.goto(SIFT_LOOP);
        }
        _ => return Err(invalid_line(snap)),
    }
    Ok(())
}

pub(super) fn execute<S: VisualizationSink>(snap: &mut Snapshot, m: &mut Machine<S>) -> Result<(), StepError> {
    match snap.line() {
        SWAP_ROOT => {
            snap.wait();
            m.swap(0, snap.var("end")?)?;
        }
        PICK_CHILD => {
            let child = snap.var("child")?;
            if child + 1 < snap.var("size")? {
                snap.wait();
                if m.compare_greater(child + 1, child)? {
                    snap.goto(RIGHT_CHILD);
                }
            }
        }
        CHECK_ORDER => {
            snap.wait();
            if !m.compare_greater(snap.var("child")?, snap.var("root")?)? {
                snap.leave_subroutine();
            }
        }
        SWAP_CHILD => {
            snap.wait();
            m.swap(snap.var("root")?, snap.var("child")?)?;
        }
        _ => {}
    }
    Ok(())
}

pub(super) fn undo<S: VisualizationSink>(snap: &Snapshot, m: &mut Machine<S>) -> Result<(), StepError> {
    match snap.line() {
        SWAP_ROOT => m.undo_swap(0, snap.var("end")?),
        PICK_CHILD => {
            let child = snap.var("child")?;
            if child + 1 < snap.var("size")? {
                m.undo_greater(child + 1, child)?;
            }
            Ok(())
        }
        CHECK_ORDER => m.undo_greater(snap.var("child")?, snap.var("root")?),
        SWAP_CHILD => m.undo_swap(snap.var("root")?, snap.var("child")?),
        _ => Ok(()),
    }
}

pub(super) fn subset(snap: &Snapshot) -> Option<(usize, usize)> {
    let vars = snap.variables();
    // the heap region: 0..size inside siftDown, 0..=end while extracting
    match vars.get("size") {
        Some(size) => inclusive(0, size - 1),
        None => vars.get("end").and_then(|end| inclusive(0, end)),
    }
}

pub(super) fn index_variables(snap: &Snapshot) -> Vec<(&'static str, i32)> {
    snap.variables().select(&["k", "end", "root", "child"])
}
