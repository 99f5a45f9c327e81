//! Sorting algorithms as line tables
//!
//! Each algorithm is a small state machine over numbered pseudocode lines.
//! A module per algorithm supplies:
//!
//! - `PSEUDOCODE`: the displayed text, row 0 being the header
//! - `initial`: the registers of the start snapshot
//! - `enter`: the control transition for a freshly created snapshot. It sees
//!   the line it came from and a read-only view of the array, updates
//!   registers and picks the default next line.
//! - `execute` / `undo`: the line's data-level side effect and its inverse.
//!   `execute` may redirect the next line on a comparison result.
//! - display helpers: subset, index registers, extra registers
//!
//! Recursive algorithms call subroutines through the snapshot's explicit call
//! stack (see [`Snapshot::call`] and [`Snapshot::leave_subroutine`]) so that a
//! call's interior can be stepped through backwards.

mod bubble;
mod gnome;
mod heap;
mod insertion;
mod merge;
mod quick;
mod radix;
mod selection;

use crate::interpreter::constants::{MAX_CALL_DEPTH, MAX_ELEMENTS};
use crate::interpreter::errors::StepError;
use crate::interpreter::machine::Machine;
use crate::memory::SortArray;
use crate::sink::VisualizationSink;
use crate::snapshot::{Line, Snapshot, Variables};
use std::fmt;
use std::str::FromStr;

/// The supported sorting algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Gnome,
    Quick,
    Merge,
    Heap,
    Radix,
}

impl Algorithm {
    pub const ALL: [Algorithm; 8] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Gnome,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Heap,
        Algorithm::Radix,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Gnome => "gnome",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
            Algorithm::Heap => "heap",
            Algorithm::Radix => "radix",
        }
    }

    pub fn pseudocode(self) -> &'static [&'static str] {
        match self {
            Algorithm::Bubble => bubble::PSEUDOCODE,
            Algorithm::Selection => selection::PSEUDOCODE,
            Algorithm::Insertion => insertion::PSEUDOCODE,
            Algorithm::Gnome => gnome::PSEUDOCODE,
            Algorithm::Quick => quick::PSEUDOCODE,
            Algorithm::Merge => merge::PSEUDOCODE,
            Algorithm::Heap => heap::PSEUDOCODE,
            Algorithm::Radix => radix::PSEUDOCODE,
        }
    }

    /// Whether the algorithm moves elements through buckets
    pub fn uses_buckets(self) -> bool {
        matches!(self, Algorithm::Radix)
    }

    /// Reject inputs the algorithm cannot handle
    pub fn validate(self, values: &[i32]) -> Result<(), StepError> {
        if values.len() > MAX_ELEMENTS {
            return Err(StepError::UnsupportedInput {
                algorithm: self.name(),
                message: format!(
                    "{} elements given, at most {} are supported",
                    values.len(),
                    MAX_ELEMENTS
                ),
            });
        }
        // quicksort holds up to one frame per element on sorted input
        if self == Algorithm::Quick && values.len() > MAX_CALL_DEPTH {
            return Err(StepError::UnsupportedInput {
                algorithm: self.name(),
                message: format!(
                    "{} elements given, recursion is limited to {} elements",
                    values.len(),
                    MAX_CALL_DEPTH
                ),
            });
        }
        if self.uses_buckets() {
            if let Some(v) = values.iter().find(|&&v| v < 0) {
                return Err(StepError::UnsupportedInput {
                    algorithm: self.name(),
                    message: format!("negative value {}", v),
                });
            }
        }
        Ok(())
    }

    pub(crate) fn initial_variables(self, len: usize) -> Variables {
        match self {
            Algorithm::Bubble => bubble::initial(len),
            Algorithm::Selection => selection::initial(len),
            Algorithm::Insertion => insertion::initial(len),
            Algorithm::Gnome => gnome::initial(len),
            Algorithm::Quick => quick::initial(len),
            Algorithm::Merge => merge::initial(len),
            Algorithm::Heap => heap::initial(len),
            Algorithm::Radix => radix::initial(len),
        }
    }

    pub(crate) fn enter(self, from: Line, snap: &mut Snapshot, array: &SortArray) -> Result<(), StepError> {
        match self {
            Algorithm::Bubble => bubble::enter(from, snap, array),
            Algorithm::Selection => selection::enter(from, snap, array),
            Algorithm::Insertion => insertion::enter(from, snap, array),
            Algorithm::Gnome => gnome::enter(from, snap, array),
            Algorithm::Quick => quick::enter(from, snap, array),
            Algorithm::Merge => merge::enter(from, snap, array),
            Algorithm::Heap => heap::enter(from, snap, array),
            Algorithm::Radix => radix::enter(from, snap, array),
        }
    }

    pub(crate) fn execute<S: VisualizationSink>(
        self,
        snap: &mut Snapshot,
        machine: &mut Machine<S>,
    ) -> Result<(), StepError> {
        match self {
            Algorithm::Bubble => bubble::execute(snap, machine),
            Algorithm::Selection => selection::execute(snap, machine),
            Algorithm::Insertion => insertion::execute(snap, machine),
            Algorithm::Gnome => gnome::execute(snap, machine),
            Algorithm::Quick => quick::execute(snap, machine),
            Algorithm::Merge => merge::execute(snap, machine),
            Algorithm::Heap => heap::execute(snap, machine),
            Algorithm::Radix => radix::execute(snap, machine),
        }
    }

    pub(crate) fn undo<S: VisualizationSink>(
        self,
        snap: &Snapshot,
        machine: &mut Machine<S>,
    ) -> Result<(), StepError> {
        match self {
            Algorithm::Bubble => bubble::undo(snap, machine),
            Algorithm::Selection => selection::undo(snap, machine),
            Algorithm::Insertion => insertion::undo(snap, machine),
            Algorithm::Gnome => gnome::undo(snap, machine),
            Algorithm::Quick => quick::undo(snap, machine),
            Algorithm::Merge => merge::undo(snap, machine),
            Algorithm::Heap => heap::undo(snap, machine),
            Algorithm::Radix => radix::undo(snap, machine),
        }
    }

    pub(crate) fn subset(self, snap: &Snapshot) -> Option<(usize, usize)> {
        if snap.line().is_terminal() {
            return None;
        }
        match self {
            Algorithm::Bubble => bubble::subset(snap),
            Algorithm::Selection => selection::subset(snap),
            Algorithm::Insertion => insertion::subset(snap),
            Algorithm::Gnome => gnome::subset(snap),
            Algorithm::Quick => quick::subset(snap),
            Algorithm::Merge => merge::subset(snap),
            Algorithm::Heap => heap::subset(snap),
            Algorithm::Radix => radix::subset(snap),
        }
    }

    pub(crate) fn index_variables(self, snap: &Snapshot) -> Vec<(&'static str, i32)> {
        if snap.line().is_terminal() {
            return Vec::new();
        }
        match self {
            Algorithm::Bubble => bubble::index_variables(snap),
            Algorithm::Selection => selection::index_variables(snap),
            Algorithm::Insertion => insertion::index_variables(snap),
            Algorithm::Gnome => gnome::index_variables(snap),
            Algorithm::Quick => quick::index_variables(snap),
            Algorithm::Merge => merge::index_variables(snap),
            Algorithm::Heap => heap::index_variables(snap),
            Algorithm::Radix => radix::index_variables(snap),
        }
    }

    pub(crate) fn extra_variables(self, snap: &Snapshot) -> Vec<(&'static str, i32)> {
        if snap.line().is_terminal() {
            return Vec::new();
        }
        match self {
            Algorithm::Quick => quick::extra_variables(snap),
            Algorithm::Radix => radix::extra_variables(snap),
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = StepError;

    /// Accepts `quick`, `quicksort` and `quick-sort`, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let base = lower
            .strip_suffix("sort")
            .map(|b| b.trim_end_matches(['-', '_', ' ']))
            .unwrap_or(&lower);
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == base)
            .ok_or_else(|| StepError::UnknownAlgorithm(s.to_string()))
    }
}

// ========== Helpers shared by the line tables ==========

fn len_of(array: &SortArray) -> i32 {
    // bounded by MAX_ELEMENTS at construction
    array.len() as i32
}

/// Inclusive range `lo..=hi`, or `None` when empty or negative
fn inclusive(lo: i32, hi: i32) -> Option<(usize, usize)> {
    if lo >= 0 && lo <= hi {
        Some((lo as usize, hi as usize))
    } else {
        None
    }
}

fn invalid_line(snap: &Snapshot) -> StepError {
    StepError::InvalidLine {
        algorithm: snap.algorithm().name(),
        line: snap.line(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!("QuickSort".parse::<Algorithm>(), Ok(Algorithm::Quick));
        assert_eq!("merge-sort".parse::<Algorithm>(), Ok(Algorithm::Merge));
        assert!(matches!(
            "bogo".parse::<Algorithm>(),
            Err(StepError::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn every_line_has_pseudocode() {
        // row 0 is the header, so the longest table needs index 13
        assert_eq!(Algorithm::Heap.pseudocode().len(), 14);
        assert_eq!(Algorithm::Bubble.pseudocode().len(), 5);
        for algorithm in Algorithm::ALL {
            assert!(algorithm.pseudocode()[0].ends_with(':'));
        }
    }

    #[test]
    fn radix_rejects_negative_values() {
        assert!(Algorithm::Radix.validate(&[3, -1]).is_err());
        assert!(Algorithm::Quick.validate(&[3, -1]).is_ok());
    }

    #[test]
    fn quick_input_is_bounded_by_call_depth() {
        assert!(Algorithm::Quick.validate(&vec![0; MAX_CALL_DEPTH]).is_ok());
        assert!(matches!(
            Algorithm::Quick.validate(&vec![0; MAX_CALL_DEPTH + 1]),
            Err(StepError::UnsupportedInput { .. })
        ));
        assert!(Algorithm::Merge.validate(&vec![0; MAX_CALL_DEPTH + 1]).is_ok());
    }

    #[test]
    fn inclusive_ranges() {
        assert_eq!(inclusive(0, 3), Some((0, 3)));
        assert_eq!(inclusive(2, 2), Some((2, 2)));
        assert_eq!(inclusive(3, 2), None);
        assert_eq!(inclusive(-1, 2), None);
    }
}
