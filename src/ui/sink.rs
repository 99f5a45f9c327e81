//! Display state fed by the stepper
//!
//! [`TuiSink`] turns sink events into what the panes draw: the highlighted
//! line, the subset, index labels and the operation in flight. It also owns
//! animation timing. An operation event starts a move that stays in flight
//! until `MoveFinished` arrives or the move duration elapses, and auto-play
//! waits while any move is in flight.

use crate::sink::VisualizationSink;
use crate::snapshot::Line;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// The data-level operation shown in the array and bucket panes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Compare { i: usize, j: usize, greater: bool },
    Swap(usize, usize),
    Insert { from: usize, to: usize },
    MaxValue(usize),
    BucketNumber { index: usize, bucket: usize },
    ToBucket { index: usize, bucket: usize },
    FromBucket { index: usize, bucket: usize },
}

impl Highlight {
    /// Array positions the operation touches
    pub fn positions(self) -> [Option<usize>; 2] {
        match self {
            Highlight::Compare { i, j, .. } => [Some(i), Some(j)],
            Highlight::Swap(i, j) => [Some(i), Some(j)],
            Highlight::Insert { from, to } => [Some(from), Some(to)],
            Highlight::MaxValue(index)
            | Highlight::BucketNumber { index, .. }
            | Highlight::ToBucket { index, .. }
            | Highlight::FromBucket { index, .. } => [Some(index), None],
        }
    }

    pub fn bucket(self) -> Option<usize> {
        match self {
            Highlight::BucketNumber { bucket, .. }
            | Highlight::ToBucket { bucket, .. }
            | Highlight::FromBucket { bucket, .. } => Some(bucket),
            _ => None,
        }
    }

    pub fn is_compare(self) -> bool {
        matches!(self, Highlight::Compare { .. } | Highlight::MaxValue(_))
    }

    /// Short description for the status line
    pub fn describe(self) -> String {
        match self {
            Highlight::Compare { i, j, greater } => {
                format!("A[{}] > A[{}] is {}", i, j, greater)
            }
            Highlight::Swap(i, j) => format!("swap A[{}], A[{}]", i, j),
            Highlight::Insert { from, to } => format!("insert A[{}] at {}", from, to),
            Highlight::MaxValue(i) => format!("maximum at A[{}]", i),
            Highlight::BucketNumber { index, bucket } => {
                format!("A[{}] belongs in bucket {}", index, bucket)
            }
            Highlight::ToBucket { index, bucket } => {
                format!("A[{}] → bucket {}", index, bucket)
            }
            Highlight::FromBucket { index, bucket } => {
                format!("bucket {} → A[{}]", bucket, index)
            }
        }
    }
}

/// Sink that keeps the state the panes render
#[derive(Debug)]
pub struct TuiSink {
    pub line: Line,
    pub extra: Vec<(&'static str, i32)>,
    pub subset: Option<(usize, usize)>,
    /// Register names pointing at each array position
    pub labels: FxHashMap<usize, Vec<&'static str>>,
    pub highlight: Option<Highlight>,
    pub swaps: u32,
    pub comparisons: u32,
    pub show_buckets: bool,
    pub finished: bool,
    move_started: Option<Instant>,
    move_duration: Duration,
}

impl TuiSink {
    pub fn new(move_duration: Duration) -> Self {
        TuiSink {
            line: Line::NONE,
            extra: Vec::new(),
            subset: None,
            labels: FxHashMap::default(),
            highlight: None,
            swaps: 0,
            comparisons: 0,
            show_buckets: false,
            finished: false,
            move_started: None,
            move_duration,
        }
    }

    pub fn move_duration(&self) -> Duration {
        self.move_duration
    }

    pub fn set_move_duration(&mut self, duration: Duration) {
        self.move_duration = duration;
    }

    /// Whether a move is still animating
    pub fn is_moving(&self) -> bool {
        self.move_started
            .is_some_and(|started| started.elapsed() < self.move_duration)
    }

    /// Finish the move in flight once its time is up
    pub fn tick(&mut self) {
        if self.move_started.is_some() && !self.is_moving() {
            self.move_started = None;
        }
    }

    fn start_move(&mut self, highlight: Highlight) {
        self.highlight = Some(highlight);
        self.move_started = Some(Instant::now());
    }
}

impl VisualizationSink for TuiSink {
    fn set_pseudocode(&mut self, line: Line, extra: &[(&'static str, i32)]) {
        self.line = line;
        self.extra = extra.to_vec();
        // stepping back from the end reopens the run
        if !line.is_terminal() {
            self.finished = false;
        }
    }

    fn mark_current_subset(&mut self, subset: Option<(usize, usize)>) {
        self.subset = subset;
    }

    fn display_indices(&mut self, indices: &[(&'static str, i32)]) {
        self.labels.clear();
        for &(name, index) in indices {
            if let Ok(index) = usize::try_from(index) {
                self.labels.entry(index).or_default().push(name);
            }
        }
    }

    fn move_finished(&mut self) {
        self.move_started = None;
    }

    fn sorting_finished(&mut self) {
        self.finished = true;
        self.highlight = None;
        self.subset = None;
        self.labels.clear();
    }

    fn set_swaps_comparisons(&mut self, swaps: u32, comparisons: u32) {
        self.swaps = swaps;
        self.comparisons = comparisons;
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.start_move(Highlight::Swap(i, j));
    }

    fn insert(&mut self, from: usize, to: usize) {
        self.start_move(Highlight::Insert { from, to });
    }

    fn compare_greater(&mut self, i: usize, j: usize, result: bool) {
        self.start_move(Highlight::Compare {
            i,
            j,
            greater: result,
        });
    }

    fn visualize_max_value(&mut self, index: usize) {
        self.start_move(Highlight::MaxValue(index));
    }

    fn visualize_bucket_number(&mut self, index: usize, bucket: usize) {
        self.start_move(Highlight::BucketNumber { index, bucket });
    }

    fn move_to_bucket(&mut self, from: usize, bucket: usize) {
        self.start_move(Highlight::ToBucket {
            index: from,
            bucket,
        });
    }

    fn undo_move_to_bucket(&mut self, from: usize, bucket: usize, _value: i32) {
        self.start_move(Highlight::FromBucket {
            index: from,
            bucket,
        });
    }

    fn move_from_bucket(&mut self, to: usize, bucket: usize, _value: i32) {
        self.start_move(Highlight::FromBucket { index: to, bucket });
    }

    fn undo_move_from_bucket(&mut self, to: usize, bucket: usize) {
        self.start_move(Highlight::ToBucket { index: to, bucket });
    }

    fn show_buckets(&mut self) {
        self.show_buckets = true;
    }

    fn hide_buckets(&mut self) {
        self.show_buckets = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_group_registers_by_position() {
        let mut sink = TuiSink::new(Duration::ZERO);
        sink.display_indices(&[("i", 2), ("j", 2), ("k", 0), ("lo", -1)]);
        assert_eq!(sink.labels.get(&2), Some(&vec!["i", "j"]));
        assert_eq!(sink.labels.get(&0), Some(&vec!["k"]));
        assert_eq!(sink.labels.len(), 2);
    }

    #[test]
    fn move_stays_in_flight_until_finished() {
        let mut sink = TuiSink::new(Duration::from_secs(60));
        sink.swap(0, 1);
        assert!(sink.is_moving());
        sink.tick();
        assert!(sink.is_moving());
        sink.move_finished();
        assert!(!sink.is_moving());
        assert_eq!(sink.highlight, Some(Highlight::Swap(0, 1)));
    }

    #[test]
    fn zero_duration_moves_never_block() {
        let mut sink = TuiSink::new(Duration::ZERO);
        sink.compare_greater(0, 1, true);
        assert!(!sink.is_moving());
    }

    #[test]
    fn stepping_back_from_the_end_clears_finished() {
        let mut sink = TuiSink::new(Duration::ZERO);
        sink.mark_current_subset(Some((0, 2)));
        sink.display_indices(&[("i", 1)]);
        sink.sorting_finished();
        assert!(sink.finished);
        assert_eq!(sink.subset, None);
        assert!(sink.labels.is_empty());
        sink.set_pseudocode(Line::new(2), &[]);
        assert!(!sink.finished);
    }
}
