//! Visualization boundary
//!
//! The stepper never renders anything itself. It reports what happened to a
//! [`VisualizationSink`]: which pseudocode line is current, which indices are
//! in scope, and every data-level operation as it is applied or undone. The
//! sink owns timing; [`Snapshot::requires_wait`](crate::snapshot::Snapshot::requires_wait)
//! only tells a driver that the sink will animate the step and report
//! completion on its own schedule.
//!
//! All methods have empty default bodies so a sink only implements the events
//! it cares about.

use crate::snapshot::Line;

#[allow(unused_variables)]
pub trait VisualizationSink {
    /// Highlighted pseudocode line and the extra registers to show next to it
    fn set_pseudocode(&mut self, line: Line, extra: &[(&'static str, i32)]) {}

    /// Highlight an inclusive index range; `None` clears the highlight
    fn mark_current_subset(&mut self, subset: Option<(usize, usize)>) {}

    /// Named pointer labels; values outside the array are not displayed
    fn display_indices(&mut self, indices: &[(&'static str, i32)]) {}

    /// The visual consequence of the current step is complete
    fn move_finished(&mut self) {}

    fn sorting_finished(&mut self) {}

    fn set_swaps_comparisons(&mut self, swaps: u32, comparisons: u32) {}

    fn swap(&mut self, i: usize, j: usize) {}

    fn insert(&mut self, from: usize, to: usize) {}

    /// A comparison was made; `result` is `A[i] > A[j]`
    fn compare_greater(&mut self, i: usize, j: usize, result: bool) {}

    fn visualize_max_value(&mut self, index: usize) {}

    fn visualize_bucket_number(&mut self, index: usize, bucket: usize) {}

    fn move_to_bucket(&mut self, from: usize, bucket: usize) {}

    fn undo_move_to_bucket(&mut self, from: usize, bucket: usize, value: i32) {}

    fn move_from_bucket(&mut self, to: usize, bucket: usize, value: i32) {}

    fn undo_move_from_bucket(&mut self, to: usize, bucket: usize) {}

    fn show_buckets(&mut self) {}

    fn hide_buckets(&mut self) {}
}

/// Sink that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl VisualizationSink for NullSink {}

/// One event received by a [`RecordingSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Pseudocode(Line, Vec<(&'static str, i32)>),
    Subset(Option<(usize, usize)>),
    Indices(Vec<(&'static str, i32)>),
    MoveFinished,
    SortingFinished,
    Counts { swaps: u32, comparisons: u32 },
    Swap(usize, usize),
    Insert(usize, usize),
    CompareGreater(usize, usize, bool),
    MaxValue(usize),
    BucketNumber(usize, usize),
    MoveToBucket(usize, usize),
    UndoMoveToBucket(usize, usize, i32),
    MoveFromBucket(usize, usize, i32),
    UndoMoveFromBucket(usize, usize),
    ShowBuckets,
    HideBuckets,
}

/// Sink that records every event, in order
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        RecordingSink::default()
    }

    /// Take the recorded events, leaving the log empty
    pub fn drain(&mut self) -> Vec<SinkEvent> {
        std::mem::take(&mut self.events)
    }
}

impl VisualizationSink for RecordingSink {
    fn set_pseudocode(&mut self, line: Line, extra: &[(&'static str, i32)]) {
        self.events.push(SinkEvent::Pseudocode(line, extra.to_vec()));
    }

    fn mark_current_subset(&mut self, subset: Option<(usize, usize)>) {
        self.events.push(SinkEvent::Subset(subset));
    }

    fn display_indices(&mut self, indices: &[(&'static str, i32)]) {
        self.events.push(SinkEvent::Indices(indices.to_vec()));
    }

    fn move_finished(&mut self) {
        self.events.push(SinkEvent::MoveFinished);
    }

    fn sorting_finished(&mut self) {
        self.events.push(SinkEvent::SortingFinished);
    }

    fn set_swaps_comparisons(&mut self, swaps: u32, comparisons: u32) {
        self.events.push(SinkEvent::Counts { swaps, comparisons });
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.events.push(SinkEvent::Swap(i, j));
    }

    fn insert(&mut self, from: usize, to: usize) {
        self.events.push(SinkEvent::Insert(from, to));
    }

    fn compare_greater(&mut self, i: usize, j: usize, result: bool) {
        self.events.push(SinkEvent::CompareGreater(i, j, result));
    }

    fn visualize_max_value(&mut self, index: usize) {
        self.events.push(SinkEvent::MaxValue(index));
    }

    fn visualize_bucket_number(&mut self, index: usize, bucket: usize) {
        self.events.push(SinkEvent::BucketNumber(index, bucket));
    }

    fn move_to_bucket(&mut self, from: usize, bucket: usize) {
        self.events.push(SinkEvent::MoveToBucket(from, bucket));
    }

    fn undo_move_to_bucket(&mut self, from: usize, bucket: usize, value: i32) {
        self.events
            .push(SinkEvent::UndoMoveToBucket(from, bucket, value));
    }

    fn move_from_bucket(&mut self, to: usize, bucket: usize, value: i32) {
        self.events.push(SinkEvent::MoveFromBucket(to, bucket, value));
    }

    fn undo_move_from_bucket(&mut self, to: usize, bucket: usize) {
        self.events.push(SinkEvent::UndoMoveFromBucket(to, bucket));
    }

    fn show_buckets(&mut self) {
        self.events.push(SinkEvent::ShowBuckets);
    }

    fn hide_buckets(&mut self) {
        self.events.push(SinkEvent::HideBuckets);
    }
}
