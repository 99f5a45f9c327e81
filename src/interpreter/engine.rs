// Stepping controller for the sorting interpreter

use crate::algorithms::Algorithm;
use crate::interpreter::constants::DEFAULT_HISTORY_LIMIT;
use crate::interpreter::errors::StepError;
use crate::interpreter::machine::Machine;
use crate::memory::SortArray;
use crate::sink::VisualizationSink;
use crate::snapshot::{History, Line, Snapshot};

/// What a single step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A line was executed (forward) or undone (backward)
    Stepped,
    /// Forward step at the end; nothing was executed
    Finished,
    /// Backward step at the start; nothing was undone
    AtStart,
}

/// Drives one algorithm over one input, forwards and backwards.
///
/// The stepper owns the snapshot history and the [`Machine`] holding the data.
/// Every forward step appends exactly one snapshot and every backward step
/// pops exactly one, undoing its side effect.
pub struct Stepper<S> {
    algorithm: Algorithm,
    history: History,
    machine: Machine<S>,
}

impl<S: VisualizationSink> Stepper<S> {
    /// Create a stepper with the default history limit
    pub fn new(algorithm: Algorithm, values: Vec<i32>, sink: S) -> Result<Self, StepError> {
        Self::with_history_limit(algorithm, values, sink, DEFAULT_HISTORY_LIMIT)
    }

    /// Create a stepper whose history may hold at most `limit` estimated bytes
    pub fn with_history_limit(
        algorithm: Algorithm,
        values: Vec<i32>,
        sink: S,
        limit: usize,
    ) -> Result<Self, StepError> {
        algorithm.validate(&values)?;
        let initial = Snapshot::initial(algorithm, values.len());
        let mut stepper = Stepper {
            algorithm,
            history: History::new(initial, limit),
            machine: Machine::new(SortArray::new(values), sink),
        };

        if algorithm.uses_buckets() {
            stepper.machine.sink_mut().show_buckets();
        } else {
            stepper.machine.sink_mut().hide_buckets();
        }
        stepper.emit_current();
        stepper.machine.emit_counts();
        Ok(stepper)
    }

    /// Execute the next line.
    ///
    /// At the end this reports [`StepOutcome::Finished`] and changes nothing,
    /// so it is safe to call repeatedly.
    pub fn step_forward(&mut self) -> Result<StepOutcome, StepError> {
        let mut next = self.history.current().next(self.machine.array())?;

        if next.line().is_terminal() {
            let sink = self.machine.sink_mut();
            sink.set_pseudocode(Line::NONE, &[]);
            sink.move_finished();
            sink.sorting_finished();
            self.machine.emit_counts();
            return Ok(StepOutcome::Finished);
        }

        // the side effect must not run unless the snapshot can be kept
        self.history.check_capacity(&next)?;
        next.execute(&mut self.machine)?;
        let requires_wait = next.requires_wait();
        self.history.push(next)?;

        self.emit_current();
        if !requires_wait {
            self.machine.sink_mut().move_finished();
        }
        self.machine.emit_counts();
        Ok(StepOutcome::Stepped)
    }

    /// Undo the last executed line.
    ///
    /// At the start this resets the counters, clears highlighting and reports
    /// [`StepOutcome::AtStart`].
    pub fn step_backward(&mut self) -> Result<StepOutcome, StepError> {
        if self.history.is_at_start() {
            self.machine.reset_counters();
            let sink = self.machine.sink_mut();
            sink.move_finished();
            sink.mark_current_subset(None);
            self.machine.emit_counts();
            return Ok(StepOutcome::AtStart);
        }

        // undo before popping so a failed undo keeps the history intact
        self.history.current().undo(&mut self.machine)?;
        let requires_wait = self
            .history
            .pop()
            .map_or(false, |popped| popped.requires_wait());

        self.emit_current();
        if !requires_wait {
            self.machine.sink_mut().move_finished();
        }
        self.machine.emit_counts();
        Ok(StepOutcome::Stepped)
    }

    /// Step forward until the end; returns the number of lines executed
    pub fn run_to_end(&mut self) -> Result<usize, StepError> {
        let mut steps = 0;
        while self.step_forward()? == StepOutcome::Stepped {
            steps += 1;
        }
        Ok(steps)
    }

    /// Step backward until the start; returns the number of lines undone
    pub fn rewind_to_start(&mut self) -> Result<usize, StepError> {
        let mut steps = 0;
        while self.step_backward()? == StepOutcome::Stepped {
            steps += 1;
        }
        Ok(steps)
    }

    /// Send line, subset and index labels of the current snapshot to the sink
    fn emit_current(&mut self) {
        let current = self.history.current();
        let line = current.line();
        let extra = current.extra_variables();
        let indices = current.index_variables();
        let subset = clamp_subset(current.subset(), self.machine.array().len());

        let sink = self.machine.sink_mut();
        sink.set_pseudocode(line, &extra);
        sink.mark_current_subset(subset);
        sink.display_indices(&indices);
    }

    // ========== Getter methods for UI ==========

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn current(&self) -> &Snapshot {
        self.history.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Number of snapshots, including the initial one
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn swaps(&self) -> u32 {
        self.machine.swaps()
    }

    pub fn comparisons(&self) -> u32 {
        self.machine.comparisons()
    }

    pub fn array(&self) -> &SortArray {
        self.machine.array()
    }

    pub fn sink(&self) -> &S {
        self.machine.sink()
    }

    pub fn sink_mut(&mut self) -> &mut S {
        self.machine.sink_mut()
    }

    /// True once the next forward step would report [`StepOutcome::Finished`]
    pub fn is_finished(&self) -> bool {
        let current = self.history.current();
        !self.history.is_at_start() && current.next_line().is_terminal()
    }

    pub fn is_at_start(&self) -> bool {
        self.history.is_at_start()
    }
}

/// Some loops leave their subset one past the end; keep it inside the array
fn clamp_subset(subset: Option<(usize, usize)>, len: usize) -> Option<(usize, usize)> {
    let (lo, hi) = subset?;
    if lo >= len {
        return None;
    }
    Some((lo, hi.min(len - 1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{NullSink, RecordingSink, SinkEvent};

    #[test]
    fn bubble_first_steps_emit_in_order() {
        let mut stepper = Stepper::new(Algorithm::Bubble, vec![3, 1, 2], RecordingSink::new()).unwrap();
        let start = stepper.sink_mut().drain();
        assert_eq!(start[0], SinkEvent::HideBuckets);
        assert_eq!(start.last(), Some(&SinkEvent::Counts { swaps: 0, comparisons: 0 }));

        // outer loop header: no data effect, finishes synchronously
        stepper.step_forward().unwrap();
        assert_eq!(
            stepper.sink_mut().drain(),
            vec![
                SinkEvent::Pseudocode(Line::new(1), vec![]),
                SinkEvent::Subset(Some((0, 2))),
                SinkEvent::Indices(vec![("i", 2)]),
                SinkEvent::MoveFinished,
                SinkEvent::Counts { swaps: 0, comparisons: 0 },
            ]
        );

        stepper.step_forward().unwrap();
        stepper.sink_mut().drain();

        // the comparison waits for the visual layer
        stepper.step_forward().unwrap();
        let events = stepper.sink_mut().drain();
        assert_eq!(events[0], SinkEvent::CompareGreater(0, 1, true));
        assert_eq!(events[1], SinkEvent::Pseudocode(Line::new(3), vec![]));
        assert!(!events.contains(&SinkEvent::MoveFinished));
        assert_eq!(events.last(), Some(&SinkEvent::Counts { swaps: 0, comparisons: 1 }));

        stepper.step_forward().unwrap();
        assert_eq!(stepper.current().line(), Line::new(4));
        assert_eq!(stepper.array().to_vec(), Some(vec![1, 3, 2]));
        assert_eq!(stepper.swaps(), 1);
    }

    #[test]
    fn backward_at_start_is_idempotent() {
        let mut stepper = Stepper::new(Algorithm::Quick, vec![2, 1], RecordingSink::new()).unwrap();
        stepper.sink_mut().drain();
        for _ in 0..3 {
            assert_eq!(stepper.step_backward(), Ok(StepOutcome::AtStart));
            assert_eq!(
                stepper.sink_mut().drain(),
                vec![
                    SinkEvent::MoveFinished,
                    SinkEvent::Subset(None),
                    SinkEvent::Counts { swaps: 0, comparisons: 0 },
                ]
            );
        }
        assert_eq!(stepper.history_len(), 1);
    }

    #[test]
    fn finishing_emits_only_the_end_events() {
        let mut stepper = Stepper::new(Algorithm::Bubble, vec![1], RecordingSink::new()).unwrap();
        while stepper.step_forward().unwrap() == StepOutcome::Stepped {}
        let events = stepper.sink_mut().drain();
        let tail = &events[events.len() - 4..];
        assert_eq!(
            tail,
            &[
                SinkEvent::Pseudocode(Line::NONE, vec![]),
                SinkEvent::MoveFinished,
                SinkEvent::SortingFinished,
                SinkEvent::Counts { swaps: 0, comparisons: 0 },
            ]
        );

        assert_eq!(stepper.step_forward(), Ok(StepOutcome::Finished));
        assert_eq!(stepper.sink_mut().drain(), tail.to_vec());
    }

    #[test]
    fn forward_at_end_is_idempotent() {
        let mut stepper = Stepper::new(Algorithm::Selection, vec![2, 1, 3], NullSink).unwrap();
        let steps = stepper.run_to_end().unwrap();
        assert!(stepper.is_finished());
        assert_eq!(stepper.history_len(), steps + 1);
        assert_eq!(stepper.step_forward(), Ok(StepOutcome::Finished));
        assert_eq!(stepper.history_len(), steps + 1);
        assert_eq!(stepper.array().to_vec(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn empty_and_single_inputs_finish_immediately() {
        for algorithm in Algorithm::ALL {
            for values in [vec![], vec![7]] {
                let mut stepper = Stepper::new(algorithm, values.clone(), NullSink).unwrap();
                stepper.run_to_end().unwrap();
                assert!(stepper.current().frames().is_empty(), "{}", algorithm);
                assert_eq!(stepper.array().to_vec(), Some(values));
                if !algorithm.uses_buckets() {
                    assert_eq!(stepper.swaps() + stepper.comparisons(), 0, "{}", algorithm);
                }
            }
        }
    }

    #[test]
    fn history_limit_stops_before_side_effect() {
        let initial_size = Snapshot::initial(Algorithm::Bubble, 2).estimated_size();
        let mut stepper =
            Stepper::with_history_limit(Algorithm::Bubble, vec![2, 1], NullSink, initial_size).unwrap();
        assert!(matches!(
            stepper.step_forward(),
            Err(StepError::HistoryLimitExceeded { .. })
        ));
        assert_eq!(stepper.history_len(), 1);
        assert_eq!(stepper.array().to_vec(), Some(vec![2, 1]));
    }

    #[test]
    fn radix_rejects_negative_input() {
        assert!(matches!(
            Stepper::new(Algorithm::Radix, vec![1, -2], NullSink),
            Err(StepError::UnsupportedInput { .. })
        ));
    }

    #[test]
    fn subset_is_clamped_to_the_array() {
        assert_eq!(clamp_subset(Some((0, 5)), 3), Some((0, 2)));
        assert_eq!(clamp_subset(Some((3, 5)), 3), None);
        assert_eq!(clamp_subset(None, 3), None);
        assert_eq!(clamp_subset(Some((1, 1)), 3), Some((1, 1)));
    }
}
