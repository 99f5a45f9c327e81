// Snapshot management for reversible stepping

pub mod frames;
pub mod variables;

pub use frames::CallStack;
pub use variables::{Line, Variables};

use crate::algorithms::Algorithm;
use crate::interpreter::constants::MAX_CALL_DEPTH;
use crate::interpreter::errors::StepError;
use crate::interpreter::machine::Machine;
use crate::memory::SortArray;
use crate::sink::VisualizationSink;

/// One recorded interpreter state.
///
/// Snapshots are created by [`Snapshot::next`] and are never modified once the
/// stepper has appended them to the [`History`]. `execute` runs before the
/// append and may still redirect `next_line` (for example on a comparison).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    algorithm: Algorithm,
    line: Line,
    next_line: Line,
    variables: Variables,
    frames: CallStack,
    pending_override: Option<Variables>,
    requires_wait: bool,
}

impl Snapshot {
    /// The fixed start state: no line highlighted, empty call stack
    pub fn initial(algorithm: Algorithm, len: usize) -> Self {
        Snapshot {
            algorithm,
            line: Line::NONE,
            next_line: Line::new(1),
            variables: algorithm.initial_variables(len),
            frames: CallStack::new(),
            pending_override: None,
            requires_wait: false,
        }
    }

    /// Compute the following snapshot.
    ///
    /// Pure with respect to the array: it is only read, for loop bounds and
    /// the like. A terminal snapshot is returned unchanged apart from its line.
    pub fn next(&self, array: &SortArray) -> Result<Snapshot, StepError> {
        let mut next = Snapshot {
            algorithm: self.algorithm,
            line: self.next_line,
            next_line: Line::NONE,
            variables: self
                .pending_override
                .clone()
                .unwrap_or_else(|| self.variables.clone()),
            frames: self.frames.clone(),
            pending_override: None,
            requires_wait: false,
        };
        if !next.line.is_terminal() {
            self.algorithm.enter(self.line, &mut next, array)?;
        }
        Ok(next)
    }

    /// Perform this line's side effect on the data
    pub fn execute<S: VisualizationSink>(&mut self, machine: &mut Machine<S>) -> Result<(), StepError> {
        self.algorithm.execute(self, machine)
    }

    /// Exact inverse of [`Snapshot::execute`]
    pub fn undo<S: VisualizationSink>(&self, machine: &mut Machine<S>) -> Result<(), StepError> {
        self.algorithm.undo(self, machine)
    }

    // ========== Subroutine protocol ==========

    /// Push a frame that resumes at `resume` with the current registers
    pub fn enter_subroutine_with_exit_line(&mut self, resume: Line) -> Result<(), StepError> {
        if self.frames.depth() >= MAX_CALL_DEPTH {
            return Err(StepError::CallDepthExceeded {
                depth: self.frames.depth() + 1,
                limit: MAX_CALL_DEPTH,
            });
        }
        self.frames.push(resume, self.variables.clone());
        Ok(())
    }

    /// Call a subroutine starting at `entry` with `args` as its registers;
    /// when it returns, execution resumes at `resume` in the current frame.
    /// Passing [`Line::NONE`] as `resume` makes this a tail call.
    pub fn call(&mut self, resume: Line, entry: Line, args: Variables) -> Result<(), StepError> {
        self.enter_subroutine_with_exit_line(resume)?;
        self.next_line = entry;
        self.pending_override = Some(args);
        Ok(())
    }

    /// Return from the current subroutine.
    ///
    /// Frames whose continuation is [`Line::NONE`] are unwound as well, so a
    /// chain of tail calls returns in one step. Every iteration pops a frame,
    /// which bounds the unwind by the stack depth. Returning from the
    /// outermost frame ends execution.
    pub fn leave_subroutine(&mut self) {
        self.next_line = Line::NONE;
        while let Some((resume, saved)) = self.frames.pop() {
            self.next_line = resume;
            self.pending_override = Some(saved);
            if !resume.is_terminal() {
                break;
            }
        }
    }

    // ========== Register access for algorithms ==========

    pub(crate) fn goto(&mut self, line: Line) {
        self.next_line = line;
    }

    pub(crate) fn wait(&mut self) {
        self.requires_wait = true;
    }

    pub(crate) fn set(&mut self, name: &'static str, value: i32) {
        self.variables.set(name, value);
    }

    /// Read a register, failing if the algorithm never assigned it
    pub fn var(&self, name: &'static str) -> Result<i32, StepError> {
        self.variables
            .get(name)
            .ok_or(StepError::UndefinedVariable {
                name,
                line: self.line,
            })
    }

    // ========== Getters ==========

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn line(&self) -> Line {
        self.line
    }

    pub fn next_line(&self) -> Line {
        self.next_line
    }

    pub fn is_terminal(&self) -> bool {
        self.line.is_terminal() && self.next_line.is_terminal()
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn frames(&self) -> &CallStack {
        &self.frames
    }

    pub fn call_depth(&self) -> usize {
        self.frames.depth()
    }

    pub fn pending_override(&self) -> Option<&Variables> {
        self.pending_override.as_ref()
    }

    pub fn requires_wait(&self) -> bool {
        self.requires_wait
    }

    /// Inclusive index range currently in scope, if any
    pub fn subset(&self) -> Option<(usize, usize)> {
        self.algorithm.subset(self)
    }

    /// Registers that point into the array, for index labels
    pub fn index_variables(&self) -> Vec<(&'static str, i32)> {
        self.algorithm.index_variables(self)
    }

    /// Registers shown next to the pseudocode (pivot value and the like)
    pub fn extra_variables(&self) -> Vec<(&'static str, i32)> {
        self.algorithm.extra_variables(self)
    }

    /// Estimate the memory retained by this snapshot in bytes.
    /// Frames are shared with neighbouring snapshots, so only the top one counts.
    pub fn estimated_size(&self) -> usize {
        let register = std::mem::size_of::<(&'static str, i32)>();
        let own = self.variables.len()
            + self.pending_override.as_ref().map_or(0, Variables::len)
            + self.frames.iter().next().map_or(0, |(_, saved)| saved.len());
        std::mem::size_of::<Snapshot>() + own * register
    }
}

/// Append-only execution history; the current snapshot is always the last
#[derive(Debug)]
pub struct History {
    snapshots: Vec<Snapshot>,
    max_memory: usize,
    current_memory: usize,
}

impl History {
    pub fn new(initial: Snapshot, max_memory: usize) -> Self {
        let current_memory = initial.estimated_size();
        History {
            snapshots: vec![initial],
            max_memory,
            current_memory,
        }
    }

    /// Fail if `snapshot` would not fit under the memory limit
    pub fn check_capacity(&self, snapshot: &Snapshot) -> Result<(), StepError> {
        let snapshot_size = snapshot.estimated_size();
        if self.current_memory + snapshot_size > self.max_memory {
            return Err(StepError::HistoryLimitExceeded {
                current: self.current_memory,
                limit: self.max_memory,
            });
        }
        Ok(())
    }

    /// Add a snapshot to history
    pub fn push(&mut self, snapshot: Snapshot) -> Result<(), StepError> {
        self.check_capacity(&snapshot)?;
        self.current_memory += snapshot.estimated_size();
        self.snapshots.push(snapshot);
        Ok(())
    }

    /// Remove the current snapshot; the initial snapshot is never removed
    pub fn pop(&mut self) -> Option<Snapshot> {
        if self.snapshots.len() <= 1 {
            return None;
        }
        let snapshot = self.snapshots.pop()?;
        self.current_memory = self.current_memory.saturating_sub(snapshot.estimated_size());
        Some(snapshot)
    }

    pub fn current(&self) -> &Snapshot {
        // `new` seeds one entry and `pop` never removes it
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Get the number of snapshots, including the initial one
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_at_start(&self) -> bool {
        self.snapshots.len() == 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_at(line: Line) -> Snapshot {
        let mut snap = Snapshot::initial(Algorithm::Quick, 4);
        snap.line = line;
        snap
    }

    #[test]
    fn leave_at_top_level_terminates() {
        let mut snap = quick_at(Line::new(1));
        snap.leave_subroutine();
        assert_eq!(snap.next_line(), Line::NONE);
        assert!(snap.pending_override().is_none());
    }

    #[test]
    fn call_then_leave_restores_caller() {
        let mut caller = quick_at(Line::new(9));
        caller.set("i", 2);
        caller
            .call(Line::new(10), Line::new(1), Variables::new().with("lo", 0).with("hi", 2))
            .unwrap();
        assert_eq!(caller.call_depth(), 1);
        assert_eq!(caller.next_line(), Line::new(1));

        let mut callee = caller.clone();
        callee.line = Line::new(1);
        callee.variables = caller.pending_override().cloned().unwrap();
        callee.leave_subroutine();
        assert_eq!(callee.next_line(), Line::new(10));
        assert_eq!(callee.call_depth(), 0);
        assert_eq!(callee.pending_override().and_then(|v| v.get("i")), Some(2));
    }

    #[test]
    fn leave_unwinds_chained_tail_calls() {
        let mut snap = quick_at(Line::new(1));
        snap.enter_subroutine_with_exit_line(Line::new(10)).unwrap();
        snap.set("marker", 1);
        snap.enter_subroutine_with_exit_line(Line::NONE).unwrap();
        snap.set("marker", 2);
        snap.enter_subroutine_with_exit_line(Line::NONE).unwrap();

        snap.leave_subroutine();
        assert_eq!(snap.next_line(), Line::new(10));
        assert_eq!(snap.call_depth(), 0);
        assert!(!snap.pending_override().unwrap().contains("marker"));
    }

    #[test]
    fn leave_through_sentinels_only_terminates() {
        let mut snap = quick_at(Line::new(1));
        for _ in 0..3 {
            snap.enter_subroutine_with_exit_line(Line::NONE).unwrap();
        }
        snap.leave_subroutine();
        assert_eq!(snap.next_line(), Line::NONE);
        assert_eq!(snap.call_depth(), 0);
    }

    #[test]
    fn call_depth_is_bounded() {
        let mut snap = quick_at(Line::new(9));
        for _ in 0..MAX_CALL_DEPTH {
            snap.enter_subroutine_with_exit_line(Line::new(10)).unwrap();
        }
        assert!(matches!(
            snap.enter_subroutine_with_exit_line(Line::new(10)),
            Err(StepError::CallDepthExceeded { .. })
        ));
    }

    #[test]
    fn next_applies_pending_override_once() {
        let array = SortArray::new(vec![2, 1, 3, 0]);
        let start = Snapshot::initial(Algorithm::Quick, array.len());
        let first = start.next(&array).unwrap();
        assert_eq!(first.line(), Line::new(1));
        assert_eq!(first.var("lo"), Ok(0));
        assert_eq!(first.var("hi"), Ok(3));
        assert!(first.pending_override().is_none());
    }

    #[test]
    fn history_never_pops_initial() {
        let mut history = History::new(Snapshot::initial(Algorithm::Bubble, 3), usize::MAX);
        assert!(history.pop().is_none());
        assert!(history.is_at_start());

        let next = history.current().next(&SortArray::new(vec![3, 1, 2])).unwrap();
        history.push(next).unwrap();
        assert_eq!(history.len(), 2);
        assert!(history.pop().is_some());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn history_enforces_memory_limit() {
        let initial = Snapshot::initial(Algorithm::Bubble, 3);
        let limit = initial.estimated_size();
        let mut history = History::new(initial, limit);
        let next = history.current().next(&SortArray::new(vec![3, 1, 2])).unwrap();
        assert!(matches!(
            history.push(next),
            Err(StepError::HistoryLimitExceeded { .. })
        ));
        assert_eq!(history.len(), 1);
    }
}
