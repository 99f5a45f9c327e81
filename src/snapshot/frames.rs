//! Persistent subroutine stack
//!
//! Every snapshot in the history carries its own call stack. Frames are shared
//! between snapshots through `Rc`, so cloning a snapshot never copies the
//! callers' saved registers, and pushing or popping only touches the top.

use super::variables::{Line, Variables};
use std::rc::Rc;

#[derive(Debug)]
struct Frame {
    resume: Line,
    saved: Variables,
    parent: Option<Rc<Frame>>,
}

/// Stack of `(continuation line, saved variables)` pairs.
///
/// The continuation stack and the value store of a subroutine call are kept in
/// one frame, so their sizes can never diverge.
#[derive(Debug, Clone, Default)]
pub struct CallStack {
    top: Option<Rc<Frame>>,
    depth: usize,
}

impl CallStack {
    pub fn new() -> Self {
        CallStack::default()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_empty(&self) -> bool {
        self.depth == 0
    }

    pub fn push(&mut self, resume: Line, saved: Variables) {
        let parent = self.top.take();
        self.top = Some(Rc::new(Frame {
            resume,
            saved,
            parent,
        }));
        self.depth += 1;
    }

    pub fn pop(&mut self) -> Option<(Line, Variables)> {
        let frame = self.top.take()?;
        self.depth -= 1;
        match Rc::try_unwrap(frame) {
            Ok(frame) => {
                self.top = frame.parent;
                Some((frame.resume, frame.saved))
            }
            Err(shared) => {
                self.top = shared.parent.clone();
                Some((shared.resume, shared.saved.clone()))
            }
        }
    }

    /// Frames from the innermost call outwards
    pub fn iter(&self) -> impl Iterator<Item = (Line, &Variables)> {
        let mut cursor = self.top.as_deref();
        std::iter::from_fn(move || {
            let frame = cursor?;
            cursor = frame.parent.as_deref();
            Some((frame.resume, &frame.saved))
        })
    }

    /// True when both stacks share the same top frame allocation
    pub fn shares_top_with(&self, other: &CallStack) -> bool {
        match (&self.top, &other.top) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl PartialEq for CallStack {
    fn eq(&self, other: &Self) -> bool {
        self.depth == other.depth
            && (self.shares_top_with(other) || self.iter().eq(other.iter()))
    }
}

impl Eq for CallStack {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_is_lifo() {
        let mut stack = CallStack::new();
        stack.push(Line::new(3), Variables::new().with("a", 1));
        stack.push(Line::NONE, Variables::new().with("a", 2));
        assert_eq!(stack.depth(), 2);

        let (line, vars) = stack.pop().unwrap();
        assert_eq!(line, Line::NONE);
        assert_eq!(vars.get("a"), Some(2));

        let (line, vars) = stack.pop().unwrap();
        assert_eq!(line, Line::new(3));
        assert_eq!(vars.get("a"), Some(1));
        assert!(stack.pop().is_none());
        assert!(stack.is_empty());
    }

    #[test]
    fn clones_share_frames_and_stay_independent() {
        let mut original = CallStack::new();
        original.push(Line::new(5), Variables::new().with("lo", 0));
        let mut copy = original.clone();
        assert!(copy.shares_top_with(&original));

        copy.pop();
        copy.push(Line::new(9), Variables::new());
        assert_eq!(original.depth(), 1);
        assert_eq!(original.iter().next().map(|(l, _)| l), Some(Line::new(5)));
        assert_ne!(original, copy);
    }

    #[test]
    fn equality_compares_contents() {
        let mut a = CallStack::new();
        let mut b = CallStack::new();
        a.push(Line::new(2), Variables::new().with("x", 1));
        b.push(Line::new(2), Variables::new().with("x", 1));
        assert_eq!(a, b);
    }
}
