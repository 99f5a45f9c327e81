//! Sorting interpreter execution engine
//!
//! This module provides the stepping machinery:
//! - [`engine`]: the [`engine::Stepper`] controller with forward/backward steps
//! - [`machine`]: primitive data operations and their inverses
//! - [`errors`]: step error types
//! - [`constants`]: compile-time limits
//!
//! # Execution Model
//!
//! Every forward step derives the next [`crate::snapshot::Snapshot`] from the
//! current one, runs its side effect on the data and appends it to the
//! history. A backward step undoes the side effect of the last snapshot and
//! pops it, so the data is never restored from a copy.

pub mod constants;
pub mod engine;
pub mod errors;
pub mod machine;
