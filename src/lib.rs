//! # Introduction
//!
//! sortty runs sorting algorithms one pseudocode line at a time, recording a
//! snapshot of the interpreter state after each line. The history can be
//! stepped forward and backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Algorithm → Snapshot::next → Snapshot::execute → History → VisualizationSink → TUI
//! ```
//!
//! 1. [`algorithms`]: line tables for each supported sort.
//! 2. [`snapshot`]: immutable interpreter states, the explicit call stack used
//!    for recursion, and the bounded [`snapshot::History`].
//! 3. [`interpreter`]: the [`interpreter::engine::Stepper`] and the primitive
//!    data operations with their exact inverses.
//! 4. [`memory`]: the sortable array and the radix buckets.
//! 5. [`sink`]: the event interface through which a display follows along.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use sortty::algorithms::Algorithm;
//! use sortty::interpreter::engine::Stepper;
//! use sortty::sink::NullSink;
//!
//! let mut stepper = Stepper::new(Algorithm::Bubble, vec![3, 1, 2], NullSink).unwrap();
//! stepper.run_to_end().unwrap();
//! assert_eq!(stepper.array().to_vec(), Some(vec![1, 2, 3]));
//! assert_eq!((stepper.comparisons(), stepper.swaps()), (3, 2));
//!
//! stepper.rewind_to_start().unwrap();
//! assert_eq!(stepper.array().to_vec(), Some(vec![3, 1, 2]));
//! ```

pub mod algorithms;
pub mod interpreter;
pub mod memory;
pub mod sink;
pub mod snapshot;
pub mod ui;
