//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`array`]: the data as bars, with subset, operation and index labels
//! - [`pseudocode`]: the algorithm listing with the current line highlighted
//! - [`stack`]: the explicit call stack of the current snapshot
//! - [`buckets`]: bucket contents for the bucket-based algorithms
//! - [`status`]: status bar with keybindings and execution state
//! - `utils`: shared block and register formatting helpers
//!
//! Each pane module exports a primary `render_*` function and, where it needs
//! more than a couple of inputs, a `*RenderData` struct.

mod utils;

pub mod array;
pub mod buckets;
pub mod pseudocode;
pub mod stack;
pub mod status;

// Re-export render functions for convenience
pub use array::{render_array_pane, ArrayRenderData};
pub use buckets::render_buckets_pane;
pub use pseudocode::{render_pseudocode_pane, PseudocodeRenderData};
pub use stack::{render_stack_pane, StackRenderData};
pub use status::{render_status_bar, StatusRenderData};
