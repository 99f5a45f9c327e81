//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: application state, keyboard event loop, auto-play, versus lanes
//! - **[`sink`]**: [`sink::TuiSink`], the display state the stepper writes into
//! - **[`panes`]**: stateless render functions for each visible pane (array,
//!   pseudocode, call stack, buckets, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with one or two
//! [`Stepper`]s and call [`App::run`] to start the event loop.
//!
//! [`Stepper`]: crate::interpreter::engine::Stepper
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod sink;
pub mod theme;

pub use app::App;
pub use sink::TuiSink;
