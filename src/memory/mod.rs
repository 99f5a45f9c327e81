//! Data model for the sorting stepper
//!
//! This module provides the data the primitive operations act on:
//! - [`array`]: the sortable array, whose slots may be temporarily empty
//! - [`buckets`]: FIFO buckets for the bucket-based algorithms
//!
//! Only [`Machine`](crate::interpreter::machine::Machine) mutates this data.
//! Algorithms receive a shared reference when computing their next line so
//! that they can read loop bounds, pivot values and bucket sizes.

pub mod array;
pub mod buckets;

pub use array::SortArray;
pub use buckets::Buckets;
