//! Utility functions and helpers.
//!
//! This module contains the byte-count formatting used for every size that
//! the tool prints.

pub mod size;

pub use size::format_size;
