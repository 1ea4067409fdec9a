//! Discovery implementation submodule.
//!
//! This module contains the internal implementation details for finding and
//! verifying a gnuplot executable. It provides:
//!
//! - `locate`: override-variable and search-path executable lookup
//! - `run_probe`: bounded subprocess execution with transcript capture
//! - `parse_transcript`: identity, version, and terminal extraction

mod locator;
mod parser;
mod prober;

pub(crate) use locator::locate;
pub(crate) use parser::parse_transcript;
pub(crate) use prober::run_probe;
