//! Rename module for the batch run.
//!
//! This module provides:
//! - The `Renamer` run loop
//! - Per-file outcomes and the run report

pub mod batch;
pub mod report;

pub use batch::Renamer;
pub use report::{FileOutcome, RunReport};
