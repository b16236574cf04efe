//! Run reporting module.
//!
//! This module aggregates per-file and per-video outcomes into a run
//! summary that can be rendered for the terminal or written as JSON.

pub mod summary;

pub use summary::{RunReport, VideoReport};
