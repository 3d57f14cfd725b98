//! Common types shared across the PMM agent crates.
//!
//! This crate holds the error type, the scoring primitives and the
//! evaluation data model. The model records describe the shape a model
//! response is expected to take; nothing here computes a score.

pub mod error;
pub mod model;
pub mod score;

pub use error::{PmmError, Result};
pub use score::{Score, ScoreLevel, Severity};
