//! Background search.
//!
//! The search itself is synchronous. This module runs one search on a
//! worker thread so an interactive caller is not blocked, and hands the
//! single result back. There is no cancellation: dropping a job detaches
//! the worker and its result is discarded when it finishes.

mod error;
mod job;

pub use error::EngineError;
pub use job::SearchJob;
