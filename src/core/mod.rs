//! Core types for the conversion pipeline:
//! - [`ThumbnailTask`]: one directory entry and its derived destination
//! - [`ConversionOutcome`]: what happened to it

mod task;
mod types;

pub use task::ThumbnailTask;
pub use types::ConversionOutcome;
