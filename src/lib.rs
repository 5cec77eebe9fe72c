// Module declarations in dependency order
pub mod core;
pub mod processing;
pub mod timing;
pub mod utils;
pub mod worker;

// Public exports for external consumers
pub use crate::core::{ConversionOutcome, ThumbnailTask};
pub use crate::processing::{BatchProcessor, Converter, THUMB_SIZE};
pub use crate::utils::{FileKind, RasterFormat, ThumbError, ThumbResult};
pub use crate::worker::WorkerPool;

// This library file is the public API for consuming the crate as a library.
// The actual application entry point is in main.rs.
