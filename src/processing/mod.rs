//! Decode, resize and encode paths plus the batch driver.

mod batch;
mod converter;
pub mod heif;
pub mod orientation;

pub use batch::BatchProcessor;
pub use converter::{Converter, THUMB_SIZE};
