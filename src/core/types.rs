//! Outcome types for individual conversions.

use serde::Serialize;

/// Result of handling one directory entry.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionOutcome {
    /// The file was decoded, resized and written
    Converted {
        /// Wall-clock time of the conversion in milliseconds
        elapsed_ms: f64,
    },
    /// The extension is not handled; nothing was written
    Skipped,
}
