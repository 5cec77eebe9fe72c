pub mod error;
pub mod formats;
pub mod fs;

pub use error::{ThumbError, ThumbResult};
pub use formats::{FileKind, RasterFormat};
pub use fs::{ensure_output_dir, file_extension, list_entries};
