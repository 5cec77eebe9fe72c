use std::path::Path;
use tokio::fs;

use crate::utils::{ThumbError, ThumbResult};

/// Create the output directory, recursively. Succeeds if it already exists.
pub async fn ensure_output_dir(path: impl AsRef<Path>) -> ThumbResult<()> {
    let path = path.as_ref();
    fs::create_dir_all(path).await.map_err(|e| {
        ThumbError::filesystem(format!(
            "Failed to create output directory {}: {}",
            path.display(),
            e
        ))
    })
}

/// List the entry names of the input directory, in filesystem order.
///
/// A missing or unreadable directory is a `Filesystem` error; it is fatal
/// to the run but the caller decides what fatal means.
pub async fn list_entries(dir: impl AsRef<Path>) -> ThumbResult<Vec<String>> {
    let dir = dir.as_ref();
    let read_error = |e: std::io::Error| {
        ThumbError::filesystem(format!(
            "Failed to read input directory {}: {}",
            dir.display(),
            e
        ))
    };

    let mut entries = fs::read_dir(dir).await.map_err(read_error)?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(read_error)? {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

/// Get the lowercased extension of a file name, if it has one.
pub fn file_extension(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}
