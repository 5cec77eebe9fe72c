//! Thumbnail task definition.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::utils::{FileKind, file_extension};

/// Represents the conversion of one directory entry.
///
/// Carries the source path, the derived destination path and the decode
/// path selected from the file extension.
#[derive(Debug, Clone, Serialize)]
pub struct ThumbnailTask {
    /// Entry name inside the input directory
    pub file_name: String,
    /// Path to the source file
    pub source_path: PathBuf,
    /// Path the thumbnail will be written to
    pub destination_path: PathBuf,
    /// Decode path selected from the extension
    pub kind: FileKind,
}

impl ThumbnailTask {
    /// Build a task for one entry of the input directory.
    ///
    /// The destination name is derived deterministically from the source
    /// stem: `<stem>-thumbnail.png`. Differently-cased or
    /// differently-extensioned sources sharing a stem collide on the same
    /// destination; the last write wins.
    pub fn new(input_dir: &Path, output_dir: &Path, file_name: &str) -> Self {
        let source_path = input_dir.join(file_name);
        let kind = file_extension(file_name)
            .map(|ext| FileKind::from_extension(&ext))
            .unwrap_or(FileKind::Unsupported);
        let stem = Path::new(file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(file_name);
        let destination_path = output_dir.join(format!("{stem}-thumbnail.png"));

        Self {
            file_name: file_name.to_string(),
            source_path,
            destination_path,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::RasterFormat;

    fn task(name: &str) -> ThumbnailTask {
        ThumbnailTask::new(Path::new("/in"), Path::new("/out"), name)
    }

    #[test]
    fn destination_is_derived_from_the_stem() {
        let t = task("holiday.jpeg");
        assert_eq!(t.source_path, Path::new("/in/holiday.jpeg"));
        assert_eq!(
            t.destination_path,
            Path::new("/out/holiday-thumbnail.png")
        );
        assert_eq!(t.kind, FileKind::Raster(RasterFormat::Jpeg));
    }

    #[test]
    fn cased_variants_collide_on_one_destination() {
        let upper = task("photo.JPG");
        let lower = task("photo.jpg");
        assert_eq!(upper.destination_path, lower.destination_path);
        assert_eq!(upper.kind, lower.kind);
    }

    #[test]
    fn heif_entries_take_the_heif_path() {
        assert_eq!(task("clip.heic").kind, FileKind::Heif);
        assert_eq!(task("clip.HEIF").kind, FileKind::Heif);
    }

    #[test]
    fn extensionless_entries_are_unsupported() {
        assert_eq!(task("README").kind, FileKind::Unsupported);
        assert_eq!(task("notes.txt").kind, FileKind::Unsupported);
    }
}
