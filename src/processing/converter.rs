//! Format-specific decode + resize + encode.

use image::imageops::FilterType;
use tokio::task;
use tracing::debug;

use crate::core::ThumbnailTask;
use crate::processing::heif;
use crate::processing::orientation::Orientation;
use crate::utils::{FileKind, ThumbError, ThumbResult};

/// Output edge length in pixels; thumbnails are exactly this square.
pub const THUMB_SIZE: u32 = 100;

/// Stateless converter, dispatching each task on its decode path.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter;

impl Converter {
    pub fn new() -> Self {
        Self
    }

    /// Convert one file. Any failure is reported to the caller; nothing is
    /// retried and no partial output is cleaned up.
    pub async fn convert(&self, task: &ThumbnailTask) -> ThumbResult<()> {
        match task.kind {
            FileKind::Raster(_) => self.convert_raster(task).await,
            FileKind::Heif => self.convert_heif(task).await,
            FileKind::Unsupported => Err(ThumbError::decode(format!(
                "No conversion path for: {}",
                task.file_name
            ))),
        }
    }

    /// Raster path: decode, rotate upright per the EXIF orientation tag,
    /// cover-resize to the target box, encode PNG.
    async fn convert_raster(&self, task: &ThumbnailTask) -> ThumbResult<()> {
        debug!("Decoding raster file: {}", task.file_name);
        let bytes = tokio::fs::read(&task.source_path).await?;
        let destination = task.destination_path.clone();

        run_blocking(move || {
            let img = image::load_from_memory(&bytes)?;
            let img = match Orientation::from_bytes(&bytes) {
                Some(orientation) => orientation.upright(img),
                None => img,
            };
            let thumbnail = img.resize_to_fill(THUMB_SIZE, THUMB_SIZE, FilterType::Lanczos3);
            thumbnail.save(&destination)?;
            Ok(())
        })
        .await
    }

    /// HEIC/HEIF path: libheif decode, then the same cover resize and PNG
    /// encode. No orientation step on this path.
    async fn convert_heif(&self, task: &ThumbnailTask) -> ThumbResult<()> {
        debug!("Decoding HEIF file: {}", task.file_name);
        let bytes = tokio::fs::read(&task.source_path).await?;
        let destination = task.destination_path.clone();

        run_blocking(move || {
            let img = heif::decode(&bytes)?;
            let thumbnail = img.resize_to_fill(THUMB_SIZE, THUMB_SIZE, FilterType::Lanczos3);
            thumbnail.save(&destination)?;
            Ok(())
        })
        .await
    }
}

/// Decode/resize/encode is CPU-bound; keep it off the async workers.
async fn run_blocking(
    job: impl FnOnce() -> ThumbResult<()> + Send + 'static,
) -> ThumbResult<()> {
    task::spawn_blocking(job)
        .await
        .map_err(|e| ThumbError::worker(format!("Conversion task panicked: {e}")))?
}
