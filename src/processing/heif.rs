//! HEIC/HEIF decoding through libheif.

use image::{DynamicImage, ImageBuffer};
use lazy_static::lazy_static;
use libheif_rs::{ColorSpace, HeifContext, LibHeif, RgbChroma};

use crate::utils::{ThumbError, ThumbResult};

lazy_static! {
    static ref LIB_HEIF: LibHeif = LibHeif::new();
}

/// Decode a HEIC/HEIF container into RGBA pixel data.
///
/// Takes the raw bytes read from disk, decodes the container's primary
/// image and hands it back ready for resizing. Unlike the raster path, no
/// orientation correction is applied here.
pub fn decode(bytes: &[u8]) -> ThumbResult<DynamicImage> {
    let ctx = HeifContext::read_from_bytes(bytes)?;
    let handle = ctx.primary_image_handle()?;
    let image = LIB_HEIF.decode(&handle, ColorSpace::Rgb(RgbChroma::Rgba), None)?;

    let width = image.width();
    let height = image.height();
    let planes = image.planes();
    let interleaved = planes
        .interleaved
        .ok_or_else(|| ThumbError::decode("HEIF image has no interleaved plane"))?;

    // The decoded plane may carry per-row padding; copy row by row.
    let row_bytes = width as usize * 4;
    if interleaved.stride < row_bytes {
        return Err(ThumbError::decode(
            "HEIF plane stride is smaller than a pixel row",
        ));
    }
    let mut data = Vec::with_capacity(row_bytes * height as usize);
    for row in interleaved.data.chunks(interleaved.stride).take(height as usize) {
        let row = row
            .get(..row_bytes)
            .ok_or_else(|| ThumbError::decode("HEIF plane is truncated"))?;
        data.extend_from_slice(row);
    }

    let buffer = ImageBuffer::from_raw(width, height, data).ok_or_else(|| {
        ThumbError::decode("HEIF plane does not match the reported dimensions")
    })?;
    Ok(DynamicImage::ImageRgba8(buffer))
}
