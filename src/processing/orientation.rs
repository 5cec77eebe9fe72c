//! EXIF stored-orientation correction for the raster decode path.

use exif::{In, Tag};
use image::DynamicImage;
use std::io::Cursor;

/// Pixel transform implied by the EXIF orientation tag (values 1-8).
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Normal,
    CW90,
    CW180,
    CW270,
    MirroredVertical,
    MirroredHorizontal,
    MirroredHorizontalAnd90CW,
    MirroredHorizontalAnd270CW,
}

impl Orientation {
    /// Read the orientation tag from the raw container bytes.
    ///
    /// Returns `None` when the file carries no EXIF block or no
    /// orientation field; the image is then used as decoded.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let exif = exif::Reader::new()
            .read_from_container(&mut Cursor::new(bytes))
            .ok()?;
        exif.get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Into::into)
    }

    /// Rotate/flip the decoded pixels so the image displays upright.
    #[must_use]
    pub fn upright(&self, img: DynamicImage) -> DynamicImage {
        match self {
            Self::Normal => img,
            Self::CW180 => img.rotate180(),
            Self::CW270 => img.rotate270(),
            Self::CW90 => img.rotate90(),
            Self::MirroredHorizontal => img.fliph(),
            Self::MirroredVertical => img.flipv(),
            Self::MirroredHorizontalAnd90CW => img.fliph().rotate90(),
            Self::MirroredHorizontalAnd270CW => img.fliph().rotate270(),
        }
    }
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Self::MirroredHorizontal,
            3 => Self::CW180,
            4 => Self::MirroredVertical,
            5 => Self::MirroredHorizontalAnd270CW,
            6 => Self::CW90,
            7 => Self::MirroredHorizontalAnd90CW,
            8 => Self::CW270,
            _ => Self::Normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbaImage};

    #[test]
    fn tag_values_map_to_transforms() {
        assert_eq!(Orientation::from(1), Orientation::Normal);
        assert_eq!(Orientation::from(3), Orientation::CW180);
        assert_eq!(Orientation::from(6), Orientation::CW90);
        assert_eq!(Orientation::from(8), Orientation::CW270);
        // Out-of-range values fall back to no transform
        assert_eq!(Orientation::from(0), Orientation::Normal);
        assert_eq!(Orientation::from(9), Orientation::Normal);
    }

    #[test]
    fn rotations_swap_dimensions() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(4, 2));
        let rotated = Orientation::CW90.upright(img);
        assert_eq!((rotated.width(), rotated.height()), (2, 4));
    }

    #[test]
    fn normal_keeps_dimensions() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(4, 2));
        let same = Orientation::Normal.upright(img);
        assert_eq!((same.width(), same.height()), (4, 2));
    }

    #[test]
    fn files_without_exif_yield_none() {
        assert_eq!(Orientation::from_bytes(b"not an image"), None);
    }
}
