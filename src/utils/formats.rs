use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::utils::ThumbError;

/// Raster formats handled by the general image library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RasterFormat {
    Jpeg,
    Png,
    WebP,
    Gif,
}

impl RasterFormat {
    /// Get file extensions associated with this format
    pub fn extensions(&self) -> &[&str] {
        match self {
            Self::Jpeg => &["jpg", "jpeg"],
            Self::Png => &["png"],
            Self::WebP => &["webp"],
            Self::Gif => &["gif"],
        }
    }

    /// Check if the extension matches this format
    pub fn matches_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.extensions().contains(&ext.as_str())
    }
}

impl FromStr for RasterFormat {
    type Err = ThumbError;

    fn from_str(ext: &str) -> Result<Self, Self::Err> {
        let ext = ext.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            "webp" => Ok(Self::WebP),
            "gif" => Ok(Self::Gif),
            _ => Err(ThumbError::decode(format!(
                "Unsupported raster format: {}",
                ext
            ))),
        }
    }
}

/// Classification of a directory entry, decided by its lowercased extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Decoded by the general image library
    Raster(RasterFormat),
    /// Decoded through libheif before resizing
    Heif,
    /// Skipped with an informational notice, never an error
    Unsupported,
}

impl FileKind {
    /// Classify an extension. Accepts any casing.
    pub fn from_extension(ext: &str) -> Self {
        if let Ok(format) = ext.parse::<RasterFormat>() {
            return Self::Raster(format);
        }
        match ext.to_lowercase().as_str() {
            "heic" | "heif" => Self::Heif,
            _ => Self::Unsupported,
        }
    }

    /// Label used in the per-file success log line.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Raster(_) => "image",
            Self::Heif => "HEIC",
            Self::Unsupported => "unsupported",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_raster_extensions() {
        for ext in ["jpg", "jpeg", "png", "webp", "gif"] {
            assert!(
                matches!(FileKind::from_extension(ext), FileKind::Raster(_)),
                "{ext} should be raster"
            );
        }
    }

    #[test]
    fn classifies_heif_extensions() {
        assert_eq!(FileKind::from_extension("heic"), FileKind::Heif);
        assert_eq!(FileKind::from_extension("heif"), FileKind::Heif);
    }

    #[test]
    fn classification_ignores_case() {
        assert_eq!(
            FileKind::from_extension("JPG"),
            FileKind::Raster(RasterFormat::Jpeg)
        );
        assert_eq!(FileKind::from_extension("HEIC"), FileKind::Heif);
    }

    #[test]
    fn everything_else_is_unsupported() {
        for ext in ["txt", "bmp", "tiff", "mp4", ""] {
            assert_eq!(FileKind::from_extension(ext), FileKind::Unsupported);
        }
    }

    #[test]
    fn raster_extension_tables_round_trip() {
        for format in [
            RasterFormat::Jpeg,
            RasterFormat::Png,
            RasterFormat::WebP,
            RasterFormat::Gif,
        ] {
            for ext in format.extensions() {
                assert!(format.matches_extension(ext));
                assert_eq!(ext.parse::<RasterFormat>().unwrap(), format);
            }
        }
    }
}
