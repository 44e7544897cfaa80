// SPDX-License-Identifier: MPL-2.0
//! Image formats the composed grid can be shared as.

use crate::error::Result;
use image_rs::{DynamicImage, ImageFormat, RgbaImage};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Supported export formats for snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// PNG format (lossless, best quality).
    #[default]
    Png,
    /// JPEG format (lossy, smaller file size).
    Jpeg,
    /// WebP format (modern, good compression).
    WebP,
}

impl ExportFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
            ExportFormat::WebP => "webp",
        }
    }

    /// Name shown in the save dialog filter.
    #[must_use]
    pub fn filter_name(&self) -> &'static str {
        match self {
            ExportFormat::Png => "PNG",
            ExportFormat::Jpeg => "JPEG",
            ExportFormat::WebP => "WebP",
        }
    }

    /// Extensions accepted by the save dialog filter.
    #[must_use]
    pub fn filter_extensions(&self) -> &'static [&'static str] {
        match self {
            ExportFormat::Png => &["png"],
            ExportFormat::Jpeg => &["jpg", "jpeg"],
            ExportFormat::WebP => &["webp"],
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            ExportFormat::Png => ImageFormat::Png,
            ExportFormat::Jpeg => ImageFormat::Jpeg,
            ExportFormat::WebP => ImageFormat::WebP,
        }
    }

    /// Detects format from file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<ExportFormat> {
        match ext.to_lowercase().as_str() {
            "png" => Some(ExportFormat::Png),
            "jpg" | "jpeg" => Some(ExportFormat::Jpeg),
            "webp" => Some(ExportFormat::WebP),
            _ => None,
        }
    }

    /// Detects format from file path extension.
    pub fn from_path(path: &Path) -> Option<ExportFormat> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// Writes `snapshot` to `path`.
///
/// The extension of `path` wins over `fallback`, so a user who types
/// `grid.jpg` in the save dialog gets a JPEG.
///
/// # Errors
///
/// Returns an error if the image cannot be encoded or written to disk.
pub fn write_snapshot(snapshot: &RgbaImage, path: &Path, fallback: ExportFormat) -> Result<()> {
    let format = ExportFormat::from_path(path).unwrap_or(fallback);

    // JPEG has no alpha channel.
    if format == ExportFormat::Jpeg {
        let rgb = DynamicImage::ImageRgba8(snapshot.clone()).to_rgb8();
        rgb.save_with_format(path, format.image_format())?;
    } else {
        snapshot.save_with_format(path, format.image_format())?;
    }

    Ok(())
}
