// SPDX-License-Identifier: MPL-2.0
//! Photo decoding for grid slots (PNG, JPEG, WebP, etc.).
//!
//! Camera pictures often store their rotation in EXIF instead of in the pixel
//! data, so the orientation tag is applied at load time and the rest of the
//! application only ever sees upright pixels.

use crate::error::Result;
use iced::widget::image;
use image_rs::{DynamicImage, RgbaImage};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

/// A decoded photo ready to be shown in a slot and composed into a snapshot.
#[derive(Debug, Clone)]
pub struct Photo {
    pub handle: image::Handle,
    /// Upright RGBA pixels, shared between the slot and any snapshot in flight.
    pixels: Arc<RgbaImage>,
}

impl Photo {
    #[must_use]
    pub fn from_rgba_image(pixels: RgbaImage) -> Self {
        let (width, height) = pixels.dimensions();
        let handle = image::Handle::from_rgba(width, height, pixels.as_raw().clone());
        Self {
            handle,
            pixels: Arc::new(pixels),
        }
    }

    #[must_use]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// True when both photos share the same pixel buffer.
    #[must_use]
    pub fn same_as(&self, other: &Photo) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

/// Loads a photo from disk and rotates it upright.
///
/// # Errors
///
/// Returns [`crate::error::Error::PermissionDenied`] when the file cannot be
/// opened for lack of rights, [`crate::error::Error::Io`] for other read
/// failures and [`crate::error::Error::Image`] when decoding fails.
pub fn load_photo<P: AsRef<Path>>(path: P) -> Result<Photo> {
    let path = path.as_ref();
    let decoded = image_rs::open(path)?;
    let orientation = read_exif_orientation(path).unwrap_or(1);
    let upright = apply_exif_orientation(decoded, orientation);
    Ok(Photo::from_rgba_image(upright.to_rgba8()))
}

/// Reads the EXIF orientation tag (1-8), if the container carries one.
fn read_exif_orientation(path: &Path) -> Option<u32> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    let exif = exif::Reader::new().read_from_container(&mut reader).ok()?;
    exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
}

/// Applies an EXIF orientation value. Unknown values leave the image untouched.
#[must_use]
pub fn apply_exif_orientation(image: DynamicImage, orientation: u32) -> DynamicImage {
    match orientation {
        2 => image.fliph(),
        3 => image.rotate180(),
        4 => image.flipv(),
        5 => image.rotate90().fliph(),
        6 => image.rotate90(),
        7 => image.rotate270().fliph(),
        8 => image.rotate270(),
        _ => image,
    }
}
