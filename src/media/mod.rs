// SPDX-License-Identifier: MPL-2.0
//! Media boundary: decoding photos into slots and writing snapshots out.
//!
//! Both directions go through native dialogs and report tagged outcomes
//! instead of errors, so the session never has to unwind a failure.

pub mod export_format;
pub mod image;
pub mod picker;
pub mod share;

pub use export_format::ExportFormat;
pub use image::{load_photo, Photo};
pub use picker::{PhotoSource, PickerOptions, PickerOutcome};
pub use share::{ShareOptions, ShareOutcome};

/// Image file extensions offered by the library dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp",
];
