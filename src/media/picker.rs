// SPDX-License-Identifier: MPL-2.0
//! Photo sources for a grid slot.
//!
//! The chooser offers a camera and the photo library. Desktop builds have no
//! capture device support, so the camera always resolves to
//! [`PickerOutcome::Unavailable`]. The library is a native open dialog.

use super::image::{load_photo, Photo};
use super::IMAGE_EXTENSIONS;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Where the user wants the photo to come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoSource {
    Camera,
    Library,
}

impl PhotoSource {
    /// Localization key for the chooser entry.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            PhotoSource::Camera => "chooser-camera",
            PhotoSource::Library => "chooser-library",
        }
    }
}

/// Result of asking a source for a photo.
#[derive(Debug, Clone)]
pub enum PickerOutcome {
    /// Access granted and a photo was chosen.
    Granted { photo: Photo, path: Option<PathBuf> },
    /// The system refused access to the picked file.
    Denied,
    /// Access is disabled by configuration.
    Restricted,
    /// The source does not exist on this device.
    Unavailable,
    /// The user dismissed the dialog.
    Cancelled,
    /// The file was readable but could not be turned into a photo.
    Failed(Error),
}

impl PickerOutcome {
    /// Notification key for outcomes the user should hear about.
    #[must_use]
    pub fn notification_key(&self) -> Option<&'static str> {
        match self {
            PickerOutcome::Granted { .. } | PickerOutcome::Cancelled => None,
            PickerOutcome::Denied => Some("notification-picker-denied"),
            PickerOutcome::Restricted => Some("notification-picker-restricted"),
            PickerOutcome::Unavailable => Some("notification-camera-unavailable"),
            PickerOutcome::Failed(_) => Some("notification-picker-failed"),
        }
    }
}

/// Settings that shape how a source is resolved.
#[derive(Debug, Clone, Default)]
pub struct PickerOptions {
    pub library_enabled: bool,
    /// Directory the library dialog opens in.
    pub start_dir: Option<PathBuf>,
}

/// Asks `source` for a photo.
pub async fn pick(source: PhotoSource, options: PickerOptions) -> PickerOutcome {
    match source {
        PhotoSource::Camera => PickerOutcome::Unavailable,
        PhotoSource::Library => {
            if !options.library_enabled {
                return PickerOutcome::Restricted;
            }

            let mut dialog = rfd::AsyncFileDialog::new().add_filter("Images", IMAGE_EXTENSIONS);
            if let Some(dir) = options.start_dir.filter(|dir| dir.exists()) {
                dialog = dialog.set_directory(&dir);
            }

            let Some(handle) = dialog.pick_file().await else {
                return PickerOutcome::Cancelled;
            };
            let path = handle.path().to_path_buf();
            let result = decode_off_thread(path.clone()).await;
            classify(&path, result)
        }
    }
}

async fn decode_off_thread(path: PathBuf) -> Result<Photo> {
    tokio::task::spawn_blocking(move || load_photo(&path))
        .await
        .map_err(|err| Error::Io(err.to_string()))?
}

/// Maps a decode result onto an outcome.
#[must_use]
pub fn classify(path: &Path, result: Result<Photo>) -> PickerOutcome {
    match result {
        Ok(photo) => PickerOutcome::Granted {
            photo,
            path: Some(path.to_path_buf()),
        },
        Err(Error::PermissionDenied(_)) => PickerOutcome::Denied,
        Err(err) => PickerOutcome::Failed(err),
    }
}
