// SPDX-License-Identifier: MPL-2.0
//! Sharing a composed snapshot through a native save dialog.

use super::export_format::{write_snapshot, ExportFormat};
use crate::error::{Error, Result};
use chrono::{DateTime, Local};
use image_rs::RgbaImage;
use std::path::{Path, PathBuf};

/// How the share surface was dismissed.
#[derive(Debug, Clone)]
pub enum ShareOutcome {
    Shared(PathBuf),
    Cancelled,
    Failed(Error),
}

impl ShareOutcome {
    /// Directory to remember for the next share, if any.
    #[must_use]
    pub fn directory(&self) -> Option<&Path> {
        match self {
            ShareOutcome::Shared(path) => path.parent(),
            ShareOutcome::Cancelled | ShareOutcome::Failed(_) => None,
        }
    }
}

/// Settings for one share request.
#[derive(Debug, Clone, Default)]
pub struct ShareOptions {
    /// Encoding used when the chosen file name has no known extension.
    pub format: ExportFormat,
    /// Directory the save dialog opens in, if it still exists.
    pub start_dir: Option<PathBuf>,
}

/// Suggested file name, e.g. `collage-20240131-142501.png`.
#[must_use]
pub fn default_file_name(format: ExportFormat, at: DateTime<Local>) -> String {
    format!("collage-{}.{}", at.format("%Y%m%d-%H%M%S"), format.extension())
}

/// Presents the save dialog and writes the snapshot where the user chose.
pub async fn share(snapshot: RgbaImage, options: ShareOptions) -> ShareOutcome {
    let format = options.format;
    let mut dialog = rfd::AsyncFileDialog::new()
        .set_file_name(default_file_name(format, Local::now()))
        .add_filter(format.filter_name(), format.filter_extensions());
    if let Some(dir) = options.start_dir.filter(|dir| dir.exists()) {
        dialog = dialog.set_directory(&dir);
    }

    let Some(handle) = dialog.save_file().await else {
        return ShareOutcome::Cancelled;
    };
    let path = handle.path().to_path_buf();

    let written = {
        let path = path.clone();
        tokio::task::spawn_blocking(move || write_snapshot(&snapshot, &path, format))
            .await
            .map_err(|err| Error::Io(err.to_string()))
            .and_then(|result| result)
    };
    finish(path, written)
}

fn finish(path: PathBuf, written: Result<()>) -> ShareOutcome {
    match written {
        Ok(()) => ShareOutcome::Shared(path),
        Err(err) => ShareOutcome::Failed(err),
    }
}
