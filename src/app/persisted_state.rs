// SPDX-License-Identifier: MPL-2.0
//! Transient state kept between runs, stored as CBOR next to other app data.
//!
//! Unlike `settings.toml`, nothing here is meant to be edited by hand.

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Directory the library dialog opened a photo from last time.
    #[serde(default)]
    pub last_library_directory: Option<PathBuf>,

    /// Directory the last snapshot was shared to.
    #[serde(default)]
    pub last_share_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads state from the default location.
    ///
    /// Returns the state and an optional notification key. Failures fall back
    /// to the default state.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(state) => (state, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "state file is corrupted");
                    (
                        Self::default(),
                        Some("notification-state-parse-error".to_string()),
                    )
                }
            },
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "cannot read state file");
                (
                    Self::default(),
                    Some("notification-state-read-error".to_string()),
                )
            }
        }
    }

    /// Saves state to the default location. Returns a notification key on failure.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-write-error".to_string());
            }
        }

        let written = fs::File::create(&path)
            .map_err(|err| err.to_string())
            .and_then(|file| {
                ciborium::into_writer(self, BufWriter::new(file)).map_err(|err| err.to_string())
            });

        match written {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "cannot write state file");
                Some("notification-state-write-error".to_string())
            }
        }
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }

    /// Remembers the directory of a photo picked from the library.
    pub fn set_last_library_directory_from_file(&mut self, file_path: &Path) {
        if let Some(parent) = file_path.parent() {
            self.last_library_directory = Some(parent.to_path_buf());
        }
    }

    pub fn set_last_share_directory(&mut self, directory: &Path) {
        self.last_share_directory = Some(directory.to_path_buf());
    }
}
