// SPDX-License-Identifier: MPL-2.0
//! Handler methods for App message processing.
//!
//! Gesture input goes straight to the [`Session`](crate::session::Session);
//! the picker and share dialogs run as tasks whose results come back here.

use super::{App, Message};
use crate::collage::{Slot, Template};
use crate::media::{self, PickerOptions, PickerOutcome, ShareOptions, ShareOutcome};
use crate::session::Outcome;
use crate::ui::notifications::Notification;
use crate::ui::{source_chooser, template_bar};
use iced::{Point, Task};
use std::time::Instant;

impl App {
    pub(super) fn select_template(&mut self, template: Template) {
        self.session.select_template(template);
    }

    pub(super) fn handle_template_bar(&mut self, message: template_bar::Message) {
        match message {
            template_bar::Message::Select(template) => self.select_template(template),
        }
    }

    pub(super) fn handle_grid_pressed(&mut self, position: Point) {
        self.session.press(position);
    }

    pub(super) fn handle_pointer_released(&mut self) {
        match self.session.release(Instant::now()) {
            Outcome::OpenChooser(slot) => {
                tracing::debug!(?slot, "opening source chooser");
            }
            Outcome::None | Outcome::Share => {}
        }
    }

    pub(super) fn handle_tick(&mut self, now: Instant) -> Task<Message> {
        self.notifications.tick(now);

        match self.session.tick(now) {
            Outcome::Share => self.start_share(),
            Outcome::None | Outcome::OpenChooser(_) => Task::none(),
        }
    }

    /// Renders the snapshot and hands it to the share dialog.
    fn start_share(&mut self) -> Task<Message> {
        let scale = self.config.export.effective_scale();
        let snapshot = self.session.snapshot(scale, &self.style);
        tracing::info!(
            width = snapshot.width(),
            height = snapshot.height(),
            "sharing snapshot"
        );

        let options = ShareOptions {
            format: self.config.export.format,
            start_dir: self.app_state.last_share_directory.clone(),
        };
        Task::perform(media::share::share(snapshot, options), Message::ShareFinished)
    }

    pub(super) fn handle_share_finished(&mut self, outcome: ShareOutcome) {
        self.session.share_finished(Instant::now());

        if let Some(directory) = outcome.directory() {
            self.app_state.set_last_share_directory(directory);
            self.persist_state();
        }

        match outcome {
            ShareOutcome::Shared(path) => {
                tracing::info!(path = %path.display(), "snapshot shared");
                self.notifications.push(
                    Notification::success("notification-share-success")
                        .with_arg("path", path.display().to_string()),
                );
            }
            ShareOutcome::Cancelled => {
                tracing::debug!("share dismissed");
            }
            ShareOutcome::Failed(err) => {
                tracing::error!(%err, "sharing failed");
                self.notifications.push(
                    Notification::error("notification-share-failed")
                        .with_arg("detail", err.to_string()),
                );
            }
        }
    }

    pub(super) fn handle_chooser(&mut self, message: source_chooser::Message) -> Task<Message> {
        match message {
            source_chooser::Message::Choose(source) => {
                let Some(slot) = self.session.close_chooser() else {
                    return Task::none();
                };
                tracing::debug!(?slot, ?source, "requesting photo");

                let options = PickerOptions {
                    library_enabled: self.config.picker.library_enabled,
                    start_dir: self.app_state.last_library_directory.clone(),
                };
                Task::perform(media::picker::pick(source, options), move |outcome| {
                    Message::PickerResolved(slot, outcome)
                })
            }
            source_chooser::Message::Cancel => {
                self.session.close_chooser();
                Task::none()
            }
        }
    }

    pub(super) fn handle_picker_resolved(&mut self, slot: Slot, outcome: PickerOutcome) {
        match outcome {
            PickerOutcome::Granted { photo, path } => {
                tracing::info!(
                    ?slot,
                    width = photo.width(),
                    height = photo.height(),
                    "photo assigned"
                );
                self.session.assign_image(slot, photo);
                if let Some(path) = path {
                    self.app_state.set_last_library_directory_from_file(&path);
                    self.persist_state();
                }
            }
            PickerOutcome::Cancelled => {
                tracing::debug!(?slot, "picker dismissed");
            }
            PickerOutcome::Failed(err) => {
                tracing::warn!(?slot, %err, "photo could not be loaded");
                self.notifications.push(Notification::from_error(&err));
            }
            refused => {
                tracing::info!(?slot, outcome = ?refused, "photo source refused");
                let Some(key) = refused.notification_key() else {
                    return;
                };
                // Only a denial needs the user to act in system settings.
                let notification = if matches!(refused, PickerOutcome::Denied) {
                    Notification::warning(key)
                } else {
                    Notification::info(key)
                };
                self.notifications.push(notification);
            }
        }
    }
}
