// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::collage::{Slot, Template};
use crate::media::{PickerOutcome, ShareOutcome};
use crate::ui::notifications;
use crate::ui::source_chooser;
use crate::ui::template_bar;
use iced::{Point, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Component messages are
/// forwarded through their own variants.
#[derive(Debug, Clone)]
pub enum Message {
    /// Press inside the resting grid, in window coordinates.
    GridPressed(Point),
    PointerMoved(Point),
    PointerReleased,
    /// The pointer left the window or the touch was lost.
    PointerLeft,
    WindowResized(Size),
    Tick(Instant),
    TemplateBar(template_bar::Message),
    /// Template picked with its keyboard shortcut.
    TemplateShortcut(Template),
    Chooser(source_chooser::Message),
    EscapePressed,
    PickerResolved(Slot, PickerOutcome),
    ShareFinished(ShareOutcome),
    Notification(notifications::NotificationMessage),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override, e.g. `fr`.
    pub lang: Option<String>,
    /// Overrides the config directory (`settings.toml`).
    pub config_dir: Option<String>,
    /// Overrides the data directory (`state.cbor`).
    pub data_dir: Option<String>,
}
