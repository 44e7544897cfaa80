// SPDX-License-Identifier: MPL-2.0
//! Layout model: the active template and the photo held by each slot.
//!
//! Hidden slots keep their photo. Switching back to a template that reveals
//! them shows the previously assigned photo unchanged.

use super::template::{Slot, Template};
use crate::media::Photo;

/// Active template plus per-slot photos.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    template: Template,
    photos: [Option<Photo>; 4],
}

impl Layout {
    /// Creates an empty layout showing the default template.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected template.
    #[must_use]
    pub fn template(&self) -> Template {
        self.template
    }

    /// Makes `template` the active template.
    ///
    /// Reselecting the current template changes nothing. Photos in slots the
    /// new template hides are kept.
    pub fn select_template(&mut self, template: Template) {
        if self.template != template {
            tracing::debug!(?template, "template selected");
        }
        self.template = template;
    }

    /// Slots shown by the active template.
    #[must_use]
    pub fn visible_slots(&self) -> &'static [Slot] {
        self.template.visible_slots()
    }

    /// Replaces whatever `slot` held with `photo`, visible or not.
    pub fn assign_image(&mut self, slot: Slot, photo: Photo) {
        self.photos[slot.index()] = Some(photo);
    }

    /// Photo held by `slot`, regardless of visibility.
    #[must_use]
    pub fn image(&self, slot: Slot) -> Option<&Photo> {
        self.photos[slot.index()].as_ref()
    }
}
