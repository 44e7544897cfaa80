// SPDX-License-Identifier: MPL-2.0
//! Grid templates and the image slots they reveal.
//!
//! A [`Template`] decides which of the four fixed [`Slot`]s are shown. The
//! left column is always visible; each template hides at most one slot of
//! the right column.
//!
//! ```
//! use iced_grid::collage::{Slot, Template};
//!
//! let slots = Template::OneUpTwoDown.visible_slots();
//! assert!(!slots.contains(&Slot::TopRight));
//! assert!(Slot::BottomRight.is_visible_in(Template::TwoUpTwoDown));
//! ```

use serde::{Deserialize, Serialize};

/// Photo-grid arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Template {
    /// One wide photo on top, two below.
    #[default]
    OneUpTwoDown,
    /// Two photos on top, one wide photo below.
    TwoUpOneDown,
    /// Two rows of two photos.
    TwoUpTwoDown,
}

impl Template {
    /// All templates in selector order.
    pub const ALL: [Template; 3] = [
        Template::OneUpTwoDown,
        Template::TwoUpOneDown,
        Template::TwoUpTwoDown,
    ];

    /// Returns the slots shown by this template, in reading order.
    #[must_use]
    pub const fn visible_slots(self) -> &'static [Slot] {
        match self {
            Template::OneUpTwoDown => &[Slot::TopLeft, Slot::BottomLeft, Slot::BottomRight],
            Template::TwoUpOneDown => &[Slot::TopLeft, Slot::TopRight, Slot::BottomLeft],
            Template::TwoUpTwoDown => &[
                Slot::TopLeft,
                Slot::TopRight,
                Slot::BottomLeft,
                Slot::BottomRight,
            ],
        }
    }

    /// Number of visible cells in the top row.
    #[must_use]
    pub const fn top_cells(self) -> usize {
        match self {
            Template::OneUpTwoDown => 1,
            Template::TwoUpOneDown | Template::TwoUpTwoDown => 2,
        }
    }

    /// Number of visible cells in the bottom row.
    #[must_use]
    pub const fn bottom_cells(self) -> usize {
        match self {
            Template::TwoUpOneDown => 1,
            Template::OneUpTwoDown | Template::TwoUpTwoDown => 2,
        }
    }

    /// Keyboard shortcut digit (1-based) for the selector controls.
    #[must_use]
    pub const fn shortcut(self) -> char {
        match self {
            Template::OneUpTwoDown => '1',
            Template::TwoUpOneDown => '2',
            Template::TwoUpTwoDown => '3',
        }
    }

    /// Maps a shortcut digit back to its template.
    #[must_use]
    pub fn from_shortcut(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|template| key.chars().eq(std::iter::once(template.shortcut())))
    }

    /// i18n key for the selector tooltip.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Template::OneUpTwoDown => "template-one-up-two-down",
            Template::TwoUpOneDown => "template-two-up-one-down",
            Template::TwoUpTwoDown => "template-two-up-two-down",
        }
    }
}

/// One of the four fixed image positions of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Slot {
    /// All slots in storage order.
    pub const ALL: [Slot; 4] = [Slot::TopLeft, Slot::TopRight, Slot::BottomLeft, Slot::BottomRight];

    /// Stable index into per-slot storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Slot::TopLeft => 0,
            Slot::TopRight => 1,
            Slot::BottomLeft => 2,
            Slot::BottomRight => 3,
        }
    }

    #[must_use]
    pub const fn is_top(self) -> bool {
        matches!(self, Slot::TopLeft | Slot::TopRight)
    }

    /// Returns true when `template` shows this slot.
    #[must_use]
    pub fn is_visible_in(self, template: Template) -> bool {
        template.visible_slots().contains(&self)
    }
}
