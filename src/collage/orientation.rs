// SPDX-License-Identifier: MPL-2.0
//! Window orientation and the drag axis it selects.

use iced::{Size, Vector};

/// Device orientation as last reported by the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Landscape when strictly wider than tall.
    #[must_use]
    pub fn from_size(size: Size) -> Self {
        if size.width > size.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    /// Axis used for the share swipe: up in portrait, left in landscape.
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Orientation::Portrait => Axis::Vertical,
            Orientation::Landscape => Axis::Horizontal,
        }
    }
}

/// A single translation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    Horizontal,
    #[default]
    Vertical,
}

impl Axis {
    /// Component of `vector` along this axis.
    #[must_use]
    pub fn component(self, vector: Vector) -> f32 {
        match self {
            Axis::Horizontal => vector.x,
            Axis::Vertical => vector.y,
        }
    }

    /// Extent of `size` along this axis.
    #[must_use]
    pub fn extent(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// Vector that moves `amount` along this axis only.
    #[must_use]
    pub fn vector(self, amount: f32) -> Vector {
        match self {
            Axis::Horizontal => Vector::new(amount, 0.0),
            Axis::Vertical => Vector::new(0.0, amount),
        }
    }
}
