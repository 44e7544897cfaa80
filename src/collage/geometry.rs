// SPDX-License-Identifier: MPL-2.0
//! Cell placement inside the square grid.
//!
//! Both the on-screen canvas and the exported snapshot use these rectangles,
//! so what is drawn and what is exported line up cell for cell.

use super::template::{Slot, Template};
use iced::{Point, Rectangle, Size};

/// Gap between cells (and around the border), as a fraction of the grid side.
pub const SPACING_RATIO: f32 = 0.05;

/// Geometry of a square grid with origin at (0, 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    side: f32,
}

impl GridGeometry {
    #[must_use]
    pub fn new(side: f32) -> Self {
        Self {
            side: side.max(0.0),
        }
    }

    #[must_use]
    pub fn side(&self) -> f32 {
        self.side
    }

    #[must_use]
    pub fn spacing(&self) -> f32 {
        self.side * SPACING_RATIO
    }

    /// Rectangles of the visible cells of `template`, in reading order.
    #[must_use]
    pub fn cells(&self, template: Template) -> Vec<(Slot, Rectangle)> {
        let spacing = self.spacing();
        let row_height = ((self.side - 3.0 * spacing) / 2.0).max(0.0);

        let mut cells = Vec::with_capacity(4);
        let (top, bottom): (Vec<Slot>, Vec<Slot>) = template
            .visible_slots()
            .iter()
            .partition(|slot| slot.is_top());

        for (row, slots) in [top, bottom].into_iter().enumerate() {
            let y = spacing + row as f32 * (row_height + spacing);
            let count = slots.len() as f32;
            let width = ((self.side - (count + 1.0) * spacing) / count).max(0.0);

            for (column, slot) in slots.into_iter().enumerate() {
                let x = spacing + column as f32 * (width + spacing);
                cells.push((
                    slot,
                    Rectangle::new(Point::new(x, y), Size::new(width, row_height)),
                ));
            }
        }

        cells
    }

    /// Slot under `point`, if any. Gaps between cells hit nothing.
    #[must_use]
    pub fn hit_test(&self, template: Template, point: Point) -> Option<Slot> {
        self.cells(template)
            .into_iter()
            .find(|(_, rect)| rect.contains(point))
            .map(|(slot, _)| slot)
    }
}

/// Rectangle that covers `cell` with an image of `image_size`, keeping its
/// aspect ratio and centering the overflow.
#[must_use]
pub fn cover_rect(image_size: Size, cell: Rectangle) -> Rectangle {
    if image_size.width <= 0.0 || image_size.height <= 0.0 {
        return cell;
    }

    let scale = (cell.width / image_size.width).max(cell.height / image_size.height);
    let width = image_size.width * scale;
    let height = image_size.height * scale;

    Rectangle::new(
        Point::new(
            cell.x + (cell.width - width) / 2.0,
            cell.y + (cell.height - height) / 2.0,
        ),
        Size::new(width, height),
    )
}
