// SPDX-License-Identifier: MPL-2.0
//! On-screen rendering of the composed grid.
//!
//! The canvas covers the whole window so the grid can slide past its
//! resting place while the share gesture runs. Cells come from the same
//! [`GridGeometry`] the snapshot uses.

use crate::collage::geometry::cover_rect;
use crate::collage::snapshot::{MARK_LENGTH_RATIO, MARK_THICKNESS_RATIO};
use crate::collage::{GridGeometry, GridStyle, Layout, Orientation};
use crate::ui::design_tokens::{sizing, spacing};
use iced::widget::canvas;
use iced::{mouse, touch, Color, Point, Rectangle, Size, Theme, Vector};

/// Extent of the template bar across its stacking axis.
pub const TEMPLATE_BAR_EXTENT: f32 = sizing::TEMPLATE_BUTTON + 2.0 * spacing::LG;

/// Resting rectangle of the grid for a window of `viewport`.
///
/// Portrait stacks header, grid and template bar vertically; landscape puts
/// them side by side. The grid is the largest square that fits the space
/// left between them, centered in it.
#[must_use]
pub fn grid_frame(viewport: Size, orientation: Orientation) -> Rectangle {
    let padding = spacing::LG;
    let region = match orientation {
        Orientation::Portrait => Rectangle::new(
            Point::new(0.0, sizing::HEADER_HEIGHT),
            Size::new(
                viewport.width,
                viewport.height - sizing::HEADER_HEIGHT - TEMPLATE_BAR_EXTENT,
            ),
        ),
        Orientation::Landscape => Rectangle::new(
            Point::new(sizing::HEADER_WIDTH, 0.0),
            Size::new(
                viewport.width - sizing::HEADER_WIDTH - TEMPLATE_BAR_EXTENT,
                viewport.height,
            ),
        ),
    };

    let side = (region.width - 2.0 * padding)
        .min(region.height - 2.0 * padding)
        .max(sizing::MIN_GRID_SIDE);

    Rectangle::new(
        Point::new(
            region.x + (region.width - side) / 2.0,
            region.y + (region.height - side) / 2.0,
        ),
        Size::new(side, side),
    )
}

fn color(rgba: [u8; 4]) -> Color {
    Color::from_rgba8(rgba[0], rgba[1], rgba[2], f32::from(rgba[3]) / 255.0)
}

/// Canvas program drawing the layout at `frame` shifted by `translation`.
pub struct GridCanvas<'a, Message> {
    pub layout: &'a Layout,
    pub frame: Rectangle,
    pub translation: Vector,
    pub style: GridStyle,
    /// Built from the press point. The canvas spans the window, so this is
    /// also the window position.
    pub on_press: fn(Point) -> Message,
}

impl<Message> GridCanvas<'_, Message> {
    fn resting_contains(&self, point: Point) -> bool {
        self.frame.contains(point)
    }
}

impl<Message> canvas::Program<Message> for GridCanvas<'_, Message> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        let position = match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                cursor.position_in(bounds)?
            }
            iced::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                Point::new(position.x - bounds.x, position.y - bounds.y)
            }
            _ => return None,
        };

        if !self.resting_contains(position) {
            return None;
        }

        Some(iced::widget::Action::publish((self.on_press)(position)).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let origin = self.frame.position() + self.translation;
        let geometry = GridGeometry::new(self.frame.width);

        frame.fill_rectangle(origin, self.frame.size(), color(self.style.background));

        for (slot, cell) in geometry.cells(self.layout.template()) {
            let cell = Rectangle::new(cell.position() + Vector::new(origin.x, origin.y), cell.size());

            match self.layout.image(slot) {
                Some(photo) => {
                    let image_size = Size::new(photo.width() as f32, photo.height() as f32);
                    let local_cell = Rectangle::with_size(cell.size());
                    let cover = cover_rect(image_size, local_cell);
                    let handle = photo.handle.clone();
                    frame.with_clip(cell, |clipped| {
                        clipped.draw_image(cover, canvas::Image::new(handle));
                    });
                }
                None => {
                    frame.fill_rectangle(cell.position(), cell.size(), color(self.style.placeholder));
                    draw_mark(&mut frame, cell, color(self.style.mark));
                }
            }
        }

        vec![frame.into_geometry()]
    }
}

fn draw_mark(frame: &mut canvas::Frame, cell: Rectangle, mark: Color) {
    let arm = cell.width.min(cell.height) * MARK_LENGTH_RATIO;
    let thickness = (arm * MARK_THICKNESS_RATIO).max(1.0);
    let center = cell.center();

    frame.fill_rectangle(
        Point::new(center.x - arm / 2.0, center.y - thickness / 2.0),
        Size::new(arm, thickness),
        mark,
    );
    frame.fill_rectangle(
        Point::new(center.x - thickness / 2.0, center.y - arm / 2.0),
        Size::new(thickness, arm),
        mark,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portrait_frame_sits_between_header_and_bar() {
        let viewport = Size::new(400.0, 800.0);
        let frame = grid_frame(viewport, Orientation::Portrait);

        assert_eq!(frame.width, frame.height);
        assert_eq!(frame.width, 400.0 - 2.0 * spacing::LG);
        assert!(frame.y >= sizing::HEADER_HEIGHT);
        assert!(frame.y + frame.height <= viewport.height - TEMPLATE_BAR_EXTENT);
        assert!((frame.center_x() - 200.0).abs() < 1e-3);
    }

    #[test]
    fn landscape_frame_sits_between_header_and_bar() {
        let viewport = Size::new(1000.0, 600.0);
        let frame = grid_frame(viewport, Orientation::Landscape);

        assert_eq!(frame.height, 600.0 - 2.0 * spacing::LG);
        assert!(frame.x >= sizing::HEADER_WIDTH);
        assert!(frame.x + frame.width <= viewport.width - TEMPLATE_BAR_EXTENT);
    }

    #[test]
    fn tiny_windows_keep_a_minimum_grid() {
        let frame = grid_frame(Size::new(50.0, 50.0), Orientation::Portrait);
        assert_eq!(frame.width, sizing::MIN_GRID_SIDE);
    }
}
