// SPDX-License-Identifier: MPL-2.0
//! Rasterizes the composed grid into a single image for sharing.
//!
//! The snapshot is always rendered from the current [`Layout`]; nothing is
//! cached between calls.

use super::geometry::GridGeometry;
use super::layout::Layout;
use crate::media::Photo;
use image_rs::imageops::{self, FilterType};
use image_rs::{Rgba, RgbaImage};

/// Colors used by both the canvas and the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridStyle {
    pub background: [u8; 4],
    pub placeholder: [u8; 4],
    pub mark: [u8; 4],
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            background: [16, 102, 152, 255],
            placeholder: [255, 255, 255, 255],
            mark: [16, 102, 152, 255],
        }
    }
}

/// Placeholder "+" arm length, relative to the shorter cell edge.
pub const MARK_LENGTH_RATIO: f32 = 0.3;
/// Placeholder "+" thickness, relative to the arm length.
pub const MARK_THICKNESS_RATIO: f32 = 0.12;

/// Renders the visible cells of `layout` into a `side` x `side` image.
#[must_use]
pub fn export_snapshot(layout: &Layout, side: u32, style: &GridStyle) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(side, side, Rgba(style.background));
    let geometry = GridGeometry::new(side as f32);

    for (slot, rect) in geometry.cells(layout.template()) {
        let x = rect.x.round() as u32;
        let y = rect.y.round() as u32;
        let width = (rect.x + rect.width).round() as u32 - x;
        let height = (rect.y + rect.height).round() as u32 - y;
        if width == 0 || height == 0 {
            continue;
        }

        match layout.image(slot) {
            Some(photo) => {
                let tile = cover_tile(photo, width, height);
                imageops::replace(&mut canvas, &tile, i64::from(x), i64::from(y));
            }
            None => {
                fill_rect(&mut canvas, x, y, width, height, style.placeholder);
                draw_mark(&mut canvas, x, y, width, height, style.mark);
            }
        }
    }

    canvas
}

/// Crops the photo to the cell's aspect ratio around its center, then scales it.
fn cover_tile(photo: &Photo, width: u32, height: u32) -> RgbaImage {
    let source = photo.pixels();
    let (src_w, src_h) = source.dimensions();
    if src_w == 0 || src_h == 0 {
        return RgbaImage::new(width, height);
    }

    let scale = (width as f32 / src_w as f32).max(height as f32 / src_h as f32);
    let crop_w = ((width as f32 / scale).round() as u32).clamp(1, src_w);
    let crop_h = ((height as f32 / scale).round() as u32).clamp(1, src_h);
    let crop_x = (src_w - crop_w) / 2;
    let crop_y = (src_h - crop_h) / 2;

    let cropped = imageops::crop_imm(source, crop_x, crop_y, crop_w, crop_h).to_image();
    imageops::resize(&cropped, width, height, FilterType::Triangle)
}

fn fill_rect(canvas: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32, color: [u8; 4]) {
    let x_end = (x + width).min(canvas.width());
    let y_end = (y + height).min(canvas.height());
    for py in y..y_end {
        for px in x..x_end {
            canvas.put_pixel(px, py, Rgba(color));
        }
    }
}

fn draw_mark(canvas: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32, color: [u8; 4]) {
    let length = (width.min(height) as f32 * MARK_LENGTH_RATIO).round() as u32;
    let thickness = ((length as f32 * MARK_THICKNESS_RATIO).round() as u32).max(1);
    if length == 0 {
        return;
    }

    let center_x = x + width / 2;
    let center_y = y + height / 2;
    fill_rect(
        canvas,
        center_x.saturating_sub(length / 2),
        center_y.saturating_sub(thickness / 2),
        length,
        thickness,
        color,
    );
    fill_rect(
        canvas,
        center_x.saturating_sub(thickness / 2),
        center_y.saturating_sub(length / 2),
        thickness,
        length,
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collage::{Slot, Template};

    fn solid(color: [u8; 4], width: u32, height: u32) -> Photo {
        Photo::from_rgba_image(RgbaImage::from_pixel(width, height, Rgba(color)))
    }

    #[test]
    fn empty_grid_shows_background_and_placeholders() {
        let style = GridStyle::default();
        let image = export_snapshot(&Layout::new(), 200, &style);

        assert_eq!(image.dimensions(), (200, 200));
        assert_eq!(image.get_pixel(2, 2).0, style.background);
        // Inside the top-left cell, away from the mark.
        assert_eq!(image.get_pixel(20, 20).0, style.placeholder);
        // Center of the top cell carries the mark.
        assert_eq!(image.get_pixel(100, 52).0, style.mark);
    }

    #[test]
    fn assigned_photo_fills_its_cell() {
        let mut layout = Layout::new();
        layout.assign_image(Slot::BottomLeft, solid([200, 10, 10, 255], 40, 90));

        let image = export_snapshot(&layout, 200, &GridStyle::default());
        // Bottom-left cell spans roughly x 10..95, y 105..190.
        assert_eq!(image.get_pixel(50, 150).0, [200, 10, 10, 255]);
    }

    #[test]
    fn hidden_slot_is_not_exported() {
        let mut layout = Layout::new();
        layout.select_template(Template::TwoUpOneDown);
        layout.assign_image(Slot::BottomRight, solid([0, 200, 0, 255], 10, 10));

        let style = GridStyle::default();
        let image = export_snapshot(&layout, 200, &style);
        // Bottom row is a single wide placeholder cell.
        assert_eq!(image.get_pixel(170, 120).0, style.placeholder);

        layout.select_template(Template::TwoUpTwoDown);
        let image = export_snapshot(&layout, 200, &style);
        assert_eq!(image.get_pixel(170, 120).0, [0, 200, 0, 255]);
    }

    #[test]
    fn snapshot_reflects_latest_assignment() {
        let mut layout = Layout::new();
        layout.assign_image(Slot::TopLeft, solid([10, 10, 10, 255], 8, 8));
        let _ = export_snapshot(&layout, 100, &GridStyle::default());

        layout.assign_image(Slot::TopLeft, solid([250, 250, 250, 255], 8, 8));
        let image = export_snapshot(&layout, 100, &GridStyle::default());
        assert_eq!(image.get_pixel(50, 25).0, [250, 250, 250, 255]);
    }

    #[test]
    fn zero_side_produces_empty_image() {
        let image = export_snapshot(&Layout::new(), 0, &GridStyle::default());
        assert_eq!(image.dimensions(), (0, 0));
    }
}
