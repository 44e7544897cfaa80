// SPDX-License-Identifier: MPL-2.0
//! Session-scoped context shared by the layout model and the gesture
//! interpreter.
//!
//! One [`Session`] lives for the whole run. It owns the active template, the
//! slot photos, the orientation reported by the window and the gesture state,
//! and turns raw pointer input into the few decisions the shell acts on.

use crate::collage::{export_snapshot, GridGeometry, GridStyle, Layout, Orientation, Slot, Template};
use crate::gesture::{DragSample, Effect, Event, Interpreter, Phase};
use crate::media::Photo;
use crate::ui::grid::grid_frame;
use image_rs::RgbaImage;
use iced::{Point, Rectangle, Size, Vector};
use std::time::Instant;

/// Decision the shell has to carry out after feeding input to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    None,
    /// A tap landed on a visible cell: ask which source to pick from.
    OpenChooser(Slot),
    /// The grid is off screen: render and share the snapshot.
    Share,
}

/// Everything the shell needs to drive the collage for one run.
///
/// Pointer positions are window coordinates. The session keeps the resting
/// grid frame in sync with the window size, so hit testing and the snapshot
/// always use the geometry the user sees.
#[derive(Debug, Clone)]
pub struct Session {
    layout: Layout,
    orientation: Orientation,
    /// Window size; also the exit distance of a committed swipe.
    viewport: Size,
    /// Resting grid rectangle for `viewport`.
    frame: Rectangle,
    interpreter: Interpreter,
    /// Press point of the running gesture, in window coordinates.
    origin: Option<Point>,
    /// Slot the source chooser was opened for.
    chooser: Option<Slot>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Size::new(800.0, 600.0))
    }
}

impl Session {
    /// Creates a session for a window of `viewport` size with an empty grid.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        let orientation = Orientation::from_size(viewport);
        Self {
            layout: Layout::new(),
            orientation,
            viewport,
            frame: grid_frame(viewport, orientation),
            interpreter: Interpreter::new(),
            origin: None,
            chooser: None,
        }
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// See [`Layout::select_template`].
    pub fn select_template(&mut self, template: Template) {
        self.layout.select_template(template);
    }

    /// Puts `photo` in `slot`, replacing what was there.
    pub fn assign_image(&mut self, slot: Slot, photo: Photo) {
        self.layout.assign_image(slot, photo);
    }

    // ------------------------------------------------------------------
    // Window
    // ------------------------------------------------------------------

    /// Records a new window size. Orientation follows the aspect ratio.
    pub fn resized(&mut self, viewport: Size) {
        let orientation = Orientation::from_size(viewport);
        if orientation != self.orientation {
            tracing::debug!(?orientation, "orientation changed");
        }
        self.orientation = orientation;
        self.viewport = viewport;
        self.frame = grid_frame(viewport, orientation);
    }

    /// Orientation derived from the last window size.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Resting rectangle of the grid, in window coordinates.
    #[must_use]
    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    // ------------------------------------------------------------------
    // Gesture
    // ------------------------------------------------------------------

    /// Starts a gesture at `position`. Ignored while an animation runs or the
    /// chooser is open.
    pub fn press(&mut self, position: Point) {
        if self.chooser.is_some() {
            return;
        }
        if self.interpreter.begin() {
            self.origin = Some(position);
        }
    }

    /// Feeds the pointer position while a gesture runs.
    pub fn pointer_moved(&mut self, position: Point) {
        let Some(origin) = self.origin else {
            return;
        };
        self.interpreter.handle(Event::Moved(DragSample {
            translation: position - origin,
            orientation: self.orientation,
        }));
    }

    /// Ends the running gesture on release.
    pub fn release(&mut self, now: Instant) -> Outcome {
        let Some(origin) = self.origin.take() else {
            return Outcome::None;
        };
        let effect = self.interpreter.handle(Event::Ended {
            now,
            viewport: self.viewport,
        });

        if effect != Effect::Tap {
            return Outcome::None;
        }

        let local = Point::new(origin.x - self.frame.x, origin.y - self.frame.y);
        match GridGeometry::new(self.frame.width).hit_test(self.layout.template(), local) {
            Some(slot) => {
                self.chooser = Some(slot);
                Outcome::OpenChooser(slot)
            }
            None => Outcome::None,
        }
    }

    /// Ends the running gesture because the pointer left the window. Never
    /// counts as a tap.
    pub fn cancel(&mut self, now: Instant) {
        if self.origin.take().is_some() {
            self.interpreter.handle(Event::Ended {
                now,
                viewport: self.viewport,
            });
        }
    }

    /// Advances animations.
    pub fn tick(&mut self, now: Instant) -> Outcome {
        match self.interpreter.handle(Event::Tick(now)) {
            Effect::Export => Outcome::Share,
            Effect::None | Effect::Tap => Outcome::None,
        }
    }

    /// The share surface was dismissed.
    pub fn share_finished(&mut self, now: Instant) {
        self.interpreter.handle(Event::ShareFinished(now));
    }

    /// Current offset of the grid from its resting frame.
    #[must_use]
    pub fn translation(&self) -> Vector {
        self.interpreter.translation()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.interpreter.phase()
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.interpreter.is_armed()
    }

    /// True while the grid is sliding and needs a frame clock.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.interpreter.is_animating()
    }

    /// True between a press inside the grid and its release or cancel.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }

    // ------------------------------------------------------------------
    // Source chooser
    // ------------------------------------------------------------------

    /// Slot the source chooser is open for, if any.
    #[must_use]
    pub fn chooser(&self) -> Option<Slot> {
        self.chooser
    }

    /// Closes the chooser and hands back the slot it was opened for.
    pub fn close_chooser(&mut self) -> Option<Slot> {
        self.chooser.take()
    }

    // ------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------

    /// Renders the current layout at the on-screen grid side times `scale`.
    #[must_use]
    pub fn snapshot(&self, scale: f32, style: &GridStyle) -> RgbaImage {
        let side = (self.frame.width * scale).round().max(1.0) as u32;
        export_snapshot(&self.layout, side, style)
    }
}
