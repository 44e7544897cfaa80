// SPDX-License-Identifier: MPL-2.0
//! Swipe-to-share gesture interpreter.
//!
//! A drag over the grid moves it along the orientation axis (up in portrait,
//! left in landscape). Releasing past [`NEGATIVE_TRANSLATION_TO_SHARE`] slides
//! the grid off screen and asks for an export; releasing before it springs the
//! grid back to its resting place.
//!
//! ```text
//! Idle -> Dragging -> Committing -> AwaitingShare -> Resetting -> Idle
//!                 \-> Resetting -> Idle
//! ```
//!
//! Time is injected through the events so the machine can be driven by a
//! frame subscription in the app and by plain instants in tests.

pub mod transition;

use crate::collage::{Axis, Orientation};
use iced::{Size, Vector};
use std::time::{Duration, Instant};
use transition::Transition;

/// Translation on the active axis at or past which a release shares the grid.
pub const NEGATIVE_TRANSLATION_TO_SHARE: f32 = -150.0;

/// Duration of the return-to-rest animation.
pub const RESET_DURATION: Duration = Duration::from_millis(500);

/// Duration of the slide-off-screen animation.
pub const COMMIT_DURATION: Duration = Duration::from_millis(500);

/// Movement below this distance still counts as a tap.
pub const TAP_SLOP: f32 = 4.0;

/// Cumulative drag displacement since the gesture began.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    pub translation: Vector,
    /// Orientation captured at the most recent rotation notification.
    pub orientation: Orientation,
}

/// Interpreter lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Dragging,
    Committing,
    /// Off screen, waiting for the share surface to be dismissed.
    AwaitingShare,
    Resetting,
}

/// Input events.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    Began,
    Moved(DragSample),
    /// Release or cancellation. `viewport` gives the exit distance on commit.
    Ended { now: Instant, viewport: Size },
    /// Animation clock.
    Tick(Instant),
    /// The share surface closed, whatever the outcome.
    ShareFinished(Instant),
}

/// What the orchestrator should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The gesture never left the tap slop: treat it as a click on the press point.
    Tap,
    /// The commit animation finished: render and share the snapshot.
    Export,
}

/// Turns a drag over the grid into either a spring back or a commit.
///
/// The interpreter tracks a single offset along the active [`Axis`]. Only
/// outward movement (up in portrait, left in landscape) moves the grid, and
/// the gesture is armed once that offset reaches
/// [`NEGATIVE_TRANSLATION_TO_SHARE`]. Animations are sampled from the
/// [`Event::Tick`] clock, so the interpreter never reads the system time.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    phase: Phase,
    /// Axis of the most recent sample.
    axis: Axis,
    offset: f32,
    armed: bool,
    /// Set once the drag leaves the tap slop.
    moved: bool,
    transition: Option<Transition>,
}

impl Interpreter {
    /// Creates an idle interpreter with the grid at rest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one input event and reports what the caller has to do next.
    ///
    /// This is the single entry point used by the session. The typed methods
    /// below do the same work and are handy when the caller already knows
    /// the event kind.
    pub fn handle(&mut self, event: Event) -> Effect {
        match event {
            Event::Began => {
                self.begin();
                Effect::None
            }
            Event::Moved(sample) => {
                self.update(sample);
                Effect::None
            }
            Event::Ended { now, viewport } => self.end(now, viewport),
            Event::Tick(now) => self.tick(now),
            Event::ShareFinished(now) => {
                self.share_finished(now);
                Effect::None
            }
        }
    }

    /// Starts a gesture. Ignored unless idle. Returns whether a drag began.
    pub fn begin(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Dragging;
        self.offset = 0.0;
        self.armed = false;
        self.moved = false;
        true
    }

    /// Applies the latest cumulative displacement. Older samples are simply superseded.
    pub fn update(&mut self, sample: DragSample) {
        if self.phase != Phase::Dragging {
            return;
        }

        let v = sample.translation;
        if (v.x * v.x + v.y * v.y).sqrt() > TAP_SLOP {
            self.moved = true;
        }

        self.axis = sample.orientation.axis();
        // Only the outward direction moves the grid.
        self.offset = self.axis.component(v).min(0.0);
        self.armed = self.offset <= NEGATIVE_TRANSLATION_TO_SHARE;
    }

    /// Finishes the gesture using the armed flag from the last update.
    pub fn end(&mut self, now: Instant, viewport: Size) -> Effect {
        if self.phase != Phase::Dragging {
            return Effect::None;
        }

        if self.armed {
            let exit = -self.axis.extent(viewport);
            self.transition = Some(Transition::new(self.offset, exit, now, COMMIT_DURATION));
            self.phase = Phase::Committing;
            self.armed = false;
            tracing::debug!(axis = ?self.axis, offset = self.offset, "share gesture committed");
            return Effect::None;
        }

        if !self.moved {
            self.offset = 0.0;
            self.phase = Phase::Idle;
            return Effect::Tap;
        }

        self.start_reset(now);
        Effect::None
    }

    /// Advances the running animation.
    pub fn tick(&mut self, now: Instant) -> Effect {
        let Some(transition) = self.transition else {
            return Effect::None;
        };

        self.offset = transition.sample(now);
        if !transition.is_finished(now) {
            return Effect::None;
        }

        self.transition = None;
        match self.phase {
            Phase::Committing => {
                self.phase = Phase::AwaitingShare;
                Effect::Export
            }
            Phase::Resetting => {
                self.offset = 0.0;
                self.phase = Phase::Idle;
                Effect::None
            }
            Phase::Idle | Phase::Dragging | Phase::AwaitingShare => Effect::None,
        }
    }

    /// Brings the grid back once the share surface is gone.
    pub fn share_finished(&mut self, now: Instant) {
        if self.phase == Phase::AwaitingShare {
            self.start_reset(now);
        }
    }

    fn start_reset(&mut self, now: Instant) {
        self.transition = Some(Transition::new(self.offset, 0.0, now, RESET_DURATION));
        self.phase = Phase::Resetting;
        self.armed = false;
    }

    /// Current phase of the state machine.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether releasing now would commit the swipe.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// True while a frame clock is needed.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Current translation of the grid.
    #[must_use]
    pub fn translation(&self) -> Vector {
        self.axis.vector(self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size {
        width: 800.0,
        height: 600.0,
    };

    fn sample(x: f32, y: f32, orientation: Orientation) -> DragSample {
        DragSample {
            translation: Vector::new(x, y),
            orientation,
        }
    }

    fn drag(interpreter: &mut Interpreter, x: f32, y: f32, orientation: Orientation) {
        interpreter.handle(Event::Began);
        interpreter.handle(Event::Moved(sample(x, y, orientation)));
    }

    #[test]
    fn begin_enters_dragging() {
        let mut interpreter = Interpreter::new();
        assert!(interpreter.begin());
        assert_eq!(interpreter.phase(), Phase::Dragging);
        assert!(!interpreter.begin());
    }

    #[test]
    fn positive_displacement_is_clamped_to_zero() {
        let mut interpreter = Interpreter::new();
        drag(&mut interpreter, 0.0, 80.0, Orientation::Portrait);
        assert_eq!(interpreter.translation(), Vector::new(0.0, 0.0));

        interpreter.handle(Event::Moved(sample(120.0, 0.0, Orientation::Landscape)));
        assert_eq!(interpreter.translation(), Vector::new(0.0, 0.0));
    }

    #[test]
    fn translation_follows_active_axis_only() {
        let mut interpreter = Interpreter::new();
        drag(&mut interpreter, -30.0, -40.0, Orientation::Portrait);
        assert_eq!(interpreter.translation(), Vector::new(0.0, -40.0));

        interpreter.handle(Event::Moved(sample(-30.0, -40.0, Orientation::Landscape)));
        assert_eq!(interpreter.translation(), Vector::new(-30.0, 0.0));
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut interpreter = Interpreter::new();
        drag(&mut interpreter, 0.0, -149.9, Orientation::Portrait);
        assert!(!interpreter.is_armed());

        interpreter.handle(Event::Moved(sample(0.0, -150.0, Orientation::Portrait)));
        assert!(interpreter.is_armed());
    }

    #[test]
    fn latest_sample_wins() {
        let mut interpreter = Interpreter::new();
        drag(&mut interpreter, 0.0, -300.0, Orientation::Portrait);
        interpreter.handle(Event::Moved(sample(0.0, -20.0, Orientation::Portrait)));
        assert!(!interpreter.is_armed());
    }

    #[test]
    fn unarmed_release_resets_without_export() {
        let start = Instant::now();
        let mut interpreter = Interpreter::new();
        drag(&mut interpreter, -80.0, 0.0, Orientation::Landscape);

        let effect = interpreter.handle(Event::Ended {
            now: start,
            viewport: VIEWPORT,
        });
        assert_eq!(effect, Effect::None);
        assert_eq!(interpreter.phase(), Phase::Resetting);

        let effect = interpreter.handle(Event::Tick(start + RESET_DURATION));
        assert_eq!(effect, Effect::None);
        assert_eq!(interpreter.phase(), Phase::Idle);
        assert_eq!(interpreter.translation(), Vector::new(0.0, 0.0));
    }

    #[test]
    fn armed_release_slides_off_then_exports_once() {
        let start = Instant::now();
        let mut interpreter = Interpreter::new();
        drag(&mut interpreter, 0.0, -200.0, Orientation::Portrait);

        interpreter.handle(Event::Ended {
            now: start,
            viewport: VIEWPORT,
        });
        assert_eq!(interpreter.phase(), Phase::Committing);
        assert!(!interpreter.is_armed());

        let halfway = interpreter.handle(Event::Tick(start + COMMIT_DURATION / 2));
        assert_eq!(halfway, Effect::None);
        assert!(interpreter.translation().y < -200.0);

        let done = interpreter.handle(Event::Tick(start + COMMIT_DURATION));
        assert_eq!(done, Effect::Export);
        assert_eq!(interpreter.phase(), Phase::AwaitingShare);
        assert_eq!(interpreter.translation(), Vector::new(0.0, -600.0));

        let again = interpreter.handle(Event::Tick(start + COMMIT_DURATION * 2));
        assert_eq!(again, Effect::None);
    }

    #[test]
    fn share_completion_returns_to_identity() {
        let start = Instant::now();
        let mut interpreter = Interpreter::new();
        drag(&mut interpreter, -151.0, 0.0, Orientation::Landscape);
        interpreter.handle(Event::Ended {
            now: start,
            viewport: VIEWPORT,
        });
        interpreter.handle(Event::Tick(start + COMMIT_DURATION));
        assert_eq!(interpreter.translation(), Vector::new(-800.0, 0.0));

        let shared_at = start + Duration::from_secs(4);
        interpreter.handle(Event::ShareFinished(shared_at));
        assert_eq!(interpreter.phase(), Phase::Resetting);

        interpreter.handle(Event::Tick(shared_at + RESET_DURATION));
        assert_eq!(interpreter.phase(), Phase::Idle);
        assert_eq!(interpreter.translation(), Vector::new(0.0, 0.0));
    }

    #[test]
    fn share_finished_outside_awaiting_is_ignored() {
        let mut interpreter = Interpreter::new();
        interpreter.handle(Event::ShareFinished(Instant::now()));
        assert_eq!(interpreter.phase(), Phase::Idle);
    }

    #[test]
    fn release_without_movement_is_a_tap() {
        let mut interpreter = Interpreter::new();
        drag(&mut interpreter, 1.0, -2.0, Orientation::Portrait);
        let effect = interpreter.handle(Event::Ended {
            now: Instant::now(),
            viewport: VIEWPORT,
        });
        assert_eq!(effect, Effect::Tap);
        assert_eq!(interpreter.phase(), Phase::Idle);
    }

    #[test]
    fn gestures_are_ignored_while_animating() {
        let start = Instant::now();
        let mut interpreter = Interpreter::new();
        drag(&mut interpreter, 0.0, -50.0, Orientation::Portrait);
        interpreter.handle(Event::Ended {
            now: start,
            viewport: VIEWPORT,
        });
        assert!(interpreter.is_animating());
        assert!(!interpreter.begin());
        assert_eq!(interpreter.phase(), Phase::Resetting);
    }

    #[test]
    fn end_without_drag_does_nothing() {
        let mut interpreter = Interpreter::new();
        let effect = interpreter.end(Instant::now(), VIEWPORT);
        assert_eq!(effect, Effect::None);
        assert_eq!(interpreter.phase(), Phase::Idle);
    }

    #[test]
    fn rotation_after_last_sample_keeps_the_sampled_axis() {
        let mut interpreter = Interpreter::new();
        let start = Instant::now();
        drag(&mut interpreter, 0.0, -200.0, Orientation::Portrait);

        // The window turned landscape before release; no sample followed.
        let rotated = Size::new(900.0, 500.0);
        interpreter.end(start, rotated);
        interpreter.tick(start + COMMIT_DURATION);

        assert_eq!(interpreter.phase(), Phase::AwaitingShare);
        assert_eq!(interpreter.translation(), Vector::new(0.0, -rotated.height));
    }
}
