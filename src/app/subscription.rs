// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Presses come from the grid canvas. Everything after the press (moves,
//! release, leaving the window) is read from the global event stream so the
//! gesture keeps tracking once the grid slides away from under the pointer.

use super::Message;
use crate::collage::Template;
use iced::{event, keyboard, mouse, time, touch, window, Subscription};
use std::time::Duration;

/// Frame clock used while the grid animates.
const ANIMATION_FRAME: Duration = Duration::from_millis(16);
/// Clock used to expire toasts.
const NOTIFICATION_TICK: Duration = Duration::from_millis(500);

/// Window geometry and keyboard shortcuts.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::Opened { size, .. })
        | event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. })
            if status == event::Status::Ignored =>
        {
            map_key(&key)
        }
        _ => None,
    })
}

fn map_key(key: &keyboard::Key) -> Option<Message> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::EscapePressed),
        keyboard::Key::Character(c) => Template::from_shortcut(c.as_str()).map(Message::TemplateShortcut),
        _ => None,
    }
}

/// Pointer tracking for a gesture in progress.
pub fn create_pointer_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position))
        }
        event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        event::Event::Mouse(mouse::Event::CursorLeft) => Some(Message::PointerLeft),
        event::Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            Some(Message::PointerMoved(position))
        }
        event::Event::Touch(touch::Event::FingerLifted { .. }) => Some(Message::PointerReleased),
        event::Event::Touch(touch::Event::FingerLost { .. }) => Some(Message::PointerLeft),
        _ => None,
    })
}

/// Animation frames take precedence over the slower notification clock.
pub fn create_tick_subscription(animating: bool, has_notifications: bool) -> Subscription<Message> {
    if animating {
        time::every(ANIMATION_FRAME).map(Message::Tick)
    } else if has_notifications {
        time::every(NOTIFICATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_keys_select_templates() {
        let key = keyboard::Key::Character("3".into());
        assert!(matches!(
            map_key(&key),
            Some(Message::TemplateShortcut(Template::TwoUpTwoDown))
        ));
    }

    #[test]
    fn escape_closes_the_chooser() {
        let key = keyboard::Key::Named(keyboard::key::Named::Escape);
        assert!(matches!(map_key(&key), Some(Message::EscapePressed)));
    }

    #[test]
    fn other_keys_are_ignored() {
        let key = keyboard::Key::Character("x".into());
        assert!(map_key(&key).is_none());
    }
}
