// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one exposes a `view` function and, where it emits anything, a `Message`.
//!
//! # Screen parts
//!
//! - [`grid`] - Canvas drawing the collage and reporting presses
//! - [`header`] - Title and swipe hint
//! - [`template_bar`] - Template selectors
//! - [`source_chooser`] - Modal asking where a photo comes from
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod grid;
pub mod header;
pub mod notifications;
pub mod source_chooser;
pub mod styles;
pub mod template_bar;
pub mod theming;
