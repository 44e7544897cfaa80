// SPDX-License-Identifier: MPL-2.0
//! `iced_grid` is a photo collage composer built with the Iced GUI framework.
//!
//! Pick one of three grid templates, fill its cells with photos, then swipe the
//! grid off screen to save the composed image. The layout model and the
//! gesture interpreter have no UI dependencies beyond geometry types, so they
//! can be driven directly from tests.

#![doc(html_root_url = "https://docs.rs/iced_grid/0.1.0")]

pub mod app;
pub mod collage;
pub mod error;
pub mod gesture;
pub mod i18n;
pub mod media;
pub mod session;
pub mod ui;
