// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Window background.
pub fn screen(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Dimmed backdrop behind a modal sheet.
pub fn scrim(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.overlay_background)),
        ..Default::default()
    }
}

/// Card holding the source chooser.
pub fn sheet(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base;
    container::Style {
        background: Some(Background::Color(base.color)),
        text_color: Some(base.text),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Template selector tooltip, inverted against the window surface.
pub fn tip(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.overlay_background)),
        text_color: Some(colors.overlay_text),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}
