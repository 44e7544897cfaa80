// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action in the source chooser.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_500,
        button::Status::Disabled => palette::GRAY_200,
        button::Status::Active | button::Status::Pressed => palette::GRID_FRAME,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: iced::Shadow::default(),
        snap: true,
    }
}

/// Low-emphasis action (cancel).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_700
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: Border {
            color: palette::GRAY_200,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: iced::Shadow::default(),
        snap: true,
    }
}

/// Template selector. The active template gets a thick outline.
pub fn template(
    colors: ColorScheme,
    selected: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
        let (width, color) = if selected {
            (border::WIDTH_LG, colors.selection)
        } else if hovered {
            (border::WIDTH_SM, colors.selection)
        } else {
            (0.0, Color::TRANSPARENT)
        };

        button::Style {
            background: Some(Background::Color(colors.surface_secondary)),
            text_color: colors.text_primary,
            border: Border {
                color,
                width,
                radius: radius::SM.into(),
            },
            shadow: if selected { shadow::MD } else { iced::Shadow::default() },
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_template_is_outlined() {
        let style = template(ColorScheme::light(), true)(&Theme::Light, button::Status::Active);
        assert_eq!(style.border.width, border::WIDTH_LG);

        let idle = template(ColorScheme::light(), false)(&Theme::Light, button::Status::Active);
        assert_eq!(idle.border.width, 0.0);
    }
}
