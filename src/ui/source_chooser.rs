// SPDX-License-Identifier: MPL-2.0
//! Modal sheet asking where the photo for a slot should come from.

use crate::i18n::I18n;
use crate::media::PhotoSource;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, center, mouse_area, opaque, Column, Container, Text};
use iced::{Element, Length, Theme};

/// Messages emitted by the source chooser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The user picked where the photo comes from.
    Choose(PhotoSource),
    /// The chooser was dismissed without a choice.
    Cancel,
}

fn option<'a>(label: String, message: Message, primary: bool) -> Element<'a, Message> {
    let style: fn(&Theme, button::Status) -> button::Style = if primary {
        styles::button::primary
    } else {
        styles::button::secondary
    };

    button(Text::new(label).size(typography::BODY).width(Length::Fill).center())
        .width(Length::Fill)
        .padding(spacing::SM)
        .on_press(message)
        .style(style)
        .into()
}

/// The sheet over a dimmed backdrop. Clicking the backdrop cancels.
pub fn view<'a>(i18n: &I18n, colors: &ColorScheme) -> Element<'a, Message> {
    let sheet = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("chooser-title")).size(typography::TITLE_SM))
        .push(Text::new(i18n.tr("chooser-subtitle")).size(typography::CAPTION))
        .push(option(
            i18n.tr(PhotoSource::Camera.i18n_key()),
            Message::Choose(PhotoSource::Camera),
            true,
        ))
        .push(option(
            i18n.tr(PhotoSource::Library.i18n_key()),
            Message::Choose(PhotoSource::Library),
            true,
        ))
        .push(option(i18n.tr("chooser-cancel"), Message::Cancel, false));

    let card = Container::new(sheet)
        .width(Length::Fixed(sizing::CHOOSER_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::sheet);

    let backdrop = center(opaque(card))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::scrim(colors.clone()));

    opaque(mouse_area(backdrop).on_press(Message::Cancel))
}
