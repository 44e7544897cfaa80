// SPDX-License-Identifier: MPL-2.0
//! Title and swipe hint. The hint follows the share direction.

use crate::collage::Orientation;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

/// Arrow pointing in the share direction.
#[must_use]
pub fn arrow(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Portrait => "\u{2191}",
        Orientation::Landscape => "\u{2190}",
    }
}

#[must_use]
pub fn hint_key(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Portrait => "header-swipe-up",
        Orientation::Landscape => "header-swipe-left",
    }
}

pub fn view<'a, Message: 'a>(i18n: &I18n, orientation: Orientation) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("app-title")).size(typography::TITLE_MD))
        .push(Text::new(arrow(orientation)).size(typography::TITLE_MD))
        .push(Text::new(i18n.tr(hint_key(orientation))).size(typography::BODY));

    let container = Container::new(content)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    match orientation {
        Orientation::Portrait => container
            .width(Length::Fill)
            .height(Length::Fixed(sizing::HEADER_HEIGHT)),
        Orientation::Landscape => container
            .width(Length::Fixed(sizing::HEADER_WIDTH))
            .height(Length::Fill),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_follows_orientation() {
        assert_eq!(hint_key(Orientation::Portrait), "header-swipe-up");
        assert_eq!(hint_key(Orientation::Landscape), "header-swipe-left");
        assert_ne!(arrow(Orientation::Portrait), arrow(Orientation::Landscape));
    }
}
