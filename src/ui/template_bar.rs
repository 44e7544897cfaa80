// SPDX-License-Identifier: MPL-2.0
//! Three mutually exclusive template selectors.
//!
//! Each button shows a miniature of its template drawn with the same cell
//! geometry as the real grid.

use crate::collage::{GridGeometry, Orientation, Template};
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::grid::TEMPLATE_BAR_EXTENT;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, canvas, tooltip, Column, Container, Row, Text};
use iced::{alignment, mouse, Color, Element, Length, Rectangle, Renderer, Theme};

/// Contextual data needed to render the bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub selected: Template,
    pub orientation: Orientation,
}

/// Messages emitted by the template bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Select(Template),
}

const THUMBNAIL_SIDE: f32 = sizing::TEMPLATE_BUTTON - 2.0 * spacing::SM;

struct Thumbnail {
    template: Template,
    frame: Color,
    cell: Color,
}

impl<Message> canvas::Program<Message> for Thumbnail {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let side = bounds.width.min(bounds.height);

        frame.fill_rectangle(iced::Point::ORIGIN, iced::Size::new(side, side), self.frame);
        for (_, cell) in GridGeometry::new(side).cells(self.template) {
            frame.fill_rectangle(cell.position(), cell.size(), self.cell);
        }

        vec![frame.into_geometry()]
    }
}

fn selector<'a>(ctx: &ViewContext<'a>, template: Template) -> Element<'a, Message> {
    let thumbnail = canvas::Canvas::new(Thumbnail {
        template,
        frame: ctx.colors.brand_primary,
        cell: ctx.colors.surface_secondary,
    })
    .width(Length::Fixed(THUMBNAIL_SIDE))
    .height(Length::Fixed(THUMBNAIL_SIDE));

    let selected = ctx.selected == template;
    let button = button(
        Container::new(thumbnail)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fixed(sizing::TEMPLATE_BUTTON))
    .height(Length::Fixed(sizing::TEMPLATE_BUTTON))
    .padding(0)
    .on_press(Message::Select(template))
    .style(styles::button::template(ctx.colors.clone(), selected));

    let label = format!("{} ({})", ctx.i18n.tr(template.i18n_key()), template.shortcut());
    let tip = Container::new(Text::new(label).size(typography::CAPTION))
        .padding(spacing::XS)
        .style(styles::container::tip(ctx.colors.clone()));
    tooltip(button, tip, tooltip::Position::Top).into()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let selectors = Template::ALL.map(|template| selector(&ctx, template));

    match ctx.orientation {
        Orientation::Portrait => Container::new(
            Row::with_children(selectors).spacing(spacing::LG),
        )
        .width(Length::Fill)
        .height(Length::Fixed(TEMPLATE_BAR_EXTENT)),
        Orientation::Landscape => Container::new(
            Column::with_children(selectors).spacing(spacing::LG),
        )
        .width(Length::Fixed(TEMPLATE_BAR_EXTENT))
        .height(Length::Fill),
    }
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}
