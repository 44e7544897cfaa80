// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The grid canvas spans the whole window so it can slide off screen; the
//! header and template bar are laid over it around the resting frame.

use super::Message;
use crate::collage::{GridStyle, Orientation};
use crate::i18n::I18n;
use crate::session::Session;
use crate::ui::grid::GridCanvas;
use crate::ui::header;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::source_chooser;
use crate::ui::styles;
use crate::ui::template_bar::{self, ViewContext as TemplateBarViewContext};
use crate::ui::theming::ColorScheme;
use iced::widget::{canvas, Column, Container, Row, Space, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub session: &'a Session,
    pub style: GridStyle,
    pub notifications: &'a Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let grid = canvas::Canvas::new(GridCanvas {
        layout: ctx.session.layout(),
        frame: ctx.session.frame(),
        translation: ctx.session.translation(),
        style: ctx.style,
        on_press: Message::GridPressed,
    })
    .width(Length::Fill)
    .height(Length::Fill);

    let screen = Container::new(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen(ctx.colors.clone()));

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(screen)
        .push(grid)
        .push(chrome(&ctx));

    if ctx.session.chooser().is_some() {
        stack = stack.push(source_chooser::view(ctx.i18n, ctx.colors).map(Message::Chooser));
    }

    stack
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}

/// Header and template bar on either side of the grid. The middle is left
/// empty so presses reach the canvas underneath.
fn chrome<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let orientation = ctx.session.orientation();
    let header = header::view(ctx.i18n, orientation);
    let bar = template_bar::view(TemplateBarViewContext {
        i18n: ctx.i18n,
        colors: ctx.colors,
        selected: ctx.session.layout().template(),
        orientation,
    })
    .map(Message::TemplateBar);

    match orientation {
        Orientation::Portrait => Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(header)
            .push(Space::new().width(Length::Fill).height(Length::Fill))
            .push(bar)
            .into(),
        Orientation::Landscape => Row::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(header)
            .push(Space::new().width(Length::Fill).height(Length::Fill))
            .push(bar)
            .into(),
    }
}
