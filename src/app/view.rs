// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::i18n::datetime::TimestampFormatter;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::gallery::{self, ViewContext as GalleryViewContext};
use crate::ui::gate::{self, ViewContext as GateViewContext};
use crate::ui::styles;
use iced::{
    widget::{Column, Container, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub formatter: &'a TimestampFormatter,
    pub screen: Screen,
    pub gate: &'a gate::State,
    pub gallery: &'a gallery::State,
    pub grid_columns: usize,
    /// i18n key of a start-up warning (e.g. unreadable settings file).
    pub warning: Option<&'a str>,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Gate => ctx
            .gate
            .view(GateViewContext { i18n: ctx.i18n })
            .map(Message::Gate),
        Screen::Gallery => ctx
            .gallery
            .view(GalleryViewContext {
                i18n: ctx.i18n,
                formatter: ctx.formatter,
                columns: ctx.grid_columns,
            })
            .map(Message::Gallery),
    };

    let mut column = Column::new();
    if let Some(key) = ctx.warning {
        column = column.push(
            Container::new(
                Text::new(ctx.i18n.tr(key))
                    .size(typography::CAPTION)
                    .color(palette::ERROR_500),
            )
            .padding([spacing::XXS, spacing::MD])
            .width(Length::Fill)
            .style(styles::container::banner(palette::ERROR_500)),
        );
    }

    column = column.push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
