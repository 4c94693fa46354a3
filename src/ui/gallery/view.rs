// SPDX-License-Identifier: MPL-2.0
//! Gallery rendering: toolbar, status banner and the three body phases.

use super::component::{Message, Phase, State, Tile};
use super::empty_state;
use super::thumbnail::Thumbnail;
use crate::i18n::datetime::TimestampFormatter;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, image, scrollable, Column, Container, Row, Space, Text},
    ContentFit, Element, Length,
};

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub formatter: &'a TimestampFormatter,
    pub columns: usize,
}

impl State {
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let mut page = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(self.toolbar(ctx.i18n));

        if let Some(status) = self.status() {
            let text = Text::new(ctx.i18n.tr(status.key())).size(typography::BODY);
            let banner = Container::new(text)
                .padding([spacing::XS, spacing::MD])
                .width(Length::Fill)
                .style(styles::container::banner(status.severity().color()));
            page = page.push(banner);
        }

        let body = match self.phase() {
            Phase::Loading => self.loading_view(ctx.i18n),
            Phase::Empty => empty_state::view(ctx.i18n, self.can_take_picture()),
            Phase::Populated => grid(
                ctx.i18n,
                self.tiles(ctx.formatter),
                ctx.columns,
                self.spinner_rotation(),
            ),
        };

        page.push(body).into()
    }

    fn toolbar<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let title = Text::new(i18n.tr("gallery-title")).size(typography::TITLE_MD);

        let count = i18n.tr_with_args(
            "gallery-image-count",
            &[("count", &self.images().len().to_string())],
        );
        let count = Text::new(count)
            .size(typography::CAPTION)
            .color(palette::GRAY_400);

        let refresh_label = if self.is_loading() {
            i18n.tr("gallery-refreshing")
        } else {
            i18n.tr("gallery-refresh")
        };
        let mut refresh = button(Text::new(refresh_label))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .style(styles::button::secondary);
        if self.can_refresh() {
            refresh = refresh.on_press(Message::Refresh);
        }

        let capture_label = if self.is_triggering() {
            i18n.tr("gallery-triggering")
        } else {
            i18n.tr("gallery-take-picture")
        };
        let mut capture = button(Text::new(capture_label))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .style(styles::button::primary);
        if self.can_take_picture() {
            capture = capture.on_press(Message::TakePicture);
        }

        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(title)
            .push(count)
            .push(Space::new().width(Length::Fill))
            .push(refresh)
            .push(capture)
            .into()
    }

    fn loading_view<'a>(&self, i18n: &'a I18n) -> Element<'a, Message> {
        let spinner =
            AnimatedSpinner::new(palette::PRIMARY_500, self.spinner_rotation()).into_element();

        let content = Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(spinner)
            .push(
                Text::new(i18n.tr("gallery-loading"))
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            );

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into()
    }
}

/// Lays tiles out row by row, `columns` per row, keeping server order.
fn grid<'a>(
    i18n: &'a I18n,
    tiles: Vec<Tile<'a>>,
    columns: usize,
    rotation: f32,
) -> Element<'a, Message> {
    let columns = columns.max(1);
    let mut rows = Column::new().spacing(spacing::MD);
    let mut tiles = tiles.into_iter().peekable();

    while tiles.peek().is_some() {
        let mut row = Row::new().spacing(spacing::MD);
        for _ in 0..columns {
            row = match tiles.next() {
                Some(entry) => row.push(tile(i18n, entry, rotation)),
                // Pad the last row so tiles keep the same width.
                None => row.push(Space::new().width(Length::FillPortion(1))),
            };
        }
        rows = rows.push(row);
    }

    scrollable(rows).height(Length::Fill).into()
}

fn tile<'a>(i18n: &'a I18n, entry: Tile<'a>, rotation: f32) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match entry.thumbnail {
        Some(Thumbnail::Ready(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::TILE_IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(Thumbnail::Failed) => placeholder(
            Text::new(i18n.tr("gallery-thumbnail-failed"))
                .size(typography::CAPTION)
                .color(palette::ERROR_500)
                .into(),
        ),
        Some(Thumbnail::Loading) | None => placeholder(
            AnimatedSpinner::new(palette::GRAY_400, rotation)
                .with_size(sizing::ICON_XL / 2.0)
                .into_element(),
        ),
    };

    let caption = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(entry.timestamp.date).size(typography::BODY))
        .push(
            Text::new(entry.timestamp.time)
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    Container::new(Column::new().spacing(spacing::XS).push(picture).push(caption))
        .padding(spacing::XS)
        .width(Length::FillPortion(1))
        .style(styles::container::panel)
        .into()
}

fn placeholder(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TILE_IMAGE_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
