// SPDX-License-Identifier: MPL-2.0
//! Placeholder shown when the service lists no images, or the list failed.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Renders the empty prompt. The capture button mirrors the toolbar one so
/// the call to action sits next to the explanation.
pub fn view(i18n: &I18n, can_take_picture: bool) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("gallery-empty-title"))
        .size(typography::TITLE_MD)
        .color(palette::GRAY_400);

    let subtitle = Text::new(i18n.tr("gallery-empty-subtitle"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let capture = button(Text::new(i18n.tr("gallery-take-picture")))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press_maybe(can_take_picture.then_some(Message::TakePicture));

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(capture);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
