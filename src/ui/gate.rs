// SPDX-License-Identifier: MPL-2.0
//! Password gate shown before the gallery.
//!
//! The entered text is compared to the configured access secret and nothing
//! else: no network call, no lockout, no logout. A secret that was never
//! configured behaves exactly like a wrong password.

use crate::config::AccessSecret;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, text_input, Column, Container, Text},
    Element, Length,
};

const INCORRECT_PASSWORD_KEY: &str = "gate-error-incorrect";

/// Contextual data needed to render the gate.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the gate form.
#[derive(Debug, Clone)]
pub enum Message {
    PasswordChanged(String),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Authenticated,
}

#[derive(Debug, Default)]
pub struct State {
    password: String,
    authenticated: bool,
    /// Translation key of the error to show under the input.
    error: Option<&'static str>,
}

impl State {
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn error_key(&self) -> Option<&'static str> {
        self.error
    }

    pub fn handle_message(&mut self, message: Message, secret: &AccessSecret) -> Event {
        match message {
            Message::PasswordChanged(value) => {
                self.password = value;
                Event::None
            }
            Message::Submit => self.submit(secret),
        }
    }

    fn submit(&mut self, secret: &AccessSecret) -> Event {
        if self.authenticated {
            return Event::None;
        }

        if secret.matches(&self.password) {
            tracing::info!("access granted");
            self.authenticated = true;
            self.error = None;
            self.password.clear();
            Event::Authenticated
        } else {
            tracing::debug!("access denied");
            self.error = Some(INCORRECT_PASSWORD_KEY);
            Event::None
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let title = Text::new(i18n.tr("gate-title")).size(typography::TITLE_LG);
        let subtitle = Text::new(i18n.tr("gate-subtitle"))
            .size(typography::BODY)
            .color(palette::GRAY_400);

        let input = text_input(&i18n.tr("gate-password-placeholder"), &self.password)
            .secure(true)
            .on_input(Message::PasswordChanged)
            .on_submit(Message::Submit)
            .padding(spacing::XS)
            .size(typography::BODY)
            .width(Length::Fill);

        let submit = button(
            Text::new(i18n.tr("gate-submit"))
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::primary)
        .on_press(Message::Submit);

        let mut form = Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(title)
            .push(subtitle)
            .push(input);

        if let Some(key) = self.error {
            form = form.push(
                Text::new(i18n.tr(key))
                    .size(typography::CAPTION)
                    .color(palette::ERROR_500),
            );
        }

        let card = Container::new(form.push(submit))
            .padding(spacing::LG)
            .width(Length::Fixed(sizing::GATE_WIDTH))
            .style(styles::container::panel);

        Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(state: &mut State, secret: &AccessSecret, input: &str) -> Event {
        state.handle_message(Message::PasswordChanged(input.to_string()), secret);
        state.handle_message(Message::Submit, secret)
    }

    #[test]
    fn matching_password_authenticates_and_clears_input() {
        let secret = AccessSecret::new(Some("orchid42".into()));
        let mut state = State::default();

        assert_eq!(submit(&mut state, &secret, "orchid42"), Event::Authenticated);
        assert!(state.is_authenticated());
        assert!(state.error_key().is_none());
        assert!(state.password().is_empty());
    }

    #[test]
    fn wrong_password_sets_error_and_stays_locked() {
        let secret = AccessSecret::new(Some("orchid42".into()));
        let mut state = State::default();

        for attempt in ["", "orchid", "orchid42 ", "ORCHID42", "orchid421"] {
            assert_eq!(submit(&mut state, &secret, attempt), Event::None);
            assert!(!state.is_authenticated(), "{attempt:?} must not unlock");
            assert_eq!(state.error_key(), Some(INCORRECT_PASSWORD_KEY));
        }
    }

    #[test]
    fn retry_after_failure_clears_error() {
        let secret = AccessSecret::new(Some("orchid42".into()));
        let mut state = State::default();

        submit(&mut state, &secret, "nope");
        assert!(state.error_key().is_some());

        submit(&mut state, &secret, "orchid42");
        assert!(state.is_authenticated());
        assert!(state.error_key().is_none());
    }

    #[test]
    fn unconfigured_secret_rejects_everything() {
        let secret = AccessSecret::new(None);
        let mut state = State::default();

        assert_eq!(submit(&mut state, &secret, ""), Event::None);
        assert!(!state.is_authenticated());
        assert!(state.error_key().is_some());
    }

    #[test]
    fn typing_does_not_touch_error() {
        let secret = AccessSecret::new(Some("orchid42".into()));
        let mut state = State::default();

        submit(&mut state, &secret, "bad");
        state.handle_message(Message::PasswordChanged("orc".into()), &secret);
        assert_eq!(state.error_key(), Some(INCORRECT_PASSWORD_KEY));
        assert_eq!(state.password(), "orc");
    }

    #[test]
    fn error_text_is_translated() {
        let i18n = I18n::default();
        let text = i18n.tr(INCORRECT_PASSWORD_KEY);
        assert!(!text.is_empty());
        assert!(!text.starts_with("MISSING:"));
    }
}
