// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gate and the gallery.
//!
//! The `App` struct wires together localization, the resolved panel
//! configuration, the HTTP client and the two screens, and routes messages
//! between them. Configuration is resolved once here and never mutated.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::api::ApiClient;
use crate::config::{self, PanelConfig};
use crate::i18n::datetime::TimestampFormatter;
use crate::i18n::fluent::I18n;
use crate::ui::{gallery, gate};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    formatter: TimestampFormatter,
    config: Arc<PanelConfig>,
    client: ApiClient,
    screen: Screen,
    gate: gate::State,
    gallery: gallery::State,
    theme: Theme,
    /// i18n key of a warning raised while starting up.
    startup_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("config", &self.config)
            .field("images", &self.gallery.images().len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 520;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings, resolves the panel configuration and builds the
    /// starting state. The gallery is not fetched until the gate opens.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);

        let (file_config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &file_config);
        let panel = PanelConfig::resolve(&file_config, flags.api_url);

        let mut app = Self::with_config(i18n, panel);
        app.theme = file_config.general.theme_mode.to_iced_theme();
        if let Some(key) = config_warning {
            tracing::warn!("{}", app.i18n.tr(&key));
            app.startup_warning = Some(key);
        }

        (app, Task::none())
    }

    /// Builds the state around an already resolved configuration.
    pub fn with_config(i18n: I18n, config: PanelConfig) -> Self {
        if !config.access_secret().is_configured() {
            tracing::warn!("{}", i18n.tr("warning-access-secret-unset"));
        }
        tracing::info!(api = config.api_base_url(), "panel configured");

        let formatter = TimestampFormatter::from_i18n(&i18n);
        let client = ApiClient::new(&config);

        Self {
            i18n,
            formatter,
            config: Arc::new(config),
            client,
            screen: Screen::default(),
            gate: gate::State::default(),
            gallery: gallery::State::default(),
            theme: Theme::Dark,
            startup_warning: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn gallery(&self) -> &gallery::State {
        &self.gallery
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.screen {
            Screen::Gate => app_name,
            Screen::Gallery => format!("{} - {app_name}", self.i18n.tr("gallery-title")),
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.screen == Screen::Gallery && self.gallery.is_animating(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            gate: &mut self.gate,
            gallery: &mut self.gallery,
            config: &self.config,
            client: &self.client,
        };

        match message {
            Message::Gate(gate_message) => update::handle_gate_message(&mut ctx, gate_message),
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Tick(_instant) => {
                update::handle_gallery_message(&mut ctx, gallery::Message::Tick)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            formatter: &self.formatter,
            screen: self.screen,
            gate: &self.gate,
            gallery: &self.gallery,
            grid_columns: self.config.grid_columns(),
            warning: self.startup_warning.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MotionImage;

    fn app_with_secret(secret: &str) -> App {
        App::with_config(
            I18n::default(),
            PanelConfig::default().with_access_secret(secret),
        )
    }

    fn type_and_submit(app: &mut App, password: &str) {
        let _ = app.update(Message::Gate(gate::Message::PasswordChanged(
            password.to_string(),
        )));
        let _ = app.update(Message::Gate(gate::Message::Submit));
    }

    #[test]
    fn starts_on_gate() {
        let app = app_with_secret("orchid42");
        assert_eq!(app.screen(), Screen::Gate);
        assert_eq!(app.title(), "CamLens");
    }

    #[test]
    fn correct_password_opens_gallery_and_fetches() {
        let mut app = app_with_secret("orchid42");
        type_and_submit(&mut app, "orchid42");

        assert_eq!(app.screen(), Screen::Gallery);
        assert!(app.gallery().is_loading());
        assert!(app.title().contains("CamLens"));
    }

    #[test]
    fn wrong_password_keeps_gate() {
        let mut app = app_with_secret("orchid42");
        type_and_submit(&mut app, "orchid43");

        assert_eq!(app.screen(), Screen::Gate);
        assert!(!app.gallery().is_loading());
    }

    #[test]
    fn gallery_messages_are_ignored_before_unlock() {
        let mut app = app_with_secret("orchid42");
        let _ = app.update(Message::Gallery(gallery::Message::ImagesLoaded {
            generation: 0,
            result: Ok(vec![MotionImage {
                url: "https://x/a.jpg".into(),
                timestamp: "2024-01-02T10:00:00Z".into(),
            }]),
        }));
        assert!(app.gallery().images().is_empty());
    }

    #[test]
    fn tick_is_forwarded_to_gallery() {
        let mut app = app_with_secret("orchid42");
        type_and_submit(&mut app, "orchid42");

        let before = app.gallery().spinner_rotation();
        let _ = app.update(Message::Tick(std::time::Instant::now()));
        assert_ne!(app.gallery().spinner_rotation(), before);
    }

    #[test]
    fn view_renders_both_screens() {
        let mut app = app_with_secret("orchid42");
        let _ = app.view();
        type_and_submit(&mut app, "orchid42");
        let _ = app.view();
    }
}
