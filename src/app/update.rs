// SPDX-License-Identifier: MPL-2.0
//! Message routing between the gate and the gallery.

use super::{Message, Screen};
use crate::api::ApiClient;
use crate::config::PanelConfig;
use crate::ui::{gallery, gate};
use iced::Task;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub gate: &'a mut gate::State,
    pub gallery: &'a mut gallery::State,
    pub config: &'a PanelConfig,
    pub client: &'a ApiClient,
}

fn gallery_context<'a>(client: &'a ApiClient, config: &PanelConfig) -> gallery::UpdateContext<'a> {
    gallery::UpdateContext {
        client,
        status_timeout: config.status_timeout(),
    }
}

pub fn handle_gate_message(ctx: &mut UpdateContext<'_>, message: gate::Message) -> Task<Message> {
    match ctx.gate.handle_message(message, ctx.config.access_secret()) {
        gate::Event::None => Task::none(),
        gate::Event::Authenticated => {
            *ctx.screen = Screen::Gallery;
            let gallery_ctx = gallery_context(ctx.client, ctx.config);
            ctx.gallery.activate(&gallery_ctx).map(Message::Gallery)
        }
    }
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    if *ctx.screen != Screen::Gallery {
        tracing::debug!(?message, "gallery message before authentication dropped");
        return Task::none();
    }

    let gallery_ctx = gallery_context(ctx.client, ctx.config);
    ctx.gallery
        .handle_message(message, &gallery_ctx)
        .map(Message::Gallery)
}
