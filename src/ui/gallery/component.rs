// SPDX-License-Identifier: MPL-2.0
//! Gallery state: image list, capture trigger and the transient status line.

use super::status::{StatusId, StatusMessage};
use super::thumbnail::{Thumbnail, ThumbnailCache};
use crate::api::{ApiClient, MotionImage};
use crate::error::ApiError;
use crate::i18n::datetime::{FormattedTimestamp, TimestampFormatter};
use crate::ui::widgets::animated_spinner;
use iced::task::Handle;
use iced::Task;
use std::time::Duration;

pub const CAPTURE_SENT_KEY: &str = "status-capture-sent";
pub const CAPTURE_FAILED_KEY: &str = "status-capture-failed";

/// What the gallery needs from the application to run requests.
pub struct UpdateContext<'a> {
    pub client: &'a ApiClient,
    pub status_timeout: Duration,
}

#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
    ImagesLoaded {
        generation: u64,
        result: Result<Vec<MotionImage>, ApiError>,
    },
    TakePicture,
    CaptureFinished(Result<(), ApiError>),
    StatusExpired(StatusId),
    ThumbnailLoaded {
        url: String,
        result: Result<Vec<u8>, ApiError>,
    },
    Tick,
}

/// The three mutually exclusive ways the gallery body renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Populated,
    Empty,
}

/// One grid entry, ready to draw.
#[derive(Debug)]
pub struct Tile<'a> {
    pub image: &'a MotionImage,
    pub timestamp: FormattedTimestamp,
    pub thumbnail: Option<&'a Thumbnail>,
}

#[derive(Debug, Default)]
pub struct State {
    images: Vec<MotionImage>,
    is_loading: bool,
    is_triggering: bool,
    fetch_generation: u64,
    status: Option<StatusMessage>,
    status_clear: Option<Handle>,
    thumbnails: ThumbnailCache,
    spinner_rotation: f32,
}

impl State {
    pub fn images(&self) -> &[MotionImage] {
        &self.images
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_triggering(&self) -> bool {
        self.is_triggering
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn thumbnails(&self) -> &ThumbnailCache {
        &self.thumbnails
    }

    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Refresh is only offered while no fetch is in flight.
    pub fn can_refresh(&self) -> bool {
        !self.is_loading
    }

    pub fn can_take_picture(&self) -> bool {
        !self.is_triggering
    }

    /// Whether the tick subscription should run.
    pub fn is_animating(&self) -> bool {
        self.is_loading || self.thumbnails.has_pending()
    }

    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Loading
        } else if self.images.is_empty() {
            Phase::Empty
        } else {
            Phase::Populated
        }
    }

    /// Tiles in server order with timestamps in the local time zone.
    pub fn tiles(&self, formatter: &TimestampFormatter) -> Vec<Tile<'_>> {
        self.images
            .iter()
            .map(|image| Tile {
                image,
                timestamp: formatter.format_local(&image.timestamp),
                thumbnail: self.thumbnails.get(&image.url),
            })
            .collect()
    }

    /// Called once when the gallery becomes the active screen.
    pub fn activate(&mut self, ctx: &UpdateContext<'_>) -> Task<Message> {
        self.start_fetch(ctx.client)
    }

    pub fn handle_message(&mut self, message: Message, ctx: &UpdateContext<'_>) -> Task<Message> {
        match message {
            Message::Refresh => {
                if !self.can_refresh() {
                    tracing::debug!("refresh ignored while a fetch is in flight");
                    return Task::none();
                }
                self.start_fetch(ctx.client)
            }
            Message::ImagesLoaded { generation, result } => {
                self.finish_fetch(generation, result, ctx.client)
            }
            Message::TakePicture => {
                if !self.can_take_picture() {
                    return Task::none();
                }
                self.is_triggering = true;
                let client = ctx.client.clone();
                Task::perform(
                    async move { client.trigger_capture().await },
                    Message::CaptureFinished,
                )
            }
            Message::CaptureFinished(result) => {
                self.is_triggering = false;
                let status = match result {
                    Ok(()) => {
                        tracing::info!("capture request sent");
                        StatusMessage::success(CAPTURE_SENT_KEY)
                    }
                    Err(err) => {
                        tracing::warn!("capture request failed: {err}");
                        StatusMessage::error(CAPTURE_FAILED_KEY)
                    }
                };
                self.show_status(status, ctx.status_timeout)
            }
            Message::StatusExpired(id) => {
                self.expire_status(id);
                Task::none()
            }
            Message::ThumbnailLoaded { url, result } => {
                let bytes = match result {
                    Ok(bytes) => Some(bytes),
                    Err(err) => {
                        tracing::debug!(%url, "thumbnail download failed: {err}");
                        None
                    }
                };
                self.thumbnails.resolve(&url, bytes);
                Task::none()
            }
            Message::Tick => {
                self.spinner_rotation = animated_spinner::advance(self.spinner_rotation);
                Task::none()
            }
        }
    }

    fn start_fetch(&mut self, client: &ApiClient) -> Task<Message> {
        self.fetch_generation = self.fetch_generation.wrapping_add(1);
        self.is_loading = true;

        let generation = self.fetch_generation;
        let client = client.clone();
        Task::perform(async move { client.fetch_images().await }, move |result| {
            Message::ImagesLoaded { generation, result }
        })
    }

    fn finish_fetch(
        &mut self,
        generation: u64,
        result: Result<Vec<MotionImage>, ApiError>,
        client: &ApiClient,
    ) -> Task<Message> {
        if generation != self.fetch_generation {
            tracing::debug!(
                generation,
                latest = self.fetch_generation,
                "discarding stale image list"
            );
            return Task::none();
        }

        self.is_loading = false;
        self.images = match result {
            Ok(images) => images,
            Err(err) => {
                tracing::warn!("failed to fetch images: {err}");
                Vec::new()
            }
        };

        let missing = self
            .thumbnails
            .sync(self.images.iter().map(|image| image.url.as_str()));

        Task::batch(missing.into_iter().map(|url| {
            let client = client.clone();
            let target = url.clone();
            Task::perform(
                async move { client.download(&target).await },
                move |result| Message::ThumbnailLoaded { url, result },
            )
        }))
    }

    /// Replaces the current status and schedules its removal, cancelling the
    /// clear scheduled for the previous one.
    fn show_status(&mut self, status: StatusMessage, timeout: Duration) -> Task<Message> {
        if let Some(previous) = self.status_clear.take() {
            previous.abort();
        }

        let id = status.id();
        self.status = Some(status);

        let (task, handle) =
            Task::perform(status_expiry(timeout, id), Message::StatusExpired).abortable();
        self.status_clear = Some(handle);
        task
    }

    fn expire_status(&mut self, id: StatusId) {
        if self.status.as_ref().is_some_and(|status| status.id() == id) {
            self.status = None;
            self.status_clear = None;
        }
    }
}

/// Resolves to `id` once `timeout` has elapsed.
async fn status_expiry(timeout: Duration, id: StatusId) -> StatusId {
    tokio::time::sleep(timeout).await;
    id
}
