// SPDX-License-Identifier: MPL-2.0
//! Client side of the camera's image-storage and capture API.
//!
//! The service is external: this module only knows the wire shapes and the
//! four endpoints. All calls carry the static key in the `x-api-key` header.
//!
//! - [`client`] - async `reqwest` client used by the gallery
//! - [`device`] - headless helpers for the device-side endpoints

pub mod client;
pub mod device;

pub use client::ApiClient;

use serde::{Deserialize, Serialize};

/// Header carrying the static API key.
pub const API_KEY_HEADER: &str = "x-api-key";

pub const IMAGES_PATH: &str = "/api/images";
pub const TRIGGER_CAPTURE_PATH: &str = "/api/trigger-capture";
pub const CHECK_TRIGGER_PATH: &str = "/api/check-trigger";
pub const UPLOAD_PATH: &str = "/api/upload";

/// A captured photo and the instant it was taken.
///
/// `url` is opaque and unique within a listing; `timestamp` is ISO-8601.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotionImage {
    pub url: String,
    pub timestamp: String,
}

/// Body of `GET /api/images`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageList {
    #[serde(default)]
    pub images: Vec<MotionImage>,
}

/// Body of `GET /api/check-trigger`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TriggerStatus {
    #[serde(default)]
    pub trigger: bool,
}

/// Body of a successful `POST /api/upload`.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadReceipt {
    pub url: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body shapes the service uses (`{"error": ..}` or `{"detail": ..}`).
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorBody {
    pub(crate) fn into_detail(self) -> Option<String> {
        self.error.or(self.detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_list_keeps_server_order() {
        let body = r#"{"images":[
            {"url":"https://x/b.jpg","timestamp":"2024-01-02T11:00:00Z"},
            {"url":"https://x/a.jpg","timestamp":"2024-01-02T10:00:00Z"}
        ]}"#;
        let list: ImageList = serde_json::from_str(body).unwrap();
        let urls: Vec<&str> = list.images.iter().map(|i| i.url.as_str()).collect();
        assert_eq!(urls, ["https://x/b.jpg", "https://x/a.jpg"]);
    }

    #[test]
    fn missing_images_field_is_empty_list() {
        let list: ImageList = serde_json::from_str(r#"{"something":"else"}"#).unwrap();
        assert!(list.images.is_empty());
    }

    #[test]
    fn entry_without_timestamp_is_rejected() {
        let result = serde_json::from_str::<ImageList>(r#"{"images":[{"url":"u"}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn error_body_prefers_error_over_detail() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error":"db down","detail":"ignored"}"#).unwrap();
        assert_eq!(body.into_detail().as_deref(), Some("db down"));

        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":"Could not validate credentials"}"#).unwrap();
        assert_eq!(
            body.into_detail().as_deref(),
            Some("Could not validate credentials")
        );
    }

    #[test]
    fn trigger_status_decodes() {
        let status: TriggerStatus = serde_json::from_str(r#"{"trigger":true}"#).unwrap();
        assert!(status.trigger);
    }
}
