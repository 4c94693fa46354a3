// SPDX-License-Identifier: MPL-2.0
//! Async HTTP client for the camera API.

use super::{
    ErrorBody, ImageList, MotionImage, TriggerStatus, UploadReceipt, API_KEY_HEADER,
    CHECK_TRIGGER_PATH, IMAGES_PATH, TRIGGER_CAPTURE_PATH, UPLOAD_PATH,
};
use crate::config::PanelConfig;
use crate::error::ApiError;

/// Cheap to clone: the inner `reqwest::Client` is reference counted, so each
/// Iced task gets its own handle.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl ApiClient {
    pub fn new(config: &PanelConfig) -> Self {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("CamLens/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout())
            .build()
            .unwrap_or_else(|err| {
                tracing::warn!("falling back to default HTTP client: {err}");
                reqwest::Client::new()
            });

        if config.api_key().is_none() {
            tracing::warn!("no API key configured; requests will be rejected by the service");
        }

        Self {
            http,
            base_url: config.api_base_url().to_string(),
            api_key: config.api_key().map(str::to_string),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_key(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.header(API_KEY_HEADER, key),
            None => request,
        }
    }

    /// `GET /api/images`. Entries come back in server order.
    pub async fn fetch_images(&self) -> Result<Vec<MotionImage>, ApiError> {
        let url = self.endpoint(IMAGES_PATH);
        tracing::debug!(%url, "fetching image list");

        let response = self.with_key(self.http.get(&url)).send().await?;
        let response = ensure_success(response).await?;
        let body = response.bytes().await?;
        let list: ImageList = serde_json::from_slice(&body)?;

        tracing::debug!(count = list.images.len(), "image list received");
        Ok(list.images)
    }

    /// `POST /api/trigger-capture` with an empty body. The response body is ignored.
    pub async fn trigger_capture(&self) -> Result<(), ApiError> {
        let url = self.endpoint(TRIGGER_CAPTURE_PATH);
        tracing::debug!(%url, "requesting capture");

        let response = self.with_key(self.http.post(&url)).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    /// `GET /api/check-trigger`. The service resets the flag when it reports `true`.
    pub async fn check_trigger(&self) -> Result<bool, ApiError> {
        let url = self.endpoint(CHECK_TRIGGER_PATH);
        let response = self.with_key(self.http.get(&url)).send().await?;
        let response = ensure_success(response).await?;
        let body = response.bytes().await?;
        let status: TriggerStatus = serde_json::from_slice(&body)?;
        Ok(status.trigger)
    }

    /// `POST /api/upload` with raw JPEG bytes as the body.
    pub async fn upload_image(&self, bytes: Vec<u8>) -> Result<UploadReceipt, ApiError> {
        if bytes.is_empty() {
            return Err(ApiError::InvalidRequest("no image data".to_string()));
        }

        let url = self.endpoint(UPLOAD_PATH);
        tracing::debug!(%url, size = bytes.len(), "uploading image");

        let response = self
            .with_key(self.http.post(&url))
            .header(reqwest::header::CONTENT_TYPE, "image/jpeg")
            .body(bytes)
            .send()
            .await?;
        let response = ensure_success(response).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Downloads an image body. Blob URLs are public, so no key is sent.
    pub async fn download(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.http.get(url).send().await?;
        let response = ensure_success(response).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

/// Turns non-2xx responses into an [`ApiError`], pulling the service's error
/// text out of the body when there is one.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = response
        .bytes()
        .await
        .ok()
        .and_then(|body| serde_json::from_slice::<ErrorBody>(&body).ok())
        .and_then(ErrorBody::into_detail);

    Err(ApiError::from_status(status.as_u16(), detail))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_base_and_path() {
        let config = PanelConfig::default().with_api("http://cam.local:8000/", None);
        let client = ApiClient::new(&config);
        assert_eq!(client.base_url(), "http://cam.local:8000");
        assert_eq!(
            client.endpoint(IMAGES_PATH),
            "http://cam.local:8000/api/images"
        );
        assert_eq!(
            client.endpoint(TRIGGER_CAPTURE_PATH),
            "http://cam.local:8000/api/trigger-capture"
        );
    }

    #[tokio::test]
    async fn empty_upload_is_refused_locally() {
        let config = PanelConfig::default().with_api("http://127.0.0.1:9", Some("k".into()));
        let client = ApiClient::new(&config);
        let result = client.upload_image(Vec::new()).await;
        assert!(matches!(result, Err(ApiError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn unreachable_service_is_a_transport_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let config = PanelConfig::default()
            .with_api(format!("http://127.0.0.1:{port}"), Some("k".into()));
        let client = ApiClient::new(&config);
        let result = client.fetch_images().await;
        assert!(matches!(result, Err(ApiError::Transport(_))));
    }
}
