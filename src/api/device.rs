// SPDX-License-Identifier: MPL-2.0
//! Headless helpers speaking the device side of the API.
//!
//! The camera itself polls `check-trigger` and pushes captures to `upload`.
//! These helpers let the same endpoints be exercised from the command line
//! (`--check-trigger`, `--upload <file>`) without the device on the bench.

use super::ApiClient;
use crate::error::{ApiError, Error, Result};
use std::path::Path;

/// Outcome of a headless command, ready to be printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceReport {
    TriggerPending(bool),
    Uploaded { url: String },
}

/// Asks the service whether a manual capture was requested.
pub async fn poll_trigger(client: &ApiClient) -> Result<DeviceReport> {
    let pending = client.check_trigger().await?;
    tracing::info!(pending, "trigger flag polled");
    Ok(DeviceReport::TriggerPending(pending))
}

/// Uploads a JPEG file as if the device had captured it.
pub async fn upload_file(client: &ApiClient, path: &Path) -> Result<DeviceReport> {
    let bytes = tokio::fs::read(path).await.map_err(Error::from)?;
    if bytes.is_empty() {
        return Err(ApiError::InvalidRequest(format!("{} is empty", path.display())).into());
    }

    let receipt = client.upload_image(bytes).await?;
    tracing::info!(url = %receipt.url, "capture uploaded");
    Ok(DeviceReport::Uploaded { url: receipt.url })
}
