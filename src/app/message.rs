// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{gallery, gate};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gate(gate::Message),
    Gallery(gallery::Message),
    Tick(Instant), // Spinner animation while the gallery is loading
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CAM_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional API base URL; beats the environment and settings.toml.
    pub api_url: Option<String>,
}
