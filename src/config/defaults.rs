// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **API**: Endpoint location and request timeout
//! - **Status**: Lifetime of the transient capture status message
//! - **Grid**: Gallery column count

// ==========================================================================
// API Defaults
// ==========================================================================

/// Base URL used when neither the config file, the environment nor the CLI
/// provide one.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default per-request timeout (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Status Message Defaults
// ==========================================================================

/// How long a capture status message stays visible (in seconds).
pub const DEFAULT_STATUS_TIMEOUT_SECS: u32 = 4;

/// Minimum status message lifetime (in seconds).
pub const MIN_STATUS_TIMEOUT_SECS: u32 = 1;

/// Maximum status message lifetime (in seconds).
pub const MAX_STATUS_TIMEOUT_SECS: u32 = 30;

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Default number of tiles per gallery row.
pub const DEFAULT_GRID_COLUMNS: u32 = 3;

/// Minimum number of tiles per gallery row.
pub const MIN_GRID_COLUMNS: u32 = 1;

/// Maximum number of tiles per gallery row.
pub const MAX_GRID_COLUMNS: u32 = 6;

const _: () = {
    assert!(MIN_STATUS_TIMEOUT_SECS <= DEFAULT_STATUS_TIMEOUT_SECS);
    assert!(DEFAULT_STATUS_TIMEOUT_SECS <= MAX_STATUS_TIMEOUT_SECS);
    assert!(MIN_GRID_COLUMNS <= DEFAULT_GRID_COLUMNS);
    assert!(DEFAULT_GRID_COLUMNS <= MAX_GRID_COLUMNS);
    assert!(MIN_REQUEST_TIMEOUT_SECS <= DEFAULT_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);
};
