// SPDX-License-Identifier: MPL-2.0
//! `cam_lens` is a desktop control panel for a remote motion camera, built
//! with the Iced GUI framework.
//!
//! A password gate guards a gallery of captured motion images fetched from
//! the camera's HTTP API, with an on-demand capture trigger. The [`api`]
//! module also exposes the device-side endpoints for headless use.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
