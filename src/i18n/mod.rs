// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, string formatting
//! and locale-aware timestamp rendering.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Translation files embedded at build time
//! - Fallback to default locale when translations are missing
//! - Date/time patterns supplied by each translation file

pub mod datetime;
pub mod fluent;
