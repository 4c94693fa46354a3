// SPDX-License-Identifier: MPL-2.0
//! Transient status line shown after a capture request settles.

use crate::ui::design_tokens::palette;
use iced::Color;

/// Identifies one status so its scheduled clear cannot wipe a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusId(u64);

impl StatusId {
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for StatusId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    id: StatusId,
    severity: Severity,
    /// i18n key of the text to display.
    key: &'static str,
}

impl StatusMessage {
    pub fn success(key: &'static str) -> Self {
        Self {
            id: StatusId::new(),
            severity: Severity::Success,
            key,
        }
    }

    pub fn error(key: &'static str) -> Self {
        Self {
            id: StatusId::new(),
            severity: Severity::Error,
            key,
        }
    }

    pub fn id(&self) -> StatusId {
        self.id
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn key(&self) -> &'static str {
        self.key
    }
}
