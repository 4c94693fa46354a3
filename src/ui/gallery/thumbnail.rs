// SPDX-License-Identifier: MPL-2.0
//! Per-URL cache of downloaded tile images.

use iced::widget::image;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub enum Thumbnail {
    Loading,
    Ready(image::Handle),
    Failed,
}

#[derive(Debug, Default)]
pub struct ThumbnailCache {
    entries: HashMap<String, Thumbnail>,
}

impl ThumbnailCache {
    pub fn get(&self, url: &str) -> Option<&Thumbnail> {
        self.entries.get(url)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_pending(&self) -> bool {
        self.entries
            .values()
            .any(|thumb| matches!(thumb, Thumbnail::Loading))
    }

    /// Drops entries whose URL is no longer listed and marks new or failed
    /// URLs as loading. Returns the URLs that need a download.
    pub fn sync<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let listed: HashSet<&str> = urls.into_iter().collect();
        self.entries.retain(|url, _| listed.contains(url.as_str()));

        let mut missing = Vec::new();
        for url in listed {
            let needs_download = match self.entries.get(url) {
                None | Some(Thumbnail::Failed) => true,
                Some(Thumbnail::Loading | Thumbnail::Ready(_)) => false,
            };
            if needs_download {
                self.entries.insert(url.to_string(), Thumbnail::Loading);
                missing.push(url.to_string());
            }
        }
        missing.sort();
        missing
    }

    /// Stores a finished download. Results for URLs that were dropped in the
    /// meantime are discarded; returns whether the result was kept.
    pub fn resolve(&mut self, url: &str, bytes: Option<Vec<u8>>) -> bool {
        let Some(entry) = self.entries.get_mut(url) else {
            return false;
        };
        *entry = match bytes {
            Some(bytes) => Thumbnail::Ready(image::Handle::from_bytes(bytes)),
            None => Thumbnail::Failed,
        };
        true
    }
}
