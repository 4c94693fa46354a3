// SPDX-License-Identifier: MPL-2.0
//! Locale-aware rendering of capture timestamps.
//!
//! Each translation file carries the `chrono` locale and the strftime patterns
//! for the date and time parts, so adding a language never touches this code.

use super::fluent::I18n;
use chrono::{DateTime, Locale, TimeZone};

const FALLBACK_DATE_PATTERN: &str = "%b %-d, %Y";
const FALLBACK_TIME_PATTERN: &str = "%-I:%M %p";

/// Date and time strings for one timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedTimestamp {
    pub date: String,
    pub time: String,
}

/// Formats ISO-8601 instants with the active locale's patterns.
#[derive(Debug, Clone)]
pub struct TimestampFormatter {
    locale: Locale,
    date_pattern: String,
    time_pattern: String,
}

impl Default for TimestampFormatter {
    fn default() -> Self {
        Self {
            locale: Locale::en_US,
            date_pattern: FALLBACK_DATE_PATTERN.to_string(),
            time_pattern: FALLBACK_TIME_PATTERN.to_string(),
        }
    }
}

impl TimestampFormatter {
    /// Builds a formatter from the translation keys `chrono-locale`,
    /// `timestamp-date-pattern` and `timestamp-time-pattern`.
    pub fn from_i18n(i18n: &I18n) -> Self {
        let fallback = Self::default();
        let lookup = |key: &str| {
            let value = i18n.tr(key);
            (!value.starts_with("MISSING:")).then_some(value)
        };

        let locale = lookup("chrono-locale")
            .and_then(|tag| Locale::try_from(tag.as_str()).ok())
            .unwrap_or(fallback.locale);

        Self {
            locale,
            date_pattern: lookup("timestamp-date-pattern").unwrap_or(fallback.date_pattern),
            time_pattern: lookup("timestamp-time-pattern").unwrap_or(fallback.time_pattern),
        }
    }

    /// Renders `raw` in the given time zone.
    ///
    /// Unparseable input is shown verbatim as the date with an empty time.
    pub fn format_in<Tz>(&self, raw: &str, tz: &Tz) -> FormattedTimestamp
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        match DateTime::parse_from_rfc3339(raw.trim()) {
            Ok(instant) => {
                let local = instant.with_timezone(tz);
                FormattedTimestamp {
                    date: local
                        .format_localized(&self.date_pattern, self.locale)
                        .to_string(),
                    time: local
                        .format_localized(&self.time_pattern, self.locale)
                        .to_string(),
                }
            }
            Err(err) => {
                tracing::debug!("unparseable timestamp {raw:?}: {err}");
                FormattedTimestamp {
                    date: raw.to_string(),
                    time: String::new(),
                }
            }
        }
    }

    /// Renders `raw` in the machine's local time zone.
    pub fn format_local(&self, raw: &str) -> FormattedTimestamp {
        self.format_in(raw, &chrono::Local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use chrono::{FixedOffset, Utc};

    fn formatter(lang: &str) -> TimestampFormatter {
        TimestampFormatter::from_i18n(&I18n::new(Some(lang.into()), &Config::default()))
    }

    #[test]
    fn english_date_and_time() {
        let formatted = formatter("en-US").format_in("2024-01-02T10:00:00Z", &Utc);
        assert_eq!(formatted.date, "Jan 2, 2024");
        assert_eq!(formatted.time, "10:00 AM");
    }

    #[test]
    fn afternoon_uses_pm() {
        let formatted = formatter("en-US").format_in("2024-06-30T21:05:00+00:00", &Utc);
        assert_eq!(formatted.date, "Jun 30, 2024");
        assert_eq!(formatted.time, "9:05 PM");
    }

    #[test]
    fn french_uses_24_hour_clock() {
        let formatted = formatter("fr").format_in("2024-01-02T15:30:00Z", &Utc);
        assert_eq!(formatted.time, "15:30");
        assert!(formatted.date.starts_with("2 "));
        assert!(formatted.date.ends_with("2024"));
    }

    #[test]
    fn fractional_seconds_and_offsets_are_accepted() {
        let formatted =
            formatter("en-US").format_in("2024-01-02T10:00:00.123456+00:00", &Utc);
        assert_eq!(formatted.time, "10:00 AM");
    }

    #[test]
    fn conversion_to_target_zone() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let formatted = formatter("en-US").format_in("2024-01-02T23:30:00Z", &plus_two);
        assert_eq!(formatted.date, "Jan 3, 2024");
        assert_eq!(formatted.time, "1:30 AM");
    }

    #[test]
    fn malformed_timestamp_is_shown_verbatim() {
        let formatted = formatter("en-US").format_in("yesterday-ish", &Utc);
        assert_eq!(formatted.date, "yesterday-ish");
        assert!(formatted.time.is_empty());
    }

    #[test]
    fn default_formatter_matches_english_patterns() {
        let formatted = TimestampFormatter::default().format_in("2024-01-02T10:00:00Z", &Utc);
        assert_eq!(formatted.date, "Jan 2, 2024");
    }
}
