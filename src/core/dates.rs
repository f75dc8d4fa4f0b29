//! Date extractor
//!
//! Finds the first recognisable timestamp in a block. Patterns are tried in
//! a fixed priority order; within a pattern only the leftmost occurrence is
//! considered. A malformed occurrence is a soft failure: the next pattern is
//! tried and, failing that, the block is simply undated.

use crate::core::traits::DatePattern;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;

re!(
    re_full_textual,
    r"(?i)\b(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday),\s*(?P<month>january|february|march|april|may|june|july|august|september|october|november|december)\s+(?P<day>[0-9]{1,2}),\s*(?P<year>[0-9]{4})\s*(?:·\s*)?(?P<hour>[0-9]{1,2}):(?P<minute>[0-9]{2})\s*(?P<meridiem>am|pm)\b"
);
re!(
    re_short_numeric,
    r"(?i)\btar:\s*(?P<day>[0-9]{1,2})/(?P<month>[0-9]{1,2})/(?P<year>[0-9]{2})\s+(?P<hour>[0-9]{1,2}):(?P<minute>[0-9]{2}):(?P<second>[0-9]{2})\b"
);

/// "Tuesday, October 17, 2023 · 11:17 AM"
///
/// The weekday is matched but never checked against the computed date.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullTextualDate;

impl DatePattern for FullTextualDate {
    fn name(&self) -> &'static str {
        "full_textual"
    }

    fn extract(&self, text: &str) -> Option<NaiveDateTime> {
        let c = re_full_textual().captures(text)?;
        let month = month_name_to_num(c.name("month")?.as_str())?;
        let day: u32 = c.name("day")?.as_str().parse().ok()?;
        let year: i32 = c.name("year")?.as_str().parse().ok()?;
        let hour12: u32 = c.name("hour")?.as_str().parse().ok()?;
        let minute: u32 = c.name("minute")?.as_str().parse().ok()?;
        let pm = c.name("meridiem")?.as_str().eq_ignore_ascii_case("pm");

        let hour = to_24_hour(hour12, pm)?;
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
        Some(date.and_time(time))
    }
}

/// "Tar: 17/10/23 13:35:59" (day/month/two-digit year, 24-hour clock)
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortNumericDate;

impl DatePattern for ShortNumericDate {
    fn name(&self) -> &'static str {
        "short_numeric"
    }

    fn extract(&self, text: &str) -> Option<NaiveDateTime> {
        let c = re_short_numeric().captures(text)?;
        let day: u32 = c.name("day")?.as_str().parse().ok()?;
        let month: u32 = c.name("month")?.as_str().parse().ok()?;
        let yy: i32 = c.name("year")?.as_str().parse().ok()?;
        let hour: u32 = c.name("hour")?.as_str().parse().ok()?;
        let minute: u32 = c.name("minute")?.as_str().parse().ok()?;
        let second: u32 = c.name("second")?.as_str().parse().ok()?;

        let date = NaiveDate::from_ymd_opt(2000 + yy, month, day)?;
        let time = NaiveTime::from_hms_opt(hour, minute, second)?;
        Some(date.and_time(time))
    }
}

/// Ordered list of date patterns; the first pattern that parses wins
pub struct DateExtractor {
    patterns: Vec<Box<dyn DatePattern>>,
}

impl DateExtractor {
    /// Extractor with the full textual format first, then the short numeric one
    pub fn standard() -> Self {
        Self::with_patterns(vec![
            Box::new(FullTextualDate),
            Box::new(ShortNumericDate),
        ])
    }

    pub fn with_patterns(patterns: Vec<Box<dyn DatePattern>>) -> Self {
        Self { patterns }
    }

    /// First valid timestamp in `text`, or `None` if the block is undated
    pub fn extract(&self, text: &str) -> Option<NaiveDateTime> {
        self.patterns.iter().find_map(|pattern| {
            let found = pattern.extract(text);
            if found.is_none() {
                tracing::trace!(pattern = pattern.name(), "date pattern did not apply");
            }
            found
        })
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for DateExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<_> = self.patterns.iter().map(|p| p.name()).collect();
        f.debug_struct("DateExtractor")
            .field("patterns", &names)
            .finish()
    }
}

fn to_24_hour(hour12: u32, pm: bool) -> Option<u32> {
    match (hour12, pm) {
        (1..=11, false) => Some(hour12),
        (12, false) => Some(0),
        (12, true) => Some(12),
        (1..=11, true) => Some(hour12 + 12),
        _ => None,
    }
}

fn month_name_to_num(s: &str) -> Option<u32> {
    match s.to_lowercase().as_str() {
        "january" => Some(1),
        "february" => Some(2),
        "march" => Some(3),
        "april" => Some(4),
        "may" => Some(5),
        "june" => Some(6),
        "july" => Some(7),
        "august" => Some(8),
        "september" => Some(9),
        "october" => Some(10),
        "november" => Some(11),
        "december" => Some(12),
        _ => None,
    }
}
