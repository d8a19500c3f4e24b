//! Formatting and display logic
//!
//! Pure functions for the fest date badge and the countdown clock.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};

/// Upper-case English ordinal suffix for a day number
///
/// # Examples
/// ```
/// use festui::logic::formatting::ordinal_suffix;
///
/// assert_eq!(ordinal_suffix(1), "ST");
/// assert_eq!(ordinal_suffix(2), "ND");
/// assert_eq!(ordinal_suffix(3), "RD");
/// assert_eq!(ordinal_suffix(11), "TH");
/// assert_eq!(ordinal_suffix(22), "ND");
/// ```
pub fn ordinal_suffix(n: u32) -> &'static str {
    let v = n % 100;
    if (11..=13).contains(&v) {
        return "TH";
    }
    match v % 10 {
        1 => "ST",
        2 => "ND",
        3 => "RD",
        _ => "TH",
    }
}

/// Parse a fest date (`2026-04-08`, or a datetime whose date part is used)
pub fn parse_fest_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_countdown_target(text).map(|dt| dt.date()))
}

/// Data for the "2026 April / 8TH 9TH" badge next to the clock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FestDateBadge {
    pub year: String,
    pub month: String,
    pub start_day: u32,
    pub end_day: u32,
}

impl FestDateBadge {
    pub fn days_line(&self) -> String {
        format!(
            "{}{} {}{}",
            self.start_day,
            ordinal_suffix(self.start_day),
            self.end_day,
            ordinal_suffix(self.end_day)
        )
    }
}

/// Build the date badge; the month is taken from the start date
pub fn fest_date_badge(year: &str, start: &str, end: &str) -> Option<FestDateBadge> {
    let start = parse_fest_date(start)?;
    let end = parse_fest_date(end)?;
    Some(FestDateBadge {
        year: year.to_string(),
        month: start.format("%B").to_string(),
        start_day: start.day(),
        end_day: end.day(),
    })
}

/// Parse the countdown target as local time
///
/// Accepts `2026-04-08T00:00:00`, `2026-04-08T00:00`, RFC 3339 with an
/// offset, or a bare date (midnight).
pub fn parse_countdown_target(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Time left until the fest starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Remaining {
        days: i64,
        hours: u32,
        minutes: u32,
        seconds: u32,
    },
    Finished,
}

pub fn countdown_at(target: NaiveDateTime, now: NaiveDateTime) -> Countdown {
    let total = (target - now).num_seconds();
    if total <= 0 {
        return Countdown::Finished;
    }

    Countdown::Remaining {
        days: total / 86_400,
        hours: ((total % 86_400) / 3600) as u32,
        minutes: ((total % 3600) / 60) as u32,
        seconds: (total % 60) as u32,
    }
}

/// Clock face text: `DD:HH:MM:SS`, all zeros once the target has passed
///
/// # Examples
/// ```
/// use festui::logic::formatting::{format_countdown, Countdown};
///
/// let c = Countdown::Remaining { days: 3, hours: 4, minutes: 5, seconds: 6 };
/// assert_eq!(format_countdown(&c), "03:04:05:06");
/// assert_eq!(format_countdown(&Countdown::Finished), "00:00:00:00");
/// ```
pub fn format_countdown(countdown: &Countdown) -> String {
    match countdown {
        Countdown::Remaining {
            days,
            hours,
            minutes,
            seconds,
        } => format!("{:02}:{:02}:{:02}:{:02}", days, hours, minutes, seconds),
        Countdown::Finished => "00:00:00:00".to_string(),
    }
}

/// Countdown text for the header bar, relative to the local clock
pub fn countdown_text(target: &str, now: NaiveDateTime) -> String {
    match parse_countdown_target(target) {
        Some(target) => format_countdown(&countdown_at(target, now)),
        None => "--:--:--:--".to_string(),
    }
}

/// Truncate `text` to `max_width` terminal columns, adding an ellipsis
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
