//! Utterance parsing
//!
//! Pure classification and extraction functions for the slot-filling
//! steps. Each function tries its patterns in a fixed priority order and
//! never touches I/O; relative dates take the anchor day as a parameter
//! so tests stay deterministic.

use chrono::{Datelike, Days, NaiveDate};

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Strip an ordinal suffix ("12th" -> "12") when the rest is digits
fn strip_ordinal(token: &str) -> &str {
    for suffix in ["st", "nd", "rd", "th"] {
        if let Some(prefix) = token.strip_suffix(suffix)
            && !prefix.is_empty()
            && prefix.chars().all(|c| c.is_ascii_digit())
        {
            return prefix;
        }
    }
    token
}

/// Parse an absolute spoken date: "12th December 2025", "3 march 2026"
///
/// Expects day, month name, year in that order; commas are ignored.
pub fn parse_spoken_date(text: &str) -> Option<NaiveDate> {
    let clean = text.to_lowercase().replace(',', " ");
    let parts: Vec<&str> = clean.split_whitespace().collect();
    if parts.len() < 3 {
        return None;
    }

    let day: u32 = strip_ordinal(parts[0]).parse().ok()?;
    let month = MONTHS.iter().position(|m| *m == parts[1])? as u32 + 1;
    let year: i32 = parts[2].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Resolve relative date words against `today`.
///
/// Priority: "day after" / "parso" (+2) before "tomorrow" / "kal" (+1)
/// so "day after tomorrow" lands on the right day, then "today".
pub fn relative_date(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let text = text.to_lowercase();
    let offset = if text.contains("day after") || text.contains("parso") {
        2
    } else if text.contains("tomorrow") || text.contains("kal") {
        1
    } else if text.contains("today") {
        0
    } else {
        return None;
    };
    today.checked_add_days(Days::new(offset))
}

/// Parse a clock time ("7:30pm", "19:45") into "HH:MM" 24h form.
///
/// Whitespace is ignored, so "7:30 pm" works too. Minutes must be 0-59
/// and the resolved hour 0-23.
pub fn parse_spoken_time(text: &str) -> Option<String> {
    let clean: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let colon = clean.find(':')?;
    let before = &clean[..colon];
    let after = &clean[colon + 1..];

    // Up to two digits immediately before the colon
    let hour_digits: String = before
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .take(2)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    if hour_digits.is_empty() {
        return None;
    }
    // Exactly two digits after it
    let minute_digits: String = after.chars().take_while(|c| c.is_ascii_digit()).collect();
    if minute_digits.len() < 2 {
        return None;
    }
    let minute_digits = &minute_digits[..2];

    let mut hour: u32 = hour_digits.parse().ok()?;
    let minute: u32 = minute_digits.parse().ok()?;
    if minute > 59 || hour > 23 {
        return None;
    }

    let rest = &after[2..];
    if rest.starts_with("pm") && hour != 12 {
        hour += 12;
    } else if rest.starts_with("am") && hour == 12 {
        hour = 0;
    }
    if hour > 23 {
        return None;
    }

    Some(format!("{:02}:{:02}", hour, minute))
}

/// Map qualitative time-of-day words onto grid times
pub fn time_from_words(text: &str) -> Option<&'static str> {
    let text = text.to_lowercase();
    if text.contains("morning") {
        Some("10:00")
    } else if text.contains("afternoon") {
        Some("14:00")
    } else if text.contains("evening") || text.contains("shaam") {
        Some("19:00")
    } else if text.contains("night") || text.contains("raat") {
        Some("20:00")
    } else {
        None
    }
}

/// Extract a guest count.
///
/// Priority: leading integer, then a number glued to a counting word
/// ("4 people", "3 guests", transliterated "log"/"logo"), then any
/// embedded number. Range checking is up to the caller.
pub fn guests_from_text(text: &str) -> Option<u32> {
    let text = text.to_lowercase();
    let trimmed = text.trim();

    let leading: String = trimmed
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if let Ok(n) = leading.parse::<u32>()
        && n > 0
    {
        return Some(n);
    }

    let runs = digit_runs(trimmed);
    for (end, value) in &runs {
        let rest = trimmed[*end..].trim_start();
        if ["people", "persons", "guests", "logo", "log"]
            .iter()
            .any(|w| rest.starts_with(w))
        {
            return Some(*value);
        }
    }

    runs.first().map(|(_, value)| *value)
}

/// (end byte offset, parsed value) for each maximal digit run
fn digit_runs(text: &str) -> Vec<(usize, u32)> {
    let mut runs = Vec::new();
    let mut start: Option<usize> = None;
    for (i, c) in text.char_indices() {
        if c.is_ascii_digit() {
            start.get_or_insert(i);
        } else if let Some(s) = start.take()
            && let Ok(value) = text[s..i].parse()
        {
            runs.push((i, value));
        }
    }
    if let Some(s) = start
        && let Ok(value) = text[s..].parse()
    {
        runs.push((text.len(), value));
    }
    runs
}

/// "2026-03-25" -> "25th March 2026"
pub fn format_pretty_date(date: NaiveDate) -> String {
    let day = date.day();
    let suffix = match day {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{}{} {} {}", day, suffix, date.format("%B"), date.year())
}

/// "19:30" -> "7:30 PM"
pub fn format_pretty_time(time: &str) -> String {
    let Some((h, m)) = time.split_once(':') else {
        return time.to_string();
    };
    let Ok(hour) = h.parse::<u32>() else {
        return time.to_string();
    };
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let display = match hour % 12 {
        0 => 12,
        other => other,
    };
    format!("{}:{} {}", display, m, meridiem)
}
