use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDateTime, Utc};

/// Parses an ISO-8601 timestamp as delivered by the query service.
///
/// RFC 3339 input keeps its offset; a timestamp without offset is read as UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[must_use]
pub fn is_valid_label_format(pattern: &str) -> bool {
    !pattern.is_empty() && !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Renders a timestamp with a strftime pattern.
///
/// Falls back to RFC 3339 when the pattern cannot be formatted.
#[must_use]
pub fn format_timestamp_label(time: DateTime<Utc>, pattern: &str) -> String {
    if !is_valid_label_format(pattern) {
        return time.to_rfc3339();
    }
    time.format(pattern).to_string()
}

/// Formats an amount with thousands separators and at most two decimals.
///
/// `12345.0` renders as `"12,345"` and `1234.5` as `"1,234.5"`.
#[must_use]
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = (value * 100.0).round() / 100.0;
    let fixed = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let digits = int_part.len();
    let mut text = String::with_capacity(fixed.len() + digits / 3 + 1);
    if rounded < 0.0 {
        text.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            text.push(',');
        }
        text.push(ch);
    }
    if !frac_part.is_empty() {
        text.push('.');
        text.push_str(frac_part);
    }
    text
}

#[must_use]
pub fn format_ratio(value: f64) -> String {
    format!("{value:.2}")
}

/// Keeps at most `budget` characters of `text`.
#[must_use]
pub fn truncate_chars(text: &str, budget: usize) -> String {
    text.chars().take(budget).collect()
}
