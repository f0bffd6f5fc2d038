use chrono::{DateTime, NaiveDate, NaiveDateTime};
use unicode_width::UnicodeWidthChar;

/// Collapse every whitespace run (including newlines) into a single space
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cut `s` to at most `width` columns, marking the cut with an ellipsis
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Render a post timestamp as `YYYY-MM-DD HH:MM`, or return it unchanged
///
/// Accepts the `YYYY-MM-DD HH:MM:SS` form stored by the upload pipeline and
/// the RFC 2822 form produced by JSON-encoding a datetime on the server.
pub fn format_post_datetime(raw: &str) -> String {
    const OUTPUT: &str = "%Y-%m-%d %H:%M";

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return dt.format(OUTPUT).to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return dt.naive_utc().format(OUTPUT).to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.naive_utc().format(OUTPUT).to_string();
    }
    raw.to_string()
}

/// Whether `s` is a calendar date in `YYYY-MM-DD` form
pub fn is_iso_date(s: &str) -> bool {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}
