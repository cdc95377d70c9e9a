use chrono::NaiveDate;

static ISO_DATE: std::sync::LazyLock<regex::Regex> = std::sync::LazyLock::new(|| {
    regex::Regex::new(r"(\d{4}-\d{2}-\d{2})").expect("static pattern")
});

/// Normalizes the match date found on a page.
///
/// Accepts unix timestamps in seconds, `YYYY-MM-DD HH:MM:SS`, RFC 3339, or
/// any text containing a `YYYY-MM-DD` date. Timestamps are read as UTC.
pub fn normalize(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if raw.chars().all(|c| c.is_ascii_digit()) {
        return raw
            .parse::<i64>()
            .ok()
            .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0))
            .map(|dt| dt.date_naive());
    }

    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }

    let date = ISO_DATE
        .captures(raw)
        .and_then(|caps| NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d").ok());
    if date.is_none() {
        tracing::debug!(raw, "Could not read match date");
    }
    date
}
