use chrono::{DateTime, FixedOffset, Local, TimeZone};

/// Layout of the timestamp once the weekday prefix is removed.
const DATE_FORMAT: &str = "%d %b %Y %H:%M:%S %z";

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Parse an RFC 1123 timestamp with a numeric zone, e.g.
/// `Mon, 02 Jan 2006 15:04:05 -0700`.
///
/// The weekday must be a valid abbreviation but is not cross-checked against
/// the date; feeds in the wild routinely get it wrong.
pub fn parse_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    let (weekday, rest) = raw.trim().split_once(", ")?;
    if !WEEKDAYS.contains(&weekday) {
        return None;
    }
    DateTime::parse_from_str(rest, DATE_FORMAT).ok()
}

/// `YYYY-MM-DD` in the timestamp's own offset, or the raw string when it
/// cannot be parsed.
pub fn format_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => raw.to_string(),
    }
}

/// Human-relative age of a timestamp, measured against the local clock.
pub fn format_relative_date(raw: &str) -> String {
    format_relative_date_at(raw, Local::now())
}

/// Human-relative age of a timestamp, measured against `now`.
///
/// Anything under an hour old is "Just now". Past that, whole calendar days
/// in `now`'s time zone are counted, so 23:00 and 01:00 yesterday are both
/// "1 day ago".
pub fn format_relative_date_at<Tz: TimeZone>(raw: &str, now: DateTime<Tz>) -> String {
    let Some(published) = parse_date(raw) else {
        return raw.to_string();
    };

    if now.timestamp() - published.timestamp() < 60 * 60 {
        return "Just now".to_string();
    }

    let today = now.date_naive();
    let published_day = published.with_timezone(&now.timezone()).date_naive();
    match (today - published_day).num_days() {
        0 => "Today".to_string(),
        1 => "1 day ago".to_string(),
        days => format!("{} days ago", days),
    }
}
