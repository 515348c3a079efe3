use jiff::{Timestamp, tz};

/// Calendar date in the browser's timezone, or a dash when unknown.
pub fn format_date(timestamp: Option<Timestamp>) -> String {
    match timestamp {
        Some(timestamp) => timestamp
            .to_zoned(tz::TimeZone::system())
            .strftime("%b %d, %Y")
            .to_string(),
        None => "-".into(),
    }
}
