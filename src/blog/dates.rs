use chrono::{Datelike, NaiveDate};

/// Long US-style date, e.g. `April 9, 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// [`format_date`] followed by how long ago it was relative to `today`.
///
/// The distance is the first positive difference of the year, month and day
/// fields: Dec 31 to Jan 1 reads `1y ago`.
pub fn format_date_relative(date: NaiveDate, today: NaiveDate) -> String {
    let years = today.year() - date.year();
    let months = today.month() as i32 - date.month() as i32;
    let days = today.day() as i32 - date.day() as i32;

    let ago = if years > 0 {
        format!("{years}y ago")
    } else if months > 0 {
        format!("{months}mo ago")
    } else if days > 0 {
        format!("{days}d ago")
    } else {
        "Today".to_string()
    };

    format!("{} ({ago})", format_date(date))
}
