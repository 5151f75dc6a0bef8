//! Date normalization to the `DD/MM/YYYY` target form.
//!
//! Structural prefix rewrites come first: they recognize the four common
//! layouts by digit-group widths and separators, ignore any trailing time
//! suffix, and do not validate calendar fields (`99/99/9999` passes
//! through shaped but unchecked, matching best-effort semantics). Generic
//! chrono parsing is the fallback for everything else.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Formats tried by the generic fallback, date-time first.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%d %b %Y", "%d %B %Y", "%b %d, %Y", "%B %d, %Y"];

fn all_digits(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_digit)
}

/// `YYYY<sep>MM<sep>DD` prefix, optionally followed by a non-digit suffix.
fn ymd_prefix(value: &str, sep: u8) -> Option<String> {
    let b = value.as_bytes();
    if b.len() < 10
        || !all_digits(&b[0..4])
        || b[4] != sep
        || !all_digits(&b[5..7])
        || b[7] != sep
        || !all_digits(&b[8..10])
    {
        return None;
    }
    if b.get(10).is_some_and(u8::is_ascii_digit) {
        return None;
    }
    Some(format!("{}/{}/{}", &value[8..10], &value[5..7], &value[0..4]))
}

/// `DD<sep>MM<sep>YYYY` prefix, optionally followed by a non-digit suffix.
fn dmy_prefix(value: &str, sep: u8) -> Option<String> {
    let b = value.as_bytes();
    if b.len() < 10
        || !all_digits(&b[0..2])
        || b[2] != sep
        || !all_digits(&b[3..5])
        || b[5] != sep
        || !all_digits(&b[6..10])
    {
        return None;
    }
    if b.get(10).is_some_and(u8::is_ascii_digit) {
        return None;
    }
    Some(format!("{}/{}/{}", &value[0..2], &value[3..5], &value[6..10]))
}

/// Generic parse of the whole string through a fixed format list.
fn parse_generic(value: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.date());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }
    None
}

/// Rewrite a date-looking string as zero-padded `DD/MM/YYYY`.
///
/// Returns `None` when no layout matches and generic parsing fails; the
/// caller keeps the original text in that case.
pub fn normalize_date(value: &str) -> Option<String> {
    ymd_prefix(value, b'-')
        .or_else(|| ymd_prefix(value, b'/'))
        .or_else(|| dmy_prefix(value, b'/'))
        .or_else(|| dmy_prefix(value, b'-'))
        .or_else(|| parse_generic(value).map(|date| date.format("%d/%m/%Y").to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_prefix_rewrites() {
        assert_eq!(normalize_date("2024-01-15"), Some("15/01/2024".to_string()));
        assert_eq!(normalize_date("2023-12-31"), Some("31/12/2023".to_string()));
        assert_eq!(normalize_date("2024/02/20"), Some("20/02/2024".to_string()));
    }

    #[test]
    fn day_first_layouts() {
        assert_eq!(normalize_date("15/01/2024"), Some("15/01/2024".to_string()));
        assert_eq!(normalize_date("15-03-2024"), Some("15/03/2024".to_string()));
        assert_eq!(normalize_date("31-12-2023"), Some("31/12/2023".to_string()));
    }

    #[test]
    fn time_suffix_is_dropped() {
        assert_eq!(
            normalize_date("2024-01-15T00:00:00Z"),
            Some("15/01/2024".to_string())
        );
        assert_eq!(
            normalize_date("2024-01-15 10:30:00"),
            Some("15/01/2024".to_string())
        );
        assert_eq!(
            normalize_date("15/01/2024 10:30"),
            Some("15/01/2024".to_string())
        );
    }

    #[test]
    fn generic_fallback_formats() {
        assert_eq!(normalize_date("15 Jan 2024"), Some("15/01/2024".to_string()));
        assert_eq!(normalize_date("Jan 15, 2024"), Some("15/01/2024".to_string()));
    }

    #[test]
    fn unparseable_is_none() {
        assert_eq!(normalize_date("not-a-date"), None);
        assert_eq!(normalize_date("abc"), None);
        assert_eq!(normalize_date("1234"), None);
        assert_eq!(normalize_date("12345-67-89"), None);
    }

    #[test]
    fn extra_digits_break_the_prefix() {
        // A fifth digit means this was never a 4-2-2 date.
        assert_eq!(normalize_date("2024-01-155"), None);
    }
}
