use chrono::{DateTime, NaiveDate};

/// Sentinel returned when a post's timestamp can't be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

const DISPLAY_FORMAT: &str = "%b %-d, %Y";

/// Formats a feed timestamp as a short display date, e.g. "Jan 5, 2024".
///
/// Feeds disagree on timestamp flavor, so this tries RFC 3339 first,
/// then RFC 2822, then a bare date. Anything else gets the sentinel
/// rather than an error so a bad timestamp never blocks a render.
pub fn format_published_date(date: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(date) {
        return parsed.format(DISPLAY_FORMAT).to_string();
    }

    if let Ok(parsed) = DateTime::parse_from_rfc2822(date) {
        return parsed.format(DISPLAY_FORMAT).to_string();
    }

    if let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return parsed.format(DISPLAY_FORMAT).to_string();
    }

    INVALID_DATE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_rfc3339() {
        assert_eq!(format_published_date("2024-01-05T00:00:00Z"), "Jan 5, 2024");
        assert_eq!(format_published_date("2023-12-25T18:30:00+02:00"), "Dec 25, 2023");
    }

    #[test]
    fn test_formats_rfc2822() {
        assert_eq!(
            format_published_date("Fri, 05 Jan 2024 00:00:00 GMT"),
            "Jan 5, 2024"
        );
    }

    #[test]
    fn test_formats_bare_date() {
        assert_eq!(format_published_date("2024-01-05"), "Jan 5, 2024");
    }

    #[test]
    fn test_day_is_not_zero_padded() {
        assert_eq!(format_published_date("2024-11-09T12:00:00Z"), "Nov 9, 2024");
    }

    #[test]
    fn test_invalid_input_yields_sentinel() {
        assert_eq!(format_published_date(""), INVALID_DATE);
        assert_eq!(format_published_date("not a date"), INVALID_DATE);
        assert_eq!(format_published_date("2024-13-45"), INVALID_DATE);
    }

    #[test]
    fn test_repeated_calls_agree() {
        let input = "2024-01-05T00:00:00Z";
        let first = format_published_date(input);
        let second = format_published_date(input);
        assert_eq!(first, second, "formatting should be deterministic");
    }
}
