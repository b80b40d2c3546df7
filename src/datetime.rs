//! Deadline Helpers
//!
//! Parsing and formatting between API timestamps, card text, and
//! `datetime-local` input values.

use chrono::NaiveDateTime;

/// Card text for a deadline. `None` renders the fixed placeholder.
pub fn format_deadline(deadline: Option<&NaiveDateTime>) -> String {
    match deadline {
        Some(dt) => dt.format("%b %-d, %Y %H:%M").to_string(),
        None => "No deadline".to_string(),
    }
}

/// Value for a `<input type="datetime-local">`, minute precision.
pub fn datetime_local_value(deadline: &NaiveDateTime) -> String {
    deadline.format("%Y-%m-%dT%H:%M").to_string()
}

/// Parse a `datetime-local` input value. Browsers emit minute precision,
/// but a seconds component is accepted too. Empty input means no deadline.
pub fn parse_datetime_local(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    #[test]
    fn test_format_deadline_placeholder() {
        assert_eq!(format_deadline(None), "No deadline");
    }

    #[test]
    fn test_format_deadline() {
        let deadline = dt("2026-03-04T09:30:00");
        assert_eq!(format_deadline(Some(&deadline)), "Mar 4, 2026 09:30");
    }

    #[test]
    fn test_datetime_local_round_trip() {
        let deadline = dt("2026-03-04T09:30:00");
        let value = datetime_local_value(&deadline);
        assert_eq!(value, "2026-03-04T09:30");
        assert_eq!(parse_datetime_local(&value), Some(deadline));
    }

    #[test]
    fn test_parse_datetime_local_empty() {
        assert_eq!(parse_datetime_local(""), None);
        assert_eq!(parse_datetime_local("   "), None);
        assert_eq!(parse_datetime_local("not-a-date"), None);
    }

    #[test]
    fn test_parse_datetime_local_with_seconds() {
        assert_eq!(
            parse_datetime_local("2026-03-04T09:30:15"),
            Some(dt("2026-03-04T09:30:15"))
        );
    }
}
