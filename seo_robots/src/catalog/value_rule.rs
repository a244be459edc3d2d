//! Value rules for advanced directive modifications

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::num::IntErrorKind;

/// ISO 8601 layouts with a numeric offset, colon optional (`+0000`, `+02:00`)
const OFFSET_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%z", "%Y-%m-%d %H:%M:%S%z"];

/// Date/time layouts accepted for `unavailable_after` after any trailing zone name is removed
const DATE_TIME_FORMATS: [&str; 8] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%d %b %Y %H:%M:%S",
    "%d %B %Y %H:%M:%S",
    "%A, %d-%b-%y %H:%M:%S",
    "%a, %d %b %Y %H:%M:%S",
];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d %b %Y", "%d %B %Y"];

/// Constraint an advanced directive places on its modification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRule {
    /// Integer no smaller than the bound
    MinInteger(i64),
    /// Exact member of a fixed option list
    OneOf(&'static [&'static str]),
    /// Calendar date or date/time
    DateTime,
}

impl ValueRule {
    /// Whether `value` satisfies the rule
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::MinInteger(min) => match value.trim().parse::<i64>() {
                Ok(number) => number >= *min,
                // Too large for i64 is still above any bound
                Err(error) => *error.kind() == IntErrorKind::PosOverflow,
            },
            Self::OneOf(options) => options.iter().any(|option| *option == value),
            Self::DateTime => parse_date_time(value).is_some(),
        }
    }

    /// Human-readable expectation used in validation messages
    pub fn describe(&self) -> String {
        match self {
            Self::MinInteger(min) => format!("an integer greater than or equal to {}", min),
            Self::OneOf(options) => format!("one of: {}", options.join(", ")),
            Self::DateTime => "a date or date/time (e.g. 2026-12-31 or 25 Jun 2026 15:00:00 PST)"
                .to_string(),
        }
    }
}

/// Parse the date formats robots values use in practice.
///
/// Offsets are honoured for RFC 3339 and RFC 2822 input. A trailing alphabetic zone name
/// (`PST`, `GMT`) is accepted but not interpreted.
pub fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.naive_utc());
    }

    if let Ok(parsed) = DateTime::parse_from_rfc2822(value) {
        return Some(parsed.naive_utc());
    }

    if let Some(parsed) = OFFSET_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(value, format).ok())
    {
        return Some(parsed.naive_utc());
    }

    let local = strip_zone_name(value);

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(local, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(local, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

fn strip_zone_name(value: &str) -> &str {
    match value.rsplit_once(' ') {
        Some((rest, zone))
            if (2..=5).contains(&zone.len()) && zone.chars().all(|c| c.is_ascii_uppercase()) =>
        {
            rest.trim_end()
        }
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_integer_rule() {
        let rule = ValueRule::MinInteger(-1);
        assert!(rule.accepts("50"));
        assert!(rule.accepts("0"));
        assert!(rule.accepts("-1"));
        assert!(!rule.accepts("-2"));
        assert!(!rule.accepts("fifty"));
        assert!(!rule.accepts(""));
    }

    #[test]
    fn test_min_integer_beyond_i64() {
        let rule = ValueRule::MinInteger(-1);
        assert!(rule.accepts("99999999999999999999"));
        assert!(rule.accepts("+99999999999999999999"));
        assert!(!rule.accepts("-99999999999999999999"));
        assert!(!rule.accepts("9999999999999999999x"));
    }

    #[test]
    fn test_one_of_rule_is_exact() {
        let rule = ValueRule::OneOf(&["none", "standard", "large"]);
        assert!(rule.accepts("large"));
        assert!(!rule.accepts("huge"));
        assert!(!rule.accepts("LARGE"));
        assert_eq!(rule.describe(), "one of: none, standard, large");
    }

    #[test]
    fn test_date_time_rule_formats() {
        let rule = ValueRule::DateTime;
        assert!(rule.accepts("2026-12-31"));
        assert!(rule.accepts("2026-12-31 23:59:59"));
        assert!(rule.accepts("2026-12-31T23:59:59+02:00"));
        assert!(rule.accepts("Fri, 25 Jun 2010 15:00:00 +0000"));
        assert!(rule.accepts("25 Jun 2010 15:00:00 PST"));
        assert!(rule.accepts("25 June 2010"));
        assert!(!rule.accepts("not-a-date"));
        assert!(!rule.accepts("2026-13-45"));
        assert!(!rule.accepts(""));
    }

    #[test]
    fn test_iso_offset_without_colon() {
        let rule = ValueRule::DateTime;
        assert!(rule.accepts("2026-12-31T23:59:59+0000"));
        assert!(rule.accepts("2026-12-31 23:59:59-0500"));
        assert!(rule.accepts("2026-12-31T23:59:59Z"));

        let parsed = parse_date_time("2026-01-01T02:00:00+0200").unwrap();
        assert_eq!(parsed.to_string(), "2026-01-01 00:00:00");
    }

    #[test]
    fn test_offset_is_normalized_to_utc() {
        let parsed = parse_date_time("2026-01-01T02:00:00+02:00").unwrap();
        assert_eq!(parsed.to_string(), "2026-01-01 00:00:00");
    }

    #[test]
    fn test_strip_zone_name_leaves_numeric_tail() {
        assert_eq!(strip_zone_name("25 Jun 2010 15:00:00 PST"), "25 Jun 2010 15:00:00");
        assert_eq!(strip_zone_name("2026-12-31 23:59:59"), "2026-12-31 23:59:59");
    }
}
