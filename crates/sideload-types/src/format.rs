//! Small display helpers shared by every renderer.

use chrono::DateTime;

const ELLIPSIS: &str = "...";

/// First candidate that is non-empty after trimming, trimmed; empty string if none
pub fn first_non_empty(candidates: &[&str]) -> String {
    candidates
        .iter()
        .map(|candidate| candidate.trim())
        .find(|candidate| !candidate.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Truncate a string to at most `max` characters
///
/// When the string is cut, the last three characters are replaced with
/// `...`. Widths too small to hold the ellipsis hard-cut instead.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    if max <= ELLIPSIS.len() {
        return s.chars().take(max).collect();
    }
    let kept: String = s.chars().take(max - ELLIPSIS.len()).collect();
    kept + ELLIPSIS
}

/// Render a polymorphic reference as `type/id`
///
/// Either half may be missing; both missing yields an empty string.
pub fn format_polymorphic(resource_type: &str, id: &str) -> String {
    match (resource_type.trim(), id.trim()) {
        ("", "") => String::new(),
        ("", id) => id.to_string(),
        (resource_type, "") => resource_type.to_string(),
        (resource_type, id) => format!("{}/{}", resource_type, id),
    }
}

/// Format an RFC 3339 timestamp as `YYYY-MM-DD HH:MM`
///
/// Values that do not parse are returned trimmed but otherwise untouched.
pub fn format_date_time(value: &str) -> String {
    let value = value.trim();
    match DateTime::parse_from_rfc3339(value) {
        Ok(parsed) => parsed.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => value.to_string(),
    }
}

pub fn format_bool(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_non_empty_skips_blank() {
        assert_eq!(first_non_empty(&["", "  ", " Ada ", "Bob"]), "Ada");
        assert_eq!(first_non_empty(&["", " "]), "");
        assert_eq!(first_non_empty(&[]), "");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
        assert_eq!(truncate("this is a very long string", 10), "this is...");
        assert_eq!(truncate("abcdef", 3), "abc");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("ééééé", 5), "ééééé");
        assert_eq!(truncate("éééééé", 5), "éé...");
    }

    #[test]
    fn test_format_polymorphic() {
        assert_eq!(format_polymorphic("projects", "12"), "projects/12");
        assert_eq!(format_polymorphic("", "12"), "12");
        assert_eq!(format_polymorphic("projects", ""), "projects");
        assert_eq!(format_polymorphic("", ""), "");
    }

    #[test]
    fn test_format_date_time() {
        assert_eq!(format_date_time("2024-03-05T14:07:09Z"), "2024-03-05 14:07");
        assert_eq!(
            format_date_time("2024-03-05T14:07:09-05:00"),
            "2024-03-05 14:07"
        );
        assert_eq!(format_date_time(" 2024-03-05 "), "2024-03-05");
        assert_eq!(format_date_time(""), "");
    }

    #[test]
    fn test_format_bool() {
        assert_eq!(format_bool(true), "yes");
        assert_eq!(format_bool(false), "no");
    }
}
