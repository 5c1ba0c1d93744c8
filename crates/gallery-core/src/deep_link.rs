//! Deep Links
//!
//! Reads the startup query parameter and builds share URLs.

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

/// How the deep-link value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeepLinkTarget {
    /// Value names an item id
    #[default]
    ItemId,
    /// Value is a 1-based window offset
    Position,
}

/// Find `param` in a `?a=b&c=d` query string and read it as a positive integer.
///
/// Leading digits are accepted the way `parseInt` does (`"27abc"` is 27).
/// Zero, negative and non-numeric values yield `None`.
pub fn parse_query(search: &str, param: &str) -> Option<u32> {
    let query = search.strip_prefix('?').unwrap_or(search);
    let raw = query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (decode_component(key) == param).then(|| decode_component(value))
    })?;
    parse_leading_int(&raw)
}

fn decode_component(s: &str) -> String {
    let spaced = s.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

fn parse_leading_int(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    match digits[..end].parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(n) => Some(n),
    }
}

/// `origin + pathname + "?param=id"`
pub fn share_url(origin: &str, pathname: &str, param: &str, id: u32) -> String {
    format!("{}{}?{}={}", origin, pathname, param, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        assert_eq!(parse_query("?fox=27", "fox"), Some(27));
        assert_eq!(parse_query("fox=3", "fox"), Some(3));
        assert_eq!(parse_query("?a=1&fox=12&b=2", "fox"), Some(12));
    }

    #[test]
    fn test_parse_like_parse_int() {
        assert_eq!(parse_query("?fox=27abc", "fox"), Some(27));
        assert_eq!(parse_query("?fox=%2042", "fox"), Some(42));
        assert_eq!(parse_query("?fox=abc", "fox"), None);
        assert_eq!(parse_query("?fox=-4", "fox"), None);
        assert_eq!(parse_query("?fox=0", "fox"), None);
        assert_eq!(parse_query("?fox=", "fox"), None);
        assert_eq!(parse_query("?fox", "fox"), None);
    }

    #[test]
    fn test_missing_param() {
        assert_eq!(parse_query("", "fox"), None);
        assert_eq!(parse_query("?foxes=3", "fox"), None);
    }

    #[test]
    fn test_first_occurrence_wins() {
        assert_eq!(parse_query("?fox=1&fox=2", "fox"), Some(1));
    }

    #[test]
    fn test_share_url() {
        assert_eq!(
            share_url("https://example.org", "/gallery/", "fox", 27),
            "https://example.org/gallery/?fox=27"
        );
    }
}
