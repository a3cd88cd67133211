//! Validation utilities for user input.
//!
//! This module provides reusable parsing and clamping helpers shared by the
//! address resolver and the webhook payload builder.

/// Parse a port field.
///
/// Surrounding whitespace is ignored. Anything that is not a plain decimal
/// number in `0..=65535` is rejected.
///
/// # Examples
///
/// ```
/// use mcpinger::utils::validation::parse_port;
///
/// assert_eq!(parse_port("25565"), Some(25565));
/// assert_eq!(parse_port(" 25566 "), Some(25566));
/// assert_eq!(parse_port("+25565"), None);
/// assert_eq!(parse_port("70000"), None);
/// ```
pub fn parse_port(port: &str) -> Option<u16> {
    let port = port.trim();
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse::<u16>().ok()
}

/// Validate a host string taken from the address field.
///
/// Hosts must be a domain or IPv4 address as `url` parses them. URL
/// delimiters (`/ ? # @ :`), percent escapes and whitespace are rejected, so
/// a host can always be placed in a request path as a single segment.
///
/// # Examples
///
/// ```
/// use mcpinger::utils::validation::is_valid_host;
///
/// assert!(is_valid_host("play.example.com"));
/// assert!(!is_valid_host("a/b"));
/// ```
pub fn is_valid_host(host: &str) -> bool {
    if host.is_empty() || host.chars().any(|c| c.is_whitespace() || c == '%') {
        return false;
    }
    url::Host::parse(host).is_ok()
}

/// Truncate a string to at most `max` characters.
///
/// When the input is cut, the final character is replaced with `…` so the
/// result still has at most `max` characters.
///
/// # Examples
///
/// ```
/// use mcpinger::utils::validation::truncate_chars;
///
/// assert_eq!(truncate_chars("hello", 10), "hello");
/// assert_eq!(truncate_chars("hello", 3), "he…");
/// ```
pub fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(max - 1).collect();
    out.push('…');
    out
}
