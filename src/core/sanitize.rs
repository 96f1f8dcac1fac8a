// src/core/sanitize.rs
// Number and key cleanup for values scraped out of text nodes.

use crate::error::{Error, Result};

/// "12,345" → "12345"
pub fn strip_thousands(s: &str) -> String {
    s.replace(',', "")
}

/// Leading integer of `s` after optional whitespace and sign; 0 when there
/// are no digits ("87%" → 87, "N/A" → 0).
pub fn leading_int(s: &str) -> i64 {
    let t = s.trim_start();
    let (neg, digits) = match t.as_bytes().first() {
        Some(b'-') => (true, &t[1..]),
        Some(b'+') => (false, &t[1..]),
        _ => (false, t),
    };
    let end = digits.bytes().position(|b| !b.is_ascii_digit()).unwrap_or(digits.len());
    let n = digits[..end].parse::<i64>().unwrap_or(0);
    if neg { -n } else { n }
}

/// A counter as printed on the site: trimmed, thousands separators removed.
pub fn parse_count(s: &str) -> i64 {
    leading_int(&strip_thousands(s.trim()))
}

/// True for text that reads as a number once separators are gone.
pub fn is_numeric(s: &str) -> bool {
    strip_thousands(s).trim().parse::<f64>().is_ok()
}

/// "1,000 / 50" → (1000, 50), split on the first '/'.
pub fn split_pair(s: &str) -> Result<(i64, i64)> {
    let (a, b) = s
        .split_once('/')
        .ok_or_else(|| Error::structure(format!("expected 'A/B', got '{}'", s.trim())))?;
    Ok((parse_count(a), parse_count(b)))
}

/// "Rocket Launcher" → "rocketlauncher", "Chain-Gun" → "chaingun"
pub fn weapon_key(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .collect()
}

/// Lower-cased ASCII letters and digits only ("Blood Run" → "bloodrun").
pub fn alnum_lower(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Everything after the first `n` characters ("" when shorter).
pub fn skip_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((i, _)) => &s[i..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_int_variants() {
        assert_eq!(leading_int("87%"), 87);
        assert_eq!(leading_int("  12 "), 12);
        assert_eq!(leading_int("-3"), -3);
        assert_eq!(leading_int("N/A"), 0);
        assert_eq!(leading_int(""), 0);
    }

    #[test]
    fn counts_strip_separators() {
        assert_eq!(parse_count(" 1,234,567 "), 1_234_567);
        assert!(is_numeric("12,000"));
        assert!(!is_numeric("Frags"));
        assert!(!is_numeric(""));
    }

    #[test]
    fn pairs_split_on_first_slash() {
        assert_eq!(split_pair(" 1,000 / 50").unwrap(), (1000, 50));
        assert!(split_pair("1000").is_err());
    }

    #[test]
    fn keys() {
        assert_eq!(weapon_key("Machine Gun"), "machinegun");
        assert_eq!(weapon_key("Chain-Gun "), "chaingun");
        assert_eq!(alnum_lower("Hell's Gate 2"), "hellsgate2");
    }

    #[test]
    fn skip_chars_is_char_based() {
        assert_eq!(skip_chars("premium_status_1", 8), "status_1");
        assert_eq!(skip_chars("short", 8), "");
    }
}
