//! Line patterns used to find and classify record boundaries.

use std::sync::LazyLock;

use regex::Regex;

/// Any character followed by two digits at the start of a trimmed line.
///
/// Deliberately permissive: history numbers match, and so do code-led lines
/// such as `K40.9 HERNIA`. False positives are filtered after assembly.
static BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.[0-9]{2}").expect("valid regex"));

/// A `dd/mm/yyyy` date anywhere in the line.
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{2}/[0-9]{2}/[0-9]{4}").expect("valid regex"));

/// A line that is exactly a `dd/mm/yyyy` date.
static STRICT_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("valid regex"));

/// Check whether a trimmed line opens a record.
pub fn is_boundary(line: &str) -> bool {
    BOUNDARY_RE.is_match(line)
}

/// Check whether a line contains a date.
pub fn contains_date(line: &str) -> bool {
    DATE_RE.is_match(line)
}

/// Check whether a trimmed line is nothing but a date.
pub fn is_strict_date(line: &str) -> bool {
    STRICT_DATE_RE.is_match(line)
}

/// Fully upper-case: at least one cased character and no lower-case ones.
pub fn is_upper_case(line: &str) -> bool {
    let mut has_cased = false;
    for ch in line.chars() {
        if ch.is_lowercase() {
            return false;
        }
        if ch.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// First character is a digit and the third is not `/` (i.e. not a date).
pub fn is_digit_led_non_date(line: &str) -> bool {
    let mut chars = line.chars();
    let first_is_digit = chars.next().is_some_and(|ch| ch.is_ascii_digit());
    let third = chars.nth(1);
    first_is_digit && third != Some('/')
}

/// Patient names must start with a letter.
pub fn starts_with_letter(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_alphabetic)
}
