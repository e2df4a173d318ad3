//! Recognition of day-header lines, e.g. `ke 25.2.2026`.

/// Weekday abbreviations used by the menu page, with their display names.
const WEEKDAYS: [(&str, &str); 5] = [
    ("ma", "Maanantai"),
    ("ti", "Tiistai"),
    ("ke", "Keskiviikko"),
    ("to", "Torstai"),
    ("pe", "Perjantai"),
];

/// True when the line starts with a weekday abbreviation followed by
/// whitespace and a `d.m.yyyy` date. Anything after the date is ignored,
/// but the match must sit at the start of the line.
pub fn is_day_header(line: &str) -> bool {
    let Some(rest) = strip_abbreviation(line) else {
        return false;
    };
    let date = rest.trim_start();
    if date.len() == rest.len() {
        // No whitespace between abbreviation and date.
        return false;
    }
    is_date(date)
}

/// Consume a leading weekday abbreviation, case-insensitively.
fn strip_abbreviation(line: &str) -> Option<&str> {
    let head = line.get(..2)?;
    WEEKDAYS
        .iter()
        .any(|(abbr, _)| head.eq_ignore_ascii_case(abbr))
        .then(|| &line[2..])
}

/// `d.m.yyyy`: 1-2 digit day, 1-2 digit month, 4-digit year.
fn is_date(s: &str) -> bool {
    let Some(s) = eat_digits(s, 1, 2) else { return false };
    let Some(s) = s.strip_prefix('.') else { return false };
    let Some(s) = eat_digits(s, 1, 2) else { return false };
    let Some(s) = s.strip_prefix('.') else { return false };
    eat_digits(s, 4, 4).is_some()
}

/// Consume between `min` and `max` leading ASCII digits.
fn eat_digits(s: &str, min: usize, max: usize) -> Option<&str> {
    let digits = s.chars().take_while(char::is_ascii_digit).count();
    if digits < min {
        return None;
    }
    Some(&s[digits.min(max)..])
}

/// Display form of a day section: canonical weekday name plus date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayHeading {
    pub name: String,
    pub date: String,
}

impl DayHeading {
    /// Decompose a stored day key like `"ke 25.2.2026"` into
    /// `Keskiviikko` / `25.2.2026`.
    ///
    /// Total on purpose: an unknown abbreviation falls back to the raw key
    /// text as the display name, a missing date becomes an empty string.
    pub fn from_key(key: &str) -> Self {
        let mut parts = key.split_whitespace();
        let abbreviation = parts.next().unwrap_or("").to_lowercase();
        let date = parts.next().unwrap_or("").to_string();
        let name = WEEKDAYS
            .iter()
            .find(|(abbr, _)| *abbr == abbreviation)
            .map(|(_, name)| (*name).to_string())
            .unwrap_or_else(|| key.to_string());
        Self { name, date }
    }
}
