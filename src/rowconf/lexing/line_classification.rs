//! Line Classification
//!
//! Regex recognisers for the four line shapes of the format, plus the placeholder token
//! found inside values. The recognisers are pure; the builder decides what to do with each
//! class.
//!
//! Classification follows this order:
//! 1. Blank lines
//! 2. Section markers (`[name]`, the whole line)
//! 3. Comment lines (starting with `#`, which includes the header)
//! 4. Named rows (`name=value`)
//! 5. Anything else is unrecognised and ignored by the builder

use once_cell::sync::Lazy;
use regex::Regex;

/// `#? config: <description>`
static HEADER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#\?\s*config:(.*)$").unwrap());

/// `[name]`; word characters with internal whitespace
static SECTION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[([\w\s]*\w[\w\s]*)\]$").unwrap());

/// `name=rest of line`; the payload is returned raw
static NAMED_ROW_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\w+)=(.+)$").unwrap());

/// `$NAME` anywhere inside a value
pub(crate) static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$(\w+)").unwrap());

/// The class of a single trimmed logical line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType<'a> {
    Blank,
    SectionMarker(&'a str),
    Comment,
    NamedRow { name: &'a str, value: &'a str },
    Unrecognized,
}

pub fn classify_line(line: &str) -> LineType<'_> {
    if line.is_empty() {
        return LineType::Blank;
    }

    if let Some(name) = match_section_marker(line) {
        return LineType::SectionMarker(name);
    }

    if line.starts_with('#') {
        return LineType::Comment;
    }

    if let Some((name, value)) = match_named_row(line) {
        return LineType::NamedRow { name, value };
    }

    LineType::Unrecognized
}

/// Description carried by a header line, trimmed
pub fn match_header(line: &str) -> Option<&str> {
    HEADER_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Section name of a marker line, trimmed
pub fn match_section_marker(line: &str) -> Option<&str> {
    SECTION_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

pub fn match_named_row(line: &str) -> Option<(&str, &str)> {
    let caps = NAMED_ROW_REGEX.captures(line)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// Variable names of every placeholder in `value`, in order of appearance
pub fn placeholders(value: &str) -> impl Iterator<Item = &str> {
    PLACEHOLDER_REGEX
        .captures_iter(value)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}
