// src/services/icons.rs

//! Icon classification.
//!
//! Job pages present salary, remote policy, duration, experience, location and
//! start date as rows of `<svg icon> <span>value</span>` without any label.
//! The only stable way to tell the rows apart is the icon itself, so each known
//! glyph is listed here with the attribute it stands for.
//!
//! Signatures are either SVG path data (the `d` attribute) or a sprite
//! identifier (the `href` of a `<use>` element). Several encodings may map to
//! the same kind because the site ships more than one icon set.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::AttributeKind;

/// Known icon signatures, as served by the site.
const SIGNATURES: &[(&str, AttributeKind)] = &[
    // Salary: euro sign, coin
    (
        "M15 18.5c-2.51 0-4.68-1.42-5.76-3.5H15l1-2H8.58c-.05-.33-.08-.66-.08-1s.03-.67.08-1H15l1-2H9.24C10.32 6.92 12.5 5.5 15 5.5c1.61 0 3.09.59 4.23 1.57L21 5.3C19.41 3.87 17.3 3 15 3c-3.92 0-7.24 2.51-8.48 6H3l-1 2h4.06c-.04.33-.06.66-.06 1s.02.67.06 1H3l-1 2h4.52c1.24 3.49 4.56 6 8.48 6 2.31 0 4.41-.87 6-2.3l-1.78-1.77c-1.13.98-2.6 1.57-4.22 1.57z",
        AttributeKind::Salary,
    ),
    (
        "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm1 15h-2v-1.5H9v-2h4v-1h-3a1 1 0 0 1-1-1V9a1 1 0 0 1 1-1h1V6.5h2V8h2v2h-4v1h3a1 1 0 0 1 1 1v3a1 1 0 0 1-1 1h-1z",
        AttributeKind::Salary,
    ),
    ("icon-euro", AttributeKind::Salary),
    ("icon-money", AttributeKind::Salary),
    // Remote: house, laptop
    ("M10 20v-6h4v6h5v-8h3L12 3 2 12h3v8z", AttributeKind::Remote),
    (
        "M20 18c1.1 0 1.99-.9 1.99-2L22 6c0-1.1-.9-2-2-2H4c-1.1 0-2 .9-2 2v10c0 1.1.9 2 2 2H0v2h24v-2h-4zM4 6h16v10H4V6z",
        AttributeKind::Remote,
    ),
    ("icon-home", AttributeKind::Remote),
    ("icon-remote", AttributeKind::Remote),
    // Duration: clock, hourglass
    (
        "M11.99 2C6.47 2 2 6.48 2 12s4.47 10 9.99 10C17.52 22 22 17.52 22 12S17.52 2 11.99 2zM12 20c-4.42 0-8-3.58-8-8s3.58-8 8-8 8 3.58 8 8-3.58 8-8 8zm.5-13H11v6l5.25 3.15.75-1.23-4.5-2.67z",
        AttributeKind::Duration,
    ),
    (
        "M6 2v6h.01L6 8.01 10 12l-4 4 .01.01H6V22h12v-5.99h-.01L18 16l-4-4 4-3.99-.01-.01H18V2H6z",
        AttributeKind::Duration,
    ),
    ("icon-clock", AttributeKind::Duration),
    ("icon-hourglass", AttributeKind::Duration),
    // Experience: briefcase
    (
        "M20 6h-4V4c0-1.11-.89-2-2-2h-4c-1.11 0-2 .89-2 2v2H4c-1.11 0-1.99.89-1.99 2L2 19c0 1.11.89 2 2 2h16c1.11 0 2-.89 2-2V8c0-1.11-.89-2-2-2zm-6 0h-4V4h4v2z",
        AttributeKind::Experience,
    ),
    ("icon-briefcase", AttributeKind::Experience),
    // Location: map pin
    (
        "M12 2C8.13 2 5 5.13 5 9c0 5.25 7 13 7 13s7-7.75 7-13c0-3.87-3.13-7-7-7zm0 9.5c-1.38 0-2.5-1.12-2.5-2.5s1.12-2.5 2.5-2.5 2.5 1.12 2.5 2.5-1.12 2.5-2.5 2.5z",
        AttributeKind::Location,
    ),
    ("icon-location", AttributeKind::Location),
    ("icon-map-pin", AttributeKind::Location),
    // Start date: calendar
    (
        "M19 3h-1V1h-2v2H8V1H6v2H5c-1.11 0-1.99.9-1.99 2L3 19c0 1.1.89 2 2 2h14c1.1 0 2-.9 2-2V5c0-1.1-.9-2-2-2zm0 16H5V8h14v11zM7 10h5v5H7z",
        AttributeKind::StartDate,
    ),
    ("icon-calendar", AttributeKind::StartDate),
];

static COMMAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[MmLlHhVvCcSsQqTtAaZz]").expect("valid regex"));

static PACKED_MINUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9.])-").expect("valid regex"));

static TABLE: LazyLock<HashMap<String, AttributeKind>> = LazyLock::new(|| {
    SIGNATURES
        .iter()
        .map(|(signature, kind)| (normalize_signature(signature), *kind))
        .collect()
});

/// Classify an icon signature.
///
/// Returns `None` for glyphs that are not in the table; callers skip those
/// rows.
pub fn classify(signature: &str) -> Option<AttributeKind> {
    let key = normalize_signature(signature);
    if key.is_empty() {
        return None;
    }
    TABLE.get(&key).copied()
}

/// Number of distinct signatures known to the matcher.
pub fn known_signatures() -> usize {
    TABLE.len()
}

/// Canonical form of a signature.
///
/// Path data keeps its command letters and numbers but loses formatting
/// (commas, spacing, packed negative numbers). Sprite identifiers are
/// lowercased and stripped of the leading `#`.
pub fn normalize_signature(signature: &str) -> String {
    let trimmed = signature.trim();
    if is_path_data(trimmed) {
        let spaced = trimmed.replace(',', " ");
        let spaced = PACKED_MINUS.replace_all(&spaced, "$1 -");
        let spaced = COMMAND.replace_all(&spaced, " $0 ");
        spaced.split_whitespace().collect::<Vec<_>>().join(" ")
    } else {
        let id = trimmed.rsplit('#').next().unwrap_or(trimmed);
        id.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
    }
}

fn is_path_data(s: &str) -> bool {
    s.starts_with(['M', 'm']) && s.chars().any(|c| c.is_ascii_digit())
}
