//! Extraction rules for the VTOL VR mission/map text format.
//!
//! Decoded `.vts` and `.vtm` files are trees of named blocks:
//!
//! ```text
//! UNITS
//! {
//!     UnitSpawner
//!     {
//!         unitName = Enemy Tank Co
//!         UnitFields
//!         {
//!             unitGroup = Enemy:Alpha
//!         }
//!     }
//! }
//! PATHS
//! ```
//!
//! Every rule here is best-effort: a missing block or key yields the rule's
//! default (or an empty collection), never an error. Rules that read from a
//! section first isolate the section with [`region`] and only scan inside it.

mod bases;
mod briefing;
mod map;
mod mission;
mod units;

pub use bases::{bases, Base, UNKNOWN_BASE, UNKNOWN_ID, UNKNOWN_TEAM};
pub use briefing::{briefing_notes, clean_note};
pub use map::{map_info, terrain_type, MapInfo, UNKNOWN_TERRAIN};
pub use mission::{
    aircraft, mission_info, mission_name, objectives, waypoints, MissionInfo, Waypoint,
    UNKNOWN_AIRCRAFT, UNKNOWN_MISSION,
};
pub use units::{units, Team, Unit};

fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Offset of the next `keyword` at or after `from` that starts an identifier
fn next_keyword(text: &str, keyword: &str, from: usize) -> Option<usize> {
    let mut at = from;
    while let Some(found) = text.get(at..)?.find(keyword) {
        let offset = at + found;
        if offset == 0 || !is_ident_byte(text.as_bytes()[offset - 1]) {
            return Some(offset);
        }
        at = offset + keyword.len();
    }
    None
}

/// All offsets of `keyword` that start an identifier
fn keyword_offsets<'a>(text: &'a str, keyword: &'a str) -> impl Iterator<Item = usize> + 'a {
    let mut cursor = 0;
    std::iter::from_fn(move || {
        let offset = next_keyword(text, keyword, cursor)?;
        cursor = offset + keyword.len();
        Some(offset)
    })
}

fn skip_while(text: &str, at: usize, pred: impl Fn(u8) -> bool) -> usize {
    at + text.as_bytes()[at.min(text.len())..]
        .iter()
        .take_while(|&&b| pred(b))
        .count()
}

/// Skip spaces and tabs
fn skip_inline_ws(text: &str, at: usize) -> usize {
    skip_while(text, at, |b| b == b' ' || b == b'\t')
}

/// Skip any ASCII whitespace, line breaks included
fn skip_ws(text: &str, at: usize) -> usize {
    skip_while(text, at, |b| b.is_ascii_whitespace())
}

/// Text up to (not including) the next line break
fn line_rest(text: &str) -> &str {
    let end = text.find(|c: char| c == '\n' || c == '\r').unwrap_or(text.len());
    &text[..end]
}

/// If `key` at `offset` is followed by `=`, the offset where its value starts
fn assignment_value(text: &str, offset: usize, key: &str) -> Option<usize> {
    let eq = skip_inline_ws(text, offset + key.len());
    if text.as_bytes().get(eq) != Some(&b'=') {
        return None;
    }
    Some(skip_inline_ws(text, eq + 1))
}

/// Raw values of every `key = value` line, in document order
///
/// Each value runs to the end of its line and is not trimmed.
fn assignments<'a>(text: &'a str, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    keyword_offsets(text, key)
        .filter_map(move |offset| assignment_value(text, offset, key))
        .map(move |start| line_rest(&text[start..]))
}

/// The first non-empty `key = value`, trimmed
fn first_assignment<'a>(text: &'a str, key: &'a str) -> Option<&'a str> {
    assignments(text, key).map(str::trim).find(|v| !v.is_empty())
}

/// Leading run of bytes matching `pred`, if non-empty
fn leading(value: &str, pred: impl Fn(u8) -> bool) -> Option<&str> {
    let len = skip_while(value, 0, pred);
    (len > 0).then(|| &value[..len])
}

/// Offset just past `keyword {`, if `keyword` at `offset` opens a block
fn block_body_start(text: &str, offset: usize, keyword: &str) -> Option<usize> {
    let brace = skip_ws(text, offset + keyword.len());
    (text.as_bytes().get(brace) == Some(&b'{')).then_some(brace + 1)
}

/// Body of the section `open { ... } terminator`
///
/// The section ends at the first `}` that is followed (after optional
/// whitespace) by `terminator`. Returns None if the section or its
/// terminator is missing.
pub fn region<'a>(text: &'a str, open: &'a str, terminator: &str) -> Option<&'a str> {
    let body_start = keyword_offsets(text, open)
        .find_map(|offset| block_body_start(text, offset, open))?;

    text[body_start..]
        .match_indices('}')
        .map(|(i, _)| body_start + i)
        .find(|&close| text[skip_ws(text, close + 1)..].starts_with(terminator))
        .map(|close| &text[body_start..close])
}

/// Bodies of every `keyword { ... }` block, each cut at its first `}`
///
/// Only suitable for leaf blocks that contain no nested braces.
fn leaf_blocks<'a>(text: &'a str, keyword: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    let mut cursor = 0;
    std::iter::from_fn(move || loop {
        let offset = next_keyword(text, keyword, cursor)?;
        let Some(body_start) = block_body_start(text, offset, keyword) else {
            cursor = offset + keyword.len();
            continue;
        };
        let close = body_start + text[body_start..].find('}')?;
        cursor = close + 1;
        return Some(&text[body_start..close]);
    })
}

/// Bodies of repeated sibling `keyword { ... }` entries
///
/// Each entry runs from its opening brace up to the next entry (or the end of
/// `text`), so nested blocks stay inside their parent entry.
fn entries<'a>(text: &'a str, keyword: &'a str) -> Vec<&'a str> {
    let starts: Vec<(usize, usize)> = keyword_offsets(text, keyword)
        .filter_map(|offset| block_body_start(text, offset, keyword).map(|body| (offset, body)))
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(i, &(_, body_start))| {
            let end = starts.get(i + 1).map_or(text.len(), |&(next, _)| next);
            &text[body_start..end]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_requires_identifier_boundary() {
        let text = "unitID = 4\nid = 7\nvalid = 1";
        let offsets: Vec<usize> = keyword_offsets(text, "id").collect();
        assert_eq!(offsets, vec![11]);
    }

    #[test]
    fn test_assignments_in_order() {
        let text = "a = 1\nb = 2\n  a\t=  three  \r\na=\n";
        let values: Vec<&str> = assignments(text, "a").collect();
        assert_eq!(values, vec!["1", "three  ", ""]);
        assert_eq!(first_assignment(text, "a"), Some("1"));
        assert_eq!(first_assignment(text, "missing"), None);
    }

    #[test]
    fn test_assignment_needs_equals() {
        assert_eq!(first_assignment("vehicle FA-26B\n", "vehicle"), None);
    }

    #[test]
    fn test_region_stops_at_terminated_brace() {
        let text = "UNITS\n{\n\tA\n\t{\n\t}\n}\nPATHS\n{\n}";
        assert_eq!(region(text, "UNITS", "PATHS"), Some("\n\tA\n\t{\n\t}\n"));
    }

    #[test]
    fn test_region_missing_terminator() {
        assert_eq!(region("UNITS { a = 1 }", "UNITS", "PATHS"), None);
        assert_eq!(region("nothing here", "UNITS", "PATHS"), None);
    }

    #[test]
    fn test_region_skips_keyword_without_brace() {
        let text = "UNITS = 3\nUNITS { x } PATHS";
        assert_eq!(region(text, "UNITS", "PATHS"), Some(" x "));
    }

    #[test]
    fn test_leaf_blocks() {
        let text = "BaseInfo { id = 1 } junk BaseInfo\n{\nid = 2\n}\nBaseInfo";
        let bodies: Vec<&str> = leaf_blocks(text, "BaseInfo").collect();
        assert_eq!(bodies, vec![" id = 1 ", "\nid = 2\n"]);
    }

    #[test]
    fn test_entries_keep_nested_blocks() {
        let text = "S { a { } } S { b }";
        assert_eq!(entries(text, "S"), vec![" a { } } ", " b }"]);
    }

    #[test]
    fn test_leading() {
        assert_eq!(leading("42 rest", |b| b.is_ascii_digit()), Some("42"));
        assert_eq!(leading("x42", |b| b.is_ascii_digit()), None);
    }
}
