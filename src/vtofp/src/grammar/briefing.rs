//! Briefing notes from the `Briefing` section

use super::{assignment_value, is_ident_byte, line_rest, next_keyword, region, skip_inline_ws};

/// Escaped line break used inside briefing text
const LINE_BREAK_MARKER: &str = "///n";

/// Sub-fields that may trail a note's text and are not part of it
const MEDIA_KEYS: [&str; 2] = ["imagePath", "audioClipPath"];

/// Cleaned text of every note inside `Briefing { ... } Briefing_B`
///
/// Notes are written either as `text = value` (value runs to the end of the
/// line) or as `{text} = {value}`. Notes that are empty after cleaning are
/// dropped.
pub fn briefing_notes(text: &str) -> Vec<String> {
    let Some(section) = region(text, "Briefing", "Briefing_B") else {
        tracing::debug!("no briefing section found");
        return Vec::new();
    };

    raw_notes(section)
        .into_iter()
        .map(clean_note)
        .filter(|note| !note.is_empty())
        .collect()
}

/// Raw note values in document order, without overlapping matches
fn raw_notes(section: &str) -> Vec<&str> {
    let mut notes = Vec::new();
    let mut cursor = 0;

    while let Some(found) = section.get(cursor..).and_then(|s| s.find("text")) {
        let offset = cursor + found;
        let next = offset + "text".len();

        if let Some((value, end)) = braced_note(section, offset) {
            notes.push(value);
            cursor = end;
        } else if offset > 0 && is_ident_byte(section.as_bytes()[offset - 1]) {
            cursor = next;
        } else if let Some(start) = assignment_value(section, offset, "text") {
            let value = line_rest(&section[start..]);
            notes.push(value);
            cursor = start + value.len();
        } else {
            cursor = next;
        }
    }

    notes
}

/// `{text} = {value}` starting with the `text` at `offset`
///
/// Returns the value and the offset just past its closing brace.
fn braced_note(section: &str, offset: usize) -> Option<(&str, usize)> {
    let bytes = section.as_bytes();
    if offset == 0 || bytes[offset - 1] != b'{' {
        return None;
    }
    let close = offset + "text".len();
    if bytes.get(close) != Some(&b'}') {
        return None;
    }
    let eq = skip_inline_ws(section, close + 1);
    if bytes.get(eq) != Some(&b'=') {
        return None;
    }
    let open = skip_inline_ws(section, eq + 1);
    if bytes.get(open) != Some(&b'{') {
        return None;
    }
    let start = open + 1;
    let value = line_rest(&section[start..]);
    let len = value.find('}').filter(|&len| len > 0)?;
    Some((&value[..len], start + len + 1))
}

/// Turn escaped line breaks into real ones and drop trailing media fields
pub fn clean_note(raw: &str) -> String {
    let mut note = raw.replace(LINE_BREAK_MARKER, "\n").trim().to_string();
    for key in MEDIA_KEYS {
        note = strip_field(&note, key);
    }
    note.trim().to_string()
}

/// Remove every `key = ...` up to and including the end of its line
fn strip_field(text: &str, key: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    while let Some(offset) = next_keyword(text, key, cursor) {
        let Some(start) = assignment_value(text, offset, key) else {
            out.push_str(&text[cursor..offset + key.len()]);
            cursor = offset + key.len();
            continue;
        };
        out.push_str(&text[cursor..offset]);
        let mut end = start + line_rest(&text[start..]).len();
        if text[end..].starts_with('\n') {
            end += 1;
        }
        cursor = end;
    }

    out.push_str(&text[cursor..]);
    out
}
