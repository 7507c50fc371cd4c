//! Plaintext (`.cells`) decoding.

use super::{Marker, ParsedPattern};

/// Decode a plaintext pattern.
///
/// Only lines whose first character is `o` or `.` (either case) are rows;
/// `!Name:` fills the name, other `!` lines become comments, anything else is
/// ignored. Rows are taken as-is, with no run-length expansion.
pub fn load_plaintext(bytes: &[u8]) -> ParsedPattern {
    let text = String::from_utf8_lossy(bytes);
    let mut pattern = ParsedPattern::default();

    for line in text.lines() {
        let line = line.trim_end();
        if let Some(meta) = line.strip_prefix('!') {
            match meta.strip_prefix("Name:") {
                Some(name) => pattern.name = name.trim().to_string(),
                None => pattern.comments.push(meta.trim().to_string()),
            }
            continue;
        }

        let lowered = line.to_lowercase();
        if lowered.starts_with(['o', '.']) {
            pattern.rows.push(lowered.chars().map(marker_for).collect());
        }
    }

    pattern
}

fn marker_for(c: char) -> Marker {
    match c {
        'o' => Marker::Alive,
        '.' => Marker::Dead,
        _ => Marker::Unspecified,
    }
}
