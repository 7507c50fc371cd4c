//! Run-length encoded (`.rle`) decoding.

use super::{Marker, ParsedPattern};
use crate::schema::RuleSet;

/// Longest row and most rows a decoded pattern may have. Runs reaching past
/// this are clamped.
pub const MAX_PATTERN_EXTENT: usize = 4096;

/// Decode an RLE pattern.
///
/// `#N`, `#C` and `#O` lines carry name, comments and author. The line with a
/// comma is the `x = W, y = H, rule = R` header. Every other non-empty line is
/// a body fragment; fragments are joined and decoded up to the first `!`.
pub fn load_rle(bytes: &[u8]) -> ParsedPattern {
    let text = String::from_utf8_lossy(bytes);
    let mut pattern = ParsedPattern::default();
    let mut body = String::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with('#') {
            read_comment(line, &mut pattern);
        } else if line.contains(',') {
            read_header(line, &mut pattern);
        } else {
            body.push_str(line);
        }
    }

    let body = body.split('!').next().unwrap_or_default();
    pattern.rows = decode_body(body);
    pattern
}

fn read_comment(line: &str, pattern: &mut ParsedPattern) {
    let Some(rest) = line.strip_prefix('#') else {
        return;
    };
    let mut chars = rest.chars();
    let Some(tag) = chars.next() else {
        return;
    };
    let value = chars.as_str().trim().to_string();
    match tag.to_ascii_uppercase() {
        'N' => pattern.name = value,
        'C' => pattern.comments.push(value),
        'O' => pattern.author = value,
        _ => {}
    }
}

fn read_header(line: &str, pattern: &mut ParsedPattern) {
    for field in line.split(',') {
        let Some((key, value)) = field.split_once('=') else {
            log::warn!("Ignoring malformed RLE header field {:?}", field.trim());
            continue;
        };
        let value = value.trim();
        match key.trim().to_ascii_lowercase().as_str() {
            "x" => pattern.declared_width = parse_dimension("x", value),
            "y" => pattern.declared_height = parse_dimension("y", value),
            "rule" => match RuleSet::from_rle_rule(value) {
                Ok(rule) => pattern.rule = Some(rule),
                Err(e) => log::warn!("Ignoring RLE header rule: {e}"),
            },
            other => log::debug!("Skipping RLE header key {other:?}"),
        }
    }
}

fn parse_dimension(key: &str, value: &str) -> usize {
    value.parse().unwrap_or_else(|_| {
        log::warn!("Ignoring RLE header {key} = {value:?}");
        0
    })
}

/// Expand `<count><tag>` runs. `b` is dead, `o` is alive, `$` ends the row
/// (a count before `$` ends that many rows). Other tags are skipped.
///
/// Rows are cut at [`MAX_PATTERN_EXTENT`] cells and decoding stops once that
/// many rows exist.
fn decode_body(body: &str) -> Vec<Vec<Marker>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut count: Option<usize> = None;
    let mut clamped = false;

    for c in body.chars() {
        if let Some(digit) = c.to_digit(10) {
            let so_far = count.unwrap_or(0).saturating_mul(10);
            count = Some(so_far.saturating_add(digit as usize));
            continue;
        }
        if c.is_whitespace() {
            continue;
        }

        let run = count.take().unwrap_or(1);
        let marker = match c {
            'b' => Marker::Dead,
            'o' => Marker::Alive,
            '$' => {
                rows.push(std::mem::take(&mut row));
                let wanted = run.saturating_sub(1);
                let extra = wanted.min(MAX_PATTERN_EXTENT.saturating_sub(rows.len()));
                clamped |= extra < wanted;
                rows.extend(std::iter::repeat_with(Vec::new).take(extra));
                if rows.len() >= MAX_PATTERN_EXTENT {
                    clamped = true;
                    break;
                }
                continue;
            }
            _ => continue,
        };

        let room = MAX_PATTERN_EXTENT - row.len();
        clamped |= run > room;
        row.extend(std::iter::repeat_n(marker, run.min(room)));
    }

    if rows.len() < MAX_PATTERN_EXTENT {
        rows.push(row);
    }
    if clamped {
        log::warn!("RLE pattern exceeds {MAX_PATTERN_EXTENT} cells per side; clamped");
    }
    rows
}
