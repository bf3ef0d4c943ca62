//! # Escape Sequence Normalization
//!
//! Templates that went through storage or a text editor often carry their
//! control codes as escaped text (`\u001B@`, `\n`) instead of real control
//! characters. [`normalize`] turns those escapes back into characters in a
//! single pass; [`escape_controls`] is the inverse used for storage.
//!
//! ## Escape Table
//!
//! | Escape | Character |
//! |--------|-----------|
//! | `\e` | ESC (0x1B) |
//! | `\n` | LF (0x0A) |
//! | `\r` | CR (0x0D) |
//! | `\\` | `\` |
//! | `\xHH` | U+00HH |
//! | `\uXXXX` | U+XXXX |
//! | `\u{H..}` | U+H.. (1 to 6 digits) |
//!
//! Unknown or malformed escapes are kept as literal text. A replaced
//! character is never scanned again, so `\\n` is a backslash followed by
//! `n`, not a line feed.

use crate::protocol::commands::{CR, ESC, LF};
use crate::protocol::graphics::raster_line_span;

/// Single-letter escapes.
const NAMED_ESCAPES: [(char, char); 4] = [
    ('e', ESC as char),
    ('n', LF as char),
    ('r', CR as char),
    ('\\', '\\'),
];

/// Replace textual escapes with the characters they stand for.
///
/// Raster lines already present as real control characters are copied
/// verbatim, so packed image bytes that look like `\n` survive.
///
/// ## Example
///
/// ```
/// use ticketpress::template::escape::normalize;
///
/// assert_eq!(normalize(r"\u001B@Hi\n"), "\u{1B}@Hi\n");
/// assert_eq!(normalize(r"\x1Da"), "\u{1D}a");
/// assert_eq!(normalize(r"\q stays"), r"\q stays");
/// ```
pub fn normalize(input: &str) -> String {
    if !input.contains('\\') {
        return input.to_string();
    }

    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < chars.len() {
        if let Some(end) = raster_line_span(&chars, i) {
            out.extend(&chars[i..end]);
            i = end;
            continue;
        }

        if chars[i] == '\\'
            && let Some((ch, consumed)) = decode_escape(&chars[i + 1..])
        {
            out.push(ch);
            i += 1 + consumed;
            continue;
        }

        out.push(chars[i]);
        i += 1;
    }

    out
}

/// Decode the escape body that follows a backslash.
///
/// Returns the character and the number of body chars consumed.
fn decode_escape(rest: &[char]) -> Option<(char, usize)> {
    let first = *rest.first()?;

    if let Some(&(_, ch)) = NAMED_ESCAPES.iter().find(|(name, _)| *name == first) {
        return Some((ch, 1));
    }

    match first {
        'x' => hex_char(rest.get(1..3)?).map(|ch| (ch, 3)),
        'u' if rest.get(1) == Some(&'{') => {
            let close = rest.iter().take(9).position(|&c| c == '}')?;
            let digits = &rest[2..close];
            if digits.is_empty() || digits.len() > 6 {
                return None;
            }
            hex_char(digits).map(|ch| (ch, close + 1))
        }
        'u' => hex_char(rest.get(1..5)?).map(|ch| (ch, 5)),
        _ => None,
    }
}

fn hex_char(digits: &[char]) -> Option<char> {
    let mut value: u32 = 0;
    for d in digits {
        value = value * 16 + d.to_digit(16)?;
    }
    char::from_u32(value)
}

/// Write control characters and high bytes as escapes.
///
/// `normalize(&escape_controls(s)) == s` for every string.
///
/// ## Example
///
/// ```
/// use ticketpress::template::escape::escape_controls;
///
/// assert_eq!(escape_controls("\u{1B}a\u{1}OK\n"), r"\ea\u0001OK\n");
/// ```
pub fn escape_controls(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\u{1B}' => out.push_str("\\e"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if (c as u32) < 0x20 || (0x7F..=0xFF).contains(&(c as u32)) => {
                out.push_str(&format!("\\u{:04X}", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_named_escapes() {
        assert_eq!(normalize(r"\e@"), "\u{1B}@");
        assert_eq!(normalize(r"a\r\nb"), "a\r\nb");
    }

    #[test]
    fn test_unicode_escapes() {
        assert_eq!(normalize(r"\u001B!\u0008BOLD"), "\u{1B}!\u{8}BOLD");
        assert_eq!(normalize(r"\u001d\u0002\u0001"), "\u{1D}\u{2}\u{1}");
        assert_eq!(normalize(r"\u{1b}a\u{1}"), "\u{1B}a\u{1}");
    }

    #[test]
    fn test_hex_escapes() {
        assert_eq!(normalize(r"\x1B@\x0a"), "\u{1B}@\n");
    }

    #[test]
    fn test_no_double_substitution() {
        // Escaped backslash followed by 'n' is not a line feed
        assert_eq!(normalize(r"\\n"), r"\n");
        // A decoded backslash does not start a new escape
        assert_eq!(normalize(r"\\\n"), "\\\n");
    }

    #[test]
    fn test_malformed_escapes_stay_literal() {
        assert_eq!(normalize(r"\u12"), r"\u12");
        assert_eq!(normalize(r"\xZZ"), r"\xZZ");
        assert_eq!(normalize(r"\u{}"), r"\u{}");
        assert_eq!(normalize(r"\u{110000}"), r"\u{110000}");
        assert_eq!(normalize("trailing\\"), "trailing\\");
    }

    #[test]
    fn test_raster_payload_copied_verbatim() {
        // Payload bytes spell "\n"
        let template = "\u{1B}*\u{0}\u{2}\u{0}\\nX\\n";
        assert_eq!(normalize(template), "\u{1B}*\u{0}\u{2}\u{0}\\nX\n");
    }

    #[test]
    fn test_escape_controls() {
        assert_eq!(escape_controls("a\\b"), r"a\\b");
        assert_eq!(escape_controls("\u{1D}V\u{0}"), r"\u001DV\u0000");
        assert_eq!(escape_controls("\u{FF}\u{7F}"), r"\u00FF\u007F");
        assert_eq!(escape_controls("plain text"), "plain text");
    }

    #[test]
    fn test_escape_controls_roundtrip() {
        let original = "\u{1B}@\u{1B}!\u{38}TOTAL\\\r\n\u{1B}*\u{0}\u{1}\u{0}\u{5C}\u{A}";
        assert_eq!(normalize(&escape_controls(original)), original);
    }
}
