//! Text width and code page utilities for thermal printers
//!
//! Receipt printers take single-byte text in a selectable code page. This
//! module provides utilities for:
//! - Calculating display widths of strings (monospace columns)
//! - Truncating/padding/wrapping strings to a column width
//! - Converting UTF-8 to Windows-1252 while preserving ESC/POS commands

use tracing::instrument;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// ESC t 16 - Select character code table WPC1252
const SELECT_WPC1252: [u8; 3] = [0x1B, 0x74, 16];

/// Get the column width of a string
///
/// Wide characters (CJK, most emoji) take two columns.
pub fn text_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within a column width
pub fn truncate_width(s: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut result = String::new();
    for c in s.chars() {
        let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + char_width > max_width {
            break;
        }
        result.push(c);
        width += char_width;
    }
    result
}

/// Pad a string to a specific column width
///
/// If the string is longer than the width, it will be truncated.
pub fn pad_width(s: &str, width: usize, align_right: bool) -> String {
    let current_width = text_width(s);
    if current_width >= width {
        return truncate_width(s, width);
    }
    let spaces = width - current_width;
    if align_right {
        format!("{}{}", " ".repeat(spaces), s)
    } else {
        format!("{}{}", s, " ".repeat(spaces))
    }
}

/// Word-wrap a string into lines no wider than `width`
///
/// Words longer than a full line are hard-split.
pub fn wrap_width(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in s.split_whitespace() {
        let mut word = word.to_string();
        while text_width(&word) > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let head = truncate_width(&word, width);
            word = word[head.len()..].to_string();
            lines.push(head);
        }
        if word.is_empty() {
            continue;
        }
        let needed = if current.is_empty() {
            text_width(&word)
        } else {
            text_width(&current) + 1 + text_width(&word)
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Convert mixed UTF-8 content (with ESC/POS commands) to Windows-1252
///
/// ASCII bytes (0x00-0x7F) pass through exactly as is, which protects
/// ESC/POS commands from being corrupted. Non-ASCII runs are decoded as UTF-8
/// and re-encoded per character; characters the code page cannot represent
/// print as `?`.
///
/// The code table is selected at the start and again after every INIT
/// (ESC @), which resets it.
#[instrument(skip(bytes))]
pub fn convert_to_codepage(bytes: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(bytes.len() + 8);
    result.extend_from_slice(&SELECT_WPC1252);

    let mut buffer = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        // INIT resets the code table
        if b == 0x1B && i + 1 < bytes.len() && bytes[i + 1] == 0x40 {
            flush_buffer(&mut buffer, &mut result);
            result.extend_from_slice(&[0x1B, 0x40]);
            result.extend_from_slice(&SELECT_WPC1252);
            i += 2;
            continue;
        }

        if b < 128 {
            flush_buffer(&mut buffer, &mut result);
            result.push(b);
        } else {
            buffer.push(b);
        }
        i += 1;
    }

    flush_buffer(&mut buffer, &mut result);
    result
}

/// Flush the non-ASCII buffer, converting UTF-8 to Windows-1252
fn flush_buffer(buffer: &mut Vec<u8>, result: &mut Vec<u8>) {
    if buffer.is_empty() {
        return;
    }

    let s = String::from_utf8_lossy(buffer);
    let mut tmp = [0u8; 4];
    for c in s.chars() {
        let (encoded, _, had_errors) = encoding_rs::WINDOWS_1252.encode(c.encode_utf8(&mut tmp));
        if had_errors {
            result.push(b'?');
        } else {
            result.extend_from_slice(&encoded);
        }
    }
    buffer.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("hello"), 5);
        assert_eq!(text_width("café"), 4);
        assert_eq!(text_width("你好"), 4);
    }

    #[test]
    fn test_truncate_width() {
        assert_eq!(truncate_width("hello world", 5), "hello");
        assert_eq!(truncate_width("你好世界", 5), "你好");
    }

    #[test]
    fn test_pad_width() {
        assert_eq!(pad_width("hi", 5, false), "hi   ");
        assert_eq!(pad_width("hi", 5, true), "   hi");
        assert_eq!(pad_width("hello world", 5, false), "hello");
    }

    #[test]
    fn test_wrap_width() {
        assert_eq!(
            wrap_width("Chicken Tikka Masala Family Pack", 14),
            vec!["Chicken Tikka", "Masala Family", "Pack"]
        );
        assert_eq!(wrap_width("Supercalifragilistic", 8), vec!["Supercal", "ifragili", "stic"]);
        assert_eq!(wrap_width("", 10), vec![""]);
    }

    #[test]
    fn test_convert_to_codepage() {
        let out = convert_to_codepage("Caf\u{e9} \u{9999}".as_bytes());
        assert_eq!(&out[..3], &SELECT_WPC1252);
        assert_eq!(&out[3..], &[b'C', b'a', b'f', 0xE9, b' ', b'?']);
    }

    #[test]
    fn test_convert_reselects_after_init() {
        let out = convert_to_codepage(&[b'A', 0x1B, 0x40, b'B']);
        assert_eq!(out, vec![0x1B, 0x74, 16, b'A', 0x1B, 0x40, 0x1B, 0x74, 16, b'B']);
    }
}
