//! Text width and truncation utilities.
//!
//! Labels and typed values often contain CJK text, which takes two cells
//! per character.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Get the visual width of a string in terminal cells.
pub fn visual_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within a maximum visual width.
///
/// Returns the truncated string with "..." appended if truncation occurred.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if visual_width(s) <= max_width {
        return s.to_string();
    }

    let target_width = max_width.saturating_sub(3);
    if target_width == 0 {
        return "...".to_string();
    }

    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push_str("...");
    result
}

/// Keep the longest suffix of a string that fits within `max_width`.
pub fn tail_to_width(s: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = s.len();

    for (idx, ch) in s.char_indices().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        width += ch_width;
        start = idx;
    }

    &s[start..]
}

/// Slice of a string that fits within `max_width` and contains the char at
/// `anchor`.
///
/// The window grows left first, then right, so an anchor at the end keeps
/// the tail and an anchor at the start keeps the head. An anchor past the
/// last char falls back to the tail.
pub fn window_to_width(s: &str, anchor: usize, max_width: usize) -> &str {
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let Some(&(_, anchor_ch)) = chars.get(anchor) else {
        return tail_to_width(s, max_width);
    };

    let mut width = anchor_ch.width().unwrap_or(0);
    if width > max_width {
        return "";
    }

    let mut start = anchor;
    while start > 0 {
        let ch_width = chars[start - 1].1.width().unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        width += ch_width;
        start -= 1;
    }

    let mut end = anchor + 1;
    while end < chars.len() {
        let ch_width = chars[end].1.width().unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        width += ch_width;
        end += 1;
    }

    let to = chars.get(end).map_or(s.len(), |&(idx, _)| idx);
    &s[chars[start].0..to]
}
