//! Greedy word-wrap for the lyric display.
//!
//! Text is split on existing hard line breaks first; each segment then
//! wraps independently at word boundaries. Segments are never merged, so a
//! break the author wrote stays a break on screen.

use unicode_width::UnicodeWidthStr;

/// Wraps text to fit within the given display width.
///
/// Uses unicode display width so CJK characters and emoji count as the
/// columns they actually occupy (equal to byte length for ASCII lyrics).
///
/// A single word wider than `max_width` is emitted alone on an oversized
/// line rather than split mid-word; there is no hyphenation. Segments with
/// no words produce no output lines at all, so `wrap("", w)` is empty —
/// callers that want blank rows preserved must add them explicitly.
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for segment in text.split('\n') {
        wrap_segment(segment, max_width, &mut lines);
    }
    lines
}

fn wrap_segment(segment: &str, max_width: usize, lines: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width: usize = 0;

    for word in segment.split_whitespace() {
        let word_width = word.width();
        // +1 for the joining space on a non-empty line
        let sep = usize::from(!current.is_empty());

        if current_width + word_width + sep <= max_width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += word_width + sep;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = word.to_string();
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
}
