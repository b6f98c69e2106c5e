//! Measuring, truncating and word-wrapping text in terminal cells.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Cuts `text` to at most `max` cells, ending in `…` when anything was dropped.
pub fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0usize;
    for g in text.graphemes(true) {
        let w = g.width();
        if used + w > max - 1 {
            break;
        }
        out.push_str(g);
        used += w;
    }
    out.push('…');
    out
}

/// Greedy word wrap into lines of at most `width` cells.
///
/// Runs of whitespace collapse to one space; `\n` starts a new line; words
/// wider than `width` are split on grapheme boundaries.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if width == 0 {
        return lines;
    }

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_w = 0usize;

        for word in paragraph.split_whitespace() {
            let w = word.width();
            if w > width {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_w = 0;
                }
                for g in word.graphemes(true) {
                    let gw = g.width();
                    if line_w + gw > width && !line.is_empty() {
                        lines.push(std::mem::take(&mut line));
                        line_w = 0;
                    }
                    line.push_str(g);
                    line_w += gw;
                }
                continue;
            }

            let needed = if line.is_empty() { w } else { line_w + 1 + w };
            if needed > width {
                lines.push(std::mem::take(&mut line));
                line.push_str(word);
                line_w = w;
            } else {
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(word);
                line_w = needed;
            }
        }

        if !line.is_empty() || paragraph.trim().is_empty() {
            lines.push(line);
        }
    }

    lines
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/text.rs"]
mod tests;
