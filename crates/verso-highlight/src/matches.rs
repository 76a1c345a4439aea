//! Rendering match records as terminal text.

use verso_match::{MatchRecord, Span, merge_spans};

use crate::colors::{BG_YELLOW, BOLD, RESET};

/// Wraps each matched range of `text` in the highlight style.
///
/// Spans are character offsets and may overlap; they are merged before styling so
/// each visible range gets exactly one style sequence. Offsets past the end of the text
/// are clamped.
pub fn highlight_spans(text: &str, spans: &[Span]) -> String {
    if spans.is_empty() {
        return text.to_string();
    }

    let boundaries = char_boundaries(text);
    let byte_at = |offset: usize| boundaries[offset.min(boundaries.len() - 1)];

    let mut out = String::with_capacity(text.len() + spans.len() * 16);
    let mut cursor = 0;
    for span in merge_spans(spans) {
        let start = byte_at(span.start);
        let end = byte_at(span.end);
        if start >= end {
            continue;
        }
        out.push_str(&text[cursor..start]);
        out.push_str(BOLD);
        out.push_str(BG_YELLOW);
        out.push_str(&text[start..end]);
        out.push_str(RESET);
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Renders text with or without highlighting.
pub fn render_text(text: &str, spans: &[Span], highlight: bool) -> String {
    if highlight {
        highlight_spans(text, spans)
    } else {
        text.to_string()
    }
}

/// Renders one matched document as a result block.
///
/// The block is a `[rank/total] title` header followed by each matched line indented by
/// two spaces, one line per row, with a trailing newline.
pub fn render_record(record: &MatchRecord, rank: usize, total: usize, highlight: bool) -> String {
    let mut out = String::new();
    let title = render_text(&record.title, &record.title_spans, highlight);
    out.push_str(&format!("[{rank}/{total}] {title}\n"));
    for line in &record.line_matches {
        out.push_str("  ");
        out.push_str(&render_text(&line.text, &line.spans, highlight));
        out.push('\n');
    }
    out
}

/// Byte offset of every character boundary in `text`, including the end.
fn char_boundaries(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(idx, _)| idx)
        .chain([text.len()])
        .collect()
}
