//! Per-document match records and combining them across query words.

use serde::Serialize;

use crate::Span;

/// Matches within one line of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineMatch {
    /// 1-based line number within the document.
    pub line_no: usize,
    /// Original line text (not case-folded).
    pub text: String,
    /// Occurrences in this line. Never empty when produced by the matcher.
    pub spans: Vec<Span>,
}

/// Match state for one document against the words evaluated so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    /// Document title.
    pub title: String,
    /// Occurrences in the title.
    pub title_spans: Vec<Span>,
    /// Lines with at least one occurrence, at most one entry per line number.
    pub line_matches: Vec<LineMatch>,
    /// Total span count. Zero means the document did not match, regardless of spans.
    pub matches: usize,
}

impl MatchRecord {
    /// Whether the document matched every word evaluated so far.
    pub const fn is_match(&self) -> bool {
        self.matches > 0
    }

    /// Counts the spans actually held by this record.
    pub fn span_count(&self) -> usize {
        self.title_spans.len()
            + self
                .line_matches
                .iter()
                .map(|lm| lm.spans.len())
                .sum::<usize>()
    }

    /// Merges the record for another word of the same document into this one.
    ///
    /// Spans are concatenated without deduplication, so a word queried twice counts
    /// twice. Line entries of `other` are folded into entries of `self` with the same
    /// line number; the rest are appended in `other`'s order. Neither input is modified.
    pub fn combine(&self, other: &Self) -> Self {
        debug_assert_eq!(
            self.title, other.title,
            "combined records must describe the same document"
        );

        let mut line_matches = self.line_matches.clone();
        for incoming in &other.line_matches {
            match line_matches
                .iter_mut()
                .find(|existing| existing.line_no == incoming.line_no)
            {
                Some(existing) => existing.spans.extend_from_slice(&incoming.spans),
                None => line_matches.push(incoming.clone()),
            }
        }

        let mut title_spans = Vec::with_capacity(self.title_spans.len() + other.title_spans.len());
        title_spans.extend_from_slice(&self.title_spans);
        title_spans.extend_from_slice(&other.title_spans);

        Self {
            title: self.title.clone(),
            title_spans,
            line_matches,
            matches: self.matches + other.matches,
        }
    }
}
