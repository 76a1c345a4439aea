//! Span finding and merging.

use serde::Serialize;

/// A half-open character range `[start, end)` marking one occurrence in a text.
///
/// Offsets count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    /// First character of the occurrence.
    pub start: usize,
    /// One past the last character of the occurrence.
    pub end: usize,
}

impl Span {
    /// Creates a span. `start` must be less than `end`.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Finds every occurrence of `pattern` in `text`, including overlapping ones.
///
/// Both inputs must already be case-folded. Returns spans sorted by start offset, or an
/// empty vector when the pattern is empty or longer than the text.
pub fn find_spans(text: &[char], pattern: &[char]) -> Vec<Span> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }

    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern)
        .map(|(start, _)| Span::new(start, start + pattern.len()))
        .collect()
}

/// Coalesces overlapping or touching spans into disjoint display ranges.
///
/// The result is sorted by start position with no overlaps, and no range begins at or
/// before the end of the previous one. The union of covered characters is unchanged.
pub fn merge_spans(spans: &[Span]) -> Vec<Span> {
    let mut sorted = spans.to_vec();
    if sorted.is_empty() {
        return sorted;
    }

    sorted.sort_unstable();

    let mut merged = Vec::with_capacity(sorted.len());
    let mut current = sorted[0];

    for span in sorted.into_iter().skip(1) {
        if span.start <= current.end {
            current.end = current.end.max(span.end);
        } else {
            merged.push(current);
            current = span;
        }
    }
    merged.push(current);

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn spans(pairs: &[(usize, usize)]) -> Vec<Span> {
        pairs.iter().map(|&(s, e)| Span::new(s, e)).collect()
    }

    #[test]
    fn find_spans_reports_overlapping_matches() {
        let found = find_spans(&chars("aaa"), &chars("aa"));
        assert_eq!(found, spans(&[(0, 2), (1, 3)]));
    }

    #[test]
    fn find_spans_empty_pattern() {
        assert!(find_spans(&chars("anything"), &[]).is_empty());
    }

    #[test]
    fn find_spans_pattern_longer_than_text() {
        assert!(find_spans(&chars("ab"), &chars("abc")).is_empty());
    }

    #[test]
    fn find_spans_pattern_equal_to_text() {
        assert_eq!(find_spans(&chars("love"), &chars("love")), spans(&[(0, 4)]));
    }

    #[test]
    fn find_spans_no_occurrence() {
        assert!(find_spans(&chars("sonnet one"), &chars("the")).is_empty());
    }

    #[test]
    fn find_spans_every_span_matches_pattern() {
        let text = chars("love is not love which alters when it alteration finds");
        let pattern = chars("alter");
        let found = find_spans(&text, &pattern);

        assert_eq!(found.len(), 2);
        for span in &found {
            assert_eq!(&text[span.start..span.end], pattern.as_slice());
        }
        assert!(found.windows(2).all(|w| w[0].start < w[1].start));
    }

    #[test]
    fn find_spans_counts_characters_not_bytes() {
        let found = find_spans(&chars("déjà vu"), &chars("vu"));
        assert_eq!(found, spans(&[(5, 7)]));
    }

    #[test]
    fn merge_spans_combines_overlapping() {
        let merged = merge_spans(&spans(&[(0, 2), (1, 3)]));
        assert_eq!(merged, spans(&[(0, 3)]));
    }

    #[test]
    fn merge_spans_combines_adjacent() {
        let merged = merge_spans(&spans(&[(5, 10), (0, 5)]));
        assert_eq!(merged, spans(&[(0, 10)]));
    }

    #[test]
    fn merge_spans_preserves_disjoint() {
        let merged = merge_spans(&spans(&[(10, 15), (0, 5)]));
        assert_eq!(merged, spans(&[(0, 5), (10, 15)]));
    }

    #[test]
    fn merge_spans_handles_empty() {
        assert!(merge_spans(&[]).is_empty());
    }

    #[test]
    fn merge_spans_absorbs_contained_and_duplicate() {
        let merged = merge_spans(&spans(&[(0, 10), (2, 4), (2, 4), (12, 14), (13, 20)]));
        assert_eq!(merged, spans(&[(0, 10), (12, 20)]));
    }

    #[test]
    fn merge_spans_output_is_disjoint_and_covers_input() {
        let input = spans(&[(7, 9), (0, 3), (2, 5), (9, 11), (20, 22), (14, 15)]);
        let merged = merge_spans(&input);

        assert!(merged.windows(2).all(|w| w[1].start > w[0].end));

        let covered = |set: &[Span], i: usize| set.iter().any(|s| (s.start..s.end).contains(&i));
        for i in 0..25 {
            assert_eq!(covered(&input, i), covered(&merged, i), "offset {i}");
        }
    }
}
