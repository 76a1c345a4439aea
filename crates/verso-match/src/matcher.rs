//! Matching a single word against a single document.

use verso_corpus::Document;

use crate::{LineMatch, MatchRecord, find_spans};

/// Case-folds text for matching, one output character per input character.
///
/// Characters whose lowercase form spans several characters are kept unchanged, so
/// offsets into the folded text are valid offsets into the original. This is narrower
/// than full Unicode lowercasing: `İ` (U+0130) stays `İ` and is not matched by `i`.
pub fn fold(text: &str) -> Vec<char> {
    text.chars().map(fold_char).collect()
}

/// Lowercases a single character when its lowercase form is a single character.
fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

/// Finds every occurrence of `word` in the document's title and lines.
///
/// Matching is case-insensitive. Lines without an occurrence are omitted.
pub fn match_document(document: &Document, word: &str) -> MatchRecord {
    let pattern = fold(word);
    let title_spans = find_spans(&fold(&document.title), &pattern);

    let line_matches: Vec<LineMatch> = document
        .lines
        .iter()
        .enumerate()
        .filter_map(|(idx, text)| {
            let spans = find_spans(&fold(text), &pattern);
            (!spans.is_empty()).then(|| LineMatch {
                line_no: idx + 1,
                text: text.clone(),
                spans,
            })
        })
        .collect();

    let matches = title_spans.len() + line_matches.iter().map(|lm| lm.spans.len()).sum::<usize>();

    MatchRecord {
        title: document.title.clone(),
        title_spans,
        line_matches,
        matches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Span;

    fn quick_fox() -> Document {
        Document::new("Sonnet One", ["the quick fox", "jumps over"])
    }

    #[test]
    fn matches_line_but_not_title() {
        let record = match_document(&quick_fox(), "the");

        assert!(record.title_spans.is_empty());
        assert_eq!(record.line_matches.len(), 1);
        assert_eq!(record.line_matches[0].line_no, 1);
        assert_eq!(record.line_matches[0].spans, vec![Span::new(0, 3)]);
        assert_eq!(record.matches, 1);
    }

    #[test]
    fn matching_is_case_insensitive_and_keeps_original_text() {
        let doc = Document::new("LOVE's Labour", ["Love is not love", "no match here"]);
        let record = match_document(&doc, "LoVe");

        assert_eq!(record.title, "LOVE's Labour");
        assert_eq!(record.title_spans, vec![Span::new(0, 4)]);
        assert_eq!(record.line_matches.len(), 1);
        assert_eq!(record.line_matches[0].text, "Love is not love");
        assert_eq!(
            record.line_matches[0].spans,
            vec![Span::new(0, 4), Span::new(12, 16)]
        );
        assert_eq!(record.matches, 3);
    }

    #[test]
    fn line_numbers_are_one_based_and_skip_misses() {
        let doc = Document::new("t", ["miss", "fox", "miss", "foxfox"]);
        let record = match_document(&doc, "fox");

        let numbers: Vec<usize> = record.line_matches.iter().map(|l| l.line_no).collect();
        assert_eq!(numbers, vec![2, 4]);
        assert_eq!(record.matches, 3);
    }

    #[test]
    fn no_occurrence_yields_zero() {
        let record = match_document(&quick_fox(), "dog");

        assert_eq!(record.matches, 0);
        assert!(record.title_spans.is_empty());
        assert!(record.line_matches.is_empty());
    }

    #[test]
    fn empty_document_yields_zero() {
        let record = match_document(&Document::new("", Vec::<String>::new()), "a");
        assert_eq!(record.matches, 0);
    }

    #[test]
    fn fold_preserves_character_count() {
        let text = "İstanbul ÀÉÎ";
        let folded = fold(text);

        assert_eq!(folded.len(), text.chars().count());
        assert_eq!(folded.iter().collect::<String>(), "İstanbul àéî");
    }

    #[test]
    fn multi_char_lowercase_is_matched_literally() {
        let doc = Document::new("İstanbul", ["İzmir"]);

        let dotless = match_document(&doc, "i");
        assert!(dotless.title_spans.is_empty());
        assert_eq!(dotless.line_matches[0].spans, vec![Span::new(3, 4)]);
        assert_eq!(dotless.matches, 1);

        let dotted = match_document(&doc, "İ");
        assert_eq!(dotted.title_spans, vec![Span::new(0, 1)]);
        assert_eq!(dotted.line_matches[0].spans, vec![Span::new(0, 1)]);
    }

    #[test]
    fn count_matches_held_spans() {
        let record = match_document(&quick_fox(), "u");
        assert_eq!(record.matches, record.span_count());
        assert_eq!(record.matches, 2);
    }
}
