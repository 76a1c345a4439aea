//! Rendering and JSON serialization for search results.

use std::io::{self, Write};

use serde::Serialize;
use verso_highlight::render_record;
pub use verso_highlight::{dim, header, rule, subheader, success, warning};
use verso_match::{MatchedDocument, SearchOutcome};

/// JSON output for one evaluated query.
#[derive(Serialize)]
struct JsonSearchOutput<'a> {
    /// The query as entered.
    query: &'a str,
    /// Individual query words.
    words: &'a [String],
    /// Number of documents searched.
    total_documents: usize,
    /// Number of documents that contained every word.
    matched_documents: usize,
    /// Matched documents in corpus order.
    results: Vec<MatchedDocument<'a>>,
}

/// Writes the result summary and every matched document.
///
/// `noun` names the kind of document in the summary line.
pub fn write_results<W: Write>(
    out: &mut W,
    outcome: &SearchOutcome,
    noun: &str,
    highlight: bool,
) -> io::Result<()> {
    let total = outcome.total();
    writeln!(
        out,
        "{} out of {} {} contain \"{}\".",
        outcome.matched_count(),
        total,
        noun,
        outcome.query
    )?;

    for matched in outcome.matched() {
        writeln!(out)?;
        write!(
            out,
            "{}",
            render_record(matched.record, matched.rank, total, highlight)
        )?;
    }

    Ok(())
}

/// Serializes the matched documents as pretty-printed JSON.
pub fn results_json(outcome: &SearchOutcome) -> serde_json::Result<String> {
    let output = JsonSearchOutput {
        query: outcome.query.as_str(),
        words: outcome.query.words(),
        total_documents: outcome.total(),
        matched_documents: outcome.matched_count(),
        results: outcome.matched().collect(),
    };
    serde_json::to_string_pretty(&output)
}

#[cfg(test)]
mod tests {
    use verso_corpus::{Corpus, Document};
    use verso_match::Query;

    use super::*;

    fn outcome(raw: &str) -> SearchOutcome {
        let corpus = Corpus::new(vec![
            Document::new("Sonnet One", ["the quick fox", "jumps over"]),
            Document::new("Sonnet Two", ["no match here"]),
            Document::new("The Third", ["over and over"]),
        ]);
        SearchOutcome::run(&corpus, Query::parse(raw).unwrap())
    }

    fn render(outcome: &SearchOutcome) -> String {
        let mut buf = Vec::new();
        write_results(&mut buf, outcome, "sonnets", false).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn summary_and_blocks() {
        let text = render(&outcome("over"));
        assert_eq!(
            text,
            "2 out of 3 sonnets contain \"over\".\n\
             \n[1/3] Sonnet One\n  jumps over\n\
             \n[2/3] The Third\n  over and over\n"
        );
    }

    #[test]
    fn no_matches_prints_summary_only() {
        assert_eq!(
            render(&outcome("fox dog")),
            "0 out of 3 sonnets contain \"fox dog\".\n"
        );
    }

    #[test]
    fn title_only_match_prints_header() {
        let text = render(&outcome("third"));
        assert!(text.ends_with("\n[1/3] The Third\n"));
    }

    #[test]
    fn json_lists_matched_documents() {
        let json = results_json(&outcome("the")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["query"], "the");
        assert_eq!(value["total_documents"], 3);
        assert_eq!(value["matched_documents"], 2);
        assert_eq!(value["results"][0]["title"], "Sonnet One");
        assert_eq!(value["results"][1]["title_spans"][0]["start"], 0);
    }
}
