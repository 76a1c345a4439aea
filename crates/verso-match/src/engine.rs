//! Multi-word query evaluation with AND semantics.

use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};
use verso_corpus::{Corpus, Document};

use crate::{MatchRecord, match_document};

/// A non-empty, ordered list of query words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Raw input the words were split from, trimmed.
    raw: String,
    /// Words in input order.
    words: Vec<String>,
}

impl Query {
    /// Splits raw input on whitespace. Returns `None` when the input holds no words.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let words: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
        if words.is_empty() {
            return None;
        }
        Some(Self {
            raw: raw.to_string(),
            words,
        })
    }

    /// Builds a query from pre-split words, dropping any that are blank.
    pub fn from_words<I, S>(words: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .flat_map(|w| {
                w.as_ref()
                    .split_whitespace()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();
        if words.is_empty() {
            return None;
        }
        Some(Self {
            raw: words.join(" "),
            words,
        })
    }

    /// The words in input order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The trimmed raw input.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Folds every word of the query into one record for a single document.
///
/// Returns `None` when `words` is empty. Once a word fails to match, the record's
/// `matches` is forced to zero and stays there; spans gathered before that point are
/// left in place.
pub fn evaluate_document<S: AsRef<str>>(document: &Document, words: &[S]) -> Option<MatchRecord> {
    let mut accumulated: Option<MatchRecord> = None;

    for word in words {
        let word = word.as_ref();
        let result = match_document(document, word);

        accumulated = Some(match accumulated {
            None => result,
            Some(acc) if acc.matches > 0 && result.matches > 0 => acc.combine(&result),
            Some(mut acc) => {
                acc.matches = 0;
                acc
            }
        });

        trace!(
            title = %document.title,
            word,
            matches = accumulated.as_ref().map_or(0, |r| r.matches),
            "folded word"
        );
    }

    accumulated
}

/// Evaluates the words against every document, in corpus order.
///
/// The result has one record per document, including documents that did not match.
/// An empty word list yields an empty result.
pub fn evaluate<S: AsRef<str>>(documents: &[Document], words: &[S]) -> Vec<MatchRecord> {
    documents
        .iter()
        .filter_map(|doc| evaluate_document(doc, words))
        .collect()
}

/// A document that matched every query word.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MatchedDocument<'a> {
    /// 1-based position among matched documents.
    pub rank: usize,
    /// The document's record.
    #[serde(flatten)]
    pub record: &'a MatchRecord,
}

/// The outcome of evaluating one query against a corpus.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// The evaluated query.
    pub query: Query,
    /// One record per corpus document, in corpus order.
    pub records: Vec<MatchRecord>,
}

impl SearchOutcome {
    /// Evaluates `query` against `corpus`.
    pub fn run(corpus: &Corpus, query: Query) -> Self {
        let records = evaluate(corpus.documents(), query.words());
        let outcome = Self { query, records };
        debug!(
            query = %outcome.query,
            words = outcome.query.words().len(),
            documents = outcome.total(),
            matched = outcome.matched_count(),
            "evaluated query"
        );
        outcome
    }

    /// Number of documents searched.
    pub fn total(&self) -> usize {
        self.records.len()
    }

    /// Number of documents that matched every word.
    pub fn matched_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_match()).count()
    }

    /// Documents that matched every word, numbered from 1.
    pub fn matched(&self) -> impl Iterator<Item = MatchedDocument<'_>> {
        self.records
            .iter()
            .filter(|r| r.is_match())
            .enumerate()
            .map(|(idx, record)| MatchedDocument {
                rank: idx + 1,
                record,
            })
    }
}
