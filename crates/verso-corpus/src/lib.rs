//! Document corpus for verso.
//!
//! A corpus is a fixed, ordered list of documents, each a title plus its lines. The corpus
//! is loaded once at startup and never mutated. A small selection of Shakespeare's sonnets
//! is bundled; other corpora are read from JSON files.

#![warn(missing_docs)]

mod error;
mod parse;

use std::path::Path;

pub use error::CorpusError;
pub use parse::{parse_corpus_file, parse_corpus_str};
use serde::Serialize;
use tracing::info;

/// The bundled sonnet corpus, as JSON.
const BUNDLED_CORPUS: &str = include_str!("../data/sonnets.json");

/// A single searchable document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Document title.
    pub title: String,
    /// Lines in document order. Line numbers are 1-based positions in this list.
    pub lines: Vec<String>,
}

impl Document {
    /// Creates a document from a title and its lines.
    pub fn new(title: impl Into<String>, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            title: title.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

/// An ordered, read-only collection of documents.
#[derive(Debug, Clone)]
pub struct Corpus {
    /// Documents in corpus order.
    documents: Vec<Document>,
}

impl Corpus {
    /// Wraps an existing list of documents.
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Returns the bundled sonnet corpus.
    pub fn bundled() -> Self {
        let documents = parse_corpus_str(BUNDLED_CORPUS, Path::new("<bundled>"))
            .expect("bundled corpus should be valid JSON");
        Self::new(documents)
    }

    /// Loads a corpus from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let documents = parse_corpus_file(path)?;
        info!(path = %path.display(), documents = documents.len(), "loaded corpus");
        Ok(Self::new(documents))
    }

    /// Returns the documents in corpus order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the corpus has no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
