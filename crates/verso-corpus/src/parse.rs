//! JSON corpus parsing.
//!
//! A corpus file is a JSON array of `{ "title": ..., "lines": [...] }` objects. Titles
//! may be strings or integers; integer titles are converted to their decimal form.

use std::{fs, path::Path};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::{CorpusError, Document};

/// A document entry exactly as it appears in the JSON file.
#[derive(Debug, Deserialize)]
struct RawDocument {
    /// Title, either textual or numeric.
    title: RawTitle,
    /// Lines in document order.
    #[serde(default)]
    lines: Vec<String>,
}

/// Title representations accepted in corpus files.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTitle {
    /// A plain string title.
    Text(String),
    /// A numeric title such as a sonnet number.
    Number(i64),
}

impl From<RawDocument> for Document {
    fn from(raw: RawDocument) -> Self {
        let title = match raw.title {
            RawTitle::Text(text) => text,
            RawTitle::Number(n) => n.to_string(),
        };
        Self {
            title,
            lines: raw.lines,
        }
    }
}

/// Reads and parses a corpus file from disk.
pub fn parse_corpus_file(path: &Path) -> Result<Vec<Document>, CorpusError> {
    let contents = fs::read_to_string(path).map_err(|source| CorpusError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let documents = parse_corpus_str(&contents, path)?;
    if documents.is_empty() {
        return Err(CorpusError::Empty {
            path: path.to_path_buf(),
        });
    }

    for doc in documents.iter().filter(|doc| doc.lines.is_empty()) {
        warn!(path = %path.display(), title = %doc.title, "corpus document has no lines");
    }

    debug!(path = %path.display(), documents = documents.len(), "parsed corpus file");
    Ok(documents)
}

/// Parses corpus JSON from a string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_corpus_str(contents: &str, path: &Path) -> Result<Vec<Document>, CorpusError> {
    let raw: Vec<RawDocument> =
        serde_json::from_str(contents).map_err(|source| CorpusError::ParseJson {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(raw.into_iter().map(Document::from).collect())
}
