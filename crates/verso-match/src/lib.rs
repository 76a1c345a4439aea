//! Substring matching and multi-word query evaluation for verso.
//!
//! Matching is exact, case-insensitive and substring-based, and reports overlapping
//! occurrences. A query of several words keeps only the documents in which every word
//! occurs; the per-word results for those documents are merged into one record.
//!
//! # Example
//!
//! ```
//! use verso_corpus::Document;
//! use verso_match::{Span, evaluate};
//!
//! let docs = vec![Document::new("Sonnet One", ["the quick fox", "jumps over"])];
//! let records = evaluate(&docs, &["the"]);
//!
//! assert_eq!(records[0].matches, 1);
//! assert_eq!(records[0].line_matches[0].spans, vec![Span::new(0, 3)]);
//! ```

#![warn(missing_docs)]

mod engine;
mod matcher;
mod record;
mod span;

pub use engine::{MatchedDocument, Query, SearchOutcome, evaluate, evaluate_document};
pub use matcher::{fold, match_document};
pub use record::{LineMatch, MatchRecord};
pub use span::{Span, find_spans, merge_spans};
