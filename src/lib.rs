//! `concordance` - scripture corpus, reference resolution, and verse search.
//!
//! This crate normalizes a book/chapter/verse dataset into an immutable
//! in-memory corpus, resolves user-typed book names and abbreviations to
//! canonical identity, parses free-text references ("John 3:16"), searches
//! verse text with ranked pagination and snippets, and applies a
//! case-preserving sacred-names substitution to verse text.
//!
//! All lookups follow one contract: `None` on not-found, never an error.
//! After the corpus is built it is never mutated, so every read path is
//! safe for unbounded concurrent access.

pub mod canon;
pub mod config;
pub mod constants;
pub mod corpus;
pub mod error;
pub mod names;
pub mod reference;
pub mod search;

pub use canon::{resolve, BookGroup};
pub use config::Config;
pub use corpus::{load, Book, Chapter, Corpus, RawBook, Verse};
pub use error::{Error, Result};
pub use names::{apply_substitutions, sacred_names, SubstitutionTable};
pub use reference::{parse_reference, Reference};
pub use search::{search, SearchOptions, SearchResponse, SearchResult};
