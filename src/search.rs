//! Linear verse search with pagination and snippeting.
//!
//! A case-insensitive substring scan over the corpus in canonical order:
//! books, then chapters, then verses. There is only one score tier
//! (match / no match), so the fixed scan order is the result order.

use serde::{Deserialize, Serialize};

use crate::constants::search::{DEFAULT_LIMIT, SNIPPET_ELLIPSIS, SNIPPET_LENGTH};
use crate::corpus::{Book, Corpus};
use crate::names;
use crate::reference::Reference;

/// Options scoping and paginating a search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Restrict to a group ("canon", "apocrypha", "pseudepigrapha").
    pub scope: Option<String>,
    /// Restrict to a single book by id, alias, or name.
    pub book: Option<String>,
    /// Page size; defaults to [`DEFAULT_LIMIT`].
    pub limit: Option<usize>,
    /// Number of leading matches to skip.
    pub offset: usize,
    /// Return text and snippet with the sacred-names transform applied.
    pub sacred_names: bool,
}

/// A single verse match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Formatted "Book Chapter:Verse" reference string.
    #[serde(rename = "ref")]
    pub reference: String,
    /// Canonical book name.
    pub book: String,
    /// Canonical book slug.
    pub book_id: String,
    /// 1-based chapter number.
    pub chapter: u32,
    /// Verse number.
    pub verse: u32,
    /// Full verse text.
    pub text: String,
    /// Truncated preview of the verse text.
    pub snippet: String,
    /// Relevance score; substring match has a single tier.
    pub score: u32,
}

/// A page of search results plus the echo of the query and paging inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The `[offset, offset + limit)` slice of all matches.
    pub results: Vec<SearchResult>,
    /// Full match count before pagination.
    pub total: usize,
    /// Page size applied.
    pub limit: usize,
    /// Offset applied.
    pub offset: usize,
    /// The query as given.
    pub query: String,
}

/// Truncate verse text to the fixed snippet length, appending an ellipsis
/// if anything was cut. Counts characters, not bytes.
fn make_snippet(text: &str) -> String {
    match text.char_indices().nth(SNIPPET_LENGTH) {
        None => text.to_string(),
        Some((byte_end, _)) => format!("{}{}", &text[..byte_end], SNIPPET_ELLIPSIS),
    }
}

/// Search the corpus for verses containing `query`, case-insensitively.
///
/// An empty (or all-whitespace) query returns an empty response rather than
/// matching every verse. A scope or book filter that matches nothing in the
/// corpus likewise yields an empty response, never an error.
#[must_use]
pub fn search(corpus: &Corpus, query: &str, options: &SearchOptions) -> SearchResponse {
    let limit = options.limit.unwrap_or(DEFAULT_LIMIT);
    let offset = options.offset;
    let empty = |query: &str| SearchResponse {
        results: Vec::new(),
        total: 0,
        limit,
        offset,
        query: query.to_string(),
    };

    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return empty(query);
    }

    let books: Vec<&Book> = match &options.book {
        Some(key) => match corpus.get_book(key) {
            Some(book) => vec![book],
            None => return empty(query),
        },
        None => corpus.get_books(options.scope.as_deref()),
    };

    let mut matches = Vec::new();
    for book in books {
        for (chapter, chapter_num) in book.chapters.iter().zip(1u32..) {
            for verse in &chapter.verses {
                if !verse.text.to_lowercase().contains(&needle) {
                    continue;
                }
                let text = if options.sacred_names {
                    names::sacred_names(&verse.text)
                } else {
                    verse.text.clone()
                };
                let reference = Reference {
                    book: book.name.clone(),
                    chapter: chapter_num,
                    verse: verse.number,
                };
                matches.push(SearchResult {
                    reference: reference.display(),
                    book: reference.book,
                    book_id: book.id.clone(),
                    chapter: reference.chapter,
                    verse: reference.verse,
                    snippet: make_snippet(&text),
                    text,
                    score: 1,
                });
            }
        }
    }

    let total = matches.len();
    let results = matches.into_iter().skip(offset).take(limit).collect();

    SearchResponse {
        results,
        total,
        limit,
        offset,
        query: query.to_string(),
    }
}
