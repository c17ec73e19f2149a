//! Corpus data model, loader, and lookup accessors.
//!
//! The corpus is a read-only, fully in-memory set of books. It is built once
//! from raw dataset records and never mutated afterward; a process-wide
//! cached instance is available through [`load`], or callers can own a
//! [`Corpus`] value directly and pass it around.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::canon::{self, BookGroup};
use crate::error::{Error, Result};

/// A single verse: 1-based number plus immutable text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Verse number, unique and contiguous within its chapter.
    pub number: u32,
    /// Original verse text.
    pub text: String,
}

/// An ordered sequence of verses. Addressed 1-based externally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Verses in canonical order, numbered 1..N.
    pub verses: Vec<Verse>,
}

/// A book of the corpus with its canonical identity and content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Canonical slug: lowercase name, whitespace runs collapsed to hyphens.
    pub id: String,
    /// Canonical display name.
    pub name: String,
    /// Grouping (canon, apocrypha, pseudepigrapha).
    pub group: BookGroup,
    /// Chapters in canonical order, addressed 1-based externally.
    pub chapters: Vec<Chapter>,
    /// Lowercase aliases that resolve to this book.
    pub aliases: BTreeSet<String>,
    /// 1-based position in canonical reading order.
    pub order_index: u32,
}

/// Raw dataset record: a book title plus chapters as lists of verse strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawBook {
    /// Book title as it appears in the dataset.
    pub book: String,
    /// Chapters in order; each chapter is one string per verse.
    pub chapters: Vec<Vec<String>>,
}

/// The full, immutable corpus of books in canonical order.
#[derive(Debug, Clone)]
pub struct Corpus {
    books: Vec<Book>,
    by_id: HashMap<String, usize>,
}

/// Build a canonical slug from a book name.
fn slug(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

impl Corpus {
    /// Build a corpus from raw dataset records.
    ///
    /// Malformed records (empty titles, duplicate books) are skipped with a
    /// logged warning rather than failing the whole load; a corpus with
    /// fewer books than expected beats no corpus at all on a read-only path.
    #[must_use]
    pub fn from_records(records: Vec<RawBook>) -> Self {
        let total_known = canon::all_titles().last().map_or(0, |(_, _, order)| order);
        let mut unmatched = 0u32;
        let mut books: Vec<Book> = Vec::with_capacity(records.len());

        for record in records {
            let raw_name = record.book.trim();
            if raw_name.is_empty() {
                warn!("skipping dataset record with empty book title");
                continue;
            }

            let (name, group, order_index) = match canon::match_exact(raw_name)
                .or_else(|| canon::match_exact(canon::resolve(raw_name)))
            {
                Some((name, group, order)) => (name.to_string(), group, order),
                None => match canon::match_containment(raw_name) {
                    Some((name, group, order)) => {
                        warn!(raw = raw_name, canonical = name, "book title matched by containment");
                        (name.to_string(), group, order)
                    }
                    None => {
                        warn!(raw = raw_name, "book title not in any known list; kept verbatim");
                        unmatched += 1;
                        (raw_name.to_string(), BookGroup::Canon, total_known + unmatched)
                    }
                },
            };

            let id = slug(&name);
            if books.iter().any(|b| b.id == id) {
                warn!(id = %id, "duplicate book in dataset; keeping first occurrence");
                continue;
            }

            let chapters = record
                .chapters
                .into_iter()
                .map(|verse_texts| Chapter {
                    verses: verse_texts
                        .into_iter()
                        .zip(1u32..)
                        .map(|(text, number)| Verse { number, text })
                        .collect(),
                })
                .collect();

            books.push(Book {
                aliases: canon::aliases_for(&name),
                id,
                name,
                group,
                chapters,
                order_index,
            });
        }

        books.sort_by_key(|b| b.order_index);
        let by_id = books
            .iter()
            .enumerate()
            .map(|(i, b)| (b.id.clone(), i))
            .collect();

        Self { books, by_id }
    }

    /// All books in canonical order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Books filtered by group name (case-insensitive), or all books when
    /// `group` is `None`. An unrecognized group name matches nothing.
    #[must_use]
    pub fn get_books(&self, group: Option<&str>) -> Vec<&Book> {
        match group {
            None => self.books.iter().collect(),
            Some(name) => match BookGroup::parse(name) {
                Some(g) => self.books.iter().filter(|b| b.group == g).collect(),
                None => Vec::new(),
            },
        }
    }

    /// Look up a book by canonical id, alias, or display name.
    ///
    /// Tries an exact id match first, then resolves the key through the
    /// alias table and matches by canonical name or alias-set membership.
    /// `None` is the normal not-found outcome, never an error.
    #[must_use]
    pub fn get_book(&self, key: &str) -> Option<&Book> {
        let trimmed = key.trim();
        if let Some(&idx) = self.by_id.get(trimmed) {
            return Some(&self.books[idx]);
        }

        let key_lower = trimmed.to_lowercase();
        let resolved_lower = canon::resolve(trimmed).to_lowercase();
        self.books.iter().find(|b| {
            b.name.to_lowercase() == resolved_lower
                || b.aliases.contains(&key_lower)
                || b.aliases.contains(&resolved_lower)
        })
    }

    /// Look up a chapter by book key and 1-based chapter number.
    #[must_use]
    pub fn get_chapter(&self, book_key: &str, chapter: u32) -> Option<(&Book, &Chapter)> {
        let book = self.get_book(book_key)?;
        let idx = usize::try_from(chapter).ok()?.checked_sub(1)?;
        let chap = book.chapters.get(idx)?;
        Some((book, chap))
    }

    /// Look up a single verse by book key, chapter number, and verse number.
    #[must_use]
    pub fn get_verse(
        &self,
        book_key: &str,
        chapter: u32,
        verse: u32,
    ) -> Option<(&Book, &Chapter, &Verse)> {
        let (book, chap) = self.get_chapter(book_key, chapter)?;
        let v = chap.verses.iter().find(|v| v.number == verse)?;
        Some((book, chap, v))
    }
}

/// Process-wide cached corpus.
static CORPUS: OnceLock<Corpus> = OnceLock::new();

/// Build and cache the process-wide corpus.
///
/// The first caller pays the conversion cost; later calls return the cached
/// instance and ignore their `records` argument. Concurrent first callers
/// are serialized by [`OnceLock`], so exactly one corpus is ever built.
pub fn load(records: Vec<RawBook>) -> &'static Corpus {
    CORPUS.get_or_init(move || Corpus::from_records(records))
}

/// The cached corpus, if [`load`] has run.
#[must_use]
pub fn global() -> Option<&'static Corpus> {
    CORPUS.get()
}

/// Parse a JSON dataset: an array of `{ "book": ..., "chapters": [[...]] }`
/// records.
///
/// Decoding is lenient record-by-record: an element that does not match the
/// record shape is skipped with a logged warning. Only a top level that is
/// not a JSON array is an error.
pub fn parse_dataset(json: &str) -> Result<Vec<RawBook>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(json)
        .map_err(|e| Error::Dataset(format!("expected a JSON array of book records: {e}")))?;

    let mut records = Vec::with_capacity(values.len());
    for (i, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<RawBook>(value) {
            Ok(record) => records.push(record),
            Err(e) => warn!(index = i, error = %e, "skipping malformed dataset record"),
        }
    }
    Ok(records)
}

/// Read and parse a JSON dataset file.
pub fn load_dataset_file(path: &Path) -> Result<Vec<RawBook>> {
    let content =
        fs_err::read_to_string(path).map_err(|e| Error::io(e, Some(path.to_path_buf())))?;
    parse_dataset(&content).map_err(|e| Error::parse(e.to_string(), Some(path.to_path_buf())))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn sample_records() -> Vec<RawBook> {
        vec![
            RawBook {
                book: "John".to_string(),
                chapters: vec![
                    vec!["In the beginning was the Word.".to_string()],
                    vec![
                        "On the third day a wedding took place.".to_string(),
                        "Jesus and his disciples were invited.".to_string(),
                    ],
                ],
            },
            RawBook {
                book: "genesis".to_string(),
                chapters: vec![vec![
                    "In the beginning God created the heaven and the earth.".to_string(),
                    "And the earth was without form, and void.".to_string(),
                ]],
            },
        ]
    }

    #[test]
    fn loader_canonicalizes_and_orders() {
        let corpus = Corpus::from_records(sample_records());
        let names: Vec<&str> = corpus.books().iter().map(|b| b.name.as_str()).collect();
        // Genesis (order 1) sorts before John (order 43) despite input order.
        assert_eq!(names, vec!["Genesis", "John"]);
        assert_eq!(corpus.books()[0].id, "genesis");
        assert_eq!(corpus.books()[0].order_index, 1);
        assert_eq!(corpus.books()[0].group, BookGroup::Canon);
    }

    #[test]
    fn loader_numbers_verses_from_one() {
        let corpus = Corpus::from_records(sample_records());
        let john = corpus.get_book("John").unwrap();
        assert_eq!(john.chapters.len(), 2);
        let numbers: Vec<u32> = john.chapters[1].verses.iter().map(|v| v.number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn loader_collects_aliases() {
        let corpus = Corpus::from_records(sample_records());
        let genesis = corpus.get_book("genesis").unwrap();
        assert!(genesis.aliases.contains("gen"));
        assert!(genesis.aliases.contains("genesis"));
    }

    #[test]
    fn loader_skips_empty_titles() {
        let mut records = sample_records();
        records.push(RawBook { book: "   ".to_string(), chapters: vec![] });
        let corpus = Corpus::from_records(records);
        assert_eq!(corpus.books().len(), 2);
    }

    #[test]
    fn loader_keeps_first_duplicate() {
        let mut records = sample_records();
        records.push(RawBook {
            book: "John".to_string(),
            chapters: vec![vec!["duplicate".to_string()]],
        });
        let corpus = Corpus::from_records(records);
        let john = corpus.get_book("john").unwrap();
        assert_eq!(john.chapters.len(), 2);
    }

    #[test]
    fn loader_resolves_aliased_titles() {
        let records = vec![RawBook {
            book: "Song of Songs".to_string(),
            chapters: vec![vec!["The song of songs, which is Solomon's.".to_string()]],
        }];
        let corpus = Corpus::from_records(records);
        assert_eq!(corpus.books()[0].name, "Song of Solomon");
    }

    #[test]
    fn loader_slugs_multiword_names() {
        let records = vec![RawBook {
            book: "Song of Solomon".to_string(),
            chapters: vec![vec!["The song of songs.".to_string()]],
        }];
        let corpus = Corpus::from_records(records);
        assert_eq!(corpus.books()[0].id, "song-of-solomon");
    }

    #[test]
    fn loader_keeps_unknown_titles_verbatim_after_canon() {
        let records = vec![
            RawBook {
                book: "Genesis".to_string(),
                chapters: vec![vec!["v1".to_string()]],
            },
            RawBook {
                book: "Chronicles of the Kings of Media".to_string(),
                chapters: vec![vec!["v1".to_string()]],
            },
        ];
        let corpus = Corpus::from_records(records);
        let unknown = corpus.books().last().unwrap();
        assert_eq!(unknown.name, "Chronicles of the Kings of Media");
        assert!(unknown.order_index > u32::try_from(canon::all_titles().count()).unwrap());
        assert!(unknown.aliases.is_empty());
    }

    #[test]
    fn get_book_by_id_alias_and_name() {
        let corpus = Corpus::from_records(sample_records());
        let by_id = corpus.get_book("genesis").unwrap();
        let by_alias = corpus.get_book("Gen").unwrap();
        let by_name = corpus.get_book("Genesis").unwrap();
        assert_eq!(by_id, by_alias);
        assert_eq!(by_id, by_name);
        assert!(corpus.get_book("Hezekiah").is_none());
    }

    #[test]
    fn get_chapter_bounds() {
        let corpus = Corpus::from_records(sample_records());
        assert!(corpus.get_chapter("genesis", 1).is_some());
        assert!(corpus.get_chapter("genesis", 0).is_none());
        assert!(corpus.get_chapter("genesis", 999).is_none());
        assert!(corpus.get_chapter("no-such-book", 1).is_none());
    }

    #[test]
    fn get_verse_layers_on_get_chapter() {
        let corpus = Corpus::from_records(sample_records());
        let (_, chap) = corpus.get_chapter("genesis", 1).unwrap();
        let (_, _, verse) = corpus.get_verse("genesis", 1, 1).unwrap();
        assert_eq!(verse, &chap.verses[0]);
        assert!(corpus.get_verse("genesis", 999, 1).is_none());
        assert!(corpus.get_verse("genesis", 1, 9999).is_none());
    }

    #[test]
    fn get_books_filters_by_group() {
        let mut records = sample_records();
        records.push(RawBook {
            book: "Enoch".to_string(),
            chapters: vec![vec!["The words of the blessing of Enoch.".to_string()]],
        });
        let corpus = Corpus::from_records(records);

        assert_eq!(corpus.get_books(None).len(), 3);
        assert_eq!(corpus.get_books(Some("canon")).len(), 2);
        assert_eq!(corpus.get_books(Some("Pseudepigrapha")).len(), 1);
        assert!(corpus.get_books(Some("unknown-group")).is_empty());
    }

    #[test]
    fn get_books_is_stable_across_calls() {
        let corpus = Corpus::from_records(sample_records());
        let first: Vec<String> = corpus.get_books(None).iter().map(|b| b.id.clone()).collect();
        let second: Vec<String> = corpus.get_books(None).iter().map(|b| b.id.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn parse_dataset_skips_malformed_records() {
        let json = r#"[
            { "book": "Genesis", "chapters": [["v1", "v2"]] },
            { "book": "Exodus" },
            { "chapters": [["v1"]] },
            42
        ]"#;
        let records = parse_dataset(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].book, "Genesis");
    }

    #[test]
    fn parse_dataset_rejects_non_array() {
        assert!(parse_dataset(r#"{ "book": "Genesis" }"#).is_err());
        assert!(parse_dataset("not json").is_err());
    }
}
