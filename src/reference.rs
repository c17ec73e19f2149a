//! Scripture reference parsing.
//!
//! Turns free text like "John 3:16" or "1 cor 13:4" into a structured
//! [`Reference`]. Parsing is deliberately decoupled from existence checks:
//! a parsed reference may point at a chapter or verse the corpus does not
//! have, and it is the accessor's job to return `None` for those.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::canon;

/// Regex matching `Book Chapter:Verse` with a non-greedy book part, so book
/// names that themselves contain digits and spaces ("1 Corinthians") parse.
#[allow(clippy::expect_used)]
static RE_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)\s+(\d+):(\d+)$").expect("valid regex: RE_REFERENCE")
});

/// A parsed scripture reference: a pure value, not a corpus entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Canonical book name (or the raw book text if no alias matched).
    pub book: String,
    /// 1-based chapter number.
    pub chapter: u32,
    /// 1-based verse number.
    pub verse: u32,
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

impl Reference {
    /// Format as a display string (e.g., "John 3:16").
    #[must_use]
    pub fn display(&self) -> String {
        self.to_string()
    }
}

/// Parse a reference string like "John 3:16".
///
/// The book part is resolved through the alias table; chapter and verse are
/// parsed base-10. Returns `None` for anything that does not match the
/// grammar — malformed references are routine input from search boxes, not
/// an error condition. No bounds check against the corpus happens here.
#[must_use]
pub fn parse_reference(text: &str) -> Option<Reference> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let caps = RE_REFERENCE.captures(trimmed)?;
    let book = canon::resolve(caps.get(1)?.as_str()).to_string();
    let chapter: u32 = caps.get(2)?.as_str().parse().ok()?;
    let verse: u32 = caps.get(3)?.as_str().parse().ok()?;

    Some(Reference { book, chapter, verse })
}
