//! Library constants.
//!
//! Centralizes magic numbers and configuration defaults for better
//! maintainability.

/// Search and pagination constants.
pub mod search {
    /// Maximum snippet length in characters before truncation.
    pub const SNIPPET_LENGTH: usize = 100;

    /// Ellipsis appended to truncated snippets.
    pub const SNIPPET_ELLIPSIS: &str = "...";

    /// Default number of results per page.
    pub const DEFAULT_LIMIT: usize = 50;
}

/// Corpus shape constants.
pub mod corpus {
    /// Number of books in the standard canon.
    pub const CANON_SIZE: usize = 66;
}
