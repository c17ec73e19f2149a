//! Sacred-names lexical substitution.
//!
//! Applies an ordered table of literal phrase replacements to verse text,
//! preserving the casing pattern of each match. Rules are applied
//! longest-phrase-first so "Jesus Christ" wins over "Jesus"; within one
//! application a replacement can itself be rewritten by a later, shorter
//! rule. That cascade is a designed ordering dependency of the table, which
//! also means repeated application is not guaranteed to be a fixed point.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;

use crate::error::{Error, Result};

/// Default sacred-names table as (phrase, replacement) pairs.
///
/// Phrases are matched case-insensitively as whole phrases, so a single
/// entry covers "LORD", "Lord", and "lord".
static DEFAULT_PAIRS: &[(&str, &str)] = &[
    ("Jesus Christ", "Yahusha HaMashiach"),
    ("Christ Jesus", "HaMashiach Yahusha"),
    ("Holy One of Israel", "Qadosh of Yisrael"),
    ("Spirit of God", "Ruach of Elohim"),
    ("Holy Spirit", "Ruach HaQodesh"),
    ("Holy Ghost", "Ruach HaQodesh"),
    ("Lord God", "Yahuah Elohim"),
    ("Jehovah", "Yahuah"),
    ("Jesus", "Yahusha"),
    ("Christ", "Mashiach"),
    ("Lord", "Yahuah"),
    ("God", "Elohim"),
];

/// A single compiled substitution rule.
#[derive(Debug)]
struct Rule {
    phrase: String,
    replacement: String,
    pattern: Regex,
}

/// An ordered, pre-compiled phrase substitution table.
///
/// Construction sorts rules by descending phrase length (ties broken
/// alphabetically, so rule order is deterministic regardless of input
/// order) and compiles one case-insensitive whole-phrase regex per rule
/// with all metacharacters escaped.
#[derive(Debug)]
pub struct SubstitutionTable {
    rules: Vec<Rule>,
}

impl SubstitutionTable {
    /// Build a table from (phrase, replacement) pairs.
    ///
    /// Empty phrases are skipped with a logged warning.
    #[must_use]
    pub fn new<I, S, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut rules: Vec<Rule> = pairs
            .into_iter()
            .filter_map(|(phrase, replacement)| {
                let phrase: String = phrase.into();
                if phrase.trim().is_empty() {
                    warn!("skipping substitution rule with empty phrase");
                    return None;
                }
                let source = format!(r"(?i)\b{}\b", regex::escape(&phrase));
                match Regex::new(&source) {
                    Ok(pattern) => Some(Rule {
                        phrase,
                        replacement: replacement.into(),
                        pattern,
                    }),
                    Err(e) => {
                        warn!(phrase = %phrase, error = %e, "skipping uncompilable substitution rule");
                        None
                    }
                }
            })
            .collect();

        rules.sort_by(|a, b| {
            b.phrase
                .len()
                .cmp(&a.phrase.len())
                .then_with(|| a.phrase.cmp(&b.phrase))
        });

        Self { rules }
    }

    /// Load a table from a JSON object file mapping phrase to replacement.
    pub fn from_json_file(path: &std::path::Path) -> Result<Self> {
        let content =
            fs_err::read_to_string(path).map_err(|e| Error::io(e, Some(path.to_path_buf())))?;
        let pairs: std::collections::HashMap<String, String> = serde_json::from_str(&content)
            .map_err(|e| Error::parse(e.to_string(), Some(path.to_path_buf())))?;
        Ok(Self::new(pairs))
    }

    /// Number of rules in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule to `text`, recasing each replacement to mirror the
    /// casing pattern of the matched text. Pure: the input is not mutated
    /// and equal inputs always produce equal outputs.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for rule in &self.rules {
            out = rule
                .pattern
                .replace_all(&out, |caps: &regex::Captures<'_>| {
                    recase(&caps[0], &rule.replacement)
                })
                .into_owned();
        }
        out
    }
}

impl Default for SubstitutionTable {
    fn default() -> Self {
        Self::new(DEFAULT_PAIRS.iter().map(|&(p, r)| (p, r)))
    }
}

lazy_static! {
    /// Pre-compiled default table.
    static ref DEFAULT_TABLE: SubstitutionTable = SubstitutionTable::default();
}

/// Apply the default sacred-names table to `text`.
#[must_use]
pub fn sacred_names(text: &str) -> String {
    DEFAULT_TABLE.apply(text)
}

/// One-shot application of an ad-hoc table. Compiles the table on every
/// call; hold a [`SubstitutionTable`] instead when applying repeatedly.
#[must_use]
pub fn apply_substitutions<I, S, T>(text: &str, pairs: I) -> String
where
    I: IntoIterator<Item = (S, T)>,
    S: Into<String>,
    T: Into<String>,
{
    SubstitutionTable::new(pairs).apply(text)
}

/// Rewrite `replacement` to mirror the casing pattern of `matched`:
/// all-uppercase, all-lowercase, or title case (first letter uppercase,
/// rest lowercase). Any other mix leaves the replacement verbatim.
fn recase(matched: &str, replacement: &str) -> String {
    let letters: Vec<char> = matched.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.is_empty() {
        return replacement.to_string();
    }

    if letters.iter().all(|c| c.is_uppercase()) {
        return replacement.to_uppercase();
    }
    if letters.iter().all(|c| c.is_lowercase()) {
        return replacement.to_lowercase();
    }

    let title = letters[0].is_uppercase() && letters[1..].iter().all(|c| c.is_lowercase());
    if title {
        let mut out = String::with_capacity(replacement.len());
        let mut first = true;
        for c in replacement.chars() {
            if first && c.is_alphabetic() {
                out.extend(c.to_uppercase());
                first = false;
            } else {
                out.extend(c.to_lowercase());
            }
        }
        return out;
    }

    replacement.to_string()
}
