//! Canonical book lists and book-name alias resolution.
//!
//! The canon is the fixed, ordered 66-book list used to canonicalize book
//! identity. Apocrypha and pseudepigrapha titles are carried in separate
//! lists and ordered after the canon. The alias table maps case-insensitive
//! name variants (abbreviations, "1/2/3" and "I/II/III" numbering styles,
//! full names) to exactly one canonical name.

use std::collections::{BTreeSet, HashMap};

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::constants::corpus::CANON_SIZE;

/// Grouping of a book within the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookGroup {
    /// The 66-book standard canon.
    #[default]
    Canon,
    /// Deuterocanonical books.
    Apocrypha,
    /// Books outside both canon and apocrypha (Enoch, Jubilees, Jasher).
    Pseudepigrapha,
}

impl BookGroup {
    /// Parse a group name case-insensitively.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "canon" => Some(Self::Canon),
            "apocrypha" => Some(Self::Apocrypha),
            "pseudepigrapha" => Some(Self::Pseudepigrapha),
            _ => None,
        }
    }

    /// Returns the lowercase name of this group.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Canon => "canon",
            Self::Apocrypha => "apocrypha",
            Self::Pseudepigrapha => "pseudepigrapha",
        }
    }
}

/// The 66 canonical book names in reading order.
pub static CANON: [&str; CANON_SIZE] = [
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Song of Solomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

/// Deuterocanonical titles, ordered after the canon.
pub static APOCRYPHA: [&str; 10] = [
    "Tobit",
    "Judith",
    "Wisdom of Solomon",
    "Sirach",
    "Baruch",
    "1 Maccabees",
    "2 Maccabees",
    "1 Esdras",
    "2 Esdras",
    "Prayer of Manasseh",
];

/// Pseudepigraphal titles, ordered last.
pub static PSEUDEPIGRAPHA: [&str; 3] = ["Enoch", "Jubilees", "Jasher"];

/// Alias table as a static array of (alias, canonical name) pairs.
///
/// Keys are lowercase and must be unique across the whole table; uniqueness
/// is asserted by a test rather than checked at runtime.
static ALIAS_PAIRS: &[(&str, &str)] = &[
    // Pentateuch
    ("genesis", "Genesis"),
    ("gen", "Genesis"),
    ("ge", "Genesis"),
    ("exodus", "Exodus"),
    ("exod", "Exodus"),
    ("ex", "Exodus"),
    ("leviticus", "Leviticus"),
    ("lev", "Leviticus"),
    ("numbers", "Numbers"),
    ("num", "Numbers"),
    ("deuteronomy", "Deuteronomy"),
    ("deut", "Deuteronomy"),
    ("dt", "Deuteronomy"),
    // History
    ("joshua", "Joshua"),
    ("josh", "Joshua"),
    ("judges", "Judges"),
    ("judg", "Judges"),
    ("jdg", "Judges"),
    ("ruth", "Ruth"),
    ("1 samuel", "1 Samuel"),
    ("1 sam", "1 Samuel"),
    ("1sam", "1 Samuel"),
    ("i samuel", "1 Samuel"),
    ("i sam", "1 Samuel"),
    ("first samuel", "1 Samuel"),
    ("2 samuel", "2 Samuel"),
    ("2 sam", "2 Samuel"),
    ("2sam", "2 Samuel"),
    ("ii samuel", "2 Samuel"),
    ("ii sam", "2 Samuel"),
    ("second samuel", "2 Samuel"),
    ("1 kings", "1 Kings"),
    ("1 kgs", "1 Kings"),
    ("1kings", "1 Kings"),
    ("i kings", "1 Kings"),
    ("i kgs", "1 Kings"),
    ("first kings", "1 Kings"),
    ("2 kings", "2 Kings"),
    ("2 kgs", "2 Kings"),
    ("2kings", "2 Kings"),
    ("ii kings", "2 Kings"),
    ("ii kgs", "2 Kings"),
    ("second kings", "2 Kings"),
    ("1 chronicles", "1 Chronicles"),
    ("1 chron", "1 Chronicles"),
    ("1 chr", "1 Chronicles"),
    ("i chronicles", "1 Chronicles"),
    ("first chronicles", "1 Chronicles"),
    ("2 chronicles", "2 Chronicles"),
    ("2 chron", "2 Chronicles"),
    ("2 chr", "2 Chronicles"),
    ("ii chronicles", "2 Chronicles"),
    ("second chronicles", "2 Chronicles"),
    ("ezra", "Ezra"),
    ("nehemiah", "Nehemiah"),
    ("neh", "Nehemiah"),
    ("esther", "Esther"),
    ("esth", "Esther"),
    // Wisdom and poetry
    ("job", "Job"),
    ("psalms", "Psalms"),
    ("psalm", "Psalms"),
    ("psa", "Psalms"),
    ("ps", "Psalms"),
    ("proverbs", "Proverbs"),
    ("prov", "Proverbs"),
    ("pr", "Proverbs"),
    ("ecclesiastes", "Ecclesiastes"),
    ("eccl", "Ecclesiastes"),
    ("ecc", "Ecclesiastes"),
    ("song of solomon", "Song of Solomon"),
    ("song of songs", "Song of Solomon"),
    ("song", "Song of Solomon"),
    ("sos", "Song of Solomon"),
    ("canticles", "Song of Solomon"),
    // Major prophets
    ("isaiah", "Isaiah"),
    ("isa", "Isaiah"),
    ("jeremiah", "Jeremiah"),
    ("jer", "Jeremiah"),
    ("lamentations", "Lamentations"),
    ("lam", "Lamentations"),
    ("ezekiel", "Ezekiel"),
    ("ezek", "Ezekiel"),
    ("eze", "Ezekiel"),
    ("daniel", "Daniel"),
    ("dan", "Daniel"),
    // Minor prophets
    ("hosea", "Hosea"),
    ("hos", "Hosea"),
    ("joel", "Joel"),
    ("amos", "Amos"),
    ("obadiah", "Obadiah"),
    ("obad", "Obadiah"),
    ("jonah", "Jonah"),
    ("jon", "Jonah"),
    ("micah", "Micah"),
    ("mic", "Micah"),
    ("nahum", "Nahum"),
    ("nah", "Nahum"),
    ("habakkuk", "Habakkuk"),
    ("hab", "Habakkuk"),
    ("zephaniah", "Zephaniah"),
    ("zeph", "Zephaniah"),
    ("haggai", "Haggai"),
    ("hag", "Haggai"),
    ("zechariah", "Zechariah"),
    ("zech", "Zechariah"),
    ("malachi", "Malachi"),
    ("mal", "Malachi"),
    // Gospels and Acts
    ("matthew", "Matthew"),
    ("matt", "Matthew"),
    ("mt", "Matthew"),
    ("mark", "Mark"),
    ("mk", "Mark"),
    ("luke", "Luke"),
    ("lk", "Luke"),
    ("john", "John"),
    ("jn", "John"),
    ("acts", "Acts"),
    ("acts of the apostles", "Acts"),
    // Epistles
    ("romans", "Romans"),
    ("rom", "Romans"),
    ("1 corinthians", "1 Corinthians"),
    ("1 cor", "1 Corinthians"),
    ("1cor", "1 Corinthians"),
    ("i corinthians", "1 Corinthians"),
    ("i cor", "1 Corinthians"),
    ("first corinthians", "1 Corinthians"),
    ("2 corinthians", "2 Corinthians"),
    ("2 cor", "2 Corinthians"),
    ("2cor", "2 Corinthians"),
    ("ii corinthians", "2 Corinthians"),
    ("ii cor", "2 Corinthians"),
    ("second corinthians", "2 Corinthians"),
    ("galatians", "Galatians"),
    ("gal", "Galatians"),
    ("ephesians", "Ephesians"),
    ("eph", "Ephesians"),
    ("philippians", "Philippians"),
    ("phil", "Philippians"),
    ("php", "Philippians"),
    ("colossians", "Colossians"),
    ("col", "Colossians"),
    ("1 thessalonians", "1 Thessalonians"),
    ("1 thess", "1 Thessalonians"),
    ("1thess", "1 Thessalonians"),
    ("i thessalonians", "1 Thessalonians"),
    ("first thessalonians", "1 Thessalonians"),
    ("2 thessalonians", "2 Thessalonians"),
    ("2 thess", "2 Thessalonians"),
    ("2thess", "2 Thessalonians"),
    ("ii thessalonians", "2 Thessalonians"),
    ("second thessalonians", "2 Thessalonians"),
    ("1 timothy", "1 Timothy"),
    ("1 tim", "1 Timothy"),
    ("1tim", "1 Timothy"),
    ("i timothy", "1 Timothy"),
    ("first timothy", "1 Timothy"),
    ("2 timothy", "2 Timothy"),
    ("2 tim", "2 Timothy"),
    ("2tim", "2 Timothy"),
    ("ii timothy", "2 Timothy"),
    ("second timothy", "2 Timothy"),
    ("titus", "Titus"),
    ("philemon", "Philemon"),
    ("philem", "Philemon"),
    ("phlm", "Philemon"),
    ("hebrews", "Hebrews"),
    ("heb", "Hebrews"),
    ("james", "James"),
    ("jas", "James"),
    ("1 peter", "1 Peter"),
    ("1 pet", "1 Peter"),
    ("1pet", "1 Peter"),
    ("i peter", "1 Peter"),
    ("first peter", "1 Peter"),
    ("2 peter", "2 Peter"),
    ("2 pet", "2 Peter"),
    ("2pet", "2 Peter"),
    ("ii peter", "2 Peter"),
    ("second peter", "2 Peter"),
    ("1 john", "1 John"),
    ("1 jn", "1 John"),
    ("1john", "1 John"),
    ("i john", "1 John"),
    ("first john", "1 John"),
    ("2 john", "2 John"),
    ("2 jn", "2 John"),
    ("2john", "2 John"),
    ("ii john", "2 John"),
    ("second john", "2 John"),
    ("3 john", "3 John"),
    ("3 jn", "3 John"),
    ("3john", "3 John"),
    ("iii john", "3 John"),
    ("third john", "3 John"),
    ("jude", "Jude"),
    ("revelation", "Revelation"),
    ("revelations", "Revelation"),
    ("rev", "Revelation"),
    ("apocalypse", "Revelation"),
    // Apocrypha
    ("tobit", "Tobit"),
    ("tob", "Tobit"),
    ("judith", "Judith"),
    ("jdt", "Judith"),
    ("wisdom of solomon", "Wisdom of Solomon"),
    ("wisdom", "Wisdom of Solomon"),
    ("wis", "Wisdom of Solomon"),
    ("sirach", "Sirach"),
    ("sir", "Sirach"),
    ("ecclesiasticus", "Sirach"),
    ("baruch", "Baruch"),
    ("bar", "Baruch"),
    ("1 maccabees", "1 Maccabees"),
    ("1 macc", "1 Maccabees"),
    ("1macc", "1 Maccabees"),
    ("i maccabees", "1 Maccabees"),
    ("first maccabees", "1 Maccabees"),
    ("2 maccabees", "2 Maccabees"),
    ("2 macc", "2 Maccabees"),
    ("2macc", "2 Maccabees"),
    ("ii maccabees", "2 Maccabees"),
    ("second maccabees", "2 Maccabees"),
    ("1 esdras", "1 Esdras"),
    ("1 esd", "1 Esdras"),
    ("i esdras", "1 Esdras"),
    ("2 esdras", "2 Esdras"),
    ("2 esd", "2 Esdras"),
    ("ii esdras", "2 Esdras"),
    ("prayer of manasseh", "Prayer of Manasseh"),
    ("manasseh", "Prayer of Manasseh"),
    // Pseudepigrapha
    ("enoch", "Enoch"),
    ("1 enoch", "Enoch"),
    ("jubilees", "Jubilees"),
    ("jub", "Jubilees"),
    ("jasher", "Jasher"),
    ("book of jasher", "Jasher"),
];

lazy_static! {
    /// Alias lookup map built from [`ALIAS_PAIRS`].
    static ref ALIASES: HashMap<&'static str, &'static str> =
        ALIAS_PAIRS.iter().copied().collect();
}

/// Resolve a user-typed book name or abbreviation to its canonical name.
///
/// Lookup is case-insensitive; numbered books are retried with internal
/// spaces stripped ("1john" and "1 john" both resolve). If nothing matches,
/// the input is returned unchanged and the caller decides whether that
/// constitutes a miss.
#[must_use]
pub fn resolve(name: &str) -> &str {
    let lower = name.trim().to_lowercase();

    if let Some(&canonical) = ALIASES.get(lower.as_str()) {
        return canonical;
    }

    let no_space: String = lower.split_whitespace().collect();
    if let Some(&canonical) = ALIASES.get(no_space.as_str()) {
        return canonical;
    }

    name
}

/// All known aliases for a canonical book name, lowercased.
#[must_use]
pub fn aliases_for(canonical: &str) -> BTreeSet<String> {
    ALIAS_PAIRS
        .iter()
        .filter(|(_, target)| *target == canonical)
        .map(|(alias, _)| (*alias).to_string())
        .collect()
}

/// Iterate every known title with its group and 1-based reading-order index.
pub fn all_titles() -> impl Iterator<Item = (&'static str, BookGroup, u32)> {
    let canon = CANON.iter().map(|&n| (n, BookGroup::Canon));
    let apoc = APOCRYPHA.iter().map(|&n| (n, BookGroup::Apocrypha));
    let pseud = PSEUDEPIGRAPHA.iter().map(|&n| (n, BookGroup::Pseudepigrapha));
    canon
        .chain(apoc)
        .chain(pseud)
        .zip(1u32..)
        .map(|((name, group), order)| (name, group, order))
}

/// Exact case-insensitive match of a raw title against the known lists.
#[must_use]
pub fn match_exact(raw: &str) -> Option<(&'static str, BookGroup, u32)> {
    let lower = raw.trim().to_lowercase();
    all_titles().find(|(name, _, _)| name.to_lowercase() == lower)
}

/// Containment fallback: the raw title contains, or is contained in, a known
/// title. Restricted to raw names of at least four characters so that short
/// junk input cannot collide with an unrelated longer title.
#[must_use]
pub fn match_containment(raw: &str) -> Option<(&'static str, BookGroup, u32)> {
    let lower = raw.trim().to_lowercase();
    if lower.len() < 4 {
        return None;
    }
    all_titles().find(|(name, _, _)| {
        let known = name.to_lowercase();
        known.contains(&lower) || lower.contains(&known)
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::collections::HashSet;

    #[test]
    fn alias_keys_are_unique_and_lowercase() {
        let mut seen = HashSet::new();
        for (alias, canonical) in ALIAS_PAIRS {
            assert_eq!(
                *alias,
                alias.to_lowercase(),
                "alias {alias:?} must be lowercase"
            );
            assert!(
                seen.insert(*alias),
                "alias {alias:?} appears twice (maps to {canonical:?})"
            );
        }
    }

    #[test]
    fn aliases_target_known_titles() {
        let known: HashSet<&str> = all_titles().map(|(name, _, _)| name).collect();
        for (alias, canonical) in ALIAS_PAIRS {
            assert!(
                known.contains(canonical),
                "alias {alias:?} targets unknown title {canonical:?}"
            );
        }
    }

    #[test]
    fn resolve_is_case_insensitive() {
        assert_eq!(resolve("GEN"), "Genesis");
        assert_eq!(resolve("Gen"), "Genesis");
        assert_eq!(resolve("  psalm  "), "Psalms");
    }

    #[test]
    fn resolve_numbered_variants() {
        assert_eq!(resolve("1 Cor"), "1 Corinthians");
        assert_eq!(resolve("1cor"), "1 Corinthians");
        assert_eq!(resolve("I Corinthians"), "1 Corinthians");
        assert_eq!(resolve("First Corinthians"), "1 Corinthians");
        assert_eq!(resolve("1john"), "1 John");
    }

    #[test]
    fn resolve_unknown_returns_input() {
        assert_eq!(resolve("Hezekiah"), "Hezekiah");
        assert_eq!(resolve(""), "");
    }

    #[test]
    fn canon_has_66_unique_titles() {
        let unique: HashSet<&str> = CANON.iter().copied().collect();
        assert_eq!(unique.len(), CANON_SIZE);
    }

    #[test]
    fn order_indices_are_contiguous() {
        let indices: Vec<u32> = all_titles().map(|(_, _, i)| i).collect();
        let expected: Vec<u32> = (1..).take(indices.len()).collect();
        assert_eq!(indices, expected);
    }

    #[test]
    fn match_exact_finds_canon_and_apocrypha() {
        let (name, group, order) = match_exact("genesis").unwrap();
        assert_eq!(name, "Genesis");
        assert_eq!(group, BookGroup::Canon);
        assert_eq!(order, 1);

        let (name, group, _) = match_exact("TOBIT").unwrap();
        assert_eq!(name, "Tobit");
        assert_eq!(group, BookGroup::Apocrypha);
    }

    #[test]
    fn containment_requires_four_chars() {
        assert!(match_containment("Jo").is_none());
        let (name, _, _) = match_containment("The Book of Genesis").unwrap();
        assert_eq!(name, "Genesis");
    }
}
