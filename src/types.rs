use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single verse in display-ready form.
///
/// `book` holds the resolved display name, or the raw abbreviation when the
/// book table has no entry for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerseIdentity {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
}

impl VerseIdentity {
    pub fn new(book: impl Into<String>, chapter: u32, verse: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse,
        }
    }

    /// Returns the aggregation key for this verse.
    pub fn source_key(&self) -> SourceKey {
        SourceKey::new(&self.book, self.chapter, self.verse)
    }

    /// Returns `true` if both verses lie in the same book and chapter.
    pub fn same_chapter(&self, other: &VerseIdentity) -> bool {
        self.book == other.book && self.chapter == other.chapter
    }
}

impl fmt::Display for VerseIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// Aggregation key of the form `book|chapter|verse`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceKey(String);

impl SourceKey {
    pub fn new(book: &str, chapter: u32, verse: u32) -> Self {
        SourceKey(format!("{}|{}|{}", book, chapter, verse))
    }
}

impl fmt::Display for SourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The finished aggregate: source key to ordered target verses.
///
/// Keys are kept sorted so that serialization is deterministic; the target
/// list under each key keeps the order in which targets were ingested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CrossReferenceIndex {
    entries: BTreeMap<SourceKey, Vec<VerseIdentity>>,
}

impl CrossReferenceIndex {
    pub(crate) fn from_entries(entries: BTreeMap<SourceKey, Vec<VerseIdentity>>) -> Self {
        Self { entries }
    }

    /// Returns the targets recorded for `key`, if any.
    pub fn entry(&self, key: &SourceKey) -> Option<&[VerseIdentity]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Iterates over all entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&SourceKey, &[VerseIdentity])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Number of distinct source verses.
    pub fn source_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of target verses across all entries.
    pub fn reference_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Counters gathered while building an index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of distinct source verses in the index.
    pub source_count: usize,
    /// Total number of target verses in the index.
    pub reference_count: usize,
    /// Data lines whose target field used range notation.
    pub range_count: usize,
    /// Data lines that produced nothing: blank, too few fields, or an
    /// unparseable source.
    pub skipped_lines: usize,
}
