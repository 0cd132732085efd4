use crate::types::*;

/// Read-only queries over a finished cross-reference index.
pub struct CrossReferenceQueries<'a> {
    index: &'a CrossReferenceIndex,
}

impl<'a> CrossReferenceQueries<'a> {
    pub fn new(index: &'a CrossReferenceIndex) -> Self {
        Self { index }
    }

    /// Returns the targets of a verse, or an empty slice if it has none.
    ///
    /// `book` is the display name as stored in the index.
    pub fn get(&self, book: &str, chapter: u32, verse: u32) -> &'a [VerseIdentity] {
        self.index
            .entry(&SourceKey::new(book, chapter, verse))
            .unwrap_or(&[])
    }

    /// Returns `true` if the verse has at least one target.
    pub fn contains(&self, book: &str, chapter: u32, verse: u32) -> bool {
        !self.get(book, chapter, verse).is_empty()
    }

    pub fn source_count(&self) -> usize {
        self.index.source_count()
    }

    pub fn reference_count(&self) -> usize {
        self.index.reference_count()
    }

    /// Reverse lookup: every source whose targets include `target`, in key
    /// order. A source is listed once even if it names the target repeatedly.
    pub fn references_to(&self, target: &VerseIdentity) -> Vec<&'a SourceKey> {
        self.index
            .iter()
            .filter(|(_, targets)| targets.contains(target))
            .map(|(key, _)| key)
            .collect()
    }

    /// Returns up to `n` entries in key order, for progress reports.
    pub fn sample(&self, n: usize) -> Vec<(&'a SourceKey, &'a [VerseIdentity])> {
        self.index.iter().take(n).collect()
    }
}
