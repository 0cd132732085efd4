/// Reference notation parsing.
///
/// Turns `Book.Chapter.Verse` tokens and `start-end` ranges into resolved
/// verse identities, and splits corpus lines into their source and target
/// fields.
mod reference;

pub use reference::{is_range, ReferenceParser, MAX_RANGE_SPAN, RANGE_SEPARATOR};

/// Field separator used by the cross-reference corpus.
pub const FIELD_SEPARATOR: char = '\t';

/// One data line of the corpus, split into its two meaningful fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusLine<'a> {
    pub source: &'a str,
    pub target: &'a str,
}

impl<'a> CorpusLine<'a> {
    /// Splits a raw corpus line into source and target fields.
    ///
    /// Returns `None` for blank lines and lines with fewer than two
    /// tab-delimited fields. Fields beyond the second (e.g. vote counts) are
    /// ignored.
    pub fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let mut fields = line.split(FIELD_SEPARATOR);
        let source = fields.next()?;
        let target = fields.next()?;
        Some(Self { source, target })
    }
}
