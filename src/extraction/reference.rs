use crate::resolution::BookLookup;
use crate::types::VerseIdentity;

/// Separator between the two endpoints of a range.
pub const RANGE_SEPARATOR: char = '-';

/// Widest span a same-chapter range may expand to; Psalm 119 has 176 verses.
/// Wider ranges keep only their two endpoints.
pub const MAX_RANGE_SPAN: u32 = 176;

/// Returns `true` if `token` uses range notation.
pub fn is_range(token: &str) -> bool {
    token.contains(RANGE_SEPARATOR)
}

/// Parses verse notation into resolved verse identities.
///
/// Parsing never fails loudly: malformed tokens yield no identity and the
/// caller simply skips them.
#[derive(Debug, Clone)]
pub struct ReferenceParser<L> {
    books: L,
}

impl<L: BookLookup> ReferenceParser<L> {
    pub fn new(books: L) -> Self {
        Self { books }
    }

    /// Parses a single `Book.Chapter.Verse` token.
    ///
    /// Segments past the third are ignored. Returns `None` when fewer than
    /// three segments are present or chapter/verse are not decimal integers.
    pub fn parse_one(&self, token: &str) -> Option<VerseIdentity> {
        let mut segments = token.trim().split('.');
        let book = segments.next()?;
        let chapter = segments.next()?.parse::<u32>().ok()?;
        let verse = segments.next()?.parse::<u32>().ok()?;

        Some(VerseIdentity {
            book: self.books.resolve(book),
            chapter,
            verse,
        })
    }

    /// Parses a single verse or a range into an ordered list of verses.
    ///
    /// - No separator: at most one verse.
    /// - One separator, both ends in the same book and chapter: every verse
    ///   between the two ends inclusive, ascending, whichever end is larger.
    /// - One separator, same chapter but wider than `MAX_RANGE_SPAN`: the
    ///   two endpoints only.
    /// - One separator, different book or chapter: the two endpoints only.
    /// - One separator, an end fails to parse: whichever ends do parse.
    /// - Several separators: every piece that parses, in input order.
    pub fn parse_range(&self, token: &str) -> Vec<VerseIdentity> {
        let pieces: Vec<&str> = token.split(RANGE_SEPARATOR).collect();

        match pieces.as_slice() {
            [single] => self.parse_one(single).into_iter().collect(),
            [start, end] => match (self.parse_one(start), self.parse_one(end)) {
                (Some(start), Some(end))
                    if start.same_chapter(&end)
                        && start.verse.abs_diff(end.verse) < MAX_RANGE_SPAN =>
                {
                    expand(&start, &end)
                }
                (Some(start), Some(end)) => vec![start, end],
                (start, end) => start.into_iter().chain(end).collect(),
            },
            _ => pieces
                .iter()
                .filter_map(|piece| self.parse_one(piece))
                .collect(),
        }
    }
}

/// Expands two verses of the same chapter into the inclusive run between them.
fn expand(start: &VerseIdentity, end: &VerseIdentity) -> Vec<VerseIdentity> {
    let low = start.verse.min(end.verse);
    let high = start.verse.max(end.verse);
    (low..=high)
        .map(|verse| VerseIdentity {
            book: start.book.clone(),
            chapter: start.chapter,
            verse,
        })
        .collect()
}
