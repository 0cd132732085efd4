/// Book name resolution.
///
/// Maps canonical book abbreviations (`Gen`, `1Sam`, `Rev`, ...) to the
/// localized display names stored in the exported index.
mod books;

pub use books::{BookLookup, BookNameTable, CANONICAL_BOOKS};
