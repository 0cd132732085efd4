use std::collections::BTreeMap;

use tracing::debug;

use crate::extraction::{is_range, CorpusLine, ReferenceParser};
use crate::resolution::BookLookup;
use crate::types::*;

/// Number of range expansions echoed at debug level during a build.
const LOGGED_RANGE_SAMPLES: usize = 5;

/// Accumulates targets under their source verse.
///
/// Targets are appended, never replaced or deduplicated: two lines with the
/// same source produce one entry holding both lines' targets in input order.
pub struct CrossReferenceAggregator<L> {
    parser: ReferenceParser<L>,
    entries: BTreeMap<SourceKey, Vec<VerseIdentity>>,
}

impl<L: BookLookup> CrossReferenceAggregator<L> {
    pub fn new(books: L) -> Self {
        Self {
            parser: ReferenceParser::new(books),
            entries: BTreeMap::new(),
        }
    }

    /// Ingests one (source, target) pair.
    ///
    /// The source must be a single verse; if it does not parse, nothing is
    /// recorded and `None` is returned. Otherwise returns the number of
    /// targets appended, which may be zero when the target is malformed.
    pub fn ingest(&mut self, source_token: &str, target_token: &str) -> Option<usize> {
        let source = self.parser.parse_one(source_token)?;
        let targets = self.parser.parse_range(target_token);
        let appended = targets.len();

        if !targets.is_empty() {
            self.entries
                .entry(source.source_key())
                .or_default()
                .extend(targets);
        }

        Some(appended)
    }

    /// Consumes the aggregator and returns the finished index.
    pub fn finalize(self) -> CrossReferenceIndex {
        CrossReferenceIndex::from_entries(self.entries)
    }
}

/// Builds an index from the raw lines of a corpus.
///
/// The first line is a header and is always skipped. Blank lines, lines with
/// fewer than two tab-delimited fields, and lines whose source does not parse
/// are skipped and counted in `skipped_lines`.
pub fn build_index<'a, L, I>(books: L, lines: I) -> (CrossReferenceIndex, IndexStats)
where
    L: BookLookup,
    I: IntoIterator<Item = &'a str>,
{
    let mut aggregator = CrossReferenceAggregator::new(books);
    let mut stats = IndexStats::default();

    for raw in lines.into_iter().skip(1) {
        let Some(line) = CorpusLine::parse(raw) else {
            stats.skipped_lines += 1;
            continue;
        };

        let ranged = is_range(line.target);
        if ranged {
            stats.range_count += 1;
        }

        match aggregator.ingest(line.source, line.target) {
            Some(appended) => {
                if ranged && stats.range_count <= LOGGED_RANGE_SAMPLES {
                    debug!(
                        source = line.source,
                        target = line.target,
                        expanded = appended,
                        "expanded range"
                    );
                }
            }
            None => stats.skipped_lines += 1,
        }
    }

    let index = aggregator.finalize();
    stats.source_count = index.source_count();
    stats.reference_count = index.reference_count();
    (index, stats)
}
