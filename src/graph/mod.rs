/// Accumulation of parsed references into an index.
pub mod aggregator;

/// Query operations over a finished index.
pub mod queries;

pub use aggregator::{build_index, CrossReferenceAggregator};
pub use queries::CrossReferenceQueries;
