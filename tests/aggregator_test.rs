use xrefgraph::graph::{build_index, CrossReferenceAggregator};
use xrefgraph::resolution::{BookLookup, BookNameTable};
use xrefgraph::types::*;

const HEADER: &str = "From Verse\tTo Verse\tVotes\t#www.openbible.info CC-BY 2024-01-01";

fn display(abbr: &str) -> String {
    BookNameTable::builtin().resolve(abbr)
}

fn build(lines: &[&str]) -> (CrossReferenceIndex, IndexStats) {
    build_index(BookNameTable::builtin(), lines.iter().copied())
}

#[test]
fn test_single_reference_line() {
    let (index, stats) = build(&[HEADER, "Gen.1.1\tProv.16.4\t56"]);

    assert_eq!(stats.source_count, 1);
    let key = SourceKey::new(&display("Gen"), 1, 1);
    assert_eq!(
        index.entry(&key).unwrap(),
        &[VerseIdentity::new(display("Prov"), 16, 4)]
    );
}

#[test]
fn test_range_target_expands_in_order() {
    let (index, _) = build(&[HEADER, "Gen.1.1\tJohn.1.1-John.1.3\t340"]);

    let key = SourceKey::new(&display("Gen"), 1, 1);
    let targets = index.entry(&key).unwrap();
    assert_eq!(
        targets,
        &[
            VerseIdentity::new(display("John"), 1, 1),
            VerseIdentity::new(display("John"), 1, 2),
            VerseIdentity::new(display("John"), 1, 3),
        ]
    );
}

#[test]
fn test_lines_with_same_source_accumulate_in_input_order() {
    let (index, stats) = build(&[
        HEADER,
        "Gen.1.1\tJohn.1.1-John.1.2\t340",
        "Gen.1.2\tIsa.45.18\t10",
        "Gen.1.1\tHeb.11.3\t20",
    ]);

    assert_eq!(stats.source_count, 2);
    assert_eq!(stats.reference_count, 4);

    let key = SourceKey::new(&display("Gen"), 1, 1);
    let targets = index.entry(&key).unwrap();
    assert_eq!(
        targets,
        &[
            VerseIdentity::new(display("John"), 1, 1),
            VerseIdentity::new(display("John"), 1, 2),
            VerseIdentity::new(display("Heb"), 11, 3),
        ]
    );
}

#[test]
fn test_unresolved_source_book_is_kept_verbatim() {
    let (index, _) = build(&[HEADER, "Xyz.2.5\tGen.1.1\t1"]);
    assert!(index.entry(&SourceKey::new("Xyz", 2, 5)).is_some());
}

#[test]
fn test_blank_and_short_lines_are_skipped() {
    let (index, stats) = build(&[
        HEADER,
        "",
        "   ",
        "Gen.1.1",
        "Gen.1.1\tProv.16.4",
    ]);

    assert_eq!(stats.skipped_lines, 3);
    assert_eq!(stats.source_count, 1);
    assert_eq!(index.reference_count(), 1);
}

#[test]
fn test_malformed_source_skips_whole_line() {
    let (index, stats) = build(&[HEADER, "Gen.1\tProv.16.4\t5", "John-1-1\tProv.1.1\t2"]);
    assert!(index.is_empty());
    assert_eq!(stats.skipped_lines, 2);
}

#[test]
fn test_empty_input_and_header_only_produce_empty_index() {
    let (index, stats) = build(&[]);
    assert!(index.is_empty());
    assert_eq!(stats, IndexStats::default());

    let (index, _) = build(&[HEADER]);
    assert!(index.is_empty());
}

#[test]
fn test_aggregator_ingest_reports_appended_targets() {
    let mut agg = CrossReferenceAggregator::new(BookNameTable::builtin());
    assert_eq!(agg.ingest("Ps.23.1", "John.10.11-John.10.14"), Some(4));
    assert_eq!(agg.ingest("Ps.23.1", "Rev.7.17"), Some(1));
    let index = agg.finalize();
    assert_eq!(index.source_count(), 1);
    assert_eq!(index.reference_count(), 5);
}

#[test]
fn test_oversized_range_does_not_stop_later_lines() {
    let (index, stats) = build(&[
        HEADER,
        "Gen.1.1\tPs.119.1-Ps.119.4000000000\t1",
        "Gen.1.2\tJohn.1.1\t1",
    ]);

    assert_eq!(stats.source_count, 2);
    assert_eq!(stats.reference_count, 3);
    let first = index.entry(&SourceKey::new(&display("Gen"), 1, 1)).unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(first[1].verse, 4_000_000_000);
    assert_eq!(
        index.entry(&SourceKey::new(&display("Gen"), 1, 2)).unwrap(),
        &[VerseIdentity::new(display("John"), 1, 1)]
    );
}
