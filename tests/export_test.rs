use tempfile::TempDir;
use xrefgraph::errors::XrefError;
use xrefgraph::export::*;
use xrefgraph::graph::build_index;
use xrefgraph::resolution::BookNameTable;
use xrefgraph::types::*;

fn sample_index() -> CrossReferenceIndex {
    let lines = [
        "From Verse\tTo Verse\tVotes",
        "Gen.1.1\tJohn.1.1-John.1.3\t340",
        "Gen.1.1\tProv.16.4\t56",
        "Rev.22.21\tXyz.1.1\t2",
        "Ps.23.1\tJohn.10.11\t80",
    ];
    build_index(BookNameTable::builtin(), lines).0
}

#[test]
fn test_document_shape_matches_book_chapter_verse_objects() {
    let doc = export_document(&sample_index()).unwrap();
    let entry = doc
        .get("ఆదికాండము|1|1")
        .and_then(|v| v.as_array())
        .expect("Gen 1:1 entry should be an array");

    assert_eq!(entry.len(), 4);
    assert_eq!(entry[0]["book"], "యోహాను సువార్త");
    assert_eq!(entry[0]["chapter"], 1);
    assert_eq!(entry[0]["verse"], 1);
    assert_eq!(entry[3]["book"], "సామెతలు");
    assert_eq!(entry[3]["chapter"], 16);
    assert_eq!(entry[3]["verse"], 4);
}

#[test]
fn test_non_ascii_is_written_verbatim() {
    let json = export_to_string(&sample_index(), false).unwrap();
    assert!(json.contains("ఆదికాండము"));
    assert!(!json.contains("\\u"));
}

#[test]
fn test_export_is_round_trip_stable() {
    for pretty in [true, false] {
        let first = export_to_string(&sample_index(), pretty).unwrap();
        let reloaded = load_index(&first).unwrap();
        let second = export_to_string(&reloaded, pretty).unwrap();
        assert_eq!(first, second, "round trip changed output (pretty={})", pretty);
        assert_eq!(content_digest(&first), content_digest(&second));
    }
}

#[test]
fn test_reloaded_index_equals_original() {
    let index = sample_index();
    let json = export_to_string(&index, true).unwrap();
    assert_eq!(load_index(&json).unwrap(), index);
}

#[test]
fn test_pretty_output_uses_two_space_indent() {
    let json = export_to_string(&sample_index(), true).unwrap();
    assert!(json.starts_with("{\n  \""));
}

#[test]
fn test_load_rejects_malformed_document() {
    let err = load_index("{\"Gen|1|1\": [{\"book\": 1}]}").unwrap_err();
    assert!(matches!(err, XrefError::Json(_)));
    assert!(load_index("not json").is_err());
}

#[test]
fn test_content_digest_is_deterministic() {
    let a = content_digest("{}");
    assert_eq!(a, content_digest("{}"));
    assert_ne!(a, content_digest("{ }"));
    assert_eq!(a.len(), 64);
}

#[test]
fn test_write_atomic_replaces_destination_and_cleans_up() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out/index.json");
    write_atomic(&path, "{}").unwrap();
    write_atomic(&path, "{\"a\": []}").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"a\": []}");
    assert!(!dir.path().join("out/index.tmp").exists());
}

#[test]
fn test_write_atomic_failure_leaves_destination_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("index.json");
    std::fs::write(&path, "old").unwrap();
    // A directory in the temporary file's place makes the write fail.
    std::fs::create_dir(dir.path().join("index.tmp")).unwrap();

    let err = write_atomic(&path, "new").unwrap_err();
    assert!(matches!(err, XrefError::File { .. }));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "old");
}
