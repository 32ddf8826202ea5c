use super::*;

use std::path::PathBuf;

use sift_fs::FileRecord;

use crate::error::{ParseError, QueryError};

fn rec(path: &str, size: u64, is_dir: bool) -> FileRecord {
    FileRecord {
        path: PathBuf::from(path),
        name: path.rsplit('/').next().unwrap_or("").to_owned(),
        size,
        depth: 1,
        is_regular: !is_dir,
        is_dir,
        uid: 1000,
        gid: 1000,
        user_name: "alice".to_owned(),
        group_name: "staff".to_owned(),
        perm_owner: "rw-".to_owned(),
        perm_group: "r--".to_owned(),
        perm_other: "r--".to_owned(),
        atime_secs: 1_700_000_000,
        ctime_secs: 1_700_000_000,
        mtime_secs: 1_700_000_000,
    }
}

fn store_of(records: Vec<FileRecord>) -> Store {
    let mut store = Store::new();
    for r in records {
        store.insert(r);
    }
    store
}

#[test]
fn empty_filter_matches_all_in_insertion_order() {
    let store = store_of(vec![
        rec("/c", 1, false),
        rec("/a", 2, false),
        rec("/b", 3, false),
    ]);

    let paths = run_query(&store, "").expect("run");
    assert_eq!(paths, vec!["/c", "/a", "/b"]);

    // Whitespace-only filter behaves the same.
    let paths_ws = run_query(&store, "  \t ").expect("run");
    assert_eq!(paths_ws, paths);
}

#[test]
fn size_comparisons_select_expected_rows() {
    let store = store_of(vec![
        rec("/zero", 0, false),
        rec("/ten", 10, false),
        rec("/hundred", 100, false),
    ]);

    let gt = run_query(&store, "size > 10").expect("run");
    assert_eq!(gt, vec!["/hundred"]);

    let ge = run_query(&store, "size >= 10").expect("run");
    assert_eq!(ge, vec!["/ten", "/hundred"]);
}

#[test]
fn boolean_composition() {
    let store = store_of(vec![
        rec("/small-dir", 5, true),
        rec("/small-file", 5, false),
        rec("/big-dir", 50, true),
    ]);

    let and = run_query(&store, "directory = true AND size < 10").expect("run");
    assert_eq!(and, vec!["/small-dir"]);

    let or = run_query(&store, "directory = true OR size < 10").expect("run");
    assert_eq!(or, vec!["/small-dir", "/small-file", "/big-dir"]);
}

#[test]
fn or_binds_looser_than_and() {
    // A OR B AND C must parse as A OR (B AND C). With these rows the two
    // groupings give different result sets:
    //   A = regular = true, B = directory = true, C = size < 10
    let store = store_of(vec![
        rec("/file-big", 50, false),  // A only
        rec("/dir-small", 5, true),   // B and C
        rec("/dir-big", 50, true),    // B only
    ]);

    let got = run_query(&store, "regular = true OR directory = true AND size < 10")
        .expect("run");
    // A OR (B AND C): file-big via A, dir-small via B AND C. Under the
    // wrong grouping (A OR B) AND C, file-big would be excluded.
    assert_eq!(got, vec!["/file-big", "/dir-small"]);

    // Explicit grouping flips the result.
    let grouped = run_query(&store, "(regular = true OR directory = true) AND size < 10")
        .expect("run");
    assert_eq!(grouped, vec!["/dir-small"]);
}

#[test]
fn unknown_column_aborts_with_parse_error_and_no_output() {
    let store = store_of(vec![rec("/a", 1, false)]);

    let err = run_query(&store, "nonexistent_column = 1").expect_err("should fail");
    match err {
        QueryError::Parse(ParseError { message, .. }) => {
            assert!(message.contains("unknown column"), "message: {message}");
        }
        other => panic!("expected ParseError, got {:?}", other),
    }
}

#[test]
fn like_on_integer_column_aborts_with_type_mismatch() {
    let store = store_of(vec![rec("/a", 1, false)]);

    let err = run_query(&store, "size LIKE 'x%'").expect_err("should fail");
    assert!(matches!(err, QueryError::TypeMismatch { .. }), "got {:?}", err);
}

#[test]
fn eval_error_surfaces_even_when_late_in_the_scan() {
    // First record fails the left conjunct, so the faulty LIKE is skipped;
    // the second record reaches it and the whole run aborts.
    let store = store_of(vec![
        rec("/file", 1, false),
        rec("/dir", 1, true),
    ]);

    let err = run_query(&store, "directory = true AND size LIKE 'x%'").expect_err("should fail");
    assert!(matches!(err, QueryError::TypeMismatch { .. }));
}

#[test]
fn name_like_selects_by_pattern() {
    let store = store_of(vec![
        rec("/logs/app.log", 1, false),
        rec("/logs/app.txt", 1, false),
        rec("/logs/other.log", 1, false),
    ]);

    let got = run_query(&store, "name LIKE '%.log'").expect("run");
    assert_eq!(got, vec!["/logs/app.log", "/logs/other.log"]);
}

#[test]
fn repeated_runs_are_idempotent() {
    let store = store_of(vec![
        rec("/a", 10, false),
        rec("/b", 20, false),
        rec("/c", 30, true),
    ]);

    let first = run_query(&store, "size >= 20").expect("run");
    let second = run_query(&store, "size >= 20").expect("run");

    assert_eq!(first, vec!["/b", "/c"]);
    assert_eq!(first, second);
}

#[test]
fn depth_and_owner_columns_are_queryable() {
    let mut deep = rec("/x/y/z", 1, false);
    deep.depth = 3;
    let store = store_of(vec![rec("/x", 1, true), deep]);

    let got = run_query(&store, "depth >= 2").expect("run");
    assert_eq!(got, vec!["/x/y/z"]);

    let owned = run_query(&store, "user_name = 'alice' AND uid = 1000").expect("run");
    assert_eq!(owned.len(), 2);
}
