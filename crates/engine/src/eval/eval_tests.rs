use super::*;

use std::path::PathBuf;

use crate::dsl::parse_filter;

fn record() -> FileRecord {
    FileRecord {
        path: PathBuf::from("/srv/data/report.txt"),
        name: "report.txt".to_owned(),
        size: 2048,
        depth: 2,
        is_regular: true,
        is_dir: false,
        uid: 1000,
        gid: 50,
        user_name: "alice".to_owned(),
        group_name: "staff".to_owned(),
        perm_owner: "rw-".to_owned(),
        perm_group: "r--".to_owned(),
        perm_other: "---".to_owned(),
        atime_secs: 1_700_000_100,
        ctime_secs: 1_700_000_000,
        mtime_secs: 1_700_000_200,
    }
}

fn eval(filter: &str, rec: &FileRecord) -> bool {
    let parsed = parse_filter(filter).expect("filter should parse");
    eval_expr(&parsed.expr, rec).expect("evaluation should succeed")
}

#[test]
fn integer_comparisons() {
    let rec = record();
    let cases: &[(&str, bool)] = &[
        ("size = 2048", true),
        ("size != 2048", false),
        ("size > 2048", false),
        ("size >= 2048", true),
        ("size < 4096", true),
        ("size <= 10", false),
        ("depth = 2", true),
        ("uid = 1000", true),
        ("gid != 50", false),
    ];

    for (filter, expected) in cases {
        assert_eq!(eval(filter, &rec), *expected, "filter {:?}", filter);
    }
}

#[test]
fn float_literal_compares_numerically() {
    let rec = record();
    assert!(eval("size > 2047.5", &rec));
    assert!(!eval("size < 2047.5", &rec));
}

#[test]
fn string_comparisons_are_ordinal_and_case_sensitive() {
    let rec = record();
    assert!(eval("name = 'report.txt'", &rec));
    assert!(!eval("name = 'REPORT.TXT'", &rec));
    assert!(eval("name != 'other.txt'", &rec));
    // Ordinal ordering: "report.txt" > "abc"
    assert!(eval("name > 'abc'", &rec));
    assert!(eval("path = '/srv/data/report.txt'", &rec));
    assert!(eval("permission_other = '---'", &rec));
}

#[test]
fn empty_owner_names_compare_as_empty_string() {
    let mut rec = record();
    rec.user_name = String::new();
    rec.group_name = String::new();

    assert!(eval("user_name = ''", &rec));
    assert!(eval("group_name != 'staff'", &rec));
}

#[test]
fn boolean_comparisons() {
    let rec = record();
    assert!(eval("regular = true", &rec));
    assert!(eval("directory = false", &rec));
    assert!(!eval("directory = true", &rec));
    // false < true under ordering operators
    assert!(eval("regular > false", &rec));
}

#[test]
fn symlink_style_rows_are_false_for_both_flags() {
    let mut rec = record();
    rec.is_regular = false;
    rec.is_dir = false;

    assert!(eval("regular = false AND directory = false", &rec));
}

#[test]
fn timestamp_comparisons() {
    let rec = record();
    assert!(eval("modified_at > 1700000100", &rec));
    assert!(eval("accessed_at = 1700000100", &rec));
    assert!(eval("created_at >= '2023-11-14'", &rec));
    assert!(!eval("created_at < '2023-11-14'", &rec));
}

#[test]
fn and_or_not_composition() {
    let rec = record();
    assert!(eval("regular = true AND size < 4096", &rec));
    assert!(!eval("regular = true AND size > 4096", &rec));
    assert!(eval("directory = true OR size > 10", &rec));
    assert!(eval("NOT directory = true", &rec));
    assert!(!eval("NOT (regular = true OR directory = true)", &rec));
}

#[test]
fn and_short_circuits_past_a_failing_right_side() {
    // The right operand would be a type error, but the left is already
    // false, so the And returns false without evaluating it.
    let rec = record();
    let parsed = parse_filter("directory = true AND size LIKE 'x%'").expect("parse");
    assert_eq!(eval_expr(&parsed.expr, &rec), Ok(false));
}

#[test]
fn or_short_circuits_past_a_failing_right_side() {
    let rec = record();
    let parsed = parse_filter("regular = true OR size LIKE 'x%'").expect("parse");
    assert_eq!(eval_expr(&parsed.expr, &rec), Ok(true));
}

#[test]
fn like_on_string_columns() {
    let rec = record();
    assert!(eval("name LIKE '%.txt'", &rec));
    assert!(eval("name LIKE 'report%'", &rec));
    assert!(eval("path LIKE '%data%'", &rec));
    assert!(!eval("name LIKE '%.rs'", &rec));
}

#[test]
fn like_on_non_string_column_is_a_type_mismatch() {
    let rec = record();
    let parsed = parse_filter("size LIKE 'x%'").expect("parse");

    match eval_expr(&parsed.expr, &rec) {
        Err(QueryError::TypeMismatch { column, kind, op }) => {
            assert_eq!(column, "size");
            assert_eq!(kind, "integer");
            assert_eq!(op, "LIKE");
        }
        other => panic!("expected TypeMismatch, got {:?}", other),
    }
}
