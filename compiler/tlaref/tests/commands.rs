#![allow(clippy::expect_used)]

use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tlaref::args::{Position, QueryOptions};
use tlaref::commands::{self, CommandError};

const SPEC: &str = "\
---- MODULE Spec ----
EXTENDS Naturals, Lib
VARIABLE x
Init == x = Cap
Next == LET step == 1 IN x' = x + step
====
";

const LIB: &str = "\
---- MODULE Lib ----
Cap == 3
LOCAL Helper == 4
====
";

fn project() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("Spec.tla"), SPEC).expect("write");
    fs::write(dir.path().join("Lib.tla"), LIB).expect("write");
    let spec = dir.path().join("Spec.tla");
    (dir, spec)
}

fn at(file: &Path, line: u32, column: u32) -> QueryOptions {
    QueryOptions {
        file: file.to_path_buf(),
        position: Some(Position { line, column }),
        ..QueryOptions::default()
    }
}

#[test]
fn test_resolve_across_extends() {
    let (dir, spec) = project();
    let out = commands::resolve(&at(&spec, 4, 15)).expect("resolve Cap");
    let lib = dir.path().join("Lib.tla");
    assert_eq!(out, format!("Cap (operator) at {}:2:1", lib.display()));
}

#[test]
fn test_resolve_declaration_under_cursor() {
    let (_dir, spec) = project();
    let out = commands::resolve(&at(&spec, 3, 10)).expect("resolve x");
    assert!(out.starts_with("x (variable) at "), "{out}");
    assert!(out.ends_with("Spec.tla:3:10"), "{out}");
}

#[test]
fn test_resolve_reports_missing_symbol() {
    let (_dir, spec) = project();
    let err = commands::resolve(&at(&spec, 4, 7)).expect_err("no identifier");
    assert!(matches!(err, CommandError::NoSymbol(_)), "{err}");
    let err = commands::resolve(&at(&spec, 40, 1)).expect_err("out of range");
    assert!(matches!(err, CommandError::OutOfRange(_)), "{err}");
}

#[test]
fn test_complete_hides_local_definitions() {
    let (_dir, spec) = project();
    let out = commands::complete(&at(&spec, 4, 13)).expect("complete");
    let names: Vec<&str> = out
        .lines()
        .filter_map(|line| line.split('\t').next())
        .collect();
    assert!(names.contains(&"Cap"));
    assert!(names.contains(&"Nat"));
    assert!(names.contains(&"x"));
    assert!(!names.contains(&"Helper"));
    assert!(out.contains("Cap\toperator\tLib\n"), "{out}");
}

#[test]
fn test_rename_scope_and_references() {
    let (_dir, spec) = project();
    let whole = commands::rename_scope(&at(&spec, 4, 15)).expect("scope of Cap");
    assert_eq!(whole, "whole project");

    let local = commands::rename_scope(&at(&spec, 5, 38)).expect("scope of step");
    assert!(local.contains("Spec.tla:5:9-5:"), "{local}");

    let refs = commands::references(&at(&spec, 3, 10)).expect("references to x");
    let lines: Vec<&str> = refs.lines().collect();
    assert_eq!(lines.len(), 3, "{refs}");
    assert!(lines.iter().all(|line| line.contains("Spec.tla:")));
}

#[test]
fn test_parse_lists_errors() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bad = dir.path().join("Bad.tla");
    fs::write(&bad, "---- MODULE Bad ----\nOp == (1\n====\n").expect("write");
    let out = commands::parse(&QueryOptions {
        file: bad,
        ..QueryOptions::default()
    })
    .expect("parse");
    assert!(out.contains("Errors: 1"), "{out}");
    assert!(out.contains("Bad.tla:2:7: unclosed"), "{out}");
}

#[test]
fn test_file_with_other_extension_is_not_loaded() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = dir.path().join("Spec.cfg");
    fs::write(&cfg, "INIT Init\n").expect("write");
    let err = commands::parse(&QueryOptions {
        file: cfg,
        ..QueryOptions::default()
    })
    .expect_err("not a module");
    assert!(matches!(err, CommandError::NotLoaded(_)), "{err}");
}
