use std::{fs, path::Path};

use reckon::{ErrorKind, batch::document::Document};
use serde_json::Value;
use walkdir::WalkDir;

fn expected_kind(name: &str) -> ErrorKind {
    match name {
        "Lexical" => ErrorKind::Lexical,
        "Structural" => ErrorKind::Structural,
        "UnknownName" => ErrorKind::UnknownName,
        "Arity" => ErrorKind::Arity,
        "Domain" => ErrorKind::Domain,
        other => panic!("unknown error kind '{other}' in fixture"),
    }
}

fn check_fixture(path: &Path) {
    let text = fs::read_to_string(path).unwrap();
    let raw: Value = serde_json::from_str(&text).unwrap();
    let expect = raw["expect"].as_array()
                              .unwrap_or_else(|| panic!("{} has no 'expect' list", path.display()));

    let outcomes = Document::from_json(&text).unwrap().run().unwrap();
    assert_eq!(outcomes.len(), expect.len(), "{}: one expectation per expression", path.display());

    for (outcome, expected) in outcomes.iter().zip(expect) {
        match (expected, &outcome.result) {
            (Value::Number(n), Ok(value)) => {
                let n = n.as_f64().unwrap();
                assert!((value - n).abs() < 1e-9,
                        "{}: '{}' evaluated to {value}, expected {n}",
                        path.display(),
                        outcome.expression);
            },
            (Value::String(kind), Err(e)) => {
                assert_eq!(e.kind(), expected_kind(kind), "{}: '{}' failed with {e}", path.display(), outcome.expression);
            },
            (expected, result) => {
                panic!("{}: '{}' gave {result:?}, expected {expected}", path.display(), outcome.expression)
            },
        }
    }
}

#[test]
fn batch_fixtures() {
    let fixtures = WalkDir::new("tests/batches").into_iter()
                                                .filter_map(Result::ok)
                                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
                                                .collect::<Vec<_>>();
    assert!(!fixtures.is_empty(), "no batch fixtures found");

    for entry in fixtures {
        check_fixture(entry.path());
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Document::load(Path::new("tests/batches/does-not-exist.json")).unwrap_err();
    assert!(err.to_string().contains("does-not-exist.json"));
}
