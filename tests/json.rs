mod common;

use common::assert_pp;
use statement_pretty_printer::{fmt_json, json_doc, Doc};

fn json(s: &str) -> Doc {
    fmt_json(s).expect("test input is valid JSON")
}

#[test]
fn scalars_and_empty_containers() {
    assert_pp(&json("null"), 80, &["null"]);
    assert_pp(&json("true"), 80, &["true"]);
    assert_pp(&json("12.5"), 80, &["12.5"]);
    assert_pp(&json(r#""hi there""#), 80, &[r#""hi there""#]);
    assert_pp(&json("[]"), 80, &["[]"]);
    assert_pp(&json("{}"), 80, &["{}"]);
    assert_pp(&json(r#"{"a": {}, "b": []}"#), 80, &[r#"{"a": {}, "b": []}"#]);
}

#[test]
fn object_fits_on_one_line() {
    assert_pp(&json(r#"{"a":[1,2]}"#), 80, &[r#"{"a": [1, 2]}"#]);
}

#[test]
fn object_breaks_at_narrow_width() {
    assert_pp(
        &json(r#"{"a":[1,2]}"#),
        6,
        &[
            // force rustfmt
            r#"{"a":"#,
            "    [",
            "      1,",
            "      2",
            "    ]}",
        ],
    );
}

#[test]
fn nested_object_at_several_widths() {
    // serde_json orders object keys, so the input order doesn't matter.
    let doc = json(r#"{"name": "Alice", "age": 42, "list": [1, 2, 3]}"#);
    assert_pp(
        &doc,
        80,
        &[r#"{"age": 42, "list": [1, 2, 3], "name": "Alice"}"#],
    );
    assert_pp(
        &doc,
        20,
        &[
            // force rustfmt
            r#"{"age": 42,"#,
            r#"  "list": [1, 2, 3],"#,
            r#"  "name": "Alice"}"#,
        ],
    );
    assert_pp(
        &doc,
        12,
        &[
            // force rustfmt
            r#"{"age": 42,"#,
            r#"  "list":"#,
            "    [1,",
            "      2,",
            "      3],",
            r#"  "name":"#,
            r#"    "Alice"}"#,
        ],
    );
}

#[test]
fn string_contents_are_escaped() {
    assert_pp(&json(r#"{"a": "line\nbreak"}"#), 80, &[r#"{"a": "line\nbreak"}"#]);
}

#[test]
fn json_doc_matches_fmt_json() {
    let value: serde_json::Value = serde_json::from_str(r#"{"a":[1,2]}"#).unwrap();
    assert_eq!(json_doc(&value), json(r#"{"a":[1,2]}"#));
}

#[test]
fn fmt_json_rejects_garbage() {
    assert!(fmt_json("{not json").is_err());
}
