mod common;

use common::{assert_pp, lit};
use statement_pretty_printer::Doc;

#[test]
fn join_interleaves_separators_and_breaks() {
    assert_pp(&Doc::join(",", vec![]), 80, &[""]);
    assert_pp(&Doc::join(",", vec![lit("a")]), 80, &["a"]);
    // Ungrouped, the interleaved breaks are mandatory.
    assert_pp(
        &Doc::join(",", vec![lit("a"), lit("b"), lit("c")]),
        80,
        &["a,", "b,", "c"],
    );
    // Grouped, they collapse to spaces when there's room.
    assert_pp(
        &Doc::group(Doc::join(",", vec![lit("a"), lit("b"), lit("c")])),
        80,
        &["a, b, c"],
    );
}

#[test]
fn fold_builds_right_to_left() {
    assert_pp(&Doc::fold(Doc::concat, vec![]), 80, &[""]);
    assert_pp(
        &Doc::fold(Doc::concat, vec![lit("a"), lit("b"), lit("c")]),
        80,
        &["abc"],
    );
    assert_pp(
        &Doc::fold(Doc::concat_line, vec![lit("a"), lit("b")]),
        80,
        &["a", "b"],
    );
}

#[test]
fn bracket_fits_on_one_line() {
    let doc = Doc::bracket("[", Doc::join(",", vec![lit("1"), lit("2")]), "]");
    assert_pp(&doc, 80, &["[1, 2]"]);
    assert_pp(&doc, 6, &["[1, 2]"]);
}

#[test]
fn bracket_breaks_with_tight_brackets() {
    let doc = Doc::bracket("[", Doc::join(",", vec![lit("1"), lit("2")]), "]");
    // The brackets hug the contents when the opening line still fits.
    assert_pp(
        &doc,
        4,
        &[
            // force rustfmt
            "[1,",
            "  2]",
        ],
    );
}

#[test]
fn bracket_flattens_without_spaces() {
    // A tight bracket around a single atom never gains interior spaces.
    let doc = Doc::bracket("(", lit("x"), ")");
    assert_pp(&doc, 80, &["(x)"]);
}

#[test]
fn bracket_doc_takes_document_brackets() {
    let doc = Doc::bracket_doc(
        lit("begin"),
        Doc::join(",", vec![lit("1"), lit("2")]),
        lit("end"),
    );
    assert_pp(&doc, 80, &["begin1, 2end"]);
}

#[test]
fn join_group_collapses_or_stacks() {
    let doc = Doc::join_group("SELECT", ",", vec![lit("a"), lit("b"), lit("c")]);
    assert_pp(&doc, 20, &["SELECT a, b, c"]);
    // Not enough room for the whole clause, but the list still fits after
    // the keyword breaks.
    assert_pp(
        &doc,
        10,
        &[
            // force rustfmt
            "SELECT",
            " a, b, c",
        ],
    );
    // No room for the list either: every element on its own line.
    assert_pp(
        &doc,
        5,
        &[
            // force rustfmt
            "SELECT",
            " a,",
            " b,",
            " c",
        ],
    );
}

#[test]
fn nest_under_shares_or_indents() {
    let doc = Doc::nest_under(lit("WHERE"), lit("x > 1"));
    assert_pp(&doc, 20, &["WHERE x > 1"]);
    assert_pp(
        &doc,
        8,
        &[
            // force rustfmt
            "WHERE",
            "  x > 1",
        ],
    );
}
