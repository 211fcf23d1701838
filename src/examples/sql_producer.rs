//! A deliberately small SQL front end for the statement pipeline.
//!
//! Real deployments pair the pipeline with a full SQL parser; this one
//! understands just enough (`SELECT` lists with optional `FROM` and
//! `WHERE` clauses) to demonstrate statement framing, comment
//! preservation, and width-driven layout end to end.

use crate::config::FmtConfig;
use crate::doc::Doc;
use crate::pipeline::StatementParser;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A parsed `SELECT` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectStatement {
    pub columns: Vec<String>,
    pub from: Vec<String>,
    pub where_clause: Option<String>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SqlParseError {
    #[error("expected SELECT, found: {0}")]
    ExpectedSelect(String),
    #[error("empty SELECT list")]
    EmptySelectList,
}

/// Statement framing and parsing for the demonstration SQL dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleSqlParser;

enum Clause {
    Columns,
    From,
    Where,
}

impl StatementParser for SimpleSqlParser {
    type Ast = SelectStatement;
    type Error = SqlParseError;

    fn split_first_statement(&self, input: &str) -> Result<usize, SqlParseError> {
        Ok(input.find(';').map(|i| i + 1).unwrap_or(0))
    }

    fn parse(&self, input: &str) -> Result<Vec<SelectStatement>, SqlParseError> {
        let input = input.trim().trim_end_matches(';').trim();
        if input.is_empty() {
            return Ok(Vec::new());
        }
        let mut words = input.split_whitespace();
        match words.next() {
            Some(w) if w.eq_ignore_ascii_case("select") => {}
            Some(w) => return Err(SqlParseError::ExpectedSelect(w.to_owned())),
            None => return Ok(Vec::new()),
        }

        let mut clause = Clause::Columns;
        let mut column_words = Vec::new();
        let mut from_words = Vec::new();
        let mut where_words = Vec::new();
        for word in words {
            if word.eq_ignore_ascii_case("from") {
                clause = Clause::From;
            } else if word.eq_ignore_ascii_case("where") {
                clause = Clause::Where;
            } else {
                match clause {
                    Clause::Columns => column_words.push(word),
                    Clause::From => from_words.push(word),
                    Clause::Where => where_words.push(word),
                }
            }
        }

        let columns = comma_list(&column_words);
        if columns.is_empty() {
            return Err(SqlParseError::EmptySelectList);
        }
        let where_clause = if where_words.is_empty() {
            None
        } else {
            Some(where_words.join(" "))
        };
        Ok(vec![SelectStatement {
            columns,
            from: comma_list(&from_words),
            where_clause,
        }])
    }
}

/// Split a run of words on commas, dropping the empties left behind by
/// `a, b` style spacing.
fn comma_list(words: &[&str]) -> Vec<String> {
    words
        .join(" ")
        .split(',')
        .map(|item| item.trim().to_owned())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Produce the document for one statement, honoring the producer-level
/// configuration (keyword casing here; a full producer would also honor
/// alignment, simplification, and tab settings).
pub fn statement_doc(stmt: &SelectStatement, config: &FmtConfig) -> Doc {
    let mut rng = StdRng::seed_from_u64(config.case_seed);
    let mut kw = |s: &str| config.case_mode.apply(s, &mut rng);

    let mut clauses = vec![Doc::join_group(
        kw("SELECT"),
        ",",
        stmt.columns.iter().map(|c| Doc::text(c.as_str())).collect(),
    )];
    if !stmt.from.is_empty() {
        clauses.push(Doc::join_group(
            kw("FROM"),
            ",",
            stmt.from.iter().map(|t| Doc::text(t.as_str())).collect(),
        ));
    }
    if let Some(cond) = &stmt.where_clause {
        clauses.push(Doc::nest_under(Doc::text(kw("WHERE")), Doc::text(cond.as_str())));
    }
    Doc::group(Doc::fold(Doc::concat_line, clauses))
}
