//! The statement pipeline: drives a blob of `;`-separated statements
//! through an external parser and a caller-supplied document producer,
//! preserving the line comments and blank lines that sit between
//! statements.

use crate::cancel::CancelToken;
use crate::config::{ConfigError, FmtConfig};
use crate::doc::Doc;
use crate::pretty_print::{pretty_string, PrintingError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error as StdError;

/// A leading `--` line comment together with its trailing whitespace.
static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^--.*\s*").unwrap());

/// The external parser the pipeline delegates statement framing to. The
/// pipeline owns only the framing loop; what a statement *is* belongs to
/// the collaborator.
pub trait StatementParser {
    type Ast;
    type Error: StdError + Send + Sync + 'static;

    /// The byte offset just past the first statement terminator in `input`,
    /// or `0` when no terminator is present.
    fn split_first_statement(&self, input: &str) -> Result<usize, Self::Error>;

    /// Parse a slice produced by [`split_first_statement`]. Returns zero or
    /// one ASTs: zero for blank input, one otherwise.
    ///
    /// [`split_first_statement`]: StatementParser::split_first_statement
    fn parse(&self, input: &str) -> Result<Vec<Self::Ast>, Self::Error>;
}

/// Errors surfaced by [`format_statements`].
#[derive(thiserror::Error, Debug)]
pub enum FormatError<E: StdError + Send + Sync + 'static> {
    #[error("invalid formatter configuration")]
    Config(#[from] ConfigError),
    /// The parser rejected a statement chunk. Nothing is returned for the
    /// whole call: half-formatted output is worse than none.
    #[error("failed to parse statement")]
    Parse(#[source] E),
    #[error(transparent)]
    Print(#[from] PrintingError),
}

/// Format every statement in `blobs`, in order.
///
/// Each blob may hold any number of `;`-separated statements with `--` line
/// comments between them. Statements are parsed by `parser`, turned into
/// documents by `produce`, and rendered at `config.line_width`; comments
/// between statements are passed through with their blank lines collapsed
/// to at most one. Statements end with `;` and are separated by a blank
/// line; the result carries no leading or trailing whitespace.
pub fn format_statements<P, F>(
    config: &FmtConfig,
    produce: F,
    parser: &P,
    blobs: &[&str],
) -> Result<String, FormatError<P::Error>>
where
    P: StatementParser,
    F: Fn(&P::Ast) -> Doc,
{
    config.validate()?;
    let cancel = CancelToken::never();
    let mut out = String::new();
    for blob in blobs {
        let mut rest: &str = blob;
        loop {
            rest = rest.trim();
            if rest.is_empty() {
                break;
            }
            let mut emitted = false;

            // Pass leading comments through, collapsing each run of
            // trailing blank lines to at most one.
            while let Some(found) = LINE_COMMENT.find(rest) {
                let comment = found.as_str();
                out.push_str(comment.trim_end());
                let newlines = comment.matches('\n').count().min(2);
                out.push_str(&"\n".repeat(newlines));
                rest = &rest[comment.len()..];
                emitted = true;
            }

            // Split off the chunk up to the first terminator; without one,
            // the whole remainder is the final chunk. A split error means
            // the collaborator couldn't find a terminator either way.
            let chunk;
            match parser.split_first_statement(rest).unwrap_or(0) {
                0 => {
                    chunk = rest;
                    rest = "";
                }
                offset => {
                    chunk = &rest[..offset];
                    rest = &rest[offset..];
                }
            }

            for ast in parser.parse(chunk).map_err(FormatError::Parse)? {
                let doc = produce(&ast);
                out.push_str(&pretty_string(&cancel, &doc, config.line_width)?);
                out.push_str(";\n");
                emitted = true;
            }
            if emitted {
                out.push('\n');
            }
        }
    }
    Ok(out.trim_end().to_owned())
}
