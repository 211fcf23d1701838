//! A width-aware pretty printing engine in the style of Wadler's
//! [prettier printer](http://homepages.inf.ed.ac.uk/wadler/papers/prettier/prettier.pdf),
//! plus a statement pipeline for formatting runs of `;`-separated
//! statements.
//!
//! You describe output as a [`Doc`]: an immutable tree of text atoms, line
//! breaks, indentation, and grouped choices between one-line and multi-line
//! renderings. The engine then picks, for your maximum line width, the most
//! horizontally compact layout that honors every mandatory break.
//!
//! # Quick Reference
//!
//! - Build documents with the constructors on [`Doc`] (`text`, `line`,
//!   `concat`, `nest`, `group`) and the derived helpers (`join`, `bracket`,
//!   `join_group`, `nest_under`). `a + b` concatenates; `a ^ b` puts a line
//!   break between.
//! - Render with [`pretty_string`] or stream bytes with [`pretty_to_sink`].
//!   Both take a [`CancelToken`] so a pathological layout search can be
//!   interrupted.
//! - Format whole inputs with [`format_statements`], which frames
//!   statements via a [`StatementParser`] collaborator, preserves the `--`
//!   comments between them, and renders each statement's document.
//! - [`json_doc`] is a small self-contained producer for JSON values,
//!   useful on its own and as a model for writing producers.
//!
//! # Example
//!
//! ```
//! use statement_pretty_printer::{fmt_json, pretty_string, CancelToken};
//!
//! let doc = fmt_json(r#"{"a": [1, 2]}"#).unwrap();
//! let out = pretty_string(&CancelToken::never(), &doc, 80).unwrap();
//! assert_eq!(out, r#"{"a": [1, 2]}"#);
//! ```

mod cancel;
mod config;
mod doc;
mod geometry;
mod json;
mod pipeline;
mod pretty_print;

pub mod examples;

pub use cancel::CancelToken;
pub use config::{parse_bool, AlignMode, CaseMode, ConfigError, FmtConfig};
pub use doc::Doc;
pub use geometry::{str_width, Width};
pub use json::{fmt_json, json_doc};
pub use pipeline::{format_statements, FormatError, StatementParser};
pub use pretty_print::{pretty_string, pretty_to_sink, PrintingError};

pub mod testing {
    //! Views into private structure, for use by this crate's tests.
    pub use super::doc::testing::{contains_line, flattened, union_parts};
}
