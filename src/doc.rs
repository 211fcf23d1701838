//! The document algebra: a tree of layout directives that the engine
//! searches for the most compact rendering.

use crate::geometry::Width;
use std::fmt;
use std::ops::{Add, BitXor};

// ASSUMPTION:
// In every union `X | Y`, `X` is the flattened form of `Y`. Every line of
// `X` is therefore no longer than the first line of `Y`, which is what makes
// the greedy fitting test sound. `group` is the only constructor that
// introduces a union, so the assumption holds everywhere by construction.

/// Describes a family of possible layouts for a piece of output.
///
/// A `Doc` is an immutable tree built from a handful of combinators: text
/// atoms, mandatory line breaks, indentation, concatenation, and grouped
/// choices between a one-line and a multi-line rendering. Build one with the
/// constructors on this type, then render it with
/// [`pretty_string`](crate::pretty_string) at your preferred line width.
#[derive(Debug, Clone, PartialEq)]
pub struct Doc(pub(crate) DocInner);

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DocInner {
    /// Display nothing. The identity for concatenation.
    Nil,
    /// Literal text. Cannot contain a newline.
    Text(String),
    /// A mandatory line break, indented to the enclosing nesting level. When
    /// flattened it becomes a single space.
    Line,
    /// Display both documents, the second immediately after the first.
    Concat(Box<DocInner>, Box<DocInner>),
    /// Indent every line break inside the contained document by an
    /// additional `n` spaces.
    Nest(Width, Box<DocInner>),
    /// Display the left document if its first line fits within the remaining
    /// width; otherwise the right. Only `group` builds these.
    Union(Box<DocInner>, Box<DocInner>),
}

impl Doc {
    /// The empty document.
    pub fn nil() -> Doc {
        Doc(DocInner::Nil)
    }

    /// A text atom. Must not contain a newline; use [`Doc::line`] for line
    /// breaks.
    pub fn text(s: impl Into<String>) -> Doc {
        let s = s.into();
        debug_assert!(!s.contains('\n'), "text atoms cannot contain newlines");
        Doc(DocInner::Text(s))
    }

    /// A mandatory line break, rendered as a newline plus the current
    /// indentation, or as a single space when flattened inside a fitting
    /// group.
    pub fn line() -> Doc {
        Doc(DocInner::Line)
    }

    /// Sequential composition. `nil` on either side is eliminated.
    pub fn concat(a: Doc, b: Doc) -> Doc {
        use DocInner::*;

        match (a.0, b.0) {
            (Nil, d) | (d, Nil) => Doc(d),
            (a, b) => Doc(Concat(Box::new(a), Box::new(b))),
        }
    }

    /// `a`, a line break, `b`.
    pub fn concat_line(a: Doc, b: Doc) -> Doc {
        a ^ b
    }

    /// Increase the indentation of every line break in `d` by `n` spaces.
    pub fn nest(n: Width, d: Doc) -> Doc {
        Doc(DocInner::Nest(n, Box::new(d.0)))
    }

    /// A choice between rendering `d` on a single line and rendering it with
    /// its line breaks intact. The engine takes the one-line form whenever
    /// it fits in the remaining width.
    pub fn group(d: Doc) -> Doc {
        let flat = flatten(&d.0);
        Doc(DocInner::Union(Box::new(flat), Box::new(d.0)))
    }

    /// Right fold of `f` over `docs`. Empty input folds to `nil`.
    pub fn fold(f: impl Fn(Doc, Doc) -> Doc, docs: Vec<Doc>) -> Doc {
        let mut docs = docs;
        let Some(last) = docs.pop() else {
            return Doc::nil();
        };
        docs.into_iter().rev().fold(last, |acc, d| f(d, acc))
    }

    /// Interleave `sep` and a line break between the documents:
    /// `d1 sep ↵ d2 sep ↵ … dn`.
    pub fn join(sep: &str, docs: Vec<Doc>) -> Doc {
        let mut docs = docs;
        let Some(last) = docs.pop() else {
            return Doc::nil();
        };
        docs.into_iter()
            .rev()
            .fold(last, |acc, d| d + Doc::text(sep) + Doc::line() + acc)
    }

    /// `l x r` on one line when it fits; otherwise the brackets sit on their
    /// own lines with `x` indented by two. The brackets are tight: flattening
    /// puts no space between a bracket and the contents.
    pub fn bracket(l: &str, x: Doc, r: &str) -> Doc {
        Doc::bracket_doc(Doc::text(l), x, Doc::text(r))
    }

    /// [`Doc::bracket`] with arbitrary documents for the brackets.
    pub fn bracket_doc(l: Doc, x: Doc, r: Doc) -> Doc {
        // The unions with an empty text atom (instead of plain line breaks)
        // prevent a space from appearing between bracket and contents when
        // the group is flattened.
        Doc::group(Doc::fold(
            Doc::concat,
            vec![
                l,
                Doc::nest(2, Doc::concat(tight_line(), x)),
                tight_line(),
                r,
            ],
        ))
    }

    /// `name` followed by the joined elements, grouped so the whole clause
    /// collapses onto one line when it fits.
    pub fn join_group(name: impl Into<String>, sep: &str, docs: Vec<Doc>) -> Doc {
        Doc::group(Doc::concat(
            Doc::text(name),
            Doc::nest(1, Doc::concat(Doc::line(), Doc::group(Doc::join(sep, docs)))),
        ))
    }

    /// `head body` on one line when it fits, otherwise `body` on its own
    /// line indented by two under `head`.
    pub fn nest_under(head: Doc, body: Doc) -> Doc {
        Doc::group(Doc::concat(head, Doc::nest(2, Doc::concat(Doc::line(), body))))
    }
}

/// A line break that flattens to nothing instead of to a space.
fn tight_line() -> Doc {
    use DocInner::*;

    Doc(Union(
        Box::new(Text(String::new())),
        Box::new(Line),
    ))
}

/// Rewrite a document into its single-line form: every line break becomes a
/// space and every union resolves to its (already flat) left branch.
pub(crate) fn flatten(d: &DocInner) -> DocInner {
    use DocInner::*;

    match d {
        Nil => Nil,
        Text(s) => Text(s.clone()),
        Line => Text(" ".to_owned()),
        Concat(a, b) => match (flatten(a), flatten(b)) {
            (Nil, d) | (d, Nil) => d,
            (a, b) => Concat(Box::new(a), Box::new(b)),
        },
        Nest(n, d) => Nest(*n, Box::new(flatten(d))),
        Union(a, _) => flatten(a),
    }
}

impl Add<Doc> for Doc {
    type Output = Doc;

    /// Shorthand for [`Doc::concat`].
    fn add(self, other: Doc) -> Doc {
        Doc::concat(self, other)
    }
}

impl BitXor<Doc> for Doc {
    type Output = Doc;

    /// Shorthand for `X + line() + Y`.
    fn bitxor(self, other: Doc) -> Doc {
        self + Doc::line() + other
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// For debugging layout searches gone wrong.
impl fmt::Display for DocInner {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use DocInner::*;

        match self {
            Nil => write!(f, "ε"),
            Text(s) => write!(f, "'{}'", s),
            Line => write!(f, "↵"),
            Concat(a, b) => write!(f, "({} + {})", a, b),
            Nest(n, d) => write!(f, "{}⇒({})", n, d),
            Union(a, b) => write!(f, "({} | {})", a, b),
        }
    }
}

/// Test-only views into the private document structure.
pub(crate) mod testing {
    use super::{flatten, Doc, DocInner};

    /// The flattened form of `d`, as a standalone document.
    pub fn flattened(d: &Doc) -> Doc {
        Doc(flatten(&d.0))
    }

    /// The two branches of a top-level union, if `d` is one.
    pub fn union_parts(d: &Doc) -> Option<(Doc, Doc)> {
        match &d.0 {
            DocInner::Union(a, b) => Some((Doc((**a).clone()), Doc((**b).clone()))),
            _ => None,
        }
    }

    /// Does `d` contain a mandatory line break anywhere?
    pub fn contains_line(d: &Doc) -> bool {
        fn go(d: &DocInner) -> bool {
            use DocInner::*;

            match d {
                Nil | Text(_) => false,
                Line => true,
                Concat(a, b) => go(a) || go(b),
                Nest(_, d) => go(d),
                Union(a, b) => go(a) || go(b),
            }
        }
        go(&d.0)
    }
}
