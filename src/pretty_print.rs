//! The best-layout search and the renderer.
//!
//! [`best`] turns a document into a *resolved stream*: a flat sequence of
//! text atoms and indented line breaks with every union decided. Rendering a
//! resolved stream is then a trivial walk. The search is greedy: at each
//! union it lays out the flattened branch against the rest of the worklist
//! and keeps it iff its first line fits in the remaining width. Global
//! optimality follows from the union invariant established in [`crate::doc`].

use crate::cancel::CancelToken;
use crate::doc::{Doc, DocInner};
use crate::geometry::{str_width, Width};
use std::collections::HashMap;
use std::io;

/// Errors surfaced by the rendering entry points.
#[derive(thiserror::Error, Debug)]
pub enum PrintingError {
    /// The caller's [`CancelToken`] fired during the layout search. No
    /// output was written.
    #[error("pretty printing was cancelled")]
    Cancelled,
    /// The output sink failed; rendering stopped at the failed write.
    #[error("failed to write to the output sink")]
    Sink(#[from] io::Error),
}

/// One element of a resolved stream.
#[derive(Debug, Clone)]
pub(crate) enum ResolvedAtom {
    Text(String),
    /// A newline followed by this many spaces of indentation.
    Line(Width),
}

/// Render `doc` to a string, inserting line breaks so that every line fits
/// within `width` columns whenever the document allows it.
pub fn pretty_string(cancel: &CancelToken, doc: &Doc, width: Width) -> Result<String, PrintingError> {
    let mut buf = Vec::new();
    pretty_to_sink(cancel, doc, &mut buf, width)?;
    // The renderer only writes document text (valid UTF-8 by construction),
    // newlines, and spaces.
    Ok(String::from_utf8(buf).expect("rendered output is UTF-8"))
}

/// Render `doc` to an arbitrary byte sink. The resolved stream is computed
/// in full before the first byte is written, so a cancelled or failed call
/// never leaves partial output that a later retry would duplicate.
pub fn pretty_to_sink(
    cancel: &CancelToken,
    doc: &Doc,
    sink: &mut impl io::Write,
    width: Width,
) -> Result<(), PrintingError> {
    let stream = best(cancel, width, 0, doc)?;
    render(&stream, sink)?;
    Ok(())
}

/// Select the best layout of `doc` for the given width, starting at column
/// `col`.
pub(crate) fn best(
    cancel: &CancelToken,
    width: Width,
    col: Width,
    doc: &Doc,
) -> Result<Vec<ResolvedAtom>, PrintingError> {
    let mut search = LayoutSearch {
        width,
        cancel,
        memo: HashMap::new(),
    };
    search.run(col, vec![(0, &doc.0)])
}

/// Worklist state keyed for memoization: the current column plus the
/// `(indent, node)` pairs still to be processed. Documents are immutable for
/// the duration of a search, so node addresses identify subtrees.
type MemoKey = (Width, Vec<(Width, usize)>);

struct LayoutSearch<'d> {
    width: Width,
    cancel: &'d CancelToken,
    /// Deduplicates repeated union subproblems within this one search. Never
    /// shared across searches.
    memo: HashMap<MemoKey, Vec<ResolvedAtom>>,
}

impl<'d> LayoutSearch<'d> {
    /// Reduce the worklist to a resolved stream. `work` is a stack with the
    /// next item at the end; each entry carries the indentation that a line
    /// break inside it would emit. Recursion happens only at unions, so the
    /// call depth is bounded by union nesting rather than document size.
    fn run(
        &mut self,
        mut col: Width,
        mut work: Vec<(Width, &'d DocInner)>,
    ) -> Result<Vec<ResolvedAtom>, PrintingError> {
        use DocInner::*;

        let mut out = Vec::new();
        while let Some((indent, doc)) = work.pop() {
            if self.cancel.is_cancelled() {
                return Err(PrintingError::Cancelled);
            }
            match doc {
                Nil => {}
                Concat(a, b) => {
                    work.push((indent, b.as_ref()));
                    work.push((indent, a.as_ref()));
                }
                Nest(n, d) => work.push((indent + n, d.as_ref())),
                Text(s) => {
                    col += str_width(s);
                    out.push(ResolvedAtom::Text(s.clone()));
                }
                Line => {
                    col = indent;
                    out.push(ResolvedAtom::Line(indent));
                }
                Union(a, b) => {
                    if self.cancel.is_cancelled() {
                        return Err(PrintingError::Cancelled);
                    }
                    let key = memo_key(col, indent, doc, &work);
                    if let Some(hit) = self.memo.get(&key) {
                        out.extend(hit.iter().cloned());
                        return Ok(out);
                    }
                    let mut flat_work = work.clone();
                    flat_work.push((indent, a.as_ref()));
                    let rest = {
                        let x = self.run(col, flat_work)?;
                        if fits(self.width, col, &x) {
                            x
                        } else {
                            work.push((indent, b.as_ref()));
                            self.run(col, work)?
                        }
                    };
                    self.memo.insert(key, rest.clone());
                    out.extend(rest);
                    return Ok(out);
                }
            }
        }
        Ok(out)
    }
}

fn memo_key(col: Width, indent: Width, head: &DocInner, work: &[(Width, &DocInner)]) -> MemoKey {
    let mut nodes = Vec::with_capacity(work.len() + 1);
    for (i, d) in work {
        nodes.push((*i, std::ptr::from_ref(*d) as usize));
    }
    nodes.push((indent, std::ptr::from_ref(head) as usize));
    (col, nodes)
}

/// Can the stream's first line, starting at `col`, finish within `width`
/// columns? Reaching a line break (or the end of the stream) before the
/// budget runs out means yes.
fn fits(width: Width, col: Width, stream: &[ResolvedAtom]) -> bool {
    let Some(mut remaining) = width.checked_sub(col) else {
        return false;
    };
    for atom in stream {
        match atom {
            ResolvedAtom::Line(_) => return true,
            ResolvedAtom::Text(s) => {
                let w = str_width(s);
                if w > remaining {
                    return false;
                }
                remaining -= w;
            }
        }
    }
    true
}

/// Emit a resolved stream to the sink. The indent unit is a single space;
/// producers that want tabs must bake them into their text atoms.
fn render(stream: &[ResolvedAtom], sink: &mut impl io::Write) -> io::Result<()> {
    for atom in stream {
        match atom {
            ResolvedAtom::Text(s) => sink.write_all(s.as_bytes())?,
            ResolvedAtom::Line(indent) => {
                write!(sink, "\n{:indent$}", "", indent = *indent)?;
            }
        }
    }
    Ok(())
}
