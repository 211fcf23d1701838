use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cooperative cancellation signal for long-running layout searches.
///
/// The layout search is greedy and local, but pathological documents (deeply
/// nested choices) can make it take exponential time. Callers that render
/// untrusted documents should hold a clone of the token and [`cancel`] it
/// from another thread when they lose patience; the engine consults the
/// token at every step of the search and bails out promptly.
///
/// [`cancel`]: CancelToken::cancel
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    /// A token that can never fire. Convenient for callers that don't need
    /// cancellation.
    pub fn never() -> CancelToken {
        CancelToken::default()
    }

    /// Signal every clone of this token. Idempotent.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
