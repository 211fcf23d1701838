/// Width, measured in characters.
pub type Width = usize;

/// The width of a string, as the engine measures it.
///
/// Text is measured in code units, not grapheme clusters. The same
/// measurement is used by the fitting test and by layout, so the engine is
/// self-consistent, but producers that care about multi-byte display width
/// must account for it in the text atoms they emit.
pub fn str_width(s: &str) -> Width {
    s.len()
}
