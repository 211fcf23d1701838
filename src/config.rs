//! Formatting configuration.
//!
//! Only `line_width` means anything to the engine itself. The remaining
//! knobs are carried for document producers: a producer translates them into
//! text atoms and nesting amounts before the engine ever runs. In
//! particular, tab indentation is a producer concern. The renderer always
//! indents with spaces, so a producer that wants tabs must emit them inside
//! the first text atom after each line break.

use crate::geometry::Width;
use rand::Rng;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct FmtConfig {
    /// Target maximum line width, in characters. Must be positive.
    pub line_width: Width,
    /// Indentation step used by producers. Must be positive.
    pub tab_width: Width,
    /// Whether producers should indent with tabs instead of spaces.
    pub use_tabs: bool,
    /// How producers should case keywords.
    pub case_mode: CaseMode,
    /// Whether producers should drop parentheses and words that don't
    /// change the meaning.
    pub simplify: bool,
    /// Keyword alignment style used by producers.
    pub align: AlignMode,
    /// Seed for the `spongebob` case transform, so that even the silly case
    /// mode renders deterministically.
    pub case_seed: u64,
}

impl Default for FmtConfig {
    fn default() -> FmtConfig {
        FmtConfig {
            line_width: 80,
            tab_width: 4,
            use_tabs: false,
            case_mode: CaseMode::Preserve,
            simplify: true,
            align: AlignMode::None,
            case_seed: 0,
        }
    }
}

impl FmtConfig {
    /// Reject configurations the engine or a producer could not honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.line_width == 0 {
            return Err(ConfigError::ZeroLineWidth);
        }
        if self.tab_width == 0 {
            return Err(ConfigError::ZeroTabWidth);
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("line width must be positive")]
    ZeroLineWidth,
    #[error("tab width must be positive")]
    ZeroTabWidth,
}

/// Keyword casing applied by producers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    /// Leave keywords exactly as written.
    #[default]
    Preserve,
    Upper,
    Lower,
    /// Lowercase, then capitalize the first letter of each word.
    Title,
    /// Flip each letter's case at random. Deterministic for a given seed.
    SpongeBob,
}

impl CaseMode {
    /// Apply this casing to `s`. The generator is only consulted by
    /// [`CaseMode::SpongeBob`]; seed it from
    /// [`FmtConfig::case_seed`] for reproducible output.
    pub fn apply(&self, s: &str, rng: &mut impl Rng) -> String {
        match self {
            CaseMode::Preserve => s.to_owned(),
            CaseMode::Upper => s.to_uppercase(),
            CaseMode::Lower => s.to_lowercase(),
            CaseMode::Title => title_case(s),
            CaseMode::SpongeBob => spongebob_case(s, rng),
        }
    }
}

impl FromStr for CaseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<CaseMode, String> {
        match s {
            "preserve" => Ok(CaseMode::Preserve),
            "upper" => Ok(CaseMode::Upper),
            "lower" => Ok(CaseMode::Lower),
            "title" => Ok(CaseMode::Title),
            "spongebob" => Ok(CaseMode::SpongeBob),
            _ => Err(format!("unknown case mode: {}", s)),
        }
    }
}

fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.to_lowercase().chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !c.is_alphanumeric();
    }
    out
}

fn spongebob_case(s: &str, rng: &mut impl Rng) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if rng.gen_bool(0.5) {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Keyword alignment styles. `Partial` right-aligns leading keywords,
/// `Full` additionally dedents `AND` and `OR`, and `Other` instead indents
/// their arguments. Opaque to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignMode {
    #[default]
    None,
    Partial,
    Full,
    Other,
}

/// Lenient boolean parsing for configuration surfaces: accepts `on`/`off`
/// in addition to everything `bool::from_str` accepts.
pub fn parse_bool(val: &str) -> Result<bool, std::str::ParseBoolError> {
    match val {
        "on" => Ok(true),
        "off" => Ok(false),
        _ => val.parse(),
    }
}
