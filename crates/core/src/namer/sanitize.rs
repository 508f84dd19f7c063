//! Pure text sanitization primitives.
//!
//! Stateless free functions composed by the naming policies. Each operates
//! on its input alone and allocates a fresh output, so they are safe to call
//! concurrently from any number of threads.

use serde::{Deserialize, Serialize};

/// The set of characters a policy deletes from titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "class", rename_all = "snake_case")]
pub enum PunctuationClass {
    /// The fixed 32-symbol ASCII punctuation set
    /// (`!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~`). Non-ASCII symbols such as
    /// em-dashes pass through.
    Ascii,

    /// Any character that is neither Unicode-alphanumeric nor whitespace.
    /// Strips em-dashes and every other symbol regardless of script.
    NonAlphanumeric,

    /// An explicit custom set of characters to strip.
    Chars { chars: String },
}

impl Default for PunctuationClass {
    fn default() -> Self {
        Self::Ascii
    }
}

impl PunctuationClass {
    /// Whether `c` belongs to this class and should be stripped.
    pub fn matches(&self, c: char) -> bool {
        match self {
            Self::Ascii => c.is_ascii_punctuation(),
            Self::NonAlphanumeric => !c.is_alphanumeric() && !c.is_whitespace(),
            Self::Chars { chars } => chars.contains(c),
        }
    }
}

/// Deletes every character of `class` from `text`.
///
/// Deletion, not substitution: `"a-b"` becomes `"ab"`, never `"a b"`.
pub fn strip_punctuation(text: &str, class: &PunctuationClass) -> String {
    text.chars().filter(|c| !class.matches(*c)).collect()
}

/// Collapses every run of whitespace (spaces, tabs, newlines, Unicode
/// whitespace) into a single ASCII space and drops leading/trailing runs.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Unicode-aware lowercasing. Total over valid UTF-8: characters without a
/// lowercase mapping are passed through unchanged.
pub fn lowercase(text: &str) -> String {
    text.to_lowercase()
}
