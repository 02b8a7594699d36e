//! Clean up product titles and short labels.
//!
//! ```rust
//! assert_eq!(tidystr::normalize("  капучино 3  0  0  мл  "), "Капучино 300 мл");
//! assert_eq!(tidystr::normalize("  хлопья  №  2   Агро  -  Альянс  "), "Хлопья №2 Агро-Альянс");
//! ```
//!
//! The cleaner is four stages run in order; the first three make up
//! [`prepare`]:
//!
//! 1. [`collapse_whitespace`]
//! 2. [`strip_punctuation_spacing`]
//! 3. [`capitalize`]
//! 4. the sliding-window rewriter ([`stage::RewriteWindows`])
//!
//! Every function here is infallible and returns `Cow::Borrowed` when the
//! input is already clean.

pub mod charset;
pub mod normalizer;
pub mod process;
pub mod profile;
pub mod stage;


pub use normalizer::{Normalizer, NormalizerError};
pub use stage::{
    Capitalize, CollapseWhitespace, RewriteWindows, Stage, StageError, StripPunctuationSpacing,
};

use std::borrow::Cow;

/// Trim the text, keep each line's leading spaces and collapse every other
/// whitespace run to one space.
pub fn collapse_whitespace(text: &str) -> Cow<'_, str> {
    stage::collapse_whitespace::collapse(text)
}

/// Remove the space on either side of every managed punctuation sign.
pub fn strip_punctuation_spacing(text: &str) -> Cow<'_, str> {
    stage::strip_punctuation_spacing::strip(text)
}

/// Uppercase the first letter and letters that open a new sentence after a
/// line break or other non-word residue.
pub fn capitalize(text: &str) -> Cow<'_, str> {
    stage::capitalize::capitalize(text)
}

/// Collapse, glue and capitalize.
#[tracing::instrument(level = "trace", skip_all, fields(len = text.len()))]
pub fn prepare(text: &str) -> Cow<'_, str> {
    let text = stage::rebind(collapse_whitespace(text), strip_punctuation_spacing);
    stage::rebind(text, capitalize)
}

/// Full cleaning: [`prepare`] followed by the sliding-window rewriter.
///
/// ```rust
/// use tidystr::normalize;
///
/// assert_eq!(normalize("  Dr.dias  "), "Dr. Dias");
/// assert_eq!(normalize("0.0"), "0.0");
/// assert_eq!(normalize("0,0"), "0, 0");
/// ```
#[tracing::instrument(level = "trace", skip_all, fields(len = text.len()))]
pub fn normalize(text: &str) -> Cow<'_, str> {
    stage::rebind(prepare(text), stage::rewrite_windows::rewrite)
}
