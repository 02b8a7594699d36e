//! Core cleaning stage abstraction.
//!
//! Every pass of the cleaner is a zero-sized [`Stage`]. A stage receives the
//! previous stage's full output and returns its own; `Cow::Borrowed` flows
//! through untouched whenever a stage has nothing to do, so clean input is
//! never copied.
//!
//! The canonical order is
//! [`CollapseWhitespace`] → [`StripPunctuationSpacing`] → [`Capitalize`] →
//! [`RewriteWindows`]. Stages can also be composed freely with
//! [`crate::profile::Profile`] or [`crate::Normalizer`].

pub mod capitalize;
pub mod collapse_whitespace;
pub mod rewrite_windows;
pub mod strip_punctuation_spacing;
#[doc(hidden)]
pub mod window_rules;

pub use capitalize::Capitalize;
pub use collapse_whitespace::CollapseWhitespace;
pub use rewrite_windows::RewriteWindows;
pub use strip_punctuation_spacing::StripPunctuationSpacing;

use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageError {
    /// A window rule was handed something other than exactly three characters.
    #[error("window rule `{rule}` expects exactly 3 characters, got {len}")]
    InvalidArgument { rule: &'static str, len: usize },
}

/// A single cleaning step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used for tracing and error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `Ok(false)` skips the whole stage, and must
    /// only happen when `apply` would return the text unchanged.
    fn needs_apply(&self, text: &str) -> Result<bool, StageError>;

    /// Allocation-aware transformation. Must always be correct, even when
    /// called without consulting `needs_apply` first.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError>;

    /// `needs_apply` then `apply`, returning the text and whether it changed.
    /// Pipelines call this. Stages whose exact check costs as much as the
    /// rewrite override it to do the work once.
    fn apply_if_needed<'a>(&self, text: Cow<'a, str>) -> Result<(Cow<'a, str>, bool), StageError> {
        if !self.needs_apply(&text)? {
            return Ok((text, false));
        }
        self.apply(text).map(|out| (out, true))
    }
}

/// Keep a borrowed input borrowed when `f` reports no change; otherwise hand
/// back the freshly built string.
#[inline]
pub(crate) fn rebind<'a>(
    text: Cow<'a, str>,
    f: impl for<'s> FnOnce(&'s str) -> Cow<'s, str>,
) -> Cow<'a, str> {
    let rebuilt = match f(&text) {
        Cow::Borrowed(_) => None,
        Cow::Owned(out) => Some(out),
    };
    rebuilt.map_or(text, Cow::Owned)
}
