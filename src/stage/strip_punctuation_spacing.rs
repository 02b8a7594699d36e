use crate::{
    charset::is_punctuation,
    stage::{Stage, StageError, rebind},
};
use memchr::memchr;
use std::borrow::Cow;

/// Glue managed punctuation to its neighbours.
///
/// Every U+0020 whose left or right neighbour (in the input) is one of
/// [`ALL_PUNCTUATION`](crate::charset::ALL_PUNCTUATION) is removed. At most
/// one space per side of a sign is affected, so on collapsed text this yields
/// the "glued" form the later stages work on:
///
/// ```text
/// "tellus ( elementum ) sagittis ? vitae"  →  "tellus(elementum)sagittis?vitae"
/// "  .  !  "                               →  " .! "
/// ```
///
/// The spacing that belongs back is restored by
/// [`RewriteWindows`](crate::stage::RewriteWindows).
#[derive(Debug, Default, Clone, Copy)]
pub struct StripPunctuationSpacing;

impl Stage for StripPunctuationSpacing {
    fn name(&self) -> &'static str {
        "strip_punctuation_spacing"
    }

    #[inline]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(has_glueable_space(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        Ok(rebind(text, strip))
    }
}

pub(crate) fn strip(text: &str) -> Cow<'_, str> {
    if !has_glueable_space(text) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        let glued = c == ' '
            && (prev.is_some_and(is_punctuation) || chars.peek().is_some_and(|&n| is_punctuation(n)));
        if !glued {
            out.push(c);
        }
        prev = Some(c);
    }
    Cow::Owned(out)
}

fn has_glueable_space(text: &str) -> bool {
    // Most titles have spaces; the ones that don't skip the char walk.
    if memchr(b' ', text.as_bytes()).is_none() {
        return false;
    }
    let mut prev: Option<char> = None;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ' '
            && (prev.is_some_and(is_punctuation) || chars.peek().is_some_and(|&n| is_punctuation(n)))
        {
            return true;
        }
        prev = Some(c);
    }
    false
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for StripPunctuationSpacing {
    fn samples() -> &'static [&'static str] {
        &[
            "Hello World 123",
            "some ( test ) string",
            "a . b",
            "no punctuation here",
            "",
            "№ 2",
        ]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["", "hello", "abc def", "a.b", "(x)", "  a  "]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("  .  ", " . "),
            ("  .  !  ", " .! "),
            ("  . !  ", " .! "),
            (
                "tellus ( elementum ) sagittis ? vitae ! et .",
                "tellus(elementum)sagittis?vitae!et.",
            ),
            (
                ". . . tellus ? ? ( elementum ) ! ! et . . .",
                "...tellus??(elementum)!!et...",
            ),
        ]
    }
}
