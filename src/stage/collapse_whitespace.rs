use crate::stage::{Stage, StageError, rebind};
use std::borrow::Cow;

/// Collapse whitespace while keeping the shape of multi-line text.
///
/// | Where                         | What happens                                  |
/// |-------------------------------|-----------------------------------------------|
/// | edges of the whole text       | all whitespace (blank lines too) is trimmed   |
/// | leading spaces of a line      | kept verbatim, indentation survives           |
/// | runs inside a line            | any whitespace run becomes one `' '`          |
/// | end of a line                 | trailing whitespace (`\r` included) dropped   |
/// | interior blank lines          | kept                                          |
///
/// Only U+0020 counts as indentation: a line starting with a tab loses it.
/// Zero-copy when the text is already collapsed.
#[derive(Debug, Default, Clone, Copy)]
pub struct CollapseWhitespace;

impl Stage for CollapseWhitespace {
    fn name(&self) -> &'static str {
        "collapse_whitespace"
    }

    #[inline]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(!is_collapsed(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        Ok(rebind(text, collapse))
    }
}

pub(crate) fn collapse(text: &str) -> Cow<'_, str> {
    if is_collapsed(text) {
        return Cow::Borrowed(text);
    }
    let trimmed = text.trim();
    let mut out = String::with_capacity(trimmed.len());
    for (n, line) in trimmed.split('\n').enumerate() {
        if n > 0 {
            out.push('\n');
        }
        let body = line.trim_start_matches(' ');
        out.push_str(&line[..line.len() - body.len()]);

        let mut words = body.split_whitespace();
        if let Some(first) = words.next() {
            out.push_str(first);
            for word in words {
                out.push(' ');
                out.push_str(word);
            }
        }
    }
    Cow::Owned(out)
}

fn is_collapsed(text: &str) -> bool {
    text.trim().len() == text.len() && text.split('\n').all(line_is_collapsed)
}

fn line_is_collapsed(line: &str) -> bool {
    let body = line.trim_start_matches(' ');
    let mut prev_ws = false;
    for c in body.chars() {
        if c.is_whitespace() {
            if c != ' ' || prev_ws {
                return false;
            }
            prev_ws = true;
        } else {
            prev_ws = false;
        }
    }
    !prev_ws
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for CollapseWhitespace {
    fn samples() -> &'static [&'static str] {
        &[
            "Hello World 123",
            "  some  text  ",
            "line\n    indented",
            "a\t\tb",
            "trailing \nspace",
            "",
        ]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["", "hello", "abc def", "a\n  b", "a\n\nb", "a\n   \nb"]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("    ", ""),
            ("  amet!  ", "amet!"),
            ("a\r\nb", "a\nb"),
            ("\ta  b", "a b"),
            ("x\n\tindented  by tab", "x\nindented by tab"),
        ]
    }
}
