use crate::stage::{
    Stage, StageError, rebind,
    window_rules::{RULES, WINDOW},
};
use std::borrow::Cow;
use tracing::trace;

/// Restore canonical spacing and sentence capitals on glued text.
///
/// A 3-character window slides over the text; its last index runs from 2 to
/// the end of the (changing) buffer. At every position the
/// [window rules](super::window_rules) run in order:
///
/// 1. uppercase the character after `. : ; ! ?`
/// 2. drop the space in `digit space digit`
/// 3. insert a space before `( [ { « „ ‘ №`
/// 4. insert a space after `) ] } » “ ’ . , : ; ! ? %`, except inside runs
///    of punctuation and between the digits of a decimal
///
/// A rewritten window is spliced back immediately so the next rule sees it.
/// Once a rule changes the window length the remaining rules are skipped for
/// that position; the window then simply advances by one.
///
/// Meant to run on the output of the `prepare` stages: on spaced text it
/// would add spaces, not normalize them.
#[derive(Debug, Default, Clone, Copy)]
pub struct RewriteWindows;

impl Stage for RewriteWindows {
    fn name(&self) -> &'static str {
        "rewrite_windows"
    }

    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(matches!(rewrite(text), Cow::Owned(_)))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        Ok(rebind(text, rewrite))
    }

    // The exact check is a full rewrite; run it once.
    fn apply_if_needed<'a>(&self, text: Cow<'a, str>) -> Result<(Cow<'a, str>, bool), StageError> {
        let rebuilt = match rewrite(&text) {
            Cow::Borrowed(_) => None,
            Cow::Owned(out) => Some(out),
        };
        Ok(match rebuilt {
            Some(out) => (Cow::Owned(out), true),
            None => (text, false),
        })
    }
}

pub(crate) fn rewrite(text: &str) -> Cow<'_, str> {
    let mut buf: Vec<char> = text.chars().collect();
    if buf.len() < WINDOW {
        return Cow::Borrowed(text);
    }

    let mut rewritten = false;
    let mut i = WINDOW - 1;
    while i < buf.len() {
        let start = i + 1 - WINDOW;
        let mut window = [buf[start], buf[start + 1], buf[i]];
        for (name, rule) in RULES {
            let out = rule(window);
            if out.as_slice() == window.as_slice() {
                continue;
            }
            trace!(rule = name, at = start, "window rewritten");
            rewritten = true;
            buf.splice(start..=i, out.iter().copied());
            match <[char; WINDOW]>::try_from(out.as_slice()) {
                Ok(same_len) => window = same_len,
                Err(_) => break,
            }
        }
        i += 1;
    }

    if !rewritten {
        return Cow::Borrowed(text);
    }
    let out: String = buf.into_iter().collect();
    if out == text {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(out)
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for RewriteWindows {
    fn samples() -> &'static [&'static str] {
        &[
            "Hello World 123",
            "Some(test)string",
            "3 0 0",
            "((()))",
            "",
            "ab",
            "Ф.О.Имя",
        ]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["", "ab", "Hello", "abc def", "((()))", "0.0", "2+2=4", "R-r.\nR&r."]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("Some(test)string", "Some (test) string"),
            ("Ф.О.Имя", "Ф. О. Имя"),
            ("Капучино 3 0 0 мл", "Капучино 300 мл"),
            ("Dr.dias", "Dr. Dias"),
            ("Хлопья№2 Агро-Альянс", "Хлопья №2 Агро-Альянс"),
            ("0,0", "0, 0"),
            ("Йогурт 2.5%-3.5%Слобода", "Йогурт 2.5%-3.5% Слобода"),
        ]
    }
}
