use crate::{
    charset::{
        changes_on_uppercase, closes_capitalize_run, is_capitalize_gap, is_capitalize_trigger,
        is_letter,
    },
    stage::{Stage, StageError, rebind},
};
use std::{borrow::Cow, collections::BTreeSet};

/// Uppercase sentence starts in glued text.
///
/// Two places are capitalized:
///
/// * the first character of the text, when it is a letter;
/// * the character closing a *trigger run*: a capitalize trigger
///   (`. : ; ! ?`) followed by one or more characters that are neither
///   letters nor numbers, then a letter or a non-decimal number (`ⅻ`).
///
/// After [`StripPunctuationSpacing`](crate::stage::StripPunctuationSpacing)
/// a single space after a trigger is gone, so a trigger run only survives
/// where more whitespace was present, typically a line break followed by
/// indentation (`"end.\n    next"` → `"end.\n    Next"`). Runs that are
/// glued (`"a.b"`) are left to the window rewriter.
///
/// Matches are collected as a set of distinct substrings first; every
/// occurrence of each distinct run is then rewritten in one replacement, so
/// repeated runs are treated identically.
#[derive(Debug, Default, Clone, Copy)]
pub struct Capitalize;

impl Stage for Capitalize {
    fn name(&self) -> &'static str {
        "capitalize"
    }

    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        let first = text
            .chars()
            .next()
            .is_some_and(|c| is_letter(c) && changes_on_uppercase(c));
        Ok(first || trigger_runs(text).iter().any(|run| run_needs_upper(run)))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        Ok(rebind(text, capitalize))
    }
}

pub(crate) fn capitalize(text: &str) -> Cow<'_, str> {
    let mut out = Cow::Borrowed(text);

    match text.chars().next() {
        Some(first) if is_letter(first) && changes_on_uppercase(first) => {
            let mut s = String::with_capacity(text.len() + 2);
            s.extend(first.to_uppercase());
            s.push_str(&text[first.len_utf8()..]);
            out = Cow::Owned(s);
        }
        _ => {}
    }

    let runs: Vec<(String, String)> = trigger_runs(&out)
        .into_iter()
        .filter(|run| run_needs_upper(run))
        .map(|run| (run.to_owned(), upper_last(run)))
        .collect();
    for (run, upper) in runs {
        out = Cow::Owned(out.replace(&run, &upper));
    }
    out
}

/// Distinct trigger runs, leftmost-first and non-overlapping.
fn trigger_runs(text: &str) -> BTreeSet<&str> {
    let mut runs = BTreeSet::new();
    let mut iter = text.char_indices().peekable();
    while let Some((start, c)) = iter.next() {
        if !is_capitalize_trigger(c) {
            continue;
        }
        let mut probe = iter.clone();
        let mut gap = 0usize;
        while probe.next_if(|&(_, g)| is_capitalize_gap(g)).is_some() {
            gap += 1;
        }
        match probe.peek() {
            Some(&(at, last)) if gap > 0 && closes_capitalize_run(last) => {
                runs.insert(&text[start..at + last.len_utf8()]);
                probe.next();
                iter = probe;
            }
            _ => {}
        }
    }
    runs
}

fn run_needs_upper(run: &str) -> bool {
    run.chars().next_back().is_some_and(changes_on_uppercase)
}

fn upper_last(run: &str) -> String {
    let mut chars = run.chars();
    let last = chars.next_back();
    let mut out = String::with_capacity(run.len() + 2);
    out.push_str(chars.as_str());
    if let Some(last) = last {
        out.extend(last.to_uppercase());
    }
    out
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for Capitalize {
    fn samples() -> &'static [&'static str] {
        &[
            "hello world",
            "Hello.\n    world",
            "a.b",
            "1. string",
            "",
            "- dash first",
            "ß",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            (
                "! some . string . where more , than one space for dot .\n yes",
                "! Some . String . Where more , than one space for dot .\n Yes",
            ),
            (
                "some . test . case ; for ; test\n new . line . add .\n more",
                "Some . Test . Case ; For ; Test\n new . Line . Add .\n More",
            ),
            (
                "- some . test . case ; for ; test\n new . line . add .\n more",
                "- some . Test . Case ; For ; Test\n new . Line . Add .\n More",
            ),
            ("ßeta", "SSeta"),
        ]
    }
}
