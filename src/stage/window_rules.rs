//! The four local rules applied by [`RewriteWindows`](super::RewriteWindows).
//!
//! Each rule looks at a window of exactly three characters and returns the
//! rewritten window, which may be two (a space dropped) or four (a space
//! inserted) characters long. The rules themselves take `[char; 3]`, so the
//! rewriter can never feed them a wrong length; the slice-based wrappers
//! below exist for tests and report [`StageError::InvalidArgument`] instead.
//!
//! Not part of the stable API.

use crate::{
    charset::{is_capitalize_trigger, is_closer, is_digit, is_opener, is_punctuation},
    stage::StageError,
};
use smallvec::{SmallVec, smallvec};

pub const WINDOW: usize = 3;

/// A rewritten window: 2, 3 or 4 characters, inline up to 4.
pub type Window = SmallVec<[char; 4]>;

pub(crate) type Rule = fn([char; WINDOW]) -> Window;

/// Rules in application order.
pub(crate) const RULES: [(&str, Rule); 4] = [
    ("capitalize_after_trigger", capitalize_after_trigger_rule),
    ("join_digits", join_digits_rule),
    ("space_before_opener", space_before_opener_rule),
    ("space_after_closer", space_after_closer_rule),
];

/// `e.e` → `e.E`: uppercase the character after a capitalize trigger.
pub fn capitalize_after_trigger(window: &[char]) -> Result<Window, StageError> {
    checked("capitalize_after_trigger", window).map(capitalize_after_trigger_rule)
}

/// `3 0` → `30`: drop a single space between two digits.
pub fn join_digits(window: &[char]) -> Result<Window, StageError> {
    checked("join_digits", window).map(join_digits_rule)
}

/// `e(e` → `e (e`: space before an opening bracket, quote or `№`.
pub fn space_before_opener(window: &[char]) -> Result<Window, StageError> {
    checked("space_before_opener", window).map(space_before_opener_rule)
}

/// `e)e` → `e) e`: space after a closing bracket or terminal punctuation.
pub fn space_after_closer(window: &[char]) -> Result<Window, StageError> {
    checked("space_after_closer", window).map(space_after_closer_rule)
}

fn checked(rule: &'static str, window: &[char]) -> Result<[char; WINDOW], StageError> {
    <[char; WINDOW]>::try_from(window).map_err(|_| StageError::InvalidArgument {
        rule,
        len: window.len(),
    })
}

fn capitalize_after_trigger_rule([a, mid, b]: [char; WINDOW]) -> Window {
    if !is_capitalize_trigger(mid) {
        return smallvec![a, mid, b];
    }
    let mut out: Window = smallvec![a, mid];
    out.extend(b.to_uppercase());
    out
}

fn join_digits_rule([a, mid, b]: [char; WINDOW]) -> Window {
    if mid == ' ' && is_digit(a) && is_digit(b) {
        smallvec![a, b]
    } else {
        smallvec![a, mid, b]
    }
}

fn space_before_opener_rule([a, mid, b]: [char; WINDOW]) -> Window {
    // `((`, `.(`, `)№`: an opener right after punctuation stays glued,
    // unless the window runs into a line break.
    let after_punctuation = is_punctuation(a) && is_opener(mid) && b != '\n';
    if after_punctuation || !is_opener(mid) || a == ' ' {
        return smallvec![a, mid, b];
    }
    smallvec![a, ' ', mid, b]
}

fn space_after_closer_rule([a, mid, b]: [char; WINDOW]) -> Window {
    // Runs like `!!`, `...`, `)(` and closers at the end of a line.
    let before_punctuation = a != '\n' && is_closer(mid) && (is_punctuation(b) || b == '\n');
    let decimal = mid == '.' && is_digit(a) && is_digit(b);
    if !is_closer(mid) || before_punctuation || decimal {
        return smallvec![a, mid, b];
    }
    smallvec![a, mid, ' ', b]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn run(rule: fn(&[char]) -> Result<Window, StageError>, s: &str) -> Result<String, StageError> {
        rule(&chars(s)).map(|w| w.into_iter().collect())
    }

    #[test]
    fn join_digits_cases() {
        assert_eq!(run(join_digits, "0 0").unwrap(), "00");
        assert_eq!(run(join_digits, "00 ").unwrap(), "00 ");
        assert_eq!(run(join_digits, " 00").unwrap(), " 00");
        assert_eq!(run(join_digits, "a a").unwrap(), "a a");
        assert_eq!(run(join_digits, "a 0").unwrap(), "a 0");
        assert_eq!(run(join_digits, "² 2").unwrap(), "² 2");
        assert_eq!(run(join_digits, "1 ½").unwrap(), "1 ½");
        assert_eq!(run(join_digits, "٣ ٤").unwrap(), "٣٤");
    }

    #[test]
    fn join_digits_rejects_wrong_length() {
        assert_eq!(
            run(join_digits, "00"),
            Err(StageError::InvalidArgument {
                rule: "join_digits",
                len: 2
            })
        );
        assert!(run(join_digits, "0000").is_err());
    }

    #[test]
    fn capitalize_after_each_trigger() {
        for (raw, clean) in [
            ("e.e", "e.E"),
            ("e:e", "e:E"),
            ("e;e", "e;E"),
            ("e!e", "e!E"),
            ("e?e", "e?E"),
            ("e,e", "e,e"),
        ] {
            assert_eq!(run(capitalize_after_trigger, raw).unwrap(), clean, "{raw}");
        }
    }

    #[test]
    fn capitalize_after_trigger_rejects_wrong_length() {
        assert!(run(capitalize_after_trigger, "e").is_err());
        assert!(run(capitalize_after_trigger, "e.ee").is_err());
    }

    #[test]
    fn capitalize_may_grow_the_window() {
        assert_eq!(run(capitalize_after_trigger, "a.ß").unwrap(), "a.SS");
    }

    #[test]
    fn space_before_each_opener() {
        for (raw, clean) in [
            ("e(e", "e (e"),
            ("e[e", "e [e"),
            ("e{e", "e {e"),
            ("e«e", "e «e"),
            ("e„e", "e „e"),
            ("e‘e", "e ‘e"),
            ("e№e", "e №e"),
            ("e!e", "e!e"),
        ] {
            assert_eq!(run(space_before_opener, raw).unwrap(), clean, "{raw}");
        }
        assert!(run(space_before_opener, "e!ee").is_err());
    }

    #[test]
    fn opener_after_punctuation_or_space_stays() {
        assert_eq!(run(space_before_opener, "((x").unwrap(), "((x");
        assert_eq!(run(space_before_opener, ".(x").unwrap(), ".(x");
        assert_eq!(run(space_before_opener, " (x").unwrap(), " (x");
        assert_eq!(run(space_before_opener, ".(\n").unwrap(), ". (\n");
    }

    #[test]
    fn space_after_each_closer() {
        for (raw, clean) in [
            ("e)e", "e) e"),
            ("e]e", "e] e"),
            ("e}e", "e} e"),
            ("e»e", "e» e"),
            ("e“e", "e“ e"),
            ("e’e", "e’ e"),
            ("e.e", "e. e"),
            ("e:e", "e: e"),
            ("e,e", "e, e"),
            ("e;e", "e; e"),
            ("e!e", "e! e"),
            ("e?e", "e? e"),
            ("e%e", "e% e"),
            ("0.0", "0.0"),
            ("0,0", "0, 0"),
            ("².5", "². 5"),
        ] {
            assert_eq!(run(space_after_closer, raw).unwrap(), clean, "{raw}");
        }
        assert!(run(space_after_closer, "ee").is_err());
    }

    #[test]
    fn closer_before_punctuation_or_line_end_stays() {
        assert_eq!(run(space_after_closer, "a!!").unwrap(), "a!!");
        assert_eq!(run(space_after_closer, "...").unwrap(), "...");
        assert_eq!(run(space_after_closer, "x)(").unwrap(), "x)(");
        assert_eq!(run(space_after_closer, "a.\n").unwrap(), "a.\n");
        assert_eq!(run(space_after_closer, "\n.(").unwrap(), "\n. (");
    }

    #[test]
    fn rule_table_order() {
        let names: Vec<_> = RULES.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            [
                "capitalize_after_trigger",
                "join_digits",
                "space_before_opener",
                "space_after_closer"
            ]
        );
    }
}
