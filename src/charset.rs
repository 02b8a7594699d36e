//! Character roles used by every cleaning stage.
//!
//! Each punctuation sign the cleaner manages belongs to exactly one spacing
//! role. The tables are compile-time `phf` sets, shared read-only by every
//! call; there is no runtime state here.
//!
//! | Role                  | Members             | Spacing                            |
//! |-----------------------|---------------------|------------------------------------|
//! | `RIGHT_SPACE_CHARS`   | `. , : ; ! ? %`     | glued left, space on the right     |
//! | `LEFT_SPACE_CHARS`    | `№`                 | space on the left, glued right     |
//! | `MIDDLE_CHARS`        | `` - & / ` ``       | glued on both sides                |
//! | `PAIR_OPENERS`        | `( [ { « „ ‘`       | space on the left                  |
//! | `PAIR_CLOSERS`        | `) ] } » “ ’`       | space on the right                 |
//!
//! `CAPITALIZE_TRIGGERS` is a subset of `RIGHT_SPACE_CHARS`. It is not a
//! spacing role; it marks where a new sentence starts.

use phf::{Set, phf_set};
use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

/// Signs glued to the previous word and followed by a space.
pub static RIGHT_SPACE_CHARS: Set<char> = phf_set! {
    '.', ',', ':', ';', '!', '?', '%',
};

/// Signs preceded by a space and glued to the next word.
pub static LEFT_SPACE_CHARS: Set<char> = phf_set! {
    '№',
};

/// Sentence terminators: the next letter is uppercased.
pub static CAPITALIZE_TRIGGERS: Set<char> = phf_set! {
    '.', ':', ';', '!', '?',
};

/// Joiners inside compounds (`Агро-Альянс`, `б/к`, ``D`Oro``).
pub static MIDDLE_CHARS: Set<char> = phf_set! {
    '-', '&', '/', '`',
};

pub static PAIR_OPENERS: Set<char> = phf_set! {
    '(', '[', '{', '«', '„', '‘',
};

pub static PAIR_CLOSERS: Set<char> = phf_set! {
    ')', ']', '}', '»', '“', '’',
};

/// Every sign whose surrounding spaces are managed by the cleaner.
pub static ALL_PUNCTUATION: Set<char> = phf_set! {
    '!', '"', '#', '$', '%', '&', '(', ')', '*', '+', ',', '-', '.', '/',
    ':', ';', '<', '=', '>', '?', '@', '[', '\\', ']', '^', '_', '`',
    '{', '|', '}', '~', '\'',
    '«', '»', '„', '“', '‘', '’', '№',
};

#[inline(always)]
pub fn is_punctuation(c: char) -> bool {
    ALL_PUNCTUATION.contains(&c)
}

/// Opening pair characters and `№`: they take a forced left space.
#[inline(always)]
pub fn is_opener(c: char) -> bool {
    PAIR_OPENERS.contains(&c) || LEFT_SPACE_CHARS.contains(&c)
}

/// Closing pair characters and terminal punctuation: they take a forced
/// right space.
#[inline(always)]
pub fn is_closer(c: char) -> bool {
    PAIR_CLOSERS.contains(&c) || RIGHT_SPACE_CHARS.contains(&c)
}

#[inline(always)]
pub fn is_capitalize_trigger(c: char) -> bool {
    CAPITALIZE_TRIGGERS.contains(&c)
}

#[inline(always)]
pub fn is_middle(c: char) -> bool {
    MIDDLE_CHARS.contains(&c)
}

/// Decimal digits (`Nd`) only: `²`, `½` and `Ⅻ` are not digits.
#[inline(always)]
pub fn is_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    c.general_category() == GeneralCategory::DecimalNumber
}

/// Letters (`L*`). Combining marks and letter-like numerals are not.
#[inline(always)]
pub fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    c.general_category_group() == GeneralCategoryGroup::Letter
}

#[inline(always)]
fn is_word(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphanumeric();
    }
    matches!(
        c.general_category_group(),
        GeneralCategoryGroup::Letter | GeneralCategoryGroup::Number
    )
}

/// Characters that may sit between a trigger and the character it
/// capitalizes: anything that is neither a letter nor a number, `_` included.
#[inline(always)]
pub fn is_capitalize_gap(c: char) -> bool {
    !is_word(c)
}

/// Characters that close a trigger run: letters and non-decimal numbers
/// (`ⅻ`, `²`).
#[inline(always)]
pub fn closes_capitalize_run(c: char) -> bool {
    is_word(c) && !is_digit(c)
}

/// True when uppercasing `c` yields something other than `c` itself.
#[inline(always)]
pub fn changes_on_uppercase(c: char) -> bool {
    c.to_uppercase().ne(std::iter::once(c))
}
