use crate::{
    process::Process,
    profile::Profile,
    stage::{Capitalize, CollapseWhitespace, RewriteWindows, StripPunctuationSpacing},
};

/// Collapsed, glued and capitalized: the working form the window rewriter
/// expects.
pub fn prepare() -> Profile<impl Process> {
    Profile::builder("prepare")
        .add_stage(CollapseWhitespace)
        .add_stage(StripPunctuationSpacing)
        .add_stage(Capitalize)
        .build()
}

/// The full cleaner, same output as [`crate::normalize`].
pub fn clean() -> Profile<impl Process> {
    Profile::builder("clean")
        .add_stage(CollapseWhitespace)
        .add_stage(StripPunctuationSpacing)
        .add_stage(Capitalize)
        .add_stage(RewriteWindows)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[test]
    fn prepare_profile_glues_text() {
        let out = prepare()
            .run(Cow::Borrowed("  some  ( test )  string  "))
            .unwrap();
        assert_eq!(out, "Some(test)string");
    }

    #[test]
    fn clean_profile_matches_free_function() {
        let input = "  Орех  Коко  -де-  мер  ";
        let profile = clean();
        assert_eq!(profile.name(), "clean");
        assert_eq!(
            profile.run(Cow::Borrowed(input)).unwrap(),
            crate::normalize(input)
        );
    }

    #[test]
    fn clean_profile_borrows_clean_text() {
        let input = "Капучино 300 мл";
        let out = clean().run(Cow::Borrowed(input)).unwrap();
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }
}
