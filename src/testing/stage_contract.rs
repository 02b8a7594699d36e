use crate::stage::Stage;
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes).
    fn samples() -> &'static [&'static str] {
        &["Hello World 123", "  some  text  ", "a.b", "", "Ф. О. Имя"]
    }

    /// Samples that should pass through unchanged and unallocated.
    ///
    /// Default: short clean titles every stage leaves alone.
    fn should_pass_through() -> &'static [&'static str] {
        &["", "Hello", "Test123", "Abc def", "Молоко"]
    }

    /// Input/output pairs that verify correct transformations.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies the universal stage contracts.
///
/// 1. `zero_copy_when_no_changes` → no allocation when input == output
/// 2. `needs_apply_is_accurate` → predicts exactly whether `apply` changes text,
///    and `apply_if_needed` agrees with both
/// 3. `transforms_match_expected` → every `should_transform` pair holds
/// 4. `handles_empty_string` → `""` survives untouched
/// 5. `no_panic_on_mixed_scripts` → survives pathological real-world input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes($stage);
        $crate::testing::stage_contract::needs_apply_is_accurate($stage);
        $crate::testing::stage_contract::transforms_match_expected($stage);
        $crate::testing::stage_contract::handles_empty_string($stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts($stage);
    };
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: S) {
    for &input in S::samples() {
        let text = Cow::Borrowed(input);
        if !stage.needs_apply(&text).unwrap() {
            let out = stage.apply(text).unwrap();
            assert!(
                matches!(out, Cow::Borrowed(s) if std::ptr::eq(s, input)),
                "stage `{}` copied `{input}` although needs_apply was false",
                stage.name()
            );
        }
    }

    for &pass_through in S::should_pass_through() {
        let out = stage.apply(Cow::Borrowed(pass_through)).unwrap();
        assert_eq!(out.as_ref(), pass_through);
        assert!(
            matches!(out, Cow::Borrowed(s) if std::ptr::eq(s, pass_through)),
            "zero-copy violated on pass-through sample `{pass_through}` (stage `{}`)",
            stage.name()
        );
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: S) {
    let transformed = S::should_transform().iter().map(|(input, _)| input);
    let inputs = S::samples()
        .iter()
        .chain(S::should_pass_through())
        .chain(transformed);
    for &input in inputs {
        check_accuracy(&stage, input);
    }
}

fn check_accuracy<S: Stage>(stage: &S, input: &str) {
    let predicted = stage.needs_apply(input).expect("needs_apply errored");
    // Owned input, so stages that always rebuild are not penalised here.
    let output = stage
        .apply(Cow::Owned(input.to_owned()))
        .expect("apply errored");
    let actually_changes = output != input;
    assert_eq!(
        predicted,
        actually_changes,
        "needs_apply() mismatch for stage `{}` on `{input:?}`\n\
         predicted: {predicted}\n\
         actual   : {actually_changes} (output = {output:?})",
        stage.name(),
    );

    let (single_pass, changed) = stage
        .apply_if_needed(Cow::Owned(input.to_owned()))
        .expect("apply_if_needed errored");
    assert_eq!(
        changed,
        predicted,
        "apply_if_needed() change flag disagrees with needs_apply() for stage `{}` on `{input:?}`",
        stage.name(),
    );
    assert_eq!(single_pass, output, "stage `{}` on `{input:?}`", stage.name());
}

pub fn transforms_match_expected<S: StageTestConfig>(stage: S) {
    for &(input, expected) in S::should_transform() {
        let out = stage.apply(Cow::Borrowed(input)).unwrap();
        assert_eq!(
            out.as_ref(),
            expected,
            "stage `{}` on `{input:?}`",
            stage.name()
        );
    }
}

pub fn handles_empty_string<S: StageTestConfig>(stage: S) {
    let empty: &str = "";
    assert!(!stage.needs_apply(empty).unwrap());
    let out = stage.apply(Cow::Borrowed(empty)).unwrap();
    assert_eq!(out.as_ref(), "");
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: S) {
    let _ = stage.apply(Cow::Borrowed(
        "Hello 世界 русский Türkçe العربية 简体中文 ß№( ) «» 3 0 . 5 %\n\t  x",
    ));
}
