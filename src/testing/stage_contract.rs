use crate::{context::Context, options::SlugOptions, stage::Stage};
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// Option sets the stage is checked under.
    fn option_sets() -> Vec<SlugOptions> {
        vec![SlugOptions::default()]
    }

    /// General test samples (may or may not trigger changes)
    fn samples() -> &'static [&'static str] {
        &[
            "Hello World 123",
            " déjà-vu ",
            "foo - bar",
            "already-a-slug",
            "",
        ]
    }

    /// Samples that must pass through unchanged and borrowed.
    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "test123", "foo-bar", ""]
    }
}

/// Assert that a stage satisfies the universal slug stage contracts.
///
/// 1. `zero_copy_when_no_changes` → borrowed input stays borrowed when nothing changes
/// 2. `stage_is_idempotent` → applying twice yields the same result as once
/// 3. `needs_apply_is_accurate` → `needs_apply` predicts whether `apply` changes the text
/// 4. `no_panic_on_mixed_scripts` → survives pathological real-world input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes(&$stage);
        $crate::testing::stage_contract::stage_is_idempotent(&$stage);
        $crate::testing::stage_contract::needs_apply_is_accurate(&$stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts(&$stage);
    };
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: &S) {
    for options in S::option_sets() {
        let ctx = Context::new(&options);
        for &input in S::should_pass_through() {
            assert!(
                !stage.needs_apply(input, &ctx),
                "`{}` wants to change pass-through sample `{input}`",
                stage.name()
            );
            let out = stage.apply(Cow::Borrowed(input), &ctx);
            assert_eq!(&*out, input);
            assert!(
                matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()),
                "zero-copy violated by `{}` on `{input}`",
                stage.name()
            );
        }
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: &S) {
    for options in S::option_sets() {
        let ctx = Context::new(&options);
        for &input in S::samples() {
            let once = stage.apply(Cow::Borrowed(input), &ctx);
            let twice = stage.apply(once.clone(), &ctx);
            assert_eq!(
                once,
                twice,
                "`{}` not idempotent on `{input}`",
                stage.name()
            );
        }
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: &S) {
    for options in S::option_sets() {
        let ctx = Context::new(&options);
        for &sample in S::samples().iter().chain(S::should_pass_through()) {
            let predicted = stage.needs_apply(sample, &ctx);
            // Owned input so stages that always allocate are not penalised.
            let output = stage.apply(Cow::Owned(sample.to_owned()), &ctx);
            let actually_changes = output != sample;
            assert_eq!(
                predicted,
                actually_changes,
                "needs_apply() mismatch for `{}` on `{sample}` (output = {output:?})",
                stage.name()
            );
        }
    }
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: &S) {
    for options in S::option_sets() {
        let ctx = Context::new(&options);
        let _ = stage.apply(
            Cow::Borrowed("Hello 世界 русский Türkçe العربية ☢😹 \u{200B}\u{0301}"),
            &ctx,
        );
    }
}
