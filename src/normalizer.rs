use thiserror::Error;

use crate::{
    process::{DynamicProcess, Process},
    profile::{Profile, ProfileError},
    stage::{
        Capitalize, CollapseWhitespace, RewriteWindows, Stage, StageError,
        StripPunctuationSpacing,
    },
};
use std::borrow::Cow;

#[derive(Debug, Error)]
pub enum NormalizerError {
    #[error("stage error: {0}")]
    Stage(#[from] StageError),
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),
}

/// A runtime-assembled cleaner.
///
/// ```rust
/// use tidystr::{Normalizer, stage::{CollapseWhitespace, StripPunctuationSpacing}};
///
/// let glue = Normalizer::builder()
///     .add_stage(CollapseWhitespace)
///     .add_stage(StripPunctuationSpacing)
///     .build();
/// assert_eq!(glue.normalize("  4-  х  ").unwrap(), "4-х");
/// ```
pub struct Normalizer {
    pipeline: DynamicProcess,
}

impl Normalizer {
    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::default()
    }

    /// The canonical four-stage cleaner.
    pub fn clean() -> Self {
        Self::builder()
            .add_stage(CollapseWhitespace)
            .add_stage(StripPunctuationSpacing)
            .add_stage(Capitalize)
            .add_stage(RewriteWindows)
            .build()
    }

    pub fn normalize<'a, T>(&self, text: T) -> Result<Cow<'a, str>, NormalizerError>
    where
        T: Into<Cow<'a, str>>,
    {
        Ok(self.pipeline.process(text.into())?)
    }

    /// Run `profile` after this normalizer's own stages.
    pub fn normalize_with_profile<'a, P: Process>(
        &self,
        profile: &Profile<P>,
        text: Cow<'a, str>,
    ) -> Result<Cow<'a, str>, NormalizerError> {
        let staged = self.pipeline.process(text)?;
        Ok(profile.run(staged)?)
    }

    pub fn stage_count(&self) -> usize {
        self.pipeline.len()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::clean()
    }
}

#[derive(Default)]
pub struct NormalizerBuilder {
    pipeline: DynamicProcess,
}

impl NormalizerBuilder {
    pub fn add_stage<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.pipeline = self.pipeline.push(stage);
        self
    }

    pub fn build(self) -> Normalizer {
        Normalizer {
            pipeline: self.pipeline,
        }
    }
}
