//! Process abstraction
//! `ChainedProcess` is monomorphised – the compiler knows the concrete type
//! of every stage and inlines the whole chain.
//! `DynamicProcess` is the runtime-assembled fallback used by
//! [`Normalizer`](crate::Normalizer).
use crate::stage::{Stage, StageError};
use smallvec::SmallVec;
use std::{borrow::Cow, sync::Arc};
use tracing::debug;

pub trait Process {
    fn process<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError>;
}

pub struct EmptyProcess;

impl Process for EmptyProcess {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        Ok(text)
    }
}

pub struct ChainedProcess<S: Stage, P: Process> {
    pub stage: S,
    pub previous: P,
}

impl<S: Stage, P: Process> Process for ChainedProcess<S, P> {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        let current = self.previous.process(text)?;
        run_stage(&self.stage, current)
    }
}

#[derive(Default)]
pub struct DynamicProcess {
    pub(crate) stages: SmallVec<[Arc<dyn Stage>; 4]>,
}

impl DynamicProcess {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Process for DynamicProcess {
    #[inline(always)]
    fn process<'a>(&self, mut text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        for stage in &self.stages {
            text = run_stage(stage.as_ref(), text)?;
        }
        Ok(text)
    }
}

#[inline(always)]
fn run_stage<'a, S: Stage + ?Sized>(stage: &S, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
    let (out, changed) = stage.apply_if_needed(text)?;
    if changed {
        debug!(stage = stage.name(), len = out.len(), "stage applied");
    }
    Ok(out)
}
