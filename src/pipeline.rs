// src/pipeline.rs
use crate::{error::TextError, stage::Stage};
use std::borrow::Cow;
use std::sync::Arc;
use tracing::trace;

/// An ordered list of stages applied left to right.
#[derive(Clone, Default)]
pub struct Pipeline {
    stages: Vec<Arc<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Arc<dyn Stage>>) -> Self {
        Self { stages }
    }

    pub fn push<S: Stage + 'static>(mut self, stage: S) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|s| s.name())
    }

    pub fn process<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, TextError> {
        let mut current = text;

        for stage in &self.stages {
            // Fast path: skip if no mutation needed
            if !stage.needs_apply(&current) {
                continue;
            }

            trace!(stage = stage.name(), len = current.len(), "applying stage");
            current = stage.apply(current)?;
        }

        Ok(current)
    }
}
