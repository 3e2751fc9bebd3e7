//! Core transformation stage abstraction.
//!
//! A stage is a single text rewrite with a cheap pre-check. When
//! `needs_apply` returns `false` the input `Cow` is handed back untouched, so
//! a pipeline over already-clean text never allocates.

pub mod case_fold;
pub mod normalization;

use crate::error::TextError;
use std::borrow::Cow;

/// A single text transformation step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in logs and test failure messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips the whole stage.
    fn needs_apply(&self, text: &str) -> bool;

    /// Allocation-aware transformation. Must always be correct, even when
    /// called without consulting `needs_apply`.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, TextError>;
}
