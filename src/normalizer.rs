use crate::{
    error::TextError,
    normalize::{
        NormalizationForm, OffsetMap, PastEndPolicy, normalize_str, normalize_str_with_offsets,
    },
    pipeline::Pipeline,
    stage::{case_fold::CaseFold, normalization::NFKC},
    utf8,
};
use std::{borrow::Cow, sync::LazyLock};

static CASE_FOLD_PIPELINE: LazyLock<Pipeline> =
    LazyLock::new(|| Pipeline::default().push(CaseFold).push(NFKC));

/// Case-insensitive canonical form: default case folding, then NFKC.
pub fn fold_str(text: &str) -> Result<Cow<'_, str>, TextError> {
    CASE_FOLD_PIPELINE.process(Cow::Borrowed(text))
}

/// Configured normalizer for one form and one past-end policy.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    form: NormalizationForm,
    past_end: PastEndPolicy,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Normalizer {
    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::default()
    }

    #[inline]
    pub fn form(&self) -> NormalizationForm {
        self.form
    }

    #[inline]
    pub fn past_end(&self) -> PastEndPolicy {
        self.past_end
    }

    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        normalize_str(text, self.form)
    }

    pub fn normalize_bytes<'a>(&self, bytes: &'a [u8]) -> Result<Cow<'a, str>, TextError> {
        Ok(self.normalize(utf8::validate(bytes)?))
    }

    pub fn normalize_with_offsets(&self, text: &str) -> Result<(String, OffsetMap), TextError> {
        normalize_str_with_offsets(text, self.form)
    }

    /// Resolve output offsets against `map` using this normalizer's policy.
    pub fn resolve(&self, map: &OffsetMap, offsets: &[i64]) -> Result<Vec<i64>, TextError> {
        map.resolve(offsets, self.past_end)
    }
}

#[derive(Debug, Default)]
pub struct NormalizerBuilder {
    form: NormalizationForm,
    past_end: PastEndPolicy,
}

impl NormalizerBuilder {
    pub fn form(mut self, form: NormalizationForm) -> Self {
        self.form = form;
        self
    }

    /// Parse the form case-insensitively (`"nfkc"`, `"NFD"`, ...).
    pub fn form_name(self, name: &str) -> Result<Self, TextError> {
        Ok(self.form(name.parse()?))
    }

    pub fn past_end(mut self, policy: PastEndPolicy) -> Self {
        self.past_end = policy;
        self
    }

    pub fn build(self) -> Normalizer {
        Normalizer {
            form: self.form,
            past_end: self.past_end,
        }
    }
}
