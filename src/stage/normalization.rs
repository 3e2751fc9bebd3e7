use crate::{
    error::TextError,
    normalize::{NormalizationForm, engine, is_normalized},
    stage::Stage,
};
use std::borrow::Cow;

// --- 1. Concrete Normalization Stage Structs ---

/// Unicode Normalization Form C (Canonical Composition)
#[derive(Debug, Default, Clone, Copy)]
pub struct NfcStage;

/// Unicode Normalization Form D (Canonical Decomposition)
#[derive(Debug, Default, Clone, Copy)]
pub struct NfdStage;

/// Unicode Normalization Form KC (Compatibility Composition)
#[derive(Debug, Default, Clone, Copy)]
pub struct NfkcStage;

/// Unicode Normalization Form KD (Compatibility Decomposition)
#[derive(Debug, Default, Clone, Copy)]
pub struct NfkdStage;

// --- 2. Public Constants ---

pub const NFC: NfcStage = NfcStage;
pub const NFD: NfdStage = NfdStage;
pub const NFKC: NfkcStage = NfkcStage;
pub const NFKD: NfkdStage = NfkdStage;

// --- 3. Stage impls, one per form ---

macro_rules! impl_normalization_stage {
    ($stage:ty, $name:literal, $form:expr) => {
        impl $stage {
            pub const FORM: NormalizationForm = $form;
        }

        impl Stage for $stage {
            fn name(&self) -> &'static str {
                $name
            }

            #[inline(always)]
            fn needs_apply(&self, text: &str) -> bool {
                !is_normalized(text, $form)
            }

            #[inline(always)]
            fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, TextError> {
                if !self.needs_apply(&text) {
                    return Ok(text);
                }
                Ok(Cow::Owned(engine::normalize(&text, $form)))
            }
        }
    };
}

impl_normalization_stage!(NfcStage, "nfc", NormalizationForm::Nfc);
impl_normalization_stage!(NfdStage, "nfd", NormalizationForm::Nfd);
impl_normalization_stage!(NfkcStage, "nfkc", NormalizationForm::Nfkc);
impl_normalization_stage!(NfkdStage, "nfkd", NormalizationForm::Nfkd);

/// Boxed stage for a form chosen at runtime.
pub fn stage_for(form: NormalizationForm) -> Box<dyn Stage> {
    match form {
        NormalizationForm::Nfc => Box::new(NFC),
        NormalizationForm::Nfd => Box::new(NFD),
        NormalizationForm::Nfkc => Box::new(NFKC),
        NormalizationForm::Nfkd => Box::new(NFKD),
    }
}

// --- 4. Contract test configuration ---

#[cfg(test)]
macro_rules! impl_stage_test_config {
    ($type:ty) => {
        impl crate::testing::stage_contract::StageTestConfig for $type {
            fn samples() -> &'static [&'static str] {
                &["café", "naïve", "e\u{0301}", "ﬁle", "①②③", "\u{1e9b}\u{0323}", ""]
            }
            fn should_pass_through() -> &'static [&'static str] {
                &["hello", "world123", "test", ""]
            }
        }
    };
}

#[cfg(test)]
impl_stage_test_config!(NfcStage);
#[cfg(test)]
impl_stage_test_config!(NfdStage);
#[cfg(test)]
impl_stage_test_config!(NfkcStage);
#[cfg(test)]
impl_stage_test_config!(NfkdStage);
