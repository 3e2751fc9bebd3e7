//! Unicode normalization (UAX #15) with optional offset tracking.
//!
//! Text that ICU4X already reports as normalized for the requested form is
//! returned as-is (borrowed, identity offset map). Everything else goes
//! through [`engine`], which records where every output scalar came from.

pub(crate) mod engine;
pub mod form;
pub mod offset_map;

pub use form::NormalizationForm;
pub use offset_map::{OffsetMap, OffsetRecord, PastEndPolicy, RecordKind};

use crate::error::TextError;
use icu_normalizer::{ComposingNormalizerBorrowed, DecomposingNormalizerBorrowed};
use std::{borrow::Cow, sync::LazyLock};
use tracing::trace;

// ── ICU4X quick-check ──
static ICU4X_NFC: LazyLock<ComposingNormalizerBorrowed<'static>> =
    LazyLock::new(ComposingNormalizerBorrowed::new_nfc);
static ICU4X_NFKC: LazyLock<ComposingNormalizerBorrowed<'static>> =
    LazyLock::new(ComposingNormalizerBorrowed::new_nfkc);
static ICU4X_NFD: LazyLock<DecomposingNormalizerBorrowed<'static>> =
    LazyLock::new(DecomposingNormalizerBorrowed::new_nfd);
static ICU4X_NFKD: LazyLock<DecomposingNormalizerBorrowed<'static>> =
    LazyLock::new(DecomposingNormalizerBorrowed::new_nfkd);

/// `true` when `text` is already in `form`.
#[inline]
pub fn is_normalized(text: &str, form: NormalizationForm) -> bool {
    match form {
        NormalizationForm::Nfc => ICU4X_NFC.is_normalized(text),
        NormalizationForm::Nfd => ICU4X_NFD.is_normalized(text),
        NormalizationForm::Nfkc => ICU4X_NFKC.is_normalized(text),
        NormalizationForm::Nfkd => ICU4X_NFKD.is_normalized(text),
    }
}

/// Normalize `text` to `form`. Zero-copy when nothing changes.
pub fn normalize_str(text: &str, form: NormalizationForm) -> Cow<'_, str> {
    if is_normalized(text, form) {
        trace!(form = %form, len = text.len(), "already normalized");
        return Cow::Borrowed(text);
    }
    Cow::Owned(engine::normalize(text, form))
}

/// Normalize `text` to `form` and return the output → input offset map.
///
/// Only NFC and NFKC are accepted; the decomposing forms fail with
/// [`TextError::InvalidNormalizationForm`].
pub fn normalize_str_with_offsets(
    text: &str,
    form: NormalizationForm,
) -> Result<(String, OffsetMap), TextError> {
    if !form.supports_offsets() {
        return Err(TextError::InvalidNormalizationForm(format!(
            "{form} (offset tracking requires NFC or NFKC)"
        )));
    }
    if is_normalized(text, form) {
        trace!(form = %form, len = text.len(), "already normalized, identity map");
        return Ok((text.to_owned(), OffsetMap::identity(text.len())));
    }
    Ok(engine::normalize_with_map(text, form))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrowed_when_already_normalized() {
        let text = "plain ascii";
        assert!(matches!(
            normalize_str(text, NormalizationForm::Nfkc),
            Cow::Borrowed(s) if s.as_ptr() == text.as_ptr()
        ));
    }

    #[test]
    fn owned_when_changed() {
        let out = normalize_str("ﬁ", NormalizationForm::Nfkc);
        assert!(matches!(out, Cow::Owned(_)));
        assert_eq!(out, "fi");
    }

    #[test]
    fn identity_map_for_normalized_input() {
        let (out, map) = normalize_str_with_offsets("abc", NormalizationForm::Nfc).unwrap();
        assert_eq!(out, "abc");
        assert_eq!(map, OffsetMap::identity(3));
    }

    #[test]
    fn decomposing_forms_refuse_offsets() {
        for form in [NormalizationForm::Nfd, NormalizationForm::Nfkd] {
            assert!(matches!(
                normalize_str_with_offsets("abc", form),
                Err(TextError::InvalidNormalizationForm(_))
            ));
        }
    }

    #[test]
    fn empty_input() {
        for form in NormalizationForm::ALL {
            assert_eq!(normalize_str("", form), "");
        }
        let (out, map) = normalize_str_with_offsets("", NormalizationForm::Nfkc).unwrap();
        assert_eq!(out, "");
        assert!(map.records().is_empty());
        assert_eq!(map.source_offset(0), 0);
    }

    #[test]
    fn quick_check_agrees_with_engine() {
        for text in ["café", "cafe\u{0301}", "ﬁ", "한", "\u{1112}\u{1161}"] {
            for form in NormalizationForm::ALL {
                if is_normalized(text, form) {
                    assert_eq!(engine::normalize(text, form), text, "{form} {text:?}");
                }
            }
        }
    }
}
