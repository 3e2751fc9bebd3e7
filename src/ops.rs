//! Flat, per-string entry points over raw UTF-8 bytes.
//!
//! Each call validates its input, does one thing, and returns owned values
//! so a batching layer can collect results without lifetimes.

use crate::{
    error::TextError,
    normalize::{
        NormalizationForm, OffsetMap, PastEndPolicy, normalize_str, normalize_str_with_offsets,
    },
    normalizer::fold_str,
    sentence::fragment_str,
    utf8,
};

/// Fragment texts with their byte offsets, as three parallel vectors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SentenceFragments {
    pub fragments: Vec<String>,
    pub starts: Vec<i64>,
    pub ends: Vec<i64>,
}

impl SentenceFragments {
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// Default case folding followed by NFKC.
pub fn case_fold(bytes: &[u8]) -> Result<String, TextError> {
    let text = utf8::validate(bytes)?;
    Ok(fold_str(text)?.into_owned())
}

/// Normalize to the form named by `form_name` (case-insensitive).
pub fn normalize(bytes: &[u8], form_name: &str) -> Result<String, TextError> {
    let form: NormalizationForm = form_name.parse()?;
    let text = utf8::validate(bytes)?;
    Ok(normalize_str(text, form).into_owned())
}

/// Normalize to NFC or NFKC and return the output → input offset map.
pub fn normalize_with_offsets(
    bytes: &[u8],
    form_name: &str,
) -> Result<(String, OffsetMap), TextError> {
    let form: NormalizationForm = form_name.parse()?;
    let text = utf8::validate(bytes)?;
    normalize_str_with_offsets(text, form)
}

/// Map output byte offsets back to input byte offsets.
///
/// Offsets past the end of the output clamp to the input length; see
/// [`OffsetMap::resolve`] for the strict variant.
pub fn resolve_offsets(map: &OffsetMap, offsets: &[i64]) -> Result<Vec<i64>, TextError> {
    map.resolve(offsets, PastEndPolicy::Clamp)
}

/// Heuristic sentence fragments of one document.
pub fn fragment_sentences(bytes: &[u8]) -> Result<SentenceFragments, TextError> {
    let doc = utf8::validate(bytes)?;
    let found = fragment_str(doc);

    let mut out = SentenceFragments {
        fragments: Vec::with_capacity(found.len()),
        starts: Vec::with_capacity(found.len()),
        ends: Vec::with_capacity(found.len()),
    };
    for f in &found {
        out.fragments.push(f.text(doc).to_owned());
        out.starts.push(f.start as i64);
        out.ends.push(f.end as i64);
    }
    Ok(out)
}
