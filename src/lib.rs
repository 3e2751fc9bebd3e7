pub mod batch;
pub mod error;
pub mod normalize;
pub mod normalizer;
pub mod ops;
pub mod pipeline;
pub mod sentence;
pub mod stage;
pub mod unicode;
pub mod utf8;

#[cfg(test)]
pub(crate) mod testing;

pub use batch::{
    Ragged, fragment_batch, normalize_batch, normalize_with_offsets_batch, resolve_grouped,
};
pub use error::TextError;
pub use normalize::{
    NormalizationForm, OffsetMap, OffsetRecord, PastEndPolicy, RecordKind, is_normalized,
    normalize_str, normalize_str_with_offsets,
};
pub use normalizer::{Normalizer, NormalizerBuilder, fold_str};
pub use ops::{
    SentenceFragments, case_fold, fragment_sentences, normalize, normalize_with_offsets,
    resolve_offsets,
};
pub use pipeline::Pipeline;
pub use sentence::{
    BreakerConfig, Fragment, FragmentProperties, HeuristicBreaker, NewlineBreaker,
    SentenceBreaker, TerminalPunctuation, fragment_str,
};
pub use stage::Stage;
pub use stage::case_fold::CaseFold;
pub use stage::normalization::{NFC, NFD, NFKC, NFKD};

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
