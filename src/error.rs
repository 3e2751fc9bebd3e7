use thiserror::Error;

/// Every failure a single-string operation can report.
///
/// Errors are local to one string or document; batch helpers return one
/// `Result` per element so a failure never poisons its siblings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    #[error("input is not valid UTF-8: {0}")]
    InvalidEncoding(String),

    #[error("invalid normalization form `{0}` (expected one of NFC, NFD, NFKC, NFKD)")]
    InvalidNormalizationForm(String),

    #[error("offset {offset} is out of range for normalized text of length {len}")]
    OffsetOutOfRange { offset: i64, len: usize },

    #[error("offset grouping does not match document grouping: {0}")]
    GroupingMismatch(String),

    #[error("invalid sentence delimiter pattern: {0}")]
    InvalidPattern(String),
}
