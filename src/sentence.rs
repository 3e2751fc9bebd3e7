//! Sentence fragmentation.
//!
//! Two breakers share one trait: [`HeuristicBreaker`] looks at punctuation,
//! brackets and emoticons; [`NewlineBreaker`] splits on a delimiter pattern.
//! Both report half-open byte ranges into the input document.

pub mod emoticon;
pub mod fragment;
pub mod fragmenter;
pub mod newline;
mod scanner;

pub use fragment::{Fragment, FragmentProperties, TerminalPunctuation};
pub use fragmenter::{HeuristicBreaker, fragment_str};
pub use newline::NewlineBreaker;

use crate::error::TextError;

pub trait SentenceBreaker: Send + Sync {
    fn name(&self) -> &'static str;

    /// Fragments of `doc` in order, non-overlapping.
    fn break_sentences_with_offsets(&self, doc: &str) -> Vec<Fragment>;

    fn break_sentences<'a>(&self, doc: &'a str) -> Vec<&'a str> {
        self.break_sentences_with_offsets(doc)
            .iter()
            .map(|f| f.text(doc))
            .collect()
    }
}

/// Which breaker to build.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum BreakerConfig {
    /// Split on `pattern` (default `\r?\n`).
    Newline {
        #[cfg_attr(feature = "serde", serde(default))]
        pattern: Option<String>,
    },
    #[default]
    Heuristic,
}

impl BreakerConfig {
    pub fn build(&self) -> Result<Box<dyn SentenceBreaker>, TextError> {
        let breaker: Box<dyn SentenceBreaker> = match self {
            Self::Newline { pattern } => Box::new(NewlineBreaker::new(pattern.as_deref())?),
            Self::Heuristic => Box::new(HeuristicBreaker),
        };
        Ok(breaker)
    }
}
