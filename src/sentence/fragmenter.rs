use super::{SentenceBreaker, fragment::Fragment, scanner::Scanner};
use tracing::debug;

/// Split `doc` into sentence fragments with byte offsets and classification.
///
/// Never fails; an empty or whitespace-only document yields no fragments.
pub fn fragment_str(doc: &str) -> Vec<Fragment> {
    let fragments = Scanner::new(doc).scan();
    debug!(len = doc.len(), fragments = fragments.len(), "fragmented document");
    fragments
}

/// Punctuation-driven breaker that accounts for acronyms, brackets, ellipses
/// and emoticons.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicBreaker;

impl SentenceBreaker for HeuristicBreaker {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn break_sentences_with_offsets(&self, doc: &str) -> Vec<Fragment> {
        fragment_str(doc)
    }
}
