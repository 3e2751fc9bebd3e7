use super::{SentenceBreaker, fragment::Fragment};
use crate::error::TextError;
use memchr::memchr_iter;
use regex::Regex;

/// Pattern used when none (or an empty one) is given.
pub const DEFAULT_DELIMITER: &str = r"\r?\n";

#[derive(Debug, Clone)]
enum Delimiter {
    /// `\r?\n`, served by a byte scan.
    LineFeed,
    Pattern(Regex),
}

/// Breaks a document into the spans between delimiter matches.
///
/// Spans are reported verbatim (no trimming); empty spans are dropped.
#[derive(Debug, Clone)]
pub struct NewlineBreaker {
    delimiter: Delimiter,
}

impl Default for NewlineBreaker {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::LineFeed,
        }
    }
}

impl NewlineBreaker {
    /// Breaker for `pattern`, or for [`DEFAULT_DELIMITER`] when `pattern` is
    /// `None` or empty.
    pub fn new(pattern: Option<&str>) -> Result<Self, TextError> {
        match pattern {
            None => Ok(Self::default()),
            Some(p) => Self::with_pattern(p),
        }
    }

    pub fn with_pattern(pattern: &str) -> Result<Self, TextError> {
        if pattern.is_empty() || pattern == DEFAULT_DELIMITER {
            return Ok(Self::default());
        }
        let regex = Regex::new(pattern).map_err(|e| TextError::InvalidPattern(e.to_string()))?;
        Ok(Self {
            delimiter: Delimiter::Pattern(regex),
        })
    }

    /// The delimiter pattern this breaker splits on.
    pub fn pattern(&self) -> &str {
        match &self.delimiter {
            Delimiter::LineFeed => DEFAULT_DELIMITER,
            Delimiter::Pattern(re) => re.as_str(),
        }
    }

    fn line_feed_spans(doc: &str) -> Vec<Fragment> {
        let bytes = doc.as_bytes();
        let mut out = Vec::new();
        let mut start = 0;
        for i in memchr_iter(b'\n', bytes) {
            let end = if i > start && bytes[i - 1] == b'\r' { i - 1 } else { i };
            push_span(&mut out, start, end);
            start = i + 1;
        }
        push_span(&mut out, start, bytes.len());
        out
    }

    fn pattern_spans(re: &Regex, doc: &str) -> Vec<Fragment> {
        let mut out = Vec::new();
        let mut start = 0;
        for m in re.find_iter(doc) {
            push_span(&mut out, start, m.start());
            start = start.max(m.end());
        }
        push_span(&mut out, start, doc.len());
        out
    }
}

#[inline]
fn push_span(out: &mut Vec<Fragment>, start: usize, end: usize) {
    if end > start {
        out.push(Fragment::plain(start, end));
    }
}

impl SentenceBreaker for NewlineBreaker {
    fn name(&self) -> &'static str {
        "newline"
    }

    fn break_sentences_with_offsets(&self, doc: &str) -> Vec<Fragment> {
        match &self.delimiter {
            Delimiter::LineFeed => Self::line_feed_spans(doc),
            Delimiter::Pattern(re) => Self::pattern_spans(re, doc),
        }
    }
}
