use std::ops::{BitOr, BitOrAssign, Range};

/// Kind of punctuation that closed a fragment, taken from the first unit of
/// the closing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerminalPunctuation {
    /// Fragment ran to the end of the document (or line) without a terminator.
    #[default]
    None,
    Period,
    Exclamation,
    Question,
    Ellipsis,
    Emoticon,
}

/// Bit set describing what a fragment contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FragmentProperties(u16);

impl FragmentProperties {
    pub const NONE: Self = Self(0);
    /// Closing run contains sentence-final punctuation.
    pub const TERMINAL_PUNC: Self = Self(1 << 0);
    pub const EXCLAMATION_MARK: Self = Self(1 << 1);
    pub const QUESTION_MARK: Self = Self(1 << 2);
    pub const ELLIPSIS: Self = Self(1 << 3);
    pub const EMOTICON: Self = Self(1 << 4);
    /// Closing run contains a closing bracket or quote.
    pub const HAS_CLOSE_PUNC: Self = Self(1 << 5);
    /// A period inside the fragment was kept as part of an acronym or initial.
    pub const ABSORBED_ACRONYM: Self = Self(1 << 6);
    /// Terminal punctuation inside brackets was kept inside the fragment.
    pub const PARENTHETICAL: Self = Self(1 << 7);

    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for FragmentProperties {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for FragmentProperties {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// A sentence fragment as a half-open byte range into its document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fragment {
    pub start: usize,
    pub end: usize,
    pub terminal: TerminalPunctuation,
    pub properties: FragmentProperties,
    /// Byte offset where the closing punctuation run begins.
    pub terminal_punc_start: Option<usize>,
}

impl Fragment {
    /// Unterminated fragment covering `start..end`.
    pub fn plain(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            terminal: TerminalPunctuation::None,
            properties: FragmentProperties::NONE,
            terminal_punc_start: None,
        }
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Slice of `doc` this fragment covers (empty if `doc` is not the source).
    pub fn text<'a>(&self, doc: &'a str) -> &'a str {
        doc.get(self.range()).unwrap_or_default()
    }
}
