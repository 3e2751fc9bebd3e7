use crate::error::TextError;
use std::{fmt, str::FromStr};

/// One of the four Unicode normalization forms (UAX #15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NormalizationForm {
    /// Canonical decomposition followed by canonical composition.
    Nfc,
    /// Canonical decomposition.
    Nfd,
    /// Compatibility decomposition followed by canonical composition.
    #[default]
    Nfkc,
    /// Compatibility decomposition.
    Nfkd,
}

impl NormalizationForm {
    pub const ALL: [NormalizationForm; 4] = [Self::Nfc, Self::Nfd, Self::Nfkc, Self::Nfkd];

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nfc => "NFC",
            Self::Nfd => "NFD",
            Self::Nfkc => "NFKC",
            Self::Nfkd => "NFKD",
        }
    }

    /// NFC and NFKC recompose after decomposing.
    #[inline]
    pub const fn is_composing(self) -> bool {
        matches!(self, Self::Nfc | Self::Nfkc)
    }

    /// NFKC and NFKD apply compatibility mappings.
    #[inline]
    pub const fn is_compatibility(self) -> bool {
        matches!(self, Self::Nfkc | Self::Nfkd)
    }

    /// Offset maps are only produced for the composing forms.
    #[inline]
    pub const fn supports_offsets(self) -> bool {
        self.is_composing()
    }
}

impl FromStr for NormalizationForm {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NFC" => Ok(Self::Nfc),
            "NFD" => Ok(Self::Nfd),
            "NFKC" => Ok(Self::Nfkc),
            "NFKD" => Ok(Self::Nfkd),
            _ => Err(TextError::InvalidNormalizationForm(s.to_string())),
        }
    }
}

impl fmt::Display for NormalizationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
