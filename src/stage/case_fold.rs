//! stage/case_fold.rs – **Unicode default case folding**
//! * Full folding, not lowercasing: `ß` → `ss`, `ς` → `σ`, `ﬃ` → `ffi`
//! * Locale independent (no Turkic dotted/dotless I rules)
//! * Zero-copy when nothing folds

use crate::{error::TextError, stage::Stage};
use std::{borrow::Cow, iter};
use unicode_casefold::UnicodeCaseFold;

/// Public stage – zero-sized, stateless.
#[derive(Debug, Default, Clone, Copy)]
pub struct CaseFold;

#[inline]
fn folds(c: char) -> bool {
    // Fast path: only ASCII uppercase folds below U+0080.
    if c.is_ascii() {
        return c.is_ascii_uppercase();
    }
    !iter::once(c).case_fold().eq(iter::once(c))
}

impl Stage for CaseFold {
    fn name(&self) -> &'static str {
        "case_fold"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        text.chars().any(folds)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, TextError> {
        if !self.needs_apply(&text) {
            return Ok(text);
        }
        if text.is_ascii() {
            let mut owned = text.into_owned();
            owned.make_ascii_lowercase();
            return Ok(Cow::Owned(owned));
        }
        Ok(Cow::Owned(text.chars().case_fold().collect()))
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for CaseFold {
    fn samples() -> &'static [&'static str] {
        &[
            "Hello WORLD",
            " TExt to loWERcase! ",
            "Straße GROẞ",
            "ΣΟΦΟΣ ὈΔΥΣΣΕΎΣ",
            "ﬃ ǅ",
            "",
        ]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "world", "strasse", "σοφοσ", "test123", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            (" TExt to loWERcase! ", " text to lowercase! "),
            ("ß", "ss"),
            ("ẞ", "ss"),
            ("ς", "σ"),
            ("ΘͽʦȺЩ", "θͽʦⱥщ"),
        ]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(CaseFold);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_fast_path_matches_full_fold() {
        let input = "Punctuation and digits: -*/+$#%@%$123456789#^$*%&";
        let out = CaseFold.apply(Cow::Borrowed(input)).unwrap();
        assert_eq!(out, "punctuation and digits: -*/+$#%@%$123456789#^$*%&");
    }

    #[test]
    fn accented_latin() {
        let out = CaseFold
            .apply(Cow::Borrowed("Accented chars: ĎÔPQRŔSŠoóôpqrŕsštťuúvwxyý"))
            .unwrap();
        assert_eq!(out, "accented chars: ďôpqrŕsšoóôpqrŕsštťuúvwxyý");
    }

    #[test]
    fn symbols_untouched() {
        let input = "e.g. ◆, ♥, and the emoji symbol ( ͡° ͜ʖ ͡°)";
        assert!(!CaseFold.needs_apply(input));
        let out = CaseFold.apply(Cow::Borrowed(input)).unwrap();
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn dotted_capital_i_uses_default_mapping() {
        // Default (non-Turkic) full folding: İ → i + combining dot above.
        let out = CaseFold.apply(Cow::Borrowed("İ")).unwrap();
        assert_eq!(out, "i\u{0307}");
    }
}
