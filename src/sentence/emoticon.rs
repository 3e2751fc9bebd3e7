use crate::unicode::is_any_whitespace;
use phf::{Set, phf_set};

/// Longest entry in [`EMOTICONS`], in bytes.
pub const MAX_EMOTICON_LEN: usize = 8;

/// ASCII emoticons that may close a fragment.
///
/// Entries never start with a letter or digit, so prose words are never
/// mistaken for an emoticon prefix.
pub static EMOTICONS: Set<&'static str> = phf_set! {
    ":)", ":-)", ":(", ":-(", ":]", ":-]", ":[", ":-[",
    ":D", ":-D", ":P", ":-P", ":p", ":-p", ":O", ":-O", ":o", ":-o",
    ":/", ":-/", ":\\", ":-\\", ":|", ":-|", ":*", ":-*", ":3", ":X", ":-X",
    ":'(", ":'-(", ":')", ":'-)",
    ";)", ";-)", ";D", ";-D", ";P", ";-P",
    "=)", "=(", "=D", "=P", "=]", "=[",
    ">:(", ">:-(", ">:)", ">:-)",
    "|-O", "|-)", "|-(",
    "<3", "</3", "\\o/",
    "^_^", "^^", "^o^", "-_-", "-.-",
    "(^_^)", "(-_-)", "(>_<)", "(;_;)", "(^o^)", "(=^..^=)",
};

/// Byte length of the longest emoticon starting at `pos`, if one is allowed
/// there: `pos` must start the document or follow whitespace, and the
/// character after the match must not be alphanumeric.
pub fn match_at(doc: &str, pos: usize) -> Option<usize> {
    let preceded_ok = doc
        .get(..pos)?
        .chars()
        .next_back()
        .is_none_or(is_any_whitespace);
    if !preceded_ok {
        return None;
    }

    let max = MAX_EMOTICON_LEN.min(doc.len() - pos);
    (2..=max).rev().find(|&len| {
        let Some(candidate) = doc.get(pos..pos + len) else {
            return false;
        };
        EMOTICONS.contains(candidate)
            && !doc[pos + len..]
                .chars()
                .next()
                .is_some_and(char::is_alphanumeric)
    })
}
