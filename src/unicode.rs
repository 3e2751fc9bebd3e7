// Character classes used by the sentence scanner.
//
// Everything here is a branch-only `matches!` over code points; no tables,
// no allocation.

/// Sentence-final punctuation (a lone ASCII `.` is further checked for acronyms).
#[inline(always)]
pub const fn is_terminal_punct(c: char) -> bool {
    matches!(
        c,
        '.' | '!' | '?' |
        '\u{203C}' | // ‼ DOUBLE EXCLAMATION MARK
        '\u{2047}' | // ⁇ DOUBLE QUESTION MARK
        '\u{2048}' | // ⁈ QUESTION EXCLAMATION MARK
        '\u{2049}' | // ⁉ EXCLAMATION QUESTION MARK
        '\u{3002}' | // 。 IDEOGRAPHIC FULL STOP
        '\u{FF01}' | // ！ FULLWIDTH EXCLAMATION MARK
        '\u{FF1F}' | // ？ FULLWIDTH QUESTION MARK
        '\u{FF61}' // ｡ HALFWIDTH IDEOGRAPHIC FULL STOP
    )
}

#[inline(always)]
pub const fn is_exclamation(c: char) -> bool {
    matches!(c, '!' | '\u{203C}' | '\u{2048}' | '\u{2049}' | '\u{FF01}')
}

#[inline(always)]
pub const fn is_question(c: char) -> bool {
    matches!(c, '?' | '\u{2047}' | '\u{2048}' | '\u{2049}' | '\u{FF1F}')
}

/// U+2026 HORIZONTAL ELLIPSIS. Runs of two or more `.` are handled by the scanner.
#[inline(always)]
pub const fn is_ellipsis_char(c: char) -> bool {
    c == '\u{2026}'
}

/// Brackets that open a parenthetical aside and raise the nesting depth.
#[inline(always)]
pub const fn is_open_bracket(c: char) -> bool {
    matches!(
        c,
        '(' | '[' | '{' |
        '\u{FF08}' | // （
        '\u{FF3B}' | // ［
        '\u{FF5B}' | // ｛
        '\u{300C}' | // 「
        '\u{300E}' | // 『
        '\u{3010}' | // 【
        '\u{3008}' | // 〈
        '\u{300A}' | // 《
        '\u{3014}' // 〔
    )
}

/// Brackets that close a parenthetical aside and lower the nesting depth.
#[inline(always)]
pub const fn is_close_bracket(c: char) -> bool {
    matches!(
        c,
        ')' | ']' | '}' |
        '\u{FF09}' | // ）
        '\u{FF3D}' | // ］
        '\u{FF5D}' | // ｝
        '\u{300D}' | // 」
        '\u{300F}' | // 』
        '\u{3011}' | // 】
        '\u{3009}' | // 〉
        '\u{300B}' | // 》
        '\u{3015}' // 〕
    )
}

/// Punctuation that may trail a terminal run without starting a new fragment.
#[inline(always)]
pub const fn is_close_punct(c: char) -> bool {
    is_close_bracket(c)
        || matches!(
            c,
            '"' | '\'' |
            '\u{2019}' | // ’
            '\u{201D}' | // ”
            '\u{00BB}' | // »
            '\u{203A}' // ›
        )
}

/// Terminals of scripts written without spaces between sentences; these end a
/// fragment even when the next sentence follows with no whitespace.
#[inline(always)]
pub const fn is_ideographic_terminal(c: char) -> bool {
    matches!(c, '\u{3002}' | '\u{FF01}' | '\u{FF1F}' | '\u{FF61}')
}

/// Separators after which a clause is known to continue.
#[inline(always)]
pub const fn is_clause_separator(c: char) -> bool {
    matches!(c, ',' | ';' | ':' | '\u{3001}' | '\u{FF0C}' | '\u{FF1B}' | '\u{FF1A}')
}

// Whitespace not covered by `char::is_whitespace` that still separates text
// in practice (zero-width and BOM).
#[inline(always)]
pub const fn is_invisible_separator(c: char) -> bool {
    matches!(c as u32, 0x200B | 0x2060 | 0xFEFF)
}

#[inline(always)]
pub fn is_any_whitespace(c: char) -> bool {
    c.is_whitespace() || is_invisible_separator(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_and_subclasses() {
        for c in ['.', '!', '?', '。', '！', '？', '‼', '⁉'] {
            assert!(is_terminal_punct(c), "{c}");
        }
        assert!(!is_terminal_punct(';'));
        assert!(!is_terminal_punct(','));
        assert!(is_exclamation('⁉') && is_question('⁉'));
        assert!(!is_exclamation('.'));
        assert!(is_ideographic_terminal('。') && is_ideographic_terminal('！'));
        assert!(!is_ideographic_terminal('.') && !is_ideographic_terminal('!'));
    }

    #[test]
    fn brackets_pair_up() {
        for (open, close) in [('(', ')'), ('[', ']'), ('「', '」'), ('（', '）')] {
            assert!(is_open_bracket(open));
            assert!(is_close_bracket(close));
            assert!(is_close_punct(close));
            assert!(!is_open_bracket(close));
        }
    }

    #[test]
    fn quotes_close_but_do_not_nest() {
        assert!(is_close_punct('"'));
        assert!(is_close_punct('”'));
        assert!(!is_close_bracket('"'));
        assert!(!is_open_bracket('"'));
    }

    #[test]
    fn whitespace() {
        assert!(is_any_whitespace(' '));
        assert!(is_any_whitespace('\u{3000}'));
        assert!(is_any_whitespace('\u{FEFF}'));
        assert!(!is_any_whitespace('a'));
    }
}
