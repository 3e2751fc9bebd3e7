//! Single-pass state machine behind the heuristic fragmenter.
//!
//! The scanner walks the document once, left to right, and never looks more
//! than one character past the end of a punctuation run.

use super::{
    emoticon,
    fragment::{Fragment, FragmentProperties, TerminalPunctuation},
};
use crate::unicode::{
    is_any_whitespace, is_clause_separator, is_close_bracket, is_close_punct, is_ellipsis_char,
    is_exclamation, is_ideographic_terminal, is_open_bracket, is_question, is_terminal_punct,
};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Ordinary text at bracket depth zero.
    InWord,
    /// Ordinary text inside at least one open bracket. A bracket that is never
    /// closed keeps the scanner here until the end of the document, so every
    /// later terminal run is absorbed as parenthetical.
    InParens,
    /// Inside a run of terminal, ellipsis or closing units.
    InPunctuationRun,
    /// Consuming the bytes of a matched emoticon; nothing inside is classified.
    InEmoticon { until: usize },
}

#[derive(Debug)]
struct Run {
    start: usize,
    kind: TerminalPunctuation,
    props: FragmentProperties,
    /// Run began with a single ASCII `.` (not an ellipsis).
    opened_by_period: bool,
    /// Run began with a terminal of a script that does not space sentences.
    ideographic: bool,
}

impl Run {
    fn glues_to_word(&self) -> bool {
        !self.ideographic
            && !self.props.contains(FragmentProperties::ELLIPSIS)
            && !self.props.contains(FragmentProperties::EMOTICON)
    }
}

pub(crate) struct Scanner<'a> {
    doc: &'a str,
    pos: usize,
    state: State,
    depth: usize,
    frag_start: Option<usize>,
    frag_props: FragmentProperties,
    /// End of the last non-whitespace character seen.
    content_end: usize,
    run: Option<Run>,
    out: Vec<Fragment>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(doc: &'a str) -> Self {
        Self {
            doc,
            pos: 0,
            state: State::InWord,
            depth: 0,
            frag_start: None,
            frag_props: FragmentProperties::NONE,
            content_end: 0,
            run: None,
            out: Vec::new(),
        }
    }

    pub(crate) fn scan(mut self) -> Vec<Fragment> {
        while let Some(c) = self.doc[self.pos..].chars().next() {
            self.step(c);
        }
        self.finish();
        self.out
    }

    fn step(&mut self, c: char) {
        match self.state {
            State::InEmoticon { until } => {
                self.pos += c.len_utf8();
                self.content_end = self.pos;
                if self.pos >= until {
                    self.state = State::InPunctuationRun;
                }
                return;
            }
            State::InPunctuationRun => {
                if self.extend_run(c) {
                    return;
                }
                self.end_run(Some(c));
                // `c` is reclassified below in the state `end_run` left us in.
            }
            State::InWord | State::InParens => {}
        }
        self.step_text(c);
    }

    fn step_text(&mut self, c: char) {
        let pos = self.pos;
        if is_any_whitespace(c) {
            self.pos += c.len_utf8();
            return;
        }
        if self.frag_start.is_none() {
            self.frag_start = Some(pos);
        }

        if let Some(len) = emoticon::match_at(self.doc, pos) {
            self.start_run(pos, TerminalPunctuation::Emoticon, FragmentProperties::EMOTICON, c);
            self.state = State::InEmoticon { until: pos + len };
            self.pos += c.len_utf8();
        } else if let Some(len) = ellipsis_len(self.doc, pos, c) {
            self.start_run(
                pos,
                TerminalPunctuation::Ellipsis,
                FragmentProperties::TERMINAL_PUNC | FragmentProperties::ELLIPSIS,
                c,
            );
            self.state = State::InPunctuationRun;
            self.pos += len;
        } else if is_terminal_punct(c) {
            let (kind, props) = classify_terminal(c);
            self.start_run(pos, kind, props, c);
            self.state = State::InPunctuationRun;
            self.pos += c.len_utf8();
        } else {
            if is_open_bracket(c) {
                self.depth += 1;
            } else if is_close_bracket(c) {
                self.depth = self.depth.saturating_sub(1);
            }
            self.state = self.text_state();
            self.pos += c.len_utf8();
        }
        self.content_end = self.pos;
    }

    /// Try to grow the current run by the unit at `c`.
    fn extend_run(&mut self, c: char) -> bool {
        let pos = self.pos;
        let Some(run) = self.run.as_mut() else {
            return false;
        };

        let len = if let Some(len) = ellipsis_len(self.doc, pos, c) {
            run.props |= FragmentProperties::TERMINAL_PUNC | FragmentProperties::ELLIPSIS;
            len
        } else if is_terminal_punct(c) {
            run.props |= classify_terminal(c).1;
            c.len_utf8()
        } else if is_close_punct(c) {
            run.props |= FragmentProperties::HAS_CLOSE_PUNC;
            if is_close_bracket(c) {
                self.depth = self.depth.saturating_sub(1);
            }
            c.len_utf8()
        } else {
            return false;
        };

        self.pos += len;
        self.content_end = self.pos;
        true
    }

    fn start_run(
        &mut self,
        start: usize,
        kind: TerminalPunctuation,
        props: FragmentProperties,
        first: char,
    ) {
        self.run = Some(Run {
            start,
            kind,
            props,
            opened_by_period: kind == TerminalPunctuation::Period && first == '.',
            ideographic: is_ideographic_terminal(first),
        });
    }

    /// Decide whether the finished run closes the fragment. `next` is the
    /// character right after the run, `None` at end of document.
    fn end_run(&mut self, next: Option<char>) {
        let Some(run) = self.run.take() else {
            return;
        };
        let end = self.pos;

        let absorbed = match next {
            None => None,
            Some(_) if self.depth > 0 => Some(FragmentProperties::PARENTHETICAL),
            // Glued to the next word: acronym (`U.S.'s`), decimal or `Yahoo!Japan`.
            // Ellipses and emoticons still split (`Hello...foo`).
            Some(n) if n.is_alphanumeric() && run.glues_to_word() => {
                let after_letter = self.doc[..run.start]
                    .chars()
                    .next_back()
                    .is_some_and(char::is_alphabetic);
                Some(if run.opened_by_period && after_letter {
                    FragmentProperties::ABSORBED_ACRONYM
                } else {
                    FragmentProperties::NONE
                })
            }
            Some(n) if is_clause_separator(n) => Some(FragmentProperties::NONE),
            Some(_) => None,
        };

        if let Some(props) = absorbed {
            trace!(start = run.start, end, depth = self.depth, "punctuation run absorbed");
            self.frag_props |= props;
            self.state = self.text_state();
            return;
        }

        let start = self.frag_start.take().unwrap_or(run.start);
        self.out.push(Fragment {
            start,
            end,
            terminal: run.kind,
            properties: self.frag_props | run.props,
            terminal_punc_start: Some(run.start),
        });
        self.frag_props = FragmentProperties::NONE;
        self.state = self.text_state();
    }

    fn finish(&mut self) {
        self.end_run(None);
        if let Some(start) = self.frag_start.take() {
            let mut fragment = Fragment::plain(start, self.content_end);
            fragment.properties = self.frag_props;
            self.out.push(fragment);
        }
    }

    #[inline]
    fn text_state(&self) -> State {
        if self.depth > 0 {
            State::InParens
        } else {
            State::InWord
        }
    }
}

/// Byte length of an ellipsis unit at `pos`: `…` or two or more `.`.
fn ellipsis_len(doc: &str, pos: usize, c: char) -> Option<usize> {
    if is_ellipsis_char(c) {
        return Some(c.len_utf8());
    }
    if c != '.' {
        return None;
    }
    let dots = doc.as_bytes()[pos..]
        .iter()
        .take_while(|&&b| b == b'.')
        .count();
    (dots >= 2).then_some(dots)
}

fn classify_terminal(c: char) -> (TerminalPunctuation, FragmentProperties) {
    let mut props = FragmentProperties::TERMINAL_PUNC;
    if is_exclamation(c) {
        props |= FragmentProperties::EXCLAMATION_MARK;
    }
    if is_question(c) {
        props |= FragmentProperties::QUESTION_MARK;
    }
    // ⁈ reads as a question first, ⁉ as an exclamation first.
    let kind = match c {
        '\u{2048}' => TerminalPunctuation::Question,
        _ if is_exclamation(c) => TerminalPunctuation::Exclamation,
        _ if is_question(c) => TerminalPunctuation::Question,
        _ => TerminalPunctuation::Period,
    };
    (kind, props)
}
