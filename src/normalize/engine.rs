//! Decompose → canonically order → (re)compose, with every scalar tagged by
//! the input byte range it came from.
//!
//! Character data (full recursive decompositions including Hangul, canonical
//! combining classes, primary composites minus exclusions) comes from
//! `unicode-normalization`; the algorithm and the offset bookkeeping live here.

use super::{
    form::NormalizationForm,
    offset_map::{OffsetMap, RecordBuilder},
};
use smallvec::SmallVec;
use tracing::trace;
use unicode_normalization::char::{
    canonical_combining_class, compose, decompose_canonical, decompose_compatible,
};

/// A scalar value plus the input byte range responsible for it.
#[derive(Debug, Clone, Copy)]
struct Tracked {
    ch: char,
    ccc: u8,
    start: usize,
    end: usize,
}

fn decompose_into(text: &str, form: NormalizationForm, buf: &mut Vec<Tracked>) {
    for (start, c) in text.char_indices() {
        let end = start + c.len_utf8();
        let mut parts: SmallVec<[char; 4]> = SmallVec::new();
        if form.is_compatibility() {
            decompose_compatible(c, |d| parts.push(d));
        } else {
            decompose_canonical(c, |d| parts.push(d));
        }
        for ch in parts {
            push_ordered(
                buf,
                Tracked {
                    ch,
                    ccc: canonical_combining_class(ch),
                    start,
                    end,
                },
            );
        }
    }
}

/// Canonical ordering as a stable insertion sort: a non-starter sinks left
/// past every preceding non-starter with a strictly greater class.
#[inline]
fn push_ordered(buf: &mut Vec<Tracked>, t: Tracked) {
    buf.push(t);
    if t.ccc == 0 {
        return;
    }
    let mut i = buf.len() - 1;
    while i > 0 && buf[i - 1].ccc > t.ccc {
        buf.swap(i - 1, i);
        i -= 1;
    }
}

/// Canonical composition over an already ordered buffer.
fn recompose(buf: Vec<Tracked>) -> Vec<Tracked> {
    let mut out: Vec<Tracked> = Vec::with_capacity(buf.len());
    let mut starter: Option<usize> = None;
    // Class of the last scalar kept since `starter`; `None` when adjacent.
    let mut last_ccc: Option<u8> = None;

    for t in buf {
        if let Some(si) = starter {
            let blocked = last_ccc.is_some_and(|lc| lc >= t.ccc);
            if !blocked {
                if let Some(composite) = compose(out[si].ch, t.ch) {
                    let s = &mut out[si];
                    s.ch = composite;
                    s.start = s.start.min(t.start);
                    s.end = s.end.max(t.end);
                    continue;
                }
            }
        }
        if t.ccc == 0 {
            starter = Some(out.len());
            last_ccc = None;
        } else {
            last_ccc = Some(t.ccc);
        }
        out.push(t);
    }
    out
}

fn transform(text: &str, form: NormalizationForm) -> Vec<Tracked> {
    let mut buf = Vec::with_capacity(text.len());
    decompose_into(text, form, &mut buf);
    if form.is_composing() {
        recompose(buf)
    } else {
        buf
    }
}

/// Normalize without offset bookkeeping.
pub(crate) fn normalize(text: &str, form: NormalizationForm) -> String {
    transform(text, form).iter().map(|t| t.ch).collect()
}

/// Normalize and build the output → input offset map.
pub(crate) fn normalize_with_map(text: &str, form: NormalizationForm) -> (String, OffsetMap) {
    let scalars = transform(text, form);
    let mut output = String::with_capacity(text.len());
    let mut records = RecordBuilder::with_capacity(scalars.len());

    for t in &scalars {
        let output_start = output.len();
        output.push(t.ch);
        records.push(output_start, output.len(), t.start, t.end);
    }

    let map = records.finish(text, &output);
    trace!(
        form = %form,
        input_len = text.len(),
        output_len = output.len(),
        records = map.records().len(),
        "built offset map"
    );
    (output, map)
}
