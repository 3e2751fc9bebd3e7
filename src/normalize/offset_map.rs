//! Correspondence between normalized (output) and original (input) byte offsets.
//!
//! An [`OffsetMap`] is an ordered table of [`OffsetRecord`]s. Each record maps
//! a contiguous output byte range onto a contiguous input byte range; the
//! records tile both strings completely, without gaps, and are monotonic in
//! both dimensions.
//!
//! ```text
//!  input   株 式 会 社 Ｋ  Ａ  Ｄ ...      (3 bytes per scalar)
//!          └──── 0..12 ───┘└12..15┘└15..18┘
//!  output  株 式 会 社 K  A  D ...
//!          └──── 0..12 ───┘ 12    13
//!          Unchanged        Changed Changed
//! ```
//!
//! * `Unchanged` records are byte-identical copies, so every interior offset
//!   maps one-to-one.
//! * `Changed` records were produced atomically from their whole input range,
//!   so an interior offset resolves to the input start (left bias).

use crate::error::TextError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Unchanged,
    Changed,
}

/// One correspondence record: `output_start..output_end` was produced from
/// `input_start..input_end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetRecord {
    pub output_start: usize,
    pub output_end: usize,
    pub input_start: usize,
    pub input_end: usize,
    pub kind: RecordKind,
}

impl OffsetRecord {
    #[inline]
    fn resolve_interior(&self, offset: usize) -> usize {
        match self.kind {
            RecordKind::Unchanged => self.input_start + (offset - self.output_start),
            RecordKind::Changed => self.input_start,
        }
    }
}

/// What to do with an output offset greater than the normalized length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PastEndPolicy {
    /// Resolve to the input length.
    #[default]
    Clamp,
    /// Fail with [`TextError::OffsetOutOfRange`].
    Reject,
}

/// Offset map produced by one normalization call. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OffsetMap {
    input_len: usize,
    output_len: usize,
    records: Vec<OffsetRecord>,
}

impl OffsetMap {
    /// Map for text that normalization left untouched.
    pub fn identity(len: usize) -> Self {
        let records = if len == 0 {
            Vec::new()
        } else {
            vec![OffsetRecord {
                output_start: 0,
                output_end: len,
                input_start: 0,
                input_end: len,
                kind: RecordKind::Unchanged,
            }]
        };
        Self {
            input_len: len,
            output_len: len,
            records,
        }
    }

    #[inline]
    pub fn input_len(&self) -> usize {
        self.input_len
    }

    #[inline]
    pub fn output_len(&self) -> usize {
        self.output_len
    }

    #[inline]
    pub fn records(&self) -> &[OffsetRecord] {
        &self.records
    }

    /// `(output, input)` pairs for every record start plus the end of both strings.
    pub fn boundaries(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.records
            .iter()
            .map(|r| (r.output_start, r.input_start))
            .chain(std::iter::once((self.output_len, self.input_len)))
    }

    /// Resolve one in-range output offset. Offsets at or past the end of the
    /// output resolve to the input length.
    pub fn source_offset(&self, offset: usize) -> usize {
        if offset >= self.output_len {
            return self.input_len;
        }
        let idx = self.records.partition_point(|r| r.output_end <= offset);
        match self.records.get(idx) {
            Some(record) => record.resolve_interior(offset),
            None => self.input_len,
        }
    }

    /// Resolve caller-supplied output offsets to input offsets.
    pub fn resolve(&self, offsets: &[i64], policy: PastEndPolicy) -> Result<Vec<i64>, TextError> {
        offsets
            .iter()
            .map(|&offset| self.resolve_one(offset, policy))
            .collect()
    }

    fn resolve_one(&self, offset: i64, policy: PastEndPolicy) -> Result<i64, TextError> {
        let out_of_range = || TextError::OffsetOutOfRange {
            offset,
            len: self.output_len,
        };
        let Ok(unsigned) = usize::try_from(offset) else {
            return Err(out_of_range());
        };
        if unsigned > self.output_len && policy == PastEndPolicy::Reject {
            return Err(out_of_range());
        }
        Ok(self.source_offset(unsigned) as i64)
    }
}

#[derive(Debug, Clone, Copy)]
struct Span {
    output_start: usize,
    output_end: usize,
    input_start: usize,
    input_end: usize,
}

impl Span {
    #[inline]
    fn absorb(self, later: Span) -> Span {
        Span {
            output_start: self.output_start,
            output_end: later.output_end,
            input_start: self.input_start.min(later.input_start),
            input_end: self.input_end.max(later.input_end),
        }
    }
}

/// Accumulates per-scalar spans in output order and folds them into records.
///
/// A span whose input start lies before the input end of the previous span
/// (several scalars from one input scalar, or marks swapped by canonical
/// ordering) is merged backwards until the stack is monotonic again.
#[derive(Debug, Default)]
pub(crate) struct RecordBuilder {
    spans: Vec<Span>,
}

impl RecordBuilder {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            spans: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(
        &mut self,
        output_start: usize,
        output_end: usize,
        input_start: usize,
        input_end: usize,
    ) {
        let mut span = Span {
            output_start,
            output_end,
            input_start,
            input_end,
        };
        while self
            .spans
            .last()
            .is_some_and(|top| span.input_start < top.input_end)
        {
            if let Some(top) = self.spans.pop() {
                span = top.absorb(span);
            }
        }
        self.spans.push(span);
    }

    pub(crate) fn finish(self, input: &str, output: &str) -> OffsetMap {
        let (inb, outb) = (input.as_bytes(), output.as_bytes());
        let mut records: Vec<OffsetRecord> = Vec::with_capacity(self.spans.len());

        for span in self.spans {
            let kind = if outb[span.output_start..span.output_end]
                == inb[span.input_start..span.input_end]
            {
                RecordKind::Unchanged
            } else {
                RecordKind::Changed
            };

            // Adjacent identity copies collapse into one record.
            if kind == RecordKind::Unchanged {
                if let Some(last) = records.last_mut() {
                    if last.kind == RecordKind::Unchanged {
                        last.output_end = span.output_end;
                        last.input_end = span.input_end;
                        continue;
                    }
                }
            }

            records.push(OffsetRecord {
                output_start: span.output_start,
                output_end: span.output_end,
                input_start: span.input_start,
                input_end: span.input_end,
                kind,
            });
        }

        OffsetMap {
            input_len: input.len(),
            output_len: output.len(),
            records,
        }
    }
}
