//! Batches of independent documents and ragged (nested) offset queries.
//!
//! Every document is processed on its own; one bad element never fails its
//! siblings. With the `parallel` feature the helpers fan out over rayon's
//! global pool and still return results in input order.

use crate::{
    error::TextError,
    normalize::{OffsetMap, PastEndPolicy},
    ops::{self, SentenceFragments},
};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Flat values plus one row-split vector per nesting level, outermost first.
///
/// `nested_row_splits[k]` partitions the rows of level `k + 1` (or the values,
/// for the last level): row `r` spans `splits[r]..splits[r + 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ragged<T> {
    values: Vec<T>,
    nested_row_splits: Vec<Vec<usize>>,
}

impl<T> Ragged<T> {
    /// Checks that every split vector starts at 0, never decreases and ends
    /// at the size of the level below it.
    pub fn new(values: Vec<T>, nested_row_splits: Vec<Vec<usize>>) -> Result<Self, TextError> {
        for (level, splits) in nested_row_splits.iter().enumerate() {
            let inner_len = match nested_row_splits.get(level + 1) {
                Some(next) => next.len().saturating_sub(1),
                None => values.len(),
            };
            if splits.first() != Some(&0) {
                return Err(TextError::GroupingMismatch(format!(
                    "row splits at level {level} must start at 0"
                )));
            }
            if splits.windows(2).any(|w| w[0] > w[1]) {
                return Err(TextError::GroupingMismatch(format!(
                    "row splits at level {level} decrease"
                )));
            }
            if splits.last() != Some(&inner_len) {
                return Err(TextError::GroupingMismatch(format!(
                    "row splits at level {level} end at {:?}, expected {inner_len}",
                    splits.last()
                )));
            }
        }
        Ok(Self {
            values,
            nested_row_splits,
        })
    }

    /// No nesting: a plain list of values.
    pub fn flat(values: Vec<T>) -> Self {
        Self {
            values,
            nested_row_splits: Vec::new(),
        }
    }

    /// One level of nesting built from explicit rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let mut splits = Vec::with_capacity(rows.len() + 1);
        splits.push(0);
        let mut values = Vec::new();
        for row in rows {
            values.extend(row);
            splits.push(values.len());
        }
        Self {
            values,
            nested_row_splits: vec![splits],
        }
    }

    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    #[inline]
    pub fn nested_row_splits(&self) -> &[Vec<usize>] {
        &self.nested_row_splits
    }

    /// Number of nesting levels above the values.
    #[inline]
    pub fn ragged_rank(&self) -> usize {
        self.nested_row_splits.len()
    }

    /// Innermost rows as slices of the values. Empty for a flat list.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.nested_row_splits
            .last()
            .into_iter()
            .flat_map(|splits| splits.windows(2))
            .map(|w| &self.values[w[0]..w[1]])
    }

    pub fn into_parts(self) -> (Vec<T>, Vec<Vec<usize>>) {
        (self.values, self.nested_row_splits)
    }
}

/// Resolve offsets grouped one level deeper than the documents that produced
/// `maps`. Offset row `i` is resolved against map `i`; the outer grouping of
/// both must be identical.
///
/// Rows are never paired up by skipping documents: an empty document still
/// needs its own (possibly empty) offset row, and offsets whose row count
/// differs from the number of documents fail with `GroupingMismatch` even when
/// their depth matches.
pub fn resolve_grouped(
    maps: &Ragged<OffsetMap>,
    offsets: &Ragged<i64>,
) -> Result<Ragged<i64>, TextError> {
    let doc_rank = maps.ragged_rank();
    if offsets.ragged_rank() != doc_rank + 1 {
        return Err(TextError::GroupingMismatch(format!(
            "offsets have {} nesting levels, documents have {doc_rank}; expected {}",
            offsets.ragged_rank(),
            doc_rank + 1
        )));
    }
    if offsets.nested_row_splits()[..doc_rank] != *maps.nested_row_splits() {
        return Err(TextError::GroupingMismatch(
            "outer row splits of offsets differ from documents".into(),
        ));
    }
    let row_count = offsets.nested_row_splits()[doc_rank].len().saturating_sub(1);
    if row_count != maps.values().len() {
        return Err(TextError::GroupingMismatch(format!(
            "{row_count} offset rows for {} documents",
            maps.values().len()
        )));
    }

    let mut values = Vec::with_capacity(offsets.values().len());
    for (map, row) in maps.values().iter().zip(offsets.rows()) {
        values.extend(map.resolve(row, PastEndPolicy::Clamp)?);
    }
    debug!(
        documents = maps.values().len(),
        offsets = values.len(),
        "resolved grouped offsets"
    );
    Ragged::new(values, offsets.nested_row_splits().to_vec())
}

#[cfg(feature = "parallel")]
fn map_docs<S, R, F>(docs: &[S], f: F) -> Vec<R>
where
    S: AsRef<[u8]> + Sync,
    R: Send,
    F: Fn(&[u8]) -> R + Sync + Send,
{
    docs.par_iter().map(|d| f(d.as_ref())).collect()
}

#[cfg(not(feature = "parallel"))]
fn map_docs<S, R, F>(docs: &[S], f: F) -> Vec<R>
where
    S: AsRef<[u8]> + Sync,
    R: Send,
    F: Fn(&[u8]) -> R + Sync + Send,
{
    docs.iter().map(|d| f(d.as_ref())).collect()
}

pub fn normalize_batch<S>(docs: &[S], form_name: &str) -> Vec<Result<String, TextError>>
where
    S: AsRef<[u8]> + Sync,
{
    debug!(docs = docs.len(), form = form_name, "normalize batch");
    map_docs(docs, |d| ops::normalize(d, form_name))
}

pub fn normalize_with_offsets_batch<S>(
    docs: &[S],
    form_name: &str,
) -> Vec<Result<(String, OffsetMap), TextError>>
where
    S: AsRef<[u8]> + Sync,
{
    debug!(docs = docs.len(), form = form_name, "normalize-with-offsets batch");
    map_docs(docs, |d| ops::normalize_with_offsets(d, form_name))
}

pub fn fragment_batch<S>(docs: &[S]) -> Vec<Result<SentenceFragments, TextError>>
where
    S: AsRef<[u8]> + Sync,
{
    debug!(docs = docs.len(), "fragment batch");
    map_docs(docs, ops::fragment_sentences)
}
