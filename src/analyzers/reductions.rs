//! Column reductions used by the trip reports.
//!
//! Every reduction that has no meaningful value on empty input returns
//! [`BikeshareError::EmptyFilterResult`]. Ties are broken in favour of the
//! value seen first.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{BikeshareError, Result};

/// Occurrence counts in first-seen order.
fn tally<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut positions: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for value in values {
        match positions.get(&value) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    counts
}

/// Most frequent value and its count.
pub fn mode<T, I>(values: I, what: &str) -> Result<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<(T, usize)> = None;

    for (value, count) in tally(values) {
        // strictly greater, so the earliest value keeps a tie
        if best.as_ref().map_or(true, |(_, top)| count > *top) {
            best = Some((value, count));
        }
    }

    best.ok_or_else(|| empty(what))
}

/// Counts per distinct value, highest first. Equal counts keep first-seen order.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut counts = tally(values);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

pub fn minimum<T, I>(values: I, what: &str) -> Result<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    values.into_iter().min().ok_or_else(|| empty(what))
}

pub fn maximum<T, I>(values: I, what: &str) -> Result<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    values.into_iter().max().ok_or_else(|| empty(what))
}

pub fn sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().sum()
}

pub fn mean<I>(values: I, what: &str) -> Result<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (total, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(total, count), v| (total + v, count + 1));

    if count == 0 {
        return Err(empty(what));
    }
    Ok(total / count as f64)
}

fn empty(what: &str) -> BikeshareError {
    BikeshareError::EmptyFilterResult(what.to_string())
}
