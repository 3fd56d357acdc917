//! Statistical primitives shared by the analysis operations.
//!
//! The index conventions here are deliberate and load-bearing: the median of
//! an even-length collection is the value at `sorted[len / 2]` (the upper of
//! the two middle elements, not their average), and quartiles are the values
//! at `floor(n * 0.25)` / `floor(n * 0.75)` without interpolation. Downstream
//! results depend on these exact positions.

use crate::value::Value;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Sort a numeric sample ascending.
pub fn sorted_ascending(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

/// Median by index convention: the value at `sorted[len / 2]`.
pub fn upper_median(sorted: &[f64]) -> Option<f64> {
    if sorted.is_empty() {
        None
    } else {
        Some(sorted[sorted.len() / 2])
    }
}

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// IQR fences computed from a sorted sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IqrBounds {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower: f64,
    pub upper: f64,
}

/// Compute quartiles at `floor(n * 0.25)` / `floor(n * 0.75)` and fences at
/// `multiplier` IQR units beyond them. Returns `None` for samples too small
/// for the quartile positions to be meaningful.
pub fn iqr_bounds(sorted: &[f64], multiplier: f64, min_samples: usize) -> Option<IqrBounds> {
    let n = sorted.len();
    if n < min_samples {
        return None;
    }

    let q1 = sorted[(n as f64 * 0.25) as usize];
    let q3 = sorted[(n as f64 * 0.75) as usize];
    let iqr = q3 - q1;

    Some(IqrBounds {
        q1,
        q3,
        iqr,
        lower: q1 - multiplier * iqr,
        upper: q3 + multiplier * iqr,
    })
}

/// Pearson correlation coefficient over paired samples.
///
/// Returns `None` when either column is degenerate (zero variance) or the
/// sample is empty; callers skip such pairs rather than reporting them.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.is_empty() || xs.len() != ys.len() {
        return None;
    }

    let n = xs.len() as f64;
    let x_mean = xs.iter().sum::<f64>() / n;
    let y_mean = ys.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut x_var = 0.0;
    let mut y_var = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - x_mean;
        let dy = y - y_mean;
        cov += dx * dy;
        x_var += dx * dx;
        y_var += dy * dy;
    }

    let denominator = x_var.sqrt() * y_var.sqrt();
    if denominator == 0.0 {
        return None;
    }
    Some(cov / denominator)
}

/// Round to three decimal places (the reported correlation precision).
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Round to one decimal place (the reported percentage precision).
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Count value frequencies in first-encountered order.
///
/// The number `1` and the string `"1"` count separately; ordering is the
/// order of first appearance, which makes tie-breaking deterministic.
pub fn value_counts<'a>(values: impl IntoIterator<Item = &'a Value>) -> Vec<(Value, usize)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(Value, usize)> = Vec::new();

    for value in values {
        let key = value.set_key();
        match index.get(&key) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(key, counts.len());
                counts.push((value.clone(), 1));
            }
        }
    }

    counts
}

/// Most frequent value; ties go to the first encountered.
pub fn mode<'a>(values: impl IntoIterator<Item = &'a Value>) -> Option<(Value, usize)> {
    let mut best: Option<(Value, usize)> = None;
    for (value, count) in value_counts(values) {
        // only a strictly higher count replaces, so the first max wins ties
        if best.as_ref().is_none_or(|(_, best_count)| count > *best_count) {
            best = Some((value, count));
        }
    }
    best
}

/// Number of distinct values (types kept apart, as in a JS `Set`).
pub fn distinct_count<'a>(values: impl IntoIterator<Item = &'a Value>) -> usize {
    values
        .into_iter()
        .map(|v| v.set_key())
        .collect::<std::collections::HashSet<_>>()
        .len()
}
