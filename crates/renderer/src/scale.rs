//! Scales mapping data values to pixel positions and colours.
//!
//! Three kinds are needed by the heat map:
//! - [`BandScale`]: discrete keys (years, month indices) to equal-width bands
//! - [`QuantileScale`]: continuous values to one of N discrete outputs, with
//!   thresholds taken from the quantiles of a sample
//! - [`LinearScale`]: continuous domain to continuous range

use std::collections::HashMap;
use std::hash::Hash;

/// Maps a discrete domain onto contiguous, equal-width bands of a range.
///
/// Padding is always zero: band `i` covers `[start + i * step, start + (i + 1) * step)`.
#[derive(Debug, Clone)]
pub struct BandScale<K> {
    domain: Vec<K>,
    index: HashMap<K, usize>,
    range: (f64, f64),
    step: f64,
}

impl<K: Copy + Eq + Hash> BandScale<K> {
    /// Build a band scale. Duplicate keys are ignored; the first occurrence
    /// fixes a key's band.
    pub fn new(domain: impl IntoIterator<Item = K>, range: (f64, f64)) -> Self {
        let mut keys = Vec::new();
        let mut index = HashMap::new();
        for key in domain {
            if !index.contains_key(&key) {
                index.insert(key, keys.len());
                keys.push(key);
            }
        }

        let step = (range.1 - range.0) / keys.len().max(1) as f64;

        Self {
            domain: keys,
            index,
            range,
            step,
        }
    }

    /// Start of the band for `key`, or `None` if the key is not in the domain.
    pub fn scale(&self, key: K) -> Option<f64> {
        self.index
            .get(&key)
            .map(|&i| self.range.0 + self.step * i as f64)
    }

    /// Half-open `[start, end)` interval of the band for `key`.
    pub fn band(&self, key: K) -> Option<(f64, f64)> {
        self.scale(key).map(|start| (start, start + self.step))
    }

    /// Centre of the band for `key`.
    pub fn center(&self, key: K) -> Option<f64> {
        self.scale(key).map(|start| start + self.step / 2.0)
    }

    pub fn bandwidth(&self) -> f64 {
        self.step
    }

    pub fn domain(&self) -> &[K] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// Maps continuous values onto a discrete range using sample quantiles.
///
/// With `n` outputs there are `n - 1` thresholds. A value `v` maps to output
/// `i` where `i` is the number of thresholds `<= v`.
#[derive(Debug, Clone)]
pub struct QuantileScale<T> {
    thresholds: Vec<f64>,
    range: Vec<T>,
}

impl<T> QuantileScale<T> {
    /// Build a quantile scale from a sample of values.
    ///
    /// NaN values are ignored. Returns `None` when the range is empty or the
    /// sample has no usable values.
    pub fn new(values: &[f64], range: Vec<T>) -> Option<Self> {
        if range.is_empty() {
            return None;
        }

        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        let n = range.len();
        let thresholds = (1..n)
            .map(|k| quantile_sorted(&sorted, k as f64 / n as f64))
            .collect();

        Some(Self { thresholds, range })
    }

    /// Index of the output bucket for `value`.
    pub fn bucket(&self, value: f64) -> usize {
        bisect_right(&self.thresholds, value)
    }

    /// Output for `value`.
    pub fn scale(&self, value: f64) -> &T {
        &self.range[self.bucket(value)]
    }

    /// Quantile boundaries, non-decreasing, one fewer than the outputs.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn range(&self) -> &[T] {
        &self.range
    }
}

/// Build a quantile scale; see [`QuantileScale::new`].
pub fn quantile_scale<T>(values: &[f64], range: Vec<T>) -> Option<QuantileScale<T>> {
    QuantileScale::new(values, range)
}

/// Continuous linear mapping from a domain to a range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map `value` into the range. Values outside the domain extrapolate.
    ///
    /// A degenerate domain maps every value to the middle of the range.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        r0 + (r1 - r0) * t
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// R-7 quantile of an ascending, non-empty slice: linear interpolation
/// between the two closest ranks.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    if p <= 0.0 || n < 2 {
        return sorted[0];
    }
    if p >= 1.0 {
        return sorted[n - 1];
    }

    let i = (n - 1) as f64 * p;
    let i0 = i.floor() as usize;
    let v0 = sorted[i0];
    let v1 = sorted[i0 + 1];
    v0 + (v1 - v0) * (i - i0 as f64)
}

/// Number of entries of an ascending slice that are `<= value`.
pub fn bisect_right(sorted: &[f64], value: f64) -> usize {
    sorted.partition_point(|&t| t <= value)
}
