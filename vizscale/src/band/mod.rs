use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::error::ScaleError;
use crate::scale::Scale;

/// A band scale divides a continuous range into uniform bands, one per domain key.
///
/// Commonly used for bar charts with ordinal or categorical dimensions. Keys are
/// placed in domain order; a reversed range places the first key at the end.
/// Band positions are recomputed whenever the domain, range or padding changes.
#[derive(Debug, Clone)]
pub struct BandScale<K: Debug + Clone + Hash + Eq> {
    domain: Vec<K>,
    index: IndexMap<K, usize>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
    anchor: f64,
    round: bool,
    step: f64,
    bandwidth: f64,
    starts: Vec<f64>,
}

impl<K: Debug + Clone + Hash + Eq> BandScale<K> {
    /// Creates a new band scale with the given domain.
    ///
    /// # Defaults
    /// - range: (0.0, 1.0)
    /// - padding_inner: 0.0
    /// - padding_outer: 0.0
    /// - align: 0.5
    /// - anchor: 0.0 (band start)
    /// - round: false
    pub fn try_new(domain: Vec<K>) -> Result<Self, ScaleError> {
        let index = index_keys(&domain)?;
        let mut this = Self {
            domain,
            index,
            range: (0.0, 1.0),
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
            anchor: 0.0,
            round: false,
            step: 0.0,
            bandwidth: 0.0,
            starts: vec![],
        };
        this.rescale();
        Ok(this)
    }

    fn rescale(&mut self) {
        let n = self.domain.len();
        if n == 0 {
            self.step = 0.0;
            self.bandwidth = 0.0;
            self.starts.clear();
            return;
        }

        let reverse = self.range.1 < self.range.0;
        let (start, stop) = if reverse {
            (self.range.1, self.range.0)
        } else {
            (self.range.0, self.range.1)
        };

        let step = (stop - start)
            / 1.0_f64.max(bandspace(n, self.padding_inner, self.padding_outer));
        let step = if self.round { step.floor() } else { step };

        let start = start + (stop - start - step * (n as f64 - self.padding_inner)) * self.align;
        let bandwidth = step * (1.0 - self.padding_inner);
        let (start, bandwidth) = if self.round {
            (start.round(), bandwidth.round())
        } else {
            (start, bandwidth)
        };

        let mut starts = (0..n).map(|i| start + step * i as f64).collect::<Vec<_>>();
        if reverse {
            starts.reverse();
        }

        self.step = step;
        self.bandwidth = bandwidth;
        self.starts = starts;
    }

    /// Replaces the full set of keys. Duplicate keys are rejected.
    pub fn set_domain(&mut self, domain: Vec<K>) -> Result<(), ScaleError> {
        self.index = index_keys(&domain)?;
        self.domain = domain;
        self.rescale();
        Ok(())
    }

    /// Sets the output range as (start, end). The range may be reversed.
    pub fn set_range(&mut self, range: (f64, f64)) -> Result<(), ScaleError> {
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ScaleError::config(format!(
                "band scale range must be finite, got {range:?}"
            )));
        }
        self.range = range;
        self.rescale();
        Ok(())
    }

    /// Sets the fraction of each step reserved as blank space between bands.
    pub fn set_padding_inner(&mut self, padding: f64) -> Result<(), ScaleError> {
        self.padding_inner = unit_interval("padding_inner", padding)?;
        self.rescale();
        Ok(())
    }

    /// Sets the fraction of a step reserved before the first and after the last band.
    pub fn set_padding_outer(&mut self, padding: f64) -> Result<(), ScaleError> {
        self.padding_outer = unit_interval("padding_outer", padding)?;
        self.rescale();
        Ok(())
    }

    /// Sets inner and outer padding to the same value.
    pub fn set_padding(&mut self, padding: f64) -> Result<(), ScaleError> {
        let padding = unit_interval("padding", padding)?;
        self.padding_inner = padding;
        self.padding_outer = padding;
        self.rescale();
        Ok(())
    }

    /// Sets how leftover outer space is distributed: 0.0 aligns the bands to the
    /// start of the range, 0.5 centers them and 1.0 aligns them to the end.
    pub fn set_align(&mut self, align: f64) -> Result<(), ScaleError> {
        self.align = unit_interval("align", align)?;
        self.rescale();
        Ok(())
    }

    /// Sets the position within a band returned by [`BandScale::apply`]: 0.0 is the
    /// band start, 0.5 its center and 1.0 its end.
    pub fn set_anchor(&mut self, anchor: f64) -> Result<(), ScaleError> {
        self.anchor = unit_interval("anchor", anchor)?;
        Ok(())
    }

    /// Enables or disables rounding of band positions and widths to whole numbers.
    pub fn set_round(&mut self, round: bool) {
        self.round = round;
        self.rescale();
    }

    pub fn with_domain(mut self, domain: Vec<K>) -> Result<Self, ScaleError> {
        self.set_domain(domain)?;
        Ok(self)
    }

    pub fn with_range(mut self, range: (f64, f64)) -> Result<Self, ScaleError> {
        self.set_range(range)?;
        Ok(self)
    }

    pub fn with_padding_inner(mut self, padding: f64) -> Result<Self, ScaleError> {
        self.set_padding_inner(padding)?;
        Ok(self)
    }

    pub fn with_padding_outer(mut self, padding: f64) -> Result<Self, ScaleError> {
        self.set_padding_outer(padding)?;
        Ok(self)
    }

    pub fn with_padding(mut self, padding: f64) -> Result<Self, ScaleError> {
        self.set_padding(padding)?;
        Ok(self)
    }

    pub fn with_align(mut self, align: f64) -> Result<Self, ScaleError> {
        self.set_align(align)?;
        Ok(self)
    }

    pub fn with_anchor(mut self, anchor: f64) -> Result<Self, ScaleError> {
        self.set_anchor(anchor)?;
        Ok(self)
    }

    pub fn with_round(mut self, round: bool) -> Self {
        self.set_round(round);
        self
    }

    pub fn get_domain(&self) -> &[K] {
        &self.domain
    }

    pub fn get_range(&self) -> (f64, f64) {
        self.range
    }

    pub fn get_padding_inner(&self) -> f64 {
        self.padding_inner
    }

    pub fn get_padding_outer(&self) -> f64 {
        self.padding_outer
    }

    pub fn get_align(&self) -> f64 {
        self.align
    }

    pub fn get_anchor(&self) -> f64 {
        self.anchor
    }

    pub fn get_round(&self) -> bool {
        self.round
    }

    /// Width of each band, 0 for an empty domain.
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Distance between the starts of adjacent bands, 0 for an empty domain.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the anchored position of the key's band.
    pub fn apply(&self, key: &K) -> Result<f64, ScaleError> {
        let i = self
            .index
            .get(key)
            .ok_or_else(|| ScaleError::KeyNotFound(format!("{key:?}")))?;
        Ok(self.starts[*i] + self.anchor * self.bandwidth)
    }

    /// Returns the keys whose bands intersect `[lo, hi]`, in domain order.
    ///
    /// `None` when the interval lies outside the range, falls entirely within padding,
    /// or either bound is NaN.
    pub fn invert_range(&self, lo: f64, hi: f64) -> Option<&[K]> {
        if lo.is_nan() || hi.is_nan() || self.domain.is_empty() {
            return None;
        }
        let (lo, hi) = if hi < lo { (hi, lo) } else { (lo, hi) };

        let reverse = self.range.1 < self.range.0;
        let (start, stop) = if reverse {
            (self.range.1, self.range.0)
        } else {
            (self.range.0, self.range.1)
        };
        if hi < start || lo > stop {
            return None;
        }

        let mut ascending = self.starts.clone();
        if reverse {
            ascending.reverse();
        }

        let mut a = ascending.partition_point(|v| *v <= lo).saturating_sub(1);
        let b = if lo == hi {
            a as isize
        } else {
            ascending.partition_point(|v| *v <= hi) as isize - 1
        };

        if lo - ascending[a] > self.bandwidth + 1e-10 {
            a += 1;
        }

        let (a, b) = if reverse {
            let last = ascending.len() as isize - 1;
            (last - b, last - a as isize)
        } else {
            (a as isize, b)
        };

        if a > b || b < 0 {
            return None;
        }
        Some(&self.domain[a as usize..=b as usize])
    }

    /// Returns the key whose band contains `position`.
    pub fn key_at(&self, position: f64) -> Option<&K> {
        self.invert_range(position, position)
            .and_then(|keys| keys.first())
    }
}

impl<K: Debug + Clone + Hash + Eq> Scale for BandScale<K> {
    type Domain = K;
    type Output = f64;

    fn apply(&self, value: &K) -> Result<f64, ScaleError> {
        BandScale::apply(self, value)
    }

    fn domain(&self) -> Vec<K> {
        self.domain.clone()
    }

    fn range(&self) -> Vec<f64> {
        vec![self.range.0, self.range.1]
    }
}

/// Number of steps a band scale needs for `count` keys with the given padding.
pub fn bandspace(count: usize, padding_inner: f64, padding_outer: f64) -> f64 {
    count as f64 - padding_inner + padding_outer * 2.0
}

fn index_keys<K: Debug + Clone + Hash + Eq>(domain: &[K]) -> Result<IndexMap<K, usize>, ScaleError> {
    let mut index = IndexMap::with_capacity(domain.len());
    for (i, key) in domain.iter().enumerate() {
        if index.insert(key.clone(), i).is_some() {
            return Err(ScaleError::config(format!(
                "duplicate key {key:?} in band scale domain"
            )));
        }
    }
    Ok(index)
}

pub(crate) fn unit_interval(name: &str, value: f64) -> Result<f64, ScaleError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ScaleError::config(format!(
            "{name} must be between 0 and 1, got {value}"
        )))
    }
}
