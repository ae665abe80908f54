use std::fmt::Debug;
use std::hash::Hash;

use crate::band::BandScale;
use crate::error::ScaleError;
use crate::scale::Scale;

/// A point scale is a special case of a band scale with padding_inner = 1.
/// It places points at uniformly spaced positions along a range.
#[derive(Debug, Clone)]
pub struct PointScale<K: Debug + Clone + Hash + Eq> {
    band_scale: BandScale<K>,
}

impl<K: Debug + Clone + Hash + Eq> PointScale<K> {
    /// Creates a new point scale with the given domain.
    ///
    /// # Defaults
    /// - range: (0.0, 1.0)
    /// - align: 0.5
    /// - padding: 0.0
    /// - round: false
    pub fn try_new(domain: Vec<K>) -> Result<Self, ScaleError> {
        Ok(Self {
            band_scale: BandScale::try_new(domain)?.with_padding_inner(1.0)?,
        })
    }

    pub fn set_domain(&mut self, domain: Vec<K>) -> Result<(), ScaleError> {
        self.band_scale.set_domain(domain)
    }

    /// Sets the output range as (start, end).
    pub fn set_range(&mut self, range: (f64, f64)) -> Result<(), ScaleError> {
        self.band_scale.set_range(range)
    }

    /// Sets the space before the first and after the last point, in multiples of the step.
    pub fn set_padding(&mut self, padding: f64) -> Result<(), ScaleError> {
        self.band_scale.set_padding_outer(padding)
    }

    pub fn set_align(&mut self, align: f64) -> Result<(), ScaleError> {
        self.band_scale.set_align(align)
    }

    pub fn set_round(&mut self, round: bool) {
        self.band_scale.set_round(round)
    }

    pub fn with_domain(mut self, domain: Vec<K>) -> Result<Self, ScaleError> {
        self.set_domain(domain)?;
        Ok(self)
    }

    pub fn with_range(mut self, range: (f64, f64)) -> Result<Self, ScaleError> {
        self.set_range(range)?;
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

    pub fn with_round(mut self, round: bool) -> Self {
        self.set_round(round);
        self
    }

    pub fn get_domain(&self) -> &[K] {
        self.band_scale.get_domain()
    }

    pub fn get_range(&self) -> (f64, f64) {
        self.band_scale.get_range()
    }

    pub fn get_padding(&self) -> f64 {
        self.band_scale.get_padding_outer()
    }

    pub fn get_align(&self) -> f64 {
        self.band_scale.get_align()
    }

    pub fn get_round(&self) -> bool {
        self.band_scale.get_round()
    }

    /// Always 0.
    pub fn bandwidth(&self) -> f64 {
        self.band_scale.bandwidth()
    }

    /// Returns the distance between adjacent points.
    pub fn step(&self) -> f64 {
        self.band_scale.step()
    }

    /// Returns the position of the key's point.
    pub fn apply(&self, key: &K) -> Result<f64, ScaleError> {
        self.band_scale.apply(key)
    }

    /// Returns the keys whose points lie within `[lo, hi]`.
    pub fn invert_range(&self, lo: f64, hi: f64) -> Option<&[K]> {
        self.band_scale.invert_range(lo, hi)
    }

    /// Returns the key placed exactly at `position`.
    pub fn key_at(&self, position: f64) -> Option<&K> {
        self.band_scale.key_at(position)
    }
}

impl<K: Debug + Clone + Hash + Eq> Scale for PointScale<K> {
    type Domain = K;
    type Output = f64;

    fn apply(&self, value: &K) -> Result<f64, ScaleError> {
        PointScale::apply(self, value)
    }

    fn domain(&self) -> Vec<K> {
        self.get_domain().to_vec()
    }

    fn range(&self) -> Vec<f64> {
        let (start, end) = self.get_range();
        vec![start, end]
    }
}
