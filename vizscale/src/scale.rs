use std::fmt::Debug;
use std::hash::Hash;

use crate::band::BandScale;
use crate::error::ScaleError;
use crate::point::PointScale;

/// Capabilities shared by every scale: map a domain value to the range, optionally
/// map back, and report the configured domain and range.
pub trait Scale {
    type Domain;
    type Output;

    /// Maps a domain value into the range.
    fn apply(&self, value: &Self::Domain) -> Result<Self::Output, ScaleError>;

    /// Maps a range value back into the domain.
    fn invert(&self, _value: &Self::Output) -> Result<Self::Domain, ScaleError> {
        Err(ScaleError::unsupported("invert"))
    }

    fn domain(&self) -> Vec<Self::Domain>;

    fn range(&self) -> Vec<Self::Output>;

    /// Whether inputs are clamped to the domain before mapping
    fn clamp(&self) -> bool {
        false
    }
}

/// Scales over a discrete, ordered set of keys.
#[derive(Debug, Clone)]
pub enum DiscreteScale<K: Debug + Clone + Hash + Eq> {
    Band(BandScale<K>),
    Point(PointScale<K>),
}

impl<K: Debug + Clone + Hash + Eq> DiscreteScale<K> {
    pub fn get_domain(&self) -> &[K] {
        match self {
            DiscreteScale::Band(scale) => scale.get_domain(),
            DiscreteScale::Point(scale) => scale.get_domain(),
        }
    }

    pub fn get_range(&self) -> (f64, f64) {
        match self {
            DiscreteScale::Band(scale) => scale.get_range(),
            DiscreteScale::Point(scale) => scale.get_range(),
        }
    }

    pub fn set_domain(&mut self, domain: Vec<K>) -> Result<(), ScaleError> {
        match self {
            DiscreteScale::Band(scale) => scale.set_domain(domain),
            DiscreteScale::Point(scale) => scale.set_domain(domain),
        }
    }

    pub fn set_range(&mut self, range: (f64, f64)) -> Result<(), ScaleError> {
        match self {
            DiscreteScale::Band(scale) => scale.set_range(range),
            DiscreteScale::Point(scale) => scale.set_range(range),
        }
    }

    pub fn bandwidth(&self) -> f64 {
        match self {
            DiscreteScale::Band(scale) => scale.bandwidth(),
            DiscreteScale::Point(scale) => scale.bandwidth(),
        }
    }

    pub fn step(&self) -> f64 {
        match self {
            DiscreteScale::Band(scale) => scale.step(),
            DiscreteScale::Point(scale) => scale.step(),
        }
    }

    pub fn apply(&self, key: &K) -> Result<f64, ScaleError> {
        match self {
            DiscreteScale::Band(scale) => scale.apply(key),
            DiscreteScale::Point(scale) => scale.apply(key),
        }
    }
}

impl<K: Debug + Clone + Hash + Eq> Scale for DiscreteScale<K> {
    type Domain = K;
    type Output = f64;

    fn apply(&self, value: &K) -> Result<f64, ScaleError> {
        DiscreteScale::apply(self, value)
    }

    fn domain(&self) -> Vec<K> {
        self.get_domain().to_vec()
    }

    fn range(&self) -> Vec<f64> {
        let (start, end) = self.get_range();
        vec![start, end]
    }
}

impl<K: Debug + Clone + Hash + Eq> From<BandScale<K>> for DiscreteScale<K> {
    fn from(scale: BandScale<K>) -> Self {
        DiscreteScale::Band(scale)
    }
}

impl<K: Debug + Clone + Hash + Eq> From<PointScale<K>> for DiscreteScale<K> {
    fn from(scale: PointScale<K>) -> Self {
        DiscreteScale::Point(scale)
    }
}
