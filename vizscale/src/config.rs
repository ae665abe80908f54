use std::fmt::Debug;
use std::hash::Hash;

use chrono::{DateTime, Utc};
use strum::{Display, EnumString, VariantNames};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::band::BandScale;
use crate::error::ScaleError;
use crate::identity::IdentityScale;
use crate::numeric::continuous::ContinuousScale;
use crate::numeric::transform::Transform;
use crate::point::PointScale;
use crate::temporal::TimeScale;

/// Names of the supported scale types, as used in string configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, VariantNames)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum ScaleKind {
    Linear,
    Pow,
    Sqrt,
    Log,
    Symlog,
    Time,
    Identity,
    Band,
    Point,
}

impl ScaleKind {
    /// Whether the scale maps discrete keys rather than numbers.
    pub fn is_discrete(&self) -> bool {
        matches!(self, ScaleKind::Band | ScaleKind::Point)
    }
}

/// Configuration for linear, pow, sqrt, log and symlog scales.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContinuousScaleConfig {
    pub domain: Vec<f64>,
    pub range: Vec<f64>,
    pub transform: Transform,
    pub clamp: bool,
    pub round: bool,
    /// Tick count to nice the domain with after construction
    pub nice: Option<usize>,
}

impl Default for ContinuousScaleConfig {
    fn default() -> Self {
        Self {
            domain: vec![0.0, 1.0],
            range: vec![0.0, 1.0],
            transform: Transform::Identity,
            clamp: false,
            round: false,
            nice: None,
        }
    }
}

impl ContinuousScaleConfig {
    /// Default configuration for a continuous scale kind.
    ///
    /// Pow uses exponent 1, log uses base 10 over [1, 10] and symlog uses constant 1.
    pub fn for_kind(kind: ScaleKind) -> Result<Self, ScaleError> {
        let transform = match kind {
            ScaleKind::Linear => Transform::Identity,
            ScaleKind::Pow => Transform::pow(1.0),
            ScaleKind::Sqrt => Transform::sqrt(),
            ScaleKind::Log => Transform::log(10.0),
            ScaleKind::Symlog => Transform::symlog(1.0),
            _ => {
                return Err(ScaleError::config(format!(
                    "{kind} is not a continuous numeric scale"
                )))
            }
        };
        let domain = if kind == ScaleKind::Log {
            vec![1.0, 10.0]
        } else {
            vec![0.0, 1.0]
        };
        Ok(Self {
            domain,
            transform,
            ..Default::default()
        })
    }

    pub fn build(&self) -> Result<ContinuousScale<f64>, ScaleError> {
        let scale = ContinuousScale::try_new(&self.domain, &self.range, self.transform)?
            .with_clamp(self.clamp)
            .with_round(self.round);
        Ok(match self.nice {
            Some(count) => scale.with_nice(Some(count)),
            None => scale,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimeScaleConfig {
    pub domain: Vec<DateTime<Utc>>,
    pub range: Vec<f64>,
    pub clamp: bool,
    pub round: bool,
    pub nice: Option<usize>,
}

impl Default for TimeScaleConfig {
    fn default() -> Self {
        Self {
            domain: TimeScale::default().get_domain(),
            range: vec![0.0, 1.0],
            clamp: false,
            round: false,
            nice: None,
        }
    }
}

impl TimeScaleConfig {
    pub fn build(&self) -> Result<TimeScale, ScaleError> {
        let scale = TimeScale::try_new(&self.domain, &self.range)?
            .with_clamp(self.clamp)
            .with_round(self.round);
        Ok(match self.nice {
            Some(count) => scale.with_nice(Some(count)),
            None => scale,
        })
    }
}

/// Identity scales only take the extent used for ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IdentityScaleConfig {
    pub extent: (f64, f64),
}

impl Default for IdentityScaleConfig {
    fn default() -> Self {
        Self { extent: (0.0, 1.0) }
    }
}

impl IdentityScaleConfig {
    pub fn build(&self) -> IdentityScale {
        IdentityScale::with_extent(self.extent.0, self.extent.1)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BandScaleConfig<K> {
    pub domain: Vec<K>,
    pub range: (f64, f64),
    pub padding_inner: f64,
    pub padding_outer: f64,
    pub align: f64,
    pub anchor: f64,
    pub round: bool,
}

impl<K> Default for BandScaleConfig<K> {
    fn default() -> Self {
        Self {
            domain: vec![],
            range: (0.0, 1.0),
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
            anchor: 0.0,
            round: false,
        }
    }
}

impl<K: Debug + Clone + Hash + Eq> BandScaleConfig<K> {
    pub fn build(&self) -> Result<BandScale<K>, ScaleError> {
        Ok(BandScale::try_new(self.domain.clone())?
            .with_range(self.range)?
            .with_padding_inner(self.padding_inner)?
            .with_padding_outer(self.padding_outer)?
            .with_align(self.align)?
            .with_anchor(self.anchor)?
            .with_round(self.round))
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PointScaleConfig<K> {
    pub domain: Vec<K>,
    pub range: (f64, f64),
    pub padding: f64,
    pub align: f64,
    pub round: bool,
}

impl<K> Default for PointScaleConfig<K> {
    fn default() -> Self {
        Self {
            domain: vec![],
            range: (0.0, 1.0),
            padding: 0.0,
            align: 0.5,
            round: false,
        }
    }
}

impl<K: Debug + Clone + Hash + Eq> PointScaleConfig<K> {
    pub fn build(&self) -> Result<PointScale<K>, ScaleError> {
        Ok(PointScale::try_new(self.domain.clone())?
            .with_range(self.range)?
            .with_padding(self.padding)?
            .with_align(self.align)?
            .with_round(self.round))
    }
}
