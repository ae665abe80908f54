//! Scales map values from an input domain to a visual output range.
//!
//! Continuous scales ([`ContinuousScale`], [`TimeScale`]) interpolate between numeric
//! breakpoints after an optional [`Transform`]. Discrete scales ([`BandScale`],
//! [`PointScale`]) place ordered keys along a numeric interval. [`IdentityScale`]
//! passes values through unchanged. All scales implement [`Scale`].

pub mod array;
pub mod band;
pub mod config;
pub mod error;
pub mod identity;
pub mod interpolate;
pub mod numeric;
pub mod point;
pub mod scale;
pub mod temporal;

pub use band::BandScale;
pub use error::ScaleError;
pub use identity::IdentityScale;
pub use interpolate::Interpolate;
pub use numeric::continuous::ContinuousScale;
pub use numeric::transform::Transform;
pub use numeric::NumericScale;
pub use point::PointScale;
pub use scale::{DiscreteScale, Scale};
pub use temporal::TimeScale;
