use crate::error::ScaleError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Forward transform applied to domain values before interpolation.
///
/// Every built-in transform has an inverse. A [`Transform::Custom`] transform may omit
/// its inverse, in which case inverting a scale that uses it is unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Transform {
    #[default]
    Identity,
    /// Sign-preserving power: `sign(x) * |x|^exponent`
    Pow { exponent: f64 },
    Log { base: f64 },
    /// `sign(x) * log1p(|x| / constant)`
    Symlog { constant: f64 },
    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(CustomTransform),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomTransform {
    pub forward: fn(f64) -> f64,
    pub inverse: Option<fn(f64) -> f64>,
}

impl Transform {
    pub fn pow(exponent: f64) -> Self {
        Transform::Pow { exponent }
    }

    pub fn sqrt() -> Self {
        Transform::Pow { exponent: 0.5 }
    }

    pub fn log(base: f64) -> Self {
        Transform::Log { base }
    }

    pub fn symlog(constant: f64) -> Self {
        Transform::Symlog { constant }
    }

    pub fn custom(forward: fn(f64) -> f64, inverse: Option<fn(f64) -> f64>) -> Self {
        Transform::Custom(CustomTransform { forward, inverse })
    }

    /// Checks the transform's own parameters.
    pub fn validate(&self) -> Result<(), ScaleError> {
        match *self {
            Transform::Pow { exponent } if exponent == 0.0 || !exponent.is_finite() => Err(
                ScaleError::config(format!("pow exponent must be finite and non-zero, got {exponent}")),
            ),
            Transform::Log { base } if !(base > 1.0) || !base.is_finite() => Err(
                ScaleError::config(format!("log base must be finite and greater than 1, got {base}")),
            ),
            Transform::Symlog { constant } if !(constant > 0.0) || !constant.is_finite() => Err(
                ScaleError::config(format!("symlog constant must be positive, got {constant}")),
            ),
            _ => Ok(()),
        }
    }

    /// Checks that every domain value lies where the transform is defined.
    pub fn validate_domain(&self, domain: &[f64]) -> Result<(), ScaleError> {
        if let Transform::Log { .. } = self {
            if let Some(v) = domain.iter().find(|v| !(**v > 0.0)) {
                return Err(ScaleError::config(format!(
                    "log scale domain must be strictly positive, found {v} in {domain:?}"
                )));
            }
        }
        Ok(())
    }

    pub fn has_inverse(&self) -> bool {
        match self {
            Transform::Custom(custom) => custom.inverse.is_some(),
            _ => true,
        }
    }

    pub fn forward(&self, x: f64) -> f64 {
        match *self {
            Transform::Identity => x,
            Transform::Pow { exponent } => signed_pow(x, exponent),
            Transform::Log { base } => log_base(x, base),
            Transform::Symlog { constant } => x.signum() * (x.abs() / constant).ln_1p(),
            Transform::Custom(custom) => (custom.forward)(x),
        }
    }

    /// Maps a transformed value back into domain space, or `None` when the
    /// transform cannot be inverted.
    pub fn inverse(&self, y: f64) -> Option<f64> {
        match *self {
            Transform::Identity => Some(y),
            Transform::Pow { exponent } => Some(signed_pow(y, 1.0 / exponent)),
            Transform::Log { base } => Some(pow_base(base, y)),
            Transform::Symlog { constant } => Some(y.signum() * y.abs().exp_m1() * constant),
            Transform::Custom(custom) => custom.inverse.map(|inverse| inverse(y)),
        }
    }
}

fn signed_pow(x: f64, exponent: f64) -> f64 {
    let magnitude = if exponent == 2.0 {
        x * x
    } else if exponent == 0.5 {
        x.abs().sqrt()
    } else if exponent == 1.0 {
        x.abs()
    } else {
        x.abs().powf(exponent)
    };
    if x < 0.0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Logarithm using the exact library function for the common bases.
pub(crate) fn log_base(x: f64, base: f64) -> f64 {
    if base == 10.0 {
        x.log10()
    } else if base == 2.0 {
        x.log2()
    } else if base == std::f64::consts::E {
        x.ln()
    } else {
        x.ln() / base.ln()
    }
}

/// `base^x`, exact for integral exponents so tick values land on round numbers.
pub(crate) fn pow_base(base: f64, x: f64) -> f64 {
    if x.fract() == 0.0 && x.abs() < 300.0 {
        if x < 0.0 {
            1.0 / base.powi(-x as i32)
        } else {
            base.powi(x as i32)
        }
    } else if base == std::f64::consts::E {
        x.exp()
    } else {
        base.powf(x)
    }
}
