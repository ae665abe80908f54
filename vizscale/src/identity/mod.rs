use crate::array;
use crate::error::ScaleError;
use crate::scale::Scale;

/// A scale whose output equals its input.
///
/// Domain and range are the same interval and are fixed when the scale is created;
/// every mutator fails with [`ScaleError::Configuration`]. The domain only informs
/// tick generation.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityScale {
    domain: (f64, f64),
}

impl Default for IdentityScale {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityScale {
    /// Creates an identity scale over [0, 1].
    pub fn new() -> Self {
        Self { domain: (0.0, 1.0) }
    }

    /// Creates an identity scale whose ticks cover `[start, end]`.
    pub fn with_extent(start: f64, end: f64) -> Self {
        Self {
            domain: (start, end),
        }
    }

    pub fn apply(&self, x: f64) -> f64 {
        x
    }

    pub fn invert(&self, y: f64) -> f64 {
        y
    }

    pub fn get_domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn get_range(&self) -> (f64, f64) {
        self.domain
    }

    pub fn get_clamp(&self) -> bool {
        false
    }

    pub fn set_domain(&mut self, domain: &[f64]) -> Result<(), ScaleError> {
        Err(immutable("domain", format!("{domain:?}")))
    }

    pub fn set_range(&mut self, range: &[f64]) -> Result<(), ScaleError> {
        Err(immutable("range", format!("{range:?}")))
    }

    pub fn set_clamp(&mut self, clamp: bool) -> Result<(), ScaleError> {
        Err(immutable("clamp", clamp.to_string()))
    }

    pub fn nice(&mut self, _count: Option<usize>) -> Result<(), ScaleError> {
        Err(ScaleError::config(
            "identity scale domain cannot be niced",
        ))
    }

    pub fn ticks(&self, count: Option<usize>) -> Vec<f64> {
        array::ticks(self.domain.0, self.domain.1, count.unwrap_or(10) as f64)
    }
}

fn immutable(property: &str, value: String) -> ScaleError {
    ScaleError::config(format!(
        "identity scale {property} cannot be changed (attempted to set {value})"
    ))
}

impl Scale for IdentityScale {
    type Domain = f64;
    type Output = f64;

    fn apply(&self, value: &f64) -> Result<f64, ScaleError> {
        Ok(*value)
    }

    fn invert(&self, value: &f64) -> Result<f64, ScaleError> {
        Ok(*value)
    }

    fn domain(&self) -> Vec<f64> {
        vec![self.domain.0, self.domain.1]
    }

    fn range(&self) -> Vec<f64> {
        vec![self.domain.0, self.domain.1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALUES: [f64; 7] = [1.0, 100.0, 24.0, 78.6355, -100.0, -24.0, -78.6355];

    #[test]
    fn test_apply_returns_input() {
        let scale = IdentityScale::new();
        for v in VALUES {
            assert_eq!(scale.apply(v), v);
        }
    }

    #[test]
    fn test_invert_returns_input() {
        let scale = IdentityScale::new();
        for v in VALUES {
            assert_eq!(scale.invert(v), v);
        }
    }

    #[test]
    fn test_mutators_fail() {
        let mut scale = IdentityScale::new();
        assert!(matches!(
            scale.set_range(&[10.0, 56.20]),
            Err(ScaleError::Configuration(_))
        ));
        assert!(matches!(
            scale.set_domain(&[10.0, 56.20]),
            Err(ScaleError::Configuration(_))
        ));
        assert!(matches!(
            scale.set_clamp(true),
            Err(ScaleError::Configuration(_))
        ));
        assert!(scale.nice(Some(10)).is_err());
        assert_eq!(scale, IdentityScale::new());
    }

    #[test]
    fn test_ticks() {
        let scale = IdentityScale::with_extent(0.0, 100.0);
        assert_eq!(
            scale.ticks(Some(5)),
            vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]
        );
        assert_eq!(scale.get_range(), (0.0, 100.0));
    }
}
