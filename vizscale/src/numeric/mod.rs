pub mod continuous;
pub mod transform;

use crate::error::ScaleError;
use crate::identity::IdentityScale;
use crate::scale::Scale;
use crate::temporal::TimeScale;

use continuous::ContinuousScale;

/// Scales over a numeric domain, dispatched by variant.
///
/// Time scales participate with their domain expressed as epoch milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericScale {
    Continuous(ContinuousScale<f64>),
    Time(TimeScale),
    Identity(IdentityScale),
}

impl NumericScale {
    pub fn get_domain(&self) -> Vec<f64> {
        match self {
            NumericScale::Continuous(scale) => scale.get_domain().to_vec(),
            NumericScale::Time(scale) => scale.get_domain_millis().to_vec(),
            NumericScale::Identity(scale) => {
                let (start, end) = scale.get_domain();
                vec![start, end]
            }
        }
    }

    pub fn get_range(&self) -> Vec<f64> {
        match self {
            NumericScale::Continuous(scale) => scale.get_range().to_vec(),
            NumericScale::Time(scale) => scale.get_range().to_vec(),
            NumericScale::Identity(scale) => {
                let (start, end) = scale.get_range();
                vec![start, end]
            }
        }
    }

    pub fn get_clamp(&self) -> bool {
        match self {
            NumericScale::Continuous(scale) => scale.get_clamp(),
            NumericScale::Time(scale) => scale.get_clamp(),
            NumericScale::Identity(scale) => scale.get_clamp(),
        }
    }

    pub fn set_domain(&mut self, domain: &[f64]) -> Result<(), ScaleError> {
        match self {
            NumericScale::Continuous(scale) => scale.set_domain(domain),
            NumericScale::Time(scale) => scale.set_domain_millis(domain),
            NumericScale::Identity(scale) => scale.set_domain(domain),
        }
    }

    pub fn set_range(&mut self, range: &[f64]) -> Result<(), ScaleError> {
        match self {
            NumericScale::Continuous(scale) => scale.set_range(range),
            NumericScale::Time(scale) => scale.set_range(range),
            NumericScale::Identity(scale) => scale.set_range(range),
        }
    }

    pub fn set_clamp(&mut self, clamp: bool) -> Result<(), ScaleError> {
        match self {
            NumericScale::Continuous(scale) => {
                scale.set_clamp(clamp);
                Ok(())
            }
            NumericScale::Time(scale) => {
                scale.set_clamp(clamp);
                Ok(())
            }
            NumericScale::Identity(scale) => scale.set_clamp(clamp),
        }
    }

    pub fn nice(&mut self, count: Option<usize>) -> Result<(), ScaleError> {
        match self {
            NumericScale::Continuous(scale) => {
                scale.nice(count);
                Ok(())
            }
            NumericScale::Time(scale) => {
                scale.nice(count);
                Ok(())
            }
            NumericScale::Identity(scale) => scale.nice(count),
        }
    }

    pub fn apply(&self, value: f64) -> f64 {
        match self {
            NumericScale::Continuous(scale) => scale.apply(value),
            NumericScale::Time(scale) => scale.apply_millis(value),
            NumericScale::Identity(scale) => scale.apply(value),
        }
    }

    pub fn invert(&self, value: f64) -> Result<f64, ScaleError> {
        match self {
            NumericScale::Continuous(scale) => scale.invert(&value),
            NumericScale::Time(scale) => scale.invert_millis(value),
            NumericScale::Identity(scale) => Ok(scale.invert(value)),
        }
    }

    pub fn ticks(&self, count: Option<usize>) -> Vec<f64> {
        match self {
            NumericScale::Continuous(scale) => scale.ticks(count),
            NumericScale::Time(scale) => scale
                .tick_millis(count)
                .into_iter()
                .map(|ms| ms as f64)
                .collect(),
            NumericScale::Identity(scale) => scale.ticks(count),
        }
    }
}

impl Scale for NumericScale {
    type Domain = f64;
    type Output = f64;

    fn apply(&self, value: &f64) -> Result<f64, ScaleError> {
        Ok(NumericScale::apply(self, *value))
    }

    fn invert(&self, value: &f64) -> Result<f64, ScaleError> {
        NumericScale::invert(self, *value)
    }

    fn domain(&self) -> Vec<f64> {
        self.get_domain()
    }

    fn range(&self) -> Vec<f64> {
        self.get_range()
    }

    fn clamp(&self) -> bool {
        self.get_clamp()
    }
}

impl From<ContinuousScale<f64>> for NumericScale {
    fn from(scale: ContinuousScale<f64>) -> Self {
        NumericScale::Continuous(scale)
    }
}

impl From<TimeScale> for NumericScale {
    fn from(scale: TimeScale) -> Self {
        NumericScale::Time(scale)
    }
}

impl From<IdentityScale> for NumericScale {
    fn from(scale: IdentityScale) -> Self {
        NumericScale::Identity(scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch() -> Result<(), ScaleError> {
        let scales: Vec<NumericScale> = vec![
            ContinuousScale::linear(&[0.0, 10.0], &[0.0, 100.0])?.into(),
            ContinuousScale::log(&[1.0, 100.0], &[0.0, 2.0], 10.0)?.into(),
            IdentityScale::new().into(),
        ];

        assert_eq!(scales[0].apply(5.0), 50.0);
        assert_eq!(scales[1].apply(10.0), 1.0);
        assert_eq!(scales[2].apply(42.0), 42.0);
        assert_eq!(scales[2].invert(42.0)?, 42.0);
        Ok(())
    }

    #[test]
    fn test_identity_variant_rejects_mutation() -> Result<(), ScaleError> {
        let mut scale = NumericScale::from(IdentityScale::new());
        assert!(scale.set_domain(&[0.0, 5.0]).is_err());
        assert!(scale.set_range(&[0.0, 5.0]).is_err());
        assert!(scale.set_clamp(true).is_err());
        assert!(scale.nice(None).is_err());

        let mut scale = NumericScale::from(ContinuousScale::linear(&[0.0, 9.7], &[0.0, 1.0])?);
        scale.set_clamp(true)?;
        scale.nice(Some(10))?;
        assert_eq!(scale.get_domain(), vec![0.0, 10.0]);
        assert!(scale.get_clamp());
        Ok(())
    }

    #[test]
    fn test_time_variant_uses_epoch_millis() -> Result<(), ScaleError> {
        let day = 86_400_000.0;
        let scale = NumericScale::from(TimeScale::try_new_millis(&[0.0, day], &[0.0, 24.0])?);
        assert_eq!(scale.apply(day / 2.0), 12.0);
        assert_eq!(scale.invert(6.0)?, day / 4.0);
        assert_eq!(scale.ticks(Some(4)).first(), Some(&0.0));
        Ok(())
    }
}
