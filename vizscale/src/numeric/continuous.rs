use crate::array;
use crate::error::ScaleError;
use crate::interpolate::Interpolate;
use crate::scale::Scale;

use super::transform::{log_base, pow_base, Transform};

/// A continuous scale mapping an ordered numeric domain onto a range of `R` values.
///
/// The domain and range are paired pointwise. With more than two values the mapping is
/// piecewise: the segment bracketing the input is located by binary search and values
/// beyond either end extrapolate from the outermost segment. A [`Transform`] is applied
/// to domain values before interpolation, which turns this into a pow, log or symlog
/// scale.
///
/// # Defaults
/// - domain: [0, 1]
/// - range: [0, 1]
/// - transform: identity
/// - clamp: false
/// - round: false
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuousScale<R: Interpolate = f64> {
    domain: Vec<f64>,
    range: Vec<R>,
    transform: Transform,
    clamp: bool,
    round: bool,
}

impl Default for ContinuousScale<f64> {
    fn default() -> Self {
        Self {
            domain: vec![0.0, 1.0],
            range: vec![0.0, 1.0],
            transform: Transform::Identity,
            clamp: false,
            round: false,
        }
    }
}

impl ContinuousScale<f64> {
    /// Linear scale over the given domain and range.
    pub fn linear(domain: &[f64], range: &[f64]) -> Result<Self, ScaleError> {
        Self::try_new(domain, range, Transform::Identity)
    }

    /// Power scale with a sign-preserving exponent.
    pub fn pow(domain: &[f64], range: &[f64], exponent: f64) -> Result<Self, ScaleError> {
        Self::try_new(domain, range, Transform::pow(exponent))
    }

    pub fn sqrt(domain: &[f64], range: &[f64]) -> Result<Self, ScaleError> {
        Self::try_new(domain, range, Transform::sqrt())
    }

    /// Log scale. Every domain value must be strictly positive.
    pub fn log(domain: &[f64], range: &[f64], base: f64) -> Result<Self, ScaleError> {
        Self::try_new(domain, range, Transform::log(base))
    }

    pub fn symlog(domain: &[f64], range: &[f64], constant: f64) -> Result<Self, ScaleError> {
        Self::try_new(domain, range, Transform::symlog(constant))
    }
}

impl<R: Interpolate> ContinuousScale<R> {
    pub fn try_new(domain: &[f64], range: &[R], transform: Transform) -> Result<Self, ScaleError> {
        check_len("domain", domain.len())?;
        check_len("range", range.len())?;
        transform.validate()?;
        transform.validate_domain(domain)?;
        log_len_mismatch(domain.len(), range.len());

        Ok(Self {
            domain: domain.to_vec(),
            range: range.to_vec(),
            transform,
            clamp: false,
            round: false,
        })
    }

    pub fn get_domain(&self) -> &[f64] {
        &self.domain
    }

    pub fn get_range(&self) -> &[R] {
        &self.range
    }

    pub fn get_transform(&self) -> Transform {
        self.transform
    }

    pub fn get_clamp(&self) -> bool {
        self.clamp
    }

    pub fn get_round(&self) -> bool {
        self.round
    }

    /// Returns `(min, max)` over the domain values.
    pub fn domain_extent(&self) -> (f64, f64) {
        extent(&self.domain)
    }

    /// Replaces the domain. Requires at least two values that are valid for the
    /// configured transform; on error the scale is left unchanged.
    pub fn set_domain(&mut self, domain: &[f64]) -> Result<(), ScaleError> {
        check_len("domain", domain.len())?;
        self.transform.validate_domain(domain)?;
        log_len_mismatch(domain.len(), self.range.len());
        self.domain = domain.to_vec();
        Ok(())
    }

    /// Replaces the range. Requires at least two values.
    pub fn set_range(&mut self, range: &[R]) -> Result<(), ScaleError> {
        check_len("range", range.len())?;
        log_len_mismatch(self.domain.len(), range.len());
        self.range = range.to_vec();
        Ok(())
    }

    /// Replaces the transform, validating it against the current domain.
    pub fn set_transform(&mut self, transform: Transform) -> Result<(), ScaleError> {
        transform.validate()?;
        transform.validate_domain(&self.domain)?;
        self.transform = transform;
        Ok(())
    }

    pub fn set_clamp(&mut self, clamp: bool) {
        self.clamp = clamp;
    }

    pub fn set_round(&mut self, round: bool) {
        self.round = round;
    }

    pub fn with_domain(mut self, domain: &[f64]) -> Result<Self, ScaleError> {
        self.set_domain(domain)?;
        Ok(self)
    }

    pub fn with_range(mut self, range: &[R]) -> Result<Self, ScaleError> {
        self.set_range(range)?;
        Ok(self)
    }

    pub fn with_transform(mut self, transform: Transform) -> Result<Self, ScaleError> {
        self.set_transform(transform)?;
        Ok(self)
    }

    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn with_round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    /// Number of usable domain/range pairs.
    fn pairs(&self) -> usize {
        self.domain.len().min(self.range.len())
    }

    /// Maps a domain value to the range.
    pub fn apply(&self, x: f64) -> R {
        let n = self.pairs();
        let domain = &self.domain[..n];

        let x = if self.clamp {
            let (lo, hi) = extent(domain);
            x.clamp(lo, hi)
        } else {
            x
        };

        let i = bracket(domain, x);
        let d0 = self.transform.forward(domain[i]);
        let d1 = self.transform.forward(domain[i + 1]);
        let (r0, r1) = (&self.range[i], &self.range[i + 1]);

        // Zero-width segments map everything to the segment's first range value
        let span = d1 - d0;
        if span == 0.0 || span.is_nan() {
            return r0.clone();
        }

        let t = (self.transform.forward(x) - d0) / span;
        let value = R::interpolate(r0, r1, t);
        if self.round {
            value.round()
        } else {
            value
        }
    }

    /// Maps a range value back to the domain.
    ///
    /// Fails with [`ScaleError::UnsupportedOperation`] when the transform has no
    /// inverse or the range type cannot be uninterpolated.
    pub fn invert(&self, y: &R) -> Result<f64, ScaleError> {
        if !self.transform.has_inverse() {
            return Err(ScaleError::unsupported(
                "invert requires a transform with an inverse",
            ));
        }

        let n = self.pairs();
        let range = &self.range[..n];
        let keys = range
            .iter()
            .map(|r| r.sort_key())
            .collect::<Option<Vec<f64>>>()
            .ok_or_else(|| {
                ScaleError::unsupported(format!(
                    "invert is not defined for range values of type {}",
                    std::any::type_name::<R>()
                ))
            })?;

        let y = if self.clamp {
            R::clamp_between(y, &range[0], &range[n - 1])
        } else {
            y.clone()
        };
        let y_key = y.sort_key().unwrap_or(f64::NAN);

        let i = bracket(&keys, y_key);
        let t = R::uninterpolate(&range[i], &range[i + 1], &y).ok_or_else(|| {
            ScaleError::unsupported("range values cannot be uninterpolated")
        })?;

        let d0 = self.transform.forward(self.domain[i]);
        let d1 = self.transform.forward(self.domain[i + 1]);
        let transformed = d0 + t * (d1 - d0);
        self.transform.inverse(transformed).ok_or_else(|| {
            ScaleError::unsupported("invert requires a transform with an inverse")
        })
    }

    /// Returns approximately `count` representative values from the domain.
    ///
    /// Linear, pow, symlog and custom transforms use evenly spaced round values between
    /// the first and last domain value. Log scales favor powers of the base and their
    /// integer multiples.
    pub fn ticks(&self, count: Option<usize>) -> Vec<f64> {
        let count = count.unwrap_or(10) as f64;
        let start = self.domain[0];
        let stop = self.domain[self.domain.len() - 1];
        match self.transform {
            Transform::Log { base } => log_ticks(start, stop, count, base),
            _ => array::ticks(start, stop, count),
        }
    }

    /// Distance between adjacent linear ticks for `count` ticks, or 0 for a zero-width
    /// domain.
    pub fn tick_step(&self, count: Option<usize>) -> f64 {
        let count = count.unwrap_or(10) as f64;
        array::tick_step(self.domain[0], self.domain[self.domain.len() - 1], count)
    }

    /// Extends the first and last domain values outward to round values.
    ///
    /// Log scales extend to integer powers of the base; all other transforms extend to
    /// multiples of the tick step for `count` ticks. The domain never shrinks.
    pub fn nice(&mut self, count: Option<usize>) {
        let last = self.domain.len() - 1;
        let (start, stop) = (self.domain[0], self.domain[last]);

        let (nice_start, nice_stop) = match self.transform {
            Transform::Log { base } => log_nice(start, stop, base),
            _ => array::nice(start, stop, count.unwrap_or(10) as f64),
        };

        if (nice_start, nice_stop) != (start, stop) {
            tracing::debug!(
                "nice domain [{start}, {stop}] -> [{nice_start}, {nice_stop}] ({:?})",
                self.transform
            );
        }

        self.domain[0] = nice_start;
        self.domain[last] = nice_stop;
    }

    pub fn with_nice(mut self, count: Option<usize>) -> Self {
        self.nice(count);
        self
    }
}

impl<R: Interpolate> Scale for ContinuousScale<R> {
    type Domain = f64;
    type Output = R;

    fn apply(&self, value: &f64) -> Result<R, ScaleError> {
        Ok(ContinuousScale::apply(self, *value))
    }

    fn invert(&self, value: &R) -> Result<f64, ScaleError> {
        ContinuousScale::invert(self, value)
    }

    fn domain(&self) -> Vec<f64> {
        self.domain.clone()
    }

    fn range(&self) -> Vec<R> {
        self.range.clone()
    }

    fn clamp(&self) -> bool {
        self.clamp
    }
}

fn check_len(what: &str, len: usize) -> Result<(), ScaleError> {
    if len < 2 {
        return Err(ScaleError::config(format!(
            "continuous scale {what} requires at least 2 values, got {len}"
        )));
    }
    Ok(())
}

fn log_len_mismatch(domain_len: usize, range_len: usize) {
    if domain_len != range_len {
        tracing::debug!(
            "domain length ({domain_len}) does not match range length ({range_len}), using the first {} pairs",
            domain_len.min(range_len)
        );
    }
}

pub(crate) fn extent(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(*v), hi.max(*v))
        })
}

/// Index `i` of the segment `[values[i], values[i + 1]]` that brackets `x`, for
/// ascending or descending breakpoints. Values outside the breakpoints select the
/// first or last segment.
fn bracket(values: &[f64], x: f64) -> usize {
    let n = values.len();
    if n <= 2 {
        return 0;
    }
    let inner = &values[1..n - 1];
    if values[n - 1] < values[0] {
        inner.partition_point(|v| *v >= x)
    } else {
        inner.partition_point(|v| *v <= x)
    }
}

fn log_ticks(start: f64, stop: f64, count: f64, base: f64) -> Vec<f64> {
    if !(start > 0.0 && stop > 0.0) {
        return vec![];
    }

    let reverse = stop < start;
    let (u, v) = if reverse { (stop, start) } else { (start, stop) };

    let mut i = log_base(u, base);
    let mut j = log_base(v, base);
    let mut z = Vec::new();

    if base.fract() == 0.0 && j - i < count {
        i = i.floor();
        j = j.ceil();
        for exp in (i as i32)..=(j as i32) {
            for k in 1..(base as i32) {
                let t = if exp < 0 {
                    k as f64 / pow_base(base, -exp as f64)
                } else {
                    k as f64 * pow_base(base, exp as f64)
                };
                if t < u {
                    continue;
                }
                if t > v {
                    break;
                }
                z.push(t);
            }
        }

        if (z.len() as f64) * 2.0 < count {
            z = array::ticks(u, v, count);
        }
    } else {
        z = array::ticks(i, j, count.min(j - i))
            .into_iter()
            .map(|e| pow_base(base, e))
            .collect();
    }

    if reverse {
        z.reverse();
    }
    z
}

fn log_nice(start: f64, stop: f64, base: f64) -> (f64, f64) {
    let floor = |x: f64| pow_base(base, log_base(x, base).floor());
    let ceil = |x: f64| pow_base(base, log_base(x, base).ceil());
    if stop < start {
        (ceil(start), floor(stop))
    } else {
        (floor(start), ceil(stop))
    }
}
