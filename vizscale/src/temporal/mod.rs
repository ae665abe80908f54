pub mod interval;

use chrono::{DateTime, Utc};

use crate::array::MAX_TICKS;
use crate::error::ScaleError;
use crate::numeric::continuous::ContinuousScale;
use crate::scale::Scale;

use interval::{tick_interval, TimeInterval};

/// A continuous scale over UTC timestamps.
///
/// The domain is stored as epoch milliseconds and mapped linearly onto the range.
/// Ticks and nice bounds land on calendar boundaries (seconds, minutes, hours, days,
/// Sundays, months, years) chosen from the domain span.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeScale {
    inner: ContinuousScale<f64>,
}

impl Default for TimeScale {
    /// 2000-01-01 to 2000-01-02 mapped onto [0, 1].
    fn default() -> Self {
        Self {
            inner: ContinuousScale::<f64>::default()
                .with_domain(&[946_684_800_000.0, 946_771_200_000.0])
                .unwrap_or_default(),
        }
    }
}

impl TimeScale {
    pub fn try_new(domain: &[DateTime<Utc>], range: &[f64]) -> Result<Self, ScaleError> {
        Self::try_new_millis(&to_millis(domain), range)
    }

    /// Creates a time scale from a domain given as epoch milliseconds.
    pub fn try_new_millis(domain: &[f64], range: &[f64]) -> Result<Self, ScaleError> {
        Ok(Self {
            inner: ContinuousScale::linear(domain, range)?,
        })
    }

    pub fn get_domain(&self) -> Vec<DateTime<Utc>> {
        self.inner
            .get_domain()
            .iter()
            .filter_map(|ms| from_millis(*ms).ok())
            .collect()
    }

    /// The domain as epoch milliseconds.
    pub fn get_domain_millis(&self) -> &[f64] {
        self.inner.get_domain()
    }

    pub fn get_range(&self) -> &[f64] {
        self.inner.get_range()
    }

    pub fn get_clamp(&self) -> bool {
        self.inner.get_clamp()
    }

    pub fn get_round(&self) -> bool {
        self.inner.get_round()
    }

    pub fn set_domain(&mut self, domain: &[DateTime<Utc>]) -> Result<(), ScaleError> {
        self.inner.set_domain(&to_millis(domain))
    }

    pub fn set_domain_millis(&mut self, domain: &[f64]) -> Result<(), ScaleError> {
        self.inner.set_domain(domain)
    }

    pub fn set_range(&mut self, range: &[f64]) -> Result<(), ScaleError> {
        self.inner.set_range(range)
    }

    pub fn set_clamp(&mut self, clamp: bool) {
        self.inner.set_clamp(clamp);
    }

    pub fn set_round(&mut self, round: bool) {
        self.inner.set_round(round);
    }

    pub fn with_domain(mut self, domain: &[DateTime<Utc>]) -> Result<Self, ScaleError> {
        self.set_domain(domain)?;
        Ok(self)
    }

    pub fn with_range(mut self, range: &[f64]) -> Result<Self, ScaleError> {
        self.set_range(range)?;
        Ok(self)
    }

    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.set_clamp(clamp);
        self
    }

    pub fn with_round(mut self, round: bool) -> Self {
        self.set_round(round);
        self
    }

    pub fn apply(&self, value: &DateTime<Utc>) -> f64 {
        self.inner.apply(value.timestamp_millis() as f64)
    }

    pub fn apply_millis(&self, millis: f64) -> f64 {
        self.inner.apply(millis)
    }

    /// Maps a range value back to a timestamp, rounded to the nearest millisecond.
    ///
    /// Fails with [`ScaleError::UnsupportedOperation`] when the result is not a
    /// representable date.
    pub fn invert(&self, value: f64) -> Result<DateTime<Utc>, ScaleError> {
        from_millis(self.invert_millis(value)?)
    }

    pub fn invert_millis(&self, value: f64) -> Result<f64, ScaleError> {
        self.inner.invert(&value)
    }

    /// Calendar-aligned ticks within the domain.
    pub fn ticks(&self, count: Option<usize>) -> Vec<DateTime<Utc>> {
        self.tick_millis(count)
            .into_iter()
            .filter_map(DateTime::from_timestamp_millis)
            .collect()
    }

    /// Calendar-aligned ticks within the domain, as epoch milliseconds.
    ///
    /// Ticks follow the direction of the domain.
    #[tracing::instrument(skip_all)]
    pub fn tick_millis(&self, count: Option<usize>) -> Vec<i64> {
        let count = count.unwrap_or(10) as f64;
        let (start, stop) = self.endpoints();
        if count <= 0.0 || !start.is_finite() || !stop.is_finite() {
            return vec![];
        }

        let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
        let interval = tick_interval(lo, hi, count);

        let mut ticks = Vec::new();
        let mut current = interval.ceil(lo.ceil() as i64);
        while let Some(tick) = current {
            if tick as f64 > hi {
                break;
            }
            if ticks.len() == MAX_TICKS {
                tracing::warn!(
                    "time ticks truncated to {MAX_TICKS} values for interval {interval:?}"
                );
                break;
            }
            ticks.push(tick);
            current = interval.next(tick);
        }

        if stop < start {
            ticks.reverse();
        }
        ticks
    }

    /// The calendar interval that [`TimeScale::ticks`] uses for `count` ticks.
    pub fn tick_interval(&self, count: Option<usize>) -> TimeInterval {
        let (start, stop) = self.endpoints();
        let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
        tick_interval(lo, hi, count.unwrap_or(10) as f64)
    }

    /// Extends the first and last domain values outward to boundaries of the tick
    /// interval for `count` ticks.
    pub fn nice(&mut self, count: Option<usize>) {
        let (start, stop) = self.endpoints();
        let reverse = stop < start;
        let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
        let interval = self.tick_interval(count);

        let (Some(nice_lo), Some(nice_hi)) = (
            interval.floor(lo.floor() as i64),
            interval.ceil(hi.ceil() as i64),
        ) else {
            tracing::warn!("time domain [{start}, {stop}] cannot be niced with {interval:?}");
            return;
        };

        let (nice_start, nice_stop) = if reverse {
            (nice_hi as f64, nice_lo as f64)
        } else {
            (nice_lo as f64, nice_hi as f64)
        };
        tracing::debug!("nice time domain [{start}, {stop}] -> [{nice_start}, {nice_stop}] ({interval:?})");

        let mut domain = self.inner.get_domain().to_vec();
        let last = domain.len() - 1;
        domain[0] = nice_start;
        domain[last] = nice_stop;
        if let Err(err) = self.inner.set_domain(&domain) {
            tracing::warn!("discarding nice time domain: {err}");
        }
    }

    pub fn with_nice(mut self, count: Option<usize>) -> Self {
        self.nice(count);
        self
    }

    fn endpoints(&self) -> (f64, f64) {
        let domain = self.inner.get_domain();
        (domain[0], domain[domain.len() - 1])
    }
}

impl Scale for TimeScale {
    type Domain = DateTime<Utc>;
    type Output = f64;

    fn apply(&self, value: &DateTime<Utc>) -> Result<f64, ScaleError> {
        Ok(TimeScale::apply(self, value))
    }

    fn invert(&self, value: &f64) -> Result<DateTime<Utc>, ScaleError> {
        TimeScale::invert(self, *value)
    }

    fn domain(&self) -> Vec<DateTime<Utc>> {
        self.get_domain()
    }

    fn range(&self) -> Vec<f64> {
        self.get_range().to_vec()
    }

    fn clamp(&self) -> bool {
        self.get_clamp()
    }
}

fn to_millis(domain: &[DateTime<Utc>]) -> Vec<f64> {
    domain
        .iter()
        .map(|dt| dt.timestamp_millis() as f64)
        .collect()
}

fn from_millis(millis: f64) -> Result<DateTime<Utc>, ScaleError> {
    if !millis.is_finite() {
        return Err(ScaleError::unsupported(format!(
            "{millis} is not a valid timestamp"
        )));
    }
    DateTime::from_timestamp_millis(millis.round() as i64).ok_or_else(|| {
        ScaleError::unsupported(format!(
            "{millis} ms is outside the representable time range"
        ))
    })
}
