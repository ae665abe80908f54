//! Calendar intervals used to place time ticks and nice time domains.
//!
//! All arithmetic happens on UTC epoch milliseconds. Sub-day intervals are aligned to
//! multiples of their duration since the epoch; days, weeks, months and years are
//! aligned to calendar boundaries.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate};

use crate::array;

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_MINUTE: i64 = MILLIS_PER_SECOND * 60;
pub const MILLIS_PER_HOUR: i64 = MILLIS_PER_MINUTE * 60;
pub const MILLIS_PER_DAY: i64 = MILLIS_PER_HOUR * 24;
pub const MILLIS_PER_WEEK: i64 = MILLIS_PER_DAY * 7;
pub const MILLIS_PER_MONTH: i64 = MILLIS_PER_DAY * 30;
pub const MILLIS_PER_YEAR: i64 = MILLIS_PER_DAY * 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeInterval {
    Millisecond(i64),
    Second(i64),
    Minute(i64),
    Hour(i64),
    /// Every n-th day of the month, counting from the 1st
    Day(u32),
    /// Weeks starting on Sunday
    Week,
    /// Every n-th month of the year, counting from January
    Month(u32),
    /// Years divisible by n
    Year(i32),
}

const TICK_INTERVALS: [TimeInterval; 18] = [
    TimeInterval::Second(1),
    TimeInterval::Second(5),
    TimeInterval::Second(15),
    TimeInterval::Second(30),
    TimeInterval::Minute(1),
    TimeInterval::Minute(5),
    TimeInterval::Minute(15),
    TimeInterval::Minute(30),
    TimeInterval::Hour(1),
    TimeInterval::Hour(3),
    TimeInterval::Hour(6),
    TimeInterval::Hour(12),
    TimeInterval::Day(1),
    TimeInterval::Day(2),
    TimeInterval::Week,
    TimeInterval::Month(1),
    TimeInterval::Month(3),
    TimeInterval::Year(1),
];

impl TimeInterval {
    /// Multipliers below one count as one.
    fn normalized(self) -> Self {
        match self {
            TimeInterval::Millisecond(n) => TimeInterval::Millisecond(n.max(1)),
            TimeInterval::Second(n) => TimeInterval::Second(n.max(1)),
            TimeInterval::Minute(n) => TimeInterval::Minute(n.max(1)),
            TimeInterval::Hour(n) => TimeInterval::Hour(n.max(1)),
            TimeInterval::Day(n) => TimeInterval::Day(n.max(1)),
            TimeInterval::Week => TimeInterval::Week,
            TimeInterval::Month(n) => TimeInterval::Month(n.max(1)),
            TimeInterval::Year(n) => TimeInterval::Year(n.max(1)),
        }
    }

    /// Nominal duration in milliseconds (30-day months, 365-day years).
    pub fn approx_millis(&self) -> i64 {
        match self.normalized() {
            TimeInterval::Millisecond(n) => n,
            TimeInterval::Second(n) => n * MILLIS_PER_SECOND,
            TimeInterval::Minute(n) => n * MILLIS_PER_MINUTE,
            TimeInterval::Hour(n) => n * MILLIS_PER_HOUR,
            TimeInterval::Day(n) => n as i64 * MILLIS_PER_DAY,
            TimeInterval::Week => MILLIS_PER_WEEK,
            TimeInterval::Month(n) => n as i64 * MILLIS_PER_MONTH,
            TimeInterval::Year(n) => n as i64 * MILLIS_PER_YEAR,
        }
    }

    /// Latest interval boundary at or before `ms`.
    ///
    /// Returns `None` when the result falls outside the representable date range.
    pub fn floor(&self, ms: i64) -> Option<i64> {
        match self.normalized() {
            TimeInterval::Millisecond(_)
            | TimeInterval::Second(_)
            | TimeInterval::Minute(_)
            | TimeInterval::Hour(_) => {
                let unit = self.approx_millis().max(1);
                Some(ms.div_euclid(unit) * unit)
            }
            TimeInterval::Day(n) => {
                let mut date = to_date(ms)?;
                while (date.day() - 1) % n != 0 {
                    date = date.pred_opt()?;
                }
                from_date(date)
            }
            TimeInterval::Week => {
                let date = to_date(ms)?;
                let since_sunday = date.weekday().num_days_from_sunday();
                from_date(date.checked_sub_days(Days::new(since_sunday as u64))?)
            }
            TimeInterval::Month(n) => {
                let date = to_date(ms)?;
                let month0 = date.month0() / n * n;
                from_date(NaiveDate::from_ymd_opt(date.year(), month0 + 1, 1)?)
            }
            TimeInterval::Year(n) => {
                let year = to_date(ms)?.year().div_euclid(n) * n;
                from_date(NaiveDate::from_ymd_opt(year, 1, 1)?)
            }
        }
    }

    /// Earliest interval boundary at or after `ms`.
    pub fn ceil(&self, ms: i64) -> Option<i64> {
        let floored = self.floor(ms)?;
        if floored == ms {
            Some(ms)
        } else {
            self.next(floored)
        }
    }

    /// The boundary following `boundary`, which must itself be a boundary.
    pub fn next(&self, boundary: i64) -> Option<i64> {
        match self.normalized() {
            TimeInterval::Millisecond(_)
            | TimeInterval::Second(_)
            | TimeInterval::Minute(_)
            | TimeInterval::Hour(_) => boundary.checked_add(self.approx_millis().max(1)),
            TimeInterval::Day(n) => {
                let mut date = to_date(boundary)?.succ_opt()?;
                while (date.day() - 1) % n != 0 {
                    date = date.succ_opt()?;
                }
                from_date(date)
            }
            TimeInterval::Week => from_date(to_date(boundary)?.checked_add_days(Days::new(7))?),
            TimeInterval::Month(n) => {
                from_date(to_date(boundary)?.checked_add_months(Months::new(n))?)
            }
            TimeInterval::Year(n) => {
                let year = to_date(boundary)?.year().checked_add(n)?;
                from_date(NaiveDate::from_ymd_opt(year, 1, 1)?)
            }
        }
    }
}

/// Chooses the calendar interval whose spacing best yields `count` ticks over
/// `[start, stop]` (epoch milliseconds).
///
/// Spans shorter than a second use millisecond multiples from the numeric tick step;
/// spans longer than a year use year multiples from the tick step over fractional years.
pub fn tick_interval(start: f64, stop: f64, count: f64) -> TimeInterval {
    let target = (stop - start).abs() / count;
    let i = TICK_INTERVALS.partition_point(|interval| interval.approx_millis() as f64 <= target);

    if i == TICK_INTERVALS.len() {
        let year = MILLIS_PER_YEAR as f64;
        let step = array::tick_step(start / year, stop / year, count);
        TimeInterval::Year(step.round().max(1.0) as i32)
    } else if i == 0 {
        let step = array::tick_step(start, stop, count);
        TimeInterval::Millisecond(step.round().max(1.0) as i64)
    } else {
        let (below, above) = (TICK_INTERVALS[i - 1], TICK_INTERVALS[i]);
        if target / (below.approx_millis() as f64) < above.approx_millis() as f64 / target {
            below
        } else {
            above
        }
    }
}

fn to_date(ms: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(ms).map(|dt| dt.date_naive())
}

fn from_date(date: NaiveDate) -> Option<i64> {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp_millis())
}
