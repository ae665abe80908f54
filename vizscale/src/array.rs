//! Tick step selection, tick generation and domain niceing over numeric intervals.
//!
//! Steps are always drawn from the sequence {1, 2, 5} × 10^k. Steps with a negative
//! power of ten are represented internally as the reciprocal (a negative "increment")
//! so tick values are computed by division, which keeps values such as `0.3` exact.

/// Upper bound on the number of ticks a single call may produce.
pub const MAX_TICKS: usize = 10_000;

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

fn step_factor(error: f64) -> f64 {
    if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    }
}

/// Generate approximately `count` evenly spaced, nicely rounded values covering
/// `[start, stop]` inclusive.
///
/// The result follows the direction of the inputs, so a reversed interval yields
/// descending ticks. A zero-width interval yields the single value `start`. At most
/// [`MAX_TICKS`] values are returned, starting from `start`.
pub fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) || start.is_nan() || stop.is_nan() {
        return vec![];
    }

    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let Some((i1, i2, inc)) = (if reverse {
        tick_range(stop, start, count)
    } else {
        tick_range(start, stop, count)
    }) else {
        return vec![];
    };

    if !(i2 >= i1) {
        return vec![];
    }

    let mut n = (i2 - i1 + 1.0) as usize;
    if n > MAX_TICKS {
        tracing::warn!("{n} ticks requested over [{start}, {stop}], truncating to {MAX_TICKS}");
        n = MAX_TICKS;
    }
    let value = |i: f64| if inc < 0.0 { i / -inc } else { i * inc };

    if reverse {
        (0..n).map(|i| value(i2 - i as f64)).collect()
    } else {
        (0..n).map(|i| value(i1 + i as f64)).collect()
    }
}

/// Returns `(i1, i2, inc)` such that ticks are `i * inc` (or `i / -inc` when `inc`
/// is negative) for every integer `i` in `i1..=i2`.
fn tick_range(start: f64, stop: f64, count: f64) -> Option<(f64, f64, f64)> {
    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step <= 0.0 {
        return None;
    }

    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = step_factor(error);

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let temp_inc = 10f64.powf(-power) / factor;
        i1 = (start * temp_inc).round();
        i2 = (stop * temp_inc).round();
        if i1 / temp_inc < start {
            i1 += 1.0;
        }
        if i2 / temp_inc > stop {
            i2 -= 1.0;
        }
        inc = -temp_inc;
    } else {
        inc = 10f64.powf(power) * factor;
        i1 = (start / inc).round();
        i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_range(start, stop, count * 2.0);
    }

    Some((i1, i2, inc))
}

/// Signed tick increment for the interval.
///
/// Positive values are the step itself; negative values are the negated reciprocal
/// of a fractional step (e.g. `-10.0` for a step of `0.1`). Returns `NaN` when no
/// step can be computed and negative infinity for a zero-width interval.
pub fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    if !(count > 0.0) {
        return f64::NAN;
    }

    if start == stop {
        return f64::NEG_INFINITY;
    }

    let step = (stop - start) / count;
    if step == 0.0 || !step.is_finite() {
        return f64::NAN;
    }

    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = step_factor(error);
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

/// Absolute distance between adjacent ticks for the interval, or `0.0` for a
/// zero-width interval.
pub fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    if start == stop {
        return 0.0;
    }
    if !(count > 0.0) {
        return f64::NAN;
    }

    let step0 = (stop - start).abs() / count;
    let step1 = 10f64.powf(step0.log10().floor());
    step1 * step_factor(step0 / step1)
}

/// Extends `[start, stop]` outward to multiples of the tick step for `count` ticks.
///
/// Orientation is preserved for reversed intervals. Degenerate or NaN intervals are
/// returned unchanged.
pub fn nice(start: f64, stop: f64, count: f64) -> (f64, f64) {
    if start == stop || start.is_nan() || stop.is_nan() {
        return (start, stop);
    }

    let reverse = stop < start;
    let (mut lo, mut hi) = if reverse { (stop, start) } else { (start, stop) };

    let mut prestep = None;
    for _ in 0..10 {
        let step = tick_increment(lo, hi, count);
        if prestep == Some(step) {
            break;
        } else if step > 0.0 {
            lo = (lo / step).floor() * step;
            hi = (hi / step).ceil() * step;
        } else if step < 0.0 {
            lo = (lo * step).ceil() / step;
            hi = (hi * step).floor() / step;
        } else {
            break;
        }
        prestep = Some(step);
    }

    if reverse {
        (hi, lo)
    } else {
        (lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks() {
        assert_eq!(
            ticks(0.0, 1.0, 10.0),
            vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0]
        );
        assert_eq!(ticks(0.0, 1.0, 7.0), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        assert_eq!(ticks(0.0, 1.0, 5.0), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        assert_eq!(ticks(0.0, 1.0, 3.0), vec![0.0, 0.5, 1.0]);
        assert_eq!(ticks(0.0, 1.0, 1.0), vec![0.0, 1.0]);
        assert_eq!(
            ticks(0.0, 100.0, 10.0),
            vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0]
        );
    }

    #[test]
    fn test_ticks_reversed() {
        assert_eq!(ticks(1.0, 0.0, 3.0), vec![1.0, 0.5, 0.0]);
        assert_eq!(
            ticks(-5.0, -10.0, 5.0),
            vec![-5.0, -6.0, -7.0, -8.0, -9.0, -10.0]
        );
    }

    #[test]
    fn test_ticks_edge_cases() {
        assert_eq!(ticks(f64::NAN, 1.0, 1.0), Vec::<f64>::new());
        assert_eq!(ticks(0.0, f64::NAN, 1.0), Vec::<f64>::new());
        assert_eq!(ticks(0.0, 1.0, f64::NAN), Vec::<f64>::new());
        assert_eq!(ticks(0.0, 1.0, 0.0), Vec::<f64>::new());
        assert_eq!(ticks(0.0, 1.0, -1.0), Vec::<f64>::new());
        assert_eq!(ticks(1.0, 1.0, 1.0), vec![1.0]);
        assert_eq!(ticks(1.0, 1.0, 10.0), vec![1.0]);
        assert_eq!(ticks(0.0, 1.0, f64::INFINITY), Vec::<f64>::new());
    }

    #[test]
    fn test_ticks_fractional_count() {
        assert_eq!(ticks(1.0, 364.0, 0.1), Vec::<f64>::new());
        assert_eq!(ticks(1.0, 364.0, 0.499), Vec::<f64>::new());
        assert_eq!(ticks(1.0, 364.0, 0.5), vec![200.0]);
        assert_eq!(ticks(1.0, 364.0, 1.0), vec![200.0]);
        assert_eq!(ticks(1.0, 364.0, 1.5), vec![200.0]);
    }

    #[test]
    fn test_ticks_capped() {
        let t = ticks(0.0, 1.0, usize::MAX as f64);
        assert_eq!(t.len(), MAX_TICKS);
        assert_eq!(t[0], 0.0);
        assert!(t.windows(2).all(|w| w[0] < w[1]));

        let t = ticks(1.0, 0.0, 1e9);
        assert_eq!(t.len(), MAX_TICKS);
        assert_eq!(t[0], 1.0);
        assert!(t.windows(2).all(|w| w[0] > w[1]));

        assert_eq!(ticks(0.0, 1e6, 1e6).len(), MAX_TICKS);
    }

    #[test]
    fn test_tick_increment() {
        assert_eq!(tick_increment(0.0, 1.0, 10.0), -10.0);
        assert_eq!(tick_increment(0.0, 1.0, 7.0), -5.0);
        assert_eq!(tick_increment(0.0, 1.0, 3.0), -2.0);
        assert_eq!(tick_increment(0.0, 1.0, 1.0), 1.0);
        assert_eq!(tick_increment(0.0, 100.0, 10.0), 10.0);
        assert!(tick_increment(0.0, 1.0, 0.0).is_nan());
        assert!(tick_increment(0.0, 1.0, f64::INFINITY).is_nan());
        assert_eq!(tick_increment(1.0, 1.0, 10.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_tick_step() {
        assert_eq!(tick_step(0.0, 100.0, 10.0), 10.0);
        assert_eq!(tick_step(100.0, 0.0, 10.0), 10.0);
        assert_eq!(tick_step(0.0, 1.0, 5.0), 0.2);
        assert_eq!(tick_step(0.0, 1.0, 3.0), 0.5);
        assert_eq!(tick_step(3.0, 3.0, 10.0), 0.0);
    }

    #[test]
    fn test_nice() {
        assert_eq!(nice(1.1, 10.9, 10.0), (1.0, 11.0));
        assert_eq!(nice(10.9, 1.1, 10.0), (11.0, 1.0));
        assert_eq!(nice(0.13, 0.87, 10.0), (0.1, 0.9));
        assert_eq!(nice(-1.1, -10.9, 10.0), (-1.0, -11.0));
        assert_eq!(nice(0.0, 96.0, 10.0), (0.0, 100.0));
        assert_eq!(nice(5.0, 5.0, 10.0), (5.0, 5.0));
    }

    #[test]
    fn test_nice_never_shrinks() {
        for &(start, stop) in &[(0.3, 97.2), (-12.5, 3.3), (0.001, 0.0173), (123.0, 9876.0)] {
            for count in [1.0, 2.0, 5.0, 10.0, 20.0] {
                let (lo, hi) = nice(start, stop, count);
                assert!(lo <= start, "{lo} > {start} for count {count}");
                assert!(hi >= stop, "{hi} < {stop} for count {count}");
            }
        }
    }
}
