//! Interpolation primitives between a normalized position `t` and range values.

/// A range value type that a continuous scale can interpolate into.
///
/// `uninterpolate` is the inverse operation used by `invert`; types that cannot be
/// mapped back to a normalized position keep the default, which makes inversion an
/// unsupported operation for scales over that range type.
pub trait Interpolate: Clone + std::fmt::Debug {
    /// Returns the value at normalized position `t` between `a` (t = 0) and `b` (t = 1).
    fn interpolate(a: &Self, b: &Self, t: f64) -> Self;

    /// Returns the normalized position of `x` between `a` and `b`, if defined.
    fn uninterpolate(_a: &Self, _b: &Self, _x: &Self) -> Option<f64> {
        None
    }

    /// Rounds the value to the nearest integer representation.
    fn round(self) -> Self {
        self
    }

    /// Clamps `x` into the interval spanned by `a` and `b`.
    fn clamp_between(x: &Self, _a: &Self, _b: &Self) -> Self {
        x.clone()
    }

    /// Ordering used to locate the bracketing range segment during inversion.
    fn sort_key(&self) -> Option<f64> {
        None
    }
}

impl Interpolate for f64 {
    fn interpolate(a: &Self, b: &Self, t: f64) -> Self {
        lerp(*a, *b, t)
    }

    fn uninterpolate(a: &Self, b: &Self, x: &Self) -> Option<f64> {
        Some(normalize(*a, *b, *x))
    }

    fn round(self) -> Self {
        f64::round(self)
    }

    fn clamp_between(x: &Self, a: &Self, b: &Self) -> Self {
        let (lo, hi) = if a <= b { (*a, *b) } else { (*b, *a) };
        x.clamp(lo, hi)
    }

    fn sort_key(&self) -> Option<f64> {
        Some(*self)
    }
}

impl Interpolate for f32 {
    fn interpolate(a: &Self, b: &Self, t: f64) -> Self {
        lerp(*a as f64, *b as f64, t) as f32
    }

    fn uninterpolate(a: &Self, b: &Self, x: &Self) -> Option<f64> {
        Some(normalize(*a as f64, *b as f64, *x as f64))
    }

    fn round(self) -> Self {
        f32::round(self)
    }

    fn clamp_between(x: &Self, a: &Self, b: &Self) -> Self {
        let (lo, hi) = if a <= b { (*a, *b) } else { (*b, *a) };
        x.clamp(lo, hi)
    }

    fn sort_key(&self) -> Option<f64> {
        Some(*self as f64)
    }
}

/// Component-wise interpolation, e.g. for 2D positions. Not invertible.
impl<const N: usize> Interpolate for [f64; N] {
    fn interpolate(a: &Self, b: &Self, t: f64) -> Self {
        std::array::from_fn(|i| lerp(a[i], b[i], t))
    }

    fn round(self) -> Self {
        self.map(f64::round)
    }
}

/// Linear interpolation `a + t * (b - a)`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Position of `x` relative to `[a, b]`, where `a` maps to 0 and `b` to 1.
///
/// A zero-width interval maps every value to 0 so that callers fall back to the
/// first endpoint.
pub fn normalize(a: f64, b: f64, x: f64) -> f64 {
    let span = b - a;
    if span == 0.0 || span.is_nan() {
        0.0
    } else {
        (x - a) / span
    }
}

/// Like [`normalize`] but restricted to `[0, 1]`.
pub fn normalize_clamped(a: f64, b: f64, x: f64) -> f64 {
    normalize(a, b, x).clamp(0.0, 1.0)
}

/// Discrete interpolator over an ordered set of values.
///
/// The unit interval is split into `values.len()` equal parts and `t` selects the
/// value of the part it falls into; positions outside `[0, 1]` select the first or
/// last value. Returns `None` for an empty set.
pub fn interpolate_discrete<T: Clone>(values: &[T]) -> impl Fn(f64) -> Option<T> + '_ {
    move |t: f64| {
        if values.is_empty() || t.is_nan() {
            return None;
        }
        let n = values.len();
        let index = (t * n as f64).floor().clamp(0.0, (n - 1) as f64) as usize;
        Some(values[index].clone())
    }
}
