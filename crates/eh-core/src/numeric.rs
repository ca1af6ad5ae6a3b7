use crate::{CoreError, CoreResult};

/// Floating point type used throughout the dashboard
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> CoreResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// A probability level in `[0, 1]` at which a quantile is taken.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuantileLevel(Real);

impl QuantileLevel {
    pub fn new(q: Real) -> CoreResult<Self> {
        let q = ensure_finite(q, "quantile level")?;
        if !(0.0..=1.0).contains(&q) {
            return Err(CoreError::OutOfRange {
                what: "quantile level",
                value: q,
                min: 0.0,
                max: 1.0,
            });
        }
        Ok(Self(q))
    }

    pub fn get(self) -> Real {
        self.0
    }
}

/// Quantile with linear interpolation between the two closest ranks.
///
/// The rank position is `q * (n - 1)` over the sorted values. NaN values are
/// skipped; `None` is returned when nothing remains.
pub fn quantile<I>(values: I, q: QuantileLevel) -> Option<Real>
where
    I: IntoIterator<Item = Real>,
{
    let mut sorted: Vec<Real> = values.into_iter().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(|a, b| a.total_cmp(b));

    let position = q.get() * (sorted.len() - 1) as Real;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;

    if lower == upper || upper >= sorted.len() {
        Some(sorted[lower])
    } else {
        let fraction = position - lower as Real;
        Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn q(level: Real) -> QuantileLevel {
        QuantileLevel::new(level).unwrap()
    }

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn quantile_level_rejects_out_of_range() {
        assert!(QuantileLevel::new(-0.01).is_err());
        assert!(QuantileLevel::new(1.5).is_err());
        assert!(QuantileLevel::new(Real::NAN).is_err());
        assert!(QuantileLevel::new(0.0).is_ok());
        assert!(QuantileLevel::new(1.0).is_ok());
    }

    #[test]
    fn quantile_of_constant_series() {
        let value = quantile([0.9, 0.9, 0.9], q(0.05)).unwrap();
        assert!(nearly_equal(value, 0.9, Tolerances::default()));
    }

    #[test]
    fn quantile_interpolates_between_ranks() {
        // position = 0.05 * 4 = 0.2 -> 0.1 + 0.2 * (0.5 - 0.1)
        let value = quantile([0.5, 0.6, 0.7, 0.8, 0.1], q(0.05)).unwrap();
        assert!(nearly_equal(value, 0.18, Tolerances::default()));
    }

    #[test]
    fn quantile_endpoints_are_min_and_max() {
        let data = [3.0, -1.0, 7.5, 2.0];
        assert_eq!(quantile(data, q(0.0)), Some(-1.0));
        assert_eq!(quantile(data, q(1.0)), Some(7.5));
        assert_eq!(quantile(data, q(0.5)), Some(2.5));
    }

    #[test]
    fn quantile_skips_nan_and_handles_empty() {
        assert_eq!(quantile([Real::NAN, 4.0], q(0.05)), Some(4.0));
        assert_eq!(quantile(Vec::<Real>::new(), q(0.05)), None);
        assert_eq!(quantile([Real::NAN], q(0.5)), None);
    }

    proptest! {
        #[test]
        fn quantile_within_sample_range(
            values in prop::collection::vec(-1.0e6_f64..1.0e6_f64, 1..64),
            level in 0.0_f64..=1.0_f64,
        ) {
            let value = quantile(values.iter().copied(), q(level)).unwrap();
            let min = values.iter().copied().fold(Real::INFINITY, Real::min);
            let max = values.iter().copied().fold(Real::NEG_INFINITY, Real::max);
            prop_assert!(value >= min - 1e-9 && value <= max + 1e-9);
        }
    }
}
