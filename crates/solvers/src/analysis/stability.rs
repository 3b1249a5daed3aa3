//! Coarse numerical blow-up detection.
//!
//! This is not a CFL analysis. It only stops a run once the field has clearly
//! diverged, so that a bad step size does not produce a long stream of
//! meaningless output.

/// Result of a stability check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stability {
    /// `max |u|` is below the threshold.
    Stable,

    /// `max |u|` reached the threshold, or the field contains NaN.
    Unstable {
        /// The largest field magnitude seen (NaN if any sample was NaN).
        max_abs: f64,
    },
}

impl Stability {
    #[must_use]
    pub fn is_stable(&self) -> bool {
        matches!(self, Self::Stable)
    }
}

/// Flags a field whose magnitude is not below a fixed threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityGuard {
    threshold: f64,
}

impl Default for StabilityGuard {
    fn default() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }
}

impl StabilityGuard {
    /// Magnitude at which a field is considered to have blown up.
    pub const DEFAULT_THRESHOLD: f64 = 1000.0;

    /// Creates a guard with a custom threshold.
    ///
    /// The threshold is not validated here; [`simulation::Config`] rejects
    /// non-positive or non-finite values before a run starts.
    ///
    /// [`simulation::Config`]: crate::simulation::Config
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Checks `u` against the threshold.
    ///
    /// A field is stable only when `max |u|` is strictly below the threshold.
    #[must_use]
    pub fn check(&self, u: &[f64]) -> Stability {
        let max_abs = max_abs(u);
        if max_abs < self.threshold {
            Stability::Stable
        } else {
            Stability::Unstable { max_abs }
        }
    }
}

/// Returns `max |u[i]|`, or NaN if any sample is NaN.
#[must_use]
pub fn max_abs(u: &[f64]) -> f64 {
    u.iter().map(|v| v.abs()).fold(0.0, |max, v| {
        if max.is_nan() || v.is_nan() {
            f64::NAN
        } else {
            max.max(v)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn just_below_threshold_is_stable() {
        let guard = StabilityGuard::default();

        assert_eq!(guard.check(&[0.0, 999.999_999, -1.0]), Stability::Stable);
        assert_eq!(guard.check(&[-999.999_999_999]), Stability::Stable);
    }

    #[test]
    fn threshold_itself_is_unstable() {
        let guard = StabilityGuard::default();

        assert_eq!(
            guard.check(&[1.0, 1000.0]),
            Stability::Unstable { max_abs: 1000.0 }
        );
        assert_eq!(
            guard.check(&[-1000.5, 3.0]),
            Stability::Unstable { max_abs: 1000.5 }
        );
    }

    #[test]
    fn nan_is_unstable() {
        let guard = StabilityGuard::default();

        let verdict = guard.check(&[0.0, f64::NAN, 1.0]);

        assert!(!verdict.is_stable());
        assert!(matches!(verdict, Stability::Unstable { max_abs } if max_abs.is_nan()));
    }

    #[test]
    fn infinity_is_unstable() {
        let guard = StabilityGuard::default();

        assert!(!guard.check(&[f64::NEG_INFINITY]).is_stable());
    }

    #[test]
    fn custom_threshold() {
        let guard = StabilityGuard::new(10.0);

        assert_eq!(guard.threshold(), 10.0);
        assert!(guard.check(&[9.5]).is_stable());
        assert!(!guard.check(&[10.0]).is_stable());
    }

    proptest! {
        #[test]
        fn verdict_matches_max_magnitude(u in prop::collection::vec(-2000.0_f64..2000.0, 1..64)) {
            let guard = StabilityGuard::default();
            let largest = u.iter().fold(0.0_f64, |m, v| m.max(v.abs()));

            prop_assert_eq!(guard.check(&u).is_stable(), largest < 1000.0);
        }
    }
}
