//! Initial conditions for a sine-Gordon run.
//!
//! An [`InitialCondition`] supplies `u(x)` and `udot(x)` at `t = tmin`. Any
//! pair of closures `(u0, udot0)` works directly; [`KinkAntikink`] provides the
//! standard two-soliton setup.

use std::f64::consts::PI;

use thiserror::Error;

/// Height of a single kink, `2π`.
pub const KINK_HEIGHT: f64 = 2.0 * PI;

/// The field and its time derivative at the start of a run.
pub trait InitialCondition {
    /// Field amplitude at `x`.
    fn field(&self, x: f64) -> f64;

    /// Time derivative of the field at `x`.
    fn velocity(&self, x: f64) -> f64;
}

/// Blanket implementation for a `(u0, udot0)` closure pair.
impl<F, G> InitialCondition for (F, G)
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    fn field(&self, x: f64) -> f64 {
        (self.0)(x)
    }

    fn velocity(&self, x: f64) -> f64 {
        (self.1)(x)
    }
}

/// Errors that can occur when constructing a [`KinkAntikink`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InitialConditionError {
    #[error("kink velocity must be finite with |v| < 1, got {0}")]
    Velocity(f64),

    #[error("kink centre must be finite, got {0}")]
    Centre(f64),
}

/// A kink centred at `x0` and an antikink centred at `x1`.
///
/// ```text
/// u0(x) = 4 atan(exp(γ0 (x - x0))) - 4 atan(exp(γ1 (x - x1)))
/// ```
///
/// Each soliton may carry a Lorentz-boosted velocity `v` (in units of the wave
/// speed), with `γ = 1 / sqrt(1 - v²)`. At rest this reduces to the unboosted
/// profile with `udot0 ≡ 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KinkAntikink {
    x0: f64,
    x1: f64,
    v0: f64,
    v1: f64,
}

impl Default for KinkAntikink {
    fn default() -> Self {
        Self {
            x0: -5.0,
            x1: 5.0,
            v0: 0.0,
            v1: 0.0,
        }
    }
}

impl KinkAntikink {
    /// Creates a kink–antikink pair at rest.
    ///
    /// # Errors
    ///
    /// Returns an error if either centre is non-finite.
    pub fn at_rest(x0: f64, x1: f64) -> Result<Self, InitialConditionError> {
        Self::moving(x0, 0.0, x1, 0.0)
    }

    /// Creates a kink at `x0` moving with `v0` and an antikink at `x1` moving with `v1`.
    ///
    /// # Errors
    ///
    /// Returns an error if a centre is non-finite or a velocity is not in `(-1, 1)`.
    pub fn moving(x0: f64, v0: f64, x1: f64, v1: f64) -> Result<Self, InitialConditionError> {
        for x in [x0, x1] {
            if !x.is_finite() {
                return Err(InitialConditionError::Centre(x));
            }
        }
        for v in [v0, v1] {
            if !v.is_finite() || v.abs() >= 1.0 {
                return Err(InitialConditionError::Velocity(v));
            }
        }
        Ok(Self { x0, x1, v0, v1 })
    }

    #[must_use]
    pub fn kink_centre(&self) -> f64 {
        self.x0
    }

    #[must_use]
    pub fn antikink_centre(&self) -> f64 {
        self.x1
    }
}

/// Lorentz factor for a soliton moving at `v`.
fn gamma(v: f64) -> f64 {
    1.0 / (1.0 - v * v).sqrt()
}

/// Static kink profile `4 atan(exp(s))`, rising from 0 to 2π.
fn kink(s: f64) -> f64 {
    4.0 * s.exp().atan()
}

/// `d/ds 4 atan(exp(s)) = 2 sech(s)`.
fn kink_slope(s: f64) -> f64 {
    2.0 / s.cosh()
}

impl InitialCondition for KinkAntikink {
    fn field(&self, x: f64) -> f64 {
        let g0 = gamma(self.v0);
        let g1 = gamma(self.v1);
        kink(g0 * (x - self.x0)) - kink(g1 * (x - self.x1))
    }

    fn velocity(&self, x: f64) -> f64 {
        if self.v0 == 0.0 && self.v1 == 0.0 {
            return 0.0;
        }
        let g0 = gamma(self.v0);
        let g1 = gamma(self.v1);
        // The profile translates as s = γ (x - x_c - v t), so ds/dt = -γ v.
        -g0 * self.v0 * kink_slope(g0 * (x - self.x0))
            + g1 * self.v1 * kink_slope(g1 * (x - self.x1))
    }
}
