use thiserror::Error;

use crate::{Grid, InitialCondition};

/// Errors that can occur when building a [`FieldState`] from raw samples.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("field has {actual} samples but the grid has {expected} points")]
    FieldLength { expected: usize, actual: usize },

    #[error("velocity has {actual} samples but the grid has {expected} points")]
    VelocityLength { expected: usize, actual: usize },
}

/// The field `u`, its time derivative `udot`, and the current time `t`.
///
/// Both sequences always hold exactly one value per grid point. A state is
/// created once per run and then advanced in place by the stepper.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    u: Vec<f64>,
    udot: Vec<f64>,
    t: f64,
}

impl FieldState {
    /// Samples an initial condition at every grid point.
    #[must_use]
    pub fn sample<IC: InitialCondition + ?Sized>(grid: &Grid, initial: &IC, t: f64) -> Self {
        let u = grid.coordinates().map(|x| initial.field(x)).collect();
        let udot = grid.coordinates().map(|x| initial.velocity(x)).collect();
        Self { u, udot, t }
    }

    /// Builds a state from explicit samples.
    ///
    /// # Errors
    ///
    /// Returns an error if either sequence does not have one value per grid point.
    pub fn from_samples(
        grid: &Grid,
        u: Vec<f64>,
        udot: Vec<f64>,
        t: f64,
    ) -> Result<Self, FieldError> {
        let expected = grid.points();
        if u.len() != expected {
            return Err(FieldError::FieldLength {
                expected,
                actual: u.len(),
            });
        }
        if udot.len() != expected {
            return Err(FieldError::VelocityLength {
                expected,
                actual: udot.len(),
            });
        }
        Ok(Self { u, udot, t })
    }

    /// Returns a state at rest with `u ≡ 0` and `udot ≡ 0`.
    #[must_use]
    pub fn vacuum(grid: &Grid, t: f64) -> Self {
        Self {
            u: vec![0.0; grid.points()],
            udot: vec![0.0; grid.points()],
            t,
        }
    }

    /// Field amplitude at each grid point.
    #[must_use]
    pub fn u(&self) -> &[f64] {
        &self.u
    }

    /// Time derivative of the field at each grid point.
    #[must_use]
    pub fn udot(&self) -> &[f64] {
        &self.udot
    }

    /// Current simulation time.
    #[must_use]
    pub fn t(&self) -> f64 {
        self.t
    }

    /// Number of samples, equal to the grid's point count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.u.len()
    }

    /// Always `false`; a grid has at least two points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.u.is_empty()
    }

    /// Mutable access to `u`, `udot`, and `t` together.
    ///
    /// Only whole-step updates should go through here, so the lengths of the
    /// slices cannot change.
    pub fn parts_mut(&mut self) -> (&mut [f64], &mut [f64], &mut f64) {
        (&mut self.u, &mut self.udot, &mut self.t)
    }
}
