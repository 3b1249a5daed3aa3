//! Semi-implicit (symplectic) Euler integrator for `u_tt = u_xx - sin(u)`.
//!
//! Each step evaluates the periodic centred-difference Laplacian and the
//! nonlinear forcing, then updates velocity before position:
//!
//! ```text
//! utt[i]   = (u[i+1] + u[i-1] - 2 u[i]) / h² - sin(u[i])
//! udot[i] += dt * utt[i]
//! u[i]    += dt * udot[i]        // uses the updated velocity
//! t       += dt
//! ```
//!
//! Indices wrap at both ends of the grid. Updating velocity first is what makes
//! this the symplectic variant rather than forward Euler, and it is what keeps
//! the discrete energy bounded over long runs.
//!
//! # Example
//!
//! ```
//! use sine_gordon_core::{FieldState, Grid, KinkAntikink};
//! use sine_gordon_solvers::transient::symplectic_euler::Stepper;
//!
//! let grid = Grid::new(-20.0, 20.0, 512).unwrap();
//! let mut state = FieldState::sample(&grid, &KinkAntikink::default(), 0.0);
//! let mut stepper = Stepper::new(&grid);
//!
//! for _ in 0..10 {
//!     stepper.advance(&mut state, 0.05);
//! }
//! assert!((state.t() - 0.5).abs() < 1e-12);
//! ```

use sine_gordon_core::{FieldState, Grid};

/// Writes the periodic centred-difference Laplacian of `u` into `out`.
///
/// `out[0]` uses `u[M-1]` as its left neighbour and `out[M-1]` uses `u[0]` as
/// its right neighbour.
///
/// # Panics
///
/// Panics if `u` or `out` does not have one value per grid point.
pub fn laplacian(grid: &Grid, u: &[f64], out: &mut [f64]) {
    assert_eq!(u.len(), grid.points(), "field length must match the grid");
    assert_eq!(out.len(), grid.points(), "output length must match the grid");

    let inv_h2 = 1.0 / (grid.spacing() * grid.spacing());
    for (i, lap) in out.iter_mut().enumerate() {
        *lap = (u[grid.next(i)] + u[grid.prev(i)] - 2.0 * u[i]) * inv_h2;
    }
}

/// Writes `u_tt = laplacian(u) - sin(u)` into `out`.
///
/// # Panics
///
/// Panics if `u` or `out` does not have one value per grid point.
pub fn acceleration(grid: &Grid, u: &[f64], out: &mut [f64]) {
    laplacian(grid, u, out);
    for (utt, &ui) in out.iter_mut().zip(u) {
        *utt -= ui.sin();
    }
}

/// Advances `state` by one step of size `dt`, allocating a scratch buffer.
///
/// Prefer [`Stepper`] when taking many steps.
pub fn advance(grid: &Grid, state: &mut FieldState, dt: f64) {
    Stepper::new(grid).advance(state, dt);
}

/// Advances a [`FieldState`] in place, reusing one acceleration buffer
/// across steps.
#[derive(Debug, Clone)]
pub struct Stepper {
    grid: Grid,
    utt: Vec<f64>,
}

impl Stepper {
    /// Creates a stepper for fields sampled on `grid`.
    #[must_use]
    pub fn new(grid: &Grid) -> Self {
        Self {
            grid: *grid,
            utt: vec![0.0; grid.points()],
        }
    }

    /// Returns the grid this stepper was built for.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Advances `state` by `dt`: velocity first, then position, then time.
    ///
    /// # Panics
    ///
    /// Panics if `state` was not sampled on this stepper's grid.
    pub fn advance(&mut self, state: &mut FieldState, dt: f64) {
        let (u, udot, t) = state.parts_mut();

        acceleration(&self.grid, u, &mut self.utt);

        for (v, a) in udot.iter_mut().zip(&self.utt) {
            *v += dt * a;
        }
        for (x, v) in u.iter_mut().zip(udot.iter()) {
            *x += dt * v;
        }
        *t += dt;
    }
}
