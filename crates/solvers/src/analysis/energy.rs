//! Energy density of a sine-Gordon field.
//!
//! ```text
//! E[i] = (udot[i]² + ux[i]²) / 2 + (1 - cos u[i])
//! ux[i] = (u[i+1] - u[i]) / h          // forward difference, wrapping at M-1
//! ```
//!
//! The spatial derivative here is a one-sided forward difference, unlike the
//! centred Laplacian the integrator uses. Reported densities depend on this
//! choice; the dynamics do not.

use sine_gordon_core::{FieldState, Grid};

/// Returns the energy density at every grid point.
#[must_use]
pub fn density(grid: &Grid, state: &FieldState) -> Vec<f64> {
    let mut out = Vec::with_capacity(grid.points());
    density_into(grid, state, &mut out);
    out
}

/// Writes the energy density into `out`, replacing its contents.
pub fn density_into(grid: &Grid, state: &FieldState, out: &mut Vec<f64>) {
    debug_assert_eq!(state.len(), grid.points());

    let u = state.u();
    let udot = state.udot();
    let inv_h = 1.0 / grid.spacing();

    out.clear();
    out.extend((0..u.len()).map(|i| {
        let ux = (u[grid.next(i)] - u[i]) * inv_h;
        0.5 * (udot[i] * udot[i] + ux * ux) + (1.0 - u[i].cos())
    }));
}

/// Returns the discrete total energy `h * Σ E[i]`.
#[must_use]
pub fn total(grid: &Grid, density: &[f64]) -> f64 {
    grid.spacing() * density.iter().sum::<f64>()
}
