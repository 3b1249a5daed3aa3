//! Integrator and analysis routines for the periodic sine-Gordon equation.
//!
//! - [`transient`] — time stepping of a [`FieldState`] on a periodic [`Grid`]
//! - [`analysis`] — energy density, kink centre tracking, and blow-up detection
//! - [`simulation`] — the observed run loop that ties the two together
//!
//! [`FieldState`]: sine_gordon_core::FieldState
//! [`Grid`]: sine_gordon_core::Grid

pub mod analysis;
pub mod simulation;
pub mod transient;
