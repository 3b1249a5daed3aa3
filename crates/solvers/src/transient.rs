//! Time integrators for the sine-Gordon equation.
//!
//! # Integrators
//!
//! - [`symplectic_euler`] — semi-implicit Euler on a periodic centred-difference
//!   Laplacian

pub mod symplectic_euler;
