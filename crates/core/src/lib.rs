//! Core types for integrating the sine-Gordon equation on a periodic line.
//!
//! This crate defines the shared pieces that the integrator, its analysis
//! routines, and observers build on:
//!
//! - [`Grid`] — a uniformly sampled periodic domain
//! - [`FieldState`] — the field, its time derivative, and the current time
//! - [`InitialCondition`] — `u(x)` and `udot(x)` at the start of a run, with
//!   [`KinkAntikink`] as the standard two-soliton setup
//! - [`Observer`] — receives simulation events and optionally returns control actions
//! - [`Interrupt`] — a cooperative stop request checked between steps

mod field;
mod grid;
mod interrupt;
mod observer;

pub mod initial;

pub use field::{FieldError, FieldState};
#[cfg(feature = "serde")]
pub use grid::GridSpec;
pub use grid::{Grid, InvalidDomain};
pub use initial::{InitialCondition, KinkAntikink};
pub use interrupt::Interrupt;
pub use observer::Observer;
