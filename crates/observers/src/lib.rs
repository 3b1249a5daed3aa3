//! Reusable observers for sine-Gordon simulation runs.
//!
//! This crate provides [`Observer`] implementations and capability traits for
//! the events emitted by [`simulation::run`].
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for generic observers
//!   ([`HasTime`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Recorder`] — keeps the latest frame and the end-of-run summary
//! - [`InterruptObserver`] — stops a run when an [`Interrupt`] is raised
//!
//! [`Observer`]: sine_gordon_core::Observer
//! [`Interrupt`]: sine_gordon_core::Interrupt
//! [`simulation::run`]: sine_gordon_solvers::simulation::run
//! [`HasTime`]: traits::HasTime
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod interrupt;
mod recorder;

pub use interrupt::InterruptObserver;
pub use recorder::{Frame, Outcome, Recorder};
