//! Read-only analysis of a [`FieldState`] snapshot.
//!
//! - [`energy`] — local energy density and the discrete total energy
//! - [`soliton`] — kink centres located by a sign-crossing scan
//! - [`stability`] — coarse blow-up detection
//!
//! [`FieldState`]: sine_gordon_core::FieldState

pub mod energy;
pub mod soliton;
pub mod stability;
