use sine_gordon_core::FieldState;

use crate::analysis::soliton::SolitonSample;

/// Indicates how the run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Advanced through the full time range.
    Completed,

    /// Stopped because the stability guard detected blow-up.
    Unstable,

    /// Stopped by an interrupt or an observer action.
    Interrupted,
}

/// The result of a simulation run.
#[derive(Debug, Clone)]
pub struct Solution {
    /// How the run terminated.
    pub status: Status,

    /// Number of steps completed.
    pub steps: usize,

    /// Field state after the last completed step.
    pub state: FieldState,

    /// Kink centre samples, in time order.
    pub solitons: Vec<SolitonSample>,
}
