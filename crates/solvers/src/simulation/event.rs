use crate::analysis::soliton::SolitonSample;

use super::Status;

/// Events emitted by the simulation loop.
///
/// A run emits a [`Event::Sample`] every `decimation` steps and exactly one
/// [`Event::Terminal`] when it ends, whatever the reason.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// A decimated snapshot after a completed step.
    Sample {
        /// Steps completed so far.
        step: usize,

        /// Simulation time after the step.
        time: f64,

        /// Field amplitude at each grid point.
        field: &'a [f64],

        /// Energy density at each grid point.
        energy: &'a [f64],

        /// All kink centre samples recorded so far, including this step's.
        solitons: &'a [SolitonSample],
    },

    /// The run has ended.
    Terminal {
        /// Why the run ended.
        status: Status,

        /// Steps completed.
        step: usize,

        /// Simulation time after the last completed step.
        time: f64,

        /// The full sequence of kink centre samples.
        solitons: &'a [SolitonSample],
    },
}

impl<'a> Event<'a> {
    /// Returns the number of steps completed when the event was emitted.
    #[must_use]
    pub fn step(&self) -> usize {
        match self {
            Self::Sample { step, .. } | Self::Terminal { step, .. } => *step,
        }
    }

    /// Returns the simulation time when the event was emitted.
    #[must_use]
    pub fn time(&self) -> f64 {
        match self {
            Self::Sample { time, .. } | Self::Terminal { time, .. } => *time,
        }
    }

    /// Returns the kink centre samples recorded so far.
    #[must_use]
    pub fn solitons(&self) -> &'a [SolitonSample] {
        match self {
            Self::Sample { solitons, .. } | Self::Terminal { solitons, .. } => *solitons,
        }
    }
}
