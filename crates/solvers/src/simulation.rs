//! The simulation loop: integrate, analyse, report.
//!
//! # Algorithm
//!
//! Starting from the initial condition sampled at `t = tmin`, each iteration:
//!
//! 1. Checks the [`Interrupt`] token; if raised, the run ends as
//!    [`Status::Interrupted`].
//! 2. Advances the field one step with the symplectic Euler stepper.
//! 3. Every `decimation` steps, computes the energy density, records kink
//!    centres, and emits an [`Event::Sample`].
//! 4. Runs the stability guard; if the field has blown up, the run ends as
//!    [`Status::Unstable`].
//! 5. If the observer returned [`Action::StopEarly`] for this step's sample,
//!    the run ends as [`Status::Interrupted`].
//!
//! After `steps + 1` iterations the run ends as [`Status::Completed`].
//!
//! # Observer Events
//!
//! - [`Event::Sample`] — every `decimation` steps
//! - [`Event::Terminal`] — exactly once, when the run ends for any reason
//!
//! Interrupts and observer stops are not errors: the returned [`Solution`]
//! carries every sample collected up to that point.
//!
//! # Example
//!
//! ```
//! use sine_gordon_core::{Grid, Interrupt, KinkAntikink};
//! use sine_gordon_solvers::simulation::{self, Config, Event, Status};
//!
//! let grid = Grid::new(-20.0, 20.0, 256).unwrap();
//! let config = Config::new(0.0, 5.0, 100, 10).unwrap();
//!
//! let mut frames = 0;
//! let solution = simulation::run(
//!     &grid,
//!     &KinkAntikink::default(),
//!     &config,
//!     &Interrupt::new(),
//!     |event: &Event<'_>| {
//!         if let Event::Sample { .. } = event {
//!             frames += 1;
//!         }
//!         None
//!     },
//! );
//!
//! assert_eq!(solution.status, Status::Completed);
//! assert_eq!(frames, 10);
//! ```

mod action;
mod config;
mod event;
mod solution;


pub use action::Action;
#[cfg(feature = "serde")]
pub use config::ConfigSpec;
pub use config::{Config, ConfigError};
pub use event::Event;
pub use solution::{Solution, Status};

use sine_gordon_core::{FieldState, Grid, InitialCondition, Interrupt, Observer};

use crate::{
    analysis::{
        energy,
        soliton::SolitonTracker,
        stability::{Stability, StabilityGuard},
    },
    transient::symplectic_euler::Stepper,
};

/// Runs a simulation from an initial condition sampled at `config.tmin()`.
///
/// The observer receives an [`Event`] every `config.decimation()` steps and
/// once more when the run ends. See the [module docs](self) for the order of
/// operations within a step.
pub fn run<IC, Obs>(
    grid: &Grid,
    initial: &IC,
    config: &Config,
    interrupt: &Interrupt,
    observer: Obs,
) -> Solution
where
    IC: InitialCondition + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let state = FieldState::sample(grid, initial, config.tmin());
    run_from(grid, state, config, interrupt, observer)
}

/// Runs a simulation from an initial condition without observation.
///
/// This is a convenience wrapper around [`run`] that discards events and
/// cannot be interrupted.
pub fn run_unobserved<IC>(grid: &Grid, initial: &IC, config: &Config) -> Solution
where
    IC: InitialCondition + ?Sized,
{
    run(grid, initial, config, &Interrupt::new(), ())
}

/// Runs a simulation from an existing state.
///
/// The state's own time is used as the starting time; `config` only supplies
/// the step size, iteration count, decimation and blow-up threshold.
///
/// # Panics
///
/// Panics if `state` was not sampled on `grid`.
pub fn run_from<Obs>(
    grid: &Grid,
    mut state: FieldState,
    config: &Config,
    interrupt: &Interrupt,
    mut observer: Obs,
) -> Solution
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    assert_eq!(state.len(), grid.points(), "state must be sampled on the grid");

    let dt = config.dt();
    let iterations = config.iterations();
    let guard = StabilityGuard::new(config.threshold());

    let mut stepper = Stepper::new(grid);
    let mut tracker = SolitonTracker::new();
    let mut density = Vec::with_capacity(grid.points());

    log::debug!(
        "starting run: {} points, h={:.6}, dt={dt:.6}, {iterations} steps from t={:.3}",
        grid.points(),
        grid.spacing(),
        state.t(),
    );

    let mut step = 0;
    let status = loop {
        if step == iterations {
            break Status::Completed;
        }
        if interrupt.is_raised() {
            log::info!("run interrupted at t={:.3} after {step} steps", state.t());
            break Status::Interrupted;
        }

        stepper.advance(&mut state, dt);
        step += 1;

        let mut action = None;
        if step % config.decimation() == 0 {
            energy::density_into(grid, &state, &mut density);
            tracker.record(grid, &state);

            let event = Event::Sample {
                step,
                time: state.t(),
                field: state.u(),
                energy: &density,
                solitons: tracker.samples(),
            };
            action = observer.observe(&event);
        }

        if let Stability::Unstable { max_abs } = guard.check(state.u()) {
            log::warn!(
                "field became unstable at t={:.3} (max |u| = {max_abs:e}); decrease the step size",
                state.t(),
            );
            break Status::Unstable;
        }

        if let Some(Action::StopEarly) = action {
            log::info!("run stopped by observer at t={:.3} after {step} steps", state.t());
            break Status::Interrupted;
        }
    };

    if status == Status::Completed {
        log::info!(
            "run completed at t={:.3}: {} soliton samples",
            state.t(),
            tracker.samples().len()
        );
    }

    let event = Event::Terminal {
        status,
        step,
        time: state.t(),
        solitons: tracker.samples(),
    };
    // The run is over; any action returned here has nothing left to control.
    let _ = observer.observe(&event);

    Solution {
        status,
        steps: step,
        state,
        solitons: tracker.into_samples(),
    }
}
