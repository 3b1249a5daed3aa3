//! Capability traits for generic observers.
//!
//! These traits abstract over event and action types, so an observer can be
//! written once and used with any loop whose types provide the capability.
//!
//! # Event traits
//!
//! - [`HasTime`] — events that carry a simulation time
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use sine_gordon_core::Observer;
//! use sine_gordon_observers::traits::{CanStopEarly, HasTime};
//!
//! /// Stops the run once simulation time passes a deadline.
//! struct Deadline(f64);
//!
//! impl<E: HasTime, A: CanStopEarly> Observer<E, A> for Deadline {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.time() >= self.0).then(A::stop_early)
//!     }
//! }
//! ```

use sine_gordon_solvers::simulation;

/// An event that carries a simulation time.
pub trait HasTime {
    /// Returns the simulation time at which the event was emitted.
    fn time(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the run early.
    fn stop_early() -> Self;
}

impl HasTime for simulation::Event<'_> {
    fn time(&self) -> f64 {
        simulation::Event::time(self)
    }
}

impl CanStopEarly for simulation::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use sine_gordon_core::{Grid, Interrupt, KinkAntikink, Observer};
    use sine_gordon_solvers::simulation::{Config, Event, Status, run};

    struct Deadline(f64);

    impl<E: HasTime, A: CanStopEarly> Observer<E, A> for Deadline {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.time() >= self.0).then(A::stop_early)
        }
    }

    #[test]
    fn generic_observer_stops_a_simulation() {
        let grid = Grid::new(-10.0, 10.0, 64).unwrap();
        let config = Config::new(0.0, 1.0, 20, 2).unwrap();

        let solution = run(
            &grid,
            &KinkAntikink::default(),
            &config,
            &Interrupt::new(),
            Deadline(0.45),
        );

        // Samples land near t = 0.1, 0.2, ...; the first past 0.45 asks to stop.
        assert_eq!(solution.status, Status::Interrupted);
        assert_eq!(solution.steps, 10);
    }

    #[test]
    fn event_time_is_forwarded() {
        let event = Event::Terminal {
            status: Status::Completed,
            step: 3,
            time: 1.5,
            solitons: &[],
        };
        assert!((HasTime::time(&event) - 1.5).abs() < f64::EPSILON);
    }
}
