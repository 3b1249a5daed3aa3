//! An observer that keeps what a front end needs to draw a run.

use sine_gordon_core::Observer;
use sine_gordon_solvers::{
    analysis::soliton::SolitonSample,
    simulation::{Event, Status},
};

/// A copy of one decimated snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub step: usize,
    pub time: f64,
    pub field: Vec<f64>,
    pub energy: Vec<f64>,
}

/// How a run ended, with its full kink trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub status: Status,
    pub step: usize,
    pub time: f64,
    pub solitons: Vec<SolitonSample>,
}

/// Records the latest frame and the end-of-run summary.
///
/// Only the most recent frame is kept; its buffers are reused between
/// samples, so recording a long run does not allocate per frame.
///
/// # Example
///
/// ```
/// use sine_gordon_core::{Grid, Interrupt, KinkAntikink};
/// use sine_gordon_observers::Recorder;
/// use sine_gordon_solvers::simulation::{self, Config, Status};
///
/// let grid = Grid::new(-20.0, 20.0, 256).unwrap();
/// let config = Config::new(0.0, 1.0, 20, 5).unwrap();
///
/// let mut recorder = Recorder::new();
/// simulation::run(&grid, &KinkAntikink::default(), &config, &Interrupt::new(), &mut recorder);
///
/// assert_eq!(recorder.frames(), 4);
/// assert_eq!(recorder.outcome().map(|o| o.status), Some(Status::Completed));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    frames: usize,
    latest: Option<Frame>,
    outcome: Option<Outcome>,
}

impl Recorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of sample events seen.
    #[must_use]
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Returns the most recent frame, if any sample has been seen.
    #[must_use]
    pub fn latest(&self) -> Option<&Frame> {
        self.latest.as_ref()
    }

    /// Returns the end-of-run summary, once the run has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    fn sample(&mut self, step: usize, time: f64, field: &[f64], energy: &[f64]) {
        self.frames += 1;
        match &mut self.latest {
            Some(frame) => {
                frame.step = step;
                frame.time = time;
                frame.field.clear();
                frame.field.extend_from_slice(field);
                frame.energy.clear();
                frame.energy.extend_from_slice(energy);
            }
            None => {
                self.latest = Some(Frame {
                    step,
                    time,
                    field: field.to_vec(),
                    energy: energy.to_vec(),
                });
            }
        }
    }

    fn finish(&mut self, status: Status, step: usize, time: f64, solitons: &[SolitonSample]) {
        log::debug!(
            "recorded {} frames; run ended {status:?} at t={time:.3}",
            self.frames
        );
        self.outcome = Some(Outcome {
            status,
            step,
            time,
            solitons: solitons.to_vec(),
        });
    }
}

impl<'a, A> Observer<Event<'a>, A> for Recorder {
    fn observe(&mut self, event: &Event<'a>) -> Option<A> {
        match *event {
            Event::Sample {
                step,
                time,
                field,
                energy,
                ..
            } => self.sample(step, time, field, energy),
            Event::Terminal {
                status,
                step,
                time,
                solitons,
            } => self.finish(status, step, time, solitons),
        }
        None
    }
}

/// Allows `&mut Recorder` to be passed to a run so the recorder can be read
/// afterwards.
impl<'a, A> Observer<Event<'a>, A> for &mut Recorder {
    fn observe(&mut self, event: &Event<'a>) -> Option<A> {
        Observer::<Event<'a>, A>::observe(&mut **self, event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use sine_gordon_core::{Grid, Interrupt, KinkAntikink};
    use sine_gordon_solvers::simulation::{self, Action, Config};

    #[test]
    fn keeps_only_the_latest_frame() {
        let mut recorder = Recorder::new();
        let first = [1.0, 2.0];
        let second = [3.0, 4.0];

        let _: Option<Action> = recorder.observe(&Event::Sample {
            step: 2,
            time: 0.2,
            field: &first,
            energy: &first,
            solitons: &[],
        });
        let _: Option<Action> = recorder.observe(&Event::Sample {
            step: 4,
            time: 0.4,
            field: &second,
            energy: &first,
            solitons: &[],
        });

        assert_eq!(recorder.frames(), 2);
        assert!(recorder.outcome().is_none());
        assert_eq!(
            recorder.latest(),
            Some(&Frame {
                step: 4,
                time: 0.4,
                field: second.to_vec(),
                energy: first.to_vec(),
            })
        );
    }

    #[test]
    fn summarises_a_full_run() {
        let grid = Grid::new(-20.0, 20.0, 256).unwrap();
        let config = Config::new(0.0, 2.0, 40, 8).unwrap();
        let mut recorder = Recorder::new();

        let solution = simulation::run(
            &grid,
            &KinkAntikink::default(),
            &config,
            &Interrupt::new(),
            &mut recorder,
        );

        assert_eq!(recorder.frames(), 5);

        let frame = recorder.latest().unwrap();
        assert_eq!(frame.step, 40);
        assert_relative_eq!(frame.time, 2.0, epsilon = 1e-12);
        assert_eq!(frame.field.len(), grid.points());
        assert_eq!(frame.energy.len(), grid.points());

        let outcome = recorder.outcome().unwrap();
        assert_eq!(outcome.status, solution.status);
        assert_eq!(outcome.step, 41);
        assert_eq!(outcome.solitons, solution.solitons);
    }
}
