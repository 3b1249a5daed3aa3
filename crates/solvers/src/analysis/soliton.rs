//! Kink centre detection by sign-crossing scan.
//!
//! A kink centre sits where `cos(u / 2)` changes sign between two adjacent
//! grid points. For a kink–antikink pair the domain splits into three regions,
//! `[+, -, +]` or `[-, +, -]`, and the two interior crossings are the centres.
//!
//! The scan runs left to right from index 0:
//!
//! 1. Record the sign at index 0.
//! 2. Advance while the sign matches; the first mismatch is the first centre.
//! 3. Take the sign there and advance again; the next mismatch is the second.
//!
//! `sign(x)` is `+1` for `x > 0` and `-1` otherwise, so an exact zero counts as
//! negative. If either crossing is missing no sample is produced; trajectories
//! simply have gaps where the pair left the domain, merged, or annihilated.

use sine_gordon_core::{FieldState, Grid};

/// Kink centre positions at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolitonSample {
    /// Simulation time of the snapshot.
    pub time: f64,

    /// Position of the first (leftmost) crossing.
    pub first: f64,

    /// Position of the second crossing.
    pub second: f64,
}

/// Which side of a crossing a grid point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Positive,
    Negative,
}

/// Sign of `cos(u / 2)`, with zero on the negative side.
fn side(u: f64) -> Side {
    sign((0.5 * u).cos())
}

fn sign(value: f64) -> Side {
    if value > 0.0 {
        Side::Positive
    } else {
        Side::Negative
    }
}

/// Returns the index of the first point at or after `start` whose side differs
/// from `side_of`, or `u.len()` if there is none.
fn scan(u: &[f64], start: usize, side_of: Side) -> usize {
    u[start..]
        .iter()
        .position(|&v| side(v) != side_of)
        .map_or(u.len(), |offset| start + offset)
}

/// Returns the grid indices of the first two sign crossings, if both exist.
#[must_use]
pub fn locate(u: &[f64]) -> Option<(usize, usize)> {
    let &u0 = u.first()?;

    let first = scan(u, 0, side(u0));
    if first == u.len() {
        return None;
    }

    let second = scan(u, first, side(u[first]));
    (second != u.len()).then_some((first, second))
}

/// Accumulates kink centre positions over a run.
///
/// The tracker has no memory of previous fields; each call to
/// [`record`](Self::record) scans the snapshot from scratch.
#[derive(Debug, Clone, Default)]
pub struct SolitonTracker {
    samples: Vec<SolitonSample>,
}

impl SolitonTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans `state` and appends a sample if both centres are found.
    ///
    /// Returns the appended sample, or `None` if the step left a gap.
    pub fn record(&mut self, grid: &Grid, state: &FieldState) -> Option<SolitonSample> {
        let (first, second) = locate(state.u())?;
        let sample = SolitonSample {
            time: state.t(),
            first: grid.x(first),
            second: grid.x(second),
        };
        self.samples.push(sample);
        Some(sample)
    }

    /// Samples recorded so far, in time order.
    #[must_use]
    pub fn samples(&self) -> &[SolitonSample] {
        &self.samples
    }

    #[must_use]
    pub fn into_samples(self) -> Vec<SolitonSample> {
        self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use sine_gordon_core::KinkAntikink;

    fn grid(points: usize) -> Grid {
        #[allow(clippy::cast_precision_loss)]
        let xmax = (points - 1) as f64;
        Grid::new(0.0, xmax, points).unwrap()
    }

    fn state(grid: &Grid, u: Vec<f64>, t: f64) -> FieldState {
        let udot = vec![0.0; u.len()];
        FieldState::from_samples(grid, u, udot, t).unwrap()
    }

    #[test]
    fn finds_both_centres_of_a_plateau() {
        // cos(u/2): + + - - - + +
        let two_pi = 2.0 * PI;
        let u = vec![0.0, 0.0, two_pi, two_pi, two_pi, 0.0, 0.0];

        assert_eq!(locate(&u), Some((2, 5)));
    }

    #[test]
    fn finds_centres_of_an_inverted_plateau() {
        // cos(u/2): - + + -
        let u = vec![2.0 * PI, 0.0, 0.0, 2.0 * PI];

        assert_eq!(locate(&u), Some((1, 3)));
    }

    #[test]
    fn constant_field_has_no_crossings() {
        assert_eq!(locate(&[0.0; 16]), None);
        assert_eq!(locate(&[2.0 * PI; 16]), None);
    }

    #[test]
    fn single_crossing_is_not_enough() {
        let u = vec![0.0, 0.0, 0.0, 2.0 * PI, 2.0 * PI];

        assert_eq!(locate(&u), None);
    }

    #[test]
    fn empty_field_has_no_crossings() {
        assert_eq!(locate(&[]), None);
    }

    #[test]
    fn exact_zero_counts_as_negative() {
        assert_eq!(sign(0.0), Side::Negative);
        assert_eq!(sign(-0.0), Side::Negative);
        assert_eq!(sign(f64::MIN_POSITIVE), Side::Positive);
        assert_eq!(sign(f64::NAN), Side::Negative);
        assert_eq!(side(0.0), Side::Positive);
        assert_eq!(side(2.0 * PI), Side::Negative);
    }

    #[test]
    fn only_the_first_two_crossings_are_reported() {
        // cos(u/2): + - + - +
        let tp = 2.0 * PI;
        let u = vec![0.0, tp, 0.0, tp, 0.0];

        assert_eq!(locate(&u), Some((1, 2)));
    }

    #[test]
    fn record_converts_indices_to_positions() {
        let grid = Grid::new(-2.0, 2.0, 5).unwrap();
        let tp = 2.0 * PI;
        let snapshot = state(&grid, vec![0.0, tp, tp, 0.0, 0.0], 1.25);
        let mut tracker = SolitonTracker::new();

        let sample = tracker.record(&grid, &snapshot).expect("two crossings");

        assert_relative_eq!(sample.time, 1.25);
        assert_relative_eq!(sample.first, -1.0);
        assert_relative_eq!(sample.second, 1.0);
        assert_eq!(tracker.samples(), [sample]);
    }

    #[test]
    fn recording_twice_appends_identical_samples() {
        let grid = Grid::new(-20.0, 20.0, 512).unwrap();
        let snapshot = FieldState::sample(&grid, &KinkAntikink::default(), 0.0);
        let mut tracker = SolitonTracker::new();

        let a = tracker.record(&grid, &snapshot);
        let b = tracker.record(&grid, &snapshot);

        assert!(a.is_some());
        assert_eq!(a, b);
        assert_eq!(tracker.samples().len(), 2);
        assert_eq!(tracker.samples()[0], tracker.samples()[1]);
    }

    #[test]
    fn gap_appends_nothing() {
        let grid = grid(8);
        let mut tracker = SolitonTracker::new();

        assert!(tracker.record(&grid, &state(&grid, vec![0.5; 8], 0.0)).is_none());
        assert!(tracker.samples().is_empty());
    }

    #[test]
    fn kink_antikink_centres_bracket_the_initial_positions() {
        let grid = Grid::new(-20.0, 20.0, 512).unwrap();
        let snapshot = FieldState::sample(&grid, &KinkAntikink::default(), 0.0);
        let mut tracker = SolitonTracker::new();

        let sample = tracker.record(&grid, &snapshot).expect("two crossings");

        // Each reported centre is the first grid point past the crossing.
        let h = grid.spacing();
        assert!(sample.first > -5.0 && sample.first <= -5.0 + h);
        assert!(sample.second > 5.0 && sample.second <= 5.0 + h);
        assert_eq!(tracker.into_samples().len(), 1);
    }

    proptest! {
        #[test]
        fn locate_is_stateless(u in prop::collection::vec(-10.0_f64..10.0, 1..64)) {
            prop_assert_eq!(locate(&u), locate(&u));
        }

        #[test]
        fn crossings_are_ordered_sign_changes(u in prop::collection::vec(-10.0_f64..10.0, 1..64)) {
            if let Some((first, second)) = locate(&u) {
                prop_assert!(0 < first && first < second && second < u.len());
                prop_assert!(side(u[first - 1]) != side(u[first]));
                prop_assert!(side(u[second - 1]) != side(u[second]));
                prop_assert!(u[..first].iter().all(|&v| side(v) == side(u[0])));
                prop_assert!(u[first..second].iter().all(|&v| side(v) == side(u[first])));
            }
        }
    }
}
