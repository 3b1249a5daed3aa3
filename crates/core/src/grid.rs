use thiserror::Error;

/// Errors that can occur when constructing a [`Grid`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InvalidDomain {
    #[error("invalid domain: need at least 2 grid points, got {0}")]
    TooFewPoints(usize),

    #[error("invalid domain: bounds must be finite with xmin < xmax, got [{xmin}, {xmax}]")]
    Bounds { xmin: f64, xmax: f64 },
}

/// A uniformly sampled periodic spatial domain.
///
/// The grid holds `points` samples at `xmin + i * spacing` for
/// `i` in `0..points`, with `spacing = (xmax - xmin) / (points - 1)`.
///
/// The domain wraps: the last point is treated as the neighbour of the first,
/// a distance `spacing` away, even though `xmin` and `xmax` are distinct
/// samples. Use [`Grid::next`] and [`Grid::prev`] for wrapped indexing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridSpec", into = "GridSpec")
)]
pub struct Grid {
    xmin: f64,
    xmax: f64,
    points: usize,
    spacing: f64,
}

/// Serialized form of a [`Grid`], validated on deserialization.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridSpec {
    pub xmin: f64,
    pub xmax: f64,
    pub points: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<GridSpec> for Grid {
    type Error = InvalidDomain;

    fn try_from(spec: GridSpec) -> Result<Self, Self::Error> {
        Grid::new(spec.xmin, spec.xmax, spec.points)
    }
}

#[cfg(feature = "serde")]
impl From<Grid> for GridSpec {
    fn from(grid: Grid) -> Self {
        Self {
            xmin: grid.xmin,
            xmax: grid.xmax,
            points: grid.points,
        }
    }
}

impl Grid {
    /// Creates a grid of `points` samples spanning `[xmin, xmax]`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDomain::TooFewPoints`] if `points < 2`, or
    /// [`InvalidDomain::Bounds`] if either bound is non-finite or
    /// `xmin >= xmax`.
    pub fn new(xmin: f64, xmax: f64, points: usize) -> Result<Self, InvalidDomain> {
        if points < 2 {
            return Err(InvalidDomain::TooFewPoints(points));
        }
        if !xmin.is_finite() || !xmax.is_finite() || xmin >= xmax {
            return Err(InvalidDomain::Bounds { xmin, xmax });
        }

        #[allow(clippy::cast_precision_loss)]
        let spacing = (xmax - xmin) / (points - 1) as f64;

        Ok(Self {
            xmin,
            xmax,
            points,
            spacing,
        })
    }

    /// Returns the number of sample points.
    #[must_use]
    pub fn points(&self) -> usize {
        self.points
    }

    #[must_use]
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    #[must_use]
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    /// Returns the domain extent `xmax - xmin`.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Returns the distance `h` between adjacent samples.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Returns the coordinate of sample `index`.
    ///
    /// Indices are not range-checked; `x(points)` lies one spacing past `xmax`.
    #[must_use]
    pub fn x(&self, index: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let offset = index as f64 * self.spacing;
        self.xmin + offset
    }

    /// Returns an iterator over all sample coordinates, in index order.
    pub fn coordinates(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.points).map(|i| self.x(i))
    }

    /// Returns the index to the right of `index`, wrapping `points - 1` to `0`.
    #[must_use]
    pub fn next(&self, index: usize) -> usize {
        if index + 1 == self.points { 0 } else { index + 1 }
    }

    /// Returns the index to the left of `index`, wrapping `0` to `points - 1`.
    #[must_use]
    pub fn prev(&self, index: usize) -> usize {
        if index == 0 { self.points - 1 } else { index - 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn spacing_divides_extent_by_intervals() {
        let grid = Grid::new(-20.0, 20.0, 512).unwrap();

        assert_eq!(grid.points(), 512);
        assert_relative_eq!(grid.length(), 40.0);
        assert_relative_eq!(grid.spacing(), 40.0 / 511.0);
    }

    #[test]
    fn coordinates_span_both_bounds() {
        let grid = Grid::new(0.0, 1.0, 5).unwrap();
        let xs: Vec<f64> = grid.coordinates().collect();

        assert_eq!(xs.len(), 5);
        for (x, expected) in xs.iter().zip([0.0, 0.25, 0.5, 0.75, 1.0]) {
            assert_relative_eq!(*x, expected);
        }
    }

    #[test]
    fn wraps_at_both_ends() {
        let grid = Grid::new(0.0, 1.0, 4).unwrap();

        assert_eq!(grid.next(3), 0);
        assert_eq!(grid.prev(0), 3);
        assert_eq!(grid.next(1), 2);
        assert_eq!(grid.prev(2), 1);
    }

    #[test]
    fn two_point_grid_is_its_own_neighbourhood() {
        let grid = Grid::new(0.0, 1.0, 2).unwrap();

        assert_eq!(grid.next(0), 1);
        assert_eq!(grid.prev(0), 1);
        assert_eq!(grid.next(1), 0);
        assert_eq!(grid.prev(1), 0);
    }

    #[test]
    fn rejects_too_few_points() {
        assert_eq!(Grid::new(0.0, 1.0, 1), Err(InvalidDomain::TooFewPoints(1)));
        assert_eq!(Grid::new(0.0, 1.0, 0), Err(InvalidDomain::TooFewPoints(0)));
    }

    #[test]
    fn rejects_bad_bounds() {
        assert!(matches!(
            Grid::new(1.0, 1.0, 10),
            Err(InvalidDomain::Bounds { .. })
        ));
        assert!(matches!(
            Grid::new(2.0, -2.0, 10),
            Err(InvalidDomain::Bounds { .. })
        ));
        assert!(matches!(
            Grid::new(f64::NEG_INFINITY, 0.0, 10),
            Err(InvalidDomain::Bounds { .. })
        ));
        assert!(matches!(
            Grid::new(0.0, f64::NAN, 10),
            Err(InvalidDomain::Bounds { .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_validates_bounds() {
        let grid: Grid =
            serde_json::from_str(r#"{"xmin": -20.0, "xmax": 20.0, "points": 512}"#).unwrap();
        assert_eq!(grid, Grid::new(-20.0, 20.0, 512).unwrap());

        let bad = serde_json::from_str::<Grid>(r#"{"xmin": 1.0, "xmax": 0.0, "points": 8}"#);
        assert!(bad.is_err());
    }

    proptest! {
        #[test]
        fn next_and_prev_are_inverse(points in 2_usize..1000, seed in any::<usize>()) {
            let grid = Grid::new(-1.0, 1.0, points).unwrap();
            let i = seed % points;
            prop_assert_eq!(grid.prev(grid.next(i)), i);
            prop_assert_eq!(grid.next(grid.prev(i)), i);
        }
    }
}
