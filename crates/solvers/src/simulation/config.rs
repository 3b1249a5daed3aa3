use thiserror::Error;

use crate::analysis::stability::StabilityGuard;

/// Configuration for a simulation run.
///
/// The time step is `dt = (tmax - tmin) / steps`. The loop advances once for
/// every time in `tmin, tmin + dt, ..., tmax`, i.e. `steps + 1` times, and
/// emits a sample every `decimation` steps.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ConfigSpec", into = "ConfigSpec")
)]
pub struct Config {
    tmin: f64,
    tmax: f64,
    steps: usize,
    decimation: usize,
    threshold: f64,
}

/// Errors that can occur when validating a simulation config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("time bounds must be finite with tmin < tmax, got [{tmin}, {tmax}]")]
    TimeSpan { tmin: f64, tmax: f64 },

    #[error("step count must be at least 1")]
    Steps,

    #[error("step size must be finite and positive, got {0}")]
    StepSize(f64),

    #[error("decimation must be at least 1")]
    Decimation,

    #[error("stability threshold must be finite and positive, got {0}")]
    Threshold(f64),
}

impl Default for Config {
    /// The reference run: `t` in `[0, 100]` over 2000 steps, sampling every
    /// 8th step, with the default blow-up threshold.
    fn default() -> Self {
        Self {
            tmin: 0.0,
            tmax: 100.0,
            steps: 2000,
            decimation: 8,
            threshold: StabilityGuard::DEFAULT_THRESHOLD,
        }
    }
}

impl Config {
    /// Creates a config from time bounds and a step count.
    ///
    /// # Errors
    ///
    /// Returns an error if the time bounds are non-finite or out of order, or
    /// if `steps` or `decimation` is zero.
    pub fn new(
        tmin: f64,
        tmax: f64,
        steps: usize,
        decimation: usize,
    ) -> Result<Self, ConfigError> {
        if !tmin.is_finite() || !tmax.is_finite() || tmin >= tmax {
            return Err(ConfigError::TimeSpan { tmin, tmax });
        }
        if steps == 0 {
            return Err(ConfigError::Steps);
        }
        if decimation == 0 {
            return Err(ConfigError::Decimation);
        }

        Ok(Self {
            tmin,
            tmax,
            steps,
            decimation,
            threshold: StabilityGuard::DEFAULT_THRESHOLD,
        })
    }

    /// Creates a config from time bounds and a step size.
    ///
    /// The step count is `(tmax - tmin) / dt` rounded to the nearest integer,
    /// so the effective step size may differ slightly from `dt`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dt` is not finite and positive, if it is so large
    /// that the range rounds to zero steps, or for any reason [`Config::new`]
    /// would reject.
    pub fn with_dt(tmin: f64, tmax: f64, dt: f64, decimation: usize) -> Result<Self, ConfigError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(ConfigError::StepSize(dt));
        }
        if !tmin.is_finite() || !tmax.is_finite() || tmin >= tmax {
            return Err(ConfigError::TimeSpan { tmin, tmax });
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = ((tmax - tmin) / dt).round() as usize;

        Self::new(tmin, tmax, steps, decimation)
    }

    /// Replaces the blow-up threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if `threshold` is not finite and positive.
    pub fn with_threshold(self, threshold: f64) -> Result<Self, ConfigError> {
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ConfigError::Threshold(threshold));
        }
        Ok(Self { threshold, ..self })
    }

    #[must_use]
    pub fn tmin(&self) -> f64 {
        self.tmin
    }

    #[must_use]
    pub fn tmax(&self) -> f64 {
        self.tmax
    }

    /// Returns the number of intervals the time range is divided into.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns how many steps pass between emitted samples.
    #[must_use]
    pub fn decimation(&self) -> usize {
        self.decimation
    }

    /// Returns the field magnitude at which a run is stopped as unstable.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the step size `(tmax - tmin) / steps`.
    #[must_use]
    pub fn dt(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let steps = self.steps as f64;
        (self.tmax - self.tmin) / steps
    }

    /// Returns the number of advances in a complete run, `steps + 1`.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.steps + 1
    }
}

/// Serialized form of a [`Config`], validated on deserialization.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConfigSpec {
    pub tmin: f64,
    pub tmax: f64,
    pub steps: usize,
    pub decimation: usize,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

#[cfg(feature = "serde")]
fn default_threshold() -> f64 {
    StabilityGuard::DEFAULT_THRESHOLD
}

#[cfg(feature = "serde")]
impl TryFrom<ConfigSpec> for Config {
    type Error = ConfigError;

    fn try_from(spec: ConfigSpec) -> Result<Self, Self::Error> {
        Config::new(spec.tmin, spec.tmax, spec.steps, spec.decimation)?
            .with_threshold(spec.threshold)
    }
}

#[cfg(feature = "serde")]
impl From<Config> for ConfigSpec {
    fn from(config: Config) -> Self {
        Self {
            tmin: config.tmin,
            tmax: config.tmax,
            steps: config.steps,
            decimation: config.decimation,
            threshold: config.threshold,
        }
    }
}
