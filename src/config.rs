use crate::engine::ExecutionMode;
use crate::error::{Error, Result};
use crate::point::MAX_COORDINATE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Settings for one clustering run, loadable from YAML.
///
/// ```yaml
/// points: 1000
/// passes: 50
/// mode: vectorized
/// workers: 8
/// seed: 42
/// coordinate_limit: 32768
/// output_dir: results
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of generated points.
    pub points: usize,

    /// Fixed number of passes; there is no convergence check.
    pub passes: usize,

    pub mode: ExecutionMode,

    /// Worker threads. `None` uses the detected hardware parallelism.
    pub workers: Option<usize>,

    /// Run seed. `None` derives one from the current time.
    pub seed: Option<u64>,

    /// Exclusive upper bound of generated coordinates.
    pub coordinate_limit: i32,

    /// Directory for `points.txt` and `centroids.txt`.
    pub output_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            points: 1000,
            passes: 50,
            mode: ExecutionMode::Vectorized,
            workers: None,
            seed: None,
            coordinate_limit: 32768,
            output_dir: PathBuf::from("."),
        }
    }
}

impl RunConfig {
    /// Load config from a YAML file. Missing keys take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: RunConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    pub fn with_passes(mut self, passes: usize) -> Self {
        self.passes = passes;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Rejects values that would make a run meaningless. A worker count of
    /// zero is not rejected here; it is clamped when resolved.
    pub fn validate(&self) -> Result<()> {
        if self.points == 0 {
            return Err(Error::InvalidConfig {
                name: "points",
                message: "must be at least 1".into(),
            });
        }
        if self.passes == 0 {
            return Err(Error::InvalidConfig {
                name: "passes",
                message: "must be at least 1".into(),
            });
        }
        if !(1..=MAX_COORDINATE).contains(&self.coordinate_limit) {
            return Err(Error::InvalidConfig {
                name: "coordinate_limit",
                message: format!(
                    "must be in 1..={}, got {}",
                    MAX_COORDINATE, self.coordinate_limit
                ),
            });
        }
        Ok(())
    }

    /// The configured seed, or one derived from the clock.
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}
