//! Dashboard configuration.

use eh_core::{QuantileLevel, Real};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Where the result tables live and the thresholds used by the views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub results_dir: PathBuf,
    pub anomaly_file: String,
    pub prediction_file: String,
    /// Quantile of the engine's anomaly scores drawn as the anomaly threshold.
    pub threshold_quantile: Real,
    /// Latest failure probability above which the engine is critical.
    pub critical_fail_probability: Real,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from("results"),
            anomaly_file: "anomaly_scores.csv".to_string(),
            prediction_file: "results_df.csv".to_string(),
            threshold_quantile: 0.05,
            critical_fail_probability: 0.7,
        }
    }
}

/// Validated thresholds consumed by [`crate::render`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub threshold: QuantileLevel,
    pub critical_fail_probability: Real,
}

impl DashboardConfig {
    /// Load a YAML configuration file.
    ///
    /// A relative `results_dir` is resolved against the directory holding
    /// the configuration file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut config: DashboardConfig = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config YAML: {}", e)))?;

        if config.results_dir.is_relative()
            && let Some(parent) = path.parent()
        {
            config.results_dir = parent.join(&config.results_dir);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise fall back to the defaults.
    pub fn load_or_default(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        self.render_settings().map(|_| ())
    }

    pub fn render_settings(&self) -> AppResult<RenderSettings> {
        let threshold = QuantileLevel::new(self.threshold_quantile)?;

        let p = self.critical_fail_probability;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(AppError::Config(format!(
                "critical_fail_probability must be within [0, 1], got {}",
                p
            )));
        }

        Ok(RenderSettings {
            threshold,
            critical_fail_probability: p,
        })
    }

    pub fn anomaly_path(&self) -> PathBuf {
        self.results_dir.join(&self.anomaly_file)
    }

    pub fn prediction_path(&self) -> PathBuf {
        self.results_dir.join(&self.prediction_file)
    }
}
