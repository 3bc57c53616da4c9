use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Conditioning guard applied by [`crate::Estimator::second`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Smallest accepted `|alpha (1 + alpha) h^2|`; `0.0` disables the check.
    #[serde(default)]
    pub denominator_floor: f64,
}

impl GuardConfig {
    pub fn enabled(&self) -> bool {
        self.denominator_floor > 0.0
    }
}

/// Estimator configuration loaded from TOML/YAML.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    #[serde(default)]
    pub guard: GuardConfig,
    /// Emit `metrics` counters and gauges for each estimate.
    #[serde(default)]
    pub telemetry: bool,
}

impl EstimatorConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Load a configuration from a TOML file on disk.
    pub fn from_toml_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Load a configuration from a YAML file on disk.
    pub fn from_yaml_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let cfg: Self = serde_yaml::from_str(&raw)?;
        Ok(cfg)
    }

    /// Load by extension: `.yaml`/`.yml` as YAML, anything else as TOML.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_path(path),
            _ => Self::from_toml_path(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DerivativeError;

    #[test]
    fn empty_toml_is_default() {
        let cfg = EstimatorConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, EstimatorConfig::default());
        assert!(!cfg.guard.enabled());
    }

    #[test]
    fn reads_guard_floor() {
        let cfg = EstimatorConfig::from_toml_str(
            r#"
            telemetry = true

            [guard]
            denominator_floor = 1e-12
            "#,
        )
        .unwrap();
        assert!(cfg.telemetry);
        assert!(cfg.guard.enabled());
        assert_eq!(cfg.guard.denominator_floor, 1e-12);
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = EstimatorConfig::from_toml_str("guard = 3").unwrap_err();
        assert!(matches!(err, DerivativeError::Toml(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = EstimatorConfig::from_path("/nonexistent/derivatives.yaml").unwrap_err();
        assert!(matches!(err, DerivativeError::Io(_)));
    }
}
