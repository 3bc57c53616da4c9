use std::fmt;

use thiserror::Error;

/// Which spacing quantity failed the strict-positivity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
    /// First interval width `h = x1 - x0`.
    Step,
    /// Ratio of the second interval to the first, `alpha = (x2 - x1) / h`.
    Ratio,
}

impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Step => f.write_str("h = x1 - x0"),
            Self::Ratio => f.write_str("alpha = (x2 - x1) / h"),
        }
    }
}

/// Unified error type for the derivatives crate.
#[derive(Debug, Error)]
pub enum DerivativeError {
    /// The point sequence does not have the length the stencil needs.
    #[error("expected exactly {expected} data points, got {actual}")]
    InvalidArgumentCount { expected: usize, actual: usize },
    /// Points are out of order or coincident.
    #[error("non-positive step size: {0} must be > 0")]
    NonPositiveStepSize(Spacing),
    /// Second-derivative denominator fell under the configured floor.
    #[error("near-singular denominator: |{denominator:.3e}| < {floor:.3e}")]
    NearSingularDenominator { denominator: f64, floor: f64 },
    /// Wrapper around I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// TOML parsing error.
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl DerivativeError {
    /// The caller passed the wrong number of points.
    pub fn is_call_site(&self) -> bool {
        matches!(self, Self::InvalidArgumentCount { .. })
    }

    /// The points themselves are malformed or badly conditioned.
    pub fn is_data(&self) -> bool {
        matches!(
            self,
            Self::NonPositiveStepSize(_) | Self::NearSingularDenominator { .. }
        )
    }

    /// Short label used for telemetry.
    pub(crate) fn reason(&self) -> &'static str {
        match self {
            Self::InvalidArgumentCount { .. } => "invalid_argument_count",
            Self::NonPositiveStepSize(Spacing::Step) => "non_positive_step",
            Self::NonPositiveStepSize(Spacing::Ratio) => "non_positive_ratio",
            Self::NearSingularDenominator { .. } => "near_singular",
            Self::Io(_) | Self::Yaml(_) | Self::Toml(_) => "config",
        }
    }
}

pub type Result<T, E = DerivativeError> = std::result::Result<T, E>;
