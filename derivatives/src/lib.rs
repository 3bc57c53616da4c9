//! Local derivative estimates from sampled data: a two-point backward
//! difference for df/dx and a three-point non-uniform backward difference
//! for d²f/dx².

pub mod config;
pub mod errors;
pub mod estimator;
pub mod sample;
pub mod stencil;
mod telemetry;

pub use config::{EstimatorConfig, GuardConfig};
pub use errors::{DerivativeError, Result, Spacing};
pub use estimator::Estimator;
pub use sample::{Abscissa, Ordinate, Sample, SamplePoint};
pub use stencil::{first_derivative, second_derivative, SecondStencil};
