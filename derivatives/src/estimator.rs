use num_traits::ToPrimitive;

use crate::{
    config::EstimatorConfig,
    errors::{DerivativeError, Result},
    sample::{Abscissa, Ordinate, Sample},
    stencil::{self, SecondStencil},
    telemetry::{self, Order},
};

/// Configurable front over the stencils: adds logging, telemetry and the
/// optional near-singularity guard.
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    cfg: EstimatorConfig,
}

impl Estimator {
    pub fn new(cfg: EstimatorConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.cfg
    }

    /// Two-point first derivative; see [`stencil::first_derivative`].
    pub fn first<P>(&self, points: &[P]) -> Result<P::F>
    where
        P: Sample,
        P::X: Abscissa,
        P::F: Ordinate<P::X>,
    {
        let outcome = stencil::first_derivative(points);
        self.observe(Order::First, outcome)
    }

    /// Three-point second derivative, rejecting denominators smaller in
    /// magnitude than `guard.denominator_floor` when the guard is enabled.
    pub fn second<P>(&self, points: &[P]) -> Result<P::F>
    where
        P: Sample,
        P::X: Abscissa,
        P::F: Ordinate<P::X>,
    {
        let outcome = SecondStencil::from_points(points)
            .and_then(|stencil| self.check_conditioning(stencil))
            .map(SecondStencil::estimate);
        self.observe(Order::Second, outcome)
    }

    fn check_conditioning<X, F>(&self, stencil: SecondStencil<X, F>) -> Result<SecondStencil<X, F>>
    where
        X: Abscissa,
        F: Ordinate<X>,
    {
        let Some(denominator) = ToPrimitive::to_f64(&stencil.denominator()) else {
            tracing::debug!(target: "derivatives", "denominator not representable as f64, guard skipped");
            return Ok(stencil);
        };
        if self.cfg.telemetry {
            telemetry::record_denominator(denominator);
        }
        let floor = self.cfg.guard.denominator_floor;
        if self.cfg.guard.enabled() && denominator.abs() < floor {
            return Err(DerivativeError::NearSingularDenominator { denominator, floor });
        }
        Ok(stencil)
    }

    fn observe<T>(&self, order: Order, outcome: Result<T>) -> Result<T> {
        match &outcome {
            Ok(_) => {
                tracing::debug!(target: "derivatives", ?order, "estimate computed");
                if self.cfg.telemetry {
                    telemetry::record_estimate(order);
                }
            }
            Err(err) => {
                tracing::warn!(target: "derivatives", ?order, "estimate rejected: {err}");
                if self.cfg.telemetry {
                    telemetry::record_rejection(order, err);
                }
            }
        }
        outcome
    }
}
