//! Backward-difference stencils over the minimal number of samples.

use crate::{
    errors::{DerivativeError, Result, Spacing},
    sample::{Abscissa, Ordinate, Sample},
};

fn exact<P, const N: usize>(points: &[P]) -> Result<&[P; N]> {
    points
        .try_into()
        .map_err(|_| DerivativeError::InvalidArgumentCount {
            expected: N,
            actual: points.len(),
        })
}

fn positive<X: Abscissa>(value: X, spacing: Spacing) -> Result<X> {
    if value <= X::zero() {
        return Err(DerivativeError::NonPositiveStepSize(spacing));
    }
    Ok(value)
}

/// Two-point backward difference `(f1 - f0) / (x1 - x0)`.
///
/// Exact for linear `f`. Fails with [`DerivativeError::InvalidArgumentCount`]
/// unless exactly two points are given, and with
/// [`DerivativeError::NonPositiveStepSize`] unless `x1 > x0`.
pub fn first_derivative<P>(points: &[P]) -> Result<P::F>
where
    P: Sample,
    P::X: Abscissa,
    P::F: Ordinate<P::X>,
{
    let [p0, p1] = exact::<P, 2>(points)?;
    let h = positive(p1.x() - p0.x(), Spacing::Step)?;
    Ok((p1.f() - p0.f()) / h)
}

/// Three-point backward difference for the second derivative on a
/// non-uniform grid.
///
/// With `h = x1 - x0` and `alpha = (x2 - x1) / h` this evaluates
/// `2 (f2 - (1 + alpha) f1 + alpha f0) / (alpha (1 + alpha) h^2)`, which is
/// exact for quadratic `f` and collapses to `(f0 - 2 f1 + f2) / h^2` on a
/// uniform grid. A vanishing but positive denominator is not rejected here;
/// see [`crate::Estimator`] for a guarded variant.
pub fn second_derivative<P>(points: &[P]) -> Result<P::F>
where
    P: Sample,
    P::X: Abscissa,
    P::F: Ordinate<P::X>,
{
    SecondStencil::from_points(points).map(SecondStencil::estimate)
}

/// Numerator and denominator of the non-uniform second-derivative stencil.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecondStencil<X, F> {
    numerator: F,
    denominator: X,
}

impl<X, F> SecondStencil<X, F>
where
    X: Abscissa,
    F: Ordinate<X>,
{
    /// Validate three samples and assemble the weighted differences.
    pub fn from_points<P>(points: &[P]) -> Result<Self>
    where
        P: Sample<X = X, F = F>,
    {
        let [p0, p1, p2] = exact::<P, 3>(points)?;
        let h = positive(p1.x() - p0.x(), Spacing::Step)?;
        let alpha = positive((p2.x() - p1.x()) / h, Spacing::Ratio)?;
        let one = X::one();

        let numerator = p2.f() - p1.f() * (one + alpha) + p0.f() * alpha;
        let denominator = alpha * (one + alpha) * h * h;
        Ok(Self {
            numerator,
            denominator,
        })
    }

    pub fn numerator(&self) -> F {
        self.numerator
    }

    pub fn denominator(&self) -> X {
        self.denominator
    }

    pub fn estimate(self) -> F {
        let two = X::one() + X::one();
        self.numerator * two / self.denominator
    }
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    fn coeff() -> impl Strategy<Value = f64> {
        -10.0..10.0f64
    }

    fn spacing() -> impl Strategy<Value = f64> {
        0.1..5.0f64
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn first_derivative_exact_for_lines(
            m in coeff(),
            b in coeff(),
            x0 in coeff(),
            h in spacing(),
        ) {
            let f = |x: f64| m * x + b;
            let x1 = x0 + h;
            let d = first_derivative(&[[x0, f(x0)], [x1, f(x1)]]).unwrap();
            prop_assert!((d - m).abs() <= 1e-9 * m.abs().max(1.0), "got {}, want {}", d, m);
        }

        #[test]
        fn second_derivative_exact_for_quadratics_on_uniform_grid(
            a in coeff(),
            b in coeff(),
            c in coeff(),
            x0 in coeff(),
            h in spacing(),
        ) {
            let f = |x: f64| a * x * x + b * x + c;
            let xs = [x0, x0 + h, x0 + 2.0 * h];
            let points = xs.map(|x| [x, f(x)]);
            let d = second_derivative(&points).unwrap();
            prop_assert!((d - 2.0 * a).abs() <= 1e-6 * a.abs().max(1.0), "got {}, want {}", d, 2.0 * a);
        }

        #[test]
        fn second_derivative_exact_for_quadratics_on_non_uniform_grid(
            a in coeff(),
            b in coeff(),
            c in coeff(),
            x0 in coeff(),
            h0 in spacing(),
            h1 in spacing(),
        ) {
            let f = |x: f64| a * x * x + b * x + c;
            let xs = [x0, x0 + h0, x0 + h0 + h1];
            let points = xs.map(|x| [x, f(x)]);
            let d = second_derivative(&points).unwrap();
            prop_assert!((d - 2.0 * a).abs() <= 1e-6 * a.abs().max(1.0), "got {}, want {}", d, 2.0 * a);
        }

        #[test]
        fn reversed_pairs_always_rejected(x0 in coeff(), h in 0.0..5.0f64, f0 in coeff(), f1 in coeff()) {
            let err = first_derivative(&[[x0 + h, f0], [x0, f1]]).unwrap_err();
            prop_assert!(matches!(err, DerivativeError::NonPositiveStepSize(Spacing::Step)));
        }
    }
}
