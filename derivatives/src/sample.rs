use std::ops::{Add, Div, Mul, Sub};

use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Independent-variable coordinate.
///
/// Spacing ratios need true division, so integer coordinates are rejected at
/// compile time:
///
/// ```compile_fail
/// let _ = derivatives::first_derivative(&[[0i64, 0], [2, 3]]);
/// ```
///
/// ```
/// let d = derivatives::first_derivative(&[[0.0f64, 0.0], [2.0, 3.0]]).unwrap();
/// assert_eq!(d, 1.5);
/// ```
pub trait Abscissa: Float {}

impl<T: Float> Abscissa for T {}

/// Function value that can be differenced and scaled by the abscissa type.
pub trait Ordinate<X>:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<X, Output = Self> + Div<X, Output = Self>
{
}

impl<X, F> Ordinate<X> for F where
    F: Copy + Add<Output = F> + Sub<Output = F> + Mul<X, Output = F> + Div<X, Output = F>
{
}

/// A single `(x, f(x))` observation.
pub trait Sample {
    type X;
    type F;

    fn x(&self) -> Self::X;
    fn f(&self) -> Self::F;
}

/// Named sample point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint<X, F> {
    pub x: X,
    pub f: F,
}

impl<X, F> SamplePoint<X, F> {
    pub const fn new(x: X, f: F) -> Self {
        Self { x, f }
    }
}

impl<X: Copy, F: Copy> Sample for SamplePoint<X, F> {
    type X = X;
    type F = F;

    fn x(&self) -> X {
        self.x
    }

    fn f(&self) -> F {
        self.f
    }
}

impl<X: Copy, F: Copy> Sample for (X, F) {
    type X = X;
    type F = F;

    fn x(&self) -> X {
        self.0
    }

    fn f(&self) -> F {
        self.1
    }
}

impl<T: Copy> Sample for [T; 2] {
    type X = T;
    type F = T;

    fn x(&self) -> T {
        self[0]
    }

    fn f(&self) -> T {
        self[1]
    }
}

impl<X, F> From<(X, F)> for SamplePoint<X, F> {
    fn from((x, f): (X, F)) -> Self {
        Self { x, f }
    }
}

impl<T> From<[T; 2]> for SamplePoint<T, T> {
    fn from([x, f]: [T; 2]) -> Self {
        Self { x, f }
    }
}
