use metrics::{counter, gauge};

use crate::errors::DerivativeError;

#[derive(Debug, Clone, Copy)]
pub(crate) enum Order {
    First,
    Second,
}

impl Order {
    fn label(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
        }
    }
}

pub(crate) fn record_estimate(order: Order) {
    counter!("derivatives.estimates", 1, "order" => order.label());
}

pub(crate) fn record_denominator(denominator: f64) {
    gauge!("derivatives.second.denominator", denominator);
}

pub(crate) fn record_rejection(order: Order, err: &DerivativeError) {
    counter!(
        "derivatives.rejections",
        1,
        "order" => order.label(),
        "reason" => err.reason()
    );
}
