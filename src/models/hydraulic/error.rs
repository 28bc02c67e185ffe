use thiserror::Error;
use uom::si::f64::{AngularVelocity, Ratio};

use crate::support::curve::CurveError;

/// Errors that can occur while building operating points or deriving their
/// mechanical quantities.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum OperatingPointError {
    /// Paired input sequences have different lengths.
    #[error("dimension mismatch: expected {expected} elements, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// A curve could not be evaluated for the requested point.
    #[error("curve evaluation failed")]
    Curve(#[from] CurveError),

    /// The pump efficiency is zero, negative, or not a number.
    #[error("efficiency must be positive: {efficiency:?}")]
    InvalidEfficiency { efficiency: Ratio },

    /// Shaft torque was requested at zero speed.
    #[error("shaft torque is undefined at speed {speed:?}")]
    InvalidSpeed { speed: AngularVelocity },
}
