use thiserror::Error;
use uom::si::f64::{ElectricPotential, Ratio};

use crate::support::{constraint::ConstraintError, interpolate::InterpError};

/// Errors that can occur while building a motor or deriving its electrical
/// quantities.
#[derive(Debug, Error)]
pub enum MotorError {
    /// Speeds and torques have different lengths.
    #[error("dimension mismatch: expected {expected} elements, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// The supply voltage is zero or negative, which happens at zero speed.
    #[error("supply voltage must be positive: {voltage:?}")]
    InvalidVoltage { voltage: ElectricPotential },

    /// The motor efficiency at the present load is not positive.
    #[error("motor efficiency must be positive: {efficiency:?}")]
    InvalidEfficiency { efficiency: Ratio },

    /// The power factor at the present load is not positive.
    #[error("power factor must be positive: {power_factor:?}")]
    InvalidPowerFactor { power_factor: Ratio },

    /// A nameplate rating is out of range.
    #[error("invalid nameplate rating")]
    Constraint(#[from] ConstraintError),

    /// A loadability table lookup failed.
    #[error("loadability lookup failed")]
    Interpolation(#[from] InterpError),
}
