//! Hydraulic models: pumps, system curves, and their equilibrium.
//!
//! A [`Pump`] and a [`SystemCurve`] are each usable on their own for forward
//! (head from flow) and inverse (flow from head) queries. A [`PumpSystem`]
//! couples the two on a shared [`Fluid`](crate::support::fluid::Fluid) and
//! solves for the flow at which they deliver and demand the same head.
//!
//! Every query returns an immutable operating point that borrows the model
//! that produced it. Powers, efficiency, and torque are computed on demand
//! from the stored head, flow, and speed.

mod efficiency;
mod error;
mod operating_point;
mod pump;
mod pump_system;
mod system_curve;

pub use efficiency::{ConstantEfficiency, Efficiency, QuadraticEfficiency};
pub use error::OperatingPointError;
pub use operating_point::{PumpOperatingPoint, PumpSystemOperatingPoint, SystemOperatingPoint};
pub use pump::Pump;
pub use pump_system::{EquilibriumConfig, EquilibriumError, PumpSystem, PumpSystemError};
pub use system_curve::SystemCurve;

/// Checks that a paired sequence has the expected length.
fn check_len(expected: usize, found: usize) -> Result<(), OperatingPointError> {
    if expected == found {
        Ok(())
    } else {
        Err(OperatingPointError::DimensionMismatch { expected, found })
    }
}

#[cfg(test)]
pub(crate) mod test_support;
