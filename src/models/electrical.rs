//! Electrical models: the induction motor driving a pump.
//!
//! A [`Motor`] pairs nameplate ratings with a [`Loadability`] table. Given a
//! shaft speed and torque it produces a [`MotorOperatingPoint`], from which
//! electrical power, supply voltage, and line currents are derived.
//!
//! The motor is coupled to the hydraulic side through
//! [`PumpOperatingPoint::driven_by`](crate::models::hydraulic::PumpOperatingPoint::driven_by),
//! which hands over the pump's speed and shaft torque.

mod error;
mod loadability;
mod motor;
mod operating_point;

pub use error::MotorError;
pub use loadability::Loadability;
pub use motor::{Motor, Nameplate};
pub use operating_point::MotorOperatingPoint;

#[cfg(test)]
pub(crate) mod test_support;
