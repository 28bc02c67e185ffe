//! Supporting utilities shared by the models in this crate.

pub mod constraint;
pub mod curve;
pub mod fluid;
pub mod interpolate;
pub mod units;
