//! # Twine Pumps
//!
//! Steady-state models of a centrifugal pump working against a piping system,
//! and of the motor that drives it, for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Pump, system curve, and motor models.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Typical flow
//!
//! 1. Build a [`Pump`](models::hydraulic::Pump) and a
//!    [`SystemCurve`](models::hydraulic::SystemCurve) on the same
//!    [`Fluid`](support::fluid::Fluid).
//! 2. Combine them into a [`PumpSystem`](models::hydraulic::PumpSystem) and
//!    solve for the equilibrium at a chosen speed.
//! 3. Read hydraulic power, shaft power, and torque off the operating point,
//!    and optionally hand it to a [`Motor`](models::electrical::Motor) for
//!    voltage and current.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
