//! Public pump-system models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! - [`hydraulic`]: Pump and system curves, their operating points, and the
//!   equilibrium between them.
//! - [`electrical`]: Motor nameplate data and the electrical operating point
//!   derived from a shaft load.

pub mod electrical;
pub mod hydraulic;
