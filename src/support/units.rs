//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities (head, flow, speed,
//! power). This module provides the few pieces that are needed for pump
//! modeling but aren't included in [`uom`].
//!
//! ## Speed ratios
//!
//! Affinity scaling works with the dimensionless ratio of two shaft speeds.
//! The [`SpeedRatio`] trait provides a [`ratio_to`](SpeedRatio::ratio_to)
//! method that returns that ratio as a plain `f64`:
//!
//! ```
//! use uom::si::{f64::AngularVelocity, angular_velocity::revolution_per_minute};
//! use twine_pumps::support::units::SpeedRatio;
//!
//! let n = AngularVelocity::new::<revolution_per_minute>(900.0);
//! let n0 = AngularVelocity::new::<revolution_per_minute>(1800.0);
//! assert!((n.ratio_to(n0) - 0.5).abs() < 1e-12);
//! ```

use uom::si::{
    acceleration::standard_gravity as g0, angular_velocity::radian_per_second,
    f64::{Acceleration, AngularVelocity},
};

/// Standard acceleration of gravity, `g₀ = 9.80665 m/s²`.
#[must_use]
pub fn standard_gravity() -> Acceleration {
    Acceleration::new::<g0>(1.0)
}

/// Extension trait for dimensionless speed ratios.
///
/// Dividing two [`AngularVelocity`] values in [`uom`] keeps the angle kind
/// attached to the quotient, which does not convert cleanly into a `Ratio`.
/// The affinity laws only need the number, so this trait returns it directly.
pub trait SpeedRatio {
    /// Returns `self / other` as a plain number.
    fn ratio_to(self, other: Self) -> f64;
}

impl SpeedRatio for AngularVelocity {
    fn ratio_to(self, other: Self) -> f64 {
        self.get::<radian_per_second>() / other.get::<radian_per_second>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{acceleration::meter_per_second_squared, angular_velocity::revolution_per_minute};

    #[test]
    fn gravity_is_standard() {
        assert_relative_eq!(
            standard_gravity().get::<meter_per_second_squared>(),
            9.806_65,
            epsilon = 1e-12
        );
    }

    #[test]
    fn speed_ratio_is_unit_independent() {
        let n = AngularVelocity::new::<revolution_per_minute>(3600.0);
        let n0 =
            AngularVelocity::new::<radian_per_second>(1800.0 * 2.0 * std::f64::consts::PI / 60.0);
        assert_relative_eq!(n.ratio_to(n0), 2.0, epsilon = 1e-12);
    }
}
