//! Motor nameplate and construction.

use uom::si::{
    angular_velocity::radian_per_second,
    f64::{AngularVelocity, ElectricCurrent, ElectricPotential, Power, Ratio, Torque},
    power::watt,
    torque::newton_meter,
};

use crate::support::constraint::{StrictlyPositive, UnitIntervalLowerOpen};

use super::{Loadability, MotorError, MotorOperatingPoint};

/// Nameplate ratings of a three-phase induction motor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nameplate {
    /// Line-to-line voltage at nominal speed.
    pub nominal_voltage: ElectricPotential,
    pub nominal_current: ElectricCurrent,
    pub nominal_speed: AngularVelocity,
    pub nominal_torque: Torque,
    pub pole_count: u32,
    pub nominal_power_factor: Ratio,
}

/// A three-phase induction motor.
///
/// Supply voltage scales linearly with speed from the nominal rating.
/// Efficiency and power factor follow the [`Loadability`] tables.
///
/// # Example
///
/// ```
/// use twine_pumps::models::electrical::{Loadability, Motor, Nameplate};
/// use twine_pumps::support::interpolate::Interp1D;
/// use uom::si::{
///     angular_velocity::revolution_per_minute,
///     electric_current::ampere,
///     electric_potential::volt,
///     f64::{AngularVelocity, ElectricCurrent, ElectricPotential, Ratio, Torque},
///     ratio::ratio,
///     torque::newton_meter,
/// };
///
/// let nameplate = Nameplate {
///     nominal_voltage: ElectricPotential::new::<volt>(440.0),
///     nominal_current: ElectricCurrent::new::<ampere>(19.2),
///     nominal_speed: AngularVelocity::new::<revolution_per_minute>(1800.0),
///     nominal_torque: Torque::new::<newton_meter>(53.0),
///     pole_count: 4,
///     nominal_power_factor: Ratio::new::<ratio>(0.81),
/// };
/// let efficiency = Interp1D::new(vec![0.0, 100.0], vec![0.9, 0.9]).unwrap();
/// let loadability =
///     Loadability::with_constant_power_factor(efficiency, nameplate.nominal_power_factor).unwrap();
/// let motor = Motor::new(nameplate, loadability).unwrap();
///
/// let point = motor.operating_point(
///     AngularVelocity::new::<revolution_per_minute>(900.0),
///     Torque::new::<newton_meter>(20.0),
/// );
/// assert!((point.voltage().get::<volt>() - 220.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Motor {
    nameplate: Nameplate,
    loadability: Loadability,
}

impl Motor {
    /// Creates a motor from its nameplate and loadability tables.
    ///
    /// # Errors
    ///
    /// Returns [`MotorError::Constraint`] if a nominal voltage, current,
    /// speed, torque, or pole count is not strictly positive, or if the
    /// nominal power factor is outside `(0, 1]`.
    pub fn new(nameplate: Nameplate, loadability: Loadability) -> Result<Self, MotorError> {
        StrictlyPositive::new(nameplate.nominal_voltage)?;
        StrictlyPositive::new(nameplate.nominal_current)?;
        StrictlyPositive::new(nameplate.nominal_speed)?;
        StrictlyPositive::new(nameplate.nominal_torque)?;
        StrictlyPositive::new(nameplate.pole_count)?;
        UnitIntervalLowerOpen::new(nameplate.nominal_power_factor)?;

        Ok(Self {
            nameplate,
            loadability,
        })
    }

    #[must_use]
    pub fn nameplate(&self) -> &Nameplate {
        &self.nameplate
    }

    #[must_use]
    pub fn loadability(&self) -> &Loadability {
        &self.loadability
    }

    /// Returns the rated shaft power, `ω_n·τ_n`.
    #[must_use]
    pub fn nominal_power(&self) -> Power {
        Power::new::<watt>(
            self.nameplate.nominal_speed.get::<radian_per_second>()
                * self.nameplate.nominal_torque.get::<newton_meter>(),
        )
    }

    /// Returns the operating point at `speed` and shaft `torque`.
    #[must_use]
    pub fn operating_point(
        &self,
        speed: AngularVelocity,
        torque: Torque,
    ) -> MotorOperatingPoint<'_> {
        MotorOperatingPoint::new(speed, torque, self)
    }

    /// Pairs speeds with torques into operating points.
    ///
    /// # Errors
    ///
    /// Returns [`MotorError::DimensionMismatch`] if the slices differ in
    /// length.
    pub fn operating_points(
        &self,
        speeds: &[AngularVelocity],
        torques: &[Torque],
    ) -> Result<Vec<MotorOperatingPoint<'_>>, MotorError> {
        if speeds.len() != torques.len() {
            return Err(MotorError::DimensionMismatch {
                expected: speeds.len(),
                found: torques.len(),
            });
        }
        Ok(speeds
            .iter()
            .zip(torques)
            .map(|(&speed, &torque)| self.operating_point(speed, torque))
            .collect())
    }
}
