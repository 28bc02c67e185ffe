//! Operating point value objects.
//!
//! An operating point stores the head, flow, and (for pumps) speed at which a
//! model was evaluated, plus a reference to that model. Everything else is
//! derived from those fields when asked for:
//!
//! - hydraulic power `P_h = ρ·g·Q·H`
//! - shaft power `P_s = P_h / η(Q, n)`
//! - shaft torque `τ = P_s / ω`
//!
//! A [`PumpSystemOperatingPoint`] carries references to both the pump and the
//! system curve and can be viewed as either one through
//! [`as_pump_point`](PumpSystemOperatingPoint::as_pump_point) and
//! [`as_system_point`](PumpSystemOperatingPoint::as_system_point).

use uom::si::{
    angular_velocity::radian_per_second,
    f64::{AngularVelocity, Length, Power, Ratio, Torque, VolumeRate},
    power::watt,
    ratio::ratio,
    torque::newton_meter,
};

use crate::{
    models::electrical::{Motor, MotorOperatingPoint},
    support::{fluid::Fluid, units::standard_gravity},
};

use super::{Efficiency, OperatingPointError, Pump, SystemCurve};

/// A point on a pump curve at a given speed.
#[derive(Debug)]
pub struct PumpOperatingPoint<'a, E> {
    head: Length,
    flow: VolumeRate,
    speed: AngularVelocity,
    pump: &'a Pump<E>,
}

impl<E> Clone for PumpOperatingPoint<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for PumpOperatingPoint<'_, E> {}

impl<'a, E> PumpOperatingPoint<'a, E> {
    pub(super) fn new(
        head: Length,
        flow: VolumeRate,
        speed: AngularVelocity,
        pump: &'a Pump<E>,
    ) -> Self {
        Self {
            head,
            flow,
            speed,
            pump,
        }
    }

    #[must_use]
    pub fn head(&self) -> Length {
        self.head
    }

    #[must_use]
    pub fn flow(&self) -> VolumeRate {
        self.flow
    }

    #[must_use]
    pub fn speed(&self) -> AngularVelocity {
        self.speed
    }

    /// Returns the pump that produced this point.
    #[must_use]
    pub fn pump(&self) -> &'a Pump<E> {
        self.pump
    }

    /// Returns the power delivered to the fluid, `ρ·g·Q·H`.
    #[must_use]
    pub fn hydraulic_power(&self) -> Power {
        hydraulic_power(self.pump.fluid(), self.head, self.flow)
    }
}

impl<E: Efficiency> PumpOperatingPoint<'_, E> {
    /// Returns the pump efficiency at this flow and speed.
    #[must_use]
    pub fn efficiency(&self) -> Ratio {
        self.pump.efficiency(self.flow, self.speed)
    }

    /// Returns the power required at the pump shaft.
    ///
    /// # Errors
    ///
    /// Returns [`OperatingPointError::InvalidEfficiency`] if the efficiency is
    /// not positive.
    pub fn shaft_power(&self) -> Result<Power, OperatingPointError> {
        shaft_power(self.hydraulic_power(), self.efficiency())
    }

    /// Returns the torque required at the pump shaft.
    ///
    /// # Errors
    ///
    /// Returns [`OperatingPointError::InvalidEfficiency`] if the efficiency is
    /// not positive, or [`OperatingPointError::InvalidSpeed`] at zero speed.
    pub fn shaft_torque(&self) -> Result<Torque, OperatingPointError> {
        shaft_torque(self.shaft_power()?, self.speed)
    }

    /// Returns the operating point of `motor` when it drives this pump.
    ///
    /// # Errors
    ///
    /// Returns an error if the shaft torque cannot be computed.
    pub fn driven_by<'m>(
        &self,
        motor: &'m Motor,
    ) -> Result<MotorOperatingPoint<'m>, OperatingPointError> {
        Ok(motor.operating_point(self.speed, self.shaft_torque()?))
    }
}

/// A point on a system curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemOperatingPoint<'a> {
    head: Length,
    flow: VolumeRate,
    system_curve: &'a SystemCurve,
}

impl<'a> SystemOperatingPoint<'a> {
    pub(super) fn new(head: Length, flow: VolumeRate, system_curve: &'a SystemCurve) -> Self {
        Self {
            head,
            flow,
            system_curve,
        }
    }

    #[must_use]
    pub fn head(&self) -> Length {
        self.head
    }

    #[must_use]
    pub fn flow(&self) -> VolumeRate {
        self.flow
    }

    /// Returns the system curve that produced this point.
    #[must_use]
    pub fn system_curve(&self) -> &'a SystemCurve {
        self.system_curve
    }

    /// Returns the power dissipated by the system, `ρ·g·Q·H`.
    #[must_use]
    pub fn hydraulic_power(&self) -> Power {
        hydraulic_power(self.system_curve.fluid(), self.head, self.flow)
    }
}

/// The equilibrium of a pump and a system curve at a given speed.
///
/// The head is the system curve's head at the solved flow. The pump's head at
/// the same flow and speed agrees with it to within the solver tolerance.
#[derive(Debug)]
pub struct PumpSystemOperatingPoint<'a, E> {
    head: Length,
    flow: VolumeRate,
    speed: AngularVelocity,
    pump: &'a Pump<E>,
    system_curve: &'a SystemCurve,
}

impl<E> Clone for PumpSystemOperatingPoint<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for PumpSystemOperatingPoint<'_, E> {}

impl<'a, E> PumpSystemOperatingPoint<'a, E> {
    pub(super) fn new(
        head: Length,
        flow: VolumeRate,
        speed: AngularVelocity,
        pump: &'a Pump<E>,
        system_curve: &'a SystemCurve,
    ) -> Self {
        Self {
            head,
            flow,
            speed,
            pump,
            system_curve,
        }
    }

    #[must_use]
    pub fn head(&self) -> Length {
        self.head
    }

    #[must_use]
    pub fn flow(&self) -> VolumeRate {
        self.flow
    }

    #[must_use]
    pub fn speed(&self) -> AngularVelocity {
        self.speed
    }

    #[must_use]
    pub fn pump(&self) -> &'a Pump<E> {
        self.pump
    }

    #[must_use]
    pub fn system_curve(&self) -> &'a SystemCurve {
        self.system_curve
    }

    /// Returns the pump's own head at this flow and speed.
    #[must_use]
    pub fn pump_head(&self) -> Length {
        self.pump.head_at(self.flow, self.speed)
    }

    /// Views this point as a point on the pump curve.
    #[must_use]
    pub fn as_pump_point(&self) -> PumpOperatingPoint<'a, E> {
        PumpOperatingPoint::new(self.head, self.flow, self.speed, self.pump)
    }

    /// Views this point as a point on the system curve.
    #[must_use]
    pub fn as_system_point(&self) -> SystemOperatingPoint<'a> {
        SystemOperatingPoint::new(self.head, self.flow, self.system_curve)
    }

    #[must_use]
    pub fn hydraulic_power(&self) -> Power {
        self.as_pump_point().hydraulic_power()
    }
}

impl<E: Efficiency> PumpSystemOperatingPoint<'_, E> {
    #[must_use]
    pub fn efficiency(&self) -> Ratio {
        self.as_pump_point().efficiency()
    }

    /// Returns the power required at the pump shaft.
    ///
    /// # Errors
    ///
    /// See [`PumpOperatingPoint::shaft_power`].
    pub fn shaft_power(&self) -> Result<Power, OperatingPointError> {
        self.as_pump_point().shaft_power()
    }

    /// Returns the torque required at the pump shaft.
    ///
    /// # Errors
    ///
    /// See [`PumpOperatingPoint::shaft_torque`].
    pub fn shaft_torque(&self) -> Result<Torque, OperatingPointError> {
        self.as_pump_point().shaft_torque()
    }

    /// Returns the operating point of `motor` when it drives the pump.
    ///
    /// # Errors
    ///
    /// See [`PumpOperatingPoint::driven_by`].
    pub fn driven_by<'m>(
        &self,
        motor: &'m Motor,
    ) -> Result<MotorOperatingPoint<'m>, OperatingPointError> {
        self.as_pump_point().driven_by(motor)
    }
}

fn hydraulic_power(fluid: &Fluid, head: Length, flow: VolumeRate) -> Power {
    fluid.density() * standard_gravity() * flow * head
}

fn shaft_power(hydraulic_power: Power, efficiency: Ratio) -> Result<Power, OperatingPointError> {
    let eta = efficiency.get::<ratio>();
    if eta.is_nan() || eta <= 0.0 {
        return Err(OperatingPointError::InvalidEfficiency { efficiency });
    }
    Ok(hydraulic_power / eta)
}

fn shaft_torque(shaft_power: Power, speed: AngularVelocity) -> Result<Torque, OperatingPointError> {
    let omega = speed.get::<radian_per_second>();
    if omega == 0.0 {
        return Err(OperatingPointError::InvalidSpeed { speed });
    }
    Ok(Torque::new::<newton_meter>(shaft_power.get::<watt>() / omega))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{angular_velocity::revolution_per_minute, power::kilowatt};

    use crate::models::{
        electrical::test_support::reference_motor,
        hydraulic::test_support::{flow, head, reference_pump, reference_system, rpm, water},
    };

    #[test]
    fn hydraulic_power_scenario() {
        let power = hydraulic_power(&water(), head(20.0), flow(0.05));
        assert_relative_eq!(power.get::<watt>(), 9806.65, max_relative = 1e-12);
    }

    #[test]
    fn shaft_quantities_follow_efficiency_and_speed() {
        let pump = reference_pump();
        let point = PumpOperatingPoint::new(head(20.0), flow(0.05), rpm(1800.0), &pump);

        let shaft = point.shaft_power().unwrap();
        assert_relative_eq!(shaft.get::<watt>(), 9806.65 / 0.6, max_relative = 1e-12);

        let omega = 1800.0 * 2.0 * std::f64::consts::PI / 60.0;
        let torque = point.shaft_torque().unwrap();
        assert_relative_eq!(
            torque.get::<newton_meter>(),
            9806.65 / 0.6 / omega,
            max_relative = 1e-12
        );
    }

    #[test]
    fn zero_efficiency_is_rejected() {
        let pump = Pump::new(
            *reference_pump().curve(),
            |_: VolumeRate, _: AngularVelocity| Ratio::new::<ratio>(0.0),
            water(),
        );
        let point = PumpOperatingPoint::new(head(20.0), flow(0.05), rpm(1800.0), &pump);
        assert!(matches!(
            point.shaft_power(),
            Err(OperatingPointError::InvalidEfficiency { .. })
        ));
        assert!(matches!(
            point.shaft_torque(),
            Err(OperatingPointError::InvalidEfficiency { .. })
        ));
    }

    #[test]
    fn torque_is_undefined_at_zero_speed() {
        let pump = reference_pump();
        let point = PumpOperatingPoint::new(head(0.0), flow(0.0), rpm(0.0), &pump);
        assert_relative_eq!(point.shaft_power().unwrap().get::<watt>(), 0.0);
        assert_eq!(
            point.shaft_torque().unwrap_err(),
            OperatingPointError::InvalidSpeed { speed: rpm(0.0) }
        );
    }

    #[test]
    fn system_point_power() {
        let system = reference_system();
        let point = SystemOperatingPoint::new(head(20.0), flow(0.05), &system);
        assert_relative_eq!(
            point.hydraulic_power().get::<kilowatt>(),
            9.806_65,
            max_relative = 1e-12
        );
        assert_eq!(point.system_curve(), &system);
    }

    #[test]
    fn combined_point_shares_its_triple() {
        let pump = reference_pump();
        let system = reference_system();
        let speed = AngularVelocity::new::<revolution_per_minute>(1800.0);
        let point = PumpSystemOperatingPoint::new(head(12.0), flow(0.035), speed, &pump, &system);

        let as_pump = point.as_pump_point();
        let as_system = point.as_system_point();
        assert_eq!(as_pump.head(), as_system.head());
        assert_eq!(as_pump.flow(), as_system.flow());
        assert_eq!(as_pump.speed(), speed);
        assert_eq!(point.hydraulic_power(), as_system.hydraulic_power());
        assert_eq!(
            point.shaft_power().unwrap(),
            as_pump.shaft_power().unwrap()
        );
    }

    #[test]
    fn pump_point_drives_a_motor() {
        let pump = reference_pump();
        let motor = reference_motor();
        let point = PumpOperatingPoint::new(head(10.0), flow(0.02), rpm(1800.0), &pump);

        let motor_point = point.driven_by(&motor).unwrap();
        assert_eq!(motor_point.speed(), rpm(1800.0));
        assert_relative_eq!(
            motor_point.shaft_power().get::<watt>(),
            point.shaft_power().unwrap().get::<watt>(),
            max_relative = 1e-12
        );
        assert!(motor_point.apparent_current().is_ok());
    }
}
