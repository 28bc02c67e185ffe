//! Electrical quantities derived from a motor's shaft load.
//!
//! With `ω` the shaft speed, `τ` the shaft torque, and `n` the speed in the
//! same unit as the nameplate speed `n_n`:
//!
//! - shaft power `P_s = ω·τ`
//! - load `P_s / (ω_n·τ_n)`
//! - electrical power `P_e = P_s / η(load)`
//! - supply voltage `V = V_n·n/n_n`
//! - true current `I = P_e / (√3·V)`
//! - apparent current `I / cos φ(load)`

use uom::si::{
    angular_velocity::radian_per_second,
    electric_current::ampere,
    electric_potential::volt,
    f64::{AngularVelocity, ElectricCurrent, ElectricPotential, Power, Ratio, Torque},
    power::watt,
    ratio::ratio,
    torque::newton_meter,
};

use crate::support::units::SpeedRatio;

use super::{Motor, MotorError};

/// A motor running at a given speed and shaft torque.
#[derive(Debug, Clone, Copy)]
pub struct MotorOperatingPoint<'a> {
    speed: AngularVelocity,
    torque: Torque,
    motor: &'a Motor,
}

impl<'a> MotorOperatingPoint<'a> {
    pub(super) fn new(speed: AngularVelocity, torque: Torque, motor: &'a Motor) -> Self {
        Self {
            speed,
            torque,
            motor,
        }
    }

    #[must_use]
    pub fn speed(&self) -> AngularVelocity {
        self.speed
    }

    #[must_use]
    pub fn torque(&self) -> Torque {
        self.torque
    }

    #[must_use]
    pub fn motor(&self) -> &'a Motor {
        self.motor
    }

    /// Returns the mechanical power at the shaft, `ω·τ`.
    #[must_use]
    pub fn shaft_power(&self) -> Power {
        Power::new::<watt>(
            self.speed.get::<radian_per_second>() * self.torque.get::<newton_meter>(),
        )
    }

    /// Returns the shaft power as a fraction of the rated power.
    #[must_use]
    pub fn load(&self) -> Ratio {
        let nominal = self.motor.nominal_power().get::<watt>();
        Ratio::new::<ratio>(self.shaft_power().get::<watt>() / nominal)
    }

    /// Returns the motor efficiency at the present load.
    ///
    /// # Errors
    ///
    /// Returns [`MotorError::Interpolation`] if the table lookup fails.
    pub fn efficiency(&self) -> Result<Ratio, MotorError> {
        Ok(self.motor.loadability().efficiency_at(self.load())?)
    }

    /// Returns the power factor at the present load.
    ///
    /// # Errors
    ///
    /// Returns [`MotorError::Interpolation`] if the table lookup fails.
    pub fn power_factor(&self) -> Result<Ratio, MotorError> {
        Ok(self.motor.loadability().power_factor_at(self.load())?)
    }

    /// Returns the electrical power drawn from the supply.
    ///
    /// # Errors
    ///
    /// Returns [`MotorError::InvalidEfficiency`] if the efficiency at the
    /// present load is not positive.
    pub fn electrical_power(&self) -> Result<Power, MotorError> {
        let efficiency = self.efficiency()?;
        let eta = efficiency.get::<ratio>();
        if eta.is_nan() || eta <= 0.0 {
            return Err(MotorError::InvalidEfficiency { efficiency });
        }
        Ok(self.shaft_power() / eta)
    }

    /// Returns the line-to-line supply voltage.
    #[must_use]
    pub fn voltage(&self) -> ElectricPotential {
        let nameplate = self.motor.nameplate();
        nameplate.nominal_voltage * self.speed.ratio_to(nameplate.nominal_speed)
    }

    /// Returns the in-phase line current.
    ///
    /// # Errors
    ///
    /// Returns [`MotorError::InvalidVoltage`] if the voltage is not positive,
    /// or any error from [`electrical_power`](Self::electrical_power).
    pub fn true_current(&self) -> Result<ElectricCurrent, MotorError> {
        let voltage = self.voltage();
        let v = voltage.get::<volt>();
        if v.is_nan() || v <= 0.0 {
            return Err(MotorError::InvalidVoltage { voltage });
        }
        let power = self.electrical_power()?.get::<watt>();
        Ok(ElectricCurrent::new::<ampere>(power / (3.0_f64.sqrt() * v)))
    }

    /// Returns the line current including its reactive component.
    ///
    /// # Errors
    ///
    /// Returns [`MotorError::InvalidPowerFactor`] if the power factor at the
    /// present load is not positive, or any error from
    /// [`true_current`](Self::true_current).
    pub fn apparent_current(&self) -> Result<ElectricCurrent, MotorError> {
        let true_current = self.true_current()?;
        let power_factor = self.power_factor()?;
        let pf = power_factor.get::<ratio>();
        if pf.is_nan() || pf <= 0.0 {
            return Err(MotorError::InvalidPowerFactor { power_factor });
        }
        Ok(true_current / pf)
    }

    /// Returns the apparent current as a fraction of the nameplate current.
    ///
    /// # Errors
    ///
    /// See [`apparent_current`](Self::apparent_current).
    pub fn current_ratio(&self) -> Result<Ratio, MotorError> {
        let current = self.apparent_current()?.get::<ampere>();
        let nominal = self.motor.nameplate().nominal_current.get::<ampere>();
        Ok(Ratio::new::<ratio>(current / nominal))
    }
}
