use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    f64::{ElectricCurrent, ElectricPotential, Ratio, Torque},
    ratio::ratio,
    torque::newton_meter,
};

use crate::{models::hydraulic::test_support::rpm, support::interpolate::Interp1D};

use super::{Loadability, Motor, Nameplate};

pub(crate) fn nm(value: f64) -> Torque {
    Torque::new::<newton_meter>(value)
}

/// A 4-pole, 440 V motor rated at 1800 rpm and 53 N·m.
pub(crate) fn reference_nameplate() -> Nameplate {
    Nameplate {
        nominal_voltage: ElectricPotential::new::<volt>(440.0),
        nominal_current: ElectricCurrent::new::<ampere>(19.2),
        nominal_speed: rpm(1800.0),
        nominal_torque: nm(53.0),
        pole_count: 4,
        nominal_power_factor: Ratio::new::<ratio>(0.81),
    }
}

/// Efficiency tabulated from 6% to 60% load, with the nameplate power factor.
pub(crate) fn reference_loadability() -> Loadability {
    let efficiency = Interp1D::new(
        vec![6.0, 12.0, 18.0, 24.0, 30.0, 36.0, 42.0, 48.0, 54.0, 60.0],
        vec![0.71, 0.76, 0.81, 0.85, 0.87, 0.89, 0.91, 0.93, 0.95, 0.85],
    )
    .unwrap();
    Loadability::with_constant_power_factor(efficiency, reference_nameplate().nominal_power_factor)
        .unwrap()
}

pub(crate) fn reference_motor() -> Motor {
    Motor::new(reference_nameplate(), reference_loadability()).unwrap()
}
