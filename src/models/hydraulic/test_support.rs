use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Length, MassDensity, Ratio, VolumeRate},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    ratio::ratio,
    volume_rate::cubic_meter_per_second,
};

use crate::support::{
    curve::{QuadraticCurve, SpeedScaledCurve},
    fluid::Fluid,
};

use super::{ConstantEfficiency, Pump, SystemCurve};

pub(crate) fn water() -> Fluid {
    Fluid::new(MassDensity::new::<kilogram_per_cubic_meter>(1000.0)).unwrap()
}

pub(crate) fn rpm(value: f64) -> AngularVelocity {
    AngularVelocity::new::<revolution_per_minute>(value)
}

pub(crate) fn flow(value: f64) -> VolumeRate {
    VolumeRate::new::<cubic_meter_per_second>(value)
}

pub(crate) fn head(value: f64) -> Length {
    Length::new::<meter>(value)
}

/// A pump rated at 1800 rpm with shutoff head 19 m and a constant 60%
/// efficiency.
pub(crate) fn reference_pump() -> Pump<ConstantEfficiency> {
    Pump::new(
        SpeedScaledCurve::new(QuadraticCurve::new(-6.6e3, 27.0, 19.0).unwrap(), rpm(1800.0))
            .unwrap(),
        ConstantEfficiency::new(Ratio::new::<ratio>(0.6)).unwrap(),
        water(),
    )
}

/// A purely frictional system with no static lift.
pub(crate) fn reference_system() -> SystemCurve {
    SystemCurve::new(QuadraticCurve::new(9649.0, 0.0, 0.0).unwrap(), water())
}
