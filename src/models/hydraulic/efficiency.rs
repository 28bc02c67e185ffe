//! Pump hydraulic efficiency models.

use uom::si::{
    f64::{AngularVelocity, Ratio, VolumeRate},
    ratio::ratio,
    volume_rate::cubic_meter_per_second,
};

use crate::support::constraint::{Constrained, ConstraintResult, UnitIntervalLowerOpen};

/// Hydraulic efficiency of a pump as a function of flow and speed.
///
/// Implementations may return any value; operating points check that the
/// efficiency is positive before dividing by it.
///
/// Closures of the form `Fn(VolumeRate, AngularVelocity) -> Ratio` implement
/// this trait, so ad hoc models need no wrapper type.
pub trait Efficiency {
    /// Returns the efficiency at the given flow and speed.
    fn efficiency(&self, flow: VolumeRate, speed: AngularVelocity) -> Ratio;
}

impl<F> Efficiency for F
where
    F: Fn(VolumeRate, AngularVelocity) -> Ratio,
{
    fn efficiency(&self, flow: VolumeRate, speed: AngularVelocity) -> Ratio {
        self(flow, speed)
    }
}

/// Efficiency that does not depend on flow or speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantEfficiency(Constrained<Ratio, UnitIntervalLowerOpen>);

impl ConstantEfficiency {
    /// Creates a constant efficiency.
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 < efficiency ≤ 1`.
    pub fn new(efficiency: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitIntervalLowerOpen::new(efficiency)?))
    }
}

impl Efficiency for ConstantEfficiency {
    fn efficiency(&self, _flow: VolumeRate, _speed: AngularVelocity) -> Ratio {
        self.0.into_inner()
    }
}

/// Efficiency as a quadratic in flow: `η = e0·q² + e1·q + e2`.
///
/// Flow is in m³/s. Speed is ignored, so the best efficiency point stays at
/// the same flow at every speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticEfficiency {
    pub e0: f64,
    pub e1: f64,
    pub e2: f64,
}

impl Efficiency for QuadraticEfficiency {
    fn efficiency(&self, flow: VolumeRate, _speed: AngularVelocity) -> Ratio {
        let q = flow.get::<cubic_meter_per_second>();
        Ratio::new::<ratio>((self.e0 * q + self.e1) * q + self.e2)
    }
}
