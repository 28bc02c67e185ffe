//! Problem formulation for the pump/system head balance.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{AngularVelocity, Length, VolumeRate},
    length::meter,
    volume_rate::cubic_meter_per_second,
};

use crate::models::hydraulic::{Pump, SystemCurve};

/// Pump and system heads at a candidate flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Heads {
    pub(super) pump: Length,
    pub(super) system: Length,
}

/// Model adapter that evaluates both curves at a candidate flow.
///
/// The pump speed is fixed for the lifetime of the model.
pub(super) struct HeadBalanceModel<'a, E> {
    pump: &'a Pump<E>,
    system_curve: &'a SystemCurve,
    speed: AngularVelocity,
}

impl<'a, E> HeadBalanceModel<'a, E> {
    pub(super) fn new(
        pump: &'a Pump<E>,
        system_curve: &'a SystemCurve,
        speed: AngularVelocity,
    ) -> Self {
        Self {
            pump,
            system_curve,
            speed,
        }
    }

    /// Returns pump head minus system head at `flow`.
    pub(super) fn residual(&self, flow: VolumeRate) -> Length {
        let heads = self.heads(flow);
        heads.pump - heads.system
    }

    fn heads(&self, flow: VolumeRate) -> Heads {
        Heads {
            pump: self.pump.head_at(flow, self.speed),
            system: self.system_curve.head_at(flow),
        }
    }
}

impl<E> Model for HeadBalanceModel<'_, E> {
    type Input = VolumeRate;
    type Output = Heads;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.heads(*input))
    }
}

/// Equation problem for the head balance.
///
/// Computes the residual as `pump_head - system_head` in metres.
pub(super) struct HeadBalanceProblem;

impl EquationProblem<1> for HeadBalanceProblem {
    type Input = VolumeRate;
    type Output = Heads;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(VolumeRate::new::<cubic_meter_per_second>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([(output.pump - output.system).get::<meter>()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::hydraulic::test_support::{flow, reference_pump, reference_system, rpm};

    #[test]
    fn residual_is_pump_minus_system() {
        let pump = reference_pump();
        let system = reference_system();
        let model = HeadBalanceModel::new(&pump, &system, rpm(1800.0));

        assert_relative_eq!(model.residual(flow(0.0)).get::<meter>(), 19.0);

        let heads = model.call(&flow(0.02)).unwrap();
        let residual = HeadBalanceProblem
            .residuals(&flow(0.02), &heads)
            .unwrap();
        assert_relative_eq!(residual[0], 16.9 - 3.8596, epsilon = 1e-12);
    }
}
