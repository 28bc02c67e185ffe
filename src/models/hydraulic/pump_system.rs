//! Pump/system coupling and the equilibrium solver.
//!
//! The equilibrium at a given speed is the flow at which the pump delivers
//! exactly the head the system requires. It is found by bisection on
//! `pump_head(q, n) - system_head(q)` over `[0, max_flow]`.

mod config;
mod error;
mod problem;

pub use config::EquilibriumConfig;
pub use error::{EquilibriumError, PumpSystemError};

use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::{
    ConstZero,
    si::{
        f64::{AngularVelocity, Length, VolumeRate},
        length::meter,
        volume_rate::cubic_meter_per_second,
    },
};

use crate::support::fluid::Fluid;

use super::{ConstantEfficiency, Pump, PumpSystemOperatingPoint, SystemCurve};

use problem::{HeadBalanceModel, HeadBalanceProblem};

/// A pump installed in a piping system.
///
/// Both parts must carry the same [`Fluid`]. Hydraulic power is then the same
/// whether computed from the pump side or the system side.
#[derive(Debug, Clone, PartialEq)]
pub struct PumpSystem<E = ConstantEfficiency> {
    pump: Pump<E>,
    system_curve: SystemCurve,
}

impl<E> PumpSystem<E> {
    /// Couples a pump with a system curve.
    ///
    /// # Errors
    ///
    /// Returns [`PumpSystemError::FluidMismatch`] if the pump and system curve
    /// carry different fluids.
    pub fn new(pump: Pump<E>, system_curve: SystemCurve) -> Result<Self, PumpSystemError> {
        if pump.fluid() != system_curve.fluid() {
            return Err(PumpSystemError::FluidMismatch);
        }
        Ok(Self { pump, system_curve })
    }

    #[must_use]
    pub fn pump(&self) -> &Pump<E> {
        &self.pump
    }

    #[must_use]
    pub fn system_curve(&self) -> &SystemCurve {
        &self.system_curve
    }

    /// Returns the fluid shared by the pump and the system curve.
    #[must_use]
    pub fn fluid(&self) -> &Fluid {
        self.pump.fluid()
    }

    /// Solves for the equilibrium at `speed` with the default configuration.
    ///
    /// # Errors
    ///
    /// See [`equilibrium_at_speed_with`](Self::equilibrium_at_speed_with).
    pub fn equilibrium_at_speed(
        &self,
        speed: AngularVelocity,
    ) -> Result<PumpSystemOperatingPoint<'_, E>, EquilibriumError> {
        self.equilibrium_at_speed_with(speed, &EquilibriumConfig::default())
    }

    /// Solves for the equilibrium at `speed`.
    ///
    /// The returned point's head is the system head at the solved flow.
    ///
    /// # Errors
    ///
    /// Returns [`EquilibriumError::NoEquilibrium`] if the head residual does
    /// not change sign over `[0, config.max_flow]`, or
    /// [`EquilibriumError::DidNotConverge`] if the solver stops before the
    /// residual is within `config.head_tol`.
    pub fn equilibrium_at_speed_with(
        &self,
        speed: AngularVelocity,
        config: &EquilibriumConfig,
    ) -> Result<PumpSystemOperatingPoint<'_, E>, EquilibriumError> {
        let model = HeadBalanceModel::new(&self.pump, &self.system_curve, speed);

        let low = VolumeRate::ZERO;
        let high = config.max_flow;
        let low_residual = model.residual(low);
        let high_residual = model.residual(high);

        if low_residual == Length::ZERO {
            return Ok(self.point(low, speed));
        }
        if high_residual == Length::ZERO {
            return Ok(self.point(high, speed));
        }
        let product = low_residual.get::<meter>() * high_residual.get::<meter>();
        if product.is_nan() || product > 0.0 {
            return Err(EquilibriumError::NoEquilibrium { speed });
        }

        let solution = bisection::solve(
            &model,
            &HeadBalanceProblem,
            [
                low.get::<cubic_meter_per_second>(),
                high.get::<cubic_meter_per_second>(),
            ],
            &config.bisection(),
            |_event: &bisection::Event<'_, _, _>| None,
        )?;

        let residual = Length::new::<meter>(solution.residual);
        if solution.status != bisection::Status::Converged || residual.abs() > config.head_tol {
            return Err(EquilibriumError::DidNotConverge {
                residual,
                iters: solution.iters,
            });
        }

        Ok(PumpSystemOperatingPoint::new(
            solution.snapshot.output.system,
            VolumeRate::new::<cubic_meter_per_second>(solution.x),
            speed,
            &self.pump,
            &self.system_curve,
        ))
    }

    /// Solves for the equilibrium at each speed with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered.
    pub fn equilibria_at_speeds(
        &self,
        speeds: &[AngularVelocity],
    ) -> Result<Vec<PumpSystemOperatingPoint<'_, E>>, EquilibriumError> {
        speeds
            .iter()
            .map(|&speed| self.equilibrium_at_speed(speed))
            .collect()
    }

    fn point(&self, flow: VolumeRate, speed: AngularVelocity) -> PumpSystemOperatingPoint<'_, E> {
        PumpSystemOperatingPoint::new(
            self.system_curve.head_at(flow),
            flow,
            speed,
            &self.pump,
            &self.system_curve,
        )
    }
}

/// Maps a pump speed to the equilibrium operating point.
impl<'a, E> Model for &'a PumpSystem<E> {
    type Input = AngularVelocity;
    type Output = PumpSystemOperatingPoint<'a, E>;
    type Error = EquilibriumError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let system: &'a PumpSystem<E> = *self;
        system.equilibrium_at_speed(*input)
    }
}
