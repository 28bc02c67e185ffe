use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Length, VolumeRate},
    length::meter,
    volume_rate::cubic_meter_per_second,
};

/// Solver configuration for the pump/system equilibrium.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquilibriumConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Upper end of the flow bracket searched from zero flow.
    pub max_flow: VolumeRate,

    /// Absolute tolerance on the flow search variable.
    pub flow_tol: VolumeRate,

    /// Absolute tolerance on the head residual (pump - system).
    pub head_tol: Length,
}

impl Default for EquilibriumConfig {
    fn default() -> Self {
        Self {
            max_iters: 1000,
            max_flow: VolumeRate::new::<cubic_meter_per_second>(1e6),
            flow_tol: VolumeRate::new::<cubic_meter_per_second>(1e-15),
            head_tol: Length::new::<meter>(1e-9),
        }
    }
}

impl EquilibriumConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.flow_tol.get::<cubic_meter_per_second>(),
            x_rel_tol: 0.0,
            residual_tol: self.head_tol.get::<meter>(),
        }
    }
}
