use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::{AngularVelocity, Length};

/// Errors that can occur while assembling a [`PumpSystem`](super::PumpSystem).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PumpSystemError {
    /// The pump and the system curve were built for different fluids.
    #[error("pump and system curve carry different fluids")]
    FluidMismatch,
}

/// Errors that can occur while solving for an equilibrium.
#[derive(Debug, Error)]
pub enum EquilibriumError {
    /// Pump head minus system head has the same sign at both ends of the
    /// flow bracket.
    #[error("no equilibrium in the flow bracket at speed {speed:?}")]
    NoEquilibrium { speed: AngularVelocity },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver stopped without meeting the head tolerance.
    #[error("equilibrium did not converge: residual={residual:?}")]
    DidNotConverge {
        /// Head residual (pump - system) at the best flow found.
        residual: Length,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
