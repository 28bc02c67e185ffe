//! Load-dependent motor efficiency and power factor.

use uom::si::{
    f64::Ratio,
    ratio::{percent, ratio},
};

use crate::support::interpolate::{Interp1D, InterpError};

/// Motor efficiency and power factor as functions of load.
///
/// Both tables are keyed by load in percent of the nominal shaft power and
/// return a plain fraction. Lookups outside the tabulated range extrapolate
/// the end segments linearly.
#[derive(Debug, Clone)]
pub struct Loadability {
    efficiency: Interp1D,
    power_factor: Interp1D,
}

impl Loadability {
    /// Creates a loadability from separate efficiency and power factor tables.
    #[must_use]
    pub fn new(efficiency: Interp1D, power_factor: Interp1D) -> Self {
        Self {
            efficiency,
            power_factor,
        }
    }

    /// Creates a loadability whose power factor does not vary with load.
    ///
    /// # Errors
    ///
    /// Returns an error if the constant table cannot be built, which only
    /// happens for a non-finite `power_factor`.
    pub fn with_constant_power_factor(
        efficiency: Interp1D,
        power_factor: Ratio,
    ) -> Result<Self, InterpError> {
        let pf = power_factor.get::<ratio>();
        let power_factor = Interp1D::new(vec![0.0, 100.0], vec![pf, pf])?;
        Ok(Self::new(efficiency, power_factor))
    }

    /// Returns the efficiency at `load`.
    ///
    /// # Errors
    ///
    /// Returns an error if the table lookup fails.
    pub fn efficiency_at(&self, load: Ratio) -> Result<Ratio, InterpError> {
        lookup(&self.efficiency, load)
    }

    /// Returns the power factor at `load`.
    ///
    /// # Errors
    ///
    /// Returns an error if the table lookup fails.
    pub fn power_factor_at(&self, load: Ratio) -> Result<Ratio, InterpError> {
        lookup(&self.power_factor, load)
    }
}

fn lookup(table: &Interp1D, load: Ratio) -> Result<Ratio, InterpError> {
    Ok(Ratio::new::<ratio>(table.at(load.get::<percent>())?))
}
