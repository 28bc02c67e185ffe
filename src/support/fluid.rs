//! Fluid properties needed by hydraulic power calculations.

use uom::si::f64::MassDensity;

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

/// The pumped fluid, reduced to the one property the models need.
///
/// A `Fluid` is passed explicitly to every pump and system curve.
/// [`PumpSystem`](crate::models::hydraulic::PumpSystem) requires both halves
/// to carry the same fluid.
///
/// # Example
///
/// ```
/// use twine_pumps::support::fluid::Fluid;
/// use uom::si::{f64::MassDensity, mass_density::kilogram_per_cubic_meter};
///
/// let water = Fluid::new(MassDensity::new::<kilogram_per_cubic_meter>(1000.0)).unwrap();
/// assert_eq!(water.density().get::<kilogram_per_cubic_meter>(), 1000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fluid {
    density: Constrained<MassDensity, StrictlyPositive>,
}

impl Fluid {
    /// Creates a fluid with the given density.
    ///
    /// # Errors
    ///
    /// Returns an error if the density is not strictly positive.
    pub fn new(density: MassDensity) -> ConstraintResult<Self> {
        Ok(Self {
            density: StrictlyPositive::new(density)?,
        })
    }

    /// Returns the fluid density.
    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.density.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::mass_density::kilogram_per_cubic_meter;

    #[test]
    fn rejects_non_physical_density() {
        assert!(Fluid::new(MassDensity::new::<kilogram_per_cubic_meter>(0.0)).is_err());
        assert!(Fluid::new(MassDensity::new::<kilogram_per_cubic_meter>(-1.0)).is_err());
    }

    #[test]
    fn equal_density_means_same_fluid() {
        let a = Fluid::new(MassDensity::new::<kilogram_per_cubic_meter>(997.0)).unwrap();
        let b = Fluid::new(MassDensity::new::<kilogram_per_cubic_meter>(997.0)).unwrap();
        let c = Fluid::new(MassDensity::new::<kilogram_per_cubic_meter>(1025.0)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
