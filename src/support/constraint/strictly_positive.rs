use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Used for ratings that appear as denominators: fluid density, nominal
/// speed, nominal torque, and nominal voltage.
///
/// # Examples
///
/// ```
/// use twine_pumps::support::constraint::StrictlyPositive;
/// use uom::si::{f64::MassDensity, mass_density::kilogram_per_cubic_meter};
///
/// let rho = StrictlyPositive::new(MassDensity::new::<kilogram_per_cubic_meter>(998.0)).unwrap();
/// assert_eq!(rho.into_inner().get::<kilogram_per_cubic_meter>(), 998.0);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        angular_velocity::revolution_per_minute, f64::AngularVelocity, f64::Torque,
        torque::newton_meter,
    };

    #[test]
    fn floats() {
        assert!(StrictlyPositive::new(1e-300).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-5.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn shaft_quantities() {
        let speed = AngularVelocity::new::<revolution_per_minute>(1800.0);
        assert!(StrictlyPositive::new(speed).is_ok());

        let speed = AngularVelocity::new::<revolution_per_minute>(0.0);
        assert!(StrictlyPositive::new(speed).is_err());

        let torque = Torque::new::<newton_meter>(-53.0);
        assert!(StrictlyPositive::new(torque).is_err());
    }
}
