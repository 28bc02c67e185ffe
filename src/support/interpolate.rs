//! One-dimensional table lookup.
//!
//! Motor loadability data is published as a short table of load versus
//! efficiency (or power factor). [`Interp1D`] evaluates such a table with
//! piecewise-linear interpolation and extends the end segments linearly
//! beyond the tabulated range.

use ndarray::Array1;
use ninterp::{
    error::{InterpolateError, ValidateError},
    interpolator::Extrapolate,
    prelude::{Interp1DOwned, Interpolator},
    strategy::Linear,
};
use thiserror::Error;

/// Errors from building or evaluating an interpolation table.
#[derive(Error, Debug)]
pub enum InterpError {
    #[error(transparent)]
    Validation(#[from] ValidateError),
    #[error(transparent)]
    Interpolation(#[from] InterpolateError),
}

/// Piecewise-linear table with linear extrapolation at both ends.
///
/// # Example
///
/// ```
/// use twine_pumps::support::interpolate::Interp1D;
///
/// let table = Interp1D::new(vec![0.0, 1.0, 2.0], vec![0.0, 0.4, 0.8]).unwrap();
/// assert!((table.at(1.4).unwrap() - 0.56).abs() < 1e-12);
/// assert!((table.at(3.0).unwrap() - 1.2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Interp1D(Interp1DOwned<f64, Linear>);

impl Interp1D {
    /// Creates a table from grid points `x` (strictly increasing) and values `f_x`.
    ///
    /// # Errors
    ///
    /// Returns [`InterpError::Validation`] if the grid is not sorted, has
    /// fewer than two points, or does not match the length of `f_x`.
    pub fn new(x: Vec<f64>, f_x: Vec<f64>) -> Result<Self, InterpError> {
        let interp = Interp1DOwned::new(
            Array1::from(x),
            Array1::from(f_x),
            Linear,
            Extrapolate::Enable,
        )?;
        Ok(Self(interp))
    }

    /// Evaluates the table at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`InterpError::Interpolation`] if evaluation fails.
    pub fn at(&self, x: f64) -> Result<f64, InterpError> {
        Ok(self.0.interpolate(&[x])?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn interpolates_inside_grid() {
        let table = Interp1D::new(vec![6.0, 12.0, 18.0], vec![0.71, 0.76, 0.81]).unwrap();
        assert_relative_eq!(table.at(6.0).unwrap(), 0.71, epsilon = 1e-12);
        assert_relative_eq!(table.at(9.0).unwrap(), 0.735, epsilon = 1e-12);
        assert_relative_eq!(table.at(18.0).unwrap(), 0.81, epsilon = 1e-12);
    }

    #[test]
    fn extrapolates_both_ends() {
        let table = Interp1D::new(vec![6.0, 12.0, 18.0], vec![0.71, 0.76, 0.81]).unwrap();
        assert_relative_eq!(table.at(0.0).unwrap(), 0.66, epsilon = 1e-12);
        assert_relative_eq!(table.at(24.0).unwrap(), 0.86, epsilon = 1e-12);
    }

    #[test]
    fn rejects_malformed_tables() {
        assert!(Interp1D::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0]).is_err());
        assert!(Interp1D::new(vec![2.0, 1.0, 0.0], vec![0.0, 1.0, 2.0]).is_err());
    }
}
