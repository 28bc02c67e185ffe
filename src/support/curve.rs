//! Quadratic head-flow characteristics.
//!
//! A [`QuadraticCurve`] models head as a degree-2 polynomial of volumetric
//! flow, `h = c0·q² + c1·q + c2`, with head in meters and flow in m³/s.
//! The same type describes a pump's curve at its nominal speed and a piping
//! system's head-loss curve.
//!
//! A [`SpeedScaledCurve`] wraps a nominal pump curve and applies the
//! centrifugal affinity laws to evaluate it at other speeds.

mod speed_scaled;

pub use speed_scaled::SpeedScaledCurve;

use thiserror::Error;
use uom::si::{
    f64::{AngularVelocity, Length, VolumeRate},
    length::meter,
    volume_rate::cubic_meter_per_second,
};

/// Errors that can occur while building or inverting a curve.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CurveError {
    /// A polynomial coefficient was NaN or infinite.
    #[error("curve coefficients must be finite: {coefficients:?}")]
    NonFiniteCoefficient { coefficients: [f64; 3] },

    /// No real flow produces the requested head.
    #[error("no real flow produces head {head:?}")]
    NoSolution { head: Length },

    /// A speed-scaled inversion was requested at a non-positive speed.
    #[error("speed must be positive for inverse evaluation: {speed:?}")]
    NonPositiveSpeed { speed: AngularVelocity },
}

/// Head as a quadratic function of flow: `h = c0·q² + c1·q + c2`.
///
/// Coefficients are in SI: `c0` in s²/m⁵, `c1` in s/m², and `c2` in m.
/// The curve is defined for any flow, although only `q ≥ 0` is physically
/// meaningful for a pump working into a system.
///
/// # Example
///
/// ```
/// use twine_pumps::support::curve::QuadraticCurve;
/// use uom::si::{f64::VolumeRate, length::meter, volume_rate::cubic_meter_per_second};
///
/// let pump = QuadraticCurve::new(-6.6e3, 27.0, 19.0).unwrap();
/// let head = pump.head_at(VolumeRate::new::<cubic_meter_per_second>(0.02));
/// assert!((head.get::<meter>() - 16.9).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticCurve {
    c0: f64,
    c1: f64,
    c2: f64,
}

impl QuadraticCurve {
    /// Creates a curve from its coefficients, highest order first.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::NonFiniteCoefficient`] if any coefficient is NaN
    /// or infinite.
    pub fn new(c0: f64, c1: f64, c2: f64) -> Result<Self, CurveError> {
        if [c0, c1, c2].iter().all(|c| c.is_finite()) {
            Ok(Self { c0, c1, c2 })
        } else {
            Err(CurveError::NonFiniteCoefficient {
                coefficients: [c0, c1, c2],
            })
        }
    }

    /// Returns the coefficients `[c0, c1, c2]`.
    #[must_use]
    pub fn coefficients(&self) -> [f64; 3] {
        [self.c0, self.c1, self.c2]
    }

    /// Returns the head at zero flow.
    #[must_use]
    pub fn shutoff_head(&self) -> Length {
        Length::new::<meter>(self.c2)
    }

    /// Evaluates the head at the given flow.
    #[must_use]
    pub fn head_at(&self, flow: VolumeRate) -> Length {
        let q = flow.get::<cubic_meter_per_second>();
        Length::new::<meter>((self.c0 * q + self.c1) * q + self.c2)
    }

    /// Finds the flow that produces the given head.
    ///
    /// Solves `c0·q² + c1·q + (c2 - h) = 0` and returns the **largest** real
    /// root. For a falling pump curve or a rising system curve this is the
    /// branch with increasing flow.
    ///
    /// This is a heuristic. Where both roots are positive (for example the
    /// rising shoulder of a pump curve near shutoff) the smaller root may be
    /// the one a real installation settles on, and it is never returned.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::NoSolution`] if the quadratic has no real root,
    /// or if the curve is constant in flow.
    pub fn flow_at(&self, head: Length) -> Result<VolumeRate, CurveError> {
        let (a, b, c) = (self.c0, self.c1, self.c2 - head.get::<meter>());
        let no_solution = CurveError::NoSolution { head };

        if a == 0.0 {
            if b == 0.0 {
                return Err(no_solution);
            }
            return Ok(VolumeRate::new::<cubic_meter_per_second>(-c / b));
        }

        let discriminant = b.mul_add(b, -4.0 * a * c);
        if discriminant.is_nan() || discriminant < 0.0 {
            return Err(no_solution);
        }

        // Cancellation-free form: the two roots are t/a and c/t.
        let t = -0.5 * (b + b.signum() * discriminant.sqrt());
        let first = t / a;
        let second = if t == 0.0 { first } else { c / t };

        Ok(VolumeRate::new::<cubic_meter_per_second>(first.max(second)))
    }
}
