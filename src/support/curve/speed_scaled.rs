use std::cmp::Ordering;

use uom::{
    ConstZero,
    si::f64::{AngularVelocity, Length, VolumeRate},
};

use crate::support::{
    constraint::{Constrained, ConstraintResult, StrictlyPositive},
    units::SpeedRatio,
};

use super::{CurveError, QuadraticCurve};

/// A nominal pump curve evaluated at arbitrary speeds via the affinity laws.
///
/// The two directions use different conventions, and both are relied on by
/// the rest of the crate:
///
/// - **Forward** ([`head_at_speed`](Self::head_at_speed)): the flow is taken
///   as already expressed at the queried speed and is not rescaled,
///   `h = (n/n0)² · base(q)`.
/// - **Inverse** ([`flow_at_speed`](Self::flow_at_speed)): the head is moved
///   into the nominal frame, inverted there, and the flow is moved back,
///   `q = (n/n0) · base⁻¹((n0/n)² · h)`.
///
/// # Example
///
/// ```
/// use twine_pumps::support::curve::{QuadraticCurve, SpeedScaledCurve};
/// use uom::si::{
///     angular_velocity::revolution_per_minute, f64::{AngularVelocity, VolumeRate},
///     length::meter, volume_rate::cubic_meter_per_second,
/// };
///
/// let base = QuadraticCurve::new(-6.6e3, 27.0, 19.0).unwrap();
/// let pump = SpeedScaledCurve::new(base, AngularVelocity::new::<revolution_per_minute>(1800.0)).unwrap();
///
/// let q = VolumeRate::new::<cubic_meter_per_second>(0.0);
/// let half_speed = AngularVelocity::new::<revolution_per_minute>(900.0);
/// assert!((pump.head_at_speed(q, half_speed).get::<meter>() - 19.0 / 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedScaledCurve {
    base: QuadraticCurve,
    nominal_speed: Constrained<AngularVelocity, StrictlyPositive>,
}

impl SpeedScaledCurve {
    /// Wraps a curve measured at `nominal_speed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the nominal speed is not strictly positive.
    pub fn new(base: QuadraticCurve, nominal_speed: AngularVelocity) -> ConstraintResult<Self> {
        Ok(Self {
            base,
            nominal_speed: StrictlyPositive::new(nominal_speed)?,
        })
    }

    /// Returns the curve at nominal speed.
    #[must_use]
    pub fn base(&self) -> &QuadraticCurve {
        &self.base
    }

    /// Returns the speed at which the base curve was measured.
    #[must_use]
    pub fn nominal_speed(&self) -> AngularVelocity {
        self.nominal_speed.into_inner()
    }

    /// Returns the head at `flow` when running at `speed`.
    #[must_use]
    pub fn head_at_speed(&self, flow: VolumeRate, speed: AngularVelocity) -> Length {
        let ratio = speed.ratio_to(self.nominal_speed());
        self.base.head_at(flow) * (ratio * ratio)
    }

    /// Returns the flow that produces `head` when running at `speed`.
    ///
    /// Uses the largest-root policy of [`QuadraticCurve::flow_at`].
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::NonPositiveSpeed`] if `speed` is not strictly
    /// positive, or [`CurveError::NoSolution`] if the head is out of reach at
    /// that speed.
    pub fn flow_at_speed(
        &self,
        head: Length,
        speed: AngularVelocity,
    ) -> Result<VolumeRate, CurveError> {
        if speed.partial_cmp(&AngularVelocity::ZERO) != Some(Ordering::Greater) {
            return Err(CurveError::NonPositiveSpeed { speed });
        }

        let ratio = speed.ratio_to(self.nominal_speed());
        let nominal_head = head / (ratio * ratio);

        let nominal_flow = self
            .base
            .flow_at(nominal_head)
            .map_err(|_| CurveError::NoSolution { head })?;

        Ok(nominal_flow * ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        angular_velocity::revolution_per_minute, length::meter,
        volume_rate::cubic_meter_per_second,
    };

    fn rpm(n: f64) -> AngularVelocity {
        AngularVelocity::new::<revolution_per_minute>(n)
    }

    fn flow(q: f64) -> VolumeRate {
        VolumeRate::new::<cubic_meter_per_second>(q)
    }

    fn pump() -> SpeedScaledCurve {
        let base = QuadraticCurve::new(-6.6e3, 27.0, 19.0).unwrap();
        SpeedScaledCurve::new(base, rpm(1800.0)).unwrap()
    }

    #[test]
    fn rejects_non_positive_nominal_speed() {
        let base = QuadraticCurve::new(-6.6e3, 27.0, 19.0).unwrap();
        assert!(SpeedScaledCurve::new(base, rpm(0.0)).is_err());
        assert!(SpeedScaledCurve::new(base, rpm(-1800.0)).is_err());
    }

    #[test]
    fn nominal_speed_is_identity() {
        let pump = pump();
        for q in [0.0, 0.01, 0.04] {
            assert_eq!(
                pump.head_at_speed(flow(q), rpm(1800.0)),
                pump.base().head_at(flow(q))
            );
        }
    }

    #[test]
    fn head_scales_with_speed_squared() {
        let pump = pump();
        let q = flow(0.025);
        let h1 = pump.head_at_speed(q, rpm(1200.0)).get::<meter>();
        let h2 = pump.head_at_speed(q, rpm(2400.0)).get::<meter>();
        assert_relative_eq!(h2, 4.0 * h1, max_relative = 1e-12);
    }

    #[test]
    fn inverse_at_nominal_speed_matches_base() {
        let pump = pump();
        let h = Length::new::<meter>(12.0);
        let scaled = pump.flow_at_speed(h, rpm(1800.0)).unwrap();
        let base = pump.base().flow_at(h).unwrap();
        assert_relative_eq!(
            scaled.get::<cubic_meter_per_second>(),
            base.get::<cubic_meter_per_second>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn inverse_follows_affinity_laws() {
        // A nominal point (q0, h0) maps to (q0·r, h0·r²) at speed ratio r.
        let pump = pump();
        let q0 = 0.03;
        let h0 = pump.base().head_at(flow(q0)).get::<meter>();
        let r = 0.75;

        let q = pump
            .flow_at_speed(Length::new::<meter>(h0 * r * r), rpm(1800.0 * r))
            .unwrap();
        assert_relative_eq!(q.get::<cubic_meter_per_second>(), q0 * r, max_relative = 1e-10);
    }

    #[test]
    fn inverse_rejects_non_positive_speed() {
        let pump = pump();
        let h = Length::new::<meter>(10.0);
        assert!(matches!(
            pump.flow_at_speed(h, rpm(0.0)),
            Err(CurveError::NonPositiveSpeed { .. })
        ));
    }

    #[test]
    fn inverse_reports_requested_head() {
        let pump = pump();
        let h = Length::new::<meter>(100.0);
        assert_eq!(
            pump.flow_at_speed(h, rpm(1800.0)),
            Err(CurveError::NoSolution { head: h })
        );
    }
}
