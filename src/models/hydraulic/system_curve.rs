//! Piping system head-loss curve.

use uom::si::f64::{Length, VolumeRate};

use crate::support::{
    curve::{CurveError, QuadraticCurve},
    fluid::Fluid,
};

use super::{OperatingPointError, SystemOperatingPoint, check_len};

/// The head a piping system requires as a function of flow.
///
/// Static lift goes in `c2` and friction losses in `c0`/`c1`. Unlike a pump
/// curve, a system curve does not depend on speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemCurve {
    curve: QuadraticCurve,
    fluid: Fluid,
}

impl SystemCurve {
    /// Creates a system curve for the given fluid.
    #[must_use]
    pub fn new(curve: QuadraticCurve, fluid: Fluid) -> Self {
        Self { curve, fluid }
    }

    #[must_use]
    pub fn curve(&self) -> &QuadraticCurve {
        &self.curve
    }

    #[must_use]
    pub fn fluid(&self) -> &Fluid {
        &self.fluid
    }

    /// Returns the required head at `flow`.
    #[must_use]
    pub fn head_at(&self, flow: VolumeRate) -> Length {
        self.curve.head_at(flow)
    }

    /// Returns the flow at which the system requires `head`.
    ///
    /// # Errors
    ///
    /// See [`QuadraticCurve::flow_at`].
    pub fn flow_at(&self, head: Length) -> Result<VolumeRate, CurveError> {
        self.curve.flow_at(head)
    }

    #[must_use]
    pub fn point_at_flow(&self, flow: VolumeRate) -> SystemOperatingPoint<'_> {
        SystemOperatingPoint::new(self.head_at(flow), flow, self)
    }

    /// Returns the operating point at which the system requires `head`.
    ///
    /// # Errors
    ///
    /// See [`QuadraticCurve::flow_at`].
    pub fn point_at_head(&self, head: Length) -> Result<SystemOperatingPoint<'_>, CurveError> {
        Ok(SystemOperatingPoint::new(head, self.flow_at(head)?, self))
    }

    /// Returns one operating point per flow.
    #[must_use]
    pub fn operating_points_from_flow(
        &self,
        flows: &[VolumeRate],
    ) -> Vec<SystemOperatingPoint<'_>> {
        flows.iter().map(|&flow| self.point_at_flow(flow)).collect()
    }

    /// Returns one operating point per head.
    ///
    /// # Errors
    ///
    /// Returns [`OperatingPointError::Curve`] if any head has no real flow.
    pub fn operating_points_from_head(
        &self,
        heads: &[Length],
    ) -> Result<Vec<SystemOperatingPoint<'_>>, OperatingPointError> {
        heads
            .iter()
            .map(|&head| self.point_at_head(head).map_err(OperatingPointError::from))
            .collect()
    }

    /// Pairs externally supplied heads and flows into operating points.
    ///
    /// # Errors
    ///
    /// Returns [`OperatingPointError::DimensionMismatch`] if the sequences
    /// differ in length.
    pub fn operating_points(
        &self,
        heads: &[Length],
        flows: &[VolumeRate],
    ) -> Result<Vec<SystemOperatingPoint<'_>>, OperatingPointError> {
        check_len(heads.len(), flows.len())?;
        Ok(heads
            .iter()
            .zip(flows)
            .map(|(&head, &flow)| SystemOperatingPoint::new(head, flow, self))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{length::meter, volume_rate::cubic_meter_per_second};

    use crate::models::hydraulic::test_support::{flow, head, reference_system};

    #[test]
    fn heads_from_flows() {
        let system = reference_system();
        let points = system.operating_points_from_flow(&[flow(0.0), flow(0.01), flow(0.02)]);
        let heads: Vec<f64> = points.iter().map(|p| p.head().get::<meter>()).collect();
        assert_relative_eq!(heads[0], 0.0);
        assert_relative_eq!(heads[1], 0.9649, epsilon = 1e-12);
        assert_relative_eq!(heads[2], 3.8596, epsilon = 1e-12);
    }

    #[test]
    fn flows_from_heads_take_positive_branch() {
        let system = reference_system();
        let points = system
            .operating_points_from_head(&[head(0.9649), head(3.8596)])
            .unwrap();
        assert_relative_eq!(
            points[0].flow().get::<cubic_meter_per_second>(),
            0.01,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            points[1].flow().get::<cubic_meter_per_second>(),
            0.02,
            max_relative = 1e-12
        );
    }

    #[test]
    fn head_below_minimum_has_no_flow() {
        let system = reference_system();
        assert_eq!(
            system.operating_points_from_head(&[head(1.0), head(-1.0)]),
            Err(OperatingPointError::Curve(CurveError::NoSolution {
                head: head(-1.0)
            }))
        );
    }

    #[test]
    fn mismatched_heads_and_flows() {
        let system = reference_system();
        let err = system
            .operating_points(&[head(1.0), head(2.0), head(3.0)], &[flow(0.01), flow(0.02)])
            .unwrap_err();
        assert_eq!(
            err,
            OperatingPointError::DimensionMismatch {
                expected: 3,
                found: 2
            }
        );
    }
}
