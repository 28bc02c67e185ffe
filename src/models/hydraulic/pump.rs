//! Centrifugal pump model.

use uom::si::f64::{AngularVelocity, Length, Ratio, VolumeRate};

use crate::support::{
    curve::{CurveError, SpeedScaledCurve},
    fluid::Fluid,
};

use super::{ConstantEfficiency, Efficiency, OperatingPointError, PumpOperatingPoint, check_len};

/// A centrifugal pump: a nominal head curve, an efficiency model, and the
/// fluid it pumps.
///
/// Speed is supplied per query. Heads at other speeds follow the affinity
/// conventions of [`SpeedScaledCurve`].
///
/// # Example
///
/// ```
/// use twine_pumps::models::hydraulic::{ConstantEfficiency, Pump};
/// use twine_pumps::support::{curve::{QuadraticCurve, SpeedScaledCurve}, fluid::Fluid};
/// use uom::si::{
///     angular_velocity::revolution_per_minute, f64::{AngularVelocity, MassDensity, Ratio, VolumeRate},
///     length::meter, mass_density::kilogram_per_cubic_meter, ratio::ratio,
///     volume_rate::cubic_meter_per_second,
/// };
///
/// let curve = SpeedScaledCurve::new(
///     QuadraticCurve::new(-6.6e3, 27.0, 19.0).unwrap(),
///     AngularVelocity::new::<revolution_per_minute>(1800.0),
/// ).unwrap();
/// let pump = Pump::new(
///     curve,
///     ConstantEfficiency::new(Ratio::new::<ratio>(0.6)).unwrap(),
///     Fluid::new(MassDensity::new::<kilogram_per_cubic_meter>(1000.0)).unwrap(),
/// );
///
/// let point = pump.point_at_flow(
///     VolumeRate::new::<cubic_meter_per_second>(0.02),
///     AngularVelocity::new::<revolution_per_minute>(1800.0),
/// );
/// assert!((point.head().get::<meter>() - 16.9).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Pump<E = ConstantEfficiency> {
    curve: SpeedScaledCurve,
    efficiency: E,
    fluid: Fluid,
}

impl<E> Pump<E> {
    /// Creates a pump.
    #[must_use]
    pub fn new(curve: SpeedScaledCurve, efficiency: E, fluid: Fluid) -> Self {
        Self {
            curve,
            efficiency,
            fluid,
        }
    }

    #[must_use]
    pub fn curve(&self) -> &SpeedScaledCurve {
        &self.curve
    }

    /// Returns the efficiency model.
    #[must_use]
    pub fn efficiency_model(&self) -> &E {
        &self.efficiency
    }

    #[must_use]
    pub fn fluid(&self) -> &Fluid {
        &self.fluid
    }

    /// Returns the head at `flow` when running at `speed`.
    #[must_use]
    pub fn head_at(&self, flow: VolumeRate, speed: AngularVelocity) -> Length {
        self.curve.head_at_speed(flow, speed)
    }

    /// Returns the flow that produces `head` when running at `speed`.
    ///
    /// # Errors
    ///
    /// See [`SpeedScaledCurve::flow_at_speed`].
    pub fn flow_at(&self, head: Length, speed: AngularVelocity) -> Result<VolumeRate, CurveError> {
        self.curve.flow_at_speed(head, speed)
    }

    /// Returns the operating point at `flow` and `speed`.
    #[must_use]
    pub fn point_at_flow(
        &self,
        flow: VolumeRate,
        speed: AngularVelocity,
    ) -> PumpOperatingPoint<'_, E> {
        PumpOperatingPoint::new(self.head_at(flow, speed), flow, speed, self)
    }

    /// Returns the operating point that delivers `head` at `speed`.
    ///
    /// # Errors
    ///
    /// See [`SpeedScaledCurve::flow_at_speed`].
    pub fn point_at_head(
        &self,
        head: Length,
        speed: AngularVelocity,
    ) -> Result<PumpOperatingPoint<'_, E>, CurveError> {
        Ok(PumpOperatingPoint::new(head, self.flow_at(head, speed)?, speed, self))
    }

    /// Returns one operating point per flow.
    ///
    /// `speeds` holds either a single speed used for every flow or one speed
    /// per flow.
    ///
    /// # Errors
    ///
    /// Returns [`OperatingPointError::DimensionMismatch`] if `speeds` has
    /// neither one element nor as many elements as `flows`.
    pub fn operating_points_from_flow(
        &self,
        flows: &[VolumeRate],
        speeds: &[AngularVelocity],
    ) -> Result<Vec<PumpOperatingPoint<'_, E>>, OperatingPointError> {
        let speeds = broadcast(speeds, flows.len())?;
        Ok(flows
            .iter()
            .zip(speeds)
            .map(|(&flow, speed)| self.point_at_flow(flow, speed))
            .collect())
    }

    /// Returns one operating point per head.
    ///
    /// `speeds` is broadcast as in [`operating_points_from_flow`](Self::operating_points_from_flow).
    ///
    /// # Errors
    ///
    /// Returns [`OperatingPointError::DimensionMismatch`] on a length mismatch,
    /// or [`OperatingPointError::Curve`] if any head cannot be reached.
    pub fn operating_points_from_head(
        &self,
        heads: &[Length],
        speeds: &[AngularVelocity],
    ) -> Result<Vec<PumpOperatingPoint<'_, E>>, OperatingPointError> {
        let speeds = broadcast(speeds, heads.len())?;
        heads
            .iter()
            .zip(speeds)
            .map(|(&head, speed)| {
                self.point_at_head(head, speed)
                    .map_err(OperatingPointError::from)
            })
            .collect()
    }

    /// Pairs externally supplied heads and flows into operating points.
    ///
    /// The pairs are not checked against the pump curve. `speeds` is broadcast
    /// as in [`operating_points_from_flow`](Self::operating_points_from_flow).
    ///
    /// # Errors
    ///
    /// Returns [`OperatingPointError::DimensionMismatch`] if the sequences
    /// differ in length.
    pub fn operating_points(
        &self,
        heads: &[Length],
        flows: &[VolumeRate],
        speeds: &[AngularVelocity],
    ) -> Result<Vec<PumpOperatingPoint<'_, E>>, OperatingPointError> {
        check_len(heads.len(), flows.len())?;
        let speeds = broadcast(speeds, heads.len())?;
        Ok(heads
            .iter()
            .zip(flows)
            .zip(speeds)
            .map(|((&head, &flow), speed)| PumpOperatingPoint::new(head, flow, speed, self))
            .collect())
    }
}

impl<E: Efficiency> Pump<E> {
    /// Returns the efficiency at `flow` and `speed`.
    #[must_use]
    pub fn efficiency(&self, flow: VolumeRate, speed: AngularVelocity) -> Ratio {
        self.efficiency.efficiency(flow, speed)
    }
}

/// Expands `speeds` to `len` elements, repeating a single speed if needed.
fn broadcast(
    speeds: &[AngularVelocity],
    len: usize,
) -> Result<Vec<AngularVelocity>, OperatingPointError> {
    if let [speed] = speeds {
        return Ok(vec![*speed; len]);
    }
    check_len(len, speeds.len())?;
    Ok(speeds.to_vec())
}
