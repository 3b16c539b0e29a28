//! Circular conduit geometry.
//!
//! Converts between volumetric flow, cross-sectional area, diameter and
//! velocity. All functions are pure and validate their inputs.

use std::f64::consts::PI;

use uom::si::{
    Dimension, Quantity, Units,
    area::square_meter,
    f64::{Area, Length, Velocity, VolumeRate},
    length::meter,
};

use crate::support::constraint::{Constrained, ConstraintError, StrictlyPositive};

use super::SizingError;

/// Diameter and cross-sectional area of a circular conduit.
///
/// The two are kept consistent (`area = π·d²/4`) and both are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConduitGeometry {
    diameter: Length,
    area: Area,
}

impl ConduitGeometry {
    /// Constructs the geometry of a conduit with the given internal diameter.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidInput`] if `diameter` is not strictly
    /// positive, or if its area underflows to zero or overflows to infinity.
    pub fn from_diameter(diameter: Length) -> Result<Self, SizingError> {
        let diameter = StrictlyPositive::new(diameter).map_err(SizingError::invalid("diameter"))?;
        Self::from_constrained_diameter(diameter)
    }

    /// Constructs the geometry from a pre-validated diameter.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidInput`] if the computed area is not a
    /// finite, strictly positive value.
    pub fn from_constrained_diameter(
        diameter: Constrained<Length, StrictlyPositive>,
    ) -> Result<Self, SizingError> {
        let diameter = diameter.into_inner();
        let area = finite_positive(diameter * diameter * (PI / 4.0), "cross-sectional area")?;
        Ok(Self { diameter, area })
    }

    /// Constructs the geometry of a circular conduit with the given flow area.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidInput`] if `area` is not a finite,
    /// strictly positive value.
    pub fn from_area(area: Area) -> Result<Self, SizingError> {
        let area = finite_positive(area, "cross-sectional area")?;
        let diameter = (4.0 * area.get::<square_meter>() / PI).sqrt();
        Ok(Self {
            diameter: Length::new::<meter>(diameter),
            area,
        })
    }

    /// Constructs the geometry that carries `flow_rate` at `velocity`.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidInput`] if either argument is not strictly positive.
    pub fn for_flow(flow_rate: VolumeRate, velocity: Velocity) -> Result<Self, SizingError> {
        let flow_rate = validate_flow_rate(flow_rate)?;
        let velocity = StrictlyPositive::new(velocity)
            .map_err(SizingError::invalid("velocity"))?
            .into_inner();
        Self::from_area(flow_rate / velocity)
    }

    /// Returns the internal diameter.
    #[must_use]
    pub fn diameter(&self) -> Length {
        self.diameter
    }

    /// Returns the cross-sectional flow area.
    #[must_use]
    pub fn area(&self) -> Area {
        self.area
    }
}

/// Mean flow velocity through a conduit.
///
/// The value is guaranteed to be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FlowVelocity(Velocity);

impl FlowVelocity {
    /// Computes the velocity of `flow_rate` through `geometry`.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidInput`] if `flow_rate` is not strictly
    /// positive, or if the velocity underflows to zero or overflows to infinity.
    pub fn through(flow_rate: VolumeRate, geometry: &ConduitGeometry) -> Result<Self, SizingError> {
        let flow_rate = validate_flow_rate(flow_rate)?;
        finite_positive(flow_rate / geometry.area(), "velocity").map(Self)
    }

    /// Returns the velocity.
    #[must_use]
    pub fn get(&self) -> Velocity {
        self.0
    }
}

/// Returns the diameter that carries `flow_rate` at `velocity`.
///
/// # Errors
///
/// Returns [`SizingError::InvalidInput`] if either argument is not strictly positive.
pub fn diameter_for(flow_rate: VolumeRate, velocity: Velocity) -> Result<Length, SizingError> {
    ConduitGeometry::for_flow(flow_rate, velocity).map(|geometry| geometry.diameter())
}

/// Returns the velocity of `flow_rate` through a conduit of the given diameter.
///
/// # Errors
///
/// Returns [`SizingError::InvalidInput`] if either argument is not strictly positive.
pub fn velocity_for(flow_rate: VolumeRate, diameter: Length) -> Result<Velocity, SizingError> {
    let geometry = ConduitGeometry::from_diameter(diameter)?;
    FlowVelocity::through(flow_rate, &geometry).map(|v| v.get())
}

pub(crate) fn validate_flow_rate(flow_rate: VolumeRate) -> Result<VolumeRate, SizingError> {
    StrictlyPositive::new(flow_rate)
        .map(Constrained::into_inner)
        .map_err(SizingError::invalid("volumetric flow rate"))
}

/// Checks a derived quantity, which can underflow to zero or overflow to infinity.
fn finite_positive<D, U>(
    value: Quantity<D, U, f64>,
    quantity: &'static str,
) -> Result<Quantity<D, U, f64>, SizingError>
where
    D: Dimension + ?Sized,
    D::Kind: uom::marker::Add,
    U: Units<f64> + ?Sized,
{
    if value.value.is_infinite() {
        return Err(SizingError::invalid(quantity)(ConstraintError::AboveMaximum));
    }
    StrictlyPositive::new(value)
        .map(Constrained::into_inner)
        .map_err(SizingError::invalid(quantity))
}
