use std::ops::Deref;

use uom::si::{
    f64::{DynamicViscosity, Length, MassDensity, Ratio, Velocity},
    ratio::ratio,
};

use crate::support::constraint::{Constrained, NonNegative, StrictlyPositive};

use super::SizingError;

/// The Reynolds number of a flow.
///
/// The ratio of inertial to viscous forces, `ρ·v·D / μ`. It indicates whether
/// a flow tends toward laminar or turbulent behavior.
///
/// The Reynolds number must be >= 0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ReynoldsNumber(Constrained<Ratio, NonNegative>);

impl ReynoldsNumber {
    /// Create a [`ReynoldsNumber`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidInput`] if the value is negative or `NaN`.
    pub fn new(value: f64) -> Result<Self, SizingError> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Create a [`ReynoldsNumber`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidInput`] if the quantity is negative or `NaN`.
    pub fn from_quantity(quantity: Ratio) -> Result<Self, SizingError> {
        NonNegative::new(quantity)
            .map(Self)
            .map_err(SizingError::invalid("Reynolds number"))
    }

    /// Compute the Reynolds number of a flow in a circular conduit.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidInput`] if any argument is not strictly
    /// positive. A zero viscosity would divide by zero.
    pub fn from_flow(
        density: MassDensity,
        velocity: Velocity,
        diameter: Length,
        viscosity: DynamicViscosity,
    ) -> Result<Self, SizingError> {
        let density = positive(density, "density")?;
        let velocity = positive(velocity, "velocity")?;
        let diameter = positive(diameter, "diameter")?;
        let viscosity = positive(viscosity, "viscosity")?;

        let reynolds: Ratio = density * velocity * diameter / viscosity;
        Self::from_quantity(reynolds)
    }

    /// Returns the Reynolds number as a plain scalar.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.get::<ratio>()
    }
}

impl Deref for ReynoldsNumber {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

fn positive<T>(value: T, quantity: &'static str) -> Result<T, SizingError>
where
    T: PartialOrd + num_traits::Zero,
{
    StrictlyPositive::new(value)
        .map(Constrained::into_inner)
        .map_err(SizingError::invalid(quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::ConstraintError;
    use approx::assert_relative_eq;
    use uom::si::{
        dynamic_viscosity::{centipoise, pascal_second},
        length::meter,
        mass_density::kilogram_per_cubic_meter,
        velocity::meter_per_second,
    };

    #[test]
    fn water_in_a_small_pipe() -> Result<(), SizingError> {
        let re = ReynoldsNumber::from_flow(
            MassDensity::new::<kilogram_per_cubic_meter>(1000.0),
            Velocity::new::<meter_per_second>(2.0),
            Length::new::<meter>(0.05),
            DynamicViscosity::new::<pascal_second>(1e-3),
        )?;

        assert_relative_eq!(re.value(), 100_000.0, max_relative = 1e-12);
        Ok(())
    }

    #[test]
    fn viscosity_units_are_interchangeable() -> Result<(), SizingError> {
        let re = ReynoldsNumber::from_flow(
            MassDensity::new::<kilogram_per_cubic_meter>(850.0),
            Velocity::new::<meter_per_second>(0.1),
            Length::new::<meter>(0.02),
            DynamicViscosity::new::<centipoise>(100.0),
        )?;

        assert_relative_eq!(re.value(), 17.0, max_relative = 1e-12);
        Ok(())
    }

    #[test]
    fn rejects_zero_viscosity() {
        let err = ReynoldsNumber::from_flow(
            MassDensity::new::<kilogram_per_cubic_meter>(1000.0),
            Velocity::new::<meter_per_second>(1.0),
            Length::new::<meter>(0.1),
            DynamicViscosity::new::<pascal_second>(0.0),
        )
        .unwrap_err();

        assert_eq!(
            err,
            SizingError::InvalidInput {
                quantity: "viscosity",
                source: ConstraintError::Zero,
            }
        );
    }

    #[test]
    fn rejects_negative_values() {
        assert!(ReynoldsNumber::new(-1.0).is_err());
        assert!(ReynoldsNumber::new(f64::NAN).is_err());
        assert!(ReynoldsNumber::new(0.0).is_ok());
    }
}
