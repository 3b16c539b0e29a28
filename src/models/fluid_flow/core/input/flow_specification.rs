use uom::si::f64::{DynamicViscosity, MassDensity, VolumeRate};

use crate::{
    models::fluid_flow::core::{FluidCategory, SizingError, geometry::validate_flow_rate},
    support::constraint::StrictlyPositive,
};

/// The fluid stream being sized.
///
/// The volumetric flow rate is always required. Density and viscosity are
/// optional; when both are present, sizing also reports the flow regime.
///
/// Every stored quantity is guaranteed to be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowSpecification {
    flow_rate: VolumeRate,
    fluid: FluidCategory,
    density: Option<MassDensity>,
    viscosity: Option<DynamicViscosity>,
}

impl FlowSpecification {
    /// Constructs a validated flow specification without fluid properties.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidInput`] if `flow_rate` is not strictly positive.
    pub fn new(flow_rate: VolumeRate, fluid: FluidCategory) -> Result<Self, SizingError> {
        Ok(Self {
            flow_rate: validate_flow_rate(flow_rate)?,
            fluid,
            density: None,
            viscosity: None,
        })
    }

    /// Adds a fluid density.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidInput`] if `density` is not strictly positive.
    pub fn with_density(self, density: MassDensity) -> Result<Self, SizingError> {
        let density = StrictlyPositive::new(density).map_err(SizingError::invalid("density"))?;
        Ok(Self {
            density: Some(density.into_inner()),
            ..self
        })
    }

    /// Adds a dynamic viscosity.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidInput`] if `viscosity` is not strictly positive.
    pub fn with_viscosity(self, viscosity: DynamicViscosity) -> Result<Self, SizingError> {
        let viscosity =
            StrictlyPositive::new(viscosity).map_err(SizingError::invalid("viscosity"))?;
        Ok(Self {
            viscosity: Some(viscosity.into_inner()),
            ..self
        })
    }

    /// Returns the volumetric flow rate.
    #[must_use]
    pub fn flow_rate(&self) -> VolumeRate {
        self.flow_rate
    }

    /// Returns the fluid category.
    #[must_use]
    pub fn fluid(&self) -> FluidCategory {
        self.fluid
    }

    /// Returns the density, if known.
    #[must_use]
    pub fn density(&self) -> Option<MassDensity> {
        self.density
    }

    /// Returns the dynamic viscosity, if known.
    #[must_use]
    pub fn viscosity(&self) -> Option<DynamicViscosity> {
        self.viscosity
    }
}
