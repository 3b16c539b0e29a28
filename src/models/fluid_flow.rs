//! Pipe and nozzle sizing models.
//!
//! This module provides [`twine_core::Model`] implementations for sizing a
//! circular conduit and for classifying a flow regime:
//!
//! - [`FlowSizer`]: solves for diameter or velocity and judges the velocity
//!   against the pipe-flow or nozzle reference ranges.
//! - [`ReynoldsRegime`]: computes a Reynolds number and classifies it as
//!   laminar, transitional or turbulent.
//!
//! The computational core is in the internal `core` module; its public types
//! are re-exported here.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_flow_sizing::models::fluid_flow::{
//!     FlowSizer, FlowSpecification, FluidCategory, Given, Severity, SizingInput,
//! };
//! use uom::si::{
//!     f64::{Velocity, VolumeRate},
//!     velocity::meter_per_second,
//!     volume_rate::cubic_meter_per_hour,
//! };
//!
//! let spec = FlowSpecification::new(
//!     VolumeRate::new::<cubic_meter_per_hour>(100.0),
//!     FluidCategory::Liquid,
//! )
//! .unwrap();
//!
//! let results = FlowSizer::pipe()
//!     .call(&SizingInput {
//!         spec,
//!         given: Given::Velocity(Velocity::new::<meter_per_second>(2.0)),
//!     })
//!     .unwrap();
//!
//! assert_eq!(results.advisory.severity, Severity::Safe);
//! ```

mod core;

pub use self::core::{
    AdvisoryContext, AdvisoryOutcome, AdvisoryTables, BandTable, BandTableError, Bound,
    CalculationMode, Classification, ConduitGeometry, FlowAdvisor, FlowSpecification,
    FlowVelocity, FluidCategory, Given, LAMINAR_LIMIT, RegimeBand, RegimeResults, ReynoldsNumber,
    Severity, SizingError, SizingResults, TURBULENT_ONSET, VelocityTables, diameter_for,
    velocity_for,
};

use twine_core::Model;
use uom::si::{
    f64::{DynamicViscosity, Length, MassDensity, Velocity},
    length::meter,
    velocity::meter_per_second,
};

/// Input to a [`FlowSizer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingInput {
    /// The fluid stream being sized.
    pub spec: FlowSpecification,

    /// The known velocity or diameter.
    pub given: Given,
}

/// Sizes a pipe or nozzle and judges the resulting velocity.
///
/// The advisory context is fixed at construction, so a pipe sizer and a
/// nozzle sizer given the same input can return different advisories.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowSizer {
    context: AdvisoryContext,
    advisor: FlowAdvisor,
}

impl FlowSizer {
    /// Creates a sizer for the given context and advisor.
    #[must_use]
    pub fn new(context: AdvisoryContext, advisor: FlowAdvisor) -> Self {
        Self { context, advisor }
    }

    /// Creates a sizer judged against the reference in-line pipe ranges.
    #[must_use]
    pub fn pipe() -> Self {
        Self::new(AdvisoryContext::Pipe, FlowAdvisor::default())
    }

    /// Creates a sizer judged against the reference nozzle discharge ranges.
    #[must_use]
    pub fn nozzle() -> Self {
        Self::new(AdvisoryContext::Nozzle, FlowAdvisor::default())
    }

    /// Returns the advisory context.
    #[must_use]
    pub fn context(&self) -> AdvisoryContext {
        self.context
    }

    /// Returns the advisor.
    #[must_use]
    pub fn advisor(&self) -> &FlowAdvisor {
        &self.advisor
    }
}

impl Model for FlowSizer {
    type Input = SizingInput;
    type Output = SizingResults;
    type Error = SizingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let results = self::core::size(&self.advisor, self.context, &input.spec, input.given)?;

        tracing::debug!(
            context = %self.context,
            fluid = %input.spec.fluid(),
            mode = %results.mode,
            diameter_m = results.geometry.diameter().get::<meter>(),
            velocity_mps = results.velocity.get::<meter_per_second>(),
            advisory = %results.advisory.classification,
            severity = %results.advisory.severity,
            "sized conduit"
        );

        Ok(results)
    }
}

/// Input to a [`ReynoldsRegime`] model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReynoldsInput {
    /// Fluid density.
    pub density: MassDensity,

    /// Mean flow velocity.
    pub velocity: Velocity,

    /// Internal diameter of the conduit.
    pub diameter: Length,

    /// Dynamic viscosity of the fluid.
    pub viscosity: DynamicViscosity,
}

/// Computes a Reynolds number and classifies the flow regime.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReynoldsRegime {
    advisor: FlowAdvisor,
}

impl ReynoldsRegime {
    /// Creates a regime model that classifies with the given advisor.
    #[must_use]
    pub fn new(advisor: FlowAdvisor) -> Self {
        Self { advisor }
    }
}

impl Model for ReynoldsRegime {
    type Input = ReynoldsInput;
    type Output = RegimeResults;
    type Error = SizingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let reynolds = ReynoldsNumber::from_flow(
            input.density,
            input.velocity,
            input.diameter,
            input.viscosity,
        )?;
        let outcome = self.advisor.classify_reynolds_number(reynolds)?;

        tracing::debug!(
            reynolds = reynolds.value(),
            regime = %outcome.classification,
            "classified flow regime"
        );

        Ok(RegimeResults { reynolds, outcome })
    }
}
