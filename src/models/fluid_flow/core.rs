//! Conduit sizing and flow advisories.
//!
//! Geometry functions convert between volumetric flow, area, diameter and
//! velocity. A [`FlowAdvisor`] classifies the resulting velocity, or a
//! Reynolds number, against ordered [`BandTable`]s and returns an
//! [`AdvisoryOutcome`]. `size` combines the two into a single calculation.
//!
//! Everything here is a pure function of its arguments.

mod advisor;
mod band;
mod error;
mod geometry;
mod input;
mod outcome;
mod results;
mod reynolds;
mod sizer;
mod tables;

pub use advisor::FlowAdvisor;
pub use band::{BandTable, BandTableError, Bound, RegimeBand};
pub use error::SizingError;
pub use geometry::{ConduitGeometry, FlowVelocity, diameter_for, velocity_for};
pub use input::{AdvisoryContext, CalculationMode, FlowSpecification, FluidCategory, Given};
pub use outcome::{AdvisoryOutcome, Classification, Severity};
pub use results::{RegimeResults, SizingResults};
pub use reynolds::ReynoldsNumber;
pub use tables::{AdvisoryTables, LAMINAR_LIMIT, TURBULENT_ONSET, VelocityTables};

pub(crate) use sizer::size;
