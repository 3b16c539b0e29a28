//! Results types for sizing and regime classification.

use uom::si::f64::Velocity;

use super::{AdvisoryOutcome, CalculationMode, ConduitGeometry, ReynoldsNumber};

/// The outcome of a sizing calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingResults {
    /// The quantity that was solved for.
    pub mode: CalculationMode,

    /// Conduit diameter and flow area, given or solved.
    pub geometry: ConduitGeometry,

    /// Mean flow velocity, given or solved.
    pub velocity: Velocity,

    /// Velocity judged against the context's reference range.
    pub advisory: AdvisoryOutcome,

    /// Flow regime, present when density and viscosity were specified.
    pub regime: Option<RegimeResults>,
}

/// A Reynolds number and the regime it falls in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegimeResults {
    /// The computed Reynolds number.
    pub reynolds: ReynoldsNumber,

    /// The regime the Reynolds number falls in.
    pub outcome: AdvisoryOutcome,
}
