//! Reference band tables.
//!
//! Velocity ranges follow common process-design practice (Coulson &
//! Richardson for in-line pipe flow, Perry's for nozzle discharge). The pipe
//! and nozzle tables are independent: they share fluid categories but not
//! bounds or band counts.

use super::{
    AdvisoryContext, BandTable, Bound, Classification, FluidCategory, RegimeBand, Severity,
};

/// Upper bound of the laminar regime.
pub const LAMINAR_LIMIT: f64 = 2000.0;

/// Upper bound of the transitional regime.
pub const TURBULENT_ONSET: f64 = 4000.0;

/// The complete set of tables a [`FlowAdvisor`](super::FlowAdvisor) judges against.
///
/// [`Default`] yields the reference tables. Any table may be replaced to suit
/// a project's own design basis.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisoryTables {
    /// Reynolds-number regime table.
    pub reynolds: BandTable,

    /// In-line pipe velocity tables.
    pub pipe: VelocityTables,

    /// Nozzle discharge velocity tables.
    pub nozzle: VelocityTables,
}

impl AdvisoryTables {
    /// Returns the velocity table for a context and fluid, if one exists.
    #[must_use]
    pub fn velocity(&self, context: AdvisoryContext, fluid: FluidCategory) -> Option<&BandTable> {
        let tables = match context {
            AdvisoryContext::Pipe => &self.pipe,
            AdvisoryContext::Nozzle => &self.nozzle,
        };
        tables.get(fluid)
    }
}

impl Default for AdvisoryTables {
    fn default() -> Self {
        Self {
            reynolds: reynolds(),
            pipe: VelocityTables {
                liquid: Some(pipe_liquid()),
                gas: Some(pipe_gas()),
                two_phase: None,
            },
            nozzle: VelocityTables {
                liquid: Some(nozzle_liquid()),
                gas: Some(nozzle_gas()),
                two_phase: Some(nozzle_two_phase()),
            },
        }
    }
}

/// Velocity tables for one advisory context, by fluid category.
///
/// A `None` entry means the context has no reference range for that fluid.
#[derive(Debug, Clone, PartialEq)]
pub struct VelocityTables {
    /// Table for liquids.
    pub liquid: Option<BandTable>,

    /// Table for gases and vapors.
    pub gas: Option<BandTable>,

    /// Table for two-phase mixtures.
    pub two_phase: Option<BandTable>,
}

impl VelocityTables {
    /// Returns the table for a fluid category, if one exists.
    #[must_use]
    pub fn get(&self, fluid: FluidCategory) -> Option<&BandTable> {
        match fluid {
            FluidCategory::Liquid => self.liquid.as_ref(),
            FluidCategory::Gas => self.gas.as_ref(),
            FluidCategory::TwoPhase => self.two_phase.as_ref(),
        }
    }
}

fn table(bands: Vec<RegimeBand>) -> BandTable {
    BandTable::new(bands).expect("reference band tables are valid partitions")
}

fn band(
    lower: Bound,
    upper: Bound,
    classification: Classification,
    severity: Severity,
    message: &'static str,
) -> RegimeBand {
    RegimeBand {
        lower,
        upper,
        classification,
        severity,
        message,
    }
}

/// Laminar below 2000, transitional from 2000 through 4000, turbulent above.
fn reynolds() -> BandTable {
    use Bound::{Exclusive, Inclusive, Unbounded};
    table(vec![
        band(
            Inclusive(0.0),
            Exclusive(LAMINAR_LIMIT),
            Classification::Laminar,
            Severity::Safe,
            "Viscous forces dominate; flow is smooth and predictable.",
        ),
        band(
            Inclusive(LAMINAR_LIMIT),
            Inclusive(TURBULENT_ONSET),
            Classification::Transitional,
            Severity::Caution,
            "Flow may alternate between laminar and turbulent; friction is uncertain.",
        ),
        band(
            Exclusive(TURBULENT_ONSET),
            Unbounded,
            Classification::Turbulent,
            Severity::Safe,
            "Inertial forces dominate; flow is fully turbulent.",
        ),
    ])
}

fn pipe_liquid() -> BandTable {
    use Bound::{Exclusive, Inclusive, Unbounded};
    table(vec![
        band(
            Exclusive(0.0),
            Exclusive(1.0),
            Classification::Low,
            Severity::Caution,
            "Low velocity. Risk of solid settling or poor scouring.",
        ),
        band(
            Inclusive(1.0),
            Inclusive(3.0),
            Classification::Recommended,
            Severity::Safe,
            "Velocity is in the recommended range for clean liquid flow.",
        ),
        band(
            Exclusive(3.0),
            Inclusive(5.0),
            Classification::High,
            Severity::Caution,
            "High velocity. Monitor for erosion and noise in long-term operation.",
        ),
        band(
            Exclusive(5.0),
            Unbounded,
            Classification::Excessive,
            Severity::Critical,
            "Velocity too high. Erosion or noise likely; consider resizing.",
        ),
    ])
}

fn pipe_gas() -> BandTable {
    use Bound::{Exclusive, Inclusive, Unbounded};
    table(vec![
        band(
            Exclusive(0.0),
            Exclusive(10.0),
            Classification::Low,
            Severity::Caution,
            "Low velocity. May cause flow instability or poor mixing.",
        ),
        band(
            Inclusive(10.0),
            Inclusive(40.0),
            Classification::Recommended,
            Severity::Safe,
            "Velocity is within the standard range for gas flow.",
        ),
        band(
            Exclusive(40.0),
            Inclusive(60.0),
            Classification::High,
            Severity::Caution,
            "High velocity. Monitor for noise and compressibility effects.",
        ),
        band(
            Exclusive(60.0),
            Unbounded,
            Classification::Excessive,
            Severity::Critical,
            "Velocity very high. Consider compressibility and pressure drop.",
        ),
    ])
}

/// Builds a three-band nozzle table with an open recommended range `(low, high)`.
fn nozzle(low: f64, high: f64, recommended: &'static str, outside: &'static str) -> BandTable {
    use Bound::{Exclusive, Inclusive, Unbounded};
    table(vec![
        band(
            Exclusive(0.0),
            Inclusive(low),
            Classification::Low,
            Severity::Caution,
            outside,
        ),
        band(
            Exclusive(low),
            Exclusive(high),
            Classification::Recommended,
            Severity::Safe,
            recommended,
        ),
        band(
            Inclusive(high),
            Unbounded,
            Classification::High,
            Severity::Caution,
            outside,
        ),
    ])
}

fn nozzle_liquid() -> BandTable {
    nozzle(
        2.0,
        15.0,
        "Velocity is within the recommended range for liquid nozzles.",
        "Velocity is outside the typical range for liquid nozzles. Check erosion and cavitation.",
    )
}

fn nozzle_gas() -> BandTable {
    nozzle(
        15.0,
        100.0,
        "Velocity is within the recommended range for gas nozzles.",
        "Velocity is outside the typical range for gas nozzles. Watch for noise or choking.",
    )
}

fn nozzle_two_phase() -> BandTable {
    nozzle(
        5.0,
        20.0,
        "Velocity is typical for two-phase nozzle discharge.",
        "Velocity is outside the suggested range. Confirm with two-phase discharge correlations.",
    )
}
