use uom::si::{f64::Velocity, velocity::meter_per_second};

use crate::support::constraint::StrictlyPositive;

use super::{
    AdvisoryContext, AdvisoryOutcome, AdvisoryTables, FluidCategory, ReynoldsNumber, SizingError,
};

/// Classifies flow conditions against engineering reference ranges.
///
/// An advisor holds its [`AdvisoryTables`] and is otherwise stateless;
/// every classification is a pure function of its arguments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowAdvisor {
    tables: AdvisoryTables,
}

impl FlowAdvisor {
    /// Creates an advisor that judges against the given tables.
    #[must_use]
    pub fn new(tables: AdvisoryTables) -> Self {
        Self { tables }
    }

    /// Returns the tables this advisor judges against.
    #[must_use]
    pub fn tables(&self) -> &AdvisoryTables {
        &self.tables
    }

    /// Classifies a Reynolds number into a flow regime.
    ///
    /// With the reference table, 2000 and 4000 both classify as transitional.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidInput`] if `reynolds` is negative or `NaN`.
    ///
    /// # Example
    ///
    /// ```
    /// use twine_flow_sizing::models::fluid_flow::{Classification, FlowAdvisor};
    ///
    /// let advisor = FlowAdvisor::default();
    /// let outcome = advisor.classify_reynolds(2000.0).unwrap();
    /// assert_eq!(outcome.classification, Classification::Transitional);
    /// assert_eq!(outcome.label(), "Transitional Flow");
    /// ```
    pub fn classify_reynolds(&self, reynolds: f64) -> Result<AdvisoryOutcome, SizingError> {
        self.classify_reynolds_number(ReynoldsNumber::new(reynolds)?)
    }

    /// Classifies a validated [`ReynoldsNumber`] into a flow regime.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidInput`] only if a custom Reynolds table
    /// does not cover the value.
    pub fn classify_reynolds_number(
        &self,
        reynolds: ReynoldsNumber,
    ) -> Result<AdvisoryOutcome, SizingError> {
        self.tables
            .reynolds
            .classify(reynolds.value())
            .map(|band| band.outcome())
            .map_err(SizingError::invalid("Reynolds number"))
    }

    /// Judges a flow velocity against the reference range for a fluid in a context.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidInput`] if `velocity` is not strictly
    /// positive, or [`SizingError::UnrecognizedCategory`] if the context has
    /// no table for `fluid`.
    ///
    /// # Example
    ///
    /// ```
    /// use twine_flow_sizing::models::fluid_flow::{
    ///     AdvisoryContext, FlowAdvisor, FluidCategory, Severity,
    /// };
    /// use uom::si::{f64::Velocity, velocity::meter_per_second};
    ///
    /// let advisor = FlowAdvisor::default();
    /// let outcome = advisor
    ///     .advise_velocity(
    ///         FluidCategory::Liquid,
    ///         Velocity::new::<meter_per_second>(6.0),
    ///         AdvisoryContext::Pipe,
    ///     )
    ///     .unwrap();
    /// assert_eq!(outcome.severity, Severity::Critical);
    /// ```
    pub fn advise_velocity(
        &self,
        fluid: FluidCategory,
        velocity: Velocity,
        context: AdvisoryContext,
    ) -> Result<AdvisoryOutcome, SizingError> {
        let velocity = StrictlyPositive::new(velocity)
            .map_err(SizingError::invalid("velocity"))?
            .into_inner();

        let table = self.tables.velocity(context, fluid).ok_or_else(|| {
            SizingError::unrecognized(
                match context {
                    AdvisoryContext::Pipe => "fluid category for pipe-flow advisory",
                    AdvisoryContext::Nozzle => "fluid category for nozzle advisory",
                },
                fluid.to_string(),
            )
        })?;

        table
            .classify(velocity.get::<meter_per_second>())
            .map(|band| band.outcome())
            .map_err(SizingError::invalid("velocity"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::fluid_flow::core::{
        BandTable, Bound, Classification, RegimeBand, Severity,
    };
    use crate::support::constraint::ConstraintError;

    fn mps(v: f64) -> Velocity {
        Velocity::new::<meter_per_second>(v)
    }

    fn advise(fluid: FluidCategory, v: f64, context: AdvisoryContext) -> AdvisoryOutcome {
        FlowAdvisor::default()
            .advise_velocity(fluid, mps(v), context)
            .unwrap()
    }

    #[test]
    fn reynolds_boundaries() {
        let advisor = FlowAdvisor::default();
        let regime = |re| advisor.classify_reynolds(re).unwrap().classification;

        assert_eq!(regime(0.0), Classification::Laminar);
        assert_eq!(regime(1999.0), Classification::Laminar);
        assert_eq!(regime(1999.999), Classification::Laminar);
        assert_eq!(regime(2000.0), Classification::Transitional);
        assert_eq!(regime(4000.0), Classification::Transitional);
        assert_eq!(regime(4000.001), Classification::Turbulent);
        assert_eq!(regime(4001.0), Classification::Turbulent);
    }

    #[test]
    fn reynolds_labels_and_severity() {
        let advisor = FlowAdvisor::default();
        assert_eq!(advisor.classify_reynolds(500.0).unwrap().label(), "Laminar Flow");
        assert_eq!(advisor.classify_reynolds(1e5).unwrap().label(), "Turbulent Flow");
        assert_eq!(
            advisor.classify_reynolds(3000.0).unwrap().severity,
            Severity::Caution
        );
    }

    #[test]
    fn rejects_negative_reynolds() {
        let err = FlowAdvisor::default().classify_reynolds(-1.0).unwrap_err();
        assert_eq!(
            err,
            SizingError::InvalidInput {
                quantity: "Reynolds number",
                source: ConstraintError::Negative,
            }
        );
    }

    #[test]
    fn pipe_liquid_bands() {
        use AdvisoryContext::Pipe;
        use FluidCategory::Liquid;

        let cases = [
            (0.5, Classification::Low, Severity::Caution),
            (1.0, Classification::Recommended, Severity::Safe),
            (2.0, Classification::Recommended, Severity::Safe),
            (3.0, Classification::Recommended, Severity::Safe),
            (4.0, Classification::High, Severity::Caution),
            (5.0, Classification::High, Severity::Caution),
            (6.0, Classification::Excessive, Severity::Critical),
        ];
        for (v, classification, severity) in cases {
            let outcome = advise(Liquid, v, Pipe);
            assert_eq!(outcome.classification, classification, "v = {v}");
            assert_eq!(outcome.severity, severity, "v = {v}");
        }
    }

    #[test]
    fn pipe_gas_bands() {
        use AdvisoryContext::Pipe;
        use FluidCategory::Gas;

        assert_eq!(advise(Gas, 9.9, Pipe).classification, Classification::Low);
        assert_eq!(advise(Gas, 10.0, Pipe).severity, Severity::Safe);
        assert_eq!(advise(Gas, 40.0, Pipe).severity, Severity::Safe);
        assert_eq!(advise(Gas, 60.0, Pipe).classification, Classification::High);
        assert_eq!(advise(Gas, 60.1, Pipe).severity, Severity::Critical);
    }

    #[test]
    fn nozzle_bands_are_open_intervals() {
        use AdvisoryContext::Nozzle;
        use FluidCategory::{Gas, Liquid, TwoPhase};

        assert_eq!(advise(Gas, 50.0, Nozzle).severity, Severity::Safe);
        assert_eq!(advise(Gas, 5.0, Nozzle).severity, Severity::Caution);
        assert_eq!(advise(Gas, 15.0, Nozzle).classification, Classification::Low);
        assert_eq!(advise(Gas, 100.0, Nozzle).classification, Classification::High);

        assert_eq!(advise(Liquid, 2.0, Nozzle).severity, Severity::Caution);
        assert_eq!(advise(Liquid, 10.0, Nozzle).severity, Severity::Safe);
        assert_eq!(advise(Liquid, 15.0, Nozzle).severity, Severity::Caution);

        assert_eq!(advise(TwoPhase, 5.0, Nozzle).severity, Severity::Caution);
        assert_eq!(advise(TwoPhase, 12.0, Nozzle).severity, Severity::Safe);
        assert_eq!(advise(TwoPhase, 20.0, Nozzle).severity, Severity::Caution);
    }

    #[test]
    fn nozzle_never_reports_critical() {
        for fluid in FluidCategory::ALL {
            for v in [0.1, 1.0, 10.0, 100.0, 1000.0] {
                assert_ne!(
                    advise(fluid, v, AdvisoryContext::Nozzle).severity,
                    Severity::Critical
                );
            }
        }
    }

    #[test]
    fn same_velocity_differs_by_context() {
        let pipe = advise(FluidCategory::Liquid, 10.0, AdvisoryContext::Pipe);
        let nozzle = advise(FluidCategory::Liquid, 10.0, AdvisoryContext::Nozzle);
        assert_eq!(pipe.severity, Severity::Critical);
        assert_eq!(nozzle.severity, Severity::Safe);
    }

    #[test]
    fn advice_is_idempotent() {
        let advisor = FlowAdvisor::default();
        let first = advisor
            .advise_velocity(FluidCategory::Gas, mps(42.0), AdvisoryContext::Pipe)
            .unwrap();
        for _ in 0..10 {
            let again = advisor
                .advise_velocity(FluidCategory::Gas, mps(42.0), AdvisoryContext::Pipe)
                .unwrap();
            assert_eq!(again, first);
        }
    }

    #[test]
    fn rejects_non_positive_velocity() {
        let advisor = FlowAdvisor::default();
        for v in [0.0, -2.0, f64::NAN] {
            let err = advisor
                .advise_velocity(FluidCategory::Liquid, mps(v), AdvisoryContext::Pipe)
                .unwrap_err();
            assert!(matches!(err, SizingError::InvalidInput { quantity: "velocity", .. }));
        }
    }

    #[test]
    fn pipe_has_no_two_phase_table() {
        let err = FlowAdvisor::default()
            .advise_velocity(FluidCategory::TwoPhase, mps(8.0), AdvisoryContext::Pipe)
            .unwrap_err();
        assert_eq!(
            err,
            SizingError::UnrecognizedCategory {
                kind: "fluid category for pipe-flow advisory",
                value: "two-phase".into(),
            }
        );
    }

    #[test]
    fn custom_tables() {
        let mut tables = AdvisoryTables::default();
        tables.pipe.two_phase = Some(
            BandTable::new(vec![
                RegimeBand {
                    lower: Bound::Exclusive(0.0),
                    upper: Bound::Inclusive(20.0),
                    classification: Classification::Recommended,
                    severity: Severity::Safe,
                    message: "ok",
                },
                RegimeBand {
                    lower: Bound::Exclusive(20.0),
                    upper: Bound::Unbounded,
                    classification: Classification::Excessive,
                    severity: Severity::Critical,
                    message: "slug flow likely",
                },
            ])
            .unwrap(),
        );
        let advisor = FlowAdvisor::new(tables);

        let outcome = advisor
            .advise_velocity(FluidCategory::TwoPhase, mps(25.0), AdvisoryContext::Pipe)
            .unwrap();
        assert_eq!(outcome.severity, Severity::Critical);
        assert_eq!(outcome.message, "slug flow likely");

        // Untouched tables keep their reference values.
        let outcome = advisor
            .advise_velocity(FluidCategory::Liquid, mps(2.0), AdvisoryContext::Pipe)
            .unwrap();
        assert!(outcome.is_safe());
    }
}
