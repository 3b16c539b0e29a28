use super::{
    AdvisoryContext, ConduitGeometry, FlowAdvisor, FlowSpecification, FlowVelocity, Given,
    RegimeResults, ReynoldsNumber, SizingError, SizingResults,
};

/// Sizes a conduit for a flow and judges the result.
///
/// Solves for whichever of diameter or velocity is not [`Given`], checks the
/// velocity against the `context` table for the spec's fluid, and, when both
/// density and viscosity are specified, classifies the flow regime.
///
/// # Errors
///
/// Returns the first [`SizingError`] encountered; no partial results.
pub(crate) fn size(
    advisor: &FlowAdvisor,
    context: AdvisoryContext,
    spec: &FlowSpecification,
    given: Given,
) -> Result<SizingResults, SizingError> {
    let flow_rate = spec.flow_rate();

    let (geometry, velocity) = match given {
        Given::Velocity(velocity) => {
            let geometry = ConduitGeometry::for_flow(flow_rate, velocity)?;
            (geometry, velocity)
        }
        Given::Diameter(diameter) => {
            let geometry = ConduitGeometry::from_diameter(diameter)?;
            let velocity = FlowVelocity::through(flow_rate, &geometry)?.get();
            (geometry, velocity)
        }
    };

    let advisory = advisor.advise_velocity(spec.fluid(), velocity, context)?;

    let regime = match (spec.density(), spec.viscosity()) {
        (Some(density), Some(viscosity)) => {
            let reynolds =
                ReynoldsNumber::from_flow(density, velocity, geometry.diameter(), viscosity)?;
            let outcome = advisor.classify_reynolds_number(reynolds)?;
            Some(RegimeResults { reynolds, outcome })
        }
        _ => None,
    };

    Ok(SizingResults {
        mode: given.mode(),
        geometry,
        velocity,
        advisory,
        regime,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        dynamic_viscosity::pascal_second,
        f64::{DynamicViscosity, Length, MassDensity, Velocity, VolumeRate},
        length::meter,
        mass_density::kilogram_per_cubic_meter,
        velocity::meter_per_second,
        volume_rate::cubic_meter_per_hour,
    };

    use crate::models::fluid_flow::core::{CalculationMode, Classification, FluidCategory, Severity};

    fn water(m3ph: f64) -> FlowSpecification {
        FlowSpecification::new(
            VolumeRate::new::<cubic_meter_per_hour>(m3ph),
            FluidCategory::Liquid,
        )
        .unwrap()
    }

    #[test]
    fn diameter_mode() -> Result<(), SizingError> {
        let results = size(
            &FlowAdvisor::default(),
            AdvisoryContext::Pipe,
            &water(100.0),
            Given::Velocity(Velocity::new::<meter_per_second>(3.0)),
        )?;

        assert_eq!(results.mode, CalculationMode::Diameter);
        assert_relative_eq!(results.geometry.diameter().get::<meter>(), 0.1086, epsilon = 1e-4);
        assert_relative_eq!(results.velocity.get::<meter_per_second>(), 3.0);
        assert_eq!(results.advisory.severity, Severity::Safe);
        assert!(results.regime.is_none());
        Ok(())
    }

    #[test]
    fn velocity_mode_with_regime() -> Result<(), SizingError> {
        let spec = water(100.0)
            .with_density(MassDensity::new::<kilogram_per_cubic_meter>(1000.0))?
            .with_viscosity(DynamicViscosity::new::<pascal_second>(1e-3))?;

        let results = size(
            &FlowAdvisor::default(),
            AdvisoryContext::Pipe,
            &spec,
            Given::Diameter(Length::new::<meter>(0.05)),
        )?;

        // 100 m³/h through a 50 mm bore is about 14 m/s.
        assert_eq!(results.mode, CalculationMode::Velocity);
        assert_relative_eq!(
            results.velocity.get::<meter_per_second>(),
            14.147,
            epsilon = 1e-3
        );
        assert_eq!(results.advisory.classification, Classification::Excessive);

        let regime = results.regime.expect("density and viscosity were given");
        assert_relative_eq!(regime.reynolds.value(), 707_355.0, max_relative = 1e-4);
        assert_eq!(regime.outcome.classification, Classification::Turbulent);
        Ok(())
    }

    #[test]
    fn regime_needs_both_properties() -> Result<(), SizingError> {
        let spec = water(1.0).with_density(MassDensity::new::<kilogram_per_cubic_meter>(1000.0))?;
        let results = size(
            &FlowAdvisor::default(),
            AdvisoryContext::Nozzle,
            &spec,
            Given::Velocity(Velocity::new::<meter_per_second>(5.0)),
        )?;
        assert!(results.regime.is_none());
        Ok(())
    }

    #[test]
    fn fails_atomically() {
        let spec = FlowSpecification::new(
            VolumeRate::new::<cubic_meter_per_hour>(10.0),
            FluidCategory::TwoPhase,
        )
        .unwrap();

        let err = size(
            &FlowAdvisor::default(),
            AdvisoryContext::Pipe,
            &spec,
            Given::Velocity(Velocity::new::<meter_per_second>(8.0)),
        )
        .unwrap_err();
        assert!(matches!(err, SizingError::UnrecognizedCategory { .. }));

        let err = size(
            &FlowAdvisor::default(),
            AdvisoryContext::Nozzle,
            &spec,
            Given::Diameter(Length::new::<meter>(-0.1)),
        )
        .unwrap_err();
        assert!(matches!(err, SizingError::InvalidInput { quantity: "diameter", .. }));
    }
}
