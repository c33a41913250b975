//! Insulation sizing for a target U-value.
//!
//! Sizing inverts the multi-layer cylindrical-wall conduction model: the
//! total radial resistance of wall, insulation, and outer protective layer
//! must equal the resistance implied by the target U-value, and the
//! insulation thickness is the one unknown. The equation is transcendental
//! in the thickness, so the root is found numerically with a bracketed
//! bisection ([`crate::support::rootfind`]).
//!
//! Each solve is a pure function of its inputs: no shared state, no I/O,
//! safe to run for many catalog rows in parallel.

mod budget;
mod config;
mod error;
mod requirement;
mod spec;

pub use budget::ResistanceBudget;
pub use config::SolveConfig;
pub use error::InsulationError;
pub use requirement::InsulationRequirement;
pub use spec::{InvalidSpec, ThermalSpec};

use uom::si::{f64::Length, length::meter};

use crate::support::{rootfind, units::meter_kelvin_per_watt};

/// Lower search bound for the insulation thickness, in meters.
///
/// Slightly above zero so the insulation term's logarithm stays clear of
/// `ln(1) = 0` at the bracket edge.
const LOWER_BOUND: f64 = 1e-9;

/// Computes the insulation thickness that meets the spec's target U-value.
///
/// Returns [`InsulationRequirement::None`] when the bare wall alone already
/// meets or exceeds the target; that outcome is logged as advisory
/// information, not treated as a failure.
///
/// # Errors
///
/// Returns [`InsulationError`] when a precondition fails, the target cannot
/// be reached within `spec.max_thickness`, or the solver fails to converge.
pub fn solve(
    spec: &ThermalSpec,
    config: SolveConfig,
) -> Result<InsulationRequirement, InsulationError> {
    spec.validate()?;

    let budget = ResistanceBudget::new(spec);

    if budget.wall_is_sufficient() {
        log::info!(
            "no insulation needed: the bare wall already meets the target U-value {:?}",
            spec.target_u_value
        );
        return Ok(InsulationRequirement::None);
    }

    let upper_bound = spec.max_thickness.get::<meter>();
    let residual = |thickness: f64| budget.residual(spec, thickness);

    let f_lower = residual(LOWER_BOUND);
    let f_upper = residual(upper_bound);

    // The wall-sufficiency check above already covers this, but evaluating
    // the residual at the numeric lower bound can disagree with the exact
    // check, so both guards stay.
    if f_lower > 0.0 {
        log::info!(
            "no insulation needed: the bare wall already meets the target U-value {:?}",
            spec.target_u_value
        );
        return Ok(InsulationRequirement::None);
    }

    if f_upper < 0.0 {
        return Err(InsulationError::TargetUnattainable {
            target: spec.target_u_value,
            max_thickness: spec.max_thickness,
        });
    }

    // Bracket precondition for the bisection below. With a monotone residual
    // and the guards above this cannot fire; NaN residuals land here.
    if !(f_lower <= 0.0 && f_upper >= 0.0) {
        return Err(InsulationError::NoBracketedRoot { f_lower, f_upper });
    }

    let solution = rootfind::solve(residual, [LOWER_BOUND, upper_bound], &config.bisection())?;

    if solution.status != rootfind::Status::Converged {
        return Err(InsulationError::MaxIters {
            residual: meter_kelvin_per_watt(solution.residual),
            iters: solution.iters,
        });
    }

    Ok(InsulationRequirement::Thickness(Length::new::<meter>(
        solution.x,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::ThermalConductivity, length::millimeter,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    fn spec(
        u: f64,
        lambda_insulation: f64,
        lambda_wall: f64,
        di_mm: f64,
        da_mm: f64,
        outer_mm: f64,
    ) -> ThermalSpec {
        ThermalSpec::new(
            ThermalConductivity::new::<watt_per_meter_kelvin>(u),
            ThermalConductivity::new::<watt_per_meter_kelvin>(lambda_insulation),
            ThermalConductivity::new::<watt_per_meter_kelvin>(lambda_wall),
            Length::new::<millimeter>(di_mm),
            Length::new::<millimeter>(da_mm),
            Length::new::<millimeter>(outer_mm),
        )
    }

    #[test]
    fn bonded_steel_pipe_scenario() {
        // DN80 bonded steel pipe with PUR insulation and a PE-equivalent
        // jacket modeled as wall material.
        let spec = spec(0.3, 0.027, 50.0, 80.0, 88.0, 3.0);

        let requirement = solve(&spec, SolveConfig::default()).unwrap();
        let thickness = requirement.thickness().expect("insulation is required");
        let t = thickness.get::<meter>();

        assert!(t > 1e-9);
        assert!(t < 1.0);
        assert_relative_eq!(t, 0.0334478124, epsilon = 1e-8);
    }

    #[test]
    fn solved_thickness_closes_the_budget() {
        let spec = spec(0.3, 0.027, 50.0, 80.0, 88.0, 3.0);
        let budget = ResistanceBudget::new(&spec);

        let requirement = solve(&spec, SolveConfig::default()).unwrap();
        let t = requirement.thickness().unwrap().get::<meter>();

        // residual(t*) = R(t*) - required, so R(t*) must match the required
        // resistance to well within 1e-6 relative.
        let achieved = budget.residual(&spec, t) + budget.required.value;
        assert_relative_eq!(achieved, budget.required.value, max_relative = 1e-6);
    }

    #[test]
    fn sufficient_bare_wall_needs_no_insulation() {
        // A thick plastic wall against a loose target: the wall resistance
        // ln(125/100)/0.8 already exceeds pi/15.
        let spec = spec(15.0, 0.04, 0.4, 100.0, 125.0, 3.0);

        let requirement = solve(&spec, SolveConfig::default()).unwrap();
        assert_eq!(requirement, InsulationRequirement::None);
    }

    #[test]
    fn unattainable_target_reports_the_bound() {
        let spec = spec(0.05, 0.04, 50.0, 80.0, 88.0, 3.0);

        let err = solve(&spec, SolveConfig::default()).unwrap_err();
        match err {
            InsulationError::TargetUnattainable {
                target,
                max_thickness,
            } => {
                assert_relative_eq!(target.get::<watt_per_meter_kelvin>(), 0.05);
                assert_relative_eq!(max_thickness.get::<meter>(), 1.0);
            }
            other => panic!("expected TargetUnattainable, got {other:?}"),
        }
    }

    #[test]
    fn invalid_spec_is_rejected_before_solving() {
        let spec = spec(-0.3, 0.027, 50.0, 80.0, 88.0, 3.0);
        assert!(matches!(
            solve(&spec, SolveConfig::default()),
            Err(InsulationError::InvalidSpec(InvalidSpec::TargetUValue { .. }))
        ));
    }

    #[test]
    fn iteration_cap_surfaces_as_max_iters() {
        let spec = spec(0.3, 0.027, 50.0, 80.0, 88.0, 3.0);
        let config = SolveConfig {
            max_iters: 2,
            thickness_tol: Length::new::<meter>(0.0),
            resistance_tol: crate::support::units::meter_kelvin_per_watt(0.0),
        };

        let err = solve(&spec, config).unwrap_err();
        match err {
            InsulationError::MaxIters { iters, .. } => assert_eq!(iters, 2),
            other => panic!("expected MaxIters, got {other:?}"),
        }
    }

    #[test]
    fn shrinking_the_bound_makes_a_reachable_target_unattainable() {
        let spec = spec(0.3, 0.027, 50.0, 80.0, 88.0, 3.0)
            .with_max_thickness(Length::new::<millimeter>(10.0));

        assert!(matches!(
            solve(&spec, SolveConfig::default()),
            Err(InsulationError::TargetUnattainable { .. })
        ));
    }
}
