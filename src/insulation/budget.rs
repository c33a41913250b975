use uom::si::{length::meter, ratio::ratio};

use crate::support::units::LinearThermalResistance;

use super::ThermalSpec;

/// Resistance targets derived from a [`ThermalSpec`].
///
/// `required` is the total radial resistance per unit pipe length implied by
/// the target U-value; `wall` is the share the bare inner wall already
/// provides. Both are fixed for a given spec; only the insulation and outer
/// layer terms vary with the trial thickness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistanceBudget {
    /// Total resistance the assembly must reach, `π / U`.
    pub required: LinearThermalResistance,

    /// Resistance of the inner wall layer, `ln(da/di) / (2·λ_wall)`.
    pub wall: LinearThermalResistance,
}

impl ResistanceBudget {
    /// Derives the budget for a validated spec.
    #[must_use]
    pub fn new(spec: &ThermalSpec) -> Self {
        let required = std::f64::consts::PI / spec.target_u_value;
        let diameter_ratio = (spec.outer_diameter / spec.inner_diameter).get::<ratio>();
        let wall = diameter_ratio.ln() / (2.0 * spec.lambda_wall);
        Self { required, wall }
    }

    /// Whether the bare wall alone meets or exceeds the required resistance.
    #[must_use]
    pub fn wall_is_sufficient(&self) -> bool {
        self.wall >= self.required
    }

    /// Residual of the conduction model at a trial insulation thickness.
    ///
    /// Total resistance minus required resistance, in m·K/W, evaluated for a
    /// thickness in meters. Negative means the assembly still loses too much
    /// heat; the residual is non-decreasing in the thickness for physical
    /// material pairings, which is what makes the root unique.
    ///
    /// At `thickness ≤ 0` the insulation and outer layer terms vanish, so the
    /// residual reduces to `wall - required` without touching a logarithm.
    #[must_use]
    pub fn residual(&self, spec: &ThermalSpec, thickness: f64) -> f64 {
        let wall = self.wall.value;
        let required = self.required.value;

        if thickness <= 0.0 {
            return wall - required;
        }

        let da = spec.outer_diameter.get::<meter>();
        let outer_layer = spec.outer_layer.get::<meter>();
        let lambda_insulation = spec.lambda_insulation.value;
        let lambda_wall = spec.lambda_wall.value;

        let insulated = da + 2.0 * thickness;
        let jacketed = insulated + 2.0 * outer_layer;

        let r_insulation = (insulated / da).ln() / (2.0 * lambda_insulation);
        let r_outer = (jacketed / insulated).ln() / (2.0 * lambda_wall);

        wall + r_insulation + r_outer - required
    }
}
