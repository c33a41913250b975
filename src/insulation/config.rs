use uom::si::{f64::Length, length::meter};

use crate::support::{rootfind, units::LinearThermalResistance, units::meter_kelvin_per_watt};

/// Solver configuration for the insulation thickness search.
#[derive(Debug, Clone, Copy)]
pub struct SolveConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance for the thickness search variable.
    pub thickness_tol: Length,

    /// Absolute tolerance for the resistance residual (achieved - required).
    pub resistance_tol: LinearThermalResistance,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            thickness_tol: Length::new::<meter>(1e-12),
            resistance_tol: meter_kelvin_per_watt(1e-12),
        }
    }
}

impl SolveConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> rootfind::Config {
        rootfind::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.thickness_tol.get::<meter>(),
            x_rel_tol: 0.0,
            residual_tol: self.resistance_tol.value,
        }
    }
}
