use thiserror::Error;
use uom::si::f64::{Length, ThermalConductivity};

use crate::support::{rootfind, units::LinearThermalResistance};

use super::InvalidSpec;

/// Errors that can occur while sizing insulation for a target U-value.
///
/// Every failure is terminal for the pipe variant being processed; batch
/// callers should catch per variant and continue with the rest of the
/// catalog.
#[derive(Debug, Error)]
pub enum InsulationError {
    /// A precondition on the thermal spec failed.
    ///
    /// Retrying with the same inputs cannot succeed.
    #[error("invalid thermal spec")]
    InvalidSpec(#[from] InvalidSpec),

    /// Even the maximum insulation thickness cannot reach the target.
    ///
    /// Retry with a larger search bound or a better insulation material
    /// (lower conductivity).
    #[error("target U-value {target:?} is unattainable within {max_thickness:?} of insulation")]
    TargetUnattainable {
        /// The requested overall heat-transfer coefficient.
        target: ThermalConductivity,

        /// The search bound that was attempted.
        max_thickness: Length,
    },

    /// The residual does not cross zero in the search interval.
    ///
    /// Unreachable when the resistance model is monotone; surfaced
    /// separately from [`InsulationError::TargetUnattainable`] so an
    /// internal-consistency fault is never mistaken for a material limit.
    #[error("residual does not cross zero in the search interval: f(lo)={f_lower}, f(hi)={f_upper}")]
    NoBracketedRoot {
        /// Residual at the lower search bound, m·K/W.
        f_lower: f64,

        /// Residual at the upper search bound, m·K/W.
        f_upper: f64,
    },

    /// The bisection solver rejected its inputs.
    #[error("bisection solver error")]
    Bisection(#[from] rootfind::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best resistance residual achieved.
        residual: LinearThermalResistance,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
