use thiserror::Error;
use uom::si::{
    f64::{Length, ThermalConductivity},
    length::meter,
};

use crate::support::constraint::{Constraint, NonNegative, StrictlyPositive};

/// A thermal spec that fails validation, one variant per precondition.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InvalidSpec {
    /// The target U-value is zero, negative, or `NaN`.
    #[error("target U-value must be positive: {target:?}")]
    TargetUValue { target: ThermalConductivity },

    /// The insulation conductivity is zero, negative, or `NaN`.
    #[error("insulation conductivity must be positive: {lambda:?}")]
    InsulationConductivity { lambda: ThermalConductivity },

    /// The wall conductivity is zero, negative, or `NaN`.
    #[error("wall conductivity must be positive: {lambda:?}")]
    WallConductivity { lambda: ThermalConductivity },

    /// The inner diameter is zero, negative, or `NaN`.
    #[error("inner diameter must be positive: {di:?}")]
    InnerDiameter { di: Length },

    /// The outer diameter is zero, negative, or `NaN`.
    #[error("outer diameter must be positive: {da:?}")]
    OuterDiameter { da: Length },

    /// The outer protective layer thickness is negative or `NaN`.
    #[error("outer layer thickness must not be negative: {thickness:?}")]
    OuterLayer { thickness: Length },

    /// The wall has no thickness (or a negative one).
    #[error("outer diameter {da:?} must exceed inner diameter {di:?}")]
    DiameterOrder { di: Length, da: Length },

    /// The search bound for the insulation thickness is not positive.
    #[error("maximum insulation thickness must be positive: {max:?}")]
    MaxThickness { max: Length },
}

/// Geometry and material inputs for sizing the insulation of one pipe variant.
///
/// The cross-section model is fixed: an inner wall, the insulation to be
/// sized, and an outer protective layer (made of the wall material), all
/// concentric cylinders. `target_u_value` is the overall heat-transfer
/// coefficient per unit pipe length the assembly must reach.
///
/// Fields are plain quantities; [`ThermalSpec::validate`] classifies every
/// physically invalid combination before any computation runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalSpec {
    /// Target overall heat-transfer coefficient, W/(m·K).
    pub target_u_value: ThermalConductivity,

    /// Thermal conductivity of the insulation material.
    pub lambda_insulation: ThermalConductivity,

    /// Thermal conductivity of the wall (and outer layer) material.
    pub lambda_wall: ThermalConductivity,

    /// Inner diameter of the pipe wall.
    pub inner_diameter: Length,

    /// Outer diameter of the pipe wall (inner diameter of the insulation).
    pub outer_diameter: Length,

    /// Thickness of the outer protective layer. May be zero.
    pub outer_layer: Length,

    /// Upper search bound for the insulation thickness.
    pub max_thickness: Length,
}

impl ThermalSpec {
    /// Default upper search bound for the insulation thickness, in meters.
    pub const DEFAULT_MAX_THICKNESS: f64 = 1.0;

    /// Creates a spec with the default maximum insulation thickness of one meter.
    #[must_use]
    pub fn new(
        target_u_value: ThermalConductivity,
        lambda_insulation: ThermalConductivity,
        lambda_wall: ThermalConductivity,
        inner_diameter: Length,
        outer_diameter: Length,
        outer_layer: Length,
    ) -> Self {
        Self {
            target_u_value,
            lambda_insulation,
            lambda_wall,
            inner_diameter,
            outer_diameter,
            outer_layer,
            max_thickness: Length::new::<meter>(Self::DEFAULT_MAX_THICKNESS),
        }
    }

    /// Replaces the upper search bound for the insulation thickness.
    #[must_use]
    pub fn with_max_thickness(mut self, max_thickness: Length) -> Self {
        self.max_thickness = max_thickness;
        self
    }

    /// Checks every precondition, reporting the first violation found.
    ///
    /// # Errors
    ///
    /// Returns the [`InvalidSpec`] variant for the offending field.
    pub fn validate(&self) -> Result<(), InvalidSpec> {
        if StrictlyPositive::check(&self.target_u_value).is_err() {
            return Err(InvalidSpec::TargetUValue {
                target: self.target_u_value,
            });
        }
        if StrictlyPositive::check(&self.lambda_insulation).is_err() {
            return Err(InvalidSpec::InsulationConductivity {
                lambda: self.lambda_insulation,
            });
        }
        if StrictlyPositive::check(&self.lambda_wall).is_err() {
            return Err(InvalidSpec::WallConductivity {
                lambda: self.lambda_wall,
            });
        }
        if StrictlyPositive::check(&self.inner_diameter).is_err() {
            return Err(InvalidSpec::InnerDiameter {
                di: self.inner_diameter,
            });
        }
        if StrictlyPositive::check(&self.outer_diameter).is_err() {
            return Err(InvalidSpec::OuterDiameter {
                da: self.outer_diameter,
            });
        }
        if NonNegative::check(&self.outer_layer).is_err() {
            return Err(InvalidSpec::OuterLayer {
                thickness: self.outer_layer,
            });
        }
        if self.outer_diameter <= self.inner_diameter {
            return Err(InvalidSpec::DiameterOrder {
                di: self.inner_diameter,
                da: self.outer_diameter,
            });
        }
        if StrictlyPositive::check(&self.max_thickness).is_err() {
            return Err(InvalidSpec::MaxThickness {
                max: self.max_thickness,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{length::millimeter, thermal_conductivity::watt_per_meter_kelvin};

    fn steel_spec() -> ThermalSpec {
        ThermalSpec::new(
            ThermalConductivity::new::<watt_per_meter_kelvin>(0.3),
            ThermalConductivity::new::<watt_per_meter_kelvin>(0.027),
            ThermalConductivity::new::<watt_per_meter_kelvin>(50.0),
            Length::new::<millimeter>(80.0),
            Length::new::<millimeter>(88.0),
            Length::new::<millimeter>(3.0),
        )
    }

    #[test]
    fn valid_spec_passes() {
        assert!(steel_spec().validate().is_ok());
    }

    #[test]
    fn each_precondition_is_classified() {
        let zero_u = ThermalSpec {
            target_u_value: ThermalConductivity::new::<watt_per_meter_kelvin>(0.0),
            ..steel_spec()
        };
        assert!(matches!(
            zero_u.validate(),
            Err(InvalidSpec::TargetUValue { .. })
        ));

        let bad_insulation = ThermalSpec {
            lambda_insulation: ThermalConductivity::new::<watt_per_meter_kelvin>(-0.027),
            ..steel_spec()
        };
        assert!(matches!(
            bad_insulation.validate(),
            Err(InvalidSpec::InsulationConductivity { .. })
        ));

        let bad_wall = ThermalSpec {
            lambda_wall: ThermalConductivity::new::<watt_per_meter_kelvin>(0.0),
            ..steel_spec()
        };
        assert!(matches!(
            bad_wall.validate(),
            Err(InvalidSpec::WallConductivity { .. })
        ));

        let bad_di = ThermalSpec {
            inner_diameter: Length::new::<millimeter>(0.0),
            ..steel_spec()
        };
        assert!(matches!(
            bad_di.validate(),
            Err(InvalidSpec::InnerDiameter { .. })
        ));

        let bad_da = ThermalSpec {
            outer_diameter: Length::new::<millimeter>(-88.0),
            ..steel_spec()
        };
        assert!(matches!(
            bad_da.validate(),
            Err(InvalidSpec::OuterDiameter { .. })
        ));

        let bad_layer = ThermalSpec {
            outer_layer: Length::new::<millimeter>(-3.0),
            ..steel_spec()
        };
        assert!(matches!(
            bad_layer.validate(),
            Err(InvalidSpec::OuterLayer { .. })
        ));

        let bad_max = steel_spec().with_max_thickness(Length::new::<meter>(0.0));
        assert!(matches!(
            bad_max.validate(),
            Err(InvalidSpec::MaxThickness { .. })
        ));
    }

    #[test]
    fn equal_diameters_are_rejected_not_a_math_fault() {
        let degenerate = ThermalSpec {
            inner_diameter: Length::new::<millimeter>(88.0),
            ..steel_spec()
        };
        assert!(matches!(
            degenerate.validate(),
            Err(InvalidSpec::DiameterOrder { .. })
        ));
    }

    #[test]
    fn inverted_diameters_are_rejected() {
        let inverted = ThermalSpec {
            inner_diameter: Length::new::<millimeter>(90.0),
            ..steel_spec()
        };
        assert!(matches!(
            inverted.validate(),
            Err(InvalidSpec::DiameterOrder { .. })
        ));
    }
}
