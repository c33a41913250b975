use uom::si::{
    f64::{Length, ThermalConductivity},
    length::millimeter,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::insulation::{self, InsulationRequirement, SolveConfig, ThermalSpec};

use super::{CatalogError, PipeRow, WallMaterial};

/// A named numeric field of a catalog entry, tagged with its unit.
#[derive(Debug, Clone, PartialEq)]
pub struct IbkParameter {
    pub name: &'static str,
    pub unit: &'static str,
    pub value: f64,
}

/// Single or twin pipe arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeLayout {
    SinglePipe,
    TwinPipe,
}

impl PipeLayout {
    /// Element text expected by the simulator.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SinglePipe => "SinglePipe",
            Self::TwinPipe => "TwinPipe",
        }
    }
}

/// One `NetworkPipe` record of the simulator's pipe database.
///
/// Parameters keep their construction order; the XML writer renders them
/// as-is, so the order here is the order in the file.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkPipe {
    pub id: u64,
    pub color: String,
    pub category_name: String,
    pub product_name: String,
    pub manufacturer_name: String,
    pub parameters: Vec<IbkParameter>,
    pub nominal_pressure: Option<f64>,
    pub layout: PipeLayout,
    pub material_standard: &'static str,
}

impl NetworkPipe {
    /// Builds a catalog entry from one data sheet row.
    ///
    /// Fields absent from the row are omitted from the entry rather than
    /// written as zeros. When the row carries both a target U-value and an
    /// insulation conductivity, the required insulation thickness is solved
    /// for and stored alongside the conductivity; a bare wall that already
    /// meets the target stores neither.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the row has no outer diameter or wall
    /// thickness, or if insulation sizing fails. Either way the failure is
    /// limited to this row.
    pub fn from_row(
        row: &PipeRow,
        id: u64,
        color: String,
        default_manufacturer: &str,
    ) -> Result<Self, CatalogError> {
        let product = row.product.clone().unwrap_or_default();

        let outer_diameter = row.outer_diameter.ok_or_else(|| CatalogError::MissingField {
            product: product.clone(),
            field: "Außendurchmesser [mm]",
        })?;
        let wall_thickness = row.wall_thickness.ok_or_else(|| CatalogError::MissingField {
            product: product.clone(),
            field: "Wandstärke [mm]",
        })?;

        let manufacturer = row
            .manufacturer
            .as_deref()
            .unwrap_or(default_manufacturer)
            .split('-')
            .next()
            .unwrap_or_default()
            .to_uppercase();

        let material = WallMaterial::classify(row.wall_material.as_deref(), &product);
        let density = row.wall_density.unwrap_or_else(|| material.density());
        let heat_capacity = row
            .wall_heat_capacity
            .unwrap_or_else(|| material.heat_capacity());
        let lambda_wall = material.conductivity();

        let mut parameters = vec![IbkParameter {
            name: "DiameterOutside",
            unit: "mm",
            value: outer_diameter,
        }];
        parameters.push(IbkParameter {
            name: "ThicknessWall",
            unit: "mm",
            value: wall_thickness,
        });
        if let Some(roughness) = row.roughness {
            parameters.push(IbkParameter {
                name: "RoughnessWall",
                unit: "mm",
                value: roughness,
            });
        }
        parameters.push(IbkParameter {
            name: "DensityWall",
            unit: "kg/m3",
            value: density,
        });
        parameters.push(IbkParameter {
            name: "HeatCapacityWall",
            unit: "J/kgK",
            value: heat_capacity,
        });
        parameters.push(IbkParameter {
            name: "ThermalConductivityWall",
            unit: "W/mK",
            value: lambda_wall,
        });

        if let (Some(u_value), Some(lambda_insulation)) = (row.u_value, row.lambda_insulation) {
            let spec = ThermalSpec::new(
                ThermalConductivity::new::<watt_per_meter_kelvin>(u_value),
                ThermalConductivity::new::<watt_per_meter_kelvin>(lambda_insulation),
                ThermalConductivity::new::<watt_per_meter_kelvin>(lambda_wall),
                Length::new::<millimeter>(outer_diameter - 2.0 * wall_thickness),
                Length::new::<millimeter>(outer_diameter),
                Length::new::<millimeter>(row.jacket_thickness.unwrap_or(0.0)),
            );
            let requirement = insulation::solve(&spec, SolveConfig::default()).map_err(|source| {
                CatalogError::Insulation {
                    product: product.clone(),
                    source,
                }
            })?;
            if let InsulationRequirement::Thickness(thickness) = requirement {
                parameters.push(IbkParameter {
                    name: "ThicknessInsulation",
                    unit: "mm",
                    value: thickness.get::<millimeter>(),
                });
                parameters.push(IbkParameter {
                    name: "ThermalConductivityInsulation",
                    unit: "W/mK",
                    value: lambda_insulation,
                });
            }
        }

        if let Some(u_value) = row.u_value {
            parameters.push(IbkParameter {
                name: "FixedUValue",
                unit: "W/mK",
                value: u_value,
            });
        }
        if let Some(total) = row.total_outer_diameter {
            parameters.push(IbkParameter {
                name: "FixedTotalOuterDiameter",
                unit: "mm",
                value: total,
            });
        }
        if let Some(spacing) = row.spacing {
            parameters.push(IbkParameter {
                name: "PipeSpacing",
                unit: "mm",
                value: spacing,
            });
        }

        let layout = if row
            .layout
            .as_deref()
            .is_some_and(|l| l.contains("Einzelrohr"))
        {
            PipeLayout::SinglePipe
        } else {
            PipeLayout::TwinPipe
        };

        Ok(Self {
            id,
            color,
            category_name: material.category_name().to_string(),
            product_name: product,
            manufacturer_name: manufacturer,
            parameters,
            nominal_pressure: row.nominal_pressure,
            layout,
            material_standard: material.standard(),
        })
    }

    /// Looks up a parameter by name.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&IbkParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}
