/// Wall material of a catalog pipe, as detected from the data sheet.
///
/// Steel bonded pipes and PE pipes are the two families the simulator's
/// material standards distinguish; everything not explicitly marked as
/// plastic is treated as steel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallMaterial {
    Steel,
    Plastic,
}

impl WallMaterial {
    /// Classifies a row by its wall material cell and product name.
    ///
    /// The material cell marks plastic walls with "Kunststoff". Flexible
    /// "isoflex" product lines keep a steel medium pipe despite a plastic
    /// mention in their material cell, so they are always steel.
    #[must_use]
    pub fn classify(wall_material: Option<&str>, product: &str) -> Self {
        if product.to_lowercase().contains("isoflex") {
            return Self::Steel;
        }
        let is_plastic =
            wall_material.is_some_and(|m| m.to_lowercase().contains("kunststoff"));
        if is_plastic { Self::Plastic } else { Self::Steel }
    }

    /// Default wall density, kg/m³.
    #[must_use]
    pub fn density(self) -> f64 {
        match self {
            Self::Steel => 7900.0,
            Self::Plastic => 960.0,
        }
    }

    /// Default wall heat capacity, J/(kg·K).
    #[must_use]
    pub fn heat_capacity(self) -> f64 {
        match self {
            Self::Steel => 480.0,
            Self::Plastic => 1900.0,
        }
    }

    /// Default wall thermal conductivity, W/(m·K).
    #[must_use]
    pub fn conductivity(self) -> f64 {
        match self {
            Self::Steel => 50.0,
            Self::Plastic => 0.4,
        }
    }

    /// Material standard identifier expected by the simulator.
    #[must_use]
    pub fn standard(self) -> &'static str {
        match self {
            Self::Steel => "EnStandard",
            Self::Plastic => "PlasticPipe",
        }
    }

    /// Bilingual category name for the catalog entry.
    #[must_use]
    pub fn category_name(self) -> &'static str {
        match self {
            Self::Steel => "DE: Stahl | EN: Steel",
            Self::Plastic => "DE: PE isoliert | EN: PE insulated",
        }
    }
}
