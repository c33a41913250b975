use serde::Deserialize;

/// One pipe product variant, as exported from a manufacturer data sheet.
///
/// Field names map the original German spreadsheet headers; sheets are
/// exported to UTF-8 CSV with those headers intact. Every cell may be empty,
/// which deserializes to `None` and later makes the corresponding catalog
/// field disappear instead of being written as a placeholder.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PipeRow {
    #[serde(rename = "Produkt", default)]
    pub product: Option<String>,

    #[serde(rename = "Hersteller", default)]
    pub manufacturer: Option<String>,

    #[serde(rename = "Außendurchmesser [mm]", default)]
    pub outer_diameter: Option<f64>,

    #[serde(rename = "Wandstärke [mm]", default)]
    pub wall_thickness: Option<f64>,

    #[serde(rename = "Rohrrauigkeit [mm]", default)]
    pub roughness: Option<f64>,

    #[serde(rename = "Material Rohrwand", default)]
    pub wall_material: Option<String>,

    #[serde(rename = "Dichte Rohrwand [kg/m3]", default)]
    pub wall_density: Option<f64>,

    #[serde(rename = "Wärmekapazität Rohrwand [J/kgK]", default)]
    pub wall_heat_capacity: Option<f64>,

    #[serde(rename = "Außendurchmesser gesamt mit Isolierung und Schutzschicht [mm]", default)]
    pub total_outer_diameter: Option<f64>,

    #[serde(rename = "Einzel- oder Doppelrohr", default)]
    pub layout: Option<String>,

    #[serde(rename = "Abstand Vor- und Rücklauf [mm]", default)]
    pub spacing: Option<f64>,

    #[serde(rename = "U-Wert [W/mK]", default)]
    pub u_value: Option<f64>,

    #[serde(rename = "PN [bar]", default)]
    pub nominal_pressure: Option<f64>,

    #[serde(rename = "Wärmeleitfähigkeit Dämmung [W/mK]", default)]
    pub lambda_insulation: Option<f64>,

    #[serde(rename = "Wandstärke Mantel [mm]", default)]
    pub jacket_thickness: Option<f64>,
}

impl PipeRow {
    /// Whether the row carries neither a product name nor an outer diameter.
    ///
    /// Data sheets pad blocks with empty separator lines; those are dropped
    /// during ingestion.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        let no_product = self
            .product
            .as_deref()
            .is_none_or(|p| p.trim().is_empty());
        no_product && self.outer_diameter.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "\
Produkt,Hersteller,Außendurchmesser [mm],Wandstärke [mm],Rohrrauigkeit [mm],Material Rohrwand,Einzel- oder Doppelrohr,Abstand Vor- und Rücklauf [mm],U-Wert [W/mK],PN [bar],Außendurchmesser gesamt mit Isolierung und Schutzschicht [mm]
Stahlrohr DN 80,isoplus-Fernwärmetechnik,88.9,3.2,0.1,Stahl,Einzelrohr,,0.285,25,225
,,,,,,,,,,
PE-Rohr 32,isoplus-Fernwärmetechnik,32,2.9,0.007,Kunststoff (PE-Xa),Doppelrohr,25,0.31,10,111
";

    fn rows() -> Vec<PipeRow> {
        csv::Reader::from_reader(SHEET.as_bytes())
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn german_headers_map_to_fields() {
        let rows = rows();
        let first = &rows[0];

        assert_eq!(first.product.as_deref(), Some("Stahlrohr DN 80"));
        assert_eq!(
            first.manufacturer.as_deref(),
            Some("isoplus-Fernwärmetechnik")
        );
        assert_eq!(first.outer_diameter, Some(88.9));
        assert_eq!(first.wall_thickness, Some(3.2));
        assert_eq!(first.u_value, Some(0.285));
        assert_eq!(first.nominal_pressure, Some(25.0));
        assert_eq!(first.total_outer_diameter, Some(225.0));
        // Column absent from this export entirely.
        assert_eq!(first.wall_density, None);
    }

    #[test]
    fn empty_cells_become_none() {
        let rows = rows();
        assert_eq!(rows[0].spacing, None);
        assert_eq!(rows[2].spacing, Some(25.0));
    }

    #[test]
    fn separator_lines_are_blank() {
        let rows = rows();
        assert!(rows[1].is_blank());
        assert!(!rows[0].is_blank());
        assert!(!rows[2].is_blank());
    }
}
