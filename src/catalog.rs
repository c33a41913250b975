//! Pipe catalog pipeline: manufacturer data sheets in, simulator database out.
//!
//! The pipeline is a row-by-row mapping. Each data sheet row becomes one
//! [`NetworkPipe`] entry with a display color derived from its diameter
//! block, material constants derived from its wall material, and, when the
//! row provides an insulation conductivity, an insulation thickness solved
//! by [`crate::insulation`]. Entries are rendered and merged by [`xml`] in
//! the exact format the simulator's hand-maintained databases use.
//!
//! Row failures are logged and skipped so one malformed variant never loses
//! a whole data sheet.

mod color;
mod entry;
mod error;
mod material;
mod row;
pub mod xml;

pub use color::{ColorScale, assign_colors, block_sizes};
pub use entry::{IbkParameter, NetworkPipe, PipeLayout};
pub use error::CatalogError;
pub use material::WallMaterial;
pub use row::PipeRow;

use std::{io, path::Path};

use xml::{DEFAULT_FIRST_ID, last_catalog_id};

/// Hands out consecutive entry IDs, continuing an existing database's numbering.
#[derive(Debug, Clone, Copy)]
pub struct IdCounter {
    last: u64,
}

impl IdCounter {
    /// Continues numbering after the given ID.
    #[must_use]
    pub fn starting_after(last: u64) -> Self {
        Self { last }
    }

    /// Seeds the counter from an existing database file.
    ///
    /// A missing file starts the numbering at the default first ID, matching
    /// a fresh database.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] when the file exists but cannot be read.
    pub fn seeded_from_file(path: &Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            return Ok(Self::starting_after(DEFAULT_FIRST_ID));
        }
        let database = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::starting_after(last_catalog_id(&database)))
    }

    /// Returns the next free ID.
    pub fn next(&mut self) -> u64 {
        self.last += 1;
        self.last
    }
}

/// Reads the rows of a data sheet export, dropping blank separator lines.
///
/// # Errors
///
/// Returns [`CatalogError::ReadRows`] when the file cannot be opened or a
/// record fails to parse.
pub fn read_rows(path: &Path) -> Result<Vec<PipeRow>, CatalogError> {
    let reader = csv::Reader::from_path(path).map_err(|source| CatalogError::ReadRows {
        path: path.to_path_buf(),
        source,
    })?;
    rows_from_reader(reader).map_err(|source| CatalogError::ReadRows {
        path: path.to_path_buf(),
        source,
    })
}

/// Deserializes and filters rows from an already-open CSV reader.
///
/// # Errors
///
/// Returns the first record that fails to parse.
pub fn rows_from_reader<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<PipeRow>, csv::Error> {
    let mut rows = Vec::new();
    for record in reader.deserialize::<PipeRow>() {
        let row = record?;
        if !row.is_blank() {
            rows.push(row);
        }
    }
    Ok(rows)
}

/// Builds catalog entries for a sheet's rows.
///
/// Colors are assigned per diameter block across the whole sheet, and IDs
/// are drawn from `ids` in row order. Rows that cannot become entries (a
/// missing required column, a failed insulation solve) are logged and
/// skipped; the rest of the sheet is unaffected.
#[must_use]
pub fn build_entries(
    rows: &[PipeRow],
    ids: &mut IdCounter,
    default_manufacturer: &str,
) -> Vec<NetworkPipe> {
    let complete: Vec<&PipeRow> = rows
        .iter()
        .filter(|row| {
            if row.outer_diameter.is_none() {
                log::warn!(
                    "skipping row {:?}: no outer diameter",
                    row.product.as_deref().unwrap_or_default()
                );
                return false;
            }
            true
        })
        .collect();

    let diameters: Vec<f64> = complete
        .iter()
        .filter_map(|row| row.outer_diameter)
        .collect();
    let colors = assign_colors(&diameters);

    let mut entries = Vec::with_capacity(complete.len());
    for (row, color) in complete.into_iter().zip(colors) {
        match NetworkPipe::from_row(row, ids.next(), color, default_manufacturer) {
            Ok(entry) => entries.push(entry),
            Err(err) => log::warn!("skipping row: {err}"),
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "\
Produkt,Hersteller,Außendurchmesser [mm],Wandstärke [mm],Material Rohrwand,Einzel- oder Doppelrohr,U-Wert [W/mK],PN [bar]
DN 25,isoplus,33.7,2.6,Stahl,Einzelrohr,0.31,25
DN 32,isoplus,42.4,2.6,Stahl,Einzelrohr,0.29,25
DN 40,isoplus,48.3,2.6,Stahl,Einzelrohr,0.28,25
DN 25 Doppel,isoplus,33.7,2.6,Stahl,Doppelrohr,0.25,25
DN 32 Doppel,isoplus,42.4,2.6,Stahl,Doppelrohr,0.24,25
";

    fn sheet_rows() -> Vec<PipeRow> {
        rows_from_reader(csv::Reader::from_reader(SHEET.as_bytes())).unwrap()
    }

    #[test]
    fn ids_continue_in_row_order() {
        let rows = sheet_rows();
        let mut ids = IdCounter::starting_after(1100500);

        let entries = build_entries(&rows, &mut ids, "ISOPLUS");
        assert_eq!(entries.len(), 5);

        let assigned: Vec<u64> = entries.iter().map(|e| e.id).collect();
        assert_eq!(assigned, vec![1100501, 1100502, 1100503, 1100504, 1100505]);
        assert_eq!(ids.next(), 1100506);
    }

    #[test]
    fn color_ramp_restarts_at_the_second_diameter_block() {
        let rows = sheet_rows();
        let mut ids = IdCounter::starting_after(0);

        let entries = build_entries(&rows, &mut ids, "ISOPLUS");

        // Both blocks start at the bottom of the turbo ramp.
        assert_eq!(entries[0].color, entries[3].color);
        assert_ne!(entries[0].color, entries[1].color);
        assert_ne!(entries[3].color, entries[4].color);
    }

    #[test]
    fn malformed_rows_are_skipped_not_fatal() {
        let mut rows = sheet_rows();
        rows[2].wall_thickness = None;
        let mut ids = IdCounter::starting_after(0);

        let entries = build_entries(&rows, &mut ids, "ISOPLUS");
        assert_eq!(entries.len(), 4);
        assert!(entries.iter().all(|e| e.product_name != "DN 40"));
    }

    #[test]
    fn counter_defaults_for_a_fresh_database() {
        let mut counter =
            IdCounter::seeded_from_file(Path::new("does/not/exist.xml")).unwrap();
        assert_eq!(counter.next(), xml::DEFAULT_FIRST_ID + 1);
    }
}
