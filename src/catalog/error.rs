use std::path::PathBuf;

use thiserror::Error;

use crate::insulation::InsulationError;

/// Errors that can occur while building or merging a pipe catalog.
///
/// Row-level variants ([`CatalogError::MissingField`],
/// [`CatalogError::Insulation`]) are terminal for the offending row only;
/// the batch builder logs them and continues with the remaining rows.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The CSV export could not be read or parsed.
    #[error("failed to read catalog rows from {}", .path.display())]
    ReadRows {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A file operation failed.
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row lacks a column the catalog entry cannot do without.
    #[error("row {product:?} is missing required column {field:?}")]
    MissingField {
        product: String,
        field: &'static str,
    },

    /// Insulation sizing failed for one row.
    #[error("insulation sizing failed for {product:?}")]
    Insulation {
        product: String,
        #[source]
        source: InsulationError,
    },

    /// An existing database file has no closing tag to merge into.
    #[error("database has no closing </NetworkPipes> tag to merge into")]
    MissingAnchor,
}
