//! Reading and writing the simulator's pipe database format.
//!
//! The database is an XML file whose `<NetworkPipes>` element holds one
//! `<NetworkPipe>` per product variant. The simulator's own writer uses tab
//! indentation, a fixed attribute order, and integer-normalized numbers, and
//! diffs against hand-maintained databases must stay clean, so entries are
//! rendered by direct templating instead of a generic XML serializer.

use std::{fmt::Write as _, fs, path::Path, sync::LazyLock};

use regex::Regex;

use super::{CatalogError, NetworkPipe};

/// First entry ID used when no existing database provides one.
pub const DEFAULT_FIRST_ID: u64 = 1_100_000;

static ID_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"id="(\d+)""#).expect("literal pattern"));

static ENTRY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<NetworkPipe\b").expect("literal pattern"));

/// Formats a numeric value the way the database stores it.
///
/// Whole numbers lose their decimal part (`50.0` becomes `50`); everything
/// else keeps the shortest float representation.
#[must_use]
pub fn fmt_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Escapes the XML-significant characters in attribute values and text.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders one entry as a tab-indented `<NetworkPipe>` element at depth one.
#[must_use]
pub fn render_entry(pipe: &NetworkPipe) -> String {
    let mut xml = String::new();

    let _ = writeln!(
        xml,
        "\t<NetworkPipe id=\"{}\" color=\"{}\" categoryName=\"{}\" productName=\"{}\" manufacturerName=\"{}\">",
        pipe.id,
        escape(&pipe.color),
        escape(&pipe.category_name),
        escape(&pipe.product_name),
        escape(&pipe.manufacturer_name),
    );

    for parameter in &pipe.parameters {
        let _ = writeln!(
            xml,
            "\t\t<IBK:Parameter name=\"{}\" unit=\"{}\">{}</IBK:Parameter>",
            parameter.name,
            parameter.unit,
            fmt_value(parameter.value),
        );
    }

    if let Some(pn) = pipe.nominal_pressure {
        let _ = writeln!(xml, "\t\t<NominalPressure>{}</NominalPressure>", fmt_value(pn));
    }
    xml.push_str("\t\t<FixedUValueGiven>true</FixedUValueGiven>\n");
    let _ = writeln!(xml, "\t\t<PipeLayout>{}</PipeLayout>", pipe.layout.as_str());
    let _ = writeln!(
        xml,
        "\t\t<PipeMaterialStandard>{}</PipeMaterialStandard>",
        pipe.material_standard
    );

    xml.push_str("\t</NetworkPipe>\n");
    xml
}

/// Renders a full standalone database document.
#[must_use]
pub fn render_document(entries: &[NetworkPipe]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n<NetworkPipes>\n");
    for entry in entries {
        xml.push_str(&render_entry(entry));
    }
    xml.push_str("</NetworkPipes>\n");
    xml
}

/// Highest entry ID present in a database document.
///
/// Falls back to [`DEFAULT_FIRST_ID`] when the document has no IDs, so new
/// entries always continue the existing numbering.
#[must_use]
pub fn last_catalog_id(xml: &str) -> u64 {
    ID_ATTR
        .captures_iter(xml)
        .filter_map(|c| c[1].parse::<u64>().ok())
        .last()
        .unwrap_or(DEFAULT_FIRST_ID)
}

/// Counts the `<NetworkPipe>` entries in a document.
#[must_use]
pub fn count_entries(xml: &str) -> usize {
    ENTRY_TAG.find_iter(xml).count()
}

/// Inserts a rendered chunk of entries before the database's closing tag.
///
/// # Errors
///
/// Returns [`CatalogError::MissingAnchor`] when the document has no
/// `</NetworkPipes>` element.
pub fn merge_into(database: &str, chunk: &str) -> Result<String, CatalogError> {
    let anchor = database
        .rfind("</NetworkPipes>")
        .ok_or(CatalogError::MissingAnchor)?;

    let mut merged = String::with_capacity(database.len() + chunk.len());
    merged.push_str(&database[..anchor]);
    merged.push_str(chunk);
    merged.push_str(&database[anchor..]);
    Ok(merged)
}

/// Writes a standalone database document for the given entries.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] when the file cannot be written.
pub fn write_document(path: &Path, entries: &[NetworkPipe]) -> Result<(), CatalogError> {
    fs::write(path, render_document(entries)).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Merges a rendered chunk into an existing database file.
///
/// Reads `db_path`, inserts the chunk before the closing tag, writes the
/// result to `out_path`, and returns the merged document's entry count.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] on file failures and
/// [`CatalogError::MissingAnchor`] when `db_path` is not a pipe database.
pub fn merge_database(db_path: &Path, out_path: &Path, chunk: &str) -> Result<usize, CatalogError> {
    let database = fs::read_to_string(db_path).map_err(|source| CatalogError::Io {
        path: db_path.to_path_buf(),
        source,
    })?;
    let merged = merge_into(&database, chunk)?;
    fs::write(out_path, &merged).map_err(|source| CatalogError::Io {
        path: out_path.to_path_buf(),
        source,
    })?;
    Ok(count_entries(&merged))
}
