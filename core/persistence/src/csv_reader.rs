// FILENAME: core\persistence\src\csv_reader.rs

use crate::{ExportError, CSV_DELIMITER, UTF8_BOM};
use csv::ReaderBuilder;
use std::path::Path;

/// Reads a file written by `export_table` back into its header and rows.
/// The first record is the header; an empty file yields an empty table.
pub fn load_table(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>), ExportError> {
    let bytes = std::fs::read(path).map_err(|e| ExportError::io(path, e))?;
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);

    let mut reader = ReaderBuilder::new()
        .delimiter(CSV_DELIMITER)
        .has_headers(false)
        .from_reader(body);

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ExportError::csv(path, e))?;
        records.push(record.iter().map(str::to_string).collect::<Vec<String>>());
    }

    let mut records = records.into_iter();
    let header = records.next().unwrap_or_default();
    Ok((header, records.collect()))
}
