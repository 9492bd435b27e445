//! FILENAME: core/persistence/src/csv_writer.rs

use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{Terminator, WriterBuilder};
use pivot_engine::PivotTable;
use tempfile::NamedTempFile;

use crate::{ExportError, CSV_DELIMITER, CSV_EXTENSION, UTF8_BOM};

/// Writes `header` and `rows` to `destination` as BOM-prefixed UTF-8 CSV
/// separated by semicolons.
///
/// The file is first written next to the destination and then renamed over
/// it, so a failed export leaves any previous file untouched. Every row must
/// be exactly as wide as the header, and a table without columns must also
/// be without rows.
pub fn export_table<S: AsRef<str>>(
    header: &[S],
    rows: &[Vec<S>],
    destination: &Path,
) -> Result<(), ExportError> {
    if header.is_empty() && !rows.is_empty() {
        return Err(ExportError::EmptyHeader { rows: rows.len() });
    }
    if let Some((row, cells)) = rows
        .iter()
        .enumerate()
        .find(|(_, cells)| cells.len() != header.len())
    {
        return Err(ExportError::RaggedRow {
            row,
            expected: header.len(),
            found: cells.len(),
        });
    }

    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ExportError::io(destination, e))?;
    tmp.write_all(UTF8_BOM)
        .map_err(|e| ExportError::io(destination, e))?;

    // A zero-width table has no rows either; only the BOM is written.
    if !header.is_empty() {
        let mut writer = WriterBuilder::new()
            .delimiter(CSV_DELIMITER)
            .terminator(Terminator::CRLF)
            .from_writer(tmp.as_file_mut());

        writer
            .write_record(header.iter().map(|c| c.as_ref().as_bytes()))
            .map_err(|e| ExportError::csv(destination, e))?;
        for row in rows {
            writer
                .write_record(row.iter().map(|c| c.as_ref().as_bytes()))
                .map_err(|e| ExportError::csv(destination, e))?;
        }
        writer.flush().map_err(|e| ExportError::io(destination, e))?;
    }

    tmp.as_file()
        .sync_all()
        .map_err(|e| ExportError::io(destination, e))?;
    tmp.persist(destination)
        .map_err(|e| ExportError::io(destination, e.error))?;

    log::debug!(
        target: "EXPORT",
        "wrote {} rows x {} columns to {}",
        rows.len(),
        header.len(),
        destination.display()
    );
    Ok(())
}

/// Exports a pivot as header, data rows and totals row.
pub fn export_pivot(pivot: &PivotTable, destination: &Path) -> Result<(), ExportError> {
    let grid = pivot.to_grid();
    export_table(&grid.header, &grid.rows, destination)
}

/// Appends `.csv` when `path` carries no extension.
pub fn ensure_csv_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(CSV_EXTENSION)
    }
}
