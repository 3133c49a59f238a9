// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{ExportData, ExportRow};
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Writes `data` to `path`. An existing file is only replaced with
    /// `force` or after confirmation; an empty table still produces a file
    /// (header only for CSV/XLSX, `[]` for JSON).
    pub fn export(data: &ExportData, format: ExportFormat, path: &Path, force: bool) -> AppResult<()> {
        ensure_writable(path, force)?;

        if data.is_empty() {
            warning("No rows to export for the selected table.");
        }

        match data {
            ExportData::Players(rows) => write_rows(rows, format, path, "players"),
            ExportData::Lineups(rows) => write_rows(rows, format, path, "lineups"),
            ExportData::Impact(rows) => write_rows(rows, format, path, "impact"),
            ExportData::Flow(rows) => write_rows(rows, format, path, "flow"),
        }
    }
}

fn write_rows<T: ExportRow>(
    rows: &[T],
    format: ExportFormat,
    path: &Path,
    sheet: &str,
) -> AppResult<()> {
    match format {
        ExportFormat::Csv => export_csv(rows, path),
        ExportFormat::Json => export_json(rows, path),
        ExportFormat::Xlsx => export_xlsx(rows, path, sheet),
    }
}
