use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, RecordExport, ensure_writable, export_csv, export_json};
use crate::models::AttendanceRecord;
use crate::utils::date::period_bounds;
use chrono::FixedOffset;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Rows to export, oldest day first, optionally limited to a period.
    pub fn build_rows(
        records: &[AttendanceRecord],
        offset: FixedOffset,
        range: &Option<String>,
    ) -> AppResult<Vec<RecordExport>> {
        let bounds = match range {
            Some(r) => Some(period_bounds(r).map_err(AppError::InvalidDate)?),
            None => None,
        };

        let mut selected: Vec<&AttendanceRecord> = records
            .iter()
            .filter(|r| match bounds {
                Some((from, to)) => r.date >= from && r.date <= to,
                None => true,
            })
            .collect();
        selected.sort_by_key(|r| (r.date, r.checked_in_at));

        Ok(selected
            .into_iter()
            .map(|r| RecordExport::from_record(r, offset))
            .collect())
    }

    /// Write the records to `file`. Returns the number of exported rows.
    pub fn export(
        records: &[AttendanceRecord],
        offset: FixedOffset,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let rows = Self::build_rows(records, offset, range)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}
