use log::info;

use crate::cache::DataCache;
use crate::export::{self, CsvArtifact};
use crate::gateway::{GatewayError, SheetGateway, column_range};
use crate::reconcile::reconcile_rows;
use crate::session::DateEdits;
use crate::table::InventoryTable;

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Rows written back to the sheet (the whole column).
    pub updated_rows: usize,
    /// Rows that qualified for the export.
    pub exported_rows: usize,
    pub csv: CsvArtifact,
}

/// Push the edits for one date back to the sheet.
///
/// Reconciles every row, writes the full column in one batch update, then
/// invalidates the cache and builds the CSV artifact. A write error is
/// returned as-is with no retry, no partial-write detection, and no change
/// to the edits, so the caller may simply try again.
pub fn submit_column(
    table: &InventoryTable,
    edits: &DateEdits,
    date: &str,
    gateway: &dyn SheetGateway,
    cache: &mut DataCache,
) -> Result<SubmitOutcome, GatewayError> {
    let (persisted, export_rows) =
        reconcile_rows(table.items(), &edits.quantities, &edits.comments);

    let col_index = table
        .sheet_column_index(date)
        .ok_or_else(|| GatewayError::Malformed(format!("unknown date column {date:?}")))?;

    let range = column_range(col_index, persisted.len());
    let values: Vec<String> = persisted.iter().map(|v| v.to_raw()).collect();

    gateway.write_column(&range, &values)?;

    // Only reached on success; a failed write leaves the cache warm and the
    // edits untouched
    cache.invalidate();
    info!("updated column {} for {}", range, date);

    Ok(SubmitOutcome {
        updated_rows: values.len(),
        exported_rows: export_rows.len(),
        csv: export::build_artifact(date, &export_rows),
    })
}
