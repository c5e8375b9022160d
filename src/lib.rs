/*!
# Inventory Tracker

A single-page inventory data-entry tool backed by a remote spreadsheet,
built in Rust.

## Overview

The tool reads item rows from a remote sheet, lets a user adjust a per-date
quantity or replace it with a free-text comment, and writes the edited
column back in one batch update. Submitting also produces a two-column CSV
of the day's non-zero entries for download.

## Architecture

The application follows a client-server architecture:

### Frontend Layer
- One embedded HTML page: a date dropdown and, per item row, a label,
  decrement/increment buttons, a numeric stepper and a free-text comment
  field, plus a submit button.

### Backend Layer
- **Technologies**: Rust, axum
- **Core Components**:
  - Column-Letter Encoder - Zero-based index to bijective base-26 labels
  - Row Reconciler - Quantity-vs-comment precedence and export filtering
  - Data Cache - Memoizes the fetched table until invalidated
  - Session Editor State - Per-date edits, seeded lazily per session
  - Sheet Gateway - Fetch-all-records and write-one-column, over HTTP or
    in memory

### Remote Store
- Google Sheets values API, driven through the gateway trait; the first two
  sheet columns are fixed (Items plus one other), the rest are date columns.

## Modules

- **column**: column letter encoding and decoding
- **table**: typed inventory table and tagged cell values
- **reconcile**: per-row persisted-value / export-row derivation
- **session**: per-date editable state with clamped transitions
- **cache**: memoize-until-invalidated table cache
- **gateway**: the sheet gateway trait, HTTP and in-memory backends
- **export**: CSV artifact construction
- **submit**: the submission workflow tying the above together
- **app**: routing and handlers (requires the `web` feature)

## REST API Endpoints

- `GET /` - the page
- `GET /api/table?date={label}` - table plus session rows for a date
- `POST /api/adjust` - apply one edit action to a row
- `POST /api/submit` - write a date's column back and return the CSV
*/

// Re-export all modules so they appear in the documentation
pub mod cache;
pub mod column;
pub mod export;
pub mod gateway;
pub mod reconcile;
pub mod session;
pub mod submit;
pub mod table;

#[cfg(feature = "web")]
pub mod app;

/// Re-export the core types to make the crate easier to use
pub use cache::DataCache;
pub use column::{column_index, column_letter};
pub use export::CsvArtifact;
pub use gateway::{GatewayError, SheetGateway, SheetRecords};
pub use reconcile::{ExportRow, reconcile_rows};
pub use session::{DateEdits, SessionState};
pub use submit::{SubmitOutcome, submit_column};
pub use table::{CellValue, InventoryTable};
