#![cfg(not(tarpaulin_include))]

use std::env;

use log::{info, warn};

use inventory_tracker::app;
use inventory_tracker::gateway::{HttpSheetGateway, MemorySheetGateway, SheetCredentials, SheetGateway};

/// Main entry point for the web application
///
/// Reads configuration from the environment, parses the service-account
/// credentials once, and starts the server. Without credentials the server
/// falls back to an in-memory demo sheet so the page stays usable locally.
///
/// # Environment
/// * `INVENTORY_SHEET_CREDENTIALS` - service-account JSON (the one secret)
/// * `INVENTORY_SPREADSHEET_ID` - id of the target spreadsheet
/// * `INVENTORY_ACCESS_TOKEN` - pre-issued bearer token for the sheet API
/// * `INVENTORY_BIND_ADDR` - listen address, default 127.0.0.1:3000
///
/// # Returns
/// * `Result<(), Box<dyn std::error::Error>>` - Success or error object
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let bind_addr =
        env::var("INVENTORY_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

    let gateway: Box<dyn SheetGateway + Sync> = match (
        env::var("INVENTORY_SHEET_CREDENTIALS"),
        env::var("INVENTORY_SPREADSHEET_ID"),
        env::var("INVENTORY_ACCESS_TOKEN"),
    ) {
        (Ok(raw_creds), Ok(spreadsheet_id), Ok(token)) => {
            // A credential that is present but unparseable is fatal
            let credentials = SheetCredentials::from_json(&raw_creds)?;
            Box::new(HttpSheetGateway::new(&credentials, spreadsheet_id, token))
        }
        _ => {
            warn!("sheet credentials not configured, serving the in-memory demo sheet");
            Box::new(MemorySheetGateway::demo())
        }
    };

    info!("starting inventory tracker on {bind_addr}");
    app::run(&bind_addr, gateway).await
}
