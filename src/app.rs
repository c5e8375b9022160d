use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::task::spawn_blocking;
use tower_http::cors::CorsLayer;

use log::info;

use crate::cache::DataCache;
use crate::gateway::SheetGateway;
use crate::session::SessionState;
use crate::submit::submit_column;
use crate::table::InventoryTable;

pub struct AppState {
    gateway: Box<dyn SheetGateway + Sync>,
    cache: Mutex<DataCache>,
    sessions: Mutex<SessionState>,
}

#[derive(Deserialize)]
struct TableQuery {
    date: Option<String>,
}

/// One user interaction with a row.
#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum EditAction {
    Increment,
    Decrement,
    SetQuantity { value: u32 },
    SetComment { value: String },
}

#[derive(Deserialize)]
struct AdjustRequest {
    date: String,
    row: usize,
    action: EditAction,
}

#[derive(Deserialize)]
struct SubmitRequest {
    date: String,
}

#[derive(Serialize)]
struct TableResponse {
    items: Vec<String>,
    dates: Vec<String>,
    selected: Option<String>,
    quantities: Vec<u32>,
    comments: Vec<String>,
}

#[derive(Serialize)]
struct AdjustResponse {
    status: String,
    message: Option<String>,
    quantity: Option<u32>,
    comment: Option<String>,
}

#[derive(Serialize)]
struct SubmitResponse {
    status: String,
    message: Option<String>,
    filename: Option<String>,
    csv: Option<String>,
    updated_rows: Option<usize>,
    exported_rows: Option<usize>,
}

impl SubmitResponse {
    fn error(message: String) -> Self {
        SubmitResponse {
            status: "error".to_string(),
            message: Some(message),
            filename: None,
            csv: None,
            updated_rows: None,
            exported_rows: None,
        }
    }
}

pub async fn run(
    bind_addr: &str,
    gateway: Box<dyn SheetGateway + Sync>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Setup app state
    let app_state = Arc::new(AppState {
        gateway,
        cache: Mutex::new(DataCache::new()),
        sessions: Mutex::new(SessionState::new()),
    });

    // Build router
    let app = Router::new()
        .route("/", get(serve_page))
        .route("/api/table", get(get_table))
        .route("/api/adjust", post(adjust_row))
        .route("/api/submit", post(submit_date))
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = TcpListener::bind(bind_addr).await?;
    info!("Listening on http://{bind_addr}");
    axum::serve(listener, app).await?;

    Ok(())
}

async fn serve_page() -> Html<&'static str> {
    Html(include_str!("./static/index.html"))
}

// The gateway's HTTP client is blocking, so every handler that can touch it
// runs its work on the blocking pool.

async fn get_table(
    Query(params): Query<TableQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    spawn_blocking(move || table_response(&state, params.date))
        .await
        .expect("table task panicked")
}

async fn adjust_row(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AdjustRequest>,
) -> Response {
    spawn_blocking(move || adjust_response(&state, payload))
        .await
        .expect("adjust task panicked")
}

async fn submit_date(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SubmitRequest>,
) -> Response {
    spawn_blocking(move || submit_response(&state, payload))
        .await
        .expect("submit task panicked")
}

/// Fetch the (cached) table, or surface the fetch error as a bare 500.
/// The read path has no retry or fallback.
fn fetch_table(state: &AppState) -> Result<InventoryTable, Response> {
    let mut cache = state.cache.lock().unwrap();
    match cache.get_or_fetch(state.gateway.as_ref()) {
        Ok(table) => Ok(table.clone()),
        Err(e) => Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()),
    }
}

/// The table plus the (lazily seeded) session rows for the selected date.
fn table_response(state: &AppState, date: Option<String>) -> Response {
    let table = match fetch_table(state) {
        Ok(table) => table,
        Err(resp) => return resp,
    };

    // Fall back to the first date column when none was asked for
    let selected = date
        .filter(|d| table.date_position(d).is_some())
        .or_else(|| table.date_labels().first().cloned());

    let (quantities, comments) = match &selected {
        Some(date) => {
            let mut sessions = state.sessions.lock().unwrap();
            let edits = sessions
                .edits_for(&table, date)
                .expect("selected date exists in the table");
            (edits.quantities.clone(), edits.comments.clone())
        }
        None => (Vec::new(), Vec::new()),
    };

    Json(TableResponse {
        items: table.items().to_vec(),
        dates: table.date_labels().to_vec(),
        selected,
        quantities,
        comments,
    })
    .into_response()
}

fn adjust_response(state: &AppState, payload: AdjustRequest) -> Response {
    let table = match fetch_table(state) {
        Ok(table) => table,
        Err(resp) => return resp,
    };

    let mut sessions = state.sessions.lock().unwrap();
    let Some(edits) = sessions.edits_for(&table, &payload.date) else {
        return Json(AdjustResponse {
            status: "error".to_string(),
            message: Some(format!("unknown date column {:?}", payload.date)),
            quantity: None,
            comment: None,
        })
        .into_response();
    };

    let row = payload.row;
    let applied = match payload.action {
        EditAction::Increment => edits.increment(row),
        EditAction::Decrement => edits.decrement(row),
        EditAction::SetQuantity { value } => edits.set_quantity(row, value),
        EditAction::SetComment { value } => edits.set_comment(row, value),
    };

    if !applied {
        return Json(AdjustResponse {
            status: "error".to_string(),
            message: Some(format!("row {row} out of range")),
            quantity: None,
            comment: None,
        })
        .into_response();
    }

    Json(AdjustResponse {
        status: "ok".to_string(),
        message: None,
        quantity: edits.quantities.get(row).copied(),
        comment: edits.comments.get(row).cloned(),
    })
    .into_response()
}

/// Write the selected date's column back to the sheet and return the CSV.
///
/// The remote write blocks until it returns or fails; on failure the error
/// description is reported and the session edits are left untouched so the
/// user may retry.
fn submit_response(state: &AppState, payload: SubmitRequest) -> Response {
    let mut cache = state.cache.lock().unwrap();
    let table = match cache.get_or_fetch(state.gateway.as_ref()) {
        Ok(table) => table.clone(),
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
        }
    };

    let mut sessions = state.sessions.lock().unwrap();
    let Some(edits) = sessions.edits_for(&table, &payload.date) else {
        return Json(SubmitResponse::error(format!(
            "unknown date column {:?}",
            payload.date
        )))
        .into_response();
    };

    match submit_column(
        &table,
        edits,
        &payload.date,
        state.gateway.as_ref(),
        &mut cache,
    ) {
        Ok(outcome) => Json(SubmitResponse {
            status: "ok".to_string(),
            message: None,
            filename: Some(outcome.csv.filename),
            csv: Some(outcome.csv.content),
            updated_rows: Some(outcome.updated_rows),
            exported_rows: Some(outcome.exported_rows),
        })
        .into_response(),
        Err(e) => Json(SubmitResponse::error(e.to_string())).into_response(),
    }
}
