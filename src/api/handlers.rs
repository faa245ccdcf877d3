//! API request handlers
//!
//! Handlers for all REST API endpoints. Requests reference workbooks by
//! path; failures come back as envelopes, never as panics.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::excel::{FormattedWriter, SheetReader};
use crate::reformat;

use super::server::AppState;

/// Standard API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            request_id: Uuid::new_v4().to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            request_id: Uuid::new_v4().to_string(),
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Root endpoint response
#[derive(Serialize)]
pub struct RootResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Serialize)]
pub struct EndpointInfo {
    pub path: String,
    pub method: String,
    pub description: String,
}

/// GET / - Root info
pub async fn root(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = RootResponse {
        name: "Roster API Server".to_string(),
        version: state.version.clone(),
        description: "HTTP API for roster sheet reformatting".to_string(),
        endpoints: vec![
            EndpointInfo {
                path: "/health".to_string(),
                method: "GET".to_string(),
                description: "Health check endpoint".to_string(),
            },
            EndpointInfo {
                path: "/version".to_string(),
                method: "GET".to_string(),
                description: "Get server version".to_string(),
            },
            EndpointInfo {
                path: "/api/v1/sheets".to_string(),
                method: "POST".to_string(),
                description: "List the sheet names of a workbook".to_string(),
            },
            EndpointInfo {
                path: "/api/v1/reformat".to_string(),
                method: "POST".to_string(),
                description: "Reformat a roster sheet into the output workbook".to_string(),
            },
        ],
    };
    Json(ApiResponse::ok(response))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /health - Health check
pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
    }))
}

/// Version response
#[derive(Serialize)]
pub struct VersionResponse {
    pub version: String,
    pub features: Vec<String>,
}

/// GET /version - Server version
pub async fn version(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(VersionResponse {
        version: state.version.clone(),
        features: vec!["sheets".to_string(), "reformat".to_string()],
    }))
}

/// Sheets request
#[derive(Deserialize)]
pub struct SheetsRequest {
    pub file_path: String,
}

/// Sheets response
#[derive(Serialize, Default)]
pub struct SheetsResponse {
    pub file_path: String,
    pub sheets: Vec<String>,
}

/// POST /api/v1/sheets - List sheet names of a workbook
pub async fn sheets(Json(req): Json<SheetsRequest>) -> impl IntoResponse {
    let reader = SheetReader::new(PathBuf::from(&req.file_path));

    match reader.sheet_names() {
        Ok(names) => Json(ApiResponse::ok(SheetsResponse {
            file_path: req.file_path,
            sheets: names,
        })),
        Err(e) => Json(ApiResponse::err(e.to_string())),
    }
}

/// Reformat request. `sheet_name` may be omitted for single-sheet workbooks.
#[derive(Deserialize)]
pub struct ReformatRequest {
    pub input_path: String,
    #[serde(default)]
    pub sheet_name: Option<String>,
    pub output_path: String,
}

/// Reformat response
#[derive(Serialize, Default)]
pub struct ReformatResponse {
    pub reformatted: bool,
    pub input_path: String,
    pub sheet_name: String,
    pub output_path: String,
    pub rows: usize,
    pub message: String,
}

/// POST /api/v1/reformat - Reformat one sheet into the output workbook
pub async fn reformat(Json(req): Json<ReformatRequest>) -> impl IntoResponse {
    Json(reformat_workbook(req))
}

/// Run the reformat pipeline for one request. Any failure surfaces as a
/// `success: false` envelope carrying the error message.
fn reformat_workbook(req: ReformatRequest) -> ApiResponse<ReformatResponse> {
    let reader = SheetReader::new(PathBuf::from(&req.input_path));

    let result = reader
        .select_sheet(req.sheet_name.as_deref())
        .and_then(|sheet_name| {
            let source = reader.read_sheet(&sheet_name)?;
            let rows = reformat::reformat(&source)?;
            let writer = FormattedWriter::new(rows);
            writer.write(PathBuf::from(&req.output_path).as_path())?;
            Ok((sheet_name, writer.row_count()))
        });

    match result {
        Ok((sheet_name, rows)) => ApiResponse::ok(ReformatResponse {
            reformatted: true,
            input_path: req.input_path,
            sheet_name,
            output_path: req.output_path,
            rows,
            message: "Reformat completed".to_string(),
        }),
        Err(e) => ApiResponse::err(e.to_string()),
    }
}
