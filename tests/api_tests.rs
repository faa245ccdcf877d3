//! API type and configuration tests

use rosterfmt::api::handlers::{
    ApiResponse, HealthResponse, ReformatRequest, ReformatResponse, RootResponse, SheetsRequest,
    SheetsResponse, VersionResponse,
};
use rosterfmt::api::server::{ApiConfig, AppState};

// ═══════════════════════════════════════════════════════════════════════════
// CONFIG TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_config_default() {
    let config = ApiConfig::default();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8080);
}

#[test]
fn test_config_custom() {
    let config = ApiConfig {
        host: "0.0.0.0".to_string(),
        port: 3000,
    };
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 3000);
}

#[test]
fn test_app_state_clone() {
    let state = AppState {
        version: "0.1.0".to_string(),
    };
    let cloned = state.clone();
    assert_eq!(state.version, cloned.version);
}

// ═══════════════════════════════════════════════════════════════════════════
// ENVELOPE TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_envelope_ok() {
    let response = ApiResponse::ok(SheetsResponse {
        file_path: "roster.xlsx".to_string(),
        sheets: vec!["Roster".to_string()],
    });

    assert!(response.success);
    assert!(response.error.is_none());
    assert_eq!(response.request_id.len(), 36);
}

#[test]
fn test_envelope_err() {
    let response: ApiResponse<SheetsResponse> = ApiResponse::err("no such file");

    assert!(!response.success);
    assert!(response.data.is_none());
    assert_eq!(response.error.as_deref(), Some("no such file"));
}

#[test]
fn test_envelope_skips_none_fields_in_json() {
    let response = ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
    });
    let json = serde_json::to_string(&response).unwrap();

    assert!(!json.contains("\"error\""));
    assert!(json.contains("\"status\":\"healthy\""));
}

// ═══════════════════════════════════════════════════════════════════════════
// REQUEST / RESPONSE SERIALIZATION
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_sheets_request_deserialize() {
    let json = r#"{"file_path": "uploads/roster.xlsx"}"#;
    let req: SheetsRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.file_path, "uploads/roster.xlsx");
}

#[test]
fn test_reformat_request_full() {
    let json = r#"{
        "input_path": "uploads/roster.xlsx",
        "sheet_name": "Term 2",
        "output_path": "uploads/formatted_output.xlsx"
    }"#;
    let req: ReformatRequest = serde_json::from_str(json).unwrap();

    assert_eq!(req.input_path, "uploads/roster.xlsx");
    assert_eq!(req.sheet_name.as_deref(), Some("Term 2"));
    assert_eq!(req.output_path, "uploads/formatted_output.xlsx");
}

#[test]
fn test_reformat_request_without_sheet_name() {
    let json = r#"{"input_path": "a.xlsx", "output_path": "b.xlsx"}"#;
    let req: ReformatRequest = serde_json::from_str(json).unwrap();
    assert!(req.sheet_name.is_none());
}

#[test]
fn test_reformat_response_serialize() {
    let response = ReformatResponse {
        reformatted: true,
        input_path: "roster.xlsx".to_string(),
        sheet_name: "Roster".to_string(),
        output_path: "out.xlsx".to_string(),
        rows: 42,
        message: "Reformat completed".to_string(),
    };
    let json = serde_json::to_string(&response).unwrap();

    assert!(json.contains("\"reformatted\":true"));
    assert!(json.contains("\"rows\":42"));
    assert!(json.contains("\"sheet_name\":\"Roster\""));
}

#[test]
fn test_version_response_serialize() {
    let response = VersionResponse {
        version: "0.1.0".to_string(),
        features: vec!["sheets".to_string(), "reformat".to_string()],
    };
    let json = serde_json::to_string(&response).unwrap();

    assert!(json.contains("\"version\":\"0.1.0\""));
    assert!(json.contains("\"features\":[\"sheets\",\"reformat\"]"));
}

#[test]
fn test_root_response_lists_core_endpoints() {
    let response = RootResponse {
        name: "Roster API Server".to_string(),
        version: "0.1.0".to_string(),
        description: "HTTP API for roster sheet reformatting".to_string(),
        endpoints: Vec::new(),
    };
    let json = serde_json::to_string(&response).unwrap();

    assert!(json.contains("\"name\":\"Roster API Server\""));
    assert!(json.contains("\"endpoints\":[]"));
}
