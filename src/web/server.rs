//! Axum web server for the dashboard.
//!
//! One dropdown, one table region, one chart region. The UI lists the catalog
//! labels, and each selection runs the pipeline once; failures come back as a
//! tagged payload the page shows in place of the chart, never as a dead
//! process.

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use crate::config::Settings;
use crate::dashboard::Dashboard;
use crate::store::MySqlStore;

/// Embedded static files for the single-page UI.
#[derive(RustEmbed)]
#[folder = "ui/"]
struct Assets;

/// Application state shared across handlers.
pub struct AppState {
    pub dashboard: Dashboard,
}

/// Build the axum router with all routes.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/queries", get(list_queries))
        .route("/api/report", post(report))
        .fallback(static_handler)
        .layer(cors)
        .with_state(state)
}

/// Start the web server.
pub async fn serve(settings: Settings, open_browser: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = Arc::new(MySqlStore::new(&settings.store.resolved()?));
    let dashboard = Dashboard::new(
        crate::catalog::QueryCatalog::new(settings.catalog.variant),
        store,
        settings.viz.ruleset.rules(),
    );

    let state = Arc::new(AppState { dashboard });
    let app = router(state);

    let addr = format!("127.0.0.1:{}", settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    let url = format!("http://localhost:{}", settings.server.port);
    info!(%url, catalog = settings.catalog.variant.as_str(), "dashboard listening");

    if open_browser || settings.server.open_browser {
        let _ = open::that(&url);
    }

    axum::serve(listener, app).await?;
    Ok(())
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/queries - Catalog labels in declared order.
async fn list_queries(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(
        state
            .dashboard
            .catalog()
            .labels()
            .map(str::to_string)
            .collect(),
    )
}

#[derive(Deserialize)]
struct ReportRequest {
    label: String,
}

#[derive(Serialize)]
struct ReportResponse {
    success: bool,
    label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_kind: Option<&'static str>,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    chart: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    chart_kind: Option<&'static str>,
}

/// POST /api/report - Run one catalog query and answer with table + chart.
///
/// Always HTTP 200 with a tagged body; the UI decides how to show failures.
async fn report(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReportRequest>,
) -> Json<ReportResponse> {
    match state.dashboard.select(&req.label).await {
        Ok(selection) => Json(ReportResponse {
            success: true,
            label: selection.label,
            error: None,
            error_kind: None,
            columns: selection.table.columns.clone(),
            rows: selection.table.display_rows(),
            chart: Some(selection.figure.svg),
            chart_kind: Some(selection.directive.kind.as_str()),
        }),
        Err(e) => {
            error!(label = %req.label, kind = e.kind(), error = %e, "selection failed");
            Json(ReportResponse {
                success: false,
                label: req.label,
                error: Some(e.to_string()),
                error_kind: Some(e.kind()),
                columns: vec![],
                rows: vec![],
                chart: None,
                chart_kind: None,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_payload_shape() {
        let response = ReportResponse {
            success: false,
            label: "6. Total profit per category".into(),
            error: Some("Store unreachable: connection refused".into()),
            error_kind: Some("connection"),
            columns: vec![],
            rows: vec![],
            chart: None,
            chart_kind: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error_kind"], "connection");
        // Absent fields are omitted, not null.
        assert!(json.get("chart").is_none());
        assert!(json.get("chart_kind").is_none());
    }

    #[test]
    fn test_success_payload_omits_error_fields() {
        let response = ReportResponse {
            success: true,
            label: "3. Total discount given for each category".into(),
            error: None,
            error_kind: None,
            columns: vec!["category".into(), "total_discount".into()],
            rows: vec![vec!["Furniture".into(), "320".into()]],
            chart: Some("<svg></svg>".into()),
            chart_kind: Some("pie"),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["chart_kind"], "pie");
        assert_eq!(json["rows"][0][0], "Furniture");
    }
}

// ============================================================================
// Static File Handler
// ============================================================================

/// Serve static files with SPA fallback.
async fn static_handler(uri: Uri) -> impl IntoResponse {
    let path = uri.path().trim_start_matches('/');
    let path = if path.is_empty() { "index.html" } else { path };

    match Assets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.as_ref())],
                content.data.into_owned(),
            )
                .into_response()
        }
        None => match Assets::get("index.html") {
            Some(content) => (
                [(header::CONTENT_TYPE, "text/html")],
                content.data.into_owned(),
            )
                .into_response(),
            None => (StatusCode::NOT_FOUND, "Not found").into_response(),
        },
    }
}
