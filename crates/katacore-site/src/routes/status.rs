//! KataCore status page and API connectivity probe.
//!
//! `GET /status` shows the probe button; submitting it (`POST /status`)
//! calls the backend and renders whatever the probe captured.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tower::limit::ConcurrencyLimitLayer;

use crate::html::escape;
use crate::layout;
use crate::probe::ProbeReport;
use crate::state::AppState;

/// Probe runs allowed in flight at once.
const MAX_CONCURRENT_PROBES: usize = 4;

/// Build the status router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/status", get(status_page).post(run_probe))
        .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_PROBES))
}

async fn status_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render(&state, None))
}

async fn run_probe(State(state): State<Arc<AppState>>) -> Html<String> {
    let report = state.probe.run().await;
    Html(render(&state, Some(&report)))
}

fn render(state: &AppState, report: Option<&ProbeReport>) -> String {
    let api_url = escape(state.probe.base_url());

    let mut content = String::from(STATUS_INTRO);
    content.push_str("<div class=\"card probe\"><h2>API Connection Test</h2><form method=\"post\" action=\"/status\"><button type=\"submit\" class=\"btn btn-primary\">Test API Connection</button></form>");

    if let Some(report) = report {
        if !report.api_response.is_empty() {
            let class = if report.is_error() { "result error" } else { "result" };
            content.push_str("<div class=\"");
            content.push_str(class);
            content.push_str("\"><h3>API Response:</h3><p class=\"api-response\">");
            content.push_str(&escape(&report.api_response));
            content.push_str("</p></div>");
        }
        if let Some(health) = &report.health {
            let json = serde_json::to_string_pretty(health).unwrap_or_default();
            content.push_str("<div class=\"result\"><h3>Health Status:</h3><pre class=\"health\">");
            content.push_str(&escape(&json));
            content.push_str("</pre></div>");
        }
    }
    content.push_str("</div>");

    content.push_str(STATUS_FEATURES);
    content.push_str("<div class=\"actions\"><a class=\"btn btn-dark\" href=\"");
    content.push_str(&api_url);
    content.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">View API</a><a class=\"btn btn-outline\" href=\"");
    content.push_str(&api_url);
    content.push_str("/health\" target=\"_blank\" rel=\"noopener noreferrer\">API Health Check</a></div></main>");

    layout::bare_page(&state.chrome(), Some("Status"), &content)
}

const STATUS_INTRO: &str = r#"<main class="container status">
<div class="brand"><span class="logo-text">Rust</span> <span>+</span> <span class="badge">axum</span></div>
<h1>KataCore Full Stack Application</h1>
<p class="lead">A full-stack application: a server-rendered website and a small backend API, both running on tokio and axum.</p>
"#;

const STATUS_FEATURES: &str = r#"<div class="grid grid-2">
  <div class="card"><h2>Frontend Features</h2><ul><li>Server-rendered pages</li><li>Prerendered landing page</li><li>Offline-capable service worker</li><li>Responsive design</li></ul></div>
  <div class="card"><h2>Backend Features</h2><ul><li>axum HTTP server</li><li>tokio runtime</li><li>CORS enabled</li><li>Health monitoring</li></ul></div>
</div>
"#;
