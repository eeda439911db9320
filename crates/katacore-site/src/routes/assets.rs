//! Static assets: stylesheet, service worker and manifests.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderName, header};
use axum::response::IntoResponse;
use axum::routing::get;

use crate::state::AppState;

/// Build the assets router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/assets/site.css", get(stylesheet))
        .route("/sw.js", get(service_worker))
        .route("/manifest.webmanifest", get(web_manifest))
        .route("/render-manifest.json", get(render_manifest))
}

async fn stylesheet() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=31536000, immutable"),
        ],
        SITE_CSS,
    )
}

async fn service_worker(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, "no-cache"),
            (HeaderName::from_static("service-worker-allowed"), "/"),
        ],
        state.service_worker.clone(),
    )
}

async fn web_manifest(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/manifest+json")],
        Json(state.pwa.web_manifest(&state.site)),
    )
}

async fn render_manifest(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.manifest.clone())
}

/// Stylesheet shared by every page.
pub const SITE_CSS: &str = r#":root{--bg:#f3f4f6;--fg:#1f2937;--muted:#4b5563;--accent:#3b82f6;--dark:#111827;--card:#fff;--radius:.75rem}
*{box-sizing:border-box}
body{margin:0;font-family:system-ui,-apple-system,"Segoe UI",Roboto,sans-serif;background:var(--bg);color:var(--fg);line-height:1.6}
img{max-width:100%;height:auto;display:block}
a{color:inherit}
.container{max-width:72rem;margin:0 auto;padding:0 1rem}
.site-header{background:#fff;box-shadow:0 1px 3px rgba(0,0,0,.08)}
.header-inner{display:flex;align-items:center;gap:1rem;padding:.75rem 1rem}
.search{flex:1}
.search input{width:100%;padding:.5rem .75rem;border:1px solid #d1d5db;border-radius:9999px}
.auth{display:flex;align-items:center;gap:.5rem;margin:0}
.btn{display:inline-block;padding:.5rem 1rem;border-radius:.5rem;border:0;cursor:pointer;text-decoration:none;font:inherit}
.btn-dark{background:var(--dark);color:#fff}
.btn-primary{background:var(--accent);color:#fff}
.btn-outline{border:1px solid #d1d5db;background:transparent}
.site-nav,.admin-nav{background:#fff;border-top:1px solid #e5e7eb}
.site-nav ul,.admin-nav ul{list-style:none;margin:0 auto;padding:0 1rem;display:flex;flex-wrap:wrap;gap:1.25rem;max-width:72rem}
.nav-link{display:block;padding:.75rem 0;text-decoration:none;color:var(--muted)}
.nav-link.active{color:var(--accent);border-bottom:2px solid var(--accent)}
.site-main{padding:2rem 1rem}
section{margin:0 0 3rem}
.hero{position:relative;border-radius:var(--radius);overflow:hidden}
.hero-text{position:absolute;inset:0;display:flex;flex-direction:column;justify-content:center;padding:2rem;color:#fff;background:rgba(0,0,0,.35)}
.grid{display:grid;gap:1.5rem}
.grid-2{grid-template-columns:repeat(auto-fit,minmax(18rem,1fr))}
.grid-3{grid-template-columns:repeat(auto-fit,minmax(14rem,1fr))}
.grid-4{grid-template-columns:repeat(auto-fit,minmax(12rem,1fr))}
.split{display:flex;flex-wrap:wrap;gap:2rem;align-items:flex-start}
.split>*{flex:1 1 18rem}
.card{background:var(--card);border-radius:var(--radius);padding:1.5rem;box-shadow:0 1px 3px rgba(0,0,0,.08)}
.feature-card{display:flex;gap:1rem}
.feature-icon{font-size:1.5rem;width:3rem;height:3rem;display:flex;align-items:center;justify-content:center;border-radius:9999px;background:#dbeafe}
.accordion{display:flex;flex-direction:column;gap:.75rem}
.accordion-item{background:var(--card);border-radius:.5rem;box-shadow:0 1px 2px rgba(0,0,0,.06)}
.accordion-header{display:flex;justify-content:space-between;align-items:center;padding:1rem 1.25rem;text-decoration:none;font-weight:600}
.chevron{width:1.25rem;height:1.25rem;transition:transform .3s}
.chevron.rotated{transform:rotate(180deg)}
.accordion-body{padding:0 1.25rem 1rem;color:var(--muted)}
.product-list{list-style:none;padding:0;display:grid;gap:1rem;grid-template-columns:repeat(auto-fill,minmax(12rem,1fr))}
.price{font-weight:700;color:var(--accent)}
.site-footer{padding:2rem 1rem;border-top:1px solid #e5e7eb}
.footer-grid{display:grid;gap:1.5rem;grid-template-columns:repeat(auto-fit,minmax(12rem,1fr))}
.back-to-top{text-align:right;margin-bottom:1rem}
.copyright{text-align:center;color:var(--muted);font-size:.875rem}
.admin-layout{min-height:100vh;display:grid;grid-template-rows:auto auto 1fr auto}
.admin-header,.admin-footer{background:var(--dark);color:#fff;padding:1rem}
.admin-content{padding:2rem}
.status{padding:2rem 1rem;text-align:center}
.status .grid{text-align:left}
.result{margin-top:1rem;text-align:left}
.result.error .api-response{color:#b91c1c}
.health{background:#f9fafb;padding:1rem;border-radius:.5rem;overflow:auto}
.actions{display:flex;gap:1rem;justify-content:center;margin-top:2rem}
.error-page{padding:2rem;text-align:center}
"#;
