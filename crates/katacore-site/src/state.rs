//! Shared application state for the website.
//!
//! A single [`AppState`] is constructed at startup and shared across all
//! Axum handlers via `Arc`. It holds the site metadata, the render manifest,
//! the pages prerendered from it, the session capability and the API probe.

use std::collections::HashMap;
use std::sync::Arc;

use katacore_core::manifest::{RenderManifest, RenderMode};
use katacore_core::pwa::PwaConfig;
use katacore_core::session::{MemorySessionStore, SessionProvider};
use katacore_core::site::SiteConfig;
use tracing::{info, warn};

use crate::config::{DEFAULT_SESSION_TTL_HOURS, MAX_SESSION_TTL_HOURS, SiteServerConfig};
use crate::layout::Chrome;
use crate::probe::ApiProbe;
use crate::routes::{assets, pages};

/// Name of the stylesheet in the render manifest.
pub const STYLESHEET_ASSET: &str = "assets/site.css";
/// Name of the service worker in the render manifest.
pub const SERVICE_WORKER_ASSET: &str = "sw.js";

/// Shared application state passed to all HTTP handlers.
pub struct AppState {
    /// Site metadata rendered into every page head.
    pub site: SiteConfig,
    pub pwa: PwaConfig,
    /// Generated service worker source.
    pub service_worker: String,
    /// Route render modes and asset hashes.
    pub manifest: RenderManifest,
    /// Versioned stylesheet URL.
    pub stylesheet_href: String,
    /// HTML of the prerendered routes, keyed by path.
    pub prerendered: HashMap<String, String>,
    /// Store the login form writes to.
    pub session_store: Arc<MemorySessionStore>,
    /// Current-session accessor the pages read from.
    pub session_provider: Arc<dyn SessionProvider>,
    /// Lifetime of new sessions.
    pub session_ttl: chrono::Duration,
    /// Backend connectivity probe.
    pub probe: ApiProbe,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("site", &self.site.title)
            .field("prerendered", &self.prerendered.len())
            .field("api_url", &self.probe.base_url())
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Build the state and prerender the routes the manifest marks for it.
    #[must_use]
    pub fn new(config: &SiteServerConfig, site: SiteConfig) -> Self {
        let pwa = PwaConfig::default();
        let service_worker = pwa.service_worker_script();

        let manifest = RenderManifest::new("/")
            .with_inline_critical_css(false)
            .with_route("/", RenderMode::Prerender)
            .with_route("/nlp", RenderMode::Server)
            .with_route("/time-line-therapy", RenderMode::Server)
            .with_route("/footer", RenderMode::Server)
            .with_route("/sanpham", RenderMode::Server)
            .with_route("/dashboard", RenderMode::Server)
            .with_route("/login", RenderMode::Server)
            .with_route("/admin", RenderMode::Server)
            .with_route("/status", RenderMode::Server)
            .with_asset(STYLESHEET_ASSET, assets::SITE_CSS.as_bytes())
            .with_asset(SERVICE_WORKER_ASSET, service_worker.as_bytes());

        let stylesheet_href = match manifest.asset(STYLESHEET_ASSET) {
            Some(entry) => format!("/{STYLESHEET_ASSET}?v={}", entry.version()),
            None => format!("/{STYLESHEET_ASSET}"),
        };

        let session_store = Arc::new(MemorySessionStore::new());

        let mut state = Self {
            site,
            pwa,
            service_worker,
            manifest,
            stylesheet_href,
            prerendered: HashMap::new(),
            session_provider: session_store.clone(),
            session_store,
            session_ttl: session_ttl(config.session_ttl_hours),
            probe: ApiProbe::new(config.api_url.clone()),
        };
        state.prerender();
        state
    }

    /// Replace the session store and the accessor the pages read through.
    ///
    /// Both are swapped together so that `POST /login` writes where the
    /// provider looks. A provider that does not read `store` (such as a
    /// fixed visitor in tests) never sees sessions the login form opens.
    #[must_use]
    pub fn with_sessions(
        mut self,
        store: Arc<MemorySessionStore>,
        provider: Arc<dyn SessionProvider>,
    ) -> Self {
        self.session_store = store;
        self.session_provider = provider;
        self
    }

    /// Site-wide inputs of the page shells.
    #[must_use]
    pub fn chrome(&self) -> Chrome<'_> {
        Chrome {
            site: &self.site,
            pwa: &self.pwa,
            stylesheet: &self.stylesheet_href,
        }
    }

    /// Prerendered HTML of a route, if it has any.
    #[must_use]
    pub fn prerendered(&self, route: &str) -> Option<&str> {
        self.prerendered.get(route).map(String::as_str)
    }

    fn prerender(&mut self) {
        let chrome = self.chrome();
        let mut rendered = HashMap::new();

        for route in self.manifest.prerendered_routes() {
            match pages::render_static(&chrome, route) {
                Some(html) => {
                    info!(route, bytes = html.len(), "route prerendered");
                    rendered.insert(route.to_owned(), html);
                }
                None => warn!(route, "no static renderer for prerendered route"),
            }
        }

        self.prerendered = rendered;
    }
}

/// Session lifetime for `hours`, or the default when it is out of range.
fn session_ttl(hours: i64) -> chrono::Duration {
    let hours = if (1..=MAX_SESSION_TTL_HOURS).contains(&hours) {
        hours
    } else {
        warn!(hours, "session ttl out of range, using default");
        DEFAULT_SESSION_TTL_HOURS
    };
    chrono::Duration::try_hours(hours).unwrap_or_else(chrono::Duration::zero)
}
