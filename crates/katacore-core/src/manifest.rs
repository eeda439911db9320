//! Render manifest.
//!
//! Describes how each route is rendered and which static assets the site
//! serves, with their sizes and SHA-256 content hashes. The server builds it
//! once at startup from the assets it embeds and publishes it as JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// How a route's HTML is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Rendered on every request.
    Server,
    /// Shell only; the browser fills it in.
    Client,
    /// Rendered once at startup and served from memory.
    Prerender,
}

impl RenderMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Server => "server",
            Self::Client => "client",
            Self::Prerender => "prerender",
        }
    }
}

/// A route and its render mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub route: String,
    pub render_mode: RenderMode,
}

/// Size and content hash of a static asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetEntry {
    pub size: usize,
    /// SHA-256 of the asset bytes, lowercase hex.
    pub hash: String,
}

impl AssetEntry {
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            size: bytes.len(),
            hash: hex::encode(Sha256::digest(bytes)),
        }
    }

    /// Short hash used to version asset URLs.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.hash[..self.hash.len().min(12)]
    }
}

/// Routes and assets of the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderManifest {
    pub base_href: String,
    pub inline_critical_css: bool,
    pub routes: Vec<RouteEntry>,
    pub assets: BTreeMap<String, AssetEntry>,
}

impl RenderManifest {
    #[must_use]
    pub fn new(base_href: impl Into<String>) -> Self {
        Self {
            base_href: base_href.into(),
            inline_critical_css: false,
            routes: Vec::new(),
            assets: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_inline_critical_css(mut self, inline: bool) -> Self {
        self.inline_critical_css = inline;
        self
    }

    /// Declare a route. A route declared twice keeps the last mode.
    #[must_use]
    pub fn with_route(mut self, route: impl Into<String>, render_mode: RenderMode) -> Self {
        let route = route.into();
        self.routes.retain(|r| r.route != route);
        self.routes.push(RouteEntry { route, render_mode });
        self
    }

    /// Register an asset, hashing its contents.
    #[must_use]
    pub fn with_asset(mut self, name: impl Into<String>, bytes: &[u8]) -> Self {
        self.assets.insert(name.into(), AssetEntry::from_bytes(bytes));
        self
    }

    /// Render mode of a route, if declared.
    #[must_use]
    pub fn render_mode(&self, route: &str) -> Option<RenderMode> {
        self.routes
            .iter()
            .find(|r| r.route == route)
            .map(|r| r.render_mode)
    }

    /// Routes rendered once at startup.
    pub fn prerendered_routes(&self) -> impl Iterator<Item = &str> {
        self.routes
            .iter()
            .filter(|r| r.render_mode == RenderMode::Prerender)
            .map(|r| r.route.as_str())
    }

    #[must_use]
    pub fn asset(&self, name: &str) -> Option<&AssetEntry> {
        self.assets.get(name)
    }
}
