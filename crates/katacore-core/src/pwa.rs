//! Progressive web app assets.
//!
//! The site registers a service worker that answers every `http(s)` GET
//! network-first: fresh responses are copied into a bounded cache and the
//! cache only answers when the network fails.

use serde_json::json;

use crate::site::SiteConfig;

/// Service worker settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PwaConfig {
    /// Scope the worker controls.
    pub scope: String,
    /// URL the worker script is served from.
    pub sw_path: String,
    pub cache_name: String,
    /// Oldest entries are evicted past this count.
    pub max_entries: usize,
    /// Activate a new worker without waiting for old tabs to close.
    pub skip_waiting: bool,
}

impl Default for PwaConfig {
    fn default() -> Self {
        Self {
            scope: "/".to_owned(),
            sw_path: "/sw.js".to_owned(),
            cache_name: "offlineCache".to_owned(),
            max_entries: 200,
            skip_waiting: true,
        }
    }
}

impl PwaConfig {
    /// JavaScript source of the service worker.
    #[must_use]
    pub fn service_worker_script(&self) -> String {
        let skip_waiting = if self.skip_waiting {
            "self.skipWaiting();"
        } else {
            ""
        };
        SERVICE_WORKER
            .replace("{{CACHE_NAME}}", &js_string(&self.cache_name))
            .replace("{{MAX_ENTRIES}}", &self.max_entries.to_string())
            .replace("{{SKIP_WAITING}}", skip_waiting)
    }

    /// Snippet that registers the worker from a page.
    #[must_use]
    pub fn registration_script(&self) -> String {
        format!(
            "if('serviceWorker' in navigator){{window.addEventListener('load',function(){{navigator.serviceWorker.register({},{{scope:{}}});}});}}",
            js_string(&self.sw_path),
            js_string(&self.scope),
        )
    }

    /// Web app manifest for the site.
    #[must_use]
    pub fn web_manifest(&self, site: &SiteConfig) -> serde_json::Value {
        json!({
            "name": site.title,
            "short_name": site.title,
            "description": site.description,
            "lang": site.language,
            "start_url": self.scope,
            "scope": self.scope,
            "display": "standalone",
            "background_color": "#f3f4f6",
            "theme_color": "#3b82f6",
            "icons": [{ "src": site.favicon, "sizes": "any" }],
        })
    }
}

/// Quote a value as a JavaScript string literal.
fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_owned()).to_string()
}

const SERVICE_WORKER: &str = r"const CACHE_NAME = {{CACHE_NAME}};
const MAX_ENTRIES = {{MAX_ENTRIES}};

self.addEventListener('install', function () {
  {{SKIP_WAITING}}
});

self.addEventListener('activate', function (event) {
  event.waitUntil(self.clients.claim());
});

async function trimCache(cache) {
  const keys = await cache.keys();
  for (let i = 0; i < keys.length - MAX_ENTRIES; i++) {
    await cache.delete(keys[i]);
  }
}

async function networkFirst(request) {
  const cache = await caches.open(CACHE_NAME);
  try {
    const response = await fetch(request);
    if (response && response.ok) {
      await cache.put(request, response.clone());
      await trimCache(cache);
    }
    return response;
  } catch (err) {
    const cached = await cache.match(request);
    if (cached) {
      return cached;
    }
    throw err;
  }
}

self.addEventListener('fetch', function (event) {
  const request = event.request;
  if (request.method !== 'GET' || !/^https?.*/.test(request.url)) {
    return;
  }
  event.respondWith(networkFirst(request));
});
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_offline_cache_policy() {
        let pwa = PwaConfig::default();
        assert_eq!(pwa.cache_name, "offlineCache");
        assert_eq!(pwa.max_entries, 200);
        assert_eq!(pwa.sw_path, "/sw.js");
    }

    #[test]
    fn worker_script_substitutes_settings() {
        let script = PwaConfig::default().service_worker_script();
        assert!(script.contains(r#"const CACHE_NAME = "offlineCache";"#));
        assert!(script.contains("const MAX_ENTRIES = 200;"));
        assert!(script.contains("self.skipWaiting();"));
        assert!(!script.contains("{{"));
    }

    #[test]
    fn skip_waiting_can_be_disabled() {
        let pwa = PwaConfig {
            skip_waiting: false,
            ..PwaConfig::default()
        };
        assert!(!pwa.service_worker_script().contains("skipWaiting"));
    }

    #[test]
    fn registration_points_at_worker_and_scope() {
        let snippet = PwaConfig::default().registration_script();
        assert!(snippet.contains(r#"register("/sw.js",{scope:"/"})"#));
    }

    #[test]
    fn manifest_uses_site_strings() {
        let site = SiteConfig::default();
        let manifest = PwaConfig::default().web_manifest(&site);
        assert_eq!(manifest["name"], site.title);
        assert_eq!(manifest["start_url"], "/");
        assert_eq!(manifest["display"], "standalone");
    }
}
