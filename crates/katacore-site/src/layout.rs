//! Page shells.
//!
//! Every page goes through one of three shells:
//!
//! - [`site_page`]: header, main navigation, content slot and footer. The
//!   navigation list and active path are parameters, so all marketing pages
//!   share one definition of the menu.
//! - [`admin_page`]: header, sidebar, content slot and footer of the admin
//!   panel.
//! - [`bare_page`]: document head only, for standalone pages.
//!
//! The document head is filled from the [`SiteConfig`] on every render.

use katacore_core::navigation::{ADMIN_NAV, FOOTER_LINKS, NavItem, SITE_NAV};
use katacore_core::pwa::PwaConfig;
use katacore_core::session::Session;
use katacore_core::site::{HeadTag, SiteConfig};

use crate::html::escape;

/// Site-wide inputs every shell needs.
#[derive(Debug, Clone, Copy)]
pub struct Chrome<'a> {
    pub site: &'a SiteConfig,
    pub pwa: &'a PwaConfig,
    /// Versioned stylesheet URL.
    pub stylesheet: &'a str,
}

/// Per-request inputs of a shell.
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
    /// Request path, used to highlight the active navigation entry.
    pub path: &'a str,
    /// Tab title; `None` uses the site title.
    pub title: Option<&'a str>,
    /// Current visitor, drives the login/logout control.
    pub session: Option<&'a Session>,
}

impl<'a> Page<'a> {
    #[must_use]
    pub fn new(path: &'a str) -> Self {
        Self {
            path,
            title: None,
            session: None,
        }
    }

    #[must_use]
    pub fn titled(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn with_session(mut self, session: Option<&'a Session>) -> Self {
        self.session = session;
        self
    }
}

/// Render a marketing page inside the main site shell.
#[must_use]
pub fn site_page(chrome: &Chrome<'_>, page: &Page<'_>, content: &str) -> String {
    site_page_with_nav(chrome, page, SITE_NAV, content)
}

/// Render the main site shell with an explicit navigation list.
#[must_use]
pub fn site_page_with_nav(
    chrome: &Chrome<'_>,
    page: &Page<'_>,
    nav: &[NavItem],
    content: &str,
) -> String {
    let mut html = String::with_capacity(16384 + content.len());
    open_document(&mut html, chrome, page.title);
    html.push_str("<body id=\"top\" class=\"site\">\n");
    push_header(&mut html, page.session);
    push_nav(&mut html, "site-nav", nav, page.path);
    html.push_str("<main class=\"container site-main\">\n");
    html.push_str(content);
    html.push_str("\n</main>\n");
    push_footer(&mut html);
    html.push_str("</body></html>\n");
    html
}

/// Render a page inside the admin panel shell.
#[must_use]
pub fn admin_page(chrome: &Chrome<'_>, page: &Page<'_>, content: &str) -> String {
    let mut html = String::with_capacity(8192 + content.len());
    open_document(&mut html, chrome, page.title);
    html.push_str("<body class=\"admin\">\n<div class=\"admin-layout\">\n");
    html.push_str("<header class=\"admin-header\">Admin Header</header>\n");
    push_nav(&mut html, "admin-nav", ADMIN_NAV, page.path);
    html.push_str("<main class=\"admin-content\">\n");
    html.push_str(content);
    html.push_str("\n</main>\n<footer class=\"admin-footer\">Admin Footer</footer>\n</div>\n</body></html>\n");
    html
}

/// Render a standalone page with only the document head.
#[must_use]
pub fn bare_page(chrome: &Chrome<'_>, title: Option<&str>, content: &str) -> String {
    let mut html = String::with_capacity(4096 + content.len());
    open_document(&mut html, chrome, title);
    html.push_str("<body class=\"bare\">\n");
    html.push_str(content);
    html.push_str("\n</body></html>\n");
    html
}

fn open_document(html: &mut String, chrome: &Chrome<'_>, title: Option<&str>) {
    html.push_str("<!DOCTYPE html>\n<html lang=\"");
    html.push_str(&escape(&chrome.site.language));
    html.push_str("\"><head>\n");

    for tag in chrome.site.head_tags(title) {
        push_head_tag(html, &tag);
    }

    html.push_str("<link rel=\"stylesheet\" href=\"");
    html.push_str(&escape(chrome.stylesheet));
    html.push_str("\"/>\n<link rel=\"manifest\" href=\"/manifest.webmanifest\"/>\n<script>");
    html.push_str(&chrome.pwa.registration_script());
    html.push_str("</script>\n</head>\n");
}

fn push_head_tag(html: &mut String, tag: &HeadTag) {
    match tag {
        HeadTag::Charset(charset) => {
            html.push_str("<meta charset=\"");
            html.push_str(&escape(charset));
            html.push_str("\"/>\n");
        }
        HeadTag::Title(title) => {
            html.push_str("<title>");
            html.push_str(&escape(title));
            html.push_str("</title>\n");
        }
        HeadTag::Name { name, content } => {
            html.push_str("<meta name=\"");
            html.push_str(name);
            html.push_str("\" content=\"");
            html.push_str(&escape(content));
            html.push_str("\"/>\n");
        }
        HeadTag::Property { property, content } => {
            html.push_str("<meta property=\"");
            html.push_str(property);
            html.push_str("\" content=\"");
            html.push_str(&escape(content));
            html.push_str("\"/>\n");
        }
        HeadTag::Link { rel, href } => {
            html.push_str("<link rel=\"");
            html.push_str(rel);
            html.push_str("\" href=\"");
            html.push_str(&escape(href));
            html.push_str("\"/>\n");
        }
    }
}

fn push_header(html: &mut String, session: Option<&Session>) {
    html.push_str(SITE_HEADER_OPEN);
    match session {
        Some(session) => {
            html.push_str("<form class=\"auth\" method=\"post\" action=\"/logout\"><a class=\"user-name\" href=\"/dashboard\">");
            html.push_str(&escape(session.display_name()));
            html.push_str("</a><button type=\"submit\" class=\"btn btn-dark\">Đăng xuất</button></form>");
        }
        None => {
            html.push_str("<div class=\"auth\"><a class=\"btn btn-dark\" href=\"/login\">Đăng nhập</a></div>");
        }
    }
    html.push_str("\n</div></header>\n");
}

fn push_nav(html: &mut String, class: &str, items: &[NavItem], path: &str) {
    html.push_str("<nav class=\"");
    html.push_str(class);
    html.push_str("\"><ul>");
    for item in items {
        html.push_str("<li><a href=\"");
        html.push_str(&escape(item.href));
        if item.is_active(path) {
            html.push_str("\" class=\"nav-link active\" aria-current=\"page\">");
        } else {
            html.push_str("\" class=\"nav-link\">");
        }
        html.push_str(&escape(item.label));
        html.push_str("</a></li>");
    }
    html.push_str("</ul></nav>\n");
}

fn push_footer(html: &mut String) {
    html.push_str(SITE_FOOTER_OPEN);
    for link in FOOTER_LINKS {
        html.push_str("<li><a href=\"");
        html.push_str(&escape(link.href));
        html.push_str("\">");
        html.push_str(&escape(link.label));
        html.push_str("</a></li>");
    }
    html.push_str(SITE_FOOTER_CLOSE);
}

const SITE_HEADER_OPEN: &str = r#"<header class="site-header"><div class="container header-inner">
<a class="logo" href="/"><img src="https://placehold.co/120x40/f0f0f0/333333" alt="InnerBright Logo"/></a>
<div class="search"><input type="text" placeholder="Tìm kiếm..." aria-label="Tìm kiếm"/></div>
"#;

const SITE_FOOTER_OPEN: &str = r##"<footer class="container site-footer">
<div class="back-to-top"><a href="#top">Trở lại đầu trang</a></div>
<div class="footer-grid">
  <div class="footer-contact">
    <img src="https://placehold.co/150x50/E0E0E0/333333" alt="InnerBright Logo"/>
    <p><span aria-hidden="true">📞</span> 090 837 09 68</p>
    <p><span aria-hidden="true">&#9993;</span> <a href="mailto:info@innerbright.vn">info@innerbright.vn</a></p>
  </div>
  <div>
    <h3>INNERBRIGHT</h3>
    <ul><li><a href="/contact">Our Support</a></li><li><a href="/library">Blog</a></li><li><a href="/contact">Contact us</a></li></ul>
  </div>
  <div>
    <h3>Liên kết nhanh</h3>
    <ul>"##;

const SITE_FOOTER_CLOSE: &str = r#"</ul>
  </div>
  <div>
    <h3>Chương trình</h3>
    <ul><li>NLP Practitioner</li><li>NLP Master Coach</li><li>Time Line Therapy®</li></ul>
  </div>
</div>
<p class="copyright">&copy; InnerBright Training &amp; Coaching</p>
</footer>
"#;
