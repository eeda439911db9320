//! Navigation lists.
//!
//! These constants are the only place the site's menu entries are spelled
//! out; every layout renders from them.

/// A single navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavItem {
    /// Whether this entry points at the page currently being rendered.
    #[must_use]
    pub fn is_active(&self, path: &str) -> bool {
        self.href == path
    }
}

/// Main site navigation, in display order.
pub const SITE_NAV: &[NavItem] = &[
    NavItem { label: "Về InnerBright", href: "/" },
    NavItem { label: "NLP", href: "/nlp" },
    NavItem { label: "Time Line Therapy", href: "/time-line-therapy" },
    NavItem { label: "Đào tạo doanh nghiệp", href: "/corporate-training" },
    NavItem { label: "Khai vấn cá nhân", href: "/personal-consultation" },
    NavItem { label: "Khoá học", href: "/courses" },
    NavItem { label: "Bộ thẻ NLP", href: "/nlp-cards" },
    NavItem { label: "Thư viện", href: "/library" },
    NavItem { label: "Liên hệ", href: "/contact" },
];

/// Quick links in the site footer.
pub const FOOTER_LINKS: &[NavItem] = &[
    NavItem { label: "Trang chủ", href: "/" },
    NavItem { label: "Sản phẩm", href: "/sanpham" },
    NavItem { label: "NLP", href: "/nlp" },
    NavItem { label: "Time Line Therapy", href: "/time-line-therapy" },
    NavItem { label: "Liên hệ", href: "/contact" },
];

/// Sidebar of the admin panel.
pub const ADMIN_NAV: &[NavItem] = &[
    NavItem { label: "Tổng quan", href: "/admin" },
    NavItem { label: "Sản phẩm", href: "/sanpham" },
    NavItem { label: "Dashboard", href: "/dashboard" },
    NavItem { label: "Trang chủ", href: "/" },
];

/// Find the navigation entry for a path, if any.
#[must_use]
pub fn active_item<'a>(items: &'a [NavItem], path: &str) -> Option<&'a NavItem> {
    items.iter().find(|item| item.is_active(path))
}
