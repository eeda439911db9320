//! Site metadata.
//!
//! A single [`SiteConfig`] is read at process start and consumed at render
//! time to fill the document head. The defaults are the placeholder values
//! the site ships with; an operator can replace them with a JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SiteConfigError;

/// Immutable record of the site's display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub url: String,
    pub author: Author,
    pub language: String,
    pub charset: String,
    pub viewport: String,
    pub og: OpenGraph,
    pub twitter: TwitterCard,
    pub favicon: String,
}

/// Author attribution for the `author` meta tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub url: String,
}

/// Open Graph social card fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenGraph {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub image: String,
}

/// Twitter card fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwitterCard {
    pub card: String,
    pub site: String,
    pub title: String,
    pub description: String,
    pub image: String,
}

/// One entry of the document head, in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTag {
    /// `<meta charset>`
    Charset(String),
    /// `<title>`
    Title(String),
    /// `<meta name=.. content=..>`
    Name { name: &'static str, content: String },
    /// `<meta property=.. content=..>` (Open Graph)
    Property { property: &'static str, content: String },
    /// `<link rel=.. href=..>`
    Link { rel: &'static str, href: String },
}

impl Default for SiteConfig {
    fn default() -> Self {
        let title = "Tên Website".to_owned();
        let description = "Mô tả ngắn gọn về website để tối ưu SEO.".to_owned();
        let url = "https://www.tenwebsite.com".to_owned();
        Self {
            title: title.clone(),
            description: description.clone(),
            keywords: vec![
                "từ khóa 1".to_owned(),
                "từ khóa 2".to_owned(),
                "từ khóa 3".to_owned(),
            ],
            url: url.clone(),
            author: Author {
                name: "Tên tác giả hoặc công ty".to_owned(),
                url: format!("{url}/about"),
            },
            language: "vi".to_owned(),
            charset: "UTF-8".to_owned(),
            viewport: "width=device-width, initial-scale=1.0".to_owned(),
            og: OpenGraph {
                kind: "website".to_owned(),
                title: title.clone(),
                description: description.clone(),
                url: url.clone(),
                image: format!("{url}/og-image.jpg"),
            },
            twitter: TwitterCard {
                card: "summary_large_image".to_owned(),
                site: "@twitter_handle".to_owned(),
                title,
                description,
                image: format!("{url}/twitter-image.jpg"),
            },
            favicon: "/favicon.ico".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Load a site config from a JSON file.
    ///
    /// Fields missing from the file keep their default values.
    ///
    /// # Errors
    ///
    /// Returns [`SiteConfigError::Read`] if the file cannot be read and
    /// [`SiteConfigError::Parse`] if it is not valid JSON for this record.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SiteConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let raw = std::fs::read_to_string(path).map_err(|e| SiteConfigError::Read {
            path: display.clone(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&raw).map_err(|e| SiteConfigError::Parse {
            path: display,
            reason: e.to_string(),
        })
    }

    /// Title shown in the browser tab for a page.
    ///
    /// Pages without their own title use the site title.
    #[must_use]
    pub fn page_title(&self, page: Option<&str>) -> String {
        match page {
            Some(page) if !page.trim().is_empty() => page.to_owned(),
            _ => self.title.clone(),
        }
    }

    /// Head metadata for a page, in the order it is rendered.
    #[must_use]
    pub fn head_tags(&self, page: Option<&str>) -> Vec<HeadTag> {
        vec![
            HeadTag::Charset(self.charset.clone()),
            HeadTag::Name {
                name: "viewport",
                content: self.viewport.clone(),
            },
            HeadTag::Title(self.page_title(page)),
            HeadTag::Name {
                name: "description",
                content: self.description.clone(),
            },
            HeadTag::Name {
                name: "keywords",
                content: self.keywords.join(", "),
            },
            HeadTag::Name {
                name: "author",
                content: self.author.name.clone(),
            },
            HeadTag::Property {
                property: "og:type",
                content: self.og.kind.clone(),
            },
            HeadTag::Property {
                property: "og:title",
                content: self.og.title.clone(),
            },
            HeadTag::Property {
                property: "og:description",
                content: self.og.description.clone(),
            },
            HeadTag::Property {
                property: "og:url",
                content: self.og.url.clone(),
            },
            HeadTag::Property {
                property: "og:image",
                content: self.og.image.clone(),
            },
            HeadTag::Name {
                name: "twitter:card",
                content: self.twitter.card.clone(),
            },
            HeadTag::Name {
                name: "twitter:site",
                content: self.twitter.site.clone(),
            },
            HeadTag::Name {
                name: "twitter:title",
                content: self.twitter.title.clone(),
            },
            HeadTag::Name {
                name: "twitter:description",
                content: self.twitter.description.clone(),
            },
            HeadTag::Name {
                name: "twitter:image",
                content: self.twitter.image.clone(),
            },
            HeadTag::Link {
                rel: "icon",
                href: self.favicon.clone(),
            },
            HeadTag::Link {
                rel: "author",
                href: self.author.url.clone(),
            },
        ]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_social_cards_mirror_site_strings() {
        let site = SiteConfig::default();
        assert_eq!(site.og.title, site.title);
        assert_eq!(site.twitter.description, site.description);
        assert_eq!(site.og.image, "https://www.tenwebsite.com/og-image.jpg");
        assert_eq!(site.language, "vi");
    }

    #[test]
    fn page_title_falls_back_to_site_title() {
        let site = SiteConfig::default();
        assert_eq!(site.page_title(None), "Tên Website");
        assert_eq!(site.page_title(Some("  ")), "Tên Website");
        assert_eq!(site.page_title(Some("NLP")), "NLP");
    }

    #[test]
    fn head_tags_start_with_charset_and_join_keywords() {
        let site = SiteConfig::default();
        let tags = site.head_tags(None);
        assert_eq!(tags[0], HeadTag::Charset("UTF-8".to_owned()));
        assert!(tags.contains(&HeadTag::Name {
            name: "keywords",
            content: "từ khóa 1, từ khóa 2, từ khóa 3".to_owned(),
        }));
        assert!(tags.contains(&HeadTag::Link {
            rel: "icon",
            href: "/favicon.ico".to_owned(),
        }));
    }

    #[test]
    fn json_override_keeps_defaults_for_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(&path, r#"{"title":"InnerBright","keywords":["NLP","coaching"]}"#).unwrap();

        let site = SiteConfig::from_json_file(&path).unwrap();
        assert_eq!(site.title, "InnerBright");
        assert_eq!(site.keywords, vec!["NLP", "coaching"]);
        assert_eq!(site.favicon, "/favicon.ico");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = SiteConfig::from_json_file("/nonexistent/site.json").unwrap_err();
        assert!(matches!(err, SiteConfigError::Read { .. }));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = SiteConfig::from_json_file(&path).unwrap_err();
        assert!(matches!(err, SiteConfigError::Parse { .. }));
    }
}
