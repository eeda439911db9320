//! HTTP route handlers for the website.

pub mod admin;
pub mod assets;
pub mod auth;
pub mod pages;
pub mod status;

use std::collections::BTreeMap;

use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use axum::http::HeaderName;
use axum::response::{Html, IntoResponse, Response};
use katacore_core::manifest::RenderMode;

use crate::error::AppError;

pub use auth::CurrentSession;

/// Response header naming how the page HTML was produced.
pub const RENDER_MODE_HEADER: HeaderName = HeaderName::from_static("x-render-mode");

/// Decoded query string of a page request.
pub type PageQuery = BTreeMap<String, String>;

/// Query parameters of a page, or none when the query string is malformed.
///
/// Pages only read accordion state from the query, so a query that does
/// not decode is treated as an empty one instead of failing the request.
pub(crate) fn page_query(query: Result<Query<PageQuery>, QueryRejection>) -> PageQuery {
    query.map(|Query(q)| q).unwrap_or_default()
}

/// An HTML page tagged with its render mode.
pub(crate) fn rendered(mode: RenderMode, html: String) -> Response {
    ([(RENDER_MODE_HEADER, mode.as_str())], Html(html)).into_response()
}

/// Fallback for every path without a page.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
