//! Admin panel.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use katacore_core::products::placeholder_products;

use crate::components;
use crate::layout::{self, Page};
use crate::state::AppState;

/// Tab title of the admin landing page.
pub const ADMIN_TITLE: &str = "Admin Page - Your E-commerce";

/// Build the admin router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/admin", get(admin_home))
}

async fn admin_home(State(state): State<Arc<AppState>>) -> Html<String> {
    let mut content = String::from("<h1>Welcome to the Admin Page</h1><h2>Sản phẩm</h2>");
    content.push_str(&components::product_list(&placeholder_products()));

    let page = Page::new("/admin").titled(ADMIN_TITLE);
    Html(layout::admin_page(&state.chrome(), &page, &content))
}
