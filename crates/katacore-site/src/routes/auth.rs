//! Session-gated dashboard and the login/logout flow.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{Form, FromRequestParts, State};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::Router;
use katacore_core::session::{Session, SessionUser};
use serde::Deserialize;
use tracing::info;

use crate::error::AppError;
use crate::html::escape;
use crate::layout::{self, Page};
use crate::state::AppState;

/// Cookie carrying the session token.
pub const SESSION_COOKIE: &str = "katacore_session";

/// Build the auth router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/login", get(login_form).post(login))
        .route("/logout", post(logout))
}

/// The visitor's session, resolved through the injected provider.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Option<Session>);

impl FromRequestParts<Arc<AppState>> for CurrentSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(&parts.headers);
        let session = state
            .session_provider
            .current_session(token.as_deref())
            .await;
        Ok(Self(session))
    }
}

/// Session token from the request cookies, if any.
#[must_use]
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

// ── Dashboard ────────────────────────────────────────────────────────

/// `GET /dashboard`: greet the visitor, or send them to the login page.
async fn dashboard(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
) -> Response {
    let Some(session) = session else {
        return Redirect::temporary("/login").into_response();
    };

    let content = format!(
        "<section class=\"dashboard\"><div class=\"card\"><h1>Welcome to Dashboard</h1><p class=\"greeting\">Hello, {}!</p></div></section>",
        escape(session.display_name()),
    );
    let page = Page::new("/dashboard")
        .titled("Dashboard")
        .with_session(Some(&session));

    Html(layout::site_page(&state.chrome(), &page, &content)).into_response()
}

// ── Login / logout ───────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct LoginForm {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

/// `GET /login`: the sign-in form. Signed-in visitors go to the dashboard.
async fn login_form(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
) -> Response {
    if session.is_some() {
        return Redirect::to("/dashboard").into_response();
    }

    let page = Page::new("/login").titled("Đăng nhập");
    Html(layout::site_page(&state.chrome(), &page, LOGIN_FORM)).into_response()
}

/// `POST /login`: open a session and set the cookie.
async fn login(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let user = SessionUser {
        name: form.name,
        email: form.email,
    };
    let token = state
        .session_store
        .create(user, state.session_ttl)
        .await?;

    let cookie = format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        state.session_ttl.num_seconds()
    );
    let cookie = HeaderValue::from_str(&cookie)
        .map_err(|e| AppError::Internal(format!("invalid session cookie: {e}")))?;

    info!("visitor signed in");
    Ok(([(header::SET_COOKIE, cookie)], Redirect::to("/dashboard")).into_response())
}

/// `POST /logout`: revoke the session and clear the cookie.
async fn logout(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    if let Some(token) = session_token(&headers) {
        state.session_store.revoke(&token).await;
        info!("visitor signed out");
    }

    let cleared = cleared_session_cookie()?;
    Ok(([(header::SET_COOKIE, cleared)], Redirect::to("/")).into_response())
}

/// `Set-Cookie` value that expires the session cookie.
fn cleared_session_cookie() -> Result<HeaderValue, AppError> {
    let cookie = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    HeaderValue::from_str(&cookie)
        .map_err(|e| AppError::Internal(format!("invalid session cookie: {e}")))
}

const LOGIN_FORM: &str = r#"<section class="login"><div class="card">
<h1>Đăng nhập</h1>
<form method="post" action="/login" class="login-form">
  <label>Tên <input type="text" name="name" autocomplete="name"/></label>
  <label>Email <input type="email" name="email" autocomplete="email"/></label>
  <button type="submit" class="btn btn-primary">Đăng nhập</button>
</form>
</div></section>"#;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn headers(cookies: &[&str]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for cookie in cookies {
            if let Ok(value) = HeaderValue::from_str(cookie) {
                map.append(header::COOKIE, value);
            }
        }
        map
    }

    #[test]
    fn token_found_among_other_cookies() {
        let map = headers(&["theme=dark; katacore_session=abc123; lang=vi"]);
        assert_eq!(session_token(&map).as_deref(), Some("abc123"));
    }

    #[test]
    fn token_found_in_second_cookie_header() {
        let map = headers(&["theme=dark", "katacore_session=xyz"]);
        assert_eq!(session_token(&map).as_deref(), Some("xyz"));
    }

    #[test]
    fn empty_or_missing_token_is_none() {
        assert_eq!(session_token(&headers(&[])), None);
        assert_eq!(session_token(&headers(&["katacore_session="])), None);
        assert_eq!(session_token(&headers(&["other_session=abc"])), None);
    }

    #[test]
    fn cleared_cookie_names_the_session_cookie() {
        let cookie = cleared_session_cookie().unwrap();
        let cookie = cookie.to_str().unwrap();
        assert!(cookie.starts_with(&format!("{SESSION_COOKIE}=;")));
        assert!(cookie.ends_with("Max-Age=0"));

        let map = headers(&[cookie]);
        assert_eq!(session_token(&map), None);
    }
}
