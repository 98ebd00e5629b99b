//! REST helpers for the authentication API.
//!
//! Browser builds (csr): real HTTP calls via `gloo-net` against the
//! configured API base. Native builds: inert stubs so unit tests and
//! host compilation work without a browser.
//!
//! ERROR HANDLING
//! ==============
//! `register` and `login` return `AuthError` carrying the server's own
//! message when the error body had one, so pages can render it directly.
//! Session probing returns `Option` since a missing session is expected,
//! not exceptional.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::AuthError;
use super::types::{LoginRequest, RegisterRequest, Session};
#[cfg(any(test, feature = "csr"))]
use serde::Deserialize;

#[cfg(any(test, feature = "csr"))]
const REGISTER_PATH: &str = "/api/auth/register";
#[cfg(any(test, feature = "csr"))]
const LOGIN_PATH: &str = "/api/auth/login";
#[cfg(any(test, feature = "csr"))]
const CURRENT_USER_PATH: &str = "/api/auth/me";
#[cfg(any(test, feature = "csr"))]
const LOGOUT_PATH: &str = "/api/auth/logout";

#[cfg(any(test, feature = "csr"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{base}{path}")
}

#[cfg(any(test, feature = "csr"))]
fn register_failed_message(status: u16) -> String {
    format!("registration failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

/// Error body shape shared by the auth endpoints.
#[cfg(any(test, feature = "csr"))]
#[derive(Debug, Deserialize)]
struct ApiMessage {
    message: String,
}

/// Build an `AuthError::Api` from a non-success response, preferring the
/// server's `message` field over the fallback text.
#[cfg(any(test, feature = "csr"))]
fn api_error(status: u16, body: &str, fallback: &str) -> AuthError {
    let message = serde_json::from_str::<ApiMessage>(body)
        .ok()
        .map(|m| m.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned());
    AuthError::Api { status, message }
}

/// Create an account via `POST /api/auth/register` and return the new
/// session.
///
/// # Errors
///
/// Returns `AuthError::Network` when no response arrives, `AuthError::Api`
/// when the server rejects the registration, and `AuthError::Malformed`
/// when a success response has an unexpected body.
pub async fn register(input: &RegisterRequest) -> Result<Session, AuthError> {
    #[cfg(feature = "csr")]
    {
        let config = crate::config::AppConfig::load();
        let url = endpoint(&config.api_base, REGISTER_PATH);
        let resp = gloo_net::http::Request::post(&url)
            .json(input)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(api_error(status, &body, &register_failed_message(status)));
        }
        resp.json::<Session>()
            .await
            .map_err(|e| AuthError::Malformed(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = input;
        Err(AuthError::Unavailable)
    }
}

/// Authenticate via `POST /api/auth/login` and return the session.
///
/// # Errors
///
/// Returns `AuthError::Network` when no response arrives, `AuthError::Api`
/// when the credentials are rejected, and `AuthError::Malformed` when a
/// success response has an unexpected body.
pub async fn login(input: &LoginRequest) -> Result<Session, AuthError> {
    #[cfg(feature = "csr")]
    {
        let config = crate::config::AppConfig::load();
        let url = endpoint(&config.api_base, LOGIN_PATH);
        let resp = gloo_net::http::Request::post(&url)
            .json(input)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(api_error(status, &body, &login_failed_message(status)));
        }
        resp.json::<Session>()
            .await
            .map_err(|e| AuthError::Malformed(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = input;
        Err(AuthError::Unavailable)
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` when there is no session or on native builds.
pub async fn fetch_current_user() -> Option<Session> {
    #[cfg(feature = "csr")]
    {
        let config = crate::config::AppConfig::load();
        let url = endpoint(&config.api_base, CURRENT_USER_PATH);
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Session>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// End the current session via `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "csr")]
    {
        let config = crate::config::AppConfig::load();
        let url = endpoint(&config.api_base, LOGOUT_PATH);
        let _ = gloo_net::http::Request::post(&url).send().await;
    }
}
