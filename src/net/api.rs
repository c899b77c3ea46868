//! REST API helpers for communicating with the portal server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Login and registration return `Result<_, AuthError>` where the message is
//! the server's `error` field when the body parses, or a generic fallback
//! when the transport failed. Session resolution returns `Option` because
//! any failure means the same thing: the token no longer identifies a user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthError, LoginResponse, RegisterRequest, User};

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_ENDPOINT: &str = "/api/login";
#[cfg(any(test, feature = "hydrate"))]
const REGISTER_ENDPOINT: &str = "/api/register";
#[cfg(any(test, feature = "hydrate"))]
const CURRENT_USER_ENDPOINT: &str = "/api/user";

#[cfg(any(test, feature = "hydrate"))]
pub(crate) const LOGIN_FALLBACK_ERROR: &str = "Login failed. Check your details and try again.";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const REGISTER_FALLBACK_ERROR: &str = "Registration failed. Please try again.";

/// Extract the server's `error` message from a response body, falling back
/// to `fallback` when the body is not the expected envelope.
#[cfg(any(test, feature = "hydrate"))]
fn error_message_from_body(body: &str, fallback: &str) -> String {
    serde_json::from_str::<super::types::ApiErrorBody>(body)
        .map_or_else(|_| fallback.to_owned(), |envelope| envelope.error)
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Submit credentials to `POST /api/login`.
///
/// # Errors
///
/// Returns a displayable `AuthError` when the server rejects the credentials
/// or the transport fails; the caller's state is untouched either way.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&payload)
            .map_err(|_| AuthError::new(LOGIN_FALLBACK_ERROR))?
            .send()
            .await
            .map_err(|_| AuthError::new(LOGIN_FALLBACK_ERROR))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AuthError::new(error_message_from_body(&body, LOGIN_FALLBACK_ERROR)));
        }
        resp.json::<LoginResponse>()
            .await
            .map_err(|_| AuthError::new(LOGIN_FALLBACK_ERROR))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(AuthError::new("not available on server"))
    }
}

/// Create an account via `POST /api/register`.
///
/// A 2xx response means the account exists; the client ignores the body and
/// does not authenticate automatically.
///
/// # Errors
///
/// Returns a displayable `AuthError` on rejection (e.g. duplicate email) or
/// transport failure.
pub async fn register(input: &RegisterRequest) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(REGISTER_ENDPOINT)
            .json(input)
            .map_err(|_| AuthError::new(REGISTER_FALLBACK_ERROR))?
            .send()
            .await
            .map_err(|_| AuthError::new(REGISTER_FALLBACK_ERROR))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AuthError::new(error_message_from_body(&body, REGISTER_FALLBACK_ERROR)));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        Err(AuthError::new("not available on server"))
    }
}

/// Resolve a persisted bearer token into a live user via `GET /api/user`.
/// Returns `None` when the token is expired/invalid or on the server.
pub async fn fetch_current_user(token: &str) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CURRENT_USER_ENDPOINT)
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}
