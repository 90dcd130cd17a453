//! REST API helpers for the admin session.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the bearer
//! token kept in `localStorage`.
//! Server-side (SSR): stubs resolving "no session" since the token only
//! exists in the browser; the gate never redirects during SSR.
//!
//! ERROR HANDLING
//! ==============
//! `verify_auth` reports failures as `GateError::AuthCheckFailed` so the gate
//! can log them and fall back to the login redirect. Login/logout surface
//! plain strings for inline form messages.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use ngo_site::{GateError, SessionUser};

#[cfg(feature = "hydrate")]
const TOKEN_STORAGE_KEY: &str = "ngo_site_auth_token";

#[cfg(feature = "hydrate")]
const SESSION_ENDPOINT: &str = "/api/auth/me";

#[cfg(any(test, feature = "hydrate"))]
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn is_rejected_session(status: u16) -> bool {
    matches!(status, 401 | 403)
}

#[cfg(any(test, feature = "hydrate"))]
fn session_failed_error(status: u16) -> GateError {
    GateError::AuthCheckFailed(format!("session endpoint returned {status}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    if is_rejected_session(status) {
        "Email or password is incorrect.".to_owned()
    } else {
        format!("login failed: {status}")
    }
}

#[cfg(any(test, feature = "hydrate"))]
const STORAGE_FAILED_MESSAGE: &str = "Could not save session (storage unavailable).";

/// Collapse a token write into the login result. `None` means the browser
/// exposed no storage at all.
#[cfg(any(test, feature = "hydrate"))]
fn token_write_result<E>(written: Option<Result<(), E>>) -> Result<(), String> {
    match written {
        Some(Ok(())) => Ok(()),
        Some(Err(_)) | None => Err(STORAGE_FAILED_MESSAGE.to_owned()),
    }
}

/// Read the stored admin token, if any.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage
            .get_item(TOKEN_STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the token, or explain why the session cannot survive navigation.
#[cfg(feature = "hydrate")]
fn store_token(token: &str) -> Result<(), String> {
    let written = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .map(|storage| storage.set_item(TOKEN_STORAGE_KEY, token));
    let result = token_write_result(written);
    if result.is_err() {
        log::warn!("session token could not be written to localStorage");
    }
    result
}

fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}

/// Ask `/api/auth/me` whether the stored token still names a session.
///
/// Resolves `Ok(None)` without a request when no token is stored.
///
/// # Errors
///
/// Returns `GateError::AuthCheckFailed` on transport errors, unexpected
/// statuses, or an undecodable user body.
pub async fn verify_auth() -> Result<Option<SessionUser>, GateError> {
    #[cfg(feature = "hydrate")]
    {
        let Some(token) = read_token() else {
            return Ok(None);
        };
        let resp = gloo_net::http::Request::get(SESSION_ENDPOINT)
            .header("Authorization", &bearer_value(&token))
            .send()
            .await
            .map_err(|e| GateError::AuthCheckFailed(e.to_string()))?;
        if is_rejected_session(resp.status()) {
            return Ok(None);
        }
        if !resp.ok() {
            return Err(session_failed_error(resp.status()));
        }
        let user = resp
            .json::<SessionUser>()
            .await
            .map_err(|e| GateError::AuthCheckFailed(e.to_string()))?;
        Ok(Some(user))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(None)
    }
}

/// [`verify_auth`] bounded by `limit`.
///
/// # Errors
///
/// Returns `GateError::AuthCheckTimedOut` when `limit` elapses first, or any
/// error [`verify_auth`] returns.
pub async fn verify_auth_with_timeout(limit: Duration) -> Result<Option<SessionUser>, GateError> {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{Either, select};

        let check = Box::pin(verify_auth());
        let timer = Box::pin(gloo_timers::future::sleep(limit));
        match select(check, timer).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(GateError::AuthCheckTimedOut(limit)),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = limit;
        verify_auth().await
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, serde::Deserialize)]
struct LoginResponse {
    token: String,
}

/// Exchange admin credentials for a session token via `POST /api/auth/login`.
///
/// The token is stored for subsequent gate checks.
///
/// # Errors
///
/// Returns an error string if the request fails, the credentials are
/// rejected, or the token cannot be stored (the gate would otherwise bounce
/// straight back to the login page).
pub async fn login(email: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        let body: LoginResponse = resp.json().await.map_err(|e| e.to_string())?;
        store_token(&body.token)?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Drop the local token and tell the server via `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(token) = read_token() {
            let _ = gloo_net::http::Request::post("/api/auth/logout")
                .header("Authorization", &bearer_value(&token))
                .send()
                .await;
        }
    }
    clear_token();
}
