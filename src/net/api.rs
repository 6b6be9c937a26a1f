//! HTTP layer for the auth endpoint.
//!
//! Browser build (`csr`): one real POST per submit via `gloo-net`.
//! Native build: a stub returning a connection error, so page code
//! compiles and tests run without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Response classification lives in `parse_auth_response`, a pure helper
//! compiled for tests and the browser alike: non-2xx becomes
//! [`AuthError::Rejected`] with the body's `error` text when present, and
//! transport failures or malformed success bodies collapse into
//! [`AuthError::Connection`]. Callers surface these as notifications only —
//! no retry, nothing fatal.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthError, AuthRequest, User};
#[cfg(any(test, feature = "csr"))]
use super::types::ErrorBody;

/// Cloud-function URL serving both auth actions.
#[cfg(feature = "csr")]
const AUTH_ENDPOINT: &str = "https://functions.poehali.dev/a7ce37ac-4dac-469a-ac18-c44f893f499b";

/// Submit a login or register request and parse the response.
///
/// # Errors
///
/// Returns [`AuthError::Rejected`] for a non-2xx response and
/// [`AuthError::Connection`] when the request fails or the success body is
/// malformed.
pub async fn submit(request: &AuthRequest) -> Result<User, AuthError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(AUTH_ENDPOINT)
            .json(request)
            .map_err(|_| AuthError::Connection)?
            .send()
            .await
            .map_err(|_| AuthError::Connection)?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        let outcome = parse_auth_response(status, &body);
        if let Err(err) = &outcome {
            log::warn!("auth request failed: {err}");
        }
        outcome
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(AuthError::Connection)
    }
}

#[cfg(any(test, feature = "csr"))]
fn parse_auth_response(status: u16, body: &str) -> Result<User, AuthError> {
    if (200..300).contains(&status) {
        serde_json::from_str::<User>(body).map_err(|_| AuthError::Connection)
    } else {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error);
        Err(AuthError::Rejected { status, message })
    }
}
