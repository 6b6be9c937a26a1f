//! Wire DTOs for the auth endpoint.
//!
//! DESIGN
//! ======
//! The endpoint is a loosely typed cloud function: one URL, the operation
//! selected by an `action` discriminator in the request body. Numbers in
//! responses may arrive as integer-valued floats, so `User::id` goes through
//! a tolerant deserializer instead of a plain `i64`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Request body for the auth endpoint, tagged by the `action` field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum AuthRequest {
    /// Sign in with an existing account.
    Login { email: String, password: String },
    /// Create an account and sign in.
    Register {
        email: String,
        username: String,
        password: String,
    },
}

/// The signed-in user as returned by a successful login/register response.
///
/// Held client-side only; destroyed by logout or page reload. The live
/// service returns extra fields (e.g. a points counter) that this client
/// does not render — serde drops them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique account identifier.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Account email address.
    pub email: String,
    /// Display name.
    pub username: String,
}

/// Failure response body; the `error` field is optional on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Error returned by [`crate::net::api::submit`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The endpoint answered with a non-2xx status; `message` carries the
    /// body's `error` text when one was present.
    #[error("auth request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    /// The request never completed, or a success body failed to parse.
    #[error("connection to the auth endpoint failed")]
    Connection,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
