//! Error taxonomy for Cloud Databases operations.

use thiserror::Error;

/// Every failure a public client operation can surface.
///
/// The client performs no retries and swallows nothing; callers inspect the
/// variant (or the helper predicates) and decide what to do.
#[derive(Error, Debug)]
pub enum CloudDbError {
    /// Connection, DNS or timeout failure before a response was received.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-2xx status. The raw body is preserved so
    /// callers can interpret API-specific error documents.
    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// A non-empty response body was not valid JSON.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A response decoded fine but an expected field was absent
    /// (e.g. `auth.token.id` in the identity response).
    #[error("decode error: missing field `{0}` in response")]
    MissingField(&'static str),

    /// An operation was attempted before a token was acquired. No request
    /// is issued in this case.
    #[error("no auth token held; call acquire_token() first")]
    Unauthenticated,
}

impl CloudDbError {
    /// Returns true for a 401/403 API response.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401 | 403, .. })
    }

    /// Returns true for a 404 API response.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    /// Returns true for a 5xx API response.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if (500u16..600).contains(status))
    }
}
