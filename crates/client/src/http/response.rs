//! Response parsing utilities for the HTTP client

use {
    crate::{CloudDbError, CloudDbResult},
    ::tracing::trace,
    reqwest::Response,
    serde_json::Value,
};

/// Response parsing methods for the Cloud Databases HTTP client
impl super::client::CloudDbHttpClient {
    /// Parses an API response into a JSON document.
    ///
    /// Non-2xx statuses become [`CloudDbError::Api`] carrying the status and
    /// the raw body. Several write endpoints answer 202 with an empty body
    /// on success and only produce a body on error; an empty successful body
    /// therefore decodes to `Value::Null` rather than a decode error.
    pub(crate) async fn parse_response(&self, res: Response) -> CloudDbResult<Value> {
        let status = res.status();
        let body = res.text().await.map_err(CloudDbError::Transport)?;

        trace!("[CloudDbHttpClient] HTTP {}: {}", status, &body);

        if !status.is_success() {
            return Err(CloudDbError::Api {
                status: status.as_u16(),
                body,
            });
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&body)?)
    }
}
