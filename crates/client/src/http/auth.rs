//! Token acquisition against the identity service

use {
    crate::{Account, CloudDbError, CloudDbResult},
    ::tracing::{debug, instrument},
    serde::Serialize,
    serde_json::Value,
};

/// Credential document POSTed to the identity endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct AuthRequest {
    credentials: Credentials,
}

#[derive(Debug, Clone, Serialize)]
struct Credentials {
    username: String,
    key: String,
}

impl AuthRequest {
    pub fn new(account: &Account) -> Self {
        Self {
            credentials: Credentials {
                username: account.username.clone(),
                key: account.api_key.clone(),
            },
        }
    }
}

/// Authentication methods for the Cloud Databases HTTP client
impl super::client::CloudDbHttpClient {
    /// Acquires a bearer token from the identity service and stores it.
    ///
    /// Replaces any previously held token. Tokens are not refreshed
    /// automatically; on a 401 from a later operation, call this again.
    ///
    /// # Errors
    /// Fails with [`CloudDbError::MissingField`] when the identity response
    /// decodes but carries no `auth.token.id`.
    #[instrument(
        name = "clouddb.auth.acquire_token",
        skip(self),
        fields(username = %self.account.username),
        err
    )]
    pub async fn acquire_token(&mut self) -> CloudDbResult<()> {
        let uri = self.endpoints.auth_url.clone();

        debug!("POST {}", &uri);

        let request = AuthRequest::new(&self.account);

        let res = self
            .http
            .post(uri)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&request)
            .send()
            .await?;

        let doc = self.parse_response(res).await?;

        let token = doc
            .pointer("/auth/token/id")
            .and_then(Value::as_str)
            .ok_or(CloudDbError::MissingField("auth.token.id"))?;

        self.token = Some(token.to_string());

        debug!("acquired auth token");

        Ok(())
    }
}
