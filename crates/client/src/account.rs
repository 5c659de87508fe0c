use serde::{Deserialize, Serialize};

/// Rackspace account credentials.
///
/// Immutable after construction; the client never mutates these, it only
/// reads them when acquiring a token and when resolving the account-scoped
/// service endpoint.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Account {
    /// Rackspace username
    pub username: String,
    /// API key for the account (NOT the account password)
    pub api_key: String,
    /// numeric account identifier, as it appears in the service URL
    pub account_id: String,
}

impl Account {
    pub fn new(
        username: impl Into<String>,
        api_key: impl Into<String>,
        account_id: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            api_key: api_key.into(),
            account_id: account_id.into(),
        }
    }
}
