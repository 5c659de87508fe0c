//! Per-instance database operations

use {
    crate::CloudDbResult,
    ::tracing::{debug, instrument},
    reqwest::Method,
    serde::Serialize,
    serde_json::Value,
};

/// `{"databases": [{"name": ...}]}` request document, shared by database
/// creation and access grants.
#[derive(Debug, Clone, Serialize)]
pub struct DatabasesRequest {
    databases: Vec<DatabaseName>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct DatabaseName {
    name: String,
}

impl DatabasesRequest {
    pub fn single(name: impl Into<String>) -> Self {
        Self {
            databases: vec![DatabaseName { name: name.into() }],
        }
    }
}

/// Database administration methods for the Cloud Databases HTTP client
impl super::client::CloudDbHttpClient {
    /// Creates a database on an instance.
    ///
    /// The API rejects names containing `.`; that constraint is the
    /// server's to enforce, nothing is validated locally. Answers 202 with
    /// an empty body on success.
    #[instrument(
        name = "clouddb.database.create",
        skip(self),
        fields(instance_id = %instance_id, db = %name),
        err
    )]
    pub async fn create_database(&self, instance_id: &str, name: &str) -> CloudDbResult<Value> {
        let uri = self
            .build_url()
            .endpoint("instances")
            .id(instance_id)
            .endpoint("databases")
            .build();

        debug!("POST {}", &uri);

        let request = DatabasesRequest::single(name);

        let res = self
            .authed_request(Method::POST, &uri)?
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        self.parse_response(res).await
    }

    /// Lists the databases on an instance.
    #[instrument(
        name = "clouddb.database.list",
        skip(self),
        fields(instance_id = %instance_id),
        err
    )]
    pub async fn list_databases(&self, instance_id: &str) -> CloudDbResult<Value> {
        let uri = self
            .build_url()
            .endpoint("instances")
            .id(instance_id)
            .endpoint("databases")
            .build();

        debug!("GET {}", &uri);

        let res = self.authed_request(Method::GET, &uri)?.send().await?;
        self.parse_response(res).await
    }
}
