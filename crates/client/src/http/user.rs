//! Per-instance user and access-grant operations

use {
    crate::CloudDbResult,
    ::tracing::{debug, instrument},
    reqwest::Method,
    serde::Serialize,
    serde_json::Value,
};

use super::database::DatabasesRequest;

/// `{"users": [...]}` request document.
#[derive(Debug, Clone, Serialize)]
pub struct CreateUsersRequest {
    users: Vec<UserSpec>,
}

#[derive(Debug, Clone, Serialize)]
struct UserSpec {
    databases: Vec<UserDatabase>,
    name: String,
    password: String,
}

#[derive(Debug, Clone, Serialize)]
struct UserDatabase {
    name: String,
}

impl CreateUsersRequest {
    /// A single user with access to a single database, the shape the
    /// upstream API documents for user creation.
    pub fn single(
        name: impl Into<String>,
        password: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            users: vec![UserSpec {
                databases: vec![UserDatabase {
                    name: database.into(),
                }],
                name: name.into(),
                password: password.into(),
            }],
        }
    }
}

/// User management methods for the Cloud Databases HTTP client
impl super::client::CloudDbHttpClient {
    /// Lists the users on an instance.
    #[instrument(
        name = "clouddb.user.list",
        skip(self),
        fields(instance_id = %instance_id),
        err
    )]
    pub async fn list_users(&self, instance_id: &str) -> CloudDbResult<Value> {
        let uri = self
            .build_url()
            .endpoint("instances")
            .id(instance_id)
            .endpoint("users")
            .build();

        debug!("GET {}", &uri);

        let res = self.authed_request(Method::GET, &uri)?.send().await?;
        self.parse_response(res).await
    }

    /// Creates a user on an instance with access to one database.
    ///
    /// Answers 202 with an empty body on success.
    #[instrument(
        name = "clouddb.user.create",
        skip(self, password),
        fields(instance_id = %instance_id, user = %username, db = %database),
        err
    )]
    pub async fn create_user(
        &self,
        instance_id: &str,
        username: &str,
        password: &str,
        database: &str,
    ) -> CloudDbResult<Value> {
        let uri = self
            .build_url()
            .endpoint("instances")
            .id(instance_id)
            .endpoint("users")
            .build();

        debug!("POST {}", &uri);

        let request = CreateUsersRequest::single(username, password, database);

        let res = self
            .authed_request(Method::POST, &uri)?
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        self.parse_response(res).await
    }

    /// Grants a user access to a database.
    #[instrument(
        name = "clouddb.user.grant_access",
        skip(self),
        fields(instance_id = %instance_id, user = %username, db = %database),
        err
    )]
    pub async fn grant_user_access(
        &self,
        instance_id: &str,
        username: &str,
        database: &str,
    ) -> CloudDbResult<Value> {
        let uri = self
            .build_url()
            .endpoint("instances")
            .id(instance_id)
            .endpoint("users")
            .id(username)
            .endpoint("databases")
            .build();

        debug!("PUT {}", &uri);

        let request = DatabasesRequest::single(database);

        let res = self
            .authed_request(Method::PUT, &uri)?
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        self.parse_response(res).await
    }

    /// Revokes a user's access to a database.
    #[instrument(
        name = "clouddb.user.revoke_access",
        skip(self),
        fields(instance_id = %instance_id, user = %username, db = %database),
        err
    )]
    pub async fn revoke_user_access(
        &self,
        instance_id: &str,
        username: &str,
        database: &str,
    ) -> CloudDbResult<Value> {
        let uri = self
            .build_url()
            .endpoint("instances")
            .id(instance_id)
            .endpoint("users")
            .id(username)
            .endpoint("databases")
            .id(database)
            .build();

        debug!("DELETE {}", &uri);

        let res = self.authed_request(Method::DELETE, &uri)?.send().await?;
        self.parse_response(res).await
    }
}
