//! Instance lifecycle operations

use {
    crate::CloudDbResult,
    ::tracing::{debug, instrument},
    reqwest::Method,
    serde::Serialize,
    serde_json::Value,
};

/// Instance creation request document.
#[derive(Debug, Clone, Serialize)]
pub struct CreateInstanceRequest {
    instance: InstanceSpec,
}

#[derive(Debug, Clone, Serialize)]
struct InstanceSpec {
    #[serde(rename = "flavorRef")]
    flavor_ref: String,
    name: String,
    volume: VolumeSpec,
}

#[derive(Debug, Clone, Serialize)]
struct VolumeSpec {
    size: u32,
}

impl CreateInstanceRequest {
    pub fn new(flavor_ref: impl Into<String>, name: impl Into<String>, volume_size: u32) -> Self {
        Self {
            instance: InstanceSpec {
                flavor_ref: flavor_ref.into(),
                name: name.into(),
                volume: VolumeSpec { size: volume_size },
            },
        }
    }
}

/// Instance lifecycle methods for the Cloud Databases HTTP client
impl super::client::CloudDbHttpClient {
    /// Lists all database instances on the account.
    #[instrument(name = "clouddb.instance.list", skip(self), err)]
    pub async fn list_instances(&self) -> CloudDbResult<Value> {
        let uri = self.build_url().endpoint("instances").build();

        debug!("GET {}", &uri);

        let res = self.authed_request(Method::GET, &uri)?.send().await?;
        self.parse_response(res).await
    }

    /// Provisions a new database instance.
    ///
    /// `flavor` is the flavor identifier from the catalog; the request
    /// carries it as a full `flavorRef` URL rooted at this account's
    /// endpoint. `volume_size` is in GB; the API accepts 1-150 and rejects
    /// values outside that range itself, nothing is validated locally.
    ///
    /// # Example
    /// ```rust,no_run
    /// # use clouddb_client::*;
    /// # async fn example(client: CloudDbHttpClient) -> CloudDbResult<()> {
    /// let created = client.create_instance("my-instance", "1", 2).await?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(
        name = "clouddb.instance.create",
        skip(self),
        fields(name = %name, flavor = %flavor, volume_size = volume_size),
        err
    )]
    pub async fn create_instance(
        &self,
        name: &str,
        flavor: &str,
        volume_size: u32,
    ) -> CloudDbResult<Value> {
        let uri = self.build_url().endpoint("instances").build();
        let flavor_ref = self.build_url().endpoint("flavors").id(flavor).build();

        debug!("POST {}", &uri);

        let request = CreateInstanceRequest::new(flavor_ref, name, volume_size);

        let res = self
            .authed_request(Method::POST, &uri)?
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        self.parse_response(res).await
    }

    /// Deletes an instance permanently, including its databases and users.
    #[instrument(
        name = "clouddb.instance.delete",
        skip(self),
        fields(instance_id = %instance_id),
        err
    )]
    pub async fn delete_instance(&self, instance_id: &str) -> CloudDbResult<Value> {
        let uri = self.build_url().endpoint("instances").id(instance_id).build();

        debug!("DELETE {}", &uri);

        let res = self.authed_request(Method::DELETE, &uri)?.send().await?;
        self.parse_response(res).await
    }

    /// Restarts the database service on an instance.
    ///
    /// Answers 202 with an empty body on success.
    #[instrument(
        name = "clouddb.instance.restart",
        skip(self),
        fields(instance_id = %instance_id),
        err
    )]
    pub async fn restart_instance(&self, instance_id: &str) -> CloudDbResult<Value> {
        let uri = self
            .build_url()
            .endpoint("instances")
            .id(instance_id)
            .endpoint("action")
            .build();

        debug!("POST {}", &uri);

        let res = self
            .authed_request(Method::POST, &uri)?
            .header("Content-Type", "application/json")
            .json(&RestartRequest::default())
            .send()
            .await?;

        self.parse_response(res).await
    }
}

/// `{"restart": {}}` action document.
#[derive(Debug, Clone, Default, Serialize)]
struct RestartRequest {
    restart: Restart,
}

#[derive(Debug, Clone, Default, Serialize)]
struct Restart {}
