//! Hardware profile (flavor) catalog operations

use {
    crate::CloudDbResult,
    ::tracing::{debug, instrument},
    reqwest::Method,
    serde_json::Value,
};

/// Flavor catalog methods for the Cloud Databases HTTP client
impl super::client::CloudDbHttpClient {
    /// Lists the available hardware profiles.
    #[instrument(name = "clouddb.flavor.list", skip(self), err)]
    pub async fn list_flavors(&self) -> CloudDbResult<Value> {
        let uri = self.build_url().endpoint("flavors").build();

        debug!("GET {}", &uri);

        let res = self.authed_request(Method::GET, &uri)?.send().await?;
        self.parse_response(res).await
    }

    /// Lists the available hardware profiles with full detail
    /// (the `flavors/detail` variant of the catalog endpoint).
    #[instrument(name = "clouddb.flavor.list_detail", skip(self), err)]
    pub async fn list_flavors_detail(&self) -> CloudDbResult<Value> {
        let uri = self
            .build_url()
            .endpoint("flavors")
            .endpoint("detail")
            .build();

        debug!("GET {}", &uri);

        let res = self.authed_request(Method::GET, &uri)?.send().await?;
        self.parse_response(res).await
    }
}
