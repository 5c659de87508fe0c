//! Core HTTP client struct and constructors

use {
    crate::{Account, AuthGeo, CloudDbError, CloudDbResult, Datacenter, EndpointSet},
    reqwest::{Client, Method, RequestBuilder},
    std::time::Duration,
};

use super::url_builder::UrlBuilder;

/// Default per-request timeout applied by the plain constructors.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Rackspace Cloud Databases API.
///
/// Holds the account credentials, the endpoints resolved once at
/// construction, and at most one bearer token. Cloning the client clones the
/// token with it; only [`acquire_token`](Self::acquire_token) ever mutates
/// the stored token.
#[derive(Clone, Debug)]
pub struct CloudDbHttpClient {
    pub endpoints: EndpointSet,
    pub(crate) http: Client,
    pub(crate) account: Account,
    /// bearer token; `None` until `acquire_token` succeeds
    pub(crate) token: Option<String>,
}

impl CloudDbHttpClient {
    /// Creates a client without authenticating.
    ///
    /// Endpoints are resolved deterministically from the region pair; no
    /// network request is made. Call [`acquire_token`](Self::acquire_token)
    /// before issuing any operation, or use [`connect`](Self::connect) to do
    /// both in one step.
    pub fn new(account: Account, datacenter: Datacenter, auth_geo: AuthGeo) -> CloudDbResult<Self> {
        Self::new_with_timeout(account, datacenter, auth_geo, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Creates a client without authenticating, with a custom per-request
    /// timeout.
    pub fn new_with_timeout(
        account: Account,
        datacenter: Datacenter,
        auth_geo: AuthGeo,
        timeout: Duration,
    ) -> CloudDbResult<Self> {
        let endpoints = EndpointSet::resolve(auth_geo, datacenter, &account.account_id);
        Self::with_endpoints_and_timeout(account, endpoints, timeout)
    }

    /// Creates a client and immediately acquires a token.
    ///
    /// This is the conventional way to construct the client; token
    /// acquisition may fail, in which case the error surfaces here.
    ///
    /// # Example
    /// ```rust,no_run
    /// # use clouddb_client::*;
    /// # async fn example() -> CloudDbResult<()> {
    /// let account = Account::new("my-user", "my-api-key", "123456");
    /// let client = CloudDbHttpClient::connect(account, Datacenter::Dfw, AuthGeo::Us).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(
        account: Account,
        datacenter: Datacenter,
        auth_geo: AuthGeo,
    ) -> CloudDbResult<Self> {
        let mut client = Self::new(account, datacenter, auth_geo)?;
        client.acquire_token().await?;
        Ok(client)
    }

    /// Creates a client against an explicit [`EndpointSet`], bypassing
    /// region resolution. Does not authenticate.
    pub fn with_endpoints(account: Account, endpoints: EndpointSet) -> CloudDbResult<Self> {
        Self::with_endpoints_and_timeout(account, endpoints, DEFAULT_REQUEST_TIMEOUT)
    }

    fn with_endpoints_and_timeout(
        account: Account,
        endpoints: EndpointSet,
        timeout: Duration,
    ) -> CloudDbResult<Self> {
        Ok(Self {
            endpoints,
            http: Client::builder().timeout(timeout).build()?,
            account,
            token: None,
        })
    }

    /// Whether a token is currently held.
    ///
    /// Tokens are opaque and carry no expiry information here; a held token
    /// may still be rejected by the API with a 401.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Centralized URL builder rooted at the account-scoped database
    /// endpoint.
    pub(crate) fn build_url(&self) -> UrlBuilder<'_> {
        UrlBuilder::new(&self.endpoints.clouddb_url)
    }

    /// The held token, or `Unauthenticated` if none was acquired yet.
    pub(crate) fn token(&self) -> CloudDbResult<&str> {
        self.token.as_deref().ok_or(CloudDbError::Unauthenticated)
    }

    /// Starts an authenticated request: fails fast without touching the
    /// network when no token is held, otherwise attaches the `X-Auth-Token`
    /// and `Accept` headers. Bodied operations add `Content-Type` on top.
    pub(crate) fn authed_request(
        &self,
        method: Method,
        uri: &str,
    ) -> CloudDbResult<RequestBuilder> {
        let token = self.token()?;

        Ok(self
            .http
            .request(method, uri)
            .header("X-Auth-Token", token)
            .header("Accept", "application/json"))
    }
}
