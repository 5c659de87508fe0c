//! Region enums and endpoint resolution.
//!
//! The identity endpoint depends on the auth geography (US/UK) and the
//! database endpoint on the datacenter (ORD/DFW/LON); both are fixed lookup
//! tables. Unknown codes fall back to the US/ORD defaults instead of
//! erroring, matching the upstream API client contract.

use serde::{Deserialize, Serialize};
use url::Url;

/// Datacenter hosting the Cloud Databases service.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub enum Datacenter {
    /// Chicago (default)
    #[default]
    Ord,
    /// Dallas/Ft. Worth
    Dfw,
    /// London
    Lon,
}

impl Datacenter {
    /// Parse a datacenter code such as `"DFW"`.
    ///
    /// Total function: unrecognized codes resolve to [`Datacenter::Ord`],
    /// the documented fallback.
    pub fn from_code(code: &str) -> Self {
        match code.to_ascii_uppercase().as_str() {
            "DFW" => Self::Dfw,
            "LON" => Self::Lon,
            "ORD" => Self::Ord,
            _ => Self::default(),
        }
    }

    /// Region label used in the service hostname.
    pub fn region(&self) -> &'static str {
        match self {
            Self::Ord => "ord",
            Self::Dfw => "dfw",
            Self::Lon => "lon",
        }
    }
}

/// Geography of the identity (authentication) service, independent of the
/// datacenter.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub enum AuthGeo {
    /// United States (default)
    #[default]
    Us,
    /// United Kingdom
    Uk,
}

impl AuthGeo {
    /// Parse an auth geography code such as `"UK"`.
    ///
    /// Total function: unrecognized codes resolve to [`AuthGeo::Us`], the
    /// documented fallback.
    pub fn from_code(code: &str) -> Self {
        match code.to_ascii_uppercase().as_str() {
            "UK" => Self::Uk,
            "US" => Self::Us,
            _ => Self::default(),
        }
    }

    fn auth_url(&self) -> &'static str {
        match self {
            Self::Us => "https://identity.api.rackspacecloud.com/v1.1/auth",
            Self::Uk => "https://lon.identity.api.rackspacecloud.com/v1.1/auth",
        }
    }
}

/// Resolved service endpoints for one client instance.
///
/// Derived once at construction from `(AuthGeo, Datacenter, account id)` and
/// immutable afterwards.
#[derive(Clone, Debug)]
pub struct EndpointSet {
    /// identity service URL that token acquisition POSTs to
    pub auth_url: Url,
    /// account-scoped Cloud Databases base URL, e.g.
    /// `https://ord.databases.api.rackspacecloud.com/v1.0/123456/`
    pub clouddb_url: Url,
}

impl EndpointSet {
    /// Build an endpoint set from explicit URLs.
    ///
    /// Useful for tests and non-public deployments; [`EndpointSet::resolve`]
    /// is the production path.
    pub fn new(auth_url: Url, clouddb_url: Url) -> Self {
        Self {
            auth_url,
            clouddb_url,
        }
    }

    /// Resolve the endpoint set for a region pair and account.
    ///
    /// Pure deterministic function of its inputs.
    pub fn resolve(auth_geo: AuthGeo, datacenter: Datacenter, account_id: &str) -> Self {
        let clouddb = format!(
            "https://{}.databases.api.rackspacecloud.com/v1.0/{}/",
            datacenter.region(),
            account_id
        );

        Self {
            auth_url: Url::parse(auth_geo.auth_url()).expect("fixed identity endpoint URL"),
            clouddb_url: Url::parse(&clouddb).expect("fixed database endpoint URL"),
        }
    }
}
