//! Client library for the Rackspace Cloud Databases API.
//!
//! Authenticates against the Rackspace identity service to obtain a bearer
//! token, then issues CRUD operations against database instances, databases
//! and users hosted in a datacenter region.
//!
//! ```rust,no_run
//! use clouddb_client::{Account, AuthGeo, CloudDbHttpClient, Datacenter};
//!
//! # async fn example() -> clouddb_client::CloudDbResult<()> {
//! let account = Account::new("my-user", "my-api-key", "123456");
//! let client = CloudDbHttpClient::connect(account, Datacenter::Ord, AuthGeo::Us).await?;
//!
//! let instances = client.list_instances().await?;
//! # Ok(())
//! # }
//! ```

pub use {account::*, endpoint::*, err::*, http::*};

mod account;
mod endpoint;
pub mod err;
mod http;

/// Result alias used by every public operation of this crate.
pub type CloudDbResult<T> = Result<T, CloudDbError>;
