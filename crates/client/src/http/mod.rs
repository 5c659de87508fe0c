//! Cloud Databases HTTP Client Module
//!
//! The client is organized into one submodule per API resource:
//!
//! - `client`: core client struct, constructors and request helpers
//! - `auth`: token acquisition against the identity service
//! - `flavor`: hardware profile catalog
//! - `instance`: instance lifecycle operations
//! - `database`: per-instance database operations
//! - `user`: per-instance user and access-grant operations
//! - `response`: response parsing utilities
//! - `url_builder`: URL construction utilities

pub mod auth;
pub mod client;
pub mod database;
pub mod flavor;
pub mod instance;
pub mod response;
pub mod url_builder;
pub mod user;

pub use auth::AuthRequest;
pub use client::CloudDbHttpClient;
pub use database::DatabasesRequest;
pub use instance::CreateInstanceRequest;
pub use user::CreateUsersRequest;
