//! Backend API base URL resolution and the endpoint table derived from it.

pub mod config;
pub mod dotenv;
pub mod endpoints;
pub mod error;
pub mod routes;

pub use config::{ApiConfig, BaseUrl, api_config, init};
pub use endpoints::{ApiEndpoints, Endpoint};
pub use error::ConfigError;
