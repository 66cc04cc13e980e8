// accio-api: Async Rust client for the Harry Potter API

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::{DEFAULT_BASE_URL, Endpoint, HpClient};
pub use error::Error;
pub use models::{CharacterResponse, SpellResponse, WandResponse};
pub use transport::TransportConfig;

// Status codes appear in `Error::Status`; re-exported so consumers need
// not depend on reqwest directly.
pub use reqwest::StatusCode;
