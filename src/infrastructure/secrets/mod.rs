// Secrets subsystem
// Secret-store transport contract, its HTTP implementation, and the
// process-lifetime credential cache consumed during pool construction

pub mod credential_cache;
pub mod http_secret_store;

pub use credential_cache::CredentialCache;
pub use http_secret_store::HttpSecretStore;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Connection parameters for the datastore, sourced from the secret store
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialBundle {
    pub host: String,
    pub username: String,
    pub password: String,
}

/// Errors from fetching or decoding a secret
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("secret store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("secret store returned status {status} for '{name}'")]
    Status { name: String, status: u16 },

    #[error("secret payload could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Contract for the secret-store transport
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetch the raw secret blob stored under `name`
    async fn fetch_raw_secret(&self, name: &str) -> Result<String, SecretError>;
}
