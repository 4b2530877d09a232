use async_trait::async_trait;

use crate::infrastructure::secrets::{SecretError, SecretStore};

/// HTTP implementation of SecretStore
///
/// Fetches raw secret blobs from a vault-style endpoint:
/// `GET {base_url}/v1/secret/{name}`. The response body is returned as-is;
/// interpreting the payload is the caller's concern.
pub struct HttpSecretStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSecretStore {
    /// Creates a new HttpSecretStore against a base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl SecretStore for HttpSecretStore {
    async fn fetch_raw_secret(&self, name: &str) -> Result<String, SecretError> {
        let url = format!("{}/v1/secret/{}", self.base_url.trim_end_matches('/'), name);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(SecretError::Status {
                name: name.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
