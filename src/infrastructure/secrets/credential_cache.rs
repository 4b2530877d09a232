use tokio::sync::OnceCell;

use crate::infrastructure::secrets::{CredentialBundle, SecretError, SecretStore};

/// Process-lifetime cache for the datastore credential bundle
///
/// Fetches and parses the secret at most once; every later call returns the
/// memoized bundle without contacting the secret store. Credentials are
/// assumed not to rotate during a process's lifetime, so there is no expiry
/// or refresh path.
pub struct CredentialCache<S> {
    store: S,
    secret_name: String,
    cached: OnceCell<CredentialBundle>,
}

impl<S: SecretStore> CredentialCache<S> {
    /// Creates a new CredentialCache over a secret store
    pub fn new(store: S, secret_name: impl Into<String>) -> Self {
        Self {
            store,
            secret_name: secret_name.into(),
            cached: OnceCell::new(),
        }
    }

    /// The credential bundle, fetched from the secret store at most once
    ///
    /// Concurrent first callers coalesce into a single fetch. A failed
    /// fetch or parse leaves the cache empty, so the next call retries.
    pub async fn credentials(&self) -> Result<&CredentialBundle, SecretError> {
        self.cached
            .get_or_try_init(|| async {
                let raw = self
                    .store
                    .fetch_raw_secret(&self.secret_name)
                    .await
                    .map_err(|e| {
                        tracing::error!(error = %e, "failed to fetch datastore credentials");
                        e
                    })?;

                Ok(serde_json::from_str(&raw)?)
            })
            .await
    }
}
