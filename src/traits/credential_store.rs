use async_trait::async_trait;

use crate::errors::ComponentGptResult;

/// Storage key under which the model API key is kept
pub const API_KEY_STORAGE_KEY: &str = "apiKey";

/// Persistent key-value storage scoped to the plugin installation
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Read a value, `None` when it was never set
    async fn get(&self, key: &str) -> ComponentGptResult<Option<String>>;

    /// Write a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> ComponentGptResult<()>;
}
