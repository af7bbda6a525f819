pub mod generate;
pub mod normalize;
pub mod api_key;
pub mod session;

use anyhow::Result;
use log::info;

use componentgpt::{ CredentialStore, FileCredentialStore, GeneratorConfig, API_KEY_STORAGE_KEY };

/// Key from the flag, then the credential store, then config and environment
pub async fn resolve_api_key(config: &GeneratorConfig, flag: Option<&str>) -> Result<String> {
    if let Some(key) = flag.filter(|k| !k.trim().is_empty()) {
        info!("Using API key from command line");
        return Ok(key.to_string());
    }

    let store = FileCredentialStore::new(config.credential_store_path());
    if let Some(key) = store.get(API_KEY_STORAGE_KEY).await?.filter(|k| !k.trim().is_empty()) {
        info!("Using API key from {}", store.path().display());
        return Ok(key);
    }

    Ok(config.fallback_api_key().unwrap_or_default())
}
