use anyhow::{ anyhow, Result };

use componentgpt::{ CredentialStore, FileCredentialStore, GeneratorConfig, API_KEY_STORAGE_KEY };

use crate::cli::ui;

/// Persist the API key, prompting for it when not given
pub async fn execute(config: &GeneratorConfig, key: Option<&str>) -> Result<()> {
    let key = match key {
        Some(key) => key.to_string(),
        None => ui::prompt_api_key()?,
    };
    let key = key.trim();
    if key.is_empty() {
        return Err(anyhow!("The API key must not be empty"));
    }

    let store = FileCredentialStore::new(config.credential_store_path());
    store.set(API_KEY_STORAGE_KEY, key).await?;

    ui::print_success(&format!("API key saved to {}", store.path().display()));
    Ok(())
}
