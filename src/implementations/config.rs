use serde::{ Deserialize, Serialize };
use std::fs;
use std::path::{ Path, PathBuf };
use thiserror::Error;

use crate::config::{ FenceHandling, GenerationOptions, NormalizerMode };
use crate::errors::ComponentGptError;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4-vision-preview";
pub const DEFAULT_FRAMEWORK: &str = "Angular";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for ComponentGptError {
    fn from(err: ConfigError) -> Self {
        ComponentGptError::Config(err.to_string())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// API key for the model service, used when the credential store has none
    pub api_key: Option<String>,

    /// Chat-completion endpoint
    pub api_endpoint: String,

    /// Vision-capable model identifier
    pub model: String,

    /// Output token ceiling
    pub max_tokens: usize,

    /// Sampling temperature, 0 for deterministic output
    pub temperature: f32,

    /// Request timeout; the HTTP client default applies when unset
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            api_key: None,
            api_endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 4096,
            temperature: 0.0,
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Model endpoint settings
    pub api: ApiConfig,

    /// Framework used until the UI picks another one
    pub default_framework: String,

    /// How fenced replies are unwrapped
    pub fence_handling: FenceHandling,

    /// How component-set properties are reduced
    pub normalizer_mode: NormalizerMode,

    /// Location of the JSON credential store
    pub credential_store_path: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            api: ApiConfig::default(),
            default_framework: DEFAULT_FRAMEWORK.to_string(),
            fence_handling: FenceHandling::default(),
            normalizer_mode: NormalizerMode::default(),
            credential_store_path: None,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api.api_endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("api.api_endpoint must not be empty".to_string()));
        }
        if self.api.model.trim().is_empty() {
            return Err(ConfigError::Invalid("api.model must not be empty".to_string()));
        }
        if self.api.max_tokens == 0 {
            return Err(ConfigError::Invalid("api.max_tokens must be positive".to_string()));
        }
        Ok(())
    }

    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            fence_handling: self.fence_handling,
            normalizer_mode: self.normalizer_mode,
        }
    }

    /// Credential store location, defaulting to `~/.componentgpt/credentials.json`
    pub fn credential_store_path(&self) -> PathBuf {
        if let Some(path) = &self.credential_store_path {
            return path.clone();
        }
        let base = std::env
            ::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        base.join(".componentgpt").join("credentials.json")
    }

    /// API key from the config file, then from `OPENAI_API_KEY`
    pub fn fallback_api_key(&self) -> Option<String> {
        use log::debug;

        if let Some(api_key) = self.api.api_key.as_ref().filter(|k| !k.trim().is_empty()) {
            debug!("Using API key from config");
            return Some(api_key.clone());
        }

        match std::env::var("OPENAI_API_KEY") {
            Ok(key) if !key.trim().is_empty() => {
                debug!("Using API key from OPENAI_API_KEY");
                Some(key)
            }
            _ => None,
        }
    }
}
