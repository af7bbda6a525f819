pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
pub mod implementations;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::{ FenceHandling, GenerationOptions, NormalizerMode };
pub use errors::{ ComponentGptError, ComponentGptResult, ErrorCategory };
pub use implementations::config::{ ApiConfig, ConfigError, GeneratorConfig };
pub use implementations::generator::ComponentGenerator;
pub use implementations::host::{ DocumentDesignTool, FileCredentialStore, JsonLinesChannel };
pub use implementations::normalizer::normalize;
pub use implementations::openai_client::OpenAiClient;
pub use implementations::session::PluginSession;
pub use models::{
    CodeArtifact,
    DesignNode,
    GenerationResult,
    InstanceProperty,
    NodeKind,
    NormalizedInput,
    PropertyDefinition,
    PropertyKind,
    PropertyMetadata,
    PropertyValue,
    ResponsePayload,
    UiCommand,
    UiMessage,
};
pub use traits::{
    ClientError,
    CompletionClient,
    CredentialStore,
    DesignTool,
    UiChannel,
    API_KEY_STORAGE_KEY,
};
