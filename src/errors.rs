use thiserror::Error;

/// Custom error types for the ComponentGPT pipeline
#[derive(Debug, Error)]
pub enum ComponentGptError {
    #[error("Select a component first")]
    NoSelection,

    #[error("Ran on non-component type selection ({kind}). Aborting.")]
    UnsupportedNodeType { kind: String },

    #[error("You need to provide an OpenAI API key.")]
    MissingCredential,

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to render node: {0}")]
    Render(String),

    #[error("Credential store error: {0}")]
    CredentialStore(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type specific to ComponentGPT operations
pub type ComponentGptResult<T> = Result<T, ComponentGptError>;

/// Broad grouping used when an error is reported back to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Nothing usable is selected
    Selection,
    /// The API key is absent
    Credential,
    /// The call to the model failed
    Upstream,
    /// The call succeeded but the content was unusable
    Content,
    /// Caller-supplied data was malformed
    Input,
    /// A host collaborator (renderer, key store, config) failed
    Host,
}

impl ComponentGptError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ComponentGptError::NoSelection | ComponentGptError::UnsupportedNodeType { .. } => {
                ErrorCategory::Selection
            }
            ComponentGptError::MissingCredential => ErrorCategory::Credential,
            ComponentGptError::Upstream(_) => ErrorCategory::Upstream,
            ComponentGptError::MalformedResponse(_) => ErrorCategory::Content,
            ComponentGptError::InvalidInput(_) => ErrorCategory::Input,
            ComponentGptError::Render(_)
            | ComponentGptError::CredentialStore(_)
            | ComponentGptError::Config(_) => ErrorCategory::Host,
        }
    }

    /// Text shown to the user. Upstream and content failures are worded so
    /// that a broken call can be told apart from an unusable answer.
    pub fn user_message(&self) -> String {
        match self.category() {
            ErrorCategory::Upstream => format!("The request to the model failed: {}", self),
            ErrorCategory::Content => {
                format!("The model responded but the content was unusable: {}", self)
            }
            _ => self.to_string(),
        }
    }
}
