pub mod design_tool;
pub mod credential_store;
pub mod completion_client;
pub mod ui_channel;

// Re-export traits
pub use design_tool::DesignTool;
pub use credential_store::{CredentialStore, API_KEY_STORAGE_KEY};
pub use completion_client::{ClientError, CompletionClient};
pub use ui_channel::UiChannel;
