pub mod property;
pub mod node;
pub mod generation;
pub mod request;
pub mod message;

// Re-export common model types
pub use property::{
    InstanceProperty,
    NormalizedInput,
    PropertyDefinition,
    PropertyKind,
    PropertyMetadata,
    PropertyValue,
};
pub use node::{DesignNode, NodeKind};
pub use generation::{CodeArtifact, GenerationResult};
pub use request::{ChatMessage, ChatRequest, ContentPart, ImageDetail, ImageUrl, MessageContent};
pub use message::{ResponsePayload, UiCommand, UiMessage};
