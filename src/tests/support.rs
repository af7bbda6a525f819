use std::collections::{ BTreeMap, HashMap };
use std::sync::atomic::{ AtomicUsize, Ordering };
use std::sync::{ Arc, Mutex };

use async_trait::async_trait;

use crate::config::GenerationOptions;
use crate::errors::{ ComponentGptError, ComponentGptResult };
use crate::implementations::config::ApiConfig;
use crate::implementations::generator::ComponentGenerator;
use crate::models::message::UiMessage;
use crate::models::node::{ DesignNode, NodeKind };
use crate::models::property::{ PropertyDefinition, PropertyKind };
use crate::models::request::ChatRequest;
use crate::traits::completion_client::{ ClientError, CompletionClient };
use crate::traits::credential_store::CredentialStore;
use crate::traits::design_tool::DesignTool;
use crate::traits::ui_channel::UiChannel;

pub const WELL_FORMED_REPLY: &str = r#"{"component":"a","css":"b","html":"c","story":"d"}"#;

pub fn setup() {
    // Logger may already be initialized by another test
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Clone)]
pub enum MockReply {
    Content(String),
    NetworkFailure(String),
}

/// Completion client that records every call instead of touching the network
#[derive(Clone)]
pub struct MockClient {
    reply: MockReply,
    pub calls: Arc<AtomicUsize>,
    pub requests: Arc<Mutex<Vec<(ChatRequest, String)>>>,
}

impl MockClient {
    pub fn replying(content: &str) -> Self {
        Self::with_reply(MockReply::Content(content.to_string()))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_reply(MockReply::NetworkFailure(message.to_string()))
    }

    fn with_reply(reply: MockReply) -> Self {
        Self {
            reply,
            calls: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<(ChatRequest, String)> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionClient for MockClient {
    async fn complete(&self, request: &ChatRequest, api_key: &str) -> Result<String, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push((request.clone(), api_key.to_string()));
        match &self.reply {
            MockReply::Content(content) => Ok(content.clone()),
            MockReply::NetworkFailure(message) => Err(ClientError::Network(message.clone())),
        }
    }
}

/// Design tool with a fixed selection and a fixed rendering
pub struct StubDesignTool {
    pub selection: Vec<DesignNode>,
    pub image: Option<Vec<u8>>,
    pub exports: AtomicUsize,
}

impl StubDesignTool {
    pub fn new(selection: Vec<DesignNode>) -> Self {
        Self {
            selection,
            image: Some(vec![0x89, b'P', b'N', b'G']),
            exports: AtomicUsize::new(0),
        }
    }

    pub fn export_count(&self) -> usize {
        self.exports.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DesignTool for StubDesignTool {
    fn current_selection(&self) -> Vec<DesignNode> {
        self.selection.clone()
    }

    async fn export_as_image(&self, node: &DesignNode) -> ComponentGptResult<Vec<u8>> {
        self.exports.fetch_add(1, Ordering::SeqCst);
        self.image
            .clone()
            .ok_or_else(|| ComponentGptError::Render(format!("cannot render {}", node.name)))
    }
}

#[derive(Default)]
pub struct MemoryCredentialStore {
    entries: Mutex<HashMap<String, String>>,
    pub reads: AtomicUsize,
    read_only: bool,
}

impl MemoryCredentialStore {
    /// Store whose writes always fail
    pub fn read_only() -> Self {
        Self { read_only: true, ..Self::default() }
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.entries.lock().unwrap().insert(key.to_string(), value.to_string());
        store
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn get(&self, key: &str) -> ComponentGptResult<Option<String>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> ComponentGptResult<()> {
        if self.read_only {
            return Err(ComponentGptError::CredentialStore("store is read-only".to_string()));
        }
        self.entries.lock().unwrap().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingChannel {
    messages: Mutex<Vec<UiMessage>>,
}

impl RecordingChannel {
    pub fn messages(&self) -> Vec<UiMessage> {
        self.messages.lock().unwrap().clone()
    }
}

impl UiChannel for RecordingChannel {
    fn post(&self, message: UiMessage) {
        self.messages.lock().unwrap().push(message);
    }
}

pub fn generator(client: MockClient) -> ComponentGenerator<MockClient> {
    ComponentGenerator::new(client, ApiConfig::default(), GenerationOptions::default())
}

pub fn button_component() -> DesignNode {
    let mut definitions = BTreeMap::new();
    definitions.insert("Label#12:0".to_string(), PropertyDefinition::new(PropertyKind::Text, "Click"));
    DesignNode::new("1:1", "Button", NodeKind::Component).with_definitions(definitions)
}

pub fn button_set() -> DesignNode {
    let mut definitions = BTreeMap::new();
    definitions.insert("Size".to_string(), PropertyDefinition::variant("Large", ["Large", "Small"]));
    definitions.insert("Disabled#3:7".to_string(), PropertyDefinition::new(PropertyKind::Boolean, false));
    DesignNode::new("1:2", "Button", NodeKind::ComponentSet).with_definitions(definitions)
}
