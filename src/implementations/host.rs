use std::collections::BTreeMap;
use std::io::Write;
use std::path::{ Path, PathBuf };
use std::sync::Mutex;

use async_trait::async_trait;
use log::{ debug, info, warn };
use serde::Deserialize;

use crate::errors::{ ComponentGptError, ComponentGptResult };
use crate::models::message::UiMessage;
use crate::models::node::DesignNode;
use crate::traits::credential_store::CredentialStore;
use crate::traits::design_tool::DesignTool;
use crate::traits::ui_channel::UiChannel;

#[derive(Debug, Deserialize)]
struct DocumentNode {
    #[serde(flatten)]
    node: DesignNode,
    /// Pre-rendered PNG, relative to the document
    image: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct Document {
    #[serde(default)]
    selection: Vec<DocumentNode>,
}

/// A design document described by a JSON file.
///
/// ```json
/// { "selection": [ { "id": "1:2", "name": "Button", "type": "COMPONENT_SET",
///                    "image": "button.png", "componentPropertyDefinitions": {} } ] }
/// ```
pub struct DocumentDesignTool {
    selection: Vec<DesignNode>,
    images: BTreeMap<String, PathBuf>,
}

impl DocumentDesignTool {
    pub fn from_file(path: &Path) -> ComponentGptResult<Self> {
        let contents = std::fs
            ::read_to_string(path)
            .map_err(|e|
                ComponentGptError::InvalidInput(
                    format!("Failed to read document {}: {}", path.display(), e)
                )
            )?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_json(&contents, base)
    }

    pub fn from_json(contents: &str, base_dir: &Path) -> ComponentGptResult<Self> {
        let document: Document = serde_json
            ::from_str(contents)
            .map_err(|e| ComponentGptError::InvalidInput(format!("Invalid document: {}", e)))?;

        let mut selection = Vec::with_capacity(document.selection.len());
        let mut images = BTreeMap::new();
        for entry in document.selection {
            if let Some(image) = entry.image {
                images.insert(entry.node.id.clone(), base_dir.join(image));
            }
            selection.push(entry.node);
        }

        info!("Loaded document with {} selected nodes", selection.len());
        Ok(Self { selection, images })
    }
}

#[async_trait]
impl DesignTool for DocumentDesignTool {
    fn current_selection(&self) -> Vec<DesignNode> {
        self.selection.clone()
    }

    async fn export_as_image(&self, node: &DesignNode) -> ComponentGptResult<Vec<u8>> {
        let path = self.images
            .get(&node.id)
            .ok_or_else(||
                ComponentGptError::Render(format!("Node '{}' has no rendered image", node.name))
            )?;

        debug!("Reading rendered image {}", path.display());
        tokio::fs
            ::read(path).await
            .map_err(|e| ComponentGptError::Render(format!("{}: {}", path.display(), e)))
    }
}

/// Key-value credential store kept in a JSON object file
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> ComponentGptResult<BTreeMap<String, String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) =>
                serde_json
                    ::from_str(&contents)
                    .map_err(|e|
                        ComponentGptError::CredentialStore(
                            format!("Corrupt credential file {}: {}", self.path.display(), e)
                        )
                    ),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(ComponentGptError::CredentialStore(e.to_string())),
        }
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn get(&self, key: &str) -> ComponentGptResult<Option<String>> {
        Ok(self.load().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> ComponentGptResult<()> {
        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            tokio::fs
                ::create_dir_all(parent).await
                .map_err(|e| ComponentGptError::CredentialStore(e.to_string()))?;
        }
        let contents = serde_json
            ::to_string_pretty(&entries)
            .map_err(|e| ComponentGptError::CredentialStore(e.to_string()))?;
        tokio::fs
            ::write(&self.path, contents).await
            .map_err(|e| ComponentGptError::CredentialStore(e.to_string()))?;

        debug!("Wrote credential '{}' to {}", key, self.path.display());
        Ok(())
    }
}

/// Writes each outbound message as one JSON line
pub struct JsonLinesChannel<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesChannel<W> {
    pub fn new(writer: W) -> Self {
        Self { writer: Mutex::new(writer) }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> UiChannel for JsonLinesChannel<W> {
    fn post(&self, message: UiMessage) {
        let line = match serde_json::to_string(&message) {
            Ok(line) => line,
            Err(e) => {
                warn!("Failed to serialize UI message: {}", e);
                return;
            }
        };

        let mut writer = self.writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
            warn!("Failed to post UI message: {}", e);
        }
    }
}
