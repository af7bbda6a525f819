use log::{ error, info, warn };

use crate::errors::ComponentGptResult;
use crate::implementations::generator::ComponentGenerator;
use crate::models::generation::{ CodeArtifact, GenerationResult };
use crate::models::message::{ ResponsePayload, UiCommand, UiMessage };
use crate::traits::completion_client::CompletionClient;
use crate::traits::credential_store::{ CredentialStore, API_KEY_STORAGE_KEY };
use crate::traits::design_tool::DesignTool;
use crate::traits::ui_channel::UiChannel;

/// Host-side glue between the UI panel and the generator.
///
/// Holds the selected framework and the key read at start-up; the key is
/// handed to the generator explicitly on each call.
pub struct PluginSession<C, S, U> {
    generator: ComponentGenerator<C>,
    store: S,
    channel: U,
    current_framework: String,
    api_key: Option<String>,
}

impl<C, S, U> PluginSession<C, S, U>
    where C: CompletionClient, S: CredentialStore, U: UiChannel
{
    pub fn new(
        generator: ComponentGenerator<C>,
        store: S,
        channel: U,
        default_framework: impl Into<String>
    ) -> Self {
        Self {
            generator,
            store,
            channel,
            current_framework: default_framework.into(),
            api_key: None,
        }
    }

    pub fn current_framework(&self) -> &str {
        &self.current_framework
    }

    pub fn channel(&self) -> &U {
        &self.channel
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the stored key and tell the UI about it
    pub async fn start(&mut self) -> ComponentGptResult<()> {
        let key = self.store.get(API_KEY_STORAGE_KEY).await?;
        info!("Loaded plugin session (api key present: {})", key.is_some());
        self.api_key = key.clone();
        self.channel.post(UiMessage::ApiKeyRetrieved { key });
        Ok(())
    }

    /// Dispatch one command from the UI.
    ///
    /// Generation failures are posted to the UI rather than returned; only
    /// credential-store failures on `SetApiKey` come back as errors.
    pub async fn handle(
        &mut self,
        tool: &dyn DesignTool,
        command: UiCommand
    ) -> ComponentGptResult<()> {
        info!("Handling UI command {}", command);
        match command {
            UiCommand::Generate => {
                let message = match self.generate(tool).await {
                    Ok(result) => UiMessage::ShowResponse {
                        message: ResponsePayload::Code(result),
                    },
                    Err(e) => {
                        error!("Generation failed: {}", e);
                        UiMessage::Error { message: e.user_message() }
                    }
                };
                self.channel.post(message);
            }
            UiCommand::SetApiKey(key) => {
                self.store.set(API_KEY_STORAGE_KEY, &key).await?;
                self.api_key = Some(key);
                info!("Stored new API key");
            }
            UiCommand::SetFramework(framework) => {
                info!("Framework set to {}", framework);
                self.current_framework = framework.clone();
                self.channel.post(UiMessage::FrameworkUpdated { current_framework: framework });
            }
        }
        Ok(())
    }

    /// Parse a legacy dot-delimited command and dispatch it.
    ///
    /// Every failure, including a credential store that cannot be written,
    /// is posted to the UI so a message loop keeps running.
    pub async fn handle_wire(&mut self, tool: &dyn DesignTool, wire: &str) -> ComponentGptResult<()> {
        let outcome = match wire.parse::<UiCommand>() {
            Ok(command) => self.handle(tool, command).await,
            Err(e) => Err(e),
        };
        if let Err(e) = outcome {
            warn!("{}", e);
            self.channel.post(UiMessage::Error { message: e.user_message() });
        }
        Ok(())
    }

    /// Code-panel entry point: generate for `language` and return labeled blocks
    pub async fn codegen(
        &mut self,
        tool: &dyn DesignTool,
        language: &str
    ) -> ComponentGptResult<Vec<CodeArtifact>> {
        let api_key = self.resolve_api_key().await?;
        let result = self.generator.generate(tool, language, &api_key).await?;
        Ok(result.artifacts())
    }

    async fn generate(
        &mut self,
        tool: &dyn DesignTool
    ) -> ComponentGptResult<GenerationResult> {
        let api_key = self.resolve_api_key().await?;
        let framework = self.current_framework.clone();
        self.generator.generate(tool, &framework, &api_key).await
    }

    /// Cached key, else one read from the store. An absent key resolves to
    /// the empty string so the generator reports it as missing.
    async fn resolve_api_key(&mut self) -> ComponentGptResult<String> {
        if let Some(key) = self.api_key.as_ref().filter(|k| !k.is_empty()) {
            return Ok(key.clone());
        }
        let stored = self.store.get(API_KEY_STORAGE_KEY).await.map_err(|e| {
            warn!("Error retrieving API key: {}", e);
            e
        })?;
        if stored.is_none() {
            warn!("Error retrieving API key");
        }
        self.api_key = stored.clone();
        Ok(stored.unwrap_or_default())
    }
}
