use anyhow::Result;
use log::{ debug, info };
use std::path::Path;
use tokio::io::{ AsyncBufReadExt, BufReader };

use componentgpt::{
    ComponentGenerator,
    DocumentDesignTool,
    FileCredentialStore,
    GeneratorConfig,
    JsonLinesChannel,
    OpenAiClient,
    PluginSession,
};

/// Line-oriented plugin loop: wire commands on stdin, JSON messages on stdout
pub async fn execute(config: &GeneratorConfig, document: &Path) -> Result<()> {
    let tool = DocumentDesignTool::from_file(document)?;
    let client = OpenAiClient::new(&config.api)?;
    let generator = ComponentGenerator::new(client, config.api.clone(), config.generation_options());
    let store = FileCredentialStore::new(config.credential_store_path());
    let channel = JsonLinesChannel::new(std::io::stdout());

    let mut session = PluginSession::new(generator, store, channel, config.default_framework.clone());
    session.start().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        debug!("Received {} byte command", line.len());
        session.handle_wire(&tool, line).await?;
    }

    info!("Input closed, ending session");
    Ok(())
}
