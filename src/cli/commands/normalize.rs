use anyhow::{ anyhow, Result };
use std::path::Path;

use componentgpt::implementations::prompt::resolve_property_metadata;
use componentgpt::{ DesignTool, DocumentDesignTool, GeneratorConfig };

use crate::cli::ui;

/// Print the property metadata that `generate` would send for the first selected node
pub fn execute(config: &GeneratorConfig, document: &Path) -> Result<()> {
    let tool = DocumentDesignTool::from_file(document)?;
    let selection = tool.current_selection();
    let node = selection.first().ok_or_else(|| anyhow!("The document has no selected node"))?;

    let metadata = resolve_property_metadata(node, config.normalizer_mode)?;

    ui::print_result("Node", &format!("{} ({})", node.name, node.kind));
    ui::print_result("Properties", &metadata.len().to_string());
    println!("{}", serde_json::to_string_pretty(&metadata)?);
    Ok(())
}
