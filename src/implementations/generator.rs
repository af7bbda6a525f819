use log::{ debug, info, warn };

use crate::config::GenerationOptions;
use crate::errors::{ ComponentGptError, ComponentGptResult };
use crate::implementations::config::ApiConfig;
use crate::implementations::prompt::{ build_request, encode_image, resolve_property_metadata };
use crate::implementations::response::parse_generation_result;
use crate::models::generation::GenerationResult;
use crate::models::node::DesignNode;
use crate::traits::completion_client::CompletionClient;
use crate::traits::design_tool::DesignTool;

/// Turns the current selection into framework source code.
///
/// Stateless between calls: the credential is passed in on every call and
/// nothing is cached.
///
/// # Usage Example
/// ```rust,no_run
/// use componentgpt::{ ApiConfig, ComponentGenerator, DesignTool, GenerationOptions, OpenAiClient };
///
/// async fn run(tool: &dyn DesignTool) -> Result<(), Box<dyn std::error::Error>> {
///     let api = ApiConfig::default();
///     let client = OpenAiClient::new(&api)?;
///     let generator = ComponentGenerator::new(client, api, GenerationOptions::default());
///
///     let code = generator.generate(tool, "React", "sk-...").await?;
///     println!("{}", code.component);
///     Ok(())
/// }
/// ```
pub struct ComponentGenerator<C> {
    client: C,
    api: ApiConfig,
    options: GenerationOptions,
}

impl<C: CompletionClient> ComponentGenerator<C> {
    pub fn new(client: C, api: ApiConfig, options: GenerationOptions) -> Self {
        Self { client, api, options }
    }

    /// Generate code for the first selected node.
    ///
    /// Every selected node must be a component, instance or component set.
    /// Selection and credential problems are reported before anything is
    /// rendered or sent.
    pub async fn generate(
        &self,
        tool: &dyn DesignTool,
        target_framework: &str,
        api_key: &str
    ) -> ComponentGptResult<GenerationResult> {
        let selection = tool.current_selection();
        let target = check_selection(&selection)?;

        if api_key.trim().is_empty() {
            warn!("Generation requested without an API key");
            return Err(ComponentGptError::MissingCredential);
        }

        info!("Generating {} code for '{}' ({})", target_framework, target.name, target.kind);
        let metadata = resolve_property_metadata(target, self.options.normalizer_mode)?;
        debug!("Resolved {} properties", metadata.len());

        let bytes = tool.export_as_image(target).await?;
        debug!("Exported image of {} bytes", bytes.len());
        let image = encode_image(&bytes);

        let request = build_request(&self.api, target_framework, &target.name, image, &metadata)?;
        let content = self.client.complete(&request, api_key).await?;

        let result = parse_generation_result(&content, self.options.fence_handling)?;
        info!("Received component code for '{}'", target.name);
        Ok(result)
    }
}

/// The node to render, once the whole selection has been checked
fn check_selection(selection: &[DesignNode]) -> ComponentGptResult<&DesignNode> {
    let target = selection.first().ok_or(ComponentGptError::NoSelection)?;

    if let Some(node) = selection.iter().find(|node| !node.kind.is_component_like()) {
        warn!("non-component type {}", node.kind);
        return Err(ComponentGptError::UnsupportedNodeType {
            kind: node.kind.to_string(),
        });
    }

    Ok(target)
}
