use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use log::debug;

use crate::config::NormalizerMode;
use crate::errors::{ ComponentGptError, ComponentGptResult };
use crate::implementations::config::ApiConfig;
use crate::implementations::normalizer::normalize;
use crate::models::node::{ DesignNode, NodeKind };
use crate::models::property::PropertyMetadata;
use crate::models::request::{ ChatMessage, ChatRequest, ContentPart, ImageDetail, ImageUrl };

/// Property metadata sent with a node.
///
/// Components send their definitions and instances their resolved
/// properties as-is; only component sets go through the normalizer.
pub fn resolve_property_metadata(
    node: &DesignNode,
    mode: NormalizerMode
) -> ComponentGptResult<PropertyMetadata> {
    match &node.kind {
        NodeKind::Component =>
            Ok(
                PropertyMetadata::Definitions(
                    node.component_property_definitions.clone().unwrap_or_default()
                )
            ),
        NodeKind::Instance =>
            Ok(PropertyMetadata::Instance(node.component_properties.clone().unwrap_or_default())),
        NodeKind::ComponentSet => {
            let definitions = node.component_property_definitions.clone().unwrap_or_default();
            Ok(PropertyMetadata::Normalized(normalize(&definitions, mode)?))
        }
        NodeKind::Other(kind) => Err(ComponentGptError::UnsupportedNodeType { kind: kind.clone() }),
    }
}

/// PNG bytes as a `data:` URI
pub fn encode_image(bytes: &[u8]) -> String {
    format!("data:image/png;base64,{}", BASE64.encode(bytes))
}

pub fn system_prompt(target_framework: &str) -> String {
    format!(
        r#"You are an expert web developer who specializes in {framework}.
A user will provide you with a low-fidelity wireframe of a component and some meta information about the component.
You will return a component definition file as TypeScript, the html template and css for the stylings. Also provide a Storybook stories file in the CSFv3 standard.
It is possible that the component contains multiple variants or states. If this is the case, try to look at the component properties and match the states.
If you have any images, load them from Unsplash or use solid colored rectangles.
Use creative license to make the application more fleshed out.
Respond ONLY with the code in the form of a JSON object that follows the structure {{ "component": "typescript code goes here", "css": "css code goes here", "html": "html code goes here", "story": "story code goes here" }} with exactly these four keys. Skip any syntax highlighting, code fences or explanations."#,
        framework = target_framework
    )
}

pub fn user_prompt(
    target_framework: &str,
    component_name: &str,
    metadata: &PropertyMetadata
) -> ComponentGptResult<String> {
    let properties = serde_json
        ::to_string(metadata)
        .map_err(|e| ComponentGptError::InvalidInput(format!("Unserializable properties: {}", e)))?;

    Ok(
        format!(
            "Turn this into a {} component. The components name should be {}. Here's an object describing the properties {}",
            target_framework,
            component_name,
            properties
        )
    )
}

/// Assemble the system instruction and the single multimodal user turn
pub fn build_request(
    api: &ApiConfig,
    target_framework: &str,
    component_name: &str,
    image_data_uri: String,
    metadata: &PropertyMetadata
) -> ComponentGptResult<ChatRequest> {
    let text = user_prompt(target_framework, component_name, metadata)?;
    debug!("User prompt length: {} characters", text.len());

    Ok(ChatRequest {
        model: api.model.clone(),
        messages: vec![
            ChatMessage::system(system_prompt(target_framework)),
            ChatMessage::user(
                vec![
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: image_data_uri,
                            detail: ImageDetail::High,
                        },
                    },
                    ContentPart::Text { text }
                ]
            )
        ],
        temperature: api.temperature,
        max_tokens: api.max_tokens,
    })
}
