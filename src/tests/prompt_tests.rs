use std::collections::BTreeMap;

use serde_json::json;

use crate::config::NormalizerMode;
use crate::errors::ComponentGptError;
use crate::implementations::config::ApiConfig;
use crate::implementations::prompt::{
    build_request,
    encode_image,
    resolve_property_metadata,
    system_prompt,
    user_prompt,
};
use crate::models::node::{ DesignNode, NodeKind };
use crate::models::property::{ InstanceProperty, PropertyKind, PropertyMetadata, PropertyValue };
use crate::models::request::{ ContentPart, ImageDetail, MessageContent };
use crate::tests::support::{ button_component, button_set };

#[test]
fn component_definitions_are_sent_verbatim() {
    let metadata = resolve_property_metadata(&button_component(), NormalizerMode::Faithful).unwrap();

    assert_eq!(
        serde_json::to_value(&metadata).unwrap(),
        json!({ "Label#12:0": { "type": "TEXT", "defaultValue": "Click" } })
    );
}

#[test]
fn instance_properties_are_sent_verbatim() {
    let mut properties = BTreeMap::new();
    properties.insert("Size".to_string(), InstanceProperty {
        kind: PropertyKind::Variant,
        value: PropertyValue::Text("Small".to_string()),
        preferred_values: None,
    });
    let node = DesignNode::new("2:1", "Button", NodeKind::Instance).with_properties(properties);

    let metadata = resolve_property_metadata(&node, NormalizerMode::Faithful).unwrap();

    assert_eq!(
        serde_json::to_value(&metadata).unwrap(),
        json!({ "Size": { "type": "VARIANT", "value": "Small" } })
    );
}

#[test]
fn component_sets_are_normalized() {
    let metadata = resolve_property_metadata(&button_set(), NormalizerMode::Faithful).unwrap();

    assert!(matches!(metadata, PropertyMetadata::Normalized(_)));
    assert_eq!(
        serde_json::to_value(&metadata).unwrap(),
        json!({
            "disabled": { "type": "boolean", "defaultValue": false },
            "size": { "type": "large | small", "defaultValue": "defaultValue" }
        })
    );
}

#[test]
fn missing_metadata_resolves_to_empty_mapping() {
    let node = DesignNode::new("1:1", "Bare", NodeKind::Component);
    let metadata = resolve_property_metadata(&node, NormalizerMode::Faithful).unwrap();
    assert!(metadata.is_empty());
}

#[test]
fn other_node_kinds_are_unsupported() {
    let node = DesignNode::new("1:1", "Title", NodeKind::Other("TEXT".to_string()));
    let err = resolve_property_metadata(&node, NormalizerMode::Faithful).unwrap_err();
    assert!(matches!(err, ComponentGptError::UnsupportedNodeType { ref kind } if kind == "TEXT"));
}

#[test]
fn image_is_a_png_data_uri() {
    assert_eq!(encode_image(b"abc"), "data:image/png;base64,YWJj");
}

#[test]
fn system_prompt_names_framework_and_output_contract() {
    let prompt = system_prompt("Vue");
    assert!(prompt.contains("specializes in Vue"));
    assert!(prompt.contains("Storybook"));
    assert!(prompt.contains("Unsplash"));
    for key in ["\"component\"", "\"css\"", "\"html\"", "\"story\""] {
        assert!(prompt.contains(key), "missing {}", key);
    }
}

#[test]
fn user_prompt_embeds_framework_name_and_properties() {
    let metadata = resolve_property_metadata(&button_set(), NormalizerMode::Faithful).unwrap();
    let text = user_prompt("React", "Button", &metadata).unwrap();

    assert!(text.starts_with("Turn this into a React component."));
    assert!(text.contains("The components name should be Button."));
    assert!(text.ends_with(r#"{"disabled":{"type":"boolean","defaultValue":false},"size":{"type":"large | small","defaultValue":"defaultValue"}}"#));
}

#[test]
fn request_has_system_turn_and_one_multimodal_user_turn() {
    let metadata = resolve_property_metadata(&button_component(), NormalizerMode::Faithful).unwrap();
    let request = build_request(
        &ApiConfig::default(),
        "Angular",
        "Button",
        encode_image(b"png"),
        &metadata
    ).unwrap();

    assert_eq!(request.model, "gpt-4-vision-preview");
    assert_eq!(request.temperature, 0.0);
    assert_eq!(request.max_tokens, 4096);
    assert_eq!(request.messages.len(), 2);
    assert_eq!(request.messages[0].role, "system");
    assert_eq!(request.messages[1].role, "user");

    let parts = match &request.messages[1].content {
        MessageContent::Parts(parts) => parts,
        other => panic!("expected parts, got {:?}", other),
    };
    assert_eq!(parts.len(), 2);
    match &parts[0] {
        ContentPart::ImageUrl { image_url } => {
            assert!(image_url.url.starts_with("data:image/png;base64,"));
            assert_eq!(image_url.detail, ImageDetail::High);
        }
        other => panic!("expected image first, got {:?}", other),
    }
    assert!(matches!(&parts[1], ContentPart::Text { text } if text.contains("Angular")));
}

#[test]
fn request_serializes_to_chat_completion_shape() {
    let metadata = resolve_property_metadata(&button_component(), NormalizerMode::Faithful).unwrap();
    let request = build_request(&ApiConfig::default(), "Angular", "Button", "data:x".to_string(), &metadata).unwrap();

    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["messages"][0]["content"].as_str().map(|s| s.is_empty()), Some(false));
    assert_eq!(value["messages"][1]["content"][0]["type"], "image_url");
    assert_eq!(value["messages"][1]["content"][0]["image_url"]["detail"], "high");
    assert_eq!(value["messages"][1]["content"][0]["image_url"]["url"], "data:x");
    assert_eq!(value["messages"][1]["content"][1]["type"], "text");
}
