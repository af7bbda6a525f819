use std::collections::BTreeMap;
use std::fmt;

use serde::{ Deserialize, Serialize };

/// Kind of a component-exposed property, as named by the design tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyKind {
    Variant,
    Text,
    Boolean,
    InstanceSwap,
    Custom(String), // Kinds the host adds later
}

impl PropertyKind {
    pub fn as_str(&self) -> &str {
        match self {
            PropertyKind::Variant => "VARIANT",
            PropertyKind::Text => "TEXT",
            PropertyKind::Boolean => "BOOLEAN",
            PropertyKind::InstanceSwap => "INSTANCE_SWAP",
            PropertyKind::Custom(name) => name,
        }
    }
}

impl From<String> for PropertyKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "VARIANT" => PropertyKind::Variant,
            "TEXT" => PropertyKind::Text,
            "BOOLEAN" => PropertyKind::Boolean,
            "INSTANCE_SWAP" => PropertyKind::InstanceSwap,
            _ => PropertyKind::Custom(value),
        }
    }
}

impl From<PropertyKind> for String {
    fn from(kind: PropertyKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A primitive property value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

/// A single property exposed by a component or component set.
///
/// `kind` is optional on the wire so a malformed definition reaches the
/// normalizer and is rejected there with a useful message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<PropertyKind>,
    pub default_value: PropertyValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_options: Option<Vec<String>>,
}

impl PropertyDefinition {
    pub fn new(kind: PropertyKind, default_value: impl Into<PropertyValue>) -> Self {
        Self {
            kind: Some(kind),
            default_value: default_value.into(),
            variant_options: None,
        }
    }

    pub fn variant<S: Into<String>>(
        default_value: &str,
        options: impl IntoIterator<Item = S>
    ) -> Self {
        Self {
            kind: Some(PropertyKind::Variant),
            default_value: PropertyValue::from(default_value),
            variant_options: Some(options.into_iter().map(Into::into).collect()),
        }
    }
}

/// A resolved property on an instance node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceProperty {
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    pub value: PropertyValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_values: Option<Vec<serde_json::Value>>,
}

/// Prompt-ready description of one component input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedInput {
    #[serde(rename = "type")]
    pub type_name: String,
    pub default_value: PropertyValue,
}

/// Property metadata attached to the prompt, in whichever shape the node kind yields
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyMetadata {
    Definitions(BTreeMap<String, PropertyDefinition>),
    Instance(BTreeMap<String, InstanceProperty>),
    Normalized(BTreeMap<String, NormalizedInput>),
}

impl PropertyMetadata {
    pub fn len(&self) -> usize {
        match self {
            PropertyMetadata::Definitions(map) => map.len(),
            PropertyMetadata::Instance(map) => map.len(),
            PropertyMetadata::Normalized(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
