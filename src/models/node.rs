use std::collections::BTreeMap;
use std::fmt;

use serde::{ Deserialize, Serialize };

use crate::models::property::{ InstanceProperty, PropertyDefinition };

/// Type of a selectable node in the design document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    Component,
    Instance,
    ComponentSet,
    Other(String),
}

impl NodeKind {
    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Component => "COMPONENT",
            NodeKind::Instance => "INSTANCE",
            NodeKind::ComponentSet => "COMPONENT_SET",
            NodeKind::Other(name) => name,
        }
    }

    /// Only components, instances and component sets can be turned into code
    pub fn is_component_like(&self) -> bool {
        !matches!(self, NodeKind::Other(_))
    }
}

impl From<String> for NodeKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "COMPONENT" => NodeKind::Component,
            "INSTANCE" => NodeKind::Instance,
            "COMPONENT_SET" => NodeKind::ComponentSet,
            _ => NodeKind::Other(value),
        }
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node as exposed by the design tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Property definitions, present on components and component sets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_property_definitions: Option<BTreeMap<String, PropertyDefinition>>,
    /// Resolved properties, present on instances
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_properties: Option<BTreeMap<String, InstanceProperty>>,
}

impl DesignNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            component_property_definitions: None,
            component_properties: None,
        }
    }

    pub fn with_definitions(mut self, definitions: BTreeMap<String, PropertyDefinition>) -> Self {
        self.component_property_definitions = Some(definitions);
        self
    }

    pub fn with_properties(mut self, properties: BTreeMap<String, InstanceProperty>) -> Self {
        self.component_properties = Some(properties);
        self
    }
}
