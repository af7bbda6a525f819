use std::fmt;
use std::str::FromStr;

use serde::{ Deserialize, Serialize };

use crate::errors::ComponentGptError;
use crate::models::generation::GenerationResult;

/// Message posted from the plugin to the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum UiMessage {
    ApiKeyRetrieved {
        key: Option<String>,
    },
    ShowResponse {
        message: ResponsePayload,
    },
    #[serde(rename_all = "camelCase")]
    FrameworkUpdated {
        current_framework: String,
    },
    Error {
        message: String,
    },
}

/// Body of a `showResponse` message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponsePayload {
    Code(GenerationResult),
}

/// Command sent from the UI to the plugin.
///
/// Also parsed from the legacy dot-delimited wire form (`setApiKey.<key>`)
/// that existing host panels still send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum UiCommand {
    Generate,
    SetApiKey(String),
    SetFramework(String),
}

impl UiCommand {
    /// Legacy dot-delimited encoding
    pub fn to_wire(&self) -> String {
        match self {
            UiCommand::Generate => "generate".to_string(),
            UiCommand::SetApiKey(key) => format!("setApiKey.{}", key),
            UiCommand::SetFramework(framework) => format!("setFramework.{}", framework),
        }
    }
}

impl FromStr for UiCommand {
    type Err = ComponentGptError;

    fn from_str(wire: &str) -> Result<Self, Self::Err> {
        let wire = wire.trim();
        if wire == "generate" {
            return Ok(UiCommand::Generate);
        }

        match wire.split_once('.') {
            Some(("setApiKey", key)) => Ok(UiCommand::SetApiKey(key.to_string())),
            Some(("setFramework", framework)) if !framework.is_empty() => {
                Ok(UiCommand::SetFramework(framework.to_string()))
            }
            _ => Err(ComponentGptError::InvalidInput(format!("Unknown UI command: {}", wire))),
        }
    }
}

impl fmt::Display for UiCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never echo the key itself
        match self {
            UiCommand::SetApiKey(_) => f.write_str("setApiKey.<redacted>"),
            other => f.write_str(&other.to_wire()),
        }
    }
}
