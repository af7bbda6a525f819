use log::{ debug, warn };
use serde_json::Value;

use crate::config::FenceHandling;
use crate::errors::{ ComponentGptError, ComponentGptResult };
use crate::models::generation::GenerationResult;
use crate::traits::completion_client::ClientError;

const FIXED_FENCE_PREFIX: usize = 7; // "```json"
const FIXED_FENCE_SUFFIX: usize = 3; // "```"

/// Pull `choices[0].message.content` out of a chat-completion envelope
pub fn extract_message_content(envelope: &str) -> Result<String, ClientError> {
    let json: Value = serde_json
        ::from_str(envelope)
        .map_err(|e| ClientError::Parse(format!("Invalid JSON response: {}", e)))?;

    if let Some(message) = json["error"]["message"].as_str() {
        return Err(ClientError::Parse(format!("API returned an error: {}", message)));
    }

    let choices = json["choices"]
        .as_array()
        .ok_or_else(|| ClientError::Parse("Response has no choices".to_string()))?;

    let first = choices
        .first()
        .ok_or_else(|| ClientError::Parse("API returned empty choices array".to_string()))?;

    first["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ClientError::Parse("Missing message content in first choice".to_string()))
}

/// Remove a surrounding code fence, if any
pub fn strip_code_fence(content: &str, handling: FenceHandling) -> ComponentGptResult<String> {
    match handling {
        FenceHandling::Structural => Ok(strip_structural(content).to_string()),
        FenceHandling::FixedOffset => strip_fixed_offset(content),
    }
}

fn strip_structural(content: &str) -> &str {
    let trimmed = content.trim();
    let opening = trimmed.len() - trimmed.trim_start_matches('`').len();
    if opening == 0 {
        return trimmed;
    }

    // Drop the opening run and its language tag, which may share a line with the body
    let body = trimmed[opening..].trim_start_matches(is_language_tag_char);

    body.trim_end().trim_end_matches('`').trim()
}

fn is_language_tag_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '.' | '-')
}

fn strip_fixed_offset(content: &str) -> ComponentGptResult<String> {
    if !content.starts_with('`') {
        return Ok(content.to_string());
    }

    let chars: Vec<char> = content.chars().collect();
    if chars.len() < FIXED_FENCE_PREFIX + FIXED_FENCE_SUFFIX {
        return Err(
            ComponentGptError::MalformedResponse(
                "Fenced response is shorter than its fence".to_string()
            )
        );
    }

    Ok(chars[FIXED_FENCE_PREFIX..chars.len() - FIXED_FENCE_SUFFIX].iter().collect())
}

/// Parse the assistant text into the four code artifacts
pub fn parse_generation_result(
    content: &str,
    handling: FenceHandling
) -> ComponentGptResult<GenerationResult> {
    let unfenced = strip_code_fence(content, handling)?;
    debug!("Parsing {} characters of model output", unfenced.len());

    let value: Value = serde_json::from_str(&unfenced).map_err(|e| {
        warn!("Model output is not valid JSON: {}", e);
        ComponentGptError::MalformedResponse(format!("Invalid JSON: {}", e))
    })?;

    if !value.is_object() {
        return Err(
            ComponentGptError::MalformedResponse("Expected a JSON object at top level".to_string())
        );
    }

    serde_json::from_value(value).map_err(|e| {
        warn!("Model output is missing required fields: {}", e);
        ComponentGptError::MalformedResponse(e.to_string())
    })
}
