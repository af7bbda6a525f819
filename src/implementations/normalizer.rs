use std::collections::BTreeMap;

use log::debug;

use crate::config::NormalizerMode;
use crate::errors::{ ComponentGptError, ComponentGptResult };
use crate::models::property::{ NormalizedInput, PropertyDefinition, PropertyKind, PropertyValue };

const DEFAULT_VALUE_LITERAL: &str = "defaultValue";

/// Lower-case the first character, leave the rest untouched
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Property name without its `#id` suffix, first letter lower-cased
pub fn clean_property_name(key: &str) -> String {
    let base = key.split('#').next().unwrap_or(key);
    lower_first(base)
}

/// Normalize every property definition of a component set.
///
/// Produces one entry per cleaned name; when two keys clean to the same name
/// the later one in key order wins. In `Faithful` mode the numeric check and
/// the variant default use the literal string `"defaultValue"` instead of the
/// property's real default, matching what the plugin has always sent.
pub fn normalize(
    properties: &BTreeMap<String, PropertyDefinition>,
    mode: NormalizerMode
) -> ComponentGptResult<BTreeMap<String, NormalizedInput>> {
    let mut inputs = BTreeMap::new();

    for (key, definition) in properties {
        let kind = definition.kind
            .as_ref()
            .ok_or_else(||
                ComponentGptError::InvalidInput(format!("Property '{}' has no type", key))
            )?;

        let input = match kind {
            PropertyKind::Variant => normalize_variant(key, definition, mode)?,
            other => NormalizedInput {
                type_name: if is_numeric(definition, mode) {
                    "number".to_string()
                } else {
                    other.as_str().to_lowercase()
                },
                default_value: definition.default_value.clone(),
            },
        };

        inputs.insert(clean_property_name(key), input);
    }

    debug!("Normalized {} property definitions", inputs.len());
    Ok(inputs)
}

fn normalize_variant(
    key: &str,
    definition: &PropertyDefinition,
    mode: NormalizerMode
) -> ComponentGptResult<NormalizedInput> {
    let options = definition.variant_options
        .as_ref()
        .ok_or_else(||
            ComponentGptError::InvalidInput(
                format!("Variant property '{}' has no variantOptions", key)
            )
        )?;

    let type_name = options
        .iter()
        .map(|option| lower_first(option))
        .collect::<Vec<_>>()
        .join(" | ");

    let default_value = match (mode, &definition.default_value) {
        (NormalizerMode::Corrected, PropertyValue::Text(text)) => {
            PropertyValue::Text(lower_first(text))
        }
        (NormalizerMode::Corrected, other) => other.clone(),
        (NormalizerMode::Faithful, _) => PropertyValue::Text(lower_first(DEFAULT_VALUE_LITERAL)),
    };

    Ok(NormalizedInput { type_name, default_value })
}

fn is_numeric(definition: &PropertyDefinition, mode: NormalizerMode) -> bool {
    match mode {
        NormalizerMode::Faithful => DEFAULT_VALUE_LITERAL.parse::<f64>().is_ok(),
        NormalizerMode::Corrected =>
            match &definition.default_value {
                PropertyValue::Number(_) => true,
                PropertyValue::Text(text) => {
                    text.trim().parse::<f64>().map(|n| n.is_finite()).unwrap_or(false)
                }
                PropertyValue::Bool(_) => false,
            }
    }
}
