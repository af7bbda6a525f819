use serde::{ Deserialize, Serialize };

/// How a fenced model reply is unwrapped before it is parsed as JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FenceHandling {
    /// Strip a leading backtick run (plus language tag) and a trailing backtick run
    #[default]
    Structural,
    /// Drop exactly 7 leading and 3 trailing characters when the reply starts with a backtick
    FixedOffset,
}

/// How component-set property definitions are reduced for the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizerMode {
    /// Reproduce the plugin's output exactly, including its constant checks
    #[default]
    Faithful,
    /// Use each property's real default value for the numeric check and variant default
    Corrected,
}

/// Options that shape a single generation call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationOptions {
    pub fence_handling: FenceHandling,
    pub normalizer_mode: NormalizerMode,
}
