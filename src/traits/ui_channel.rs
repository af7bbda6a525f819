use crate::models::message::UiMessage;

/// Outbound side of the message boundary between the plugin and its panel
pub trait UiChannel: Send + Sync {
    fn post(&self, message: UiMessage);
}
