//! Conversation configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Conversation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationConfig {
    /// Locator of the conversation definition (JSON or YAML file)
    #[serde(default = "default_definition_path")]
    pub definition_path: String,

    /// Question shown when an answer matches no option
    #[serde(default = "default_unsupported_answer")]
    pub unsupported_answer: String,
}

impl ConversationConfig {
    /// Validate conversation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.definition_path.trim().is_empty() {
            return Err(ValidationError::MissingRequired("conversation.definition_path"));
        }
        if self.unsupported_answer.trim().is_empty() {
            return Err(ValidationError::EmptyUnsupportedAnswer);
        }
        Ok(())
    }
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            definition_path: default_definition_path(),
            unsupported_answer: default_unsupported_answer(),
        }
    }
}

fn default_definition_path() -> String {
    "conversation.json".to_string()
}

fn default_unsupported_answer() -> String {
    "Sorry, I can't help with that answer. Reply with anything to start over.".to_string()
}
