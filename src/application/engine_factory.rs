//! Engine factory.
//!
//! Loads and validates a definition once, then hands out independent
//! engines (one per conversation session) that share it.

use std::sync::Arc;

use tracing::{info, warn};

use super::session::ConversationSession;
use crate::config::ConversationConfig;
use crate::domain::conversation::{
    ConversationDefinition, ConversationEngine, DefinitionError, DefinitionSource,
};
use crate::ports::DefinitionLoader;

/// Produces fresh engines over one shared definition.
#[derive(Debug, Clone)]
pub struct EngineFactory {
    definition: Arc<ConversationDefinition>,
    unsupported_answer: String,
}

impl EngineFactory {
    /// Creates a factory from an already validated definition.
    pub fn new(definition: ConversationDefinition, unsupported_answer: impl Into<String>) -> Self {
        Self {
            definition: Arc::new(definition),
            unsupported_answer: unsupported_answer.into(),
        }
    }

    /// Loads and validates the configured definition.
    ///
    /// # Errors
    ///
    /// Same failures as [`ConversationEngine::from_source`].
    pub fn from_config(
        config: &ConversationConfig,
        loader: &dyn DefinitionLoader,
    ) -> Result<Self, DefinitionError> {
        let definition = DefinitionSource::Locator(config.definition_path.clone())
            .load_definition(loader)
            .map_err(|err| {
                warn!(
                    path = %config.definition_path,
                    code = err.code(),
                    error = %err,
                    "Conversation definition rejected"
                );
                err
            })?;
        info!(
            path = %config.definition_path,
            states = definition.len(),
            "Conversation definition loaded"
        );
        Ok(Self::new(definition, config.unsupported_answer.clone()))
    }

    /// A new engine positioned before the start of the conversation.
    pub fn new_engine(&self) -> ConversationEngine {
        ConversationEngine::new(Arc::clone(&self.definition), self.unsupported_answer.clone())
    }

    /// A new logged session over a fresh engine.
    pub fn new_session(&self) -> ConversationSession {
        ConversationSession::new(self.new_engine())
    }

    pub fn definition(&self) -> &ConversationDefinition {
        &self.definition
    }
}
