//! In-Memory Definition Loader Adapter
//!
//! Serves raw definition text from a map keyed by locator.
//! Useful for testing and development.

use std::collections::HashMap;

use crate::ports::{DefinitionLoader, LoaderError};

/// In-memory loader for conversation definitions
#[derive(Debug, Clone, Default)]
pub struct InMemoryDefinitionLoader {
    definitions: HashMap<String, String>,
}

impl InMemoryDefinitionLoader {
    /// Create an empty loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to register content under a locator
    pub fn with_definition(mut self, locator: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(locator, content);
        self
    }

    /// Register or replace content under a locator
    pub fn insert(&mut self, locator: impl Into<String>, content: impl Into<String>) {
        self.definitions.insert(locator.into(), content.into());
    }

    /// Get the number of registered definitions
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl DefinitionLoader for InMemoryDefinitionLoader {
    fn load(&self, locator: &str) -> Result<String, LoaderError> {
        self.definitions
            .get(locator)
            .cloned()
            .ok_or_else(|| LoaderError::NotFound(locator.to_string()))
    }
}
