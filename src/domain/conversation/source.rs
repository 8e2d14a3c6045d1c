//! Where a conversation definition comes from.

use serde_json::Value;
use thiserror::Error;

use super::definition::ConversationDefinition;
use super::errors::DefinitionError;
use super::validator::DefinitionValidator;
use crate::ports::DefinitionLoader;

/// Errors that can occur while parsing loaded definition text
#[derive(Debug, Error)]
pub enum DefinitionParseError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Input accepted when building an engine.
#[derive(Debug, Clone, PartialEq)]
pub enum DefinitionSource {
    /// An already parsed candidate definition.
    Parsed(Value),
    /// A locator (e.g. file path) resolved through a [`DefinitionLoader`].
    Locator(String),
}

impl DefinitionSource {
    /// Turns the source into a candidate value, loading and parsing if needed.
    ///
    /// Any loader or parse failure becomes `SourceUnavailable` carrying the
    /// locator.
    pub fn resolve(self, loader: &dyn DefinitionLoader) -> Result<Value, DefinitionError> {
        match self {
            DefinitionSource::Parsed(value) => Ok(value),
            DefinitionSource::Locator(locator) => {
                let content = loader
                    .load(&locator)
                    .map_err(|e| DefinitionError::source_unavailable(&locator, e.to_string()))?;
                DefinitionFormat::from_locator(&locator)
                    .parse(&content)
                    .map_err(|e| DefinitionError::source_unavailable(&locator, e.to_string()))
            }
        }
    }

    /// Resolves the source and decodes it into a validated definition.
    pub(crate) fn load_definition(
        self,
        loader: &dyn DefinitionLoader,
    ) -> Result<ConversationDefinition, DefinitionError> {
        let candidate = self.resolve(loader)?;
        DefinitionValidator::decode(&candidate)
    }
}

impl From<Value> for DefinitionSource {
    fn from(value: Value) -> Self {
        DefinitionSource::Parsed(value)
    }
}

impl From<&str> for DefinitionSource {
    fn from(locator: &str) -> Self {
        DefinitionSource::Locator(locator.to_string())
    }
}

impl From<String> for DefinitionSource {
    fn from(locator: String) -> Self {
        DefinitionSource::Locator(locator)
    }
}

/// Text format of loaded content, picked from the locator's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    Json,
    Yaml,
}

impl DefinitionFormat {
    /// `.yaml`/`.yml` locators are YAML; everything else is JSON.
    pub fn from_locator(locator: &str) -> Self {
        let lower = locator.to_lowercase();
        if lower.ends_with(".yaml") || lower.ends_with(".yml") {
            DefinitionFormat::Yaml
        } else {
            DefinitionFormat::Json
        }
    }

    /// Parse raw content into a candidate value.
    pub fn parse(self, content: &str) -> Result<Value, DefinitionParseError> {
        let value = match self {
            DefinitionFormat::Json => serde_json::from_str(content)?,
            DefinitionFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(value)
    }
}
