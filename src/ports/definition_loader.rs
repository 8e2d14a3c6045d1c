//! Definition Loader Port - Interface for fetching raw conversation definitions.
//!
//! The engine never touches storage itself. It hands a locator (usually a
//! file path) to a loader and parses whatever text comes back.

use thiserror::Error;

/// Errors that can occur while resolving a locator to raw content
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoaderError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Port for resolving a locator into raw definition text.
///
/// # Contract
///
/// Implementations must:
/// - Return the full content for a resolvable locator
/// - Fail (never return empty placeholder content) when it is absent
/// - Perform no retries; callers wrap construction if they need resilience
pub trait DefinitionLoader {
    /// Load raw content for `locator`.
    fn load(&self, locator: &str) -> Result<String, LoaderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl DefinitionLoader for Fixed {
        fn load(&self, locator: &str) -> Result<String, LoaderError> {
            if locator == "known" {
                Ok("[]".to_string())
            } else {
                Err(LoaderError::NotFound(locator.to_string()))
            }
        }
    }

    #[test]
    fn loader_is_object_safe() {
        let loader: Box<dyn DefinitionLoader> = Box::new(Fixed);
        assert_eq!(loader.load("known"), Ok("[]".to_string()));
        assert!(matches!(loader.load("other"), Err(LoaderError::NotFound(_))));
    }

    #[test]
    fn not_found_displays_locator() {
        let err = LoaderError::NotFound("flows/a.json".to_string());
        assert_eq!(err.to_string(), "Not found: flows/a.json");
    }
}
