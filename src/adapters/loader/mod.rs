//! Definition Loader Adapters
//!
//! Implementations of the DefinitionLoader port.
//!
//! ## Available Adapters
//!
//! - **FileDefinitionLoader** - Reads definitions from disk
//! - **InMemoryDefinitionLoader** - Serves definitions from memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::loader::{FileDefinitionLoader, InMemoryDefinitionLoader};
//!
//! // Production: paths relative to a flows directory
//! let loader = FileDefinitionLoader::with_base_dir("./flows");
//!
//! // Testing: in-memory content
//! let loader = InMemoryDefinitionLoader::new().with_definition("flow.json", "[]");
//! ```

mod file_definition_loader;
mod in_memory_definition_loader;

pub use file_definition_loader::FileDefinitionLoader;
pub use in_memory_definition_loader::InMemoryDefinitionLoader;
