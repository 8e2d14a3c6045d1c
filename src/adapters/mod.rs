//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `loader` - Definition loaders (filesystem, in-memory)

pub mod loader;

pub use loader::{FileDefinitionLoader, InMemoryDefinitionLoader};
