//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DefinitionLoader` - Resolves a locator to raw conversation definition text

mod definition_loader;

pub use definition_loader::{DefinitionLoader, LoaderError};
