//! Application layer - wiring between configuration, ports and the domain.
//!
//! Builds conversation engines from configuration so that each active
//! session gets its own engine over a shared, validated definition, and
//! logs what happens in each session.

mod engine_factory;
mod session;

pub use engine_factory::EngineFactory;
pub use session::ConversationSession;
