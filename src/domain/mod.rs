//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `conversation` - Conversation definitions, validation and the transition engine

pub mod conversation;
