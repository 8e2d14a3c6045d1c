//! Conversation domain module.
//!
//! Models a guided question/answer flow: a declarative definition of
//! states, its structural validation, and the engine that walks it one
//! answer at a time.

mod definition;
mod engine;
mod errors;
mod source;
mod validator;

pub use definition::{AnswerOption, ConversationDefinition, State};
pub use engine::{
    ConversationEngine, Step, Transition, Turn, UnsupportedState, UNSUPPORTED_ANSWER_STATE_ID,
};
pub use errors::DefinitionError;
pub use source::{DefinitionFormat, DefinitionParseError, DefinitionSource};
pub use validator::DefinitionValidator;
