//! Conversation definition model.
//!
//! A definition is an ordered list of states. Element 0 is where every
//! conversation starts and where it returns after a restart.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An edge out of a state, keyed by the answer that selects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    /// Expected answer, matched case-insensitively.
    pub answer: String,
    /// Id of the state this answer leads to. May not exist.
    pub next_state: String,
}

impl AnswerOption {
    pub fn new(answer: impl Into<String>, next_state: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            next_state: next_state.into(),
        }
    }

    /// Returns true if `reply` selects this option.
    pub fn matches(&self, reply: &str) -> bool {
        self.answer.to_lowercase() == reply.to_lowercase()
    }
}

/// One node of the conversation graph.
///
/// `answer_options` keeps the difference between an absent property
/// (`None`) and a present but empty one (`Some(vec![])`): the engine
/// treats the two differently.
///
/// Any other properties of the record are kept in `extra` and written back
/// when the state is serialized, so a returned state equals its source
/// record. Extra properties on answer options are not kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub id: String,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_options: Option<Vec<AnswerOption>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl State {
    /// Creates a state without an `answerOptions` property.
    pub fn new(id: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer_options: None,
            extra: Map::new(),
        }
    }

    /// Builder method to attach answer options.
    pub fn with_answer_options(mut self, options: Vec<AnswerOption>) -> Self {
        self.answer_options = Some(options);
        self
    }

    /// Returns true if no answer can lead anywhere from this state.
    pub fn is_terminal(&self) -> bool {
        self.answer_options
            .as_ref()
            .map_or(true, |options| options.is_empty())
    }

    /// First option matching `reply`, in definition order.
    pub fn find_option(&self, reply: &str) -> Option<&AnswerOption> {
        self.answer_options
            .as_deref()
            .and_then(|options| options.iter().find(|option| option.matches(reply)))
    }
}

/// A validated, non-empty, immutable sequence of states.
///
/// Only produced by [`super::DefinitionValidator::decode`], which guarantees
/// the structural contract holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConversationDefinition {
    states: Vec<State>,
}

impl ConversationDefinition {
    pub(crate) fn from_validated(states: Vec<State>) -> Self {
        debug_assert!(!states.is_empty());
        Self { states }
    }

    /// The canonical start state (element 0).
    pub fn start(&self) -> &State {
        &self.states[0]
    }

    /// First state with the given id, searching the whole definition.
    pub fn find(&self, id: &str) -> Option<&State> {
        self.position(id).map(|index| &self.states[index])
    }

    pub(crate) fn position(&self, id: &str) -> Option<usize> {
        self.states.iter().position(|state| state.id == id)
    }

    pub(crate) fn state_at(&self, index: usize) -> &State {
        &self.states[index]
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false for a validated definition.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
