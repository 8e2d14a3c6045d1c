//! Conversation engine.
//!
//! Holds one validated definition plus a single cursor, and moves the
//! cursor in response to user answers.

use std::sync::Arc;

use serde::Serialize;

use super::definition::{AnswerOption, ConversationDefinition, State};
use super::errors::DefinitionError;
use super::source::DefinitionSource;
use crate::ports::DefinitionLoader;

/// Id of the synthesized state returned when no answer option matches.
pub const UNSUPPORTED_ANSWER_STATE_ID: &str = "unsupportedAnswerEnd";

/// Synthesized terminal state for an unmatched answer.
///
/// Never part of the definition and has no answer options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnsupportedState {
    id: &'static str,
    question: String,
}

impl UnsupportedState {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            id: UNSUPPORTED_ANSWER_STATE_ID,
            question: question.into(),
        }
    }

    pub fn id(&self) -> &str {
        self.id
    }

    pub fn question(&self) -> &str {
        &self.question
    }
}

/// What the engine shows after a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Turn {
    /// A state taken from the definition.
    Defined(State),
    /// The synthesized unsupported-answer state.
    Unsupported(UnsupportedState),
}

impl Turn {
    pub fn id(&self) -> &str {
        match self {
            Turn::Defined(state) => &state.id,
            Turn::Unsupported(state) => state.id(),
        }
    }

    pub fn question(&self) -> &str {
        match self {
            Turn::Defined(state) => &state.question,
            Turn::Unsupported(state) => state.question(),
        }
    }

    /// Answer options of a defined state; `None` when the property is
    /// absent or for the unsupported state.
    pub fn answer_options(&self) -> Option<&[AnswerOption]> {
        match self {
            Turn::Defined(state) => state.answer_options.as_deref(),
            Turn::Unsupported(_) => None,
        }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Turn::Unsupported(_))
    }
}

/// Which rule produced a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Back at element 0: empty answer, not started, or no `answerOptions`.
    Restarted,
    /// A matched option led to an existing state.
    Advanced,
    /// No option matched.
    Unsupported,
    /// A matched option named a state that does not exist; back at element 0.
    DanglingNextState(String),
}

/// Result of one transition: the new state and how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub from: Option<String>,
    pub turn: Turn,
    pub transition: Transition,
}

/// Position of a started conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    At(usize),
    Unsupported,
}

/// Runtime holder of a definition and the current position.
///
/// Not synchronized: share one engine per conversation session and
/// serialize access externally.
#[derive(Debug, Clone)]
pub struct ConversationEngine {
    definition: Arc<ConversationDefinition>,
    unsupported_answer: String,
    position: Option<Position>,
}

impl ConversationEngine {
    /// Creates an engine over an already validated definition.
    pub fn new(
        definition: impl Into<Arc<ConversationDefinition>>,
        unsupported_answer: impl Into<String>,
    ) -> Self {
        Self {
            definition: definition.into(),
            unsupported_answer: unsupported_answer.into(),
            position: None,
        }
    }

    /// Resolves `source`, validates it and creates an engine.
    ///
    /// # Errors
    ///
    /// - `SourceUnavailable` if a locator cannot be loaded or parsed
    /// - any validation error for a structurally invalid definition
    pub fn from_source(
        source: impl Into<DefinitionSource>,
        loader: &dyn DefinitionLoader,
        unsupported_answer: impl Into<String>,
    ) -> Result<Self, DefinitionError> {
        let definition = source.into().load_definition(loader)?;
        Ok(Self::new(definition, unsupported_answer))
    }

    /// Consumes a user answer and moves to the next state.
    ///
    /// Never fails. Rules, first match wins:
    /// 1. empty answer, not started, or current state has no
    ///    `answerOptions` property: restart at element 0
    /// 2. no option matches (case-insensitive): unsupported state
    /// 3. matched option's `nextState` exists: go there
    /// 4. matched option's `nextState` is dangling: restart at element 0
    pub fn advance(&mut self, answer: &str) -> Turn {
        self.step(answer).turn
    }

    /// Same as [`advance`](Self::advance), also reporting which rule fired.
    pub fn step(&mut self, answer: &str) -> Step {
        let from = self.current_id().map(str::to_string);
        let (position, transition) = self.next_position(answer);
        self.position = Some(position);
        Step {
            from,
            turn: self.turn_at(position),
            transition,
        }
    }

    fn next_position(&self, answer: &str) -> (Position, Transition) {
        let options = match self.position {
            Some(Position::At(index)) if !answer.is_empty() => {
                self.definition.state_at(index).answer_options.as_deref()
            }
            _ => None,
        };

        // Present-but-empty options fall through to the no-match branch.
        let Some(options) = options else {
            return (Position::At(0), Transition::Restarted);
        };

        let Some(option) = options.iter().find(|option| option.matches(answer)) else {
            return (Position::Unsupported, Transition::Unsupported);
        };

        match self.definition.position(&option.next_state) {
            Some(index) => (Position::At(index), Transition::Advanced),
            None => (
                Position::At(0),
                Transition::DanglingNextState(option.next_state.clone()),
            ),
        }
    }

    /// The current state, or `None` before the first `advance`.
    pub fn current(&self) -> Option<Turn> {
        self.position.map(|position| self.turn_at(position))
    }

    pub fn definition(&self) -> &ConversationDefinition {
        &self.definition
    }

    /// Message used as the unsupported state's question.
    pub fn unsupported_answer(&self) -> &str {
        &self.unsupported_answer
    }

    fn turn_at(&self, position: Position) -> Turn {
        match position {
            Position::At(index) => Turn::Defined(self.definition.state_at(index).clone()),
            Position::Unsupported => {
                Turn::Unsupported(UnsupportedState::new(self.unsupported_answer.clone()))
            }
        }
    }

    fn current_id(&self) -> Option<&str> {
        match self.position? {
            Position::At(index) => Some(&self.definition.state_at(index).id),
            Position::Unsupported => Some(UNSUPPORTED_ANSWER_STATE_ID),
        }
    }
}
