//! Structural validation of conversation definitions.
//!
//! Candidates arrive as untyped JSON values (either handed over directly or
//! parsed from a loaded source). Decoding walks the value once, in order,
//! and either yields a typed [`ConversationDefinition`] or the first
//! violated clause as a [`DefinitionError`].

use serde_json::{Map, Value};

use super::definition::{AnswerOption, ConversationDefinition, State};
use super::errors::DefinitionError;

/// Decoder for the conversation definition contract.
///
/// Checks run in this order and stop at the first failure:
/// 1. candidate is an array (`InvalidFormat`)
/// 2. array is non-empty (`EmptyDefinition`)
/// 3. per state, in sequence order: `id`, then `question`, then
///    `answerOptions`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefinitionValidator;

impl DefinitionValidator {
    /// Checks `candidate` against the contract without keeping the result.
    pub fn validate(candidate: &Value) -> Result<(), DefinitionError> {
        Self::decode_states(candidate).map(|_| ())
    }

    /// Checks `candidate` and converts it into a typed definition.
    ///
    /// No normalization happens: optional fields stay absent, and an empty
    /// `answerOptions` array stays present and empty.
    pub fn decode(candidate: &Value) -> Result<ConversationDefinition, DefinitionError> {
        Self::decode_states(candidate).map(ConversationDefinition::from_validated)
    }

    fn decode_states(candidate: &Value) -> Result<Vec<State>, DefinitionError> {
        let elements = candidate.as_array().ok_or(DefinitionError::InvalidFormat)?;
        if elements.is_empty() {
            return Err(DefinitionError::EmptyDefinition);
        }

        elements
            .iter()
            .enumerate()
            .map(|(index, element)| decode_state(index, element))
            .collect()
    }
}

fn decode_state(index: usize, element: &Value) -> Result<State, DefinitionError> {
    // Non-object elements have no properties at all, so they fail on `id`.
    let empty = Map::new();
    let fields = element.as_object().unwrap_or(&empty);

    let id = match fields.get("id").and_then(Value::as_str) {
        Some(id) if !id.is_empty() => id,
        _ => return Err(DefinitionError::MissingId { index }),
    };

    let question = fields
        .get("question")
        .and_then(Value::as_str)
        .ok_or(DefinitionError::MissingQuestion { index })?;

    let answer_options = match fields.get("answerOptions") {
        None => None,
        Some(value) => Some(decode_answer_options(index, value)?),
    };

    let extra = fields
        .iter()
        .filter(|(key, _)| !matches!(key.as_str(), "id" | "question" | "answerOptions"))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Ok(State {
        id: id.to_string(),
        question: question.to_string(),
        answer_options,
        extra,
    })
}

fn decode_answer_options(index: usize, value: &Value) -> Result<Vec<AnswerOption>, DefinitionError> {
    let entries = value
        .as_array()
        .ok_or(DefinitionError::InvalidAnswerOption { index })?;

    entries
        .iter()
        .map(|entry| {
            let answer = entry.get("answer").and_then(Value::as_str);
            let next_state = entry.get("nextState").and_then(Value::as_str);
            match (answer, next_state) {
                (Some(answer), Some(next_state)) => Ok(AnswerOption::new(answer, next_state)),
                _ => Err(DefinitionError::InvalidAnswerOption { index }),
            }
        })
        .collect()
}
