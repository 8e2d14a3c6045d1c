//! One conversation session.
//!
//! Wraps an engine and records how each reply moved the conversation.

use tracing::{debug, warn};

use crate::domain::conversation::{ConversationEngine, Step, Transition, Turn};

/// Drives a single conversation and logs its transitions.
#[derive(Debug, Clone)]
pub struct ConversationSession {
    engine: ConversationEngine,
}

impl ConversationSession {
    pub fn new(engine: ConversationEngine) -> Self {
        Self { engine }
    }

    /// Feeds `answer` to the engine and returns the next turn.
    pub fn reply(&mut self, answer: &str) -> Turn {
        let step = self.engine.step(answer);
        log_step(&step);
        step.turn
    }

    pub fn engine(&self) -> &ConversationEngine {
        &self.engine
    }
}

fn log_step(step: &Step) {
    let from = step.from.as_deref().unwrap_or("-");
    let to = step.turn.id();
    match &step.transition {
        Transition::Restarted => debug!(from, to, "Conversation restarted"),
        Transition::Advanced => debug!(from, to, "Conversation advanced"),
        Transition::Unsupported => debug!(from, "Unsupported answer"),
        Transition::DanglingNextState(next_state) => warn!(
            from,
            next_state = %next_state,
            "Answer leads to unknown state, restarting"
        ),
    }
}
