//! Integration tests for a full troubleshooting conversation.
//!
//! These tests load the fixture definition from disk through the filesystem
//! loader and walk it the way an interactive session would:
//! 1. The first reply always lands on the start state
//! 2. Matching answers (any case) move along the graph
//! 3. Unmatched answers produce the unsupported state, which restarts next
//! 4. Dangling `nextState` references fall back to the start

use serde_json::Value;

use troubleshoot_flow::adapters::{FileDefinitionLoader, InMemoryDefinitionLoader};
use troubleshoot_flow::application::EngineFactory;
use troubleshoot_flow::config::ConversationConfig;
use troubleshoot_flow::domain::conversation::{
    ConversationEngine, DefinitionError, Turn, UNSUPPORTED_ANSWER_STATE_ID,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

const UNSUPPORTED: &str = "Sorry, that answer is not supported.";

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn fixture_json() -> Value {
    let content = std::fs::read_to_string(fixture_path("troubleshooting.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

/// Record from the fixture with the given id, as raw JSON.
fn record(id: &str) -> Value {
    fixture_json()
        .as_array()
        .unwrap()
        .iter()
        .find(|state| state["id"] == id)
        .cloned()
        .unwrap()
}

fn as_json(turn: &Turn) -> Value {
    serde_json::to_value(turn).unwrap()
}

fn engine() -> ConversationEngine {
    ConversationEngine::from_source(
        fixture_path("troubleshooting.json"),
        &FileDefinitionLoader::new(),
        UNSUPPORTED,
    )
    .unwrap()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn missing_file_is_source_unavailable() {
    let err = ConversationEngine::from_source("", &FileDefinitionLoader::new(), UNSUPPORTED)
        .unwrap_err();
    assert!(matches!(err, DefinitionError::SourceUnavailable { ref locator, .. } if locator.is_empty()));
}

#[test]
fn malformed_file_is_source_unavailable() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("broken.json"), "[{\"id\": ").unwrap();

    let loader = FileDefinitionLoader::with_base_dir(temp_dir.path());
    let err = ConversationEngine::from_source("broken.json", &loader, UNSUPPORTED).unwrap_err();
    assert_eq!(err.code(), "SOURCE_UNAVAILABLE");
    assert!(err.to_string().contains("'broken.json'"));
}

#[test]
fn structurally_invalid_file_reports_validation_error() {
    let loader = InMemoryDefinitionLoader::new()
        .with_definition("flow.json", r#"[{"id": "start", "question": "Q"}, {"id": "next"}]"#);
    let err = ConversationEngine::from_source("flow.json", &loader, UNSUPPORTED).unwrap_err();
    assert_eq!(err, DefinitionError::MissingQuestion { index: 1 });
}

#[test]
fn yaml_fixture_matches_json_behaviour() {
    let mut engine = ConversationEngine::from_source(
        fixture_path("troubleshooting.yaml"),
        &FileDefinitionLoader::new(),
        UNSUPPORTED,
    )
    .unwrap();

    assert_eq!(engine.advance("").id(), "start");
    assert_eq!(engine.advance("my phone doesn't work").id(), "phoneModel");
    assert_eq!(engine.advance("IPHONE X").id(), "appleServiceEnd");
}

// =============================================================================
// Conversation flow
// =============================================================================

#[test]
fn first_reply_starts_the_conversation() {
    let mut engine = engine();
    assert_eq!(as_json(&engine.advance("Help")), record("start"));
}

#[test]
fn continues_until_end_state() {
    let mut engine = engine();
    assert_eq!(as_json(&engine.advance("")), record("start"));
    assert_eq!(as_json(&engine.advance("My phone doesn't work")), record("phoneModel"));
    assert_eq!(as_json(&engine.advance("iPhone X")), record("appleServiceEnd"));
}

#[test]
fn unsupported_answer_then_restart() {
    let mut engine = engine();
    assert_eq!(as_json(&engine.advance("")), record("start"));
    assert_eq!(
        as_json(&engine.advance("No")),
        serde_json::json!({ "id": UNSUPPORTED_ANSWER_STATE_ID, "question": UNSUPPORTED })
    );
    assert_eq!(as_json(&engine.advance("iPhone X")), record("start"));
}

#[test]
fn answers_are_case_insensitive() {
    let mut engine = engine();
    engine.advance("");
    assert_eq!(as_json(&engine.advance("my Internet doesn't work")), record("routerReset"));
}

#[test]
fn same_answer_in_different_case_gives_same_result() {
    let mut lower = engine();
    let mut upper = engine();
    lower.advance("");
    upper.advance("");
    assert_eq!(
        lower.advance("my internet doesn't work"),
        upper.advance("MY INTERNET DOESN'T WORK")
    );
}

#[test]
fn dangling_next_state_returns_to_start() {
    let mut engine = engine();
    engine.advance("");
    engine.advance("My phone doesn't work");
    assert_eq!(as_json(&engine.advance("Nokia 3310")), record("start"));
}

#[test]
fn single_state_definition_returns_to_start() {
    let start = record("start");
    let mut engine = ConversationEngine::from_source(
        Value::Array(vec![start.clone()]),
        &InMemoryDefinitionLoader::new(),
        UNSUPPORTED,
    )
    .unwrap();

    assert_eq!(as_json(&engine.advance("")), start);
    assert_eq!(as_json(&engine.advance("My internet doesn't work")), start);
}

#[test]
fn extra_state_properties_are_returned() {
    let mut start = record("start");
    start["hint"] = Value::from("Describe the symptom");
    let mut engine = ConversationEngine::from_source(
        Value::Array(vec![start.clone()]),
        &InMemoryDefinitionLoader::new(),
        UNSUPPORTED,
    )
    .unwrap();

    assert_eq!(as_json(&engine.advance("")), start);
}

#[test]
fn end_state_without_options_restarts() {
    let mut engine = engine();
    engine.advance("");
    engine.advance("My internet doesn't work");
    assert_eq!(engine.advance("Yes").id(), "providerEnd");
    assert_eq!(engine.advance("thanks").id(), "start");
}

#[test]
fn end_state_with_empty_options_is_unsupported() {
    let mut engine = engine();
    engine.advance("");
    engine.advance("My internet doesn't work");
    assert_eq!(engine.advance("no").id(), "routerResetEnd");
    assert!(engine.advance("thanks").is_unsupported());
    assert_eq!(engine.advance("thanks").id(), "start");
}

// =============================================================================
// Session factory
// =============================================================================

#[test]
fn factory_sessions_progress_independently() {
    let config = ConversationConfig {
        definition_path: fixture_path("troubleshooting.json"),
        unsupported_answer: UNSUPPORTED.to_string(),
    };
    let factory = EngineFactory::from_config(&config, &FileDefinitionLoader::new()).unwrap();

    let mut phone = factory.new_engine();
    let mut internet = factory.new_engine();
    phone.advance("");
    internet.advance("");

    assert_eq!(phone.advance("My phone doesn't work").id(), "phoneModel");
    assert_eq!(internet.advance("My internet doesn't work").id(), "routerReset");
    assert_eq!(phone.current().unwrap().id(), "phoneModel");
}

#[test]
fn factory_session_follows_the_engine() {
    let config = ConversationConfig {
        definition_path: fixture_path("troubleshooting.json"),
        unsupported_answer: UNSUPPORTED.to_string(),
    };
    let factory = EngineFactory::from_config(&config, &FileDefinitionLoader::new()).unwrap();

    let mut session = factory.new_session();
    assert_eq!(session.reply("").id(), "start");
    assert_eq!(session.reply("My phone doesn't work").id(), "phoneModel");
    assert_eq!(session.reply("Nokia 3310").id(), "start");
}
