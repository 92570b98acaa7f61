//! JSON command boundary.
//!
//! A presentation layer drives the engine with tagged `{"cmd": ...}`
//! envelopes and receives a `schema_version`-stamped result payload: new
//! phase, both ledger snapshots, target, winner and the structured events for
//! the action. Rejections come back as code-prefixed strings and leave the
//! engine untouched.

use serde::{Deserialize, Serialize};

use crate::engine::{ActionOutcome, MatchEngine};
use crate::error::{error_codes, EngineError};
use crate::models::{BatOrBowl, CoinFace};

/// One engine action, as sent over the JSON boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum EngineCommand {
    SelectRange { max: u8 },
    CallToss { call: CoinFace },
    ChooseBatOrBowl { choice: BatOrBowl },
    ChooseNumber { number: u8 },
    Reset,
}

/// Response envelope for every successful command.
#[derive(Debug, Clone, Serialize)]
pub struct CommandResponse {
    pub schema_version: u8,
    #[serde(flatten)]
    pub outcome: ActionOutcome,
}

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

/// Dispatch a typed command onto the engine.
pub fn apply_command(
    engine: &mut MatchEngine,
    command: EngineCommand,
) -> Result<ActionOutcome, EngineError> {
    match command {
        EngineCommand::SelectRange { max } => engine.select_range(max),
        EngineCommand::CallToss { call } => engine.call_toss(call),
        EngineCommand::ChooseBatOrBowl { choice } => engine.choose_bat_or_bowl(choice),
        EngineCommand::ChooseNumber { number } => engine.choose_number(number),
        EngineCommand::Reset => Ok(engine.reset()),
    }
}

/// Parse a JSON command, apply it, and serialize the result payload.
pub fn process_command_json(engine: &mut MatchEngine, request: &str) -> Result<String, String> {
    let command: EngineCommand = serde_json::from_str(request)
        .map_err(|e| err_code(error_codes::BAD_REQUEST, e))?;

    let outcome = apply_command(engine, command).map_err(|e| err_code(e.code(), &e))?;

    let response = CommandResponse { schema_version: crate::SCHEMA_VERSION, outcome };
    serde_json::to_string(&response).map_err(|e| err_code(error_codes::BAD_REQUEST, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rng::ScriptedSource;
    use crate::models::Phase;
    use serde_json::json;

    fn engine_with(source: ScriptedSource) -> MatchEngine {
        MatchEngine::with_rng(Box::new(source))
    }

    #[test]
    fn test_command_deserialization() {
        let cmd: EngineCommand =
            serde_json::from_str(r#"{"cmd":"select_range","max":6}"#).unwrap();
        assert_eq!(cmd, EngineCommand::SelectRange { max: 6 });

        let cmd: EngineCommand =
            serde_json::from_str(r#"{"cmd":"call_toss","call":"heads"}"#).unwrap();
        assert_eq!(cmd, EngineCommand::CallToss { call: CoinFace::Heads });

        let cmd: EngineCommand = serde_json::from_str(r#"{"cmd":"reset"}"#).unwrap();
        assert_eq!(cmd, EngineCommand::Reset);
    }

    #[test]
    fn test_command_roundtrip() {
        let commands = vec![
            EngineCommand::SelectRange { max: 10 },
            EngineCommand::CallToss { call: CoinFace::Tails },
            EngineCommand::ChooseBatOrBowl { choice: BatOrBowl::Bowl },
            EngineCommand::ChooseNumber { number: 4 },
            EngineCommand::Reset,
        ];
        for cmd in commands {
            let json = serde_json::to_string(&cmd).unwrap();
            let back: EngineCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(back, cmd);
        }
    }

    #[test]
    fn test_malformed_request_rejected() {
        let mut engine = engine_with(ScriptedSource::new());
        let err = process_command_json(&mut engine, "not json").unwrap_err();
        assert!(err.starts_with(error_codes::BAD_REQUEST));

        let err =
            process_command_json(&mut engine, r#"{"cmd":"bowl_a_yorker"}"#).unwrap_err();
        assert!(err.starts_with(error_codes::BAD_REQUEST));
    }

    #[test]
    fn test_invalid_action_rejected_with_code() {
        let mut engine = engine_with(ScriptedSource::new());
        let err = process_command_json(&mut engine, r#"{"cmd":"choose_number","number":3}"#)
            .unwrap_err();
        assert!(err.starts_with(error_codes::INVALID_ACTION));
        assert_eq!(engine.phase(), Phase::Setup);
    }

    #[test]
    fn test_invalid_input_rejected_with_code() {
        let mut engine = engine_with(ScriptedSource::new());
        let err = process_command_json(&mut engine, r#"{"cmd":"select_range","max":0}"#)
            .unwrap_err();
        assert!(err.starts_with(error_codes::INVALID_INPUT));
    }

    #[test]
    fn test_response_carries_phase_ledgers_and_schema_version() {
        let mut engine = engine_with(ScriptedSource::new());
        let response =
            process_command_json(&mut engine, r#"{"cmd":"select_range","max":6}"#).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["schema_version"], crate::SCHEMA_VERSION);
        assert_eq!(parsed["phase"], "toss_pending");
        assert_eq!(parsed["player"]["total_runs"], 0);
        assert_eq!(parsed["computer"]["total_runs"], 0);
        assert!(parsed.get("target").is_none());
        assert!(parsed.get("winner").is_none());
    }

    #[test]
    fn test_full_match_over_json() {
        // Player wins the toss, bats, is out for 5 (target 6); the computer
        // reaches the target on its first ball.
        let source = ScriptedSource::new()
            .with_numbers([3, 2, 6])
            .with_coins([CoinFace::Heads]);
        let mut engine = engine_with(source);

        let steps = [
            json!({"cmd": "select_range", "max": 6}),
            json!({"cmd": "call_toss", "call": "heads"}),
            json!({"cmd": "choose_bat_or_bowl", "choice": "bat"}),
            json!({"cmd": "choose_number", "number": 5}),
            json!({"cmd": "choose_number", "number": 2}),
        ];
        let mut last = String::new();
        for step in &steps {
            last = process_command_json(&mut engine, &step.to_string()).unwrap();
        }

        let parsed: serde_json::Value = serde_json::from_str(&last).unwrap();
        assert_eq!(parsed["phase"], "innings_in_progress");
        assert_eq!(parsed["target"], 6);
        assert_eq!(parsed["events"][0]["type"], "dismissal");

        // Computer's chase: draw 6 beats target 6 immediately.
        let last = process_command_json(
            &mut engine,
            &json!({"cmd": "choose_number", "number": 1}).to_string(),
        )
        .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&last).unwrap();

        assert_eq!(parsed["phase"], "match_over");
        assert_eq!(parsed["winner"], "computer");
        let types: Vec<&str> = parsed["events"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["type"].as_str().unwrap())
            .collect();
        assert_eq!(types, vec!["score", "boundary", "target_reached", "game_over"]);
        assert_eq!(parsed["commentary"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_reset_command_clears_state() {
        let source = ScriptedSource::new().with_coins([CoinFace::Heads]);
        let mut engine = engine_with(source);
        process_command_json(&mut engine, r#"{"cmd":"select_range","max":6}"#).unwrap();
        process_command_json(&mut engine, r#"{"cmd":"call_toss","call":"heads"}"#).unwrap();

        let response = process_command_json(&mut engine, r#"{"cmd":"reset"}"#).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["phase"], "setup");
        assert_eq!(engine.max_number(), 0);
    }
}
