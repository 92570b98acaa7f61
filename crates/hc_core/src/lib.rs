//! # hc_core - Hand Cricket Match Engine
//!
//! Turn-based hand cricket between a human and a uniform-random computer
//! opponent: range selection, coin toss, two innings of number-vs-number
//! deliveries, and win/tie resolution.
//!
//! ## Features
//! - Fully deterministic matches (same seed = same match, scriptable RNG)
//! - Synchronous, atomic action resolution - no partially updated state
//! - Structured events (score, boundary, dismissal, milestone, target
//!   reached, game over) plus a JSON command boundary for front-ends

pub mod api;
pub mod engine;
pub mod error;
pub mod models;

// Re-export the main API surface
pub use api::{apply_command, process_command_json, CommandResponse, EngineCommand};
pub use engine::rng::{RandomSource, ScriptedSource, SeededSource};
pub use engine::scoreboard::ScoreLedger;
pub use engine::toss::TossState;
pub use engine::{ActionOutcome, MatchEngine};
pub use error::{error_codes, EngineError, Result};
pub use models::{
    BatOrBowl, CoinFace, EventType, Innings, MatchEvent, Phase, Side, Winner,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
