//! Core data types shared across the engine and its API boundary.

pub mod events;

pub use events::{EventType, MatchEvent};

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two sides contesting a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Computer => write!(f, "computer"),
        }
    }
}

/// Coin face for the toss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoinFace {
    Heads,
    Tails,
}

impl fmt::Display for CoinFace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CoinFace::Heads => write!(f, "heads"),
            CoinFace::Tails => write!(f, "tails"),
        }
    }
}

/// Choice available to the toss winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatOrBowl {
    Bat,
    Bowl,
}

/// Which innings of the match is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Innings {
    First,
    Second,
}

/// Externally observable engine phase.
///
/// Delivery and toss resolution complete atomically inside a single engine
/// call, so the transient resolving states never escape here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Setup,
    TossPending,
    BattingChoicePending,
    InningsInProgress,
    MatchOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Phase::Setup => write!(f, "setup"),
            Phase::TossPending => write!(f, "toss_pending"),
            Phase::BattingChoicePending => write!(f, "batting_choice_pending"),
            Phase::InningsInProgress => write!(f, "innings_in_progress"),
            Phase::MatchOver => write!(f, "match_over"),
        }
    }
}

/// Final match result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Player,
    Computer,
    Tie,
}
