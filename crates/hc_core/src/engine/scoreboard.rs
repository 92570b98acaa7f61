//! Per-side score ledger.

use serde::{Deserialize, Serialize};

/// Runs and per-ball history for one side's innings.
///
/// Recreated empty at the start of each match; a side keeps the same ledger
/// for the single innings it bats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLedger {
    pub total_runs: u32,
    /// Runs scored off each non-dismissal delivery, in order.
    pub ball_history: Vec<u8>,
    pub is_out: bool,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scoring delivery.
    pub fn record(&mut self, runs: u8) {
        self.total_runs += runs as u32;
        self.ball_history.push(runs);
    }

    /// Mark the side out. Returns true when the dismissal is a duck
    /// (total still 0).
    pub fn dismiss(&mut self) -> bool {
        self.is_out = true;
        self.total_runs == 0
    }

    pub fn balls_faced(&self) -> usize {
        self.ball_history.len()
    }
}
