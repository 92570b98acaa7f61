//! Match engine: the innings state machine plus score ledger.
//!
//! The engine receives discrete actions (range selection, toss call, bat/bowl
//! choice, number pick) and resolves each one synchronously: outcome
//! computation, ledger updates and the phase decision all commit inside the
//! same call, so callers never observe a partially updated match.

pub mod milestones;
pub mod rng;
pub mod scoreboard;
pub mod toss;

use serde::Serialize;

use crate::error::{EngineError, Result};
use crate::models::{BatOrBowl, CoinFace, Innings, MatchEvent, Phase, Side, Winner};
use milestones::{crossed_milestone, is_boundary};
use rng::{RandomSource, SeededSource};
use scoreboard::ScoreLedger;
use toss::TossState;

/// Result payload returned by every engine action: the new phase, both
/// ledger snapshots, the target (once set), the winner (once decided) and
/// the structured events describing what happened.
#[derive(Debug, Clone, Serialize)]
pub struct ActionOutcome {
    pub phase: Phase,
    pub player: ScoreLedger,
    pub computer: ScoreLedger,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Winner>,
    pub events: Vec<MatchEvent>,
    /// One presentation-friendly line per event. Derived, never read back.
    pub commentary: Vec<String>,
}

/// Single-match engine. One instance per match; `reset` returns it to setup.
#[derive(Debug)]
pub struct MatchEngine {
    /// Inclusive upper bound of the choosable range. 0 until setup completes.
    max_number: u8,
    toss: TossState,
    player: ScoreLedger,
    computer: ScoreLedger,
    batting_side: Side,
    innings: Innings,
    /// 0 before the second innings; first-innings score + 1 afterwards.
    target: u32,
    winner: Option<Winner>,
    phase: Phase,
    rng: Box<dyn RandomSource>,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchEngine {
    /// Engine with entropy-seeded randomness.
    pub fn new() -> Self {
        Self::with_rng(Box::new(SeededSource::from_entropy()))
    }

    /// Engine with reproducible randomness: same seed, same match.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Box::new(SeededSource::new(seed)))
    }

    pub fn with_rng(rng: Box<dyn RandomSource>) -> Self {
        Self {
            max_number: 0,
            toss: TossState::default(),
            player: ScoreLedger::new(),
            computer: ScoreLedger::new(),
            batting_side: Side::Player,
            innings: Innings::First,
            target: 0,
            winner: None,
            phase: Phase::Setup,
            rng,
        }
    }

    // ========================
    // Actions
    // ========================

    /// Store the number range and move to the toss. Valid in `Setup`.
    pub fn select_range(&mut self, max: u8) -> Result<ActionOutcome> {
        self.expect_phase(Phase::Setup, "select_range")?;
        if max == 0 {
            return Err(EngineError::InvalidRange { max });
        }

        self.max_number = max;
        self.player = ScoreLedger::new();
        self.computer = ScoreLedger::new();
        self.toss.clear();
        self.phase = Phase::TossPending;
        log::info!("range selected: 0..={max}");

        Ok(self.outcome(Vec::new()))
    }

    /// Resolve the coin toss. Valid in `TossPending`.
    ///
    /// A player win leads to `BattingChoicePending`; a computer win decides
    /// the batting order uniformly at random and starts the first innings
    /// immediately.
    pub fn call_toss(&mut self, call: CoinFace) -> Result<ActionOutcome> {
        self.expect_phase(Phase::TossPending, "call_toss")?;

        let coin = self.rng.flip_coin();
        let toss_winner = self.toss.resolve(call, coin);
        log::info!("toss: called {call}, coin {coin}, won by {toss_winner}");

        let event = match toss_winner {
            Side::Player => {
                self.phase = Phase::BattingChoicePending;
                MatchEvent::toss_result(call, coin, toss_winner, None)
            }
            Side::Computer => {
                let first_batter = match self.rng.pick_bat_or_bowl() {
                    BatOrBowl::Bat => Side::Computer,
                    BatOrBowl::Bowl => Side::Player,
                };
                self.start_first_innings(first_batter);
                MatchEvent::toss_result(call, coin, toss_winner, Some(first_batter))
            }
        };

        Ok(self.outcome(vec![event]))
    }

    /// The toss winner's explicit bat-or-bowl decision. Valid only in
    /// `BattingChoicePending` (the player won the toss).
    pub fn choose_bat_or_bowl(&mut self, choice: BatOrBowl) -> Result<ActionOutcome> {
        self.expect_phase(Phase::BattingChoicePending, "choose_bat_or_bowl")?;

        let first_batter = match choice {
            BatOrBowl::Bat => Side::Player,
            BatOrBowl::Bowl => Side::Computer,
        };
        self.start_first_innings(first_batter);

        Ok(self.outcome(Vec::new()))
    }

    /// Resolve one delivery for whichever role the player currently holds.
    /// Valid in `InningsInProgress`; `number` must lie in `[0, max_number]`.
    pub fn choose_number(&mut self, number: u8) -> Result<ActionOutcome> {
        self.expect_phase(Phase::InningsInProgress, "choose_number")?;
        if number > self.max_number {
            return Err(EngineError::NumberOutOfRange { number, max: self.max_number });
        }

        let opponent_draw = self.rng.draw_number(self.max_number);
        let (bat_number, bowl_number) = match self.batting_side {
            Side::Player => (number, opponent_draw),
            Side::Computer => (opponent_draw, number),
        };

        let events = self.resolve_delivery(bat_number, bowl_number);
        Ok(self.outcome(events))
    }

    /// Return to `Setup` with every field cleared. Valid in any phase.
    pub fn reset(&mut self) -> ActionOutcome {
        self.max_number = 0;
        self.toss.clear();
        self.player = ScoreLedger::new();
        self.computer = ScoreLedger::new();
        self.batting_side = Side::Player;
        self.innings = Innings::First;
        self.target = 0;
        self.winner = None;
        self.phase = Phase::Setup;
        log::info!("engine reset to setup");

        self.outcome(Vec::new())
    }

    // ========================
    // Accessors
    // ========================

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn max_number(&self) -> u8 {
        self.max_number
    }

    pub fn batting_side(&self) -> Side {
        self.batting_side
    }

    pub fn innings(&self) -> Innings {
        self.innings
    }

    /// Chase target, once the first innings has ended.
    pub fn target(&self) -> Option<u32> {
        (self.target > 0).then_some(self.target)
    }

    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    pub fn toss(&self) -> &TossState {
        &self.toss
    }

    pub fn player_ledger(&self) -> &ScoreLedger {
        &self.player
    }

    pub fn computer_ledger(&self) -> &ScoreLedger {
        &self.computer
    }

    // ========================
    // Internals
    // ========================

    fn expect_phase(&self, expected: Phase, action: &'static str) -> Result<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(EngineError::InvalidAction { phase: self.phase, action })
        }
    }

    fn start_first_innings(&mut self, first_batter: Side) {
        self.batting_side = first_batter;
        self.innings = Innings::First;
        self.target = 0;
        self.phase = Phase::InningsInProgress;
        log::info!("first innings: {first_batter} batting");
    }

    /// One delivery, committed atomically: ledger update, milestone and
    /// target checks, and the phase decision all happen here.
    fn resolve_delivery(&mut self, bat_number: u8, bowl_number: u8) -> Vec<MatchEvent> {
        let side = self.batting_side;
        let mut events = Vec::new();

        if bat_number == bowl_number {
            let duck = self.ledger_mut(side).dismiss();
            let total = self.ledger(side).total_runs;
            log::info!("{side} out for {total} (number {bat_number} matched)");

            match self.innings {
                Innings::First => {
                    self.target = total + 1;
                    self.batting_side = side.opponent();
                    self.innings = Innings::Second;
                    events.push(
                        MatchEvent::dismissal(side, bat_number, total, duck)
                            .with_target(self.target),
                    );
                    log::info!("innings break: {} needs {}", self.batting_side, self.target);
                }
                Innings::Second => {
                    events.push(MatchEvent::dismissal(side, bat_number, total, duck));
                    events.push(self.finish_match());
                }
            }
            return events;
        }

        // Scoring delivery: the batting side earns its own chosen number.
        let old_total = self.ledger(side).total_runs;
        self.ledger_mut(side).record(bat_number);
        let new_total = old_total + bat_number as u32;
        log::debug!("{side} scored {bat_number} ({old_total} -> {new_total})");

        events.push(MatchEvent::score(side, bat_number, bowl_number, new_total));
        if is_boundary(bat_number) {
            events.push(MatchEvent::boundary(side, bat_number));
        }
        if let Some(value) = crossed_milestone(old_total, new_total) {
            events.push(MatchEvent::milestone(side, value));
        }

        // Target-reached ends the match on the spot; a milestone crossed on
        // the same delivery is still reported above.
        if self.innings == Innings::Second && new_total >= self.target {
            events.push(MatchEvent::target_reached(side, new_total, self.target));
            events.push(self.finish_match());
        }

        events
    }

    fn finish_match(&mut self) -> MatchEvent {
        self.phase = Phase::MatchOver;

        let player_score = self.player.total_runs;
        let computer_score = self.computer.total_runs;
        let winner = if player_score > computer_score {
            Winner::Player
        } else if computer_score > player_score {
            Winner::Computer
        } else {
            Winner::Tie
        };
        self.winner = Some(winner);
        log::info!("match over: player {player_score}, computer {computer_score}");

        MatchEvent::game_over(winner, player_score, computer_score)
    }

    fn ledger(&self, side: Side) -> &ScoreLedger {
        match side {
            Side::Player => &self.player,
            Side::Computer => &self.computer,
        }
    }

    fn ledger_mut(&mut self, side: Side) -> &mut ScoreLedger {
        match side {
            Side::Player => &mut self.player,
            Side::Computer => &mut self.computer,
        }
    }

    fn outcome(&self, events: Vec<MatchEvent>) -> ActionOutcome {
        let commentary = events.iter().map(MatchEvent::commentary_line).collect();
        ActionOutcome {
            phase: self.phase,
            player: self.player.clone(),
            computer: self.computer.clone(),
            target: self.target(),
            winner: self.winner,
            events,
            commentary,
        }
    }
}
