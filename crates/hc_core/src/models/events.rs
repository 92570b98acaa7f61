use serde::{Deserialize, Serialize};

use super::{CoinFace, Side, Winner};

/// Structured description of something that happened during an engine call.
///
/// Flat struct with an event-type tag and optional numeric detail fields;
/// consumers read the fields relevant to the tag and ignore the rest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MatchEvent {
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Side the event concerns (batting side for deliveries, toss winner).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    /// Batting side's chosen number for the delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bat_number: Option<u8>,
    /// Bowling side's number for the delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bowl_number: Option<u8>,
    /// Runs scored off the delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runs: Option<u8>,
    /// Batting side's total after the delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,
    /// Crossed multiple-of-50 value for milestone events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<u32>,
    /// Whether a dismissal happened with the total still at 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duck: Option<bool>,
    /// Chase target, where relevant (innings break, target reached).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<u32>,
    /// Player's toss call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call: Option<CoinFace>,
    /// Coin outcome.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin: Option<CoinFace>,
    /// First batter, once the batting order is decided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_batter: Option<Side>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Winner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computer_score: Option<u32>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    #[default]
    TossResult,
    Score,
    /// Scored value was exactly 4 or exactly 6.
    Boundary,
    Dismissal,
    /// Total crossed a multiple-of-50 boundary.
    Milestone,
    /// Chasing side met or exceeded the target.
    TargetReached,
    GameOver,
}

impl MatchEvent {
    pub fn toss_result(
        call: CoinFace,
        coin: CoinFace,
        winner_side: Side,
        first_batter: Option<Side>,
    ) -> Self {
        Self {
            event_type: EventType::TossResult,
            side: Some(winner_side),
            call: Some(call),
            coin: Some(coin),
            first_batter,
            ..Default::default()
        }
    }

    pub fn score(side: Side, bat_number: u8, bowl_number: u8, total: u32) -> Self {
        Self {
            event_type: EventType::Score,
            side: Some(side),
            bat_number: Some(bat_number),
            bowl_number: Some(bowl_number),
            runs: Some(bat_number),
            total: Some(total),
            ..Default::default()
        }
    }

    pub fn boundary(side: Side, runs: u8) -> Self {
        Self {
            event_type: EventType::Boundary,
            side: Some(side),
            runs: Some(runs),
            ..Default::default()
        }
    }

    pub fn dismissal(side: Side, number: u8, total: u32, duck: bool) -> Self {
        Self {
            event_type: EventType::Dismissal,
            side: Some(side),
            bat_number: Some(number),
            bowl_number: Some(number),
            total: Some(total),
            duck: Some(duck),
            ..Default::default()
        }
    }

    pub fn milestone(side: Side, value: u32) -> Self {
        Self {
            event_type: EventType::Milestone,
            side: Some(side),
            milestone: Some(value),
            ..Default::default()
        }
    }

    pub fn target_reached(side: Side, total: u32, target: u32) -> Self {
        Self {
            event_type: EventType::TargetReached,
            side: Some(side),
            total: Some(total),
            target: Some(target),
            ..Default::default()
        }
    }

    pub fn game_over(winner: Winner, player_score: u32, computer_score: u32) -> Self {
        Self {
            event_type: EventType::GameOver,
            winner: Some(winner),
            player_score: Some(player_score),
            computer_score: Some(computer_score),
            ..Default::default()
        }
    }

    /// Attach the chase target announced at the innings break.
    pub fn with_target(mut self, target: u32) -> Self {
        self.target = Some(target);
        self
    }

    /// Human-readable commentary line for this event.
    pub fn commentary_line(&self) -> String {
        match self.event_type {
            EventType::TossResult => {
                let coin = self.coin.map(|c| c.to_string()).unwrap_or_default();
                match (self.side, self.first_batter) {
                    (Some(Side::Player), _) => {
                        format!("{coin}! You won the toss!")
                    }
                    (Some(Side::Computer), Some(Side::Computer)) => {
                        format!("{coin}! Computer won the toss and chose to bat first.")
                    }
                    (Some(Side::Computer), _) => {
                        format!("{coin}! Computer won the toss and chose to bowl first.")
                    }
                    _ => format!("{coin}!"),
                }
            }
            EventType::Score => {
                let runs = self.runs.unwrap_or(0);
                let bowl = self.bowl_number.unwrap_or(0);
                match self.side {
                    Some(Side::Player) => {
                        format!("You scored {runs}! (You: {runs}, Computer: {bowl})")
                    }
                    _ => format!("Computer scored {runs}! (You bowled: {bowl}, Computer batted: {runs})"),
                }
            }
            EventType::Boundary => {
                let word = if self.runs == Some(6) { "SIX" } else { "FOUR" };
                match self.side {
                    Some(Side::Player) => format!("{word}! What a shot!"),
                    _ => format!("Computer hit {word}!"),
                }
            }
            EventType::Dismissal => {
                let number = self.bat_number.unwrap_or(0);
                let duck = self.duck == Some(true);
                let mut line = match (self.side, duck) {
                    (Some(Side::Player), true) => "DUCK OUT! You scored 0 runs!".to_string(),
                    (Some(Side::Player), false) => {
                        format!("OUT! You chose {number}, Computer chose {number}")
                    }
                    (_, true) => "Computer DUCK OUT! Computer scored 0 runs!".to_string(),
                    (_, false) => {
                        format!("Computer OUT! (You bowled: {number}, Computer batted: {number})")
                    }
                };
                if let Some(target) = self.target {
                    let next = match self.side {
                        Some(Side::Player) => "Your turn to bowl!",
                        _ => "Your turn to bat!",
                    };
                    line.push_str(&format!(" Target: {target} runs - {next}"));
                }
                line
            }
            EventType::Milestone => {
                let value = self.milestone.unwrap_or(0);
                let name = match value {
                    50 => "HALF CENTURY",
                    100 => "CENTURY",
                    _ => "MILESTONE",
                };
                match self.side {
                    Some(Side::Player) => format!("{value} RUNS! {name}!"),
                    _ => format!("Computer reached {value} runs! {name}!"),
                }
            }
            EventType::TargetReached => {
                let total = self.total.unwrap_or(0);
                let target = self.target.unwrap_or(0);
                match self.side {
                    Some(Side::Player) => {
                        format!("TARGET REACHED! Final: {total}/{target}")
                    }
                    _ => format!("Computer reached the target! Final: {total}/{target}"),
                }
            }
            EventType::GameOver => {
                let player = self.player_score.unwrap_or(0);
                let computer = self.computer_score.unwrap_or(0);
                match self.winner {
                    Some(Winner::Player) => {
                        format!("YOU WIN! Final score: You {player} - {computer} Computer")
                    }
                    Some(Winner::Computer) => {
                        format!("Computer wins! Final score: You {player} - {computer} Computer")
                    }
                    _ => format!("It's a tie! Final score: You {player} - {computer} Computer"),
                }
            }
        }
    }
}
