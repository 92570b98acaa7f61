//! Coin toss state and resolution.

use serde::{Deserialize, Serialize};

use crate::models::{CoinFace, Side};

/// Toss record for the current match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TossState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_call: Option<CoinFace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin_result: Option<CoinFace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toss_winner: Option<Side>,
}

impl TossState {
    /// Resolve the toss: the player wins iff their call matches the coin.
    pub fn resolve(&mut self, call: CoinFace, coin: CoinFace) -> Side {
        let winner = if call == coin { Side::Player } else { Side::Computer };
        self.player_call = Some(call);
        self.coin_result = Some(coin);
        self.toss_winner = Some(winner);
        winner
    }

    pub fn clear(&mut self) {
        *self = TossState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_call_wins() {
        let mut toss = TossState::default();
        let winner = toss.resolve(CoinFace::Heads, CoinFace::Heads);

        assert_eq!(winner, Side::Player);
        assert_eq!(toss.toss_winner, Some(Side::Player));
        assert_eq!(toss.player_call, Some(CoinFace::Heads));
        assert_eq!(toss.coin_result, Some(CoinFace::Heads));
    }

    #[test]
    fn test_mismatched_call_loses() {
        let mut toss = TossState::default();
        let winner = toss.resolve(CoinFace::Tails, CoinFace::Heads);
        assert_eq!(winner, Side::Computer);
    }

    #[test]
    fn test_clear_resets_all_fields() {
        let mut toss = TossState::default();
        toss.resolve(CoinFace::Heads, CoinFace::Tails);
        toss.clear();
        assert_eq!(toss, TossState::default());
    }
}
