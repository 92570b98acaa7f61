//! Injectable randomness seam.
//!
//! All of the engine's random draws (opponent numbers, coin flips, the
//! computer's bat-or-bowl pick on a won toss) go through `RandomSource`, so a
//! seeded source gives reproducible matches and a scripted source gives fully
//! deterministic tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

use crate::models::{BatOrBowl, CoinFace};

pub trait RandomSource: std::fmt::Debug {
    /// Uniform draw from `[0, max]` inclusive.
    fn draw_number(&mut self, max: u8) -> u8;

    /// Fair coin flip.
    fn flip_coin(&mut self) -> CoinFace;

    /// Uniform bat-or-bowl pick (the computer's choice on a won toss).
    fn pick_bat_or_bowl(&mut self) -> BatOrBowl;
}

/// Seeded source: same seed, same match.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: ChaCha8Rng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        Self { rng: ChaCha8Rng::from_entropy() }
    }
}

impl RandomSource for SeededSource {
    fn draw_number(&mut self, max: u8) -> u8 {
        self.rng.gen_range(0..=max)
    }

    fn flip_coin(&mut self) -> CoinFace {
        if self.rng.gen::<bool>() {
            CoinFace::Heads
        } else {
            CoinFace::Tails
        }
    }

    fn pick_bat_or_bowl(&mut self) -> BatOrBowl {
        if self.rng.gen::<bool>() {
            BatOrBowl::Bat
        } else {
            BatOrBowl::Bowl
        }
    }
}

/// Replays fixed draw sequences, for tests and scripted demos.
///
/// Panics when a queue runs dry: a script is expected to cover every draw the
/// match it drives will make.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    numbers: VecDeque<u8>,
    coins: VecDeque<CoinFace>,
    choices: VecDeque<BatOrBowl>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_numbers(mut self, numbers: impl IntoIterator<Item = u8>) -> Self {
        self.numbers.extend(numbers);
        self
    }

    pub fn with_coins(mut self, coins: impl IntoIterator<Item = CoinFace>) -> Self {
        self.coins.extend(coins);
        self
    }

    pub fn with_choices(mut self, choices: impl IntoIterator<Item = BatOrBowl>) -> Self {
        self.choices.extend(choices);
        self
    }
}

impl RandomSource for ScriptedSource {
    fn draw_number(&mut self, max: u8) -> u8 {
        let n = self.numbers.pop_front().expect("scripted source ran out of numbers");
        assert!(n <= max, "scripted number {n} exceeds range 0..={max}");
        n
    }

    fn flip_coin(&mut self) -> CoinFace {
        self.coins.pop_front().expect("scripted source ran out of coin flips")
    }

    fn pick_bat_or_bowl(&mut self) -> BatOrBowl {
        self.choices.pop_front().expect("scripted source ran out of bat-or-bowl picks")
    }
}
