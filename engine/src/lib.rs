use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::{SystemTime, UNIX_EPOCH};

pub mod api;
pub mod army;
pub mod battle;
pub mod error;
pub mod mission;
pub mod session;
pub mod world;

pub use army::{Army, PLAYER_ARMY};
pub use battle::{resolve_battle, validate_attack, BattleOutcome, BattleReport};
pub use error::OrderError;
pub use mission::{check_mission, Mission};
pub use session::{Ending, Game, GameConfig, Session};
pub use world::{Territory, World, TERRITORY_COUNT};

/// Source of randomness for the game. `Dice` is the real one; tests load their own.
pub trait Roller {
    /// Uniform roll in 1..=6.
    fn d6(&mut self) -> u8;
    /// Uniform index in 0..n.
    fn below(&mut self, n: usize) -> usize;
}

pub struct Dice {
    rng: ChaCha8Rng,
    seed: u64,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed), seed }
    }

    /// Seed once from the wall clock, the way a fresh game is started.
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        Self::from_seed(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Roller for Dice {
    fn d6(&mut self) -> u8 {
        self.rng.gen_range(1..=6)
    }

    fn below(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }
}
