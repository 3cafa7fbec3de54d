use std::fmt;

use serde::{Deserialize, Serialize};

/// Ownership tag of a territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Army {
    Green,
    Blue,
    Red,
    Yellow,
    White,
    Neutral,
}

/// The human always plays Blue.
pub const PLAYER_ARMY: Army = Army::Blue;

impl Army {
    pub fn name(self) -> &'static str {
        match self {
            Army::Green => "Green",
            Army::Blue => "Blue",
            Army::Red => "Red",
            Army::Yellow => "Yellow",
            Army::White => "White",
            Army::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Army {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so the map table can align on `{:<10}`.
        f.pad(self.name())
    }
}
