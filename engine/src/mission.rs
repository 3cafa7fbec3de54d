use std::fmt;

use serde::{Deserialize, Serialize};

use crate::army::Army;
use crate::world::World;
use crate::Roller;

/// The built-in victory conditions. Each carries its own text and rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mission {
    EliminateGreen,
    ConquerThree,
    EliminateRed,
}

impl Mission {
    pub const ALL: [Mission; 3] = [
        Mission::EliminateGreen,
        Mission::ConquerThree,
        Mission::EliminateRed,
    ];

    /// Uniform pick from the catalog.
    pub fn draw(roller: &mut impl Roller) -> Self {
        let mission = Self::ALL[roller.below(Self::ALL.len())];
        tracing::debug!(?mission, "mission assigned");
        mission
    }

    pub fn text(self) -> &'static str {
        match self {
            Mission::EliminateGreen => "Destroy the Green army.",
            Mission::ConquerThree => "Conquer 3 territories in total.",
            Mission::EliminateRed => "Eliminate the Red army.",
        }
    }

    /// Exact, case-sensitive lookup by display text.
    pub fn from_text(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.text() == text)
    }

    pub fn is_complete(self, player: Army, world: &World) -> bool {
        match self {
            Mission::EliminateGreen => !world.has_army(Army::Green),
            Mission::ConquerThree => world.count_owned_by(player) >= 3,
            Mission::EliminateRed => !world.has_army(Army::Red),
        }
    }
}

impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Evaluate a mission given only its text. Unknown text is never complete.
pub fn check_mission(text: &str, player: Army, world: &World) -> bool {
    Mission::from_text(text).is_some_and(|m| m.is_complete(player, world))
}
