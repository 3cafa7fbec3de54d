use std::fmt;

use serde::{Deserialize, Serialize};

use crate::army::Army;

pub const TERRITORY_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    pub name: String,
    pub army: Army,
    pub troops: u32,
}

impl Territory {
    pub fn new(name: &str, army: Army, troops: u32) -> Self {
        Self {
            name: name.to_string(),
            army,
            troops,
        }
    }
}

/// The fixed five-territory map. Display indices are 1-based, storage is 0-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    territories: [Territory; TERRITORY_COUNT],
}

impl World {
    pub fn standard() -> Self {
        Self {
            territories: [
                Territory::new("America", Army::Green, 5),
                Territory::new("Europe", Army::Blue, 3),
                Territory::new("Asia", Army::Red, 2),
                Territory::new("Africa", Army::Yellow, 4),
                Territory::new("Oceania", Army::White, 1),
            ],
        }
    }

    pub fn from_territories(territories: [Territory; TERRITORY_COUNT]) -> Self {
        Self { territories }
    }

    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    pub fn get(&self, index: usize) -> Option<&Territory> {
        self.territories.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Territory> {
        self.territories.get_mut(index)
    }

    /// Mutable access to two distinct territories at once.
    pub fn pair_mut(&mut self, a: usize, b: usize) -> Option<(&mut Territory, &mut Territory)> {
        if a == b || a >= TERRITORY_COUNT || b >= TERRITORY_COUNT {
            return None;
        }
        if a < b {
            let (left, right) = self.territories.split_at_mut(b);
            Some((&mut left[a], &mut right[0]))
        } else {
            let (left, right) = self.territories.split_at_mut(a);
            Some((&mut right[0], &mut left[b]))
        }
    }

    pub fn count_owned_by(&self, army: Army) -> usize {
        self.territories.iter().filter(|t| t.army == army).count()
    }

    pub fn has_army(&self, army: Army) -> bool {
        self.territories.iter().any(|t| t.army == army)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=============== WORLD MAP ===============")?;
        for (i, t) in self.territories.iter().enumerate() {
            writeln!(
                f,
                "{}. {:<12} (Army: {:<10}, Troops: {})",
                i + 1,
                t.name,
                t.army,
                t.troops
            )?;
        }
        write!(f, "=========================================")
    }
}
