use serde::{Deserialize, Serialize};

use crate::army::Army;
use crate::error::OrderError;
use crate::world::{Territory, World};

/// Exactly one of these happens per battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    DefenderLostTroop,
    Conquered,
    AttackerLostTroop,
    CriticalDefeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    pub attack_roll: u8,
    pub defend_roll: u8,
    pub outcome: BattleOutcome,
}

impl BattleReport {
    pub fn attacker_won(&self) -> bool {
        matches!(
            self.outcome,
            BattleOutcome::DefenderLostTroop | BattleOutcome::Conquered
        )
    }
}

/// Check an order given as 0-based indices. Returns the indices back on success.
///
/// Checks run in a fixed order so the player always sees the first problem:
/// range, attacker ownership, attacker strength, defender ownership.
pub fn validate_attack(
    world: &World,
    attacker: usize,
    defender: usize,
    player: Army,
) -> Result<(usize, usize), OrderError> {
    let (Some(from), Some(to)) = (world.get(attacker), world.get(defender)) else {
        return Err(OrderError::InvalidTerritory);
    };
    if from.army != player {
        return Err(OrderError::NotYourTerritory(player));
    }
    if from.troops < 2 {
        return Err(OrderError::NotEnoughTroops);
    }
    if to.army == player {
        return Err(OrderError::AlreadyYours);
    }
    Ok((attacker, defender))
}

/// Roll one d6 each; the attacker must beat the defender outright (ties defend).
///
/// Assumes the order already passed `validate_attack`.
pub fn resolve_battle(
    attacker: &mut Territory,
    defender: &mut Territory,
    player: Army,
    mut d6: impl FnMut() -> u8,
    mut log: impl FnMut(String),
) -> BattleReport {
    let attack_roll = d6();
    let defend_roll = d6();
    tracing::debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        attack_roll,
        defend_roll,
        "battle rolls"
    );

    log("--- BATTLE RESULT ---".to_string());
    log(format!(
        "Attack ({}): {} | Defense ({}): {}",
        attacker.name, attack_roll, defender.name, defend_roll
    ));

    let outcome = if attack_roll > defend_roll {
        log("ATTACK WINS! The defender lost 1 troop.".to_string());
        defender.troops = defender.troops.saturating_sub(1);
        if defender.troops == 0 {
            log(format!(
                "CONQUEST! {} has been taken by the {} army!",
                defender.name, player
            ));
            tracing::info!(territory = %defender.name, from = %defender.army, to = %player, "territory conquered");
            defender.army = player;
            defender.troops = 1;
            attacker.troops = attacker.troops.saturating_sub(1);
            BattleOutcome::Conquered
        } else {
            BattleOutcome::DefenderLostTroop
        }
    } else {
        log("DEFENSE WINS! The attacker lost 1 troop.".to_string());
        attacker.troops = attacker.troops.saturating_sub(1);
        if attacker.troops == 0 {
            log(format!(
                "CRITICAL DEFEAT! Your territory {} was left defenceless and is now Neutral.",
                attacker.name
            ));
            tracing::info!(territory = %attacker.name, "territory lost to neutral");
            // Stays at 0 troops, unlike a conquest.
            attacker.army = Army::Neutral;
            BattleOutcome::CriticalDefeat
        } else {
            BattleOutcome::AttackerLostTroop
        }
    };

    BattleReport {
        attack_roll,
        defend_roll,
        outcome,
    }
}
