use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::army::{Army, PLAYER_ARMY};
use crate::battle::{resolve_battle, BattleOutcome};
use crate::world::Territory;
use crate::{Dice, Roller};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SiegeConfig {
    pub attacker_troops: u32,
    pub defender_troops: u32,
    #[serde(default)]
    pub seed: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SiegeResult {
    pub conquered: bool,
    pub battles: u32,
    pub attacker_troops_end: u32,
    pub defender_troops_end: u32,
    pub log: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SiegeStats {
    pub samples: u32,
    pub conquests: u32,
    pub repulses: u32,
    pub conquest_rate: f64,
    pub avg_battles: f64,
    pub avg_attacker_troops_left: f64,
}

/// Attack one garrison with another until it falls or the attacker can no
/// longer attack (fewer than 2 troops).
pub fn simulate_siege(cfg: &SiegeConfig) -> Result<SiegeResult> {
    if cfg.attacker_troops < 2 {
        bail!(
            "attacker needs at least 2 troops, got {}",
            cfg.attacker_troops
        );
    }
    if cfg.defender_troops == 0 {
        bail!("defender must start with at least 1 troop");
    }

    let mut dice = Dice::from_seed(cfg.seed);
    let mut attacker = Territory::new("Attacker", PLAYER_ARMY, cfg.attacker_troops);
    let mut defender = Territory::new("Defender", Army::Red, cfg.defender_troops);
    let mut log = Vec::new();
    let mut battles = 0u32;
    let mut conquered = false;

    log.push(format!(
        "[START] Attacker {} troops vs Defender {} troops",
        attacker.troops, defender.troops
    ));
    while attacker.troops >= 2 && !conquered {
        battles += 1;
        let report = resolve_battle(
            &mut attacker,
            &mut defender,
            PLAYER_ARMY,
            || dice.d6(),
            |line| log.push(line),
        );
        conquered = report.outcome == BattleOutcome::Conquered;
    }
    log.push(format!(
        "[END] {} after {} battles",
        if conquered { "conquered" } else { "repulsed" },
        battles
    ));

    Ok(SiegeResult {
        conquered,
        battles,
        attacker_troops_end: attacker.troops,
        defender_troops_end: defender.troops,
        log,
    })
}

/// Run `samples` sieges; sample i uses `seed + i`.
pub fn simulate_siege_many(cfg: &SiegeConfig, samples: u32) -> Result<SiegeStats> {
    if samples == 0 {
        bail!("samples must be > 0");
    }
    let mut conquests = 0u32;
    let mut battles_total = 0u64;
    let mut troops_left_total = 0u64;

    for i in 0..samples {
        let trial = SiegeConfig {
            seed: cfg.seed.wrapping_add(u64::from(i)),
            ..cfg.clone()
        };
        let res = simulate_siege(&trial)?;
        if res.conquered {
            conquests += 1;
        }
        battles_total += u64::from(res.battles);
        troops_left_total += u64::from(res.attacker_troops_end);
    }

    let n = f64::from(samples);
    Ok(SiegeStats {
        samples,
        conquests,
        repulses: samples - conquests,
        conquest_rate: f64::from(conquests) / n,
        avg_battles: battles_total as f64 / n,
        avg_attacker_troops_left: troops_left_total as f64 / n,
    })
}
