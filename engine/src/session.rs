//! The interactive turn loop.
//!
//! `Game` owns the rules state (world, mission, dice). `Session` drives a
//! `Game` over any line-oriented reader and writer, so the same loop serves
//! the terminal binary and the tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use serde::Deserialize;

use crate::army::{Army, PLAYER_ARMY};
use crate::battle::{resolve_battle, validate_attack, BattleReport};
use crate::error::OrderError;
use crate::mission::Mission;
use crate::world::World;
use crate::{Dice, Roller};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct GameConfig {
    /// Fixed dice seed; the wall clock is used when absent.
    pub seed: Option<u64>,
    /// Wait for Enter after each action result.
    pub pause: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            pause: true,
        }
    }
}

pub struct Game<R: Roller = Dice> {
    world: World,
    mission: Mission,
    player: Army,
    roller: R,
}

impl Game<Dice> {
    /// Standard map, one random mission, dice seeded once.
    pub fn new(cfg: &GameConfig) -> Self {
        let mut dice = cfg.seed.map_or_else(Dice::from_clock, Dice::from_seed);
        tracing::info!(seed = dice.seed(), "dice seeded");
        let mission = Mission::draw(&mut dice);
        Self::with_parts(World::standard(), mission, dice)
    }
}

impl<R: Roller> Game<R> {
    pub fn with_parts(world: World, mission: Mission, roller: R) -> Self {
        Self {
            world,
            mission,
            player: PLAYER_ARMY,
            roller,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn mission(&self) -> Mission {
        self.mission
    }

    pub fn player(&self) -> Army {
        self.player
    }

    /// Validate and resolve an attack between 0-based territory indices.
    /// A refused order rolls no dice and leaves the world untouched.
    pub fn attack(
        &mut self,
        attacker: usize,
        defender: usize,
        log: impl FnMut(String),
    ) -> Result<BattleReport, OrderError> {
        let (a, d) = validate_attack(&self.world, attacker, defender, self.player)?;
        let (from, to) = self
            .world
            .pair_mut(a, d)
            .ok_or(OrderError::InvalidTerritory)?;
        let roller = &mut self.roller;
        Ok(resolve_battle(from, to, self.player, || roller.d6(), log))
    }

    pub fn mission_complete(&self) -> bool {
        self.mission.is_complete(self.player, &self.world)
    }
}

/// How the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Victory,
    Quit,
    InputClosed,
}

enum Step {
    Menu,
    Victory,
    Closed,
}

pub struct Session<I, O, R: Roller = Dice> {
    game: Game<R>,
    input: I,
    out: O,
    pause: bool,
    pending: VecDeque<String>,
}

impl<I: BufRead, O: Write, R: Roller> Session<I, O, R> {
    pub fn new(game: Game<R>, input: I, out: O) -> Self {
        Self {
            game,
            input,
            out,
            pause: true,
            pending: VecDeque::new(),
        }
    }

    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    pub fn into_output(self) -> O {
        self.out
    }

    pub fn run(&mut self) -> io::Result<Ending> {
        let ending = loop {
            self.show_state()?;
            writeln!(self.out, "\n--- ACTIONS ---")?;
            writeln!(self.out, "1 - Attack")?;
            writeln!(self.out, "2 - Check Mission")?;
            writeln!(self.out, "0 - Quit")?;
            let Some(choice) = self.ask("Choose your action: ")? else {
                writeln!(self.out, "\nLeaving the game...")?;
                break Ending::InputClosed;
            };
            self.pending.clear();

            let step = match choice {
                Some(1) => self.attack_phase()?,
                Some(2) => self.mission_check()?,
                Some(0) => {
                    writeln!(self.out, "\nLeaving the game...")?;
                    break Ending::Quit;
                }
                _ => {
                    writeln!(self.out, "\nInvalid option! Try again.")?;
                    self.pause_screen()?
                }
            };
            match step {
                Step::Menu => {}
                Step::Victory => break Ending::Victory,
                Step::Closed => {
                    writeln!(self.out, "\nLeaving the game...")?;
                    break Ending::InputClosed;
                }
            }
        };

        if ending == Ending::Victory {
            self.victory_banner()?;
        }
        writeln!(self.out, "\nEnding the game.")?;
        self.out.flush()?;
        Ok(ending)
    }

    fn show_state(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n{}", self.game.world())?;
        writeln!(
            self.out,
            "\n--- YOUR MISSION ({} Army) ---",
            self.game.player()
        )?;
        writeln!(self.out, "{}", self.game.mission())
    }

    fn attack_phase(&mut self) -> io::Result<Step> {
        writeln!(self.out, "\n--- ATTACK PHASE ---")?;
        let Some(attacker) = self.ask("Choose the attacking territory (1 to 5): ")? else {
            return Ok(Step::Closed);
        };
        let Some(defender) = self.ask_more("Choose the defending territory (1 to 5): ")? else {
            return Ok(Step::Closed);
        };
        self.pending.clear();

        let mut lines = Vec::new();
        let result = match (to_index(attacker), to_index(defender)) {
            (Some(a), Some(d)) => self.game.attack(a, d, |line| lines.push(line)),
            _ => Err(OrderError::InvalidTerritory),
        };
        match result {
            Ok(_) => {
                writeln!(self.out)?;
                for line in &lines {
                    writeln!(self.out, "{line}")?;
                }
                if self.game.mission_complete() {
                    return Ok(Step::Victory);
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "attack order refused");
                writeln!(self.out, "!! ERROR: {e}")?;
            }
        }
        self.pause_screen()
    }

    fn mission_check(&mut self) -> io::Result<Step> {
        if self.game.mission_complete() {
            writeln!(
                self.out,
                "\n*** CONGRATULATIONS! You have completed your mission! ***"
            )?;
            self.pause_screen()?;
            return Ok(Step::Victory);
        }
        writeln!(
            self.out,
            "\nYour mission is not complete yet. Keep fighting!"
        )?;
        self.pause_screen()
    }

    fn victory_banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n\n=================================================")?;
        writeln!(
            self.out,
            "         VICTORY FOR THE {} ARMY!",
            self.game.player()
        )?;
        writeln!(
            self.out,
            "         Mission accomplished: {}",
            self.game.mission()
        )?;
        writeln!(self.out, "=================================================")?;
        writeln!(self.out, "\n{}", self.game.world())
    }

    fn pause_screen(&mut self) -> io::Result<Step> {
        if self.pause {
            write!(self.out, "\nPress Enter to continue...")?;
            self.out.flush()?;
            // End of input here is noticed at the next prompt.
            let _ = self.read_line()?;
        }
        Ok(Step::Menu)
    }

    /// Prompt and read the first integer of a fresh line.
    /// Outer `None` means the input is exhausted; inner `None` means not a number.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<Option<i64>>> {
        self.pending.clear();
        self.ask_more(prompt)
    }

    /// Like `ask`, but takes the next number left on the current line first.
    fn ask_more(&mut self, prompt: &str) -> io::Result<Option<Option<i64>>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        if self.pending.is_empty() {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(Some(self.pending.pop_front().and_then(|t| leading_int(&t))))
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// `scanf("%d")` on one token: optional sign, then digits, rest ignored.
fn leading_int(token: &str) -> Option<i64> {
    let sign = usize::from(token.starts_with(['+', '-']));
    let digits = token[sign..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    token[..sign + digits].parse().ok()
}

/// 1-based menu number to 0-based index.
fn to_index(n: Option<i64>) -> Option<usize> {
    n.and_then(|n| usize::try_from(n.checked_sub(1)?).ok())
}
