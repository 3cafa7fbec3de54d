#![allow(dead_code)]

use std::collections::VecDeque;

use engine::Roller;

pub fn d6_seq(seq: &[u8]) -> impl FnMut() -> u8 {
    let mut i = 0usize;
    let values = seq.to_vec();
    move || {
        let result = values[i % values.len()];
        i += 1;
        result
    }
}

pub fn noop_log(_: String) {}

/// Roller that replays fixed d6 results; panics if a test rolls more than it loaded.
pub struct LoadedDice {
    rolls: VecDeque<u8>,
}

impl LoadedDice {
    pub fn new(rolls: &[u8]) -> Self {
        Self {
            rolls: rolls.iter().copied().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl Roller for LoadedDice {
    fn d6(&mut self) -> u8 {
        self.rolls.pop_front().expect("test rolled more dice than loaded")
    }

    fn below(&mut self, _n: usize) -> usize {
        0
    }
}
