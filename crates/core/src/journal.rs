//! In-memory record of a session: the seed plus every input token in order.
//!
//! Together with the world dimensions this is the complete persisted state;
//! the grid itself is never saved because replaying the tokens over a fresh
//! world of the same seed reproduces it exactly.

use crate::world::World;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveJournal {
    pub seed: i32,
    pub tokens: Vec<char>,
}

impl MoveJournal {
    pub fn new(seed: i32) -> Self {
        Self { seed, tokens: Vec::new() }
    }

    pub fn from_world(world: &World) -> Self {
        Self { seed: world.seed(), tokens: world.input_record().to_vec() }
    }

    pub fn record(&mut self, token: char) {
        self.tokens.push(token);
    }

    /// Save text: line 1 the decimal seed, line 2 the tokens concatenated
    /// with no separator.
    pub fn to_save_text(&self) -> String {
        let moves: String = self.tokens.iter().collect();
        format!("{}\n{moves}\n", self.seed)
    }
}
