use super::types::{Cell, Direction, GameOverReason, GamePhase};

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSnapshot {
    pub tick: u64,
    /// Head first.
    pub snake: Vec<Cell>,
    pub food: Cell,
    pub score: u32,
    pub phase: GamePhase,
    pub direction: Direction,
    pub game_over_reason: Option<GameOverReason>,
}

impl GameSnapshot {
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::Over
    }
}
