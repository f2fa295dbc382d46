pub mod config;
pub mod games;
pub mod input;
pub mod logger;
mod defaults;

pub use games::snake::{
    Cell, Direction, GameError, GamePhase, GameOverReason, GameSnapshot, SnakeGameState,
};
pub use games::{FrameBroadcaster, SessionRng};
