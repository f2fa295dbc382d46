mod error;
mod food;
mod game_state;
mod grid;
mod session;
mod settings;
mod snake;
mod snapshot;
mod types;

pub use error::GameError;
pub use food::Food;
pub use game_state::{START_DIRECTION, SnakeGameState, TickOutcome};
pub use grid::{Grid, cells_equal};
pub use session::{SessionSummary, SnakeSession};
pub use settings::{GameSettings, MAX_SPEED_MS, MIN_SPEED_MS, Palette, Rgb};
pub use snake::Snake;
pub use snapshot::GameSnapshot;
pub use types::{Cell, Direction, GameOverReason, GamePhase};
