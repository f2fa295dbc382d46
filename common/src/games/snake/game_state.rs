use std::collections::HashSet;

use crate::games::SessionRng;
use crate::log_debug;
use super::error::GameError;
use super::food::Food;
use super::grid::Grid;
use super::settings::GameSettings;
use super::snake::Snake;
use super::snapshot::GameSnapshot;
use super::types::{Cell, Direction, GameOverReason, GamePhase};

pub const START_DIRECTION: Direction = Direction::Down;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate { score: u32 },
    GameOver(GameOverReason),
    /// The game was already over; nothing changed.
    Frozen,
}

/// Single-player game. Owns the snake and the food; the driver owns the clock
/// and calls [`SnakeGameState::tick`] once per interval while running.
#[derive(Clone, Debug)]
pub struct SnakeGameState {
    grid: Grid,
    body_parts: usize,
    snake: Snake,
    food: Food,
    direction: Direction,
    pending_direction: Option<Direction>,
    score: u32,
    phase: GamePhase,
    game_over_reason: Option<GameOverReason>,
    tick: u64,
}

impl SnakeGameState {
    pub fn new(grid: Grid, body_parts: usize, rng: &mut SessionRng) -> Result<Self, GameError> {
        let snake = Snake::new(grid.origin(), body_parts, grid.cell_size());
        let food = Food::spawn(&grid, &occupied_by(&snake), rng)?;

        Ok(Self {
            grid,
            body_parts,
            snake,
            food,
            direction: START_DIRECTION,
            pending_direction: None,
            score: 0,
            phase: GamePhase::Running,
            game_over_reason: None,
            tick: 0,
        })
    }

    pub fn from_settings(settings: &GameSettings, rng: &mut SessionRng) -> Result<Self, GameError> {
        Self::new(settings.grid(), settings.body_parts, rng)
    }

    /// Fresh snake, food, score and direction. Works from either phase.
    pub fn restart(&mut self, rng: &mut SessionRng) -> Result<(), GameError> {
        *self = Self::new(self.grid, self.body_parts, rng)?;
        Ok(())
    }

    /// Buffers a turn for the next tick. Reversals of the committed direction
    /// and any request while the game is over are dropped without notice.
    /// Later calls before the tick overwrite earlier ones.
    pub fn change_direction(&mut self, requested: Direction) {
        if self.phase == GamePhase::Over || requested.is_opposite(&self.direction) {
            return;
        }
        self.pending_direction = Some(requested);
    }

    pub fn tick(&mut self, rng: &mut SessionRng) -> Result<TickOutcome, GameError> {
        if self.phase == GamePhase::Over {
            return Ok(TickOutcome::Frozen);
        }
        self.tick += 1;

        if let Some(pending) = self.pending_direction.take()
            && !pending.is_opposite(&self.direction)
        {
            if pending != self.direction {
                log_debug!("Direction {} -> {}", self.direction, pending);
            }
            self.direction = pending;
        }

        let new_head = self.snake.advance(self.direction);

        let mut outcome = TickOutcome::Moved;
        if new_head == self.food.cell() {
            // Tail stays put this tick.
            self.score += 1;
            self.food = Food::spawn(&self.grid, &occupied_by(&self.snake), rng)?;
            log_debug!(
                "Ate food at ({}, {}). Score: {}. Food respawned at ({}, {})",
                new_head.x,
                new_head.y,
                self.score,
                self.food.cell().x,
                self.food.cell().y
            );
            outcome = TickOutcome::Ate { score: self.score };
        } else {
            self.snake.shrink();
        }

        if let Some(reason) = self.detect_collision() {
            self.phase = GamePhase::Over;
            self.game_over_reason = Some(reason);
            self.pending_direction = None;
            return Ok(TickOutcome::GameOver(reason));
        }

        Ok(outcome)
    }

    fn detect_collision(&self) -> Option<GameOverReason> {
        if !self.grid.in_bounds(&self.snake.head()) {
            return Some(GameOverReason::WallCollision);
        }
        if self.snake.head_hits_body() {
            return Some(GameOverReason::SelfCollision);
        }
        None
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            tick: self.tick,
            snake: self.snake.cells().copied().collect(),
            food: self.food.cell(),
            score: self.score,
            phase: self.phase,
            direction: self.direction,
            game_over_reason: self.game_over_reason,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food.cell()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    pub fn initial_length(&self) -> usize {
        self.body_parts
    }

    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, snake: Snake, direction: Direction) {
        self.snake = snake;
        self.direction = direction;
        self.pending_direction = None;
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, cell: Cell) {
        self.food = Food::at(cell);
    }
}

fn occupied_by(snake: &Snake) -> HashSet<Cell> {
    snake.cells().copied().collect()
}
