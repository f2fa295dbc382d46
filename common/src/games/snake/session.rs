use std::time::Duration;

use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

use crate::games::{FrameBroadcaster, SessionRng};
use crate::input::{ControlCommand, InputReceiver};
use crate::{log, log_debug};
use super::error::GameError;
use super::game_state::{SnakeGameState, TickOutcome};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub games_started: u32,
    pub best_score: u32,
    pub total_ticks: u64,
}

pub struct SnakeSession;

impl SnakeSession {
    /// Drives one game (and any restarts) until a quit command arrives or
    /// every input handle is dropped. Ticks, directions and control commands
    /// are serviced one at a time by this task, so a quit is only seen
    /// between ticks.
    pub async fn run(
        mut game: SnakeGameState,
        mut rng: SessionRng,
        tick_interval: Duration,
        mut input: InputReceiver,
        broadcaster: impl FrameBroadcaster,
    ) -> Result<SessionSummary, GameError> {
        let mut summary = SessionSummary {
            games_started: 1,
            ..SessionSummary::default()
        };
        let mut ticker = start_ticker(tick_interval);
        let mut directions_open = true;

        log!(
            "Game started: {}x{} cells, tick {}ms, seed {}",
            game.grid().columns(),
            game.grid().rows(),
            tick_interval.as_millis(),
            rng.seed()
        );
        broadcaster.broadcast_frame(game.snapshot()).await;

        loop {
            tokio::select! {
                biased;

                command = input.controls.recv() => {
                    match command {
                        Some(ControlCommand::Restart) => {}
                        Some(ControlCommand::RestartIfOver) if !game.is_running() => {}
                        Some(ControlCommand::RestartIfOver) => continue,
                        Some(ControlCommand::Quit) | None => {
                            log!("Quit requested after {} ticks", summary.total_ticks);
                            break;
                        }
                    }

                    game.restart(&mut rng)?;
                    summary.games_started += 1;
                    ticker = start_ticker(tick_interval);
                    log!("Game restarted (game #{})", summary.games_started);
                    broadcaster.broadcast_frame(game.snapshot()).await;
                }

                changed = input.directions.changed(), if directions_open => {
                    if changed.is_err() {
                        directions_open = false;
                        continue;
                    }
                    let requested = *input.directions.borrow_and_update();
                    if let Some(direction) = requested {
                        game.change_direction(direction);
                    }
                }

                _ = ticker.tick(), if game.is_running() => {
                    let outcome = game.tick(&mut rng)?;
                    summary.total_ticks += 1;

                    match outcome {
                        TickOutcome::Ate { score } => {
                            summary.best_score = summary.best_score.max(score);
                            log_debug!("Score: {}", score);
                        }
                        TickOutcome::GameOver(reason) => {
                            log!("Game over: snake {}. Final score: {}", reason, game.score());
                        }
                        TickOutcome::Moved | TickOutcome::Frozen => {}
                    }

                    broadcaster.broadcast_frame(game.snapshot()).await;
                }
            }
        }

        Ok(summary)
    }
}

/// First tick fires one full interval from now, not immediately.
fn start_ticker(period: Duration) -> Interval {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}
