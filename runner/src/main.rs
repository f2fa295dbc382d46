mod config;
mod console_broadcaster;
mod log_broadcaster;
mod stdin_input;

use std::path::PathBuf;

use clap::Parser;
use common::config::{ConfigError, Validate};
use common::games::snake::{SessionSummary, SnakeGameState, SnakeSession};
use common::games::{SessionRng, WatchBroadcaster};
use common::input::InputAdapter;
use common::{log, logger};

use config::{Config, RenderMode, get_config_manager};
use console_broadcaster::ConsoleBroadcaster;
use log_broadcaster::LogBroadcaster;
use stdin_input::read_stdin_commands;

#[derive(Parser)]
#[command(name = "gesture_snake", about = "Grid snake steered by text or pointer input")]
struct Args {
    /// YAML config file. Defaults to gesture_snake.yaml next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for food placement. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    speed_ms: Option<u64>,

    #[arg(long, value_enum)]
    render: Option<RenderMode>,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the default config to the config path and exit.
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    block_on_detached(run(args))?
}

/// Runs `future` to completion, then drops the runtime without waiting on
/// blocking-pool work. A pending stdin read never finishes on its own, so
/// waiting for it would keep the process alive after the session ends.
fn block_on_detached<F: Future>(future: F) -> std::io::Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let output = runtime.block_on(future);
    runtime.shutdown_background();
    Ok(output)
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_manager = get_config_manager(args.config.as_deref());
    if args.write_default_config {
        config_manager.set_config(&Config::default())?;
        log!("Default config written");
        return Ok(());
    }

    let mut config = config_manager.get_config()?;
    if let Some(speed_ms) = args.speed_ms {
        config.game.speed_ms = speed_ms;
    }
    if let Some(mode) = args.render {
        config.render.mode = mode;
    }
    config.validate().map_err(ConfigError::Validation)?;

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let game = SnakeGameState::from_settings(&config.game, &mut rng)?;

    let (adapter, receiver) = InputAdapter::channel(config.input.frame_layout());
    tokio::spawn(read_stdin_commands(adapter.clone()));
    tokio::spawn(quit_on_ctrl_c(adapter));

    log!("Controls: w/a/s/d to steer, p X Y to point, c X Y to click, r to restart, q to quit");

    let tick_interval = config.game.tick_interval();
    let summary = match config.render.mode {
        RenderMode::Console => {
            let palette = config.game.palette().map_err(ConfigError::Validation)?;
            let broadcaster = ConsoleBroadcaster::new(
                config.game.grid(),
                palette,
                config.render.clear_screen,
                config.render.use_colors,
            );
            SnakeSession::run(game, rng, tick_interval, receiver, broadcaster).await?
        }
        RenderMode::Log => {
            SnakeSession::run(game, rng, tick_interval, receiver, LogBroadcaster).await?
        }
        RenderMode::None => {
            let (broadcaster, _frames) = WatchBroadcaster::new();
            SnakeSession::run(game, rng, tick_interval, receiver, broadcaster).await?
        }
    };

    log_summary(&summary);
    Ok(())
}

async fn quit_on_ctrl_c(adapter: InputAdapter) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            log!("Shutdown signal received");
            adapter.on_quit();
        }
        Err(e) => log!("Failed to listen for Ctrl+C: {}", e),
    }
}

fn log_summary(summary: &SessionSummary) {
    log!(
        "Session finished: {} game(s), best score {}, {} ticks",
        summary.games_started,
        summary.best_score,
        summary.total_ticks
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn test_blocked_reader_does_not_hold_up_shutdown() {
        let (started_tx, started_rx) = mpsc::channel();
        let output = block_on_detached(async move {
            // Stands in for a stdin read that never returns.
            tokio::task::spawn_blocking(move || {
                let _ = started_tx.send(());
                loop {
                    std::thread::park();
                }
            });
            tokio::task::spawn_blocking(move || started_rx.recv_timeout(Duration::from_secs(5)))
                .await
                .unwrap()
                .unwrap();
            7
        })
        .unwrap();
        assert_eq!(output, 7);
    }
}
