use common::games::FrameBroadcaster;
use common::games::snake::GameSnapshot;
use common::log;

pub struct LogBroadcaster;

impl LogBroadcaster {
    pub fn describe(snapshot: &GameSnapshot) -> String {
        let head = snapshot
            .snake
            .first()
            .map(|c| format!("({}, {})", c.x, c.y))
            .unwrap_or_else(|| "-".to_string());
        let mut line = format!(
            "tick {} | score {} | {} | head {} | length {} | food ({}, {})",
            snapshot.tick,
            snapshot.score,
            snapshot.direction,
            head,
            snapshot.snake.len(),
            snapshot.food.x,
            snapshot.food.y
        );
        if let Some(reason) = snapshot.game_over_reason {
            line.push_str(&format!(" | GAME OVER ({})", reason));
        }
        line
    }
}

impl FrameBroadcaster for LogBroadcaster {
    async fn broadcast_frame(&self, snapshot: GameSnapshot) {
        log!("{}", Self::describe(&snapshot));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::snake::{Cell, Direction, GameOverReason, GamePhase};

    #[test]
    fn test_describe_frame() {
        let snapshot = GameSnapshot {
            tick: 12,
            snake: vec![Cell::new(-25, 0), Cell::new(0, 0), Cell::new(25, 0)],
            food: Cell::new(100, 200),
            score: 2,
            phase: GamePhase::Over,
            direction: Direction::Left,
            game_over_reason: Some(GameOverReason::WallCollision),
        };
        assert_eq!(
            LogBroadcaster::describe(&snapshot),
            "tick 12 | score 2 | left | head (-25, 0) | length 3 | food (100, 200) | GAME OVER (hit the wall)"
        );
    }
}
