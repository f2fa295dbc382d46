#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Every cell of the grid is covered by the snake, so food has nowhere to go.
    GridSaturated { cells: usize },
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::GridSaturated { cells } => {
                write!(f, "No free cell left for food: all {} cells occupied", cells)
            }
        }
    }
}

impl std::error::Error for GameError {}
