use std::fmt;

/// Pixel-space grid coordinate. Valid cells are multiples of the cell size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, direction: Direction, step: i32) -> Cell {
        let (dx, dy) = direction.unit_vector();
        Cell::new(self.x + dx * step, self.y + dy * step)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }

    /// Screen coordinates: y grows downwards.
    pub fn unit_vector(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    Over,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    WallCollision,
    SelfCollision,
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOverReason::WallCollision => f.write_str("hit the wall"),
            GameOverReason::SelfCollision => f.write_str("bit its own tail"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites_are_symmetric() {
        for a in Direction::ALL {
            for b in Direction::ALL {
                assert_eq!(a.is_opposite(&b), b.is_opposite(&a));
            }
            assert!(!a.is_opposite(&a));
        }
        assert!(Direction::Up.is_opposite(&Direction::Down));
        assert!(Direction::Left.is_opposite(&Direction::Right));
        assert!(!Direction::Up.is_opposite(&Direction::Left));
    }

    #[test]
    fn test_offset_scales_by_step() {
        let cell = Cell::new(50, 50);
        assert_eq!(cell.offset(Direction::Up, 25), Cell::new(50, 25));
        assert_eq!(cell.offset(Direction::Down, 25), Cell::new(50, 75));
        assert_eq!(cell.offset(Direction::Left, 25), Cell::new(25, 50));
        assert_eq!(cell.offset(Direction::Right, 25), Cell::new(75, 50));
    }
}
