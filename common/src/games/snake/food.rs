use std::collections::HashSet;

use crate::games::SessionRng;
use super::error::GameError;
use super::grid::Grid;
use super::types::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    cell: Cell,
}

impl Food {
    /// Draws uniformly over the whole grid and retries until the candidate is
    /// free. Terminates with probability one while at least one cell is free.
    pub fn spawn(
        grid: &Grid,
        occupied: &HashSet<Cell>,
        rng: &mut SessionRng,
    ) -> Result<Food, GameError> {
        let capacity = grid.cell_count();
        let blocked = occupied.iter().filter(|c| grid.is_aligned(c)).count();
        if blocked >= capacity {
            return Err(GameError::GridSaturated { cells: capacity });
        }

        loop {
            let column = rng.random_range(0..grid.columns());
            let row = rng.random_range(0..grid.rows());
            let candidate = grid.cell_at(column, row);

            if !occupied.contains(&candidate) {
                return Ok(Food { cell: candidate });
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn at(cell: Cell) -> Food {
        Food { cell }
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_is_grid_aligned_and_in_bounds() {
        let grid = Grid::new(700, 700, 25);
        let mut rng = SessionRng::new(42);
        for _ in 0..200 {
            let food = Food::spawn(&grid, &HashSet::new(), &mut rng).unwrap();
            assert!(grid.is_aligned(&food.cell()));
        }
    }

    #[test]
    fn test_spawn_avoids_occupied_cells() {
        let grid = Grid::new(100, 100, 25);
        let mut rng = SessionRng::new(3);
        let occupied: HashSet<Cell> = (0..4)
            .flat_map(|c| (0..3).map(move |r| (c, r)))
            .map(|(c, r)| grid.cell_at(c, r))
            .collect();

        for _ in 0..50 {
            let food = Food::spawn(&grid, &occupied, &mut rng).unwrap();
            assert!(!occupied.contains(&food.cell()));
            assert_eq!(food.cell().y, 75);
        }
    }

    #[test]
    fn test_spawn_finds_last_free_cell() {
        let grid = Grid::new(75, 75, 25);
        let mut rng = SessionRng::new(11);
        let free = grid.cell_at(2, 1);
        let occupied: HashSet<Cell> = (0..3)
            .flat_map(|c| (0..3).map(move |r| (c, r)))
            .map(|(c, r)| grid.cell_at(c, r))
            .filter(|cell| *cell != free)
            .collect();

        let food = Food::spawn(&grid, &occupied, &mut rng).unwrap();
        assert_eq!(food.cell(), free);
    }

    #[test]
    fn test_spawn_on_saturated_grid_is_error() {
        let grid = Grid::new(50, 50, 25);
        let mut rng = SessionRng::new(1);
        let mut occupied: HashSet<Cell> = (0..2)
            .flat_map(|c| (0..2).map(move |r| (c, r)))
            .map(|(c, r)| grid.cell_at(c, r))
            .collect();
        // Off-grid cells do not count towards saturation.
        occupied.insert(Cell::new(-25, 0));

        assert_eq!(
            Food::spawn(&grid, &occupied, &mut rng),
            Err(GameError::GridSaturated { cells: 4 })
        );
    }
}
