use super::types::Cell;

/// Fixed playing field. Spans `[0, width) x [0, height)` in pixels, split into
/// square cells of `cell_size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    pub fn cell_count(&self) -> usize {
        (self.columns().max(0) as usize) * (self.rows().max(0) as usize)
    }

    pub fn origin(&self) -> Cell {
        Cell::new(0, 0)
    }

    pub fn cell_at(&self, column: i32, row: i32) -> Cell {
        Cell::new(column * self.cell_size, row * self.cell_size)
    }

    pub fn in_bounds(&self, cell: &Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// True for in-bounds cells that sit on the cell lattice.
    pub fn is_aligned(&self, cell: &Cell) -> bool {
        self.in_bounds(cell)
            && cell.x % self.cell_size == 0
            && cell.y % self.cell_size == 0
            && cell.x / self.cell_size < self.columns()
            && cell.y / self.cell_size < self.rows()
    }
}

pub fn cells_equal(a: &Cell, b: &Cell) -> bool {
    a == b
}
