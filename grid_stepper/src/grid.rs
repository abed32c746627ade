// grid.rs - Cell grid storage shared by both halves of the buffer pair

use std::fmt;

/// Default edge length of the simulated square grid.
pub const GRID_SIZE: usize = 16;

/// Largest cell count a single state buffer may hold (128 MiB of `u32` cells).
pub const MAX_CELLS: usize = (128 * 1024 * 1024) / std::mem::size_of::<CellState>();

pub type CellState = u32;

pub const DEAD: CellState = 0;
pub const ALIVE: CellState = 1;

/// A fixed-size 2D grid of cells, stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct CellGrid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl CellGrid {
    /// Allocates a grid with every cell dead. Callers validate dimensions first.
    pub fn zeroed(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![DEAD; width * height],
        }
    }

    /// Overwrites every cell from `seed(row, col)`.
    pub(crate) fn fill_with<F>(&mut self, seed: F)
    where
        F: Fn(usize, usize) -> CellState,
    {
        for row in 0..self.height {
            for col in 0..self.width {
                let idx = row * self.width + col;
                self.cells[idx] = seed(row, col);
            }
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Cell state at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<CellState> {
        if row < self.height && col < self.width {
            Some(self.cells[self.index_of(row, col)])
        } else {
            None
        }
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|c| c != DEAD)
    }

    /// Sets a cell; out-of-bounds coordinates are ignored.
    pub fn set(&mut self, row: usize, col: usize, state: CellState) {
        if row < self.height && col < self.width {
            let idx = self.index_of(row, col);
            self.cells[idx] = state;
        }
    }

    pub fn row(&self, row: usize) -> &[CellState] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [CellState] {
        let start = row * self.width;
        &mut self.cells[start..start + self.width]
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != DEAD).count()
    }

    /// Live neighbours in the Moore neighbourhood, wrapping at the edges.
    pub fn count_neighbors_wrapping(&self, row: usize, col: usize) -> u8 {
        let height = self.height as isize;
        let width = self.width as isize;
        let mut count = 0;
        for dr in -1..=1isize {
            for dc in -1..=1isize {
                // Skip the center cell
                if dr == 0 && dc == 0 {
                    continue;
                }
                let nr = (row as isize + dr).rem_euclid(height) as usize;
                let nc = (col as isize + dc).rem_euclid(width) as usize;
                if self.cells[nr * self.width + nc] != DEAD {
                    count += 1;
                }
            }
        }
        count
    }
}

impl fmt::Debug for CellGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellGrid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("live", &self.live_count())
            .finish()
    }
}
