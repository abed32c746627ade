// compute.rs - Compute collaborator: next buffer from current buffer

use std::sync::Arc;

use log::{debug, error};

use crate::error::ComputeError;
use crate::grid::{ALIVE, CellGrid, CellState, DEAD};

/// Writes the next generation into `next` from `current`.
///
/// Implementations must overwrite every cell of `next`; the stepper never
/// clears it between steps.
pub trait ComputeStep {
    fn compute(&mut self, current: &CellGrid, next: &mut CellGrid, step: u64) -> Result<(), ComputeError>;
}

/// Conway's rule: birth on 3, survival on 2 or 3.
#[inline]
pub fn life_rule(alive: bool, neighbors: u8) -> CellState {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => ALIVE, // Survival
        (false, 3)            => ALIVE, // Birth
        _                     => DEAD,  // Death or stays dead
    }
}

/// Row coroutine that evaluates one row of the next generation.
async fn process_row(row_index: usize, current: Arc<CellGrid>) -> (usize, Vec<CellState>) {
    let mut row_result = Vec::with_capacity(current.width());
    for col in 0..current.width() {
        let count = current.count_neighbors_wrapping(row_index, col);
        row_result.push(life_rule(current.is_alive(row_index, col), count));

        tokio::task::yield_now().await; // Cooperative yielding
    }
    (row_index, row_result)
}

/// Life on a torus, one tokio task per row.
pub struct LifeCompute {
    runtime: tokio::runtime::Runtime,
}

impl LifeCompute {
    pub fn new() -> Result<Self, ComputeError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .thread_name("life-row")
            .enable_all()
            .build()?;
        Ok(Self { runtime })
    }
}

impl ComputeStep for LifeCompute {
    fn compute(&mut self, current: &CellGrid, next: &mut CellGrid, step: u64) -> Result<(), ComputeError> {
        if current.width() != next.width() || current.height() != next.height() {
            return Err(ComputeError::DimensionMismatch {
                current: (current.width(), current.height()),
                next: (next.width(), next.height()),
            });
        }

        // Row tasks need 'static input
        let snapshot = Arc::new(current.clone());

        self.runtime.block_on(async {
            let mut handles = Vec::with_capacity(snapshot.height());
            for row in 0..snapshot.height() {
                handles.push((row, tokio::spawn(process_row(row, Arc::clone(&snapshot)))));
            }

            for (row, handle) in handles {
                let (row_index, completed_row) = handle.await.map_err(|source| {
                    error!("Row task {} failed at step {}: {}", row, step, source);
                    ComputeError::RowTask { row, source }
                })?;
                next.row_mut(row_index).copy_from_slice(&completed_row);
            }
            Ok::<(), ComputeError>(())
        })?;

        debug!("Computed step {} ({} live)", step, next.live_count());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(width: usize, height: usize, cells: &[(usize, usize)]) -> CellGrid {
        let mut grid = CellGrid::zeroed(width, height);
        for &(r, c) in cells {
            grid.set(r, c, ALIVE);
        }
        grid
    }

    #[test]
    fn test_life_rule() {
        assert_eq!(life_rule(true, 2), ALIVE);
        assert_eq!(life_rule(true, 3), ALIVE);
        assert_eq!(life_rule(true, 4), DEAD);
        assert_eq!(life_rule(true, 1), DEAD);
        assert_eq!(life_rule(false, 3), ALIVE);
        assert_eq!(life_rule(false, 2), DEAD);
    }

    #[test]
    fn test_blinker_flips() {
        let mut compute = LifeCompute::new().unwrap();
        let current = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let mut next = CellGrid::zeroed(5, 5);

        compute.compute(&current, &mut next, 0).unwrap();

        assert_eq!(next.live_count(), 3);
        assert!(next.is_alive(1, 2));
        assert!(next.is_alive(2, 2));
        assert!(next.is_alive(3, 2));
    }

    #[test]
    fn test_next_is_fully_overwritten() {
        let mut compute = LifeCompute::new().unwrap();
        let current = CellGrid::zeroed(4, 4);
        let mut next = grid_with(4, 4, &[(0, 0), (1, 1), (3, 3)]);

        compute.compute(&current, &mut next, 3).unwrap();
        assert_eq!(next.live_count(), 0);
    }

    #[test]
    fn test_dimension_mismatch() {
        let mut compute = LifeCompute::new().unwrap();
        let current = CellGrid::zeroed(4, 4);
        let mut next = CellGrid::zeroed(4, 3);

        let err = compute.compute(&current, &mut next, 0).unwrap_err();
        assert!(matches!(err, ComputeError::DimensionMismatch { .. }));
    }
}
