// stepper.rs - Ping-pong buffer pair and the step counter that selects between them
//
// The stepper never computes cell updates itself. It tracks which of its two
// buffers is "current" (read) and which is "next" (written), and hands out
// exactly that split to the compute collaborator.

use log::{debug, info};

use crate::error::StepperError;
use crate::grid::{CellGrid, MAX_CELLS};
use crate::seed::SeedFn;

/// The two alternating state buffers, A at index 0 and B at index 1.
struct BufferPair {
    buffers: [CellGrid; 2],
}

impl BufferPair {
    fn new(width: usize, height: usize) -> Self {
        Self {
            buffers: [CellGrid::zeroed(width, height), CellGrid::zeroed(width, height)],
        }
    }

    /// Returns (read, write) for the given active index.
    fn split_mut(&mut self, active: usize) -> (&CellGrid, &mut CellGrid) {
        let [a, b] = &mut self.buffers;
        if active == 0 { (&*a, b) } else { (&*b, a) }
    }
}

/// Owns the buffer pair and the step counter.
pub struct GridStepper {
    pair: BufferPair,
    seed: SeedFn,
    step: u64,
}

impl GridStepper {
    /// Allocates both buffers and seeds buffer A with `seed(row, col)`.
    ///
    /// Buffer B is allocated but its contents are unspecified until the first
    /// compute step writes it.
    pub fn initialize(width: usize, height: usize, seed: SeedFn) -> Result<Self, StepperError> {
        let cells = width.checked_mul(height);
        if width == 0 || height == 0 || cells.is_none_or(|n| n > MAX_CELLS) {
            return Err(StepperError::InvalidDimension { width, height });
        }

        let mut pair = BufferPair::new(width, height);
        pair.buffers[0].fill_with(&seed);
        info!(
            "Created grid {}x{} ({} live)",
            width,
            height,
            pair.buffers[0].live_count()
        );

        Ok(Self { pair, seed, step: 0 })
    }

    /// `StepCounter mod 2`: the buffer read as input for the upcoming step.
    pub fn current_index(&self) -> usize {
        (self.step % 2) as usize
    }

    /// Moves to the next step. Buffer contents are untouched.
    pub fn advance(&mut self) {
        self.step += 1;
        debug!("Advanced to step {}", self.step);
    }

    /// Rewinds the counter to zero and re-seeds buffer A.
    ///
    /// Buffer B keeps whatever it held.
    pub fn reset(&mut self) {
        self.step = 0;
        self.pair.buffers[0].fill_with(&self.seed);
        info!("Reset grid ({} live)", self.pair.buffers[0].live_count());
    }

    pub fn step_count(&self) -> u64 {
        self.step
    }

    pub fn width(&self) -> usize {
        self.pair.buffers[0].width()
    }

    pub fn height(&self) -> usize {
        self.pair.buffers[0].height()
    }

    /// The buffer that will be read by the upcoming step.
    pub fn current(&self) -> &CellGrid {
        &self.pair.buffers[self.current_index()]
    }

    pub fn buffer(&self, index: usize) -> Option<&CellGrid> {
        self.pair.buffers.get(index)
    }

    /// (current, next) for the compute collaborator. The only write access
    /// to either buffer.
    pub fn split_mut(&mut self) -> (&CellGrid, &mut CellGrid) {
        let active = self.current_index();
        self.pair.split_mut(active)
    }
}
