// lib.rs - Double-buffered cellular automaton stepping
//
// GridStepper owns two cell buffers and a step counter; `step % 2` picks the
// buffer read by the next step, the other one is written. Cell updates and
// drawing are left to ComputeStep and RenderStep collaborators, sequenced by
// a FrameDriver.

pub mod compute;
pub mod config;
pub mod driver;
pub mod error;
pub mod grid;
pub mod render;
pub mod seed;
pub mod stepper;

pub use compute::{ComputeStep, LifeCompute};
pub use config::StepperConfig;
pub use driver::{FrameDriver, LoopMode};
pub use error::{ComputeError, ConfigError, FrameError, RenderError, StepperError};
pub use grid::{ALIVE, CellGrid, CellState, DEAD, GRID_SIZE};
pub use render::{RenderStep, TextRender};
pub use seed::SeedFn;
pub use stepper::GridStepper;
