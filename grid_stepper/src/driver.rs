// driver.rs - Driving loop: single-step and continuous-run control over a stepper
//
// Each frame reads the current index, runs compute (current into next),
// renders the frame's input buffer, then advances. Frames never overlap.

use std::time::{Duration, Instant};

use log::{error, info};

use crate::compute::ComputeStep;
use crate::error::FrameError;
use crate::render::RenderStep;
use crate::stepper::GridStepper;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopMode {
    Stopped,
    Running,
}

/// Loop state owned by whoever drives the stepper.
#[derive(Debug)]
pub struct FrameDriver {
    mode: LoopMode,
    last_update: Instant,
    update_interval: Duration,
}

impl FrameDriver {
    pub fn new(update_interval: Duration) -> Self {
        Self {
            mode: LoopMode::Stopped,
            last_update: Instant::now(),
            update_interval,
        }
    }

    pub fn mode(&self) -> LoopMode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.mode == LoopMode::Running
    }

    pub fn interval(&self) -> Duration {
        self.update_interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.update_interval = interval;
    }

    /// Starts continuous running; the first frame is due one interval from `now`.
    pub fn start(&mut self, now: Instant) {
        if self.mode == LoopMode::Stopped {
            info!("Starting loop");
            self.mode = LoopMode::Running;
            self.last_update = now;
        }
    }

    pub fn stop(&mut self) {
        if self.mode == LoopMode::Running {
            info!("Ended loop");
            self.mode = LoopMode::Stopped;
        }
    }

    pub fn toggle(&mut self, now: Instant) -> LoopMode {
        match self.mode {
            LoopMode::Stopped => self.start(now),
            LoopMode::Running => self.stop(),
        }
        self.mode
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.is_running() && now.saturating_duration_since(self.last_update) >= self.update_interval
    }

    /// Time left until the next frame is due, or `None` when stopped.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        if !self.is_running() {
            return None;
        }
        let elapsed = now.saturating_duration_since(self.last_update);
        Some(self.update_interval.saturating_sub(elapsed))
    }

    /// Runs one frame and returns the step index it drew.
    ///
    /// A failing collaborator stops the loop and leaves the step counter
    /// where it was.
    pub fn next_frame<C, R>(&mut self, stepper: &mut GridStepper, compute: &mut C, render: &mut R) -> Result<u64, FrameError>
    where
        C: ComputeStep + ?Sized,
        R: RenderStep + ?Sized,
    {
        let step = stepper.step_count();
        let (current, next) = stepper.split_mut();

        let result = compute
            .compute(current, next, step)
            .map_err(FrameError::from)
            .and_then(|()| render.render(current, step).map_err(FrameError::from));

        if let Err(e) = result {
            error!("Frame {} failed: {}", step, e);
            self.stop();
            return Err(e);
        }

        stepper.advance();
        info!("Drew new step ({})", step);
        Ok(step)
    }

    /// Runs a frame if the loop is running and one is due.
    pub fn tick<C, R>(&mut self, now: Instant, stepper: &mut GridStepper, compute: &mut C, render: &mut R) -> Result<Option<u64>, FrameError>
    where
        C: ComputeStep + ?Sized,
        R: RenderStep + ?Sized,
    {
        if !self.is_due(now) {
            return Ok(None);
        }
        self.last_update = now;
        self.next_frame(stepper, compute, render).map(Some)
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ComputeError, RenderError};
    use crate::grid::{CellGrid, DEAD};
    use crate::seed;

    struct CopyCompute;

    impl ComputeStep for CopyCompute {
        fn compute(&mut self, current: &CellGrid, next: &mut CellGrid, _step: u64) -> Result<(), ComputeError> {
            for row in 0..current.height() {
                next.row_mut(row).copy_from_slice(current.row(row));
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordRender {
        frames: Vec<u64>,
    }

    impl RenderStep for RecordRender {
        fn render(&mut self, _buffer: &CellGrid, step: u64) -> Result<(), RenderError> {
            self.frames.push(step);
            Ok(())
        }
    }

    struct FailingCompute;

    impl ComputeStep for FailingCompute {
        fn compute(&mut self, current: &CellGrid, next: &mut CellGrid, _step: u64) -> Result<(), ComputeError> {
            Err(ComputeError::DimensionMismatch {
                current: (current.width(), current.height()),
                next: (next.width(), next.height()),
            })
        }
    }

    struct BrokenRender;

    impl RenderStep for BrokenRender {
        fn render(&mut self, _buffer: &CellGrid, _step: u64) -> Result<(), RenderError> {
            Err(RenderError::Unavailable("no surface".into()))
        }
    }

    #[test]
    fn test_toggle_lifecycle() {
        let now = Instant::now();
        let mut driver = FrameDriver::default();
        assert_eq!(driver.mode(), LoopMode::Stopped);
        assert_eq!(driver.toggle(now), LoopMode::Running);
        assert_eq!(driver.toggle(now), LoopMode::Stopped);
    }

    #[test]
    fn test_is_due_after_interval() {
        let now = Instant::now();
        let mut driver = FrameDriver::new(Duration::from_millis(500));
        assert!(!driver.is_due(now + Duration::from_secs(5)));
        assert_eq!(driver.time_until_due(now), None);

        driver.start(now);
        assert!(!driver.is_due(now + Duration::from_millis(499)));
        assert!(driver.is_due(now + Duration::from_millis(500)));
        assert_eq!(
            driver.time_until_due(now + Duration::from_millis(200)),
            Some(Duration::from_millis(300))
        );
    }

    #[test]
    fn test_next_frame_renders_then_advances() {
        let mut stepper = GridStepper::initialize(4, 4, seed::constant(DEAD)).unwrap();
        let mut driver = FrameDriver::default();
        let mut render = RecordRender::default();

        assert_eq!(driver.next_frame(&mut stepper, &mut CopyCompute, &mut render).unwrap(), 0);
        assert_eq!(driver.next_frame(&mut stepper, &mut CopyCompute, &mut render).unwrap(), 1);
        assert_eq!(render.frames, vec![0, 1]);
        assert_eq!(stepper.step_count(), 2);
        assert_eq!(stepper.current_index(), 0);
    }

    #[test]
    fn test_failed_frame_stops_loop_without_advancing() {
        let now = Instant::now();
        let mut stepper = GridStepper::initialize(4, 4, seed::constant(DEAD)).unwrap();
        let mut driver = FrameDriver::new(Duration::from_millis(10));
        driver.start(now);

        let result = driver.tick(now + Duration::from_millis(10), &mut stepper, &mut CopyCompute, &mut BrokenRender);
        assert!(matches!(result, Err(FrameError::Render(_))));
        assert_eq!(stepper.step_count(), 0);
        assert!(!driver.is_running());
    }

    #[test]
    fn test_failed_compute_skips_render_and_stops_loop() {
        let now = Instant::now();
        let mut stepper = GridStepper::initialize(4, 4, seed::constant(DEAD)).unwrap();
        let mut driver = FrameDriver::new(Duration::from_millis(10));
        let mut render = RecordRender::default();
        driver.start(now);

        let result = driver.tick(now + Duration::from_millis(10), &mut stepper, &mut FailingCompute, &mut render);
        assert!(matches!(result, Err(FrameError::Compute(_))));
        assert_eq!(stepper.step_count(), 0);
        assert_eq!(stepper.current_index(), 0);
        assert!(!driver.is_running());
        assert!(render.frames.is_empty());

        // Manual frames fail the same way
        let result = driver.next_frame(&mut stepper, &mut FailingCompute, &mut render);
        assert!(matches!(result, Err(FrameError::Compute(_))));
        assert_eq!(stepper.step_count(), 0);
        assert!(render.frames.is_empty());
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let now = Instant::now();
        let mut stepper = GridStepper::initialize(2, 2, seed::constant(DEAD)).unwrap();
        let mut driver = FrameDriver::new(Duration::from_millis(100));
        let mut render = RecordRender::default();

        // Stopped: nothing happens
        assert_eq!(driver.tick(now, &mut stepper, &mut CopyCompute, &mut render).unwrap(), None);

        driver.start(now);
        assert_eq!(driver.tick(now + Duration::from_millis(50), &mut stepper, &mut CopyCompute, &mut render).unwrap(), None);
        assert_eq!(driver.tick(now + Duration::from_millis(100), &mut stepper, &mut CopyCompute, &mut render).unwrap(), Some(0));
        assert_eq!(driver.tick(now + Duration::from_millis(150), &mut stepper, &mut CopyCompute, &mut render).unwrap(), None);
        assert_eq!(driver.tick(now + Duration::from_millis(200), &mut stepper, &mut CopyCompute, &mut render).unwrap(), Some(1));
        assert_eq!(stepper.step_count(), 2);
    }
}
