// main.rs - Double-buffered Game of Life demo with step and loop buttons

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use eframe::egui;
use log::info;

use grid_stepper::seed::{self, SeedFn};
use grid_stepper::{FrameDriver, FrameError, GridStepper, LifeCompute, StepperConfig};

mod activity; // On-screen timestamped log
mod renderer; // Render collaborator and grid painting
mod ui;       // eframe::App impl

use activity::ActivityLog;
use renderer::DisplayCache;

#[derive(Parser, Debug)]
#[command(about = "Step a cellular automaton through two alternating buffers")]
struct Args {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid edge length in cells
    #[arg(short = 'n', long)]
    grid_size: Option<usize>,

    /// Milliseconds between frames while looping
    #[arg(short, long)]
    interval_ms: Option<u64>,

    /// Seed for the random start grid
    #[arg(short, long)]
    seed: Option<u64>,

    /// Start from a named pattern (Glider, Blinker, Toad, Beacon, R-pentomino) instead of noise
    #[arg(short, long)]
    pattern: Option<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    info!("Starting with {args:?}");

    let mut config = match &args.config {
        Some(path) => StepperConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => StepperConfig::default(),
    };
    if let Some(n) = args.grid_size {
        config.grid_size = n;
    }
    if let Some(ms) = args.interval_ms {
        config.interval_ms = ms;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate().context("invalid settings")?;

    let seed = start_seed(&config, args.pattern.as_deref())?;
    let app = GridDemo::new(config, seed)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 860.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Grid Stepper",
        options,
        Box::new(|_cc| Box::new(app)),
    )
    .map_err(|e| anyhow!("window failed: {e}"))
}

fn start_seed(config: &StepperConfig, pattern: Option<&str>) -> Result<SeedFn> {
    if let Some(name) = pattern {
        let found = seed::find_pattern(name).with_context(|| format!("unknown pattern {name:?}"))?;
        let middle = config.grid_size / 2;
        let offset = (middle.saturating_sub(2), middle.saturating_sub(2));
        return Ok(seed::pattern(found, offset));
    }
    let value = config.seed.unwrap_or_else(rand::random);
    info!("Random start grid with seed {value}");
    Ok(seed::random(config.alive_probability, value))
}

/// Demo state: the stepper plus everything the driving loop owns.
pub struct GridDemo {
    stepper: GridStepper,
    compute: LifeCompute,
    display: DisplayCache,
    driver: FrameDriver,
    activity: ActivityLog,

    pub live_color: egui::Color32,
    pub clear_color: egui::Color32,
}

impl GridDemo {
    fn new(config: StepperConfig, seed: SeedFn) -> Result<Self> {
        let mut activity = ActivityLog::default();
        activity.push("Demo started");

        let stepper = GridStepper::initialize(config.grid_size, config.grid_size, seed)
            .context("creating grid")?;
        let compute = LifeCompute::new().context("starting compute runtime")?;
        activity.push("Created grid");

        Ok(Self {
            stepper,
            compute,
            display: DisplayCache::default(),
            driver: FrameDriver::new(config.interval()),
            activity,
            live_color: renderer::color_rgb(config.live_color),
            clear_color: renderer::color_rgb(config.clear_color),
        })
    }

    /// Runs one frame now, logging the outcome.
    pub fn next_frame(&mut self) {
        let was_running = self.driver.is_running();
        let result = self.driver.next_frame(&mut self.stepper, &mut self.compute, &mut self.display);
        record_frame(&mut self.activity, result.map(Some), was_running);
    }

    /// Frame on the loop timer, if one is due.
    pub fn tick(&mut self, now: std::time::Instant) {
        let was_running = self.driver.is_running();
        let result = self.driver.tick(now, &mut self.stepper, &mut self.compute, &mut self.display);
        record_frame(&mut self.activity, result, was_running);
    }

    pub fn toggle_loop(&mut self, now: std::time::Instant) {
        match self.driver.toggle(now) {
            grid_stepper::LoopMode::Running => self.activity.push("Starting loop"),
            grid_stepper::LoopMode::Stopped => self.activity.push("Ended loop"),
        }
    }

    pub fn reset(&mut self) {
        self.driver.stop();
        self.stepper.reset();
        self.display.clear();
        self.activity.push("Reset grid");
    }
}

/// Logs a frame outcome. A failed frame stops the driver, so a loop that was
/// running before it gets an "Ended loop" entry too.
fn record_frame(activity: &mut ActivityLog, result: Result<Option<u64>, FrameError>, was_running: bool) {
    match result {
        Ok(Some(step)) => activity.push(format!("Drew new step ({step})")),
        Ok(None) => {}
        Err(e) => {
            activity.push(format!("ERR: {e}"));
            if was_running {
                activity.push("Ended loop");
            }
        }
    }
}
