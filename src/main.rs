//! Gap Runner entry point
//!
//! Headless driver: runs the simulation from a fixed tick source, with the
//! autopilot (or a scripted jump cadence) standing in for player input, and
//! optionally prints frames to the terminal.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;

use gap_runner::Settings;
use gap_runner::platform::TickClock;
use gap_runner::render::{self, AsciiCanvas};
use gap_runner::sim::{GameEvent, GameSession, TickInput, tick};

#[derive(Parser, Debug)]
#[command(about = "Run a Gap Runner session headless or in the terminal", version)]
struct Args {
    /// JSON settings file (missing fields use defaults)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Run seed for gap placement (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,
    /// Number of ticks to simulate
    #[arg(long, default_value_t = 3000)]
    ticks: u64,
    /// Pace ticks at the configured interval instead of running flat out
    #[arg(long)]
    realtime: bool,
    /// Jump every N ticks instead of using the autopilot
    #[arg(long)]
    jump_every: Option<u64>,
    /// Print a terminal frame every N ticks (0 disables)
    #[arg(long, default_value_t = 0)]
    render_every: u64,
    /// Terminal frame size in cells
    #[arg(long, default_value_t = 80)]
    cols: usize,
    #[arg(long, default_value_t = 30)]
    rows: usize,
    /// Print the default settings as JSON and exit
    #[arg(long)]
    dump_settings: bool,
}

/// Per-run results gathered from session events
#[derive(Debug, Default)]
struct Tally {
    runs: u32,
    jumps: u64,
}

impl Tally {
    fn record(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Jumped => self.jumps += 1,
            GameEvent::RunOver { score, cause, run_ticks } => {
                self.runs += 1;
                println!("Game Over! Score: {score} ({cause:?} after {run_ticks} ticks)");
            }
            _ => {}
        }
    }
}

struct Driver {
    session: GameSession,
    canvas: AsciiCanvas,
    args: Args,
    tally: Tally,
}

impl Driver {
    fn new(args: Args) -> Result<Self> {
        let settings = match &args.config {
            Some(path) => Settings::load(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => Settings::default(),
        };
        let seed = args.seed.unwrap_or_else(time_seed);
        let canvas = AsciiCanvas::new(
            args.cols,
            args.rows,
            settings.playfield_width,
            settings.playfield_height,
        );
        let session = GameSession::with_seed(settings, seed).context("invalid settings")?;
        Ok(Self {
            session,
            canvas,
            args,
            tally: Tally::default(),
        })
    }

    fn input_for(&self, tick_index: u64) -> TickInput {
        match self.args.jump_every {
            Some(n) if n > 0 => TickInput {
                jump: tick_index % n == 0,
                idle_mode: false,
            },
            _ => TickInput {
                jump: false,
                idle_mode: true,
            },
        }
    }

    fn step(&mut self, tick_index: u64) {
        let input = self.input_for(tick_index);
        let tally = &mut self.tally;
        tick(&mut self.session, &input, |event| tally.record(&event));

        let every = self.args.render_every;
        if every > 0 && tick_index % every == 0 {
            self.canvas.clear();
            render::draw(&self.session, &mut self.canvas);
            println!("tick {tick_index}\n{}", self.canvas.render());
        }
    }

    fn run_headless(&mut self) {
        for i in 0..self.args.ticks {
            self.step(i);
        }
    }

    fn run_realtime(&mut self) {
        let mut clock = TickClock::new(self.session.settings().tick_interval());
        let mut last = Instant::now();
        let mut done = 0;
        while done < self.args.ticks {
            let now = Instant::now();
            let due = clock.advance(now - last);
            last = now;
            for _ in 0..due {
                if done >= self.args.ticks {
                    break;
                }
                self.step(done);
                done += 1;
            }
            std::thread::sleep(clock.until_next().max(Duration::from_millis(1)));
        }
    }

    fn summary(&self) {
        log::info!(
            "{} ticks, {} runs ended, {} jumps",
            self.session.time_ticks(),
            self.tally.runs,
            self.tally.jumps
        );
        println!(
            "Current score: {}  Best: {}",
            self.session.score(),
            self.session.best_score()
        );
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.dump_settings {
        println!("{}", Settings::default().to_json_pretty()?);
        return Ok(());
    }

    log::info!("Gap Runner starting...");
    let realtime = args.realtime;
    let mut driver = Driver::new(args)?;
    if realtime {
        driver.run_realtime();
    } else {
        driver.run_headless();
    }
    driver.summary();
    Ok(())
}
