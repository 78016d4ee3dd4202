// timeline-snapshot - Render the timeline to a PNG without a browser
//
// Pipeline:
//   1. Load config (defaults, or a JSON file), apply CLI overrides
//   2. Run N frames through the fixed-step scheduler on a recorder
//   3. Replay the last frame onto a CPU raster
//   4. Write PNG
//
// Usage: cargo run --bin timeline-snapshot -- [--width N] [--height N] [--frames N]
//                                             [--config FILE] [--bow] [-o OUT]

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use log::info;

use timeline_engine::driver::{FixedSteps, Scheduler};
use timeline_engine::render::{Raster, Recorder, Rgb};
use timeline_engine::{FrameStats, GrowthPolicy, Timeline, TimelineConfig, TimelineResult};

#[derive(Parser, Debug)]
#[command(name = "timeline-snapshot", about = "Render timeline frames to a PNG")]
struct Args {
    #[arg(long, default_value_t = 1280)]
    width: u32,

    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Frames to simulate before the snapshot; branches grow each frame
    #[arg(long, default_value_t = 3000)]
    frames: usize,

    /// JSON settings file; omitted fields keep defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Curved branches instead of repelled straight ones
    #[arg(long)]
    bow: bool,

    #[arg(short, long, default_value = "timeline.png")]
    out: PathBuf,
}

fn load_config(args: &Args) -> TimelineResult<TimelineConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            TimelineConfig::from_json(&json)?
        }
        None => TimelineConfig::default(),
    };
    if args.bow {
        config.branch.policy = GrowthPolicy::Bow;
    }
    config.validate()?;
    Ok(config)
}

fn run(args: Args) -> TimelineResult<()> {
    let config = load_config(&args)?;
    info!(
        "rendering {} frames at {}x{} ({:?})",
        args.frames, args.width, args.height, config.branch.policy
    );

    let timeline = Timeline::new(config)?;
    let state = Rc::new(RefCell::new((timeline, Recorder::new(args.width, args.height))));
    let last = Rc::new(RefCell::new(FrameStats::default()));

    {
        let state = state.clone();
        let last = last.clone();
        FixedSteps(args.frames).run(Box::new(move || {
            let mut guard = state.borrow_mut();
            let (timeline, recorder) = &mut *guard;
            *last.borrow_mut() = timeline.frame(recorder);
        }))?;
    }

    let guard = state.borrow();
    let (timeline, recorder) = &*guard;
    let stats = *last.borrow();
    info!(
        "clock {:.3}, {} branches drawn, {} skipped",
        timeline.clock(),
        stats.drawn,
        stats.skipped
    );
    for (i, b) in timeline.branches().iter().enumerate() {
        info!(
            "  branch {i}: x={} offset {:.3} rad, length {:.2}",
            b.index(),
            b.angle_offset(),
            b.length()
        );
    }

    let mut raster = Raster::new(args.width, args.height, Rgb::BLACK)?;
    recorder.replay(&mut raster);
    raster.save(&args.out)?;

    println!("Wrote {}", args.out.display());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("timeline-snapshot: {e}");
        std::process::exit(1);
    }
}
