//! Wraproids entry point
//!
//! Runs a headless session: fixed-tick simulation driven by a wall-clock
//! accumulator, render cadence bounded by the frame governor, telemetry on
//! its own cadence, and a scripted pilot so an unattended session produces
//! observable activity.

use std::time::{Duration, Instant};

use wraproids::consts::{MAX_SUBSTEPS, SIM_DT};
use wraproids::render::{FrameSnapshot, NullRenderer, RenderSink};
use wraproids::sim::{ControlInput, Schedule, World, tick};
use wraproids::telemetry::{LogTelemetry, Telemetry, TelemetrySink};
use wraproids::{FrameGovernor, SimConfig};

struct Args {
    config: Option<String>,
    seed: Option<u64>,
    /// Stop after this many base ticks; None runs until interrupted
    ticks: Option<u64>,
}

fn parse_args() -> Args {
    let mut args = Args {
        config: None,
        seed: None,
        ticks: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--config" => args.config = iter.next(),
            "--seed" => args.seed = iter.next().and_then(|v| v.parse().ok()),
            "--ticks" => args.ticks = iter.next().and_then(|v| v.parse().ok()),
            other => {
                eprintln!("unknown argument: {other}");
                eprintln!("usage: wraproids [--config FILE] [--seed N] [--ticks N]");
                std::process::exit(2);
            }
        }
    }
    args
}

/// Scripted pilot: slow turn, periodic thrust and fire.
fn demo_pilot(tick: u64, input: &mut ControlInput) {
    if tick % 30 == 0 {
        input.rotate_right = true;
    }
    if tick % 70 == 0 {
        input.thrust = true;
    }
    if tick % 25 == 0 {
        input.fire = true;
    }
}

fn main() {
    env_logger::init();

    let args = parse_args();

    let config = match &args.config {
        Some(path) => match SimConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("invalid configuration: {e}");
                std::process::exit(1);
            }
        },
        None => SimConfig::default(),
    };

    let seed = args.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    let mut world = match World::new(config, seed) {
        Ok(world) => world,
        Err(e) => {
            log::error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    let schedule = Schedule::from_config(&world.config);
    for task in [
        schedule.motion,
        schedule.collision,
        schedule.ship_check,
        schedule.purge,
        schedule.decel,
        schedule.telemetry,
    ] {
        log::info!("task '{}' every {} ticks", task.name, task.every());
    }
    let mut governor = FrameGovernor::new(world.config.fps_cap);
    let mut renderer = NullRenderer::default();
    let mut telemetry = LogTelemetry;

    log::info!("wraproids starting: seed={seed}");

    let start = Instant::now();
    let mut last = start;
    let mut accumulator = 0.0f32;
    let mut input = ControlInput::default();

    loop {
        let now = Instant::now();
        let dt = (now - last).as_secs_f32().min(0.1);
        last = now;
        accumulator += dt;

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            demo_pilot(world.tick + 1, &mut input);
            tick(&mut world, &schedule, &input);
            // Clear one-shot intents after each processed tick
            input = ControlInput::default();
            accumulator -= SIM_DT;
            substeps += 1;

            if schedule.telemetry.due(world.tick) {
                telemetry.publish(&Telemetry::capture(&world));
            }
        }

        for event in world.drain_events() {
            log::debug!("{event:?}");
        }

        let elapsed = now - start;
        if let Err(e) = governor.attempt_frame(elapsed, || {
            renderer.draw(&FrameSnapshot::of(&world))
        }) {
            log::warn!("render error: {e}");
        }

        if let Some(limit) = args.ticks {
            if world.tick >= limit {
                break;
            }
        }

        std::thread::sleep(Duration::from_millis(1));
    }

    let elapsed = start.elapsed();
    log::info!(
        "session over: {} ticks, {} frames, {:.1} fps average, {} ship contacts",
        world.tick,
        governor.total_frames(),
        governor.fps(elapsed),
        world.ship_contacts,
    );
}
