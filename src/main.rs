//! Interacting Particle Simulation
//!
//! Headless driver: runs the simulation thread, replays a short pointer gesture
//! through the input translator and logs a summary of published frames.

use anyhow::Context;
use clap::Parser;
use glam::DVec2;
use particle_physics::{centroid, kinetic_energy};
use particle_simulation::{
    InputEvent, InputTranslator, ParticleSimulation, PointerButton, SimulationParams,
    DEFAULT_PARTICLE_COUNT,
};
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "nbody", about = "Run the particle simulation without a window")]
struct Args {
    /// Domain width
    #[arg(long, default_value_t = 640.0)]
    width: f64,

    /// Domain height
    #[arg(long, default_value_t = 480.0)]
    height: f64,

    /// Initial particle count
    #[arg(short = 'n', long, default_value_t = DEFAULT_PARTICLE_COUNT)]
    particles: usize,

    /// Seed for the initial placement
    #[arg(long)]
    seed: Option<u64>,

    /// Integration time step
    #[arg(long, default_value_t = particle_physics::DT)]
    dt: f64,

    /// How long to run
    #[arg(long, default_value_t = 2000)]
    duration_ms: u64,

    /// Interval between frame reports
    #[arg(long, default_value_t = 250)]
    report_ms: u64,
}

/// Replay the events a window would produce for a short interaction session
fn play_gesture(sim: &ParticleSimulation, input: &mut InputTranslator, width: f64, height: f64) {
    let centre = DVec2::new(width, height) * 0.5;
    let grab = sim
        .read()
        .first()
        .map(|p| p.pos())
        .unwrap_or(centre);

    let mut events = vec![
        InputEvent::Resized {
            width: width as i32,
            height: height as i32,
        },
        InputEvent::Released {
            button: PointerButton::Secondary,
            x: centre.x as i32,
            y: centre.y as i32,
        },
        InputEvent::Pressed {
            button: PointerButton::Primary,
            x: grab.x.round() as i32,
            y: grab.y.round() as i32,
        },
    ];
    for step in 1..=8 {
        let p = grab.lerp(centre, step as f64 / 10.0);
        events.push(InputEvent::Moved {
            x: p.x as i32,
            y: p.y as i32,
        });
    }
    let end = grab.lerp(centre, 0.9);
    events.push(InputEvent::Released {
        button: PointerButton::Primary,
        x: end.x as i32,
        y: end.y as i32,
    });

    for event in events {
        if let Some(message) = input.translate(event) {
            log::debug!("input {:?} -> {:?}", event, message.kind);
            sim.push(message);
        }
    }
}

fn report(sim: &ParticleSimulation) {
    let frame = sim.snapshot();
    let energy = kinetic_energy(&frame);
    match centroid(&frame) {
        Some(c) => log::info!(
            "frame {:>6}: {:>3} particles, kinetic energy {:.4}, centroid ({:.1}, {:.1})",
            sim.frame(),
            frame.len(),
            energy,
            c.x,
            c.y
        ),
        None => log::info!("frame {:>6}: no particles", sim.frame()),
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Starting particle simulation...");

    let mut params = SimulationParams::default().with_dt(args.dt);
    if let Some(seed) = args.seed {
        params = params.with_seed(seed);
    }

    let mut sim = ParticleSimulation::with_params(args.particles, params);
    sim.start(args.width, args.height)
        .context("failed to start simulation")?;

    let mut input = InputTranslator::new();
    play_gesture(&sim, &mut input, args.width, args.height);

    let run_for = Duration::from_millis(args.duration_ms);
    let report_every = Duration::from_millis(args.report_ms.max(1));
    let started = Instant::now();
    while started.elapsed() < run_for {
        std::thread::sleep(report_every.min(run_for.saturating_sub(started.elapsed())));
        report(&sim);
    }

    sim.finish().context("failed to stop simulation")?;
    log::info!("✓ Simulation finished after {} frames", sim.frame());

    Ok(())
}
