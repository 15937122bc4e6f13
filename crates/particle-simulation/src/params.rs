//! Simulation parameters fixed at construction time

use particle_physics::DT;
use std::time::Duration;

/// Particle count used by `ParticleSimulation::default()`
pub const DEFAULT_PARTICLE_COUNT: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParams {
    /// Integration time step
    pub dt: f64,
    /// Pause between loop iterations. Bounds CPU usage, not needed for correctness.
    pub idle: Duration,
    /// Seed for the initial placement, `None` draws one from the thread RNG
    pub seed: Option<u64>,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            dt: DT,
            idle: Duration::from_millis(1),
            seed: None,
        }
    }
}

impl SimulationParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_idle(mut self, idle: Duration) -> Self {
        self.idle = idle;
        self
    }
}
