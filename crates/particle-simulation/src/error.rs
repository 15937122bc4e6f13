//! Error type for the simulation handle

use particle_physics::RADIUS;
use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Recoverable failures of the simulation handle.
///
/// Protocol violations inside the loop are not represented here: they abort the process.
#[derive(Debug, Error)]
pub enum Error {
    /// Startup domain too small to hold a particle.
    #[error(
        "domain {width}x{height} must exceed the particle radius {radius} on both axes",
        radius = RADIUS
    )]
    InvalidDomain { width: f64, height: f64 },

    /// `start` called on a simulation that was already started once.
    #[error("simulation was already started")]
    AlreadyStarted,

    /// `finish` called without a running simulation thread.
    #[error("simulation is not running")]
    NotRunning,

    /// The simulation thread could not be created.
    #[error("failed to spawn simulation thread: {0}")]
    Spawn(#[from] std::io::Error),

    /// The simulation thread panicked before observing `Stop`.
    #[error("simulation thread panicked")]
    WorkerPanicked,
}
