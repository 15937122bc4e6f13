//! Constants shared by every particle in the simulation
//!
//! Units are screen pixels and simulation seconds.

/// Display and interaction radius of a particle.
/// Does not enter the force law, only picking and the wall inset.
pub const RADIUS: f64 = 7.0;

/// Integration time step
pub const DT: f64 = 0.03;

/// Lower bound on the pair distance to prevent singularities at r→0
pub const MIN_DISTANCE: f64 = 1e-6;
