//! # Particle Physics
//!
//! Particle records, the pairwise force law, wall reflection and picking for a
//! small 2D interacting-particle system. Pure functions only, no threads.

pub mod constants;
pub mod forces;
pub mod particle;
pub mod picking;

pub use constants::*;
pub use forces::*;
pub use particle::*;
pub use picking::*;
