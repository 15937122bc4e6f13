//! Particle record and small diagnostics over particle sets

use bytemuck::{Pod, Zeroable};
use glam::DVec2;

/// Point particle in the 2D domain.
/// Plain data so whole buffers can be copied or cast to bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Particle {
    /// Position (x, y)
    pub position: [f64; 2],
    /// Velocity (vx, vy)
    pub velocity: [f64; 2],
}

impl Particle {
    pub fn new(position: DVec2, velocity: DVec2) -> Self {
        Self {
            position: position.to_array(),
            velocity: velocity.to_array(),
        }
    }

    /// Create a particle at rest
    pub fn at_rest(position: DVec2) -> Self {
        Self::new(position, DVec2::ZERO)
    }

    pub fn pos(&self) -> DVec2 {
        DVec2::from_array(self.position)
    }

    pub fn vel(&self) -> DVec2 {
        DVec2::from_array(self.velocity)
    }
}

/// Total kinetic energy with unit mass per particle
pub fn kinetic_energy(particles: &[Particle]) -> f64 {
    particles
        .iter()
        .map(|p| 0.5 * p.vel().length_squared())
        .sum()
}

/// Mean position, `None` for an empty set
pub fn centroid(particles: &[Particle]) -> Option<DVec2> {
    if particles.is_empty() {
        return None;
    }
    let sum: DVec2 = particles.iter().map(Particle::pos).sum();
    Some(sum / particles.len() as f64)
}
