//! Point queries against a particle set

use crate::constants::RADIUS;
use crate::particle::Particle;
use glam::DVec2;

/// Index of the first particle (by index, not by distance) whose centre lies
/// within `RADIUS` of `point`.
pub fn find_particle(particles: &[Particle], point: DVec2) -> Option<usize> {
    particles
        .iter()
        .position(|p| p.pos().distance(point) <= RADIUS)
}
