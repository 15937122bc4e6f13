//! Pairwise force law and the explicit integration pass
//!
//! Brute-force O(n²): every non-dragged particle feels every other non-dragged particle.

use crate::constants::*;
use crate::particle::Particle;
use glam::DVec2;

/// Rectangular domain `[0, width] x [0, height]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether a particle disc fits inside on both axes
    pub fn fits_radius(&self) -> bool {
        self.width > RADIUS && self.height > RADIUS
    }
}

/// Acceleration on a particle at `from` caused by a particle at `to`
/// a = d/r² - d/r³ with d = to - from, so |a| = 1/r - 1/r²
///
/// Repulsive for r < 1, attractive for r > 1. There is no long-range cutoff.
pub fn pair_acceleration(from: DVec2, to: DVec2) -> DVec2 {
    let d = to - from;
    let r = d.length().max(MIN_DISTANCE);

    d / (r * r) - d / (r * r * r)
}

/// Net acceleration on particle `i` from all others, skipping the dragged one
pub fn net_acceleration(particles: &[Particle], i: usize, dragged: Option<usize>) -> DVec2 {
    let from = particles[i].pos();
    let mut acc = DVec2::ZERO;

    for (j, other) in particles.iter().enumerate() {
        if Some(j) == dragged || j == i {
            continue;
        }
        acc += pair_acceleration(from, other.pos());
    }

    acc
}

/// Reflect one axis against `[lo, hi]`.
/// The velocity flips when the unclamped position is outside, then the position is clamped.
/// Uses max/min rather than `f64::clamp` so an inverted range (domain thinner than
/// two radii) pins to `hi` instead of panicking.
pub fn reflect_axis(position: f64, velocity: f64, lo: f64, hi: f64) -> (f64, f64) {
    let velocity = if position < lo || position > hi {
        -velocity
    } else {
        velocity
    };

    (position.max(lo).min(hi), velocity)
}

/// Advance one particle by a semi-implicit step.
/// Position moves with the old velocity, velocity picks up `dt * acc`.
pub fn step_particle(p: &Particle, acc: DVec2, bounds: Bounds, dt: f64) -> Particle {
    let pos = p.pos() + dt * p.vel();
    let vel = p.vel() + dt * acc;

    let (x, vx) = reflect_axis(pos.x, vel.x, RADIUS, bounds.width - RADIUS);
    let (y, vy) = reflect_axis(pos.y, vel.y, RADIUS, bounds.height - RADIUS);

    Particle::new(DVec2::new(x, y), DVec2::new(vx, vy))
}

/// Integrate every particle of `read` into `write`.
///
/// `read` is never mutated, so the result does not depend on iteration order.
/// The dragged particle keeps its position and gets zero velocity.
pub fn integrate(
    read: &[Particle],
    write: &mut [Particle],
    dragged: Option<usize>,
    bounds: Bounds,
    dt: f64,
) {
    debug_assert_eq!(read.len(), write.len());

    for (i, (current, next)) in read.iter().zip(write.iter_mut()).enumerate() {
        *next = if Some(i) == dragged {
            Particle::at_rest(current.pos())
        } else {
            let acc = net_acceleration(read, i, dragged);
            step_particle(current, acc, bounds, dt)
        };
    }
}
