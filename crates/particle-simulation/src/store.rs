//! Double-buffered particle storage
//!
//! The read side lives in a shared `ParticleStore` behind an `RwLock`; the write side is
//! a plain `Vec` owned by the simulation loop. Publishing swaps the two `Vec` headers
//! under the exclusive lock, so a reader sees either the whole old frame or the whole
//! new one and particle contents are never copied on swap.
//!
//! Only the loop can swap: callers get `read`, `snapshot`, `len` and `frame`.
//! While integrating, the loop holds a shared guard on the read side. That guard never
//! excludes readers; the exclusive lock is taken only for the swap itself.

use particle_physics::Particle;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

/// Externally visible (read) half of the double buffer
///
/// The read side cannot be replaced from outside the crate:
///
/// ```compile_fail
/// use particle_simulation::ParticleSimulation;
///
/// let sim = ParticleSimulation::new(2);
/// sim.store().swap(&mut Vec::new());
/// ```
#[derive(Debug, Default)]
pub struct ParticleStore {
    read: RwLock<Vec<Particle>>,
    frames: AtomicU64,
}

impl ParticleStore {
    pub fn new(particles: Vec<Particle>) -> Self {
        Self {
            read: RwLock::new(particles),
            frames: AtomicU64::new(0),
        }
    }

    /// Shared guard over the current read sequence.
    /// Hold it only while iterating; `swap` waits for every outstanding guard.
    pub fn read(&self) -> RwLockReadGuard<'_, Vec<Particle>> {
        // Particle data is plain values, a panicking reader cannot leave it half-written
        self.read.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Owned copy of the current read sequence
    pub fn snapshot(&self) -> Vec<Particle> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Number of frames published so far
    pub fn frame(&self) -> u64 {
        self.frames.load(Ordering::Acquire)
    }

    /// Exchange `write` with the read sequence and count the frame.
    /// Only the simulation loop calls this.
    pub(crate) fn swap(&self, write: &mut Vec<Particle>) {
        let mut guard = self.read.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::swap(&mut *guard, write);
        self.frames.fetch_add(1, Ordering::Release);
    }

    /// Install the initial particle set without counting a frame
    pub(crate) fn replace(&self, particles: Vec<Particle>) -> Vec<Particle> {
        let mut guard = self.read.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, particles)
    }
}

/// Both halves as seen from the simulation loop
#[derive(Debug)]
pub(crate) struct DoubleBuffer {
    shared: Arc<ParticleStore>,
    write: Vec<Particle>,
}

impl DoubleBuffer {
    pub fn new(shared: Arc<ParticleStore>, write: Vec<Particle>) -> Self {
        Self { shared, write }
    }

    /// Resize the write side to the read side's length.
    /// Absorbs additions and removals made by the previous iteration.
    pub fn prepare(&mut self) {
        let len = self.shared.len();
        self.write.resize(len, Particle::default());
    }

    /// Run `f` with the read sequence and the write sequence.
    /// Holds a shared guard for the duration of `f`; readers are not blocked by it.
    pub fn compute<R>(&mut self, f: impl FnOnce(&[Particle], &mut [Particle]) -> R) -> R {
        let read = self.shared.read();
        f(read.as_slice(), self.write.as_mut_slice())
    }

    pub fn write_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.write
    }

    #[cfg(test)]
    pub fn write(&self) -> &[Particle] {
        &self.write
    }

    pub fn shared(&self) -> &Arc<ParticleStore> {
        &self.shared
    }

    /// Make the write side the new read side
    pub fn publish(&mut self) {
        self.shared.swap(&mut self.write);
    }
}
