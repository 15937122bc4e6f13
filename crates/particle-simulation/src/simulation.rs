//! Simulation loop and the caller-facing handle
//!
//! The loop runs on its own thread and is the sole owner of the write buffer, the
//! domain bounds and the drag selection. Callers only read published frames and push
//! messages.

use crate::channel::{channel, MessageReceiver, MessageSender};
use crate::error::{Error, Result};
use crate::handler::{Flow, InteractionState};
use crate::message::Message;
use crate::params::{SimulationParams, DEFAULT_PARTICLE_COUNT};
use crate::store::{DoubleBuffer, ParticleStore};
use glam::DVec2;
use particle_physics::{integrate, Bounds, Particle, RADIUS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, RwLockReadGuard};
use std::thread::JoinHandle;

/// Place `count` resting particles uniformly in the domain, inset by one radius
pub fn scatter_particles(count: usize, bounds: Bounds, rng: &mut impl Rng) -> Vec<Particle> {
    let lo = DVec2::splat(RADIUS);
    let span = DVec2::new(bounds.width, bounds.height) - 2.0 * lo;

    (0..count)
        .map(|_| {
            let t = DVec2::new(rng.random::<f64>(), rng.random::<f64>());
            Particle::at_rest(lo + t * span)
        })
        .collect()
}

/// One iteration at a time view of the simulation thread's work
#[derive(Debug)]
pub struct SimulationLoop {
    buffers: DoubleBuffer,
    state: InteractionState,
    inbox: MessageReceiver,
    params: SimulationParams,
}

impl SimulationLoop {
    pub(crate) fn new(
        store: Arc<ParticleStore>,
        inbox: MessageReceiver,
        bounds: Bounds,
        params: SimulationParams,
    ) -> Self {
        let len = store.len();
        Self {
            buffers: DoubleBuffer::new(store, vec![Particle::default(); len]),
            state: InteractionState::new(bounds),
            inbox,
            params,
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Resize, integrate, apply messages, publish.
    /// On `Flow::Stop` the frame computed in this tick is not published.
    pub fn tick(&mut self) -> Flow {
        self.buffers.prepare();

        let dragged = self.state.dragged;
        let bounds = self.state.bounds;
        let dt = self.params.dt;
        self.buffers
            .compute(|read, write| integrate(read, write, dragged, bounds, dt));

        if self.state.drain(&self.inbox, self.buffers.write_mut()) == Flow::Stop {
            return Flow::Stop;
        }

        self.buffers.publish();
        Flow::Continue
    }

    /// Tick until stopped, idling between iterations
    pub fn run(mut self) {
        log::info!(
            "Simulation loop running with {} particles in {}x{}",
            self.buffers.shared().len(),
            self.state.bounds.width,
            self.state.bounds.height
        );

        while self.tick() == Flow::Continue {
            std::thread::sleep(self.params.idle);
        }

        log::info!(
            "Simulation loop stopped after {} frames",
            self.buffers.shared().frame()
        );
    }
}

/// Handle owned by the caller thread
pub struct ParticleSimulation {
    store: Arc<ParticleStore>,
    sender: MessageSender,
    inbox: Option<MessageReceiver>,
    params: SimulationParams,
    particle_count: usize,
    worker: Option<JoinHandle<()>>,
}

impl Default for ParticleSimulation {
    fn default() -> Self {
        Self::new(DEFAULT_PARTICLE_COUNT)
    }
}

impl ParticleSimulation {
    pub fn new(particle_count: usize) -> Self {
        Self::with_params(particle_count, SimulationParams::default())
    }

    pub fn with_params(particle_count: usize, params: SimulationParams) -> Self {
        let (sender, inbox) = channel();
        Self {
            store: Arc::new(ParticleStore::default()),
            sender,
            inbox: Some(inbox),
            params,
            particle_count,
            worker: None,
        }
    }

    /// Scatter the particles and spawn the simulation thread.
    ///
    /// Both dimensions must exceed the particle radius. A simulation can only be started once.
    pub fn start(&mut self, width: f64, height: f64) -> Result<()> {
        let bounds = Bounds::new(width, height);
        if !bounds.fits_radius() {
            return Err(Error::InvalidDomain { width, height });
        }
        let inbox = self.inbox.take().ok_or(Error::AlreadyStarted)?;

        let mut rng: StdRng = match self.params.seed {
            Some(seed) => SeedableRng::seed_from_u64(seed),
            None => SeedableRng::seed_from_u64(rand::rng().random()),
        };
        self.store
            .replace(scatter_particles(self.particle_count, bounds, &mut rng));

        let sim = SimulationLoop::new(self.store.clone(), inbox, bounds, self.params);
        let worker = std::thread::Builder::new()
            .name("simulation".into())
            .spawn(move || sim.run())?;
        self.worker = Some(worker);

        log::info!("✓ Simulation started");
        Ok(())
    }

    /// Send `Stop` and wait for the simulation thread to exit
    pub fn finish(&mut self) -> Result<()> {
        let worker = self.worker.take().ok_or(Error::NotRunning)?;
        self.sender.push(Message::stop());
        worker.join().map_err(|_| Error::WorkerPanicked)
    }

    /// Whether the simulation thread is still alive.
    /// Turns false once the loop exits, including after a `Stop` sent through `push`.
    pub fn is_running(&self) -> bool {
        self.worker.as_ref().is_some_and(|w| !w.is_finished())
    }

    /// Queue an interaction message; never blocks
    pub fn push(&self, message: Message) {
        self.sender.push(message);
    }

    /// Producer handle for a dedicated input thread.
    /// FIFO holds per producer; use a single producer thread.
    pub fn sender(&self) -> MessageSender {
        self.sender.clone()
    }

    /// Guard over the latest published frame, see `ParticleStore::read`
    pub fn read(&self) -> RwLockReadGuard<'_, Vec<Particle>> {
        self.store.read()
    }

    pub fn snapshot(&self) -> Vec<Particle> {
        self.store.snapshot()
    }

    pub fn frame(&self) -> u64 {
        self.store.frame()
    }

    /// Shared read side, for reader threads
    pub fn store(&self) -> Arc<ParticleStore> {
        self.store.clone()
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }
}

impl Drop for ParticleSimulation {
    fn drop(&mut self) {
        if self.worker.is_some() {
            if let Err(e) = self.finish() {
                log::error!("Simulation shutdown failed: {e}");
            }
        }
    }
}
