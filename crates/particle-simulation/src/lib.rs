//! # Particle Simulation Engine
//!
//! Runs the 2D particle system on a dedicated thread. Callers push interaction
//! messages through a non-blocking channel and read published frames from a
//! double-buffered store.

pub mod channel;
pub mod error;
pub mod handler;
pub mod input;
pub mod message;
pub mod params;
pub mod simulation;
pub mod store;

pub use channel::*;
pub use error::{Error, Result};
pub use handler::*;
pub use input::*;
pub use message::*;
pub use params::*;
pub use simulation::*;
pub use store::*;
