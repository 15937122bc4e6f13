//! Applies interaction messages to the in-progress write buffer
//!
//! The handler owns the loop-private state that messages can change: the domain
//! bounds and which particle, if any, is being dragged.

use crate::channel::MessageReceiver;
use crate::message::{Message, MessageKind};
use particle_physics::{find_particle, Bounds, Particle};

/// Whether the loop keeps going after a batch of messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    pub bounds: Bounds,
    pub dragged: Option<usize>,
}

impl InteractionState {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            dragged: None,
        }
    }

    /// Apply a single message to `write`
    pub fn apply(&mut self, message: Message, write: &mut Vec<Particle>) -> Flow {
        log::debug!("{:?} at ({}, {})", message.kind, message.x, message.y);

        match message.kind {
            MessageKind::Click => self.toggle(message, write),
            MessageKind::Drag => match find_particle(write, message.point()) {
                Some(i) => self.dragged = Some(i),
                None => log::debug!("drag on empty area ignored"),
            },
            MessageKind::Move => self.snap_dragged(message, write),
            MessageKind::Release => {
                self.snap_dragged(message, write);
                self.dragged = None;
            }
            MessageKind::Resize => {
                self.bounds = Bounds::new(message.x as f64, message.y as f64);
            }
            MessageKind::Stop => return Flow::Stop,
        }

        Flow::Continue
    }

    /// Remove the first particle under the point, or add a resting one there
    fn toggle(&mut self, message: Message, write: &mut Vec<Particle>) {
        let Some(i) = find_particle(write, message.point()) else {
            write.push(Particle::at_rest(message.point()));
            return;
        };

        write.remove(i);
        // Keep the drag pointing at the same particle
        self.dragged = match self.dragged {
            Some(d) if d == i => None,
            Some(d) if d > i => Some(d - 1),
            other => other,
        };
    }

    fn snap_dragged(&self, message: Message, write: &mut [Particle]) {
        if let Some(p) = self.dragged.and_then(|i| write.get_mut(i)) {
            *p = Particle::at_rest(message.point());
        }
    }

    /// Apply every queued message in FIFO order.
    ///
    /// Returns `Flow::Stop` as soon as a stop message is seen; later messages stay queued.
    /// A closed channel means the producer vanished without stopping the loop, which is a
    /// bug in the caller, so the process aborts.
    pub fn drain(&mut self, inbox: &MessageReceiver, write: &mut Vec<Particle>) -> Flow {
        loop {
            match inbox.pop() {
                Ok(Some(message)) => {
                    if self.apply(message, write) == Flow::Stop {
                        return Flow::Stop;
                    }
                }
                Ok(None) => return Flow::Continue,
                Err(e) => {
                    log::error!("{e}");
                    std::process::abort();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::channel;
    use glam::DVec2;

    fn state() -> InteractionState {
        InteractionState::new(Bounds::new(640.0, 480.0))
    }

    fn at(points: &[(f64, f64)]) -> Vec<Particle> {
        points
            .iter()
            .map(|&(x, y)| Particle::at_rest(DVec2::new(x, y)))
            .collect()
    }

    #[test]
    fn test_click_on_empty_area_adds_resting_particle() {
        let mut s = state();
        let mut write = at(&[(10.0, 10.0)]);
        assert_eq!(s.apply(Message::click(100, 50), &mut write), Flow::Continue);

        assert_eq!(write.len(), 2);
        assert_eq!(write[1], Particle::at_rest(DVec2::new(100.0, 50.0)));
    }

    #[test]
    fn test_click_removes_first_match() {
        let mut s = state();
        let mut write = at(&[
            (10.0, 10.0),
            (300.0, 300.0),
            (52.0, 50.0),
            (400.0, 100.0),
            (200.0, 200.0),
            (50.0, 50.0),
        ]);
        s.apply(Message::click(50, 50), &mut write);

        assert_eq!(write.len(), 5);
        // Index 2 went, index 5 shifted down to 4 and survives
        assert_eq!(write[2].position, [400.0, 100.0]);
        assert_eq!(write[4].position, [50.0, 50.0]);
    }

    #[test]
    fn test_drag_move_release() {
        let mut s = state();
        let mut write = at(&[(10.0, 10.0), (100.0, 100.0)]);
        write[1].velocity = [3.0, -3.0];

        s.apply(Message::drag(102, 98), &mut write);
        assert_eq!(s.dragged, Some(1));

        s.apply(Message::move_to(150, 160), &mut write);
        assert_eq!(write[1], Particle::at_rest(DVec2::new(150.0, 160.0)));
        assert_eq!(s.dragged, Some(1));

        s.apply(Message::release(155, 165), &mut write);
        assert_eq!(write[1], Particle::at_rest(DVec2::new(155.0, 165.0)));
        assert_eq!(s.dragged, None);
        assert_eq!(write[0].position, [10.0, 10.0]);
    }

    #[test]
    fn test_drag_on_empty_area_is_noop() {
        let mut s = state();
        let mut write = at(&[(10.0, 10.0)]);
        s.apply(Message::drag(300, 300), &mut write);
        assert_eq!(s.dragged, None);

        let before = write.clone();
        s.apply(Message::move_to(1, 1), &mut write);
        s.apply(Message::release(1, 1), &mut write);
        assert_eq!(write, before);

        // An existing drag survives a miss
        s.apply(Message::drag(10, 10), &mut write);
        s.apply(Message::drag(300, 300), &mut write);
        assert_eq!(s.dragged, Some(0));
    }

    #[test]
    fn test_click_keeps_drag_on_same_particle() {
        let mut s = state();
        let mut write = at(&[(10.0, 10.0), (100.0, 100.0), (200.0, 200.0)]);

        s.apply(Message::drag(200, 200), &mut write);
        assert_eq!(s.dragged, Some(2));
        s.apply(Message::click(10, 10), &mut write);
        assert_eq!(s.dragged, Some(1));
        assert_eq!(write[1].position, [200.0, 200.0]);

        s.apply(Message::click(200, 200), &mut write);
        assert_eq!(s.dragged, None);
        assert_eq!(write.len(), 1);
    }

    #[test]
    fn test_resize_and_stop() {
        let mut s = state();
        let mut write = Vec::new();
        s.apply(Message::resize(800, 600), &mut write);
        assert_eq!(s.bounds, Bounds::new(800.0, 600.0));

        assert_eq!(s.apply(Message::stop(), &mut write), Flow::Stop);
        assert!(write.is_empty());
    }

    #[test]
    fn test_drain_stops_at_stop_and_leaves_rest_queued() {
        let (tx, rx) = channel();
        tx.push(Message::click(20, 20));
        tx.push(Message::stop());
        tx.push(Message::click(40, 40));

        let mut s = state();
        let mut write = Vec::new();
        assert_eq!(s.drain(&rx, &mut write), Flow::Stop);
        assert_eq!(write.len(), 1);
        assert_eq!(rx.len(), 1);
    }

    #[test]
    fn test_drain_empty_queue_continues() {
        let (_tx, rx) = channel();
        let mut s = state();
        let mut write = at(&[(10.0, 10.0)]);
        assert_eq!(s.drain(&rx, &mut write), Flow::Continue);
        assert_eq!(write.len(), 1);
    }
}
