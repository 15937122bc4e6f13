//! Interaction messages sent from the caller thread to the simulation loop

use glam::DVec2;

/// Closed message vocabulary
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Remove the particle under the point, or add one if there is none
    Click = 0,
    /// Start dragging the particle under the point
    Drag = 1,
    /// Move the dragged particle
    Move = 2,
    /// Drop the dragged particle at the point
    Release = 3,
    /// Terminate the loop. Coordinates unused.
    Stop = 4,
    /// New domain width (x) and height (y)
    Resize = 5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub x: i32,
    pub y: i32,
}

impl Message {
    pub fn new(kind: MessageKind, x: i32, y: i32) -> Self {
        Self { kind, x, y }
    }

    pub fn click(x: i32, y: i32) -> Self {
        Self::new(MessageKind::Click, x, y)
    }

    pub fn drag(x: i32, y: i32) -> Self {
        Self::new(MessageKind::Drag, x, y)
    }

    pub fn move_to(x: i32, y: i32) -> Self {
        Self::new(MessageKind::Move, x, y)
    }

    pub fn release(x: i32, y: i32) -> Self {
        Self::new(MessageKind::Release, x, y)
    }

    pub fn resize(width: i32, height: i32) -> Self {
        Self::new(MessageKind::Resize, width, height)
    }

    pub fn stop() -> Self {
        Self::new(MessageKind::Stop, 0, 0)
    }

    /// Decode a message from its integer form. Unknown kinds yield `None`.
    pub fn from_raw(kind: u32, x: i32, y: i32) -> Option<Self> {
        let kind = match kind {
            0 => MessageKind::Click,
            1 => MessageKind::Drag,
            2 => MessageKind::Move,
            3 => MessageKind::Release,
            4 => MessageKind::Stop,
            5 => MessageKind::Resize,
            _ => return None,
        };
        Some(Self::new(kind, x, y))
    }

    /// Coordinates as a point in domain space
    pub fn point(&self) -> DVec2 {
        DVec2::new(self.x as f64, self.y as f64)
    }
}
