//! Translation of pointer and window events into interaction messages
//!
//! Windowing backends forward their raw events here and push whatever comes out.

use crate::message::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pressed { button: PointerButton, x: i32, y: i32 },
    Released { button: PointerButton, x: i32, y: i32 },
    Moved { x: i32, y: i32 },
    Resized { width: i32, height: i32 },
    CloseRequested,
}

/// Tracks whether the primary button is held so moves only matter during a drag
#[derive(Debug, Default)]
pub struct InputTranslator {
    dragging: bool,
}

impl InputTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn translate(&mut self, event: InputEvent) -> Option<Message> {
        match event {
            InputEvent::Pressed {
                button: PointerButton::Primary,
                x,
                y,
            } => {
                self.dragging = true;
                Some(Message::drag(x, y))
            }
            InputEvent::Moved { x, y } if self.dragging => Some(Message::move_to(x, y)),
            InputEvent::Released {
                button: PointerButton::Primary,
                x,
                y,
            } => {
                self.dragging = false;
                Some(Message::release(x, y))
            }
            InputEvent::Released {
                button: PointerButton::Secondary,
                x,
                y,
            } => Some(Message::click(x, y)),
            InputEvent::Resized { width, height } => Some(Message::resize(width, height)),
            InputEvent::CloseRequested => Some(Message::stop()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_gesture() {
        let mut input = InputTranslator::new();

        assert_eq!(input.translate(InputEvent::Moved { x: 1, y: 1 }), None);
        assert_eq!(
            input.translate(InputEvent::Pressed {
                button: PointerButton::Primary,
                x: 5,
                y: 6
            }),
            Some(Message::drag(5, 6))
        );
        assert!(input.is_dragging());
        assert_eq!(
            input.translate(InputEvent::Moved { x: 7, y: 8 }),
            Some(Message::move_to(7, 8))
        );
        assert_eq!(
            input.translate(InputEvent::Released {
                button: PointerButton::Primary,
                x: 9,
                y: 10
            }),
            Some(Message::release(9, 10))
        );
        assert!(!input.is_dragging());
        assert_eq!(input.translate(InputEvent::Moved { x: 11, y: 12 }), None);
    }

    #[test]
    fn test_secondary_release_clicks() {
        let mut input = InputTranslator::new();
        assert_eq!(
            input.translate(InputEvent::Pressed {
                button: PointerButton::Secondary,
                x: 3,
                y: 3
            }),
            None
        );
        assert_eq!(
            input.translate(InputEvent::Released {
                button: PointerButton::Secondary,
                x: 3,
                y: 4
            }),
            Some(Message::click(3, 4))
        );
        assert!(!input.is_dragging());
    }

    #[test]
    fn test_window_events() {
        let mut input = InputTranslator::new();
        assert_eq!(
            input.translate(InputEvent::Resized {
                width: 800,
                height: 600
            }),
            Some(Message::resize(800, 600))
        );
        assert_eq!(
            input.translate(InputEvent::CloseRequested),
            Some(Message::stop())
        );
        assert_eq!(
            input.translate(InputEvent::Released {
                button: PointerButton::Other,
                x: 0,
                y: 0
            }),
            None
        );
    }
}
