use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Processed input events for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Quit the application
    Quit,
    /// Pointer moved to a cell
    PointerMove { x: u16, y: u16 },
    /// Left button pressed on a cell
    PointerDown { x: u16, y: u16 },
    /// Terminal resize
    Resize { width: u16, height: u16 },
    /// No event
    None,
}

/// Input handler for processing terminal events
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Poll for input events with timeout
    pub fn poll(&mut self, timeout: Duration) -> Option<InputEvent> {
        if event::poll(timeout).ok()? {
            match event::read().ok()? {
                Event::Key(key_event) => Some(self.handle_key(key_event)),
                Event::Mouse(mouse_event) => Some(self.handle_mouse(mouse_event)),
                Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
                _ => None,
            }
        } else {
            None
        }
    }

    /// Handle keyboard input
    fn handle_key(&self, event: KeyEvent) -> InputEvent {
        match event.code {
            // Quit
            KeyCode::Char('q') | KeyCode::Esc => InputEvent::Quit,

            // Ctrl+C to quit
            KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                InputEvent::Quit
            }

            _ => InputEvent::None,
        }
    }

    /// Handle mouse input. Drags count as pointer movement; touch
    /// terminals report little else.
    fn handle_mouse(&self, event: MouseEvent) -> InputEvent {
        match event.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => InputEvent::PointerMove {
                x: event.column,
                y: event.row,
            },
            MouseEventKind::Down(MouseButton::Left) => InputEvent::PointerDown {
                x: event.column,
                y: event.row,
            },
            _ => InputEvent::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
