use ratatui::crossterm::event::{Event, KeyEvent, KeyEventKind};

/// Terminal events the browser reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

impl AppEvent {
    /// Keep key presses and resizes; drop key releases, mouse and focus events.
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
            Event::Resize(width, height) => Some(AppEvent::Resize(width, height)),
            _ => None,
        }
    }
}
