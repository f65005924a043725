use ratatui::{
    crossterm::event::{self, KeyCode, KeyEvent, KeyModifiers},
    DefaultTerminal,
};
use tui_input::InputRequest;

use super::events::AppEvent;
use super::state::*;
use super::theme::Theme;
use crate::catalog::CpuCatalog;
use crate::compare::compare;
use crate::selector::FilterableSelector;
use crate::Result;

/// Rows skipped by PageUp/PageDown in the table
const PAGE_SIZE: isize = 10;

/// Main application struct
pub struct App {
    state: BrowserState,
    theme: Theme,
}

impl App {
    pub fn new(catalog: CpuCatalog) -> Self {
        Self {
            state: BrowserState::new(catalog),
            theme: Theme::default(),
        }
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit
    }

    /// Run the application until the user quits
    pub fn run(mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        let result = self.main_loop(&mut terminal);
        ratatui::restore();
        result
    }

    /// Blocking draw/read loop; one event is handled per iteration
    fn main_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        terminal.clear()?;
        while !self.state.should_quit {
            terminal.draw(|frame| super::view::render(frame, &self.state, &self.theme))?;
            if let Some(app_event) = AppEvent::from_terminal(event::read()?) {
                self.handle_event(app_event);
            }
        }
        Ok(())
    }

    /// Handle an event
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            // Next draw picks up the new size.
            AppEvent::Resize(..) => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Handle global keys first
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.state.should_quit = true;
            return;
        }
        match key.code {
            KeyCode::Tab => return self.set_focus(self.state.focus.next()),
            KeyCode::BackTab => return self.set_focus(self.state.focus.previous()),
            KeyCode::Esc => return self.state.deselect(),
            _ => {}
        }

        // Route to focus-specific handler
        let state = &mut self.state;
        match state.focus {
            Focus::Table => Self::handle_table_key(state, key),
            Focus::First => Self::handle_selector_key(&state.selector, &mut state.first, key),
            Focus::Second => Self::handle_selector_key(&state.selector, &mut state.second, key),
            Focus::CompareButton => Self::handle_button_key(state, key),
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        self.state.focus = focus;
        // Focusing a selector shows its suggestions again
        match focus {
            Focus::First => self.state.first.open = true,
            Focus::Second => self.state.second.open = true,
            _ => {}
        }
    }

    fn handle_table_key(state: &mut BrowserState, key: KeyEvent) {
        let rows = state.catalog.len();
        let step = match key.code {
            KeyCode::Up => -1,
            KeyCode::Down => 1,
            KeyCode::PageUp => -PAGE_SIZE,
            KeyCode::PageDown => PAGE_SIZE,
            KeyCode::Home => isize::MIN,
            KeyCode::End => isize::MAX,
            KeyCode::Enter => {
                if rows > 0 {
                    state.picked = Some(state.table_index);
                }
                return;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                state.should_quit = true;
                return;
            }
            _ => return,
        };
        if rows > 0 {
            state.table_index = state.table_index.saturating_add_signed(step).min(rows - 1);
        }
    }

    fn handle_selector_key(selector: &FilterableSelector, slot: &mut SelectorState, key: KeyEvent) {
        match key.code {
            KeyCode::Up => {
                let available = slot.suggestions(selector).len();
                slot.move_highlight(-1, available);
            }
            KeyCode::Down => {
                let available = slot.suggestions(selector).len();
                slot.move_highlight(1, available);
            }
            KeyCode::Enter => {
                let picked = slot
                    .suggestions(selector)
                    .get(slot.highlighted)
                    .map(|name| name.to_string());
                if let Some(name) = picked {
                    tracing::debug!(name = %name, "Selector committed");
                    slot.commit(&name);
                }
            }
            _ => {
                if let Some(request) = input_request(key) {
                    slot.edit(request);
                }
            }
        }
    }

    fn handle_button_key(state: &mut BrowserState, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                let outcome = compare(&state.catalog, state.first.query(), state.second.query());
                state.message = Some(match outcome {
                    Ok(result) => CompareMessage::Verdict(result),
                    Err(error) => {
                        tracing::debug!(%error, "Comparison did not complete");
                        CompareMessage::Advisory(error)
                    }
                });
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => state.should_quit = true,
            _ => {}
        }
    }
}

/// Map an editing key to a text input request
fn input_request(key: KeyEvent) -> Option<InputRequest> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let request = match key.code {
        KeyCode::Char('w') if ctrl => InputRequest::DeletePrevWord,
        KeyCode::Char('u') if ctrl => InputRequest::DeleteLine,
        KeyCode::Char('a') if ctrl => InputRequest::GoToStart,
        KeyCode::Char('e') if ctrl => InputRequest::GoToEnd,
        KeyCode::Char(_) if ctrl => return None,
        KeyCode::Char(c) => InputRequest::InsertChar(c),
        KeyCode::Backspace => InputRequest::DeletePrevChar,
        KeyCode::Delete => InputRequest::DeleteNextChar,
        KeyCode::Left => InputRequest::GoToPrevChar,
        KeyCode::Right => InputRequest::GoToNextChar,
        KeyCode::Home => InputRequest::GoToStart,
        KeyCode::End => InputRequest::GoToEnd,
        _ => return None,
    };
    Some(request)
}
