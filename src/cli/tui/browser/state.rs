use crate::catalog::{CpuCatalog, CpuEntry};
use crate::compare::ComparisonResult;
use crate::error::CompareError;
use crate::selector::FilterableSelector;
use tui_input::{Input, InputRequest};

/// Which panel receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Table,
    First,
    Second,
    CompareButton,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Table => Focus::First,
            Focus::First => Focus::Second,
            Focus::Second => Focus::CompareButton,
            Focus::CompareButton => Focus::Table,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Table => Focus::CompareButton,
            Focus::First => Focus::Table,
            Focus::Second => Focus::First,
            Focus::CompareButton => Focus::Second,
        }
    }
}

/// One searchable selector: a text input plus its suggestion list
#[derive(Debug, Default)]
pub struct SelectorState {
    pub input: Input,
    /// Index into the current suggestions
    pub highlighted: usize,
    /// Set once a suggestion is picked; cleared by the next edit
    pub committed: bool,
    /// Whether the suggestion list is visible at all
    pub open: bool,
}

impl SelectorState {
    /// Current text, committed or not
    pub fn query(&self) -> &str {
        self.input.value()
    }

    /// Suggestions to show: nothing while closed, committed or empty
    pub fn suggestions<'a>(&self, selector: &'a FilterableSelector) -> Vec<&'a str> {
        if !self.open || self.committed {
            return Vec::new();
        }
        selector.filter(self.query())
    }

    /// Apply an editing request. Returns true if the text changed.
    pub fn edit(&mut self, request: InputRequest) -> bool {
        let before = self.input.value().to_string();
        self.input.handle(request);
        let changed = self.input.value() != before;
        if changed {
            self.committed = false;
            self.highlighted = 0;
            self.open = true;
        }
        changed
    }

    /// Replace the query with a picked name and close the list
    pub fn commit(&mut self, name: &str) {
        self.input = Input::new(name.to_string());
        self.committed = true;
        self.highlighted = 0;
        self.open = false;
    }

    pub fn move_highlight(&mut self, delta: isize, available: usize) {
        if available == 0 {
            self.highlighted = 0;
            return;
        }
        let last = available - 1;
        self.highlighted = self.highlighted.saturating_add_signed(delta).min(last);
    }
}

/// What the result line shows after "Compare Scores"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompareMessage {
    Verdict(ComparisonResult),
    Advisory(CompareError),
}

impl CompareMessage {
    pub fn text(&self) -> String {
        match self {
            CompareMessage::Verdict(result) => result.to_string(),
            CompareMessage::Advisory(error) => error.to_string(),
        }
    }
}

/// Whole browser state; every key press is a pure update of this struct
#[derive(Debug)]
pub struct BrowserState {
    pub catalog: CpuCatalog,
    pub selector: FilterableSelector,
    pub focus: Focus,
    /// Cursor row in the table
    pub table_index: usize,
    /// Row whose name and score are shown in the details panel
    pub picked: Option<usize>,
    pub first: SelectorState,
    pub second: SelectorState,
    pub message: Option<CompareMessage>,
    pub should_quit: bool,
}

impl BrowserState {
    pub fn new(catalog: CpuCatalog) -> Self {
        let selector = FilterableSelector::from_catalog(&catalog);
        Self {
            catalog,
            selector,
            focus: Focus::default(),
            table_index: 0,
            picked: None,
            first: SelectorState::default(),
            second: SelectorState::default(),
            message: None,
            should_quit: false,
        }
    }

    pub fn picked_entry(&self) -> Option<&CpuEntry> {
        self.picked.and_then(|row| self.catalog.get(row))
    }

    pub fn selector_state(&self, focus: Focus) -> Option<&SelectorState> {
        match focus {
            Focus::First => Some(&self.first),
            Focus::Second => Some(&self.second),
            _ => None,
        }
    }

    /// Clear the picked row, the result line and any open suggestion list
    pub fn deselect(&mut self) {
        self.picked = None;
        self.message = None;
        self.first.open = false;
        self.second.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle_round_trips() {
        let mut focus = Focus::Table;
        for _ in 0..4 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Table);
        assert_eq!(Focus::Table.previous(), Focus::CompareButton);
        assert_eq!(Focus::Second.previous().next(), Focus::Second);
    }

    #[test]
    fn test_edit_reopens_after_commit() {
        let mut state = SelectorState::default();
        state.commit("Apple M2");
        assert!(state.committed);
        assert_eq!(state.query(), "Apple M2");

        assert!(state.edit(InputRequest::DeletePrevChar));
        assert!(!state.committed);
        assert!(state.open);
        assert_eq!(state.query(), "Apple M");
    }

    #[test]
    fn test_cursor_move_is_not_an_edit() {
        let mut state = SelectorState::default();
        state.commit("M2");
        assert!(!state.edit(InputRequest::GoToStart));
        assert!(state.committed);
    }

    #[test]
    fn test_highlight_is_clamped() {
        let mut state = SelectorState::default();
        state.move_highlight(1, 3);
        state.move_highlight(5, 3);
        assert_eq!(state.highlighted, 2);
        state.move_highlight(-10, 3);
        assert_eq!(state.highlighted, 0);
        state.move_highlight(1, 0);
        assert_eq!(state.highlighted, 0);
    }
}
