//! Browser screen: catalog table on the left, selectors and verdict on the right

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{
        Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, TableState, Wrap,
    },
    Frame,
};

use super::state::{BrowserState, CompareMessage, Focus, SelectorState};
use super::theme::Theme;

pub fn render(frame: &mut Frame, state: &BrowserState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Body
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[0]);

    render_table(frame, body[0], state, theme);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Picked CPU
            Constraint::Min(5),    // First selector
            Constraint::Min(5),    // Second selector
            Constraint::Length(3), // Compare button
            Constraint::Length(4), // Verdict
        ])
        .split(body[1]);

    render_details(frame, right[0], state, theme);
    render_selector(frame, right[1], state, Focus::First, " First CPU ", theme);
    render_selector(frame, right[2], state, Focus::Second, " Second CPU ", theme);
    render_button(frame, right[3], state, theme);
    render_message(frame, right[4], state, theme);
    render_help(frame, chunks[1], theme);
}

fn render_table(frame: &mut Frame, area: Rect, state: &BrowserState, theme: &Theme) {
    let header = Row::new(vec![Cell::from("CPU Name"), Cell::from("Score")]).style(theme.header);
    let rows: Vec<Row> = state
        .catalog
        .iter()
        .map(|entry| {
            Row::new(vec![
                Cell::from(entry.name.as_str()),
                Cell::from(entry.score.to_string()),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Percentage(75), Constraint::Percentage(25)])
        .header(header)
        .block(
            Block::default()
                .title(format!(" CPU Ranking ({} entries) ", state.catalog.len()))
                .borders(Borders::ALL)
                .border_style(theme.border(state.focus == Focus::Table)),
        )
        .row_highlight_style(theme.selected)
        .highlight_symbol("▶ ");

    let mut table_state = TableState::default();
    if !state.catalog.is_empty() {
        table_state.select(Some(state.table_index));
    }
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn render_details(frame: &mut Frame, area: Rect, state: &BrowserState, theme: &Theme) {
    let lines = match state.picked_entry() {
        Some(entry) => vec![
            Line::from(Span::styled(entry.name.clone(), theme.highlight)),
            Line::from(format!("Score: {}", entry.score)),
        ],
        None => vec![Line::from(Span::styled(
            "Press Enter on a row to show its score",
            theme.muted,
        ))],
    };

    let details =
        Paragraph::new(lines).block(Block::default().title(" Selected CPU ").borders(Borders::ALL));
    frame.render_widget(details, area);
}

fn render_selector(
    frame: &mut Frame,
    area: Rect,
    state: &BrowserState,
    slot: Focus,
    title: &str,
    theme: &Theme,
) {
    let Some(selector) = state.selector_state(slot) else {
        return;
    };
    let focused = state.focus == slot;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let marker = if selector.committed { " ✓" } else { "" };
    let input = Paragraph::new(selector.query()).block(
        Block::default()
            .title(format!("{}{}", title, marker))
            .borders(Borders::ALL)
            .border_style(theme.border(focused)),
    );
    frame.render_widget(input, chunks[0]);

    if focused {
        let cursor_x = chunks[0].x + 1 + selector.input.visual_cursor() as u16;
        frame.set_cursor_position(Position::new(
            cursor_x.min(chunks[0].right().saturating_sub(2)),
            chunks[0].y + 1,
        ));
    }

    render_suggestions(frame, chunks[1], state, selector, theme);
}

fn render_suggestions(
    frame: &mut Frame,
    area: Rect,
    state: &BrowserState,
    selector: &SelectorState,
    theme: &Theme,
) {
    let suggestions = selector.suggestions(&state.selector);
    if suggestions.is_empty() || area.height == 0 {
        return;
    }

    let items: Vec<ListItem> = suggestions.iter().map(|name| ListItem::new(*name)).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM))
        .highlight_style(theme.selected);

    let mut list_state = ListState::default();
    list_state.select(Some(selector.highlighted));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_button(frame: &mut Frame, area: Rect, state: &BrowserState, theme: &Theme) {
    let focused = state.focus == Focus::CompareButton;
    let label = if focused {
        Span::styled("[ Compare Scores ]", theme.focused)
    } else {
        Span::raw("[ Compare Scores ]")
    };
    let button = Paragraph::new(Line::from(label).centered())
        .block(Block::default().borders(Borders::ALL).border_style(theme.border(focused)));
    frame.render_widget(button, area);
}

fn render_message(frame: &mut Frame, area: Rect, state: &BrowserState, theme: &Theme) {
    let line = match &state.message {
        Some(message @ CompareMessage::Verdict(_)) => {
            Line::from(Span::styled(message.text(), theme.success))
        }
        Some(message @ CompareMessage::Advisory(_)) => {
            Line::from(Span::styled(message.text(), theme.error))
        }
        None => Line::default(),
    };
    let paragraph = Paragraph::new(line)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Result ").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let key = |text: &'static str| Span::styled(text, theme.highlight);
    let sep = || Span::styled("  •  ", theme.muted);
    let help_text = Line::from(vec![
        Span::raw(" "),
        key("Tab"),
        Span::raw(" Next panel"),
        sep(),
        key("↑↓"),
        Span::raw(" Move"),
        sep(),
        key("Enter"),
        Span::raw(" Pick / Compare"),
        sep(),
        key("Esc"),
        Span::raw(" Clear"),
        sep(),
        key("Ctrl+C"),
        Span::raw(" Quit"),
    ]);

    frame.render_widget(Paragraph::new(help_text), area);
}
