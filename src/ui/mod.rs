pub mod detail;
pub mod results;
pub mod search_bar;

use crate::app::{App, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draws the whole screen: search bar, results beside details, key hints.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    search_bar::render_search_bar(
        frame,
        chunks[0],
        app.search().query(),
        app.focus() == Focus::Search,
    );

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    results::render_results(
        frame,
        content[0],
        app.search().results(),
        app.highlight_state(),
        app.focus() == Focus::Results,
    );
    detail::render_detail(frame, content[1], app.detail());

    render_hints(frame, chunks[2], app.focus());
}

fn render_hints(frame: &mut Frame, area: ratatui::layout::Rect, focus: Focus) {
    let hints = match focus {
        Focus::Search => "type to search | ↓/Tab/Enter: results | Ctrl+C: quit",
        Focus::Results => {
            "↑/↓: move | Enter: select | Esc: close | w: add to watch-list | /: search | q: quit"
        }
    };
    let line = Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)));
    frame.render_widget(Paragraph::new(line), area);
}
