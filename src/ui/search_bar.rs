use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PLACEHOLDER: &str = "Search movies...";

pub fn render_search_bar(frame: &mut Frame, area: Rect, query: &str, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    let block = Block::default()
        .title(Span::styled(
            " FilmFetcher ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(border_style);

    let line = if query.is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(Span::raw(query))
    };
    frame.render_widget(Paragraph::new(line).block(block), area);

    if focused {
        let width = u16::try_from(query.chars().count()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(width)
            .min(area.right().saturating_sub(2));
        frame.set_cursor_position((x, area.y.saturating_add(1)));
    }
}
