use crate::models::MovieSummary;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Renders one entry per summary, in response order.
pub fn render_results(
    frame: &mut Frame,
    area: Rect,
    results: &[MovieSummary],
    highlight: &ListState,
    focused: bool,
) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    let block = Block::default()
        .title(" Search results - ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let items: Vec<ListItem> = results
        .iter()
        .map(|movie| {
            let title_line = Line::from(Span::styled(
                movie.title.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
            let meta_line = Line::from(vec![
                Span::styled(format!("  {} ", movie.year), Style::default().fg(Color::Cyan)),
                Span::styled(movie.poster.as_str(), Style::default().fg(Color::DarkGray)),
            ]);
            ListItem::new(vec![title_line, meta_line])
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = highlight.clone();
    frame.render_stateful_widget(list, area, &mut state);
}
