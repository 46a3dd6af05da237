use crate::detail::DetailController;
use crate::models::MovieDetail;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Details panel. Only the frame is drawn while nothing is selected. A failed
/// lookup leaves the field layout with empty values.
pub fn render_detail(frame: &mut Frame, area: Rect, controller: &DetailController) {
    let block = Block::default()
        .title(" More info - ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    if !controller.is_selected() {
        frame.render_widget(block, area);
        return;
    }

    let empty = MovieDetail::default();
    let lines = match controller.detail() {
        Some(movie) => detail_lines(movie),
        None if controller.lookup_failed() => detail_lines(&empty),
        None => vec![Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn detail_lines(movie: &MovieDetail) -> Vec<Line<'_>> {
    let dim = Style::default().fg(Color::DarkGray);
    vec![
        Line::from(Span::styled(
            movie.title.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("{} • {}", movie.released, movie.runtime)),
        Line::from(Span::styled(movie.genre.as_str(), Style::default().fg(Color::Cyan))),
        Line::from(vec![
            Span::styled("⭐ ", Style::default().fg(Color::Yellow)),
            Span::raw(format!("{} IMDB Rating", movie.imdb_rating)),
        ]),
        Line::from(Span::styled(movie.poster.as_str(), dim)),
        Line::from(""),
        Line::from(Span::styled(
            movie.plot.as_str(),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(format!("Starring - {}", movie.actors)),
        Line::from(format!("Directed by - {}", movie.director)),
        Line::from(""),
        Line::from(Span::styled(
            "[w] Add to watch-list",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
    ]
}
