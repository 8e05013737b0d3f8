use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the breadcrumb navigation bar
///
/// Shows the Home control and one numbered entry per path segment; the
/// numbers are the hotkeys that select that breadcrumb. The deepest
/// segment (the current folder) is bold.
pub fn render_breadcrumb_bar(f: &mut Frame, area: Rect, segments: &[String]) {
    let mut spans: Vec<Span> = vec![Span::styled(
        "0:Home",
        Style::default()
            .fg(Color::Blue)
            .add_modifier(if segments.is_empty() {
                Modifier::BOLD
            } else {
                Modifier::empty()
            }),
    )];

    for (index, segment) in segments.iter().enumerate() {
        spans.push(Span::styled(" / ", Style::default().fg(Color::Gray)));

        let is_current = index == segments.len() - 1;
        let style = if is_current {
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Blue)
        };

        // Hotkey hints stop at 9; deeper segments are still shown
        if index < 9 {
            spans.push(Span::styled(format!("{}:", index + 1), Style::default().fg(Color::Gray)));
        }
        spans.push(Span::styled(segment.clone(), style));
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title("Path")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray)),
    );

    f.render_widget(bar, area);
}
