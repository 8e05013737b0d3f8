use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::icons::IconRenderer;
use crate::model::{Model, Pane};

/// Render the bottom status bar: current path, counts, the copy
/// indicator and a short hotkey legend
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    model: &Model,
    icon_renderer: &IconRenderer,
) {
    let dashboard = &model.dashboard;

    let selection = match dashboard.focus {
        Pane::Folders => model
            .selected_folder()
            .map(|folder| folder.name.clone())
            .unwrap_or_else(|| "-".to_string()),
        Pane::Images => model
            .selected_image()
            .map(|image| image.public_id.clone())
            .unwrap_or_else(|| "-".to_string()),
    };

    let left = format!(
        "{}  │  {} folders, {} images  │  {}",
        dashboard.current_path,
        dashboard.folders.len(),
        dashboard.images.len(),
        selection,
    );

    let legend = "q quit · tab pane · enter open · bksp up · 0 home · r refresh · c copy · d info";

    let line = Line::from(vec![
        Span::raw(left),
        Span::raw("  "),
        icon_renderer.copy_indicator(model.ui.copy.is_copied()),
        Span::styled(format!("   {}", legend), Style::default().fg(Color::Gray)),
    ]);

    let bar = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray)),
    );

    f.render_widget(bar, area);
}
