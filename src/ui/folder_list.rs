use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::icons::IconRenderer;
use crate::api::Folder;

/// Render the folder pane
///
/// One icon entry per folder, always shown regardless of the image grid
/// state. The external id is appended dimmed when the pane is wide
/// enough.
pub fn render_folder_list(
    f: &mut Frame,
    area: Rect,
    folders: &[Folder],
    selected: Option<usize>,
    is_focused: bool,
    icon_renderer: &IconRenderer,
) {
    let panel_width = area.width.saturating_sub(4) as usize; // borders + highlight

    let items: Vec<ListItem> = folders
        .iter()
        .map(|folder| {
            let mut spans = vec![icon_renderer.folder(), Span::raw(folder.name.clone())];

            // Right-align the external id if there is room for it
            let used = folder.name.width() + 3;
            let id_width = folder.external_id.width();
            if used + id_width + 2 <= panel_width {
                let padding = panel_width - used - id_width;
                spans.push(Span::raw(" ".repeat(padding)));
                spans.push(Span::styled(
                    folder.external_id.clone(),
                    Style::default().fg(Color::Rgb(120, 120, 120)),
                ));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let border_color = if is_focused { Color::Cyan } else { Color::Gray };

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("Folders ({})", folders.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(selected);
    f.render_stateful_widget(list, area, &mut state);
}
