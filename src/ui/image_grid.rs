use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::icons::IconRenderer;
use crate::api::ImageResource;
use crate::logic::grid;
use crate::utils;
use crate::DisplayMode;

/// Truncate a cell label to a display width, appending an ellipsis
fn truncate_label(label: &str, max_width: usize) -> String {
    if label.width() <= max_width {
        return label.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in label.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Second cell line per the display mode (None for DisplayMode::Off)
fn cell_info(image: &ImageResource, display_mode: DisplayMode) -> Option<String> {
    match display_mode {
        DisplayMode::Off => None,
        DisplayMode::SizeOnly => Some(
            image
                .bytes
                .map(utils::format_bytes)
                .unwrap_or_default(),
        ),
        DisplayMode::SizeAndDate => {
            let size = image.bytes.map(utils::format_bytes).unwrap_or_default();
            let date = image
                .created_at
                .as_deref()
                .map(utils::format_upload_date)
                .unwrap_or_default();
            Some(format!("{} {}", size, date).trim().to_string())
        }
    }
}

/// Render the image grid pane
///
/// Shows a grid of image entries, or the literal "No images here"
/// placeholder when the list is empty (zero results and fetch failure
/// render identically). Returns the column count used, which keyboard
/// row-navigation needs.
pub fn render_image_grid(
    f: &mut Frame,
    area: Rect,
    images: &[ImageResource],
    selected: Option<usize>,
    is_focused: bool,
    display_mode: DisplayMode,
    icon_renderer: &IconRenderer,
) -> usize {
    let border_color = if is_focused { Color::Cyan } else { Color::Gray };
    let block = Block::default()
        .title(format!("Images ({})", images.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if images.is_empty() {
        let placeholder_area = Rect {
            x: inner.x,
            y: inner.y + inner.height / 2,
            width: inner.width,
            height: 1.min(inner.height),
        };
        let placeholder = Paragraph::new("No images here")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(placeholder, placeholder_area);
        return grid::grid_columns(inner.width);
    }

    let columns = grid::grid_columns(inner.width);
    let cell_width = (inner.width / columns as u16).max(1);
    let cell_height: u16 = if display_mode == DisplayMode::Off { 1 } else { 2 };
    let visible_rows = (inner.height / cell_height) as usize;

    // Keep the selected cell in view
    let selected_row = selected.map(|s| grid::grid_position(s, columns).0).unwrap_or(0);
    let first_row = selected_row.saturating_sub(visible_rows.saturating_sub(1));

    for (index, image) in images.iter().enumerate() {
        let (row, col) = grid::grid_position(index, columns);
        if row < first_row || row >= first_row + visible_rows.max(1) {
            continue;
        }

        let cell_area = Rect {
            x: inner.x + col as u16 * cell_width,
            y: inner.y + ((row - first_row) as u16) * cell_height,
            width: cell_width,
            height: cell_height.min(inner.height),
        };

        let is_selected = selected == Some(index);
        let label = truncate_label(image.display_name(), cell_width.saturating_sub(3) as usize);

        let name_style = if is_selected {
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let mut lines = vec![Line::from(vec![
            icon_renderer.image(),
            Span::styled(label, name_style),
        ])];

        if let Some(info) = cell_info(image, display_mode) {
            lines.push(Line::from(Span::styled(
                truncate_label(&info, cell_width.saturating_sub(2) as usize),
                Style::default().fg(Color::Rgb(120, 120, 120)),
            )));
        }

        f.render_widget(Paragraph::new(lines), cell_area);
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(public_id: &str, bytes: Option<u64>) -> ImageResource {
        ImageResource {
            public_id: public_id.to_string(),
            bytes,
            ..Default::default()
        }
    }

    #[test]
    fn test_truncate_label_short_is_unchanged() {
        assert_eq!(truncate_label("stage-01", 20), "stage-01");
    }

    #[test]
    fn test_truncate_label_long_gets_ellipsis() {
        let truncated = truncate_label("a-very-long-asset-name", 8);
        assert!(truncated.ends_with('…'));
        assert!(truncated.width() <= 8);
    }

    #[test]
    fn test_cell_info_modes() {
        let img = image("x", Some(2048));
        assert_eq!(cell_info(&img, DisplayMode::Off), None);
        assert_eq!(cell_info(&img, DisplayMode::SizeOnly).as_deref(), Some("2.00 KB"));
    }

    #[test]
    fn test_cell_info_missing_attributes() {
        let img = image("x", None);
        assert_eq!(cell_info(&img, DisplayMode::SizeOnly).as_deref(), Some(""));
        assert_eq!(cell_info(&img, DisplayMode::SizeAndDate).as_deref(), Some(""));
    }
}
