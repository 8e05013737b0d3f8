use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::layout::centered_rect;
use crate::model::{PreviewPopup, PreviewStatus};
use crate::utils;

/// Render the image preview popup
///
/// The decoded protocol lives outside the model; it is passed in when
/// the load has finished for the asset the popup is showing.
pub fn render_preview(
    f: &mut Frame,
    screen: Rect,
    popup: &PreviewPopup,
    protocol: Option<&mut ratatui_image::protocol::StatefulProtocol>,
) {
    let popup_area = centered_rect(80, 80, screen);
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", popup.resource.display_name()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Image area
            Constraint::Length(3), // Metadata lines
        ])
        .split(inner);

    match &popup.status {
        PreviewStatus::Loading => {
            let loading = Paragraph::new("Loading preview...")
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center);
            f.render_widget(loading, chunks[0]);
        }
        PreviewStatus::Failed(reason) => {
            let failed = Paragraph::new(Line::from(vec![
                Span::styled("✗ ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::raw(reason.clone()),
            ]))
            .alignment(Alignment::Center);
            f.render_widget(failed, chunks[0]);
        }
        PreviewStatus::Ready(_) => {
            if let Some(protocol) = protocol {
                let widget = ratatui_image::StatefulImage::default();
                f.render_stateful_widget(widget, chunks[0], protocol);
            }
        }
    }

    f.render_widget(metadata_lines(popup), chunks[1]);
}

fn metadata_lines(popup: &PreviewPopup) -> Paragraph<'static> {
    let resource = &popup.resource;
    let mut first = vec![Span::styled(
        resource.public_id.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if let Some(ref format) = resource.format {
        first.push(Span::raw(format!("  ·  {}", format)));
    }
    if let Some(ref created) = resource.created_at {
        first.push(Span::styled(
            format!("  ·  {}", utils::format_upload_date(created)),
            Style::default().fg(Color::Gray),
        ));
    }

    let second = match &popup.status {
        PreviewStatus::Ready(meta) => {
            let mut parts = Vec::new();
            if let Some((w, h)) = meta.dimensions {
                parts.push(format!("{}x{}", w, h));
            }
            if let Some(ref color) = meta.color {
                parts.push(color.clone());
            }
            parts.push(utils::format_bytes(meta.file_size));
            parts.join("  ·  ")
        }
        _ => {
            // Fall back to the listing attributes while loading/failed
            let mut parts = Vec::new();
            if let (Some(w), Some(h)) = (resource.width, resource.height) {
                parts.push(format!("{}x{}", w, h));
            }
            if let Some(bytes) = resource.bytes {
                parts.push(utils::format_bytes(bytes));
            }
            parts.join("  ·  ")
        }
    };

    Paragraph::new(vec![
        Line::from(first),
        Line::from(Span::styled(second, Style::default().fg(Color::Gray))),
    ])
}
