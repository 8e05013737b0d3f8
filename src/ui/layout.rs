use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Breadcrumb navigation bar at the top
    pub breadcrumb_area: Rect,
    /// Folder pane (left)
    pub folders_area: Rect,
    /// Image grid pane (right)
    pub images_area: Rect,
    /// Bottom status bar
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect) -> LayoutInfo {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Breadcrumb bar (borders + one line)
            Constraint::Min(3),    // Content area (folders + images)
            Constraint::Length(3), // Status bar
        ])
        .split(terminal_size);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(28), // Folder pane
            Constraint::Percentage(72), // Image grid
        ])
        .split(main_chunks[1]);

    LayoutInfo {
        breadcrumb_area: main_chunks[0],
        folders_area: content_chunks[0],
        images_area: content_chunks[1],
        status_area: main_chunks[2],
    }
}

/// Centered popup rectangle taking the given percentages of the screen
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_partitions_height() {
        let size = Rect::new(0, 0, 120, 40);
        let info = calculate_layout(size);
        assert_eq!(info.breadcrumb_area.height, 3);
        assert_eq!(info.status_area.height, 3);
        assert_eq!(info.folders_area.height, info.images_area.height);
        assert_eq!(
            info.breadcrumb_area.height + info.folders_area.height + info.status_area.height,
            40
        );
    }

    #[test]
    fn test_content_split_widths() {
        let size = Rect::new(0, 0, 100, 30);
        let info = calculate_layout(size);
        assert!(info.folders_area.width < info.images_area.width);
        assert_eq!(info.folders_area.width + info.images_area.width, 100);
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(80, 60, outer);
        assert!(popup.x > 0);
        assert!(popup.y > 0);
        assert!(popup.right() <= outer.right());
        assert!(popup.bottom() <= outer.bottom());
    }
}
