use ratatui::Frame;

use super::{breadcrumb, folder_list, image_grid, layout, preview, status_bar, toast};
use crate::app::App;
use crate::model::Pane;

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let layout_info = layout::calculate_layout(size);

    breadcrumb::render_breadcrumb_bar(f, layout_info.breadcrumb_area, &app.model.dashboard.breadcrumbs);

    folder_list::render_folder_list(
        f,
        layout_info.folders_area,
        &app.model.dashboard.folders,
        app.model.dashboard.selected_folder,
        app.model.dashboard.focus == Pane::Folders,
        &app.icon_renderer,
    );

    // Remember the column count for keyboard row navigation
    app.grid_columns = image_grid::render_image_grid(
        f,
        layout_info.images_area,
        &app.model.dashboard.images,
        app.model.dashboard.selected_image,
        app.model.dashboard.focus == Pane::Images,
        app.model.ui.display_mode,
        &app.icon_renderer,
    );

    status_bar::render_status_bar(f, layout_info.status_area, &app.model, &app.icon_renderer);

    if let Some(popup) = app.model.ui.preview.clone() {
        let protocol = app
            .preview_protocol
            .as_mut()
            .filter(|(public_id, _)| *public_id == popup.resource.public_id)
            .map(|(_, protocol)| protocol);
        preview::render_preview(f, size, &popup, protocol);
    }

    if let Some((ref message, _)) = app.model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
