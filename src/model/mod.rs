//! Pure Application Model
//!
//! This module defines the pure, cloneable state for the application,
//! organized into focused sub-models:
//!
//! - **DashboardModel**: Navigation and store data (path, breadcrumbs,
//!   folders, images, request tokens)
//! - **UiModel**: Toast, copy control, preview popup, quit flag
//!
//! Key principles:
//! - Clone + Debug: state can be snapshotted and compared in tests
//! - No services: all I/O lives in the App/runtime layer
//! - Pure accessors: helper methods are side-effect free

pub mod dashboard;
pub mod ui;

pub use dashboard::{DashboardModel, Pane};
pub use ui::{CopyControl, PreviewMetadata, PreviewPopup, PreviewStatus, UiModel};

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Navigation and store data
    pub dashboard: DashboardModel,

    /// Toast, copy control, popups
    pub ui: UiModel,
}

impl Model {
    /// Create the initial model
    pub fn new() -> Self {
        Self {
            dashboard: DashboardModel::new(),
            ui: UiModel::new(),
        }
    }

    /// Currently selected folder, if the folder pane has a selection
    pub fn selected_folder(&self) -> Option<&crate::api::Folder> {
        self.dashboard
            .selected_folder
            .and_then(|idx| self.dashboard.folders.get(idx))
    }

    /// Currently selected image, if the grid has a selection
    pub fn selected_image(&self) -> Option<&crate::api::ImageResource> {
        self.dashboard
            .selected_image
            .and_then(|idx| self.dashboard.images.get(idx))
    }

    /// Check if a modal popup is showing
    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_creation() {
        let model = Model::new();
        assert_eq!(model.dashboard.current_path, "/");
        assert!(model.dashboard.folders.is_empty());
        assert!(!model.ui.should_quit);
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = Model::new();
        let _cloned = model.clone();
    }

    #[test]
    fn test_selected_folder_empty() {
        let model = Model::new();
        assert!(model.selected_folder().is_none());
        assert!(model.selected_image().is_none());
    }
}
