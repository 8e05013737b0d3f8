// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - icons: Icon rendering (emoji and Nerd Fonts) with themes
// - layout: Calculates screen layout (breadcrumb bar, panes, status bar)
// - render: Main orchestration function that coordinates all rendering
// - breadcrumb: Renders the breadcrumb navigation bar
// - folder_list: Renders the folder pane
// - image_grid: Renders the image grid pane and its empty placeholder
// - preview: Renders the image preview popup
// - status_bar: Renders bottom status bar with path, counts and hotkeys
// - toast: Renders toast notifications (brief pop-up messages)

pub mod breadcrumb;
pub mod folder_list;
pub mod icons;
pub mod image_grid;
pub mod layout;
pub mod preview;
pub mod render;
pub mod status_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
