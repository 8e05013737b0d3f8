//! Dashboard Model
//!
//! Navigation state and store data for the dashboard flow: current path,
//! derived breadcrumb segments, the folder and image lists, and the
//! request tokens that gate which fetch responses may be applied.
//!
//! Token rule: every fetch captures a fresh token from the counter for
//! its state variable; only the response carrying the latest token is
//! applied, so overlapping fetches triggered by rapid navigation cannot
//! overwrite newer state with a stale reply.

use crate::api::{Folder, ImageResource};
use crate::logic::path;

/// Which pane has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Folders,
    Images,
}

/// Navigation and store data
#[derive(Clone, Debug)]
pub struct DashboardModel {
    /// Current folder path, root = "/"
    pub current_path: String,

    /// Breadcrumb segments, always the `/`-split decomposition of
    /// `current_path` (recomputed in [`set_path`], never hand-edited)
    ///
    /// [`set_path`]: DashboardModel::set_path
    pub breadcrumbs: Vec<String>,

    /// Folders under the current path
    pub folders: Vec<Folder>,

    /// Image resources under the current path
    pub images: Vec<ImageResource>,

    /// Selection in the folder pane
    pub selected_folder: Option<usize>,

    /// Flat selection index in the image grid
    pub selected_image: Option<usize>,

    /// Pane with keyboard focus
    pub focus: Pane,

    /// Latest issued folder-fetch token
    folder_token: u64,

    /// Latest issued image-fetch token
    image_token: u64,
}

impl DashboardModel {
    /// Create the initial dashboard model at the root path
    pub fn new() -> Self {
        Self {
            current_path: path::ROOT_PATH.to_string(),
            breadcrumbs: Vec::new(),
            folders: Vec::new(),
            images: Vec::new(),
            selected_folder: None,
            selected_image: None,
            focus: Pane::Folders,
            folder_token: 0,
            image_token: 0,
        }
    }

    /// Set the current path and recompute the breadcrumb segments
    pub fn set_path(&mut self, new_path: impl Into<String>) {
        self.current_path = new_path.into();
        self.breadcrumbs = path::path_segments(&self.current_path);
    }

    /// Reset to the root view: root path, no breadcrumbs, no images
    ///
    /// The folder list is left in place until the follow-up fetch
    /// replaces it, matching the path-changed transition.
    pub fn reset_to_root(&mut self) {
        self.set_path(path::ROOT_PATH);
        self.images.clear();
        self.selected_image = None;
    }

    /// Rebuild to initial state for a full dashboard remount (refresh)
    ///
    /// Token counters survive the remount so replies from fetches issued
    /// before the refresh can never match a post-refresh token.
    pub fn reset_for_remount(&mut self) {
        let folder_token = self.folder_token;
        let image_token = self.image_token;
        *self = Self::new();
        self.folder_token = folder_token;
        self.image_token = image_token;
    }

    /// Issue a new folder-fetch token
    pub fn begin_folder_fetch(&mut self) -> u64 {
        self.folder_token += 1;
        self.folder_token
    }

    /// Issue a new image-fetch token
    pub fn begin_image_fetch(&mut self) -> u64 {
        self.image_token += 1;
        self.image_token
    }

    /// Apply a successful folder listing
    ///
    /// Returns false (state untouched) when `token` is not the latest
    /// issued folder token. A failed folder fetch is never applied at
    /// all: the prior folder list stays.
    pub fn apply_folders(&mut self, token: u64, folders: Vec<Folder>) -> bool {
        if token != self.folder_token {
            return false;
        }
        self.folders = folders;
        self.selected_folder = match self.folders.len() {
            0 => None,
            len => Some(self.selected_folder.unwrap_or(0).min(len - 1)),
        };
        true
    }

    /// Apply an image listing result
    ///
    /// Success replaces the image list wholesale; an empty listing and a
    /// failed fetch both leave an empty list (the render layer shows the
    /// same placeholder for either). Stale tokens are discarded.
    pub fn apply_images(&mut self, token: u64, resources: Vec<ImageResource>) -> bool {
        if token != self.image_token {
            return false;
        }
        self.images = resources;
        self.selected_image = match self.images.len() {
            0 => None,
            len => Some(self.selected_image.unwrap_or(0).min(len - 1)),
        };
        true
    }

    /// Record a failed image fetch: clears the list if `token` is current
    pub fn fail_images(&mut self, token: u64) -> bool {
        if token != self.image_token {
            return false;
        }
        self.images.clear();
        self.selected_image = None;
        true
    }

    /// Move the folder selection down/up with wrapping
    pub fn move_folder_selection(&mut self, down: bool) {
        let len = self.folders.len();
        if len == 0 {
            self.selected_folder = None;
            return;
        }
        self.selected_folder = Some(match (self.selected_folder, down) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) if i + 1 >= len => 0,
            (Some(i), true) => i + 1,
            (Some(0), false) => len - 1,
            (Some(i), false) => i - 1,
        });
    }

    /// Move the image selection horizontally (±1, clamped)
    pub fn move_image_selection_horizontal(&mut self, right: bool) {
        let len = self.images.len();
        if len == 0 {
            self.selected_image = None;
            return;
        }
        let current = self.selected_image.unwrap_or(0);
        self.selected_image = Some(if right {
            (current + 1).min(len - 1)
        } else {
            current.saturating_sub(1)
        });
    }

    /// Move the image selection one grid row (clamped to the grid)
    pub fn move_image_selection_vertical(&mut self, columns: usize, down: bool) {
        let len = self.images.len();
        if len == 0 {
            self.selected_image = None;
            return;
        }
        let current = self.selected_image.unwrap_or(0);
        self.selected_image = Some(crate::logic::grid::move_vertical(current, len, columns, down));
    }
}

impl Default for DashboardModel {
    fn default() -> Self {
        Self::new()
    }
}
