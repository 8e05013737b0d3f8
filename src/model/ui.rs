//! UI Model
//!
//! Toast notifications, the clipboard copy control, the image preview
//! popup, and the quit flag. The copy control and toast are timer-based:
//! the render loop polls their reset conditions every frame.

use std::time::Instant;

use crate::api::ImageResource;
use crate::DisplayMode;

/// Clipboard copy control
///
/// Tracks the transient "copied" confirmation. While the flag is set the
/// control is disabled, so rapid re-activation cannot write twice.
#[derive(Clone, Debug, Default)]
pub struct CopyControl {
    copied_at: Option<Instant>,
}

impl CopyControl {
    /// Whether the copied confirmation is currently showing
    pub fn is_copied(&self) -> bool {
        self.copied_at.is_some()
    }

    /// Activate the control with an optional value
    ///
    /// Returns the exact text the caller should write to the clipboard,
    /// or None when the activation is a no-op: value absent, or the
    /// control still disabled from a previous activation. No state
    /// changes happen on the no-op path.
    pub fn activate(&mut self, value: Option<&str>) -> Option<String> {
        let value = value?;
        if self.copied_at.is_some() {
            return None;
        }
        self.copied_at = Some(Instant::now());
        Some(value.to_string())
    }

    /// Whether the copied flag has outlived its timer
    pub fn should_reset(&self) -> bool {
        self.copied_at
            .map(|at| crate::logic::ui::should_reset_copied(at.elapsed().as_millis()))
            .unwrap_or(false)
    }

    /// Revert the copied flag (re-enables the control)
    pub fn reset(&mut self) {
        self.copied_at = None;
    }
}

/// Decoded preview metadata shown next to the rendered image
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewMetadata {
    pub dimensions: Option<(u32, u32)>,
    pub color: Option<String>,
    pub file_size: u64,
}

/// Where the preview popup is in its load cycle
///
/// The decoded terminal-graphics protocol itself is not cloneable and
/// lives in the App runtime; the model only tracks the phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewStatus {
    Loading,
    Ready(PreviewMetadata),
    Failed(String),
}

/// Image preview popup state
#[derive(Clone, Debug)]
pub struct PreviewPopup {
    pub resource: ImageResource,
    pub status: PreviewStatus,
}

/// Toast, copy control, popups, quit flag
#[derive(Clone, Debug)]
pub struct UiModel {
    /// Toast message (text, shown-at timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Clipboard copy control state
    pub copy: CopyControl,

    /// Image preview popup, when open
    pub preview: Option<PreviewPopup>,

    /// Info shown in image grid cells
    pub display_mode: DisplayMode,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new() -> Self {
        Self {
            toast_message: None,
            copy: CopyControl::default(),
            preview: None,
            display_mode: DisplayMode::SizeOnly,
            should_quit: false,
        }
    }

    /// Check if a modal popup is open
    pub fn has_modal(&self) -> bool {
        self.preview.is_some()
    }

    /// Show toast notification
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if the toast has outlived its timer
    pub fn should_dismiss_toast(&self) -> bool {
        self.toast_message
            .as_ref()
            .map(|(_, at)| crate::logic::ui::should_dismiss_toast(at.elapsed().as_millis()))
            .unwrap_or(false)
    }

    /// Dismiss toast notification
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }

    /// Cycle the grid cell info mode: Off → Size → Size+Date → Off
    pub fn cycle_display_mode(&mut self) {
        self.display_mode = match self.display_mode {
            DisplayMode::Off => DisplayMode::SizeOnly,
            DisplayMode::SizeOnly => DisplayMode::SizeAndDate,
            DisplayMode::SizeAndDate => DisplayMode::Off,
        };
    }
}

impl Default for UiModel {
    fn default() -> Self {
        Self::new()
    }
}
