//! Media store TUI Library
//!
//! Terminal admin client for browsing a remote media-asset store.
//! Exposes modules for testing; the binary in `main.rs` is a thin shell
//! around [`app::App`] and the render loop.

use std::sync::atomic::{AtomicBool, Ordering};

pub mod api;
pub mod app;
pub mod config;
pub mod handlers;
pub mod logic;
pub mod model;
pub mod schema;
pub mod services;
pub mod ui;
pub mod utils;

/// Global flag for debug logging (set once at startup from --debug)
pub static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

/// Append a line to the debug log file (no-op unless --debug was passed)
pub fn log_debug(msg: &str) {
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}

/// Image cell info display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Off,         // Name only
    SizeOnly,    // Show asset size
    SizeAndDate, // Show size and upload date
}

impl DisplayMode {
    pub fn as_str(&self) -> &str {
        match self {
            DisplayMode::Off => "Off",
            DisplayMode::SizeOnly => "Size",
            DisplayMode::SizeAndDate => "Size+Date",
        }
    }
}
