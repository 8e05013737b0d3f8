//! Application runtime
//!
//! [`App`] owns the pure [`Model`] plus everything that is not pure:
//! the HTTP client, the channels to the background API worker, and the
//! decoded preview protocol (which is not cloneable and therefore kept
//! out of the model).

pub mod clipboard;
pub mod navigation;
pub mod preview;

use tokio::sync::mpsc;

use crate::api::MediaStoreClient;
use crate::config::Config;
use crate::model::Model;
use crate::services::{self, ApiRequest, ApiResponse};
use crate::ui::icons::IconRenderer;

pub use preview::PreviewOutcome;

pub struct App {
    pub model: Model,

    pub client: MediaStoreClient,
    pub api_tx: mpsc::UnboundedSender<ApiRequest>,
    pub api_rx: mpsc::UnboundedReceiver<ApiResponse>,

    pub preview_tx: mpsc::UnboundedSender<(String, PreviewOutcome)>,
    pub preview_rx: mpsc::UnboundedReceiver<(String, PreviewOutcome)>,

    /// Decoded terminal-graphics protocol for the open preview popup,
    /// keyed by public_id (kept outside the cloneable model)
    pub preview_protocol: Option<(String, ratatui_image::protocol::StatefulProtocol)>,

    pub image_picker: Option<ratatui_image::picker::Picker>,
    pub icon_renderer: IconRenderer,

    pub clipboard_command: Option<String>,
    pub base_url: String,

    /// Grid column count from the last rendered frame (keyboard
    /// navigation needs it for row movement)
    pub grid_columns: usize,
}

impl App {
    /// Build the app and issue the mount fetch (folder listing for root)
    ///
    /// Images intentionally stay empty until the user selects a folder,
    /// a breadcrumb, or Home, so the empty placeholder shows on first
    /// paint.
    pub fn new(
        config: Config,
        icon_renderer: IconRenderer,
        image_picker: Option<ratatui_image::picker::Picker>,
    ) -> Self {
        let client = MediaStoreClient::new(config.base_url.clone(), config.auth_token.clone());
        let (api_tx, api_rx) = services::api::spawn_api_service(client.clone());
        let (preview_tx, preview_rx) = mpsc::unbounded_channel();

        let mut app = Self {
            model: Model::new(),
            client,
            api_tx,
            api_rx,
            preview_tx,
            preview_rx,
            preview_protocol: None,
            image_picker,
            icon_renderer,
            clipboard_command: config.clipboard_command,
            base_url: config.base_url,
            grid_columns: 4,
        };

        // Mount transition: path changed (to root) drives a folder fetch
        navigation::on_path_changed(&mut app.model, &app.api_tx);

        app
    }

    /// Full dashboard remount, the TUI analogue of the original's
    /// client-side route transition
    pub fn refresh(&mut self) {
        navigation::refresh(&mut self.model, &self.api_tx);
        self.preview_protocol = None;
    }
}
