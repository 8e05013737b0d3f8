//! Image preview
//!
//! Opens a popup for the selected image resource: a background task
//! downloads the asset bytes, decodes and downsizes them, and builds a
//! terminal graphics protocol. The result arrives over a channel and is
//! applied only if the popup still shows the same asset; otherwise it
//! is dropped as stale.

use anyhow::Result;

use crate::app::App;
use crate::log_debug;
use crate::model::{Pane, PreviewMetadata, PreviewPopup, PreviewStatus};

/// 20MB download cap for previews
const MAX_PREVIEW_BYTES: usize = 20 * 1024 * 1024;

/// Result of a background preview load
pub enum PreviewOutcome {
    Ready {
        protocol: ratatui_image::protocol::StatefulProtocol,
        metadata: PreviewMetadata,
    },
    Failed {
        reason: String,
    },
}

impl App {
    /// Open a preview popup for the selected image
    pub fn open_preview(&mut self) {
        if self.model.dashboard.focus != Pane::Images {
            return;
        }
        let Some(resource) = self.model.selected_image().cloned() else {
            return;
        };

        // Drop any protocol left over from a previous popup
        self.preview_protocol = None;

        let Some(url) = resource.secure_url.clone() else {
            self.model.ui.preview = Some(PreviewPopup {
                resource,
                status: PreviewStatus::Failed("No delivery URL on this asset".to_string()),
            });
            return;
        };

        let Some(picker) = self.image_picker.clone() else {
            self.model.ui.preview = Some(PreviewPopup {
                resource,
                status: PreviewStatus::Failed("Image preview disabled in config".to_string()),
            });
            return;
        };

        let public_id = resource.public_id.clone();
        self.model.ui.preview = Some(PreviewPopup {
            resource,
            status: PreviewStatus::Loading,
        });

        let client = self.client.clone();
        let preview_tx = self.preview_tx.clone();

        tokio::spawn(async move {
            log_debug(&format!("Background: loading preview for {}", public_id));
            let outcome = match load_preview(&client, &url, picker).await {
                Ok((protocol, metadata)) => PreviewOutcome::Ready { protocol, metadata },
                Err(e) => PreviewOutcome::Failed {
                    reason: e.to_string(),
                },
            };
            let _ = preview_tx.send((public_id, outcome));
        });
    }

    /// Close the preview popup and discard its protocol
    pub fn close_preview(&mut self) {
        self.model.ui.preview = None;
        self.preview_protocol = None;
    }

    /// Apply a background preview result
    ///
    /// Dropped when the popup has been closed or switched to a
    /// different asset since the load started.
    pub fn apply_preview_outcome(&mut self, public_id: String, outcome: PreviewOutcome) {
        let Some(ref mut popup) = self.model.ui.preview else {
            return;
        };
        if popup.resource.public_id != public_id {
            log_debug(&format!("Dropping stale preview result for {}", public_id));
            return;
        }

        match outcome {
            PreviewOutcome::Ready { protocol, metadata } => {
                popup.status = PreviewStatus::Ready(metadata);
                self.preview_protocol = Some((public_id, protocol));
            }
            PreviewOutcome::Failed { reason } => {
                popup.status = PreviewStatus::Failed(reason);
                self.preview_protocol = None;
            }
        }
    }
}

/// Download, decode and downsize an asset into a render protocol
async fn load_preview(
    client: &crate::api::MediaStoreClient,
    url: &str,
    picker: ratatui_image::picker::Picker,
) -> Result<(ratatui_image::protocol::StatefulProtocol, PreviewMetadata)> {
    let bytes = client.fetch_asset_bytes(url).await?;
    let file_size = bytes.len() as u64;
    if bytes.len() > MAX_PREVIEW_BYTES {
        anyhow::bail!("Asset too large for preview ({})", crate::utils::format_bytes(file_size));
    }

    // Decode off the async runtime
    let img = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes))
        .await
        .map_err(|e| anyhow::anyhow!("Decode task failed: {}", e))??;

    let dimensions = (img.width(), img.height());
    let color = match img.color() {
        image::ColorType::L8 => "Grayscale 8-bit",
        image::ColorType::La8 => "Grayscale+Alpha 8-bit",
        image::ColorType::Rgb8 => "RGB 8-bit",
        image::ColorType::Rgba8 => "RGBA 8-bit",
        image::ColorType::L16 => "Grayscale 16-bit",
        image::ColorType::La16 => "Grayscale+Alpha 16-bit",
        image::ColorType::Rgb16 => "RGB 16-bit",
        image::ColorType::Rgba16 => "RGBA 16-bit",
        _ => "Unknown",
    };

    // Pre-downscale very large assets so protocol building stays fast.
    // ~200x60 cells is a generous upper bound for a terminal.
    let font_size = picker.font_size();
    let max_width = 200 * font_size.0 as u32;
    let max_height = 60 * font_size.1 as u32;

    let processed = if img.width() > max_width || img.height() > max_height {
        let scale = (img.width() as f32 / max_width as f32)
            .max(img.height() as f32 / max_height as f32);
        let filter = if scale > 4.0 {
            image::imageops::FilterType::Triangle
        } else {
            image::imageops::FilterType::CatmullRom
        };
        img.resize(max_width, max_height, filter)
    } else {
        img
    };

    let protocol = picker.new_resize_protocol(processed);

    Ok((
        protocol,
        PreviewMetadata {
            dimensions: Some(dimensions),
            color: Some(color.to_string()),
            file_size,
        },
    ))
}
