//! Clipboard copy
//!
//! Writes the selected identifier to the system clipboard through the
//! configured external command (text piped to stdin). The copy control
//! in the model decides whether an activation fires; this module only
//! performs the write and the toast.

use std::io::Write;

use crate::app::App;
use crate::log_debug;
use crate::model::Pane;

impl App {
    /// Value the copy control would write for the current selection:
    /// folder pane → external_id, image pane → public_id
    fn copy_value(&self) -> Option<String> {
        match self.model.dashboard.focus {
            Pane::Folders => self.model.selected_folder().map(|f| f.external_id.clone()),
            Pane::Images => self.model.selected_image().map(|i| i.public_id.clone()),
        }
    }

    /// Activate the copy control for the current selection
    ///
    /// No selection or a still-set copied flag makes this a no-op.
    pub fn copy_selected(&mut self) {
        let value = self.copy_value();
        let Some(text) = self.model.ui.copy.activate(value.as_deref()) else {
            return;
        };

        let Some(ref command) = self.clipboard_command else {
            // Nothing was written, so re-enable the control
            self.model.ui.copy.reset();
            self.model
                .show_toast("Error: clipboard_command not configured".to_string());
            return;
        };

        let result = std::process::Command::new(command)
            .stdin(std::process::Stdio::piped())
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn()
            .and_then(|mut child| {
                if let Some(mut stdin) = child.stdin.take() {
                    stdin.write_all(text.as_bytes())?;
                    // Close stdin to signal EOF
                    drop(stdin);
                }
                Ok(())
            });

        match result {
            Ok(()) => {
                log_debug(&format!("Copied to clipboard via {}: {}", command, text));
                self.model.show_toast("Copied to clipboard".to_string());
            }
            Err(e) => {
                log_debug(&format!(
                    "Failed to execute clipboard command '{}': {}",
                    command, e
                ));
                self.model.ui.copy.reset();
                self.model
                    .show_toast(format!("Error: Failed to copy with '{}'", command));
            }
        }
    }
}
