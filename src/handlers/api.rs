//! API Response Handler
//!
//! Applies responses from the background worker to the model. Every
//! response carries the token its fetch was issued with; the model
//! discards replies whose token has been superseded, which is what
//! keeps rapid navigation from being overwritten by a slow reply.

use crate::app::App;
use crate::log_debug;
use crate::services::ApiResponse;

/// Handle an API response from the background worker
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::FoldersResult {
            path,
            token,
            folders,
        } => match folders {
            Ok(folders) => {
                if !app.model.dashboard.apply_folders(token, folders) {
                    log_debug(&format!(
                        "Discarding stale folder listing for path={} token={}",
                        path, token
                    ));
                }
            }
            Err(e) => {
                // Failed folder fetch: log and leave the prior list
                log_debug(&format!(
                    "Folder listing failed for path={}: {}",
                    path, e
                ));
            }
        },

        ApiResponse::ImagesResult {
            path,
            token,
            resources,
        } => match resources {
            Ok(resources) => {
                if !app.model.dashboard.apply_images(token, resources) {
                    log_debug(&format!(
                        "Discarding stale image listing for path={} token={}",
                        path, token
                    ));
                }
            }
            Err(e) => {
                // Failure clears the list; the grid renders the same
                // placeholder it shows for zero results
                log_debug(&format!("Image listing failed for path={}: {}", path, e));
                app.model.dashboard.fail_images(token);
            }
        },
    }
}
