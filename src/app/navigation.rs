//! Navigation orchestration
//!
//! Free functions tying path changes to the fetches they trigger. They
//! take the model and the request channel instead of the whole [`App`]
//! so tests can drive them with a bare channel and inspect exactly
//! which requests each transition enqueues.
//!
//! The folder fetch and the image fetch for a navigation are
//! independent requests; each carries its own token and each state
//! variable is latest-token-wins.
//!
//! [`App`]: crate::app::App

use tokio::sync::mpsc;

use crate::log_debug;
use crate::logic::path;
use crate::model::{Model, Pane};
use crate::services::ApiRequest;

/// Path-changed transition (including on mount): fetch the folder list
pub fn on_path_changed(model: &mut Model, api_tx: &mpsc::UnboundedSender<ApiRequest>) {
    let token = model.dashboard.begin_folder_fetch();
    let _ = api_tx.send(ApiRequest::FetchFolders {
        path: model.dashboard.current_path.clone(),
        token,
    });
}

/// Fetch the image resources for the current path
pub fn request_images(model: &mut Model, api_tx: &mpsc::UnboundedSender<ApiRequest>) {
    let token = model.dashboard.begin_image_fetch();
    let _ = api_tx.send(ApiRequest::FetchImages {
        path: model.dashboard.current_path.clone(),
        token,
    });
}

/// Enter the selected folder: new path, folder fetch, image fetch
pub fn enter_selected_folder(model: &mut Model, api_tx: &mpsc::UnboundedSender<ApiRequest>) {
    if model.dashboard.focus != Pane::Folders {
        return;
    }
    let Some(folder) = model.selected_folder() else {
        return;
    };
    let new_path = folder.path.clone();
    log_debug(&format!("Entering folder path={}", new_path));

    model.dashboard.set_path(new_path);
    on_path_changed(model, api_tx);
    request_images(model, api_tx);
}

/// Breadcrumb-selected transition: truncate the path at the selected
/// segment, then refetch
///
/// An out-of-range index resolves to the unchanged path (policy, not
/// failure) and triggers nothing.
pub fn select_breadcrumb(
    model: &mut Model,
    api_tx: &mpsc::UnboundedSender<ApiRequest>,
    index: usize,
) {
    let new_path = path::truncate_to_segment(&model.dashboard.breadcrumbs, index);
    if new_path == model.dashboard.current_path {
        return;
    }

    model.dashboard.set_path(new_path);
    on_path_changed(model, api_tx);
    request_images(model, api_tx);
}

/// Navigate one level up (no-op at the root)
pub fn go_to_parent(model: &mut Model, api_tx: &mpsc::UnboundedSender<ApiRequest>) {
    let new_path = path::parent_path(&model.dashboard.breadcrumbs);
    if new_path == model.dashboard.current_path {
        return;
    }

    model.dashboard.set_path(new_path);
    on_path_changed(model, api_tx);
    request_images(model, api_tx);
}

/// Home control: reset to root and fetch fresh root images
///
/// Resets path, breadcrumbs and images, then issues exactly one image
/// fetch for root; the path change independently drives the folder
/// fetch. This is the only action that discards already-fetched state.
pub fn go_home(model: &mut Model, api_tx: &mpsc::UnboundedSender<ApiRequest>) {
    model.dashboard.reset_to_root();
    on_path_changed(model, api_tx);
    request_images(model, api_tx);
}

/// Full dashboard remount: initial state, mount fetches reissued
///
/// Token counters survive the remount (see
/// [`DashboardModel::reset_for_remount`]), so replies to pre-refresh
/// fetches stay stale.
///
/// [`DashboardModel::reset_for_remount`]: crate::model::DashboardModel::reset_for_remount
pub fn refresh(model: &mut Model, api_tx: &mpsc::UnboundedSender<ApiRequest>) {
    model.dashboard.reset_for_remount();
    on_path_changed(model, api_tx);
}
