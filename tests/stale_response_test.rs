//! Tests for stale-response handling during rapid navigation
//!
//! In-flight fetches are never cancelled, so a slow reply for an old
//! path can arrive after the user has navigated on. Each fetch carries
//! a token from a monotonically increasing counter; only the reply
//! matching the latest token for its state variable is applied.
//!
//! Scenario this guards against:
//! 1. User opens /events (folder fetch token 1, image fetch token 1)
//! 2. User immediately opens /archive (tokens 2)
//! 3. The /events replies resolve last (slow path on the server)
//! 4. Without the gate, /archive's view would show /events' contents

use tokio::sync::mpsc;

use mediatui::api::{Folder, ImageResource};
use mediatui::app::navigation;
use mediatui::model::Model;
use mediatui::services::ApiRequest;

fn folder(name: &str, path: &str) -> Folder {
    Folder {
        name: name.to_string(),
        path: path.to_string(),
        external_id: format!("ext-{}", name),
    }
}

fn image(public_id: &str) -> ImageResource {
    ImageResource {
        public_id: public_id.to_string(),
        ..Default::default()
    }
}

/// Collect the issued (kind, path, token) triples for inspection
fn drain(rx: &mut mpsc::UnboundedReceiver<ApiRequest>) -> Vec<ApiRequest> {
    let mut requests = Vec::new();
    while let Ok(request) = rx.try_recv() {
        requests.push(request);
    }
    requests
}

fn image_token_for(requests: &[ApiRequest], wanted_path: &str) -> u64 {
    requests
        .iter()
        .find_map(|r| match r {
            ApiRequest::FetchImages { path, token } if path == wanted_path => Some(*token),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no image fetch for {}", wanted_path))
}

fn folder_token_for(requests: &[ApiRequest], wanted_path: &str) -> u64 {
    requests
        .iter()
        .find_map(|r| match r {
            ApiRequest::FetchFolders { path, token } if path == wanted_path => Some(*token),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no folder fetch for {}", wanted_path))
}

/// Test: a slow folder reply from a superseded navigation is discarded
#[test]
fn test_late_folder_reply_cannot_overwrite_newer_navigation() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut model = Model::new();

    model.dashboard.set_path("/events");
    navigation::on_path_changed(&mut model, &tx);
    model.dashboard.set_path("/archive");
    navigation::on_path_changed(&mut model, &tx);

    let requests = drain(&mut rx);
    let events_token = folder_token_for(&requests, "/events");
    let archive_token = folder_token_for(&requests, "/archive");

    // The /archive reply lands first
    assert!(model
        .dashboard
        .apply_folders(archive_token, vec![folder("tapes", "/archive/tapes")]));

    // The slow /events reply straggles in afterwards and must not win
    assert!(!model
        .dashboard
        .apply_folders(events_token, vec![folder("gala", "/events/gala")]));

    assert_eq!(model.dashboard.folders.len(), 1);
    assert_eq!(model.dashboard.folders[0].name, "tapes");
}

/// Test: image replies are gated independently of folder replies
#[test]
fn test_late_image_reply_is_discarded() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut model = Model::new();

    model.dashboard.set_path("/events");
    navigation::request_images(&mut model, &tx);
    model.dashboard.set_path("/archive");
    navigation::request_images(&mut model, &tx);

    let requests = drain(&mut rx);
    let events_token = image_token_for(&requests, "/events");
    let archive_token = image_token_for(&requests, "/archive");

    assert!(model
        .dashboard
        .apply_images(archive_token, vec![image("archive/tape-01")]));
    assert!(!model
        .dashboard
        .apply_images(events_token, vec![image("events/gala-01")]));

    assert_eq!(model.dashboard.images.len(), 1);
    assert_eq!(model.dashboard.images[0].public_id, "archive/tape-01");
}

/// Test: a stale failure cannot clear a fresher image list
#[test]
fn test_stale_image_failure_does_not_clear_fresh_list() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut model = Model::new();

    model.dashboard.set_path("/events");
    navigation::request_images(&mut model, &tx);
    model.dashboard.set_path("/archive");
    navigation::request_images(&mut model, &tx);

    let requests = drain(&mut rx);
    let events_token = image_token_for(&requests, "/events");
    let archive_token = image_token_for(&requests, "/archive");

    assert!(model.dashboard.apply_images(archive_token, vec![image("a")]));

    // The /events fetch failed, but it is no longer the latest
    assert!(!model.dashboard.fail_images(events_token));
    assert_eq!(model.dashboard.images.len(), 1);
}

/// Test: empty result and failure of the current fetch render the same
#[test]
fn test_empty_and_failed_current_fetch_are_equivalent() {
    let (tx, mut rx) = mpsc::unbounded_channel();

    // Run the same navigation twice, resolving once with an empty
    // listing and once with a failure
    let mut via_empty = Model::new();
    via_empty.dashboard.set_path("/empty");
    navigation::request_images(&mut via_empty, &tx);
    let token = image_token_for(&drain(&mut rx), "/empty");
    assert!(via_empty.dashboard.apply_images(token, Vec::new()));

    let mut via_failure = Model::new();
    via_failure.dashboard.set_path("/empty");
    navigation::request_images(&mut via_failure, &tx);
    let token = image_token_for(&drain(&mut rx), "/empty");
    assert!(via_failure.dashboard.fail_images(token));

    assert_eq!(via_empty.dashboard.images.len(), 0);
    assert_eq!(via_failure.dashboard.images.len(), 0);
    assert_eq!(
        via_empty.dashboard.selected_image,
        via_failure.dashboard.selected_image
    );
}

/// Test: replies from before a refresh cannot land after the remount
#[test]
fn test_pre_refresh_reply_stays_stale_after_remount() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut model = Model::new();

    model.dashboard.set_path("/events");
    navigation::request_images(&mut model, &tx);
    let pre_refresh_token = image_token_for(&drain(&mut rx), "/events");

    navigation::refresh(&mut model, &tx);
    drain(&mut rx);

    // The pre-refresh reply arrives after the remount
    assert!(!model
        .dashboard
        .apply_images(pre_refresh_token, vec![image("ghost")]));
    assert!(model.dashboard.images.is_empty());

    // And the remount's own image fetch still works
    navigation::request_images(&mut model, &tx);
    let token = image_token_for(&drain(&mut rx), "/");
    assert!(model.dashboard.apply_images(token, vec![image("fresh")]));
    assert_eq!(model.dashboard.images[0].public_id, "fresh");
}
