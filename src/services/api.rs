//! Background API worker
//!
//! Fetches run in background tasks so the render loop never blocks on
//! the network. Requests flow in over an unbounded channel, responses
//! flow back out the same way and are drained by the main loop each
//! frame. In-flight requests are never cancelled; the request tokens
//! carried through to the responses let the model discard stale replies.

use std::collections::{HashSet, VecDeque};
use tokio::sync::mpsc;
use tokio::time::{interval, Duration};

use crate::api::{Folder, ImageResource, MediaStoreClient};
use crate::log_debug;

/// Unique identifier for tracking in-flight requests
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum RequestKey {
    Folders { token: u64 },
    Images { token: u64 },
}

/// API request types
#[derive(Debug, Clone)]
pub enum ApiRequest {
    /// List folders under a path (listDir for root, findDir otherwise)
    FetchFolders { path: String, token: u64 },

    /// List image resources under a path
    FetchImages { path: String, token: u64 },
}

impl ApiRequest {
    fn key(&self) -> RequestKey {
        match self {
            ApiRequest::FetchFolders { token, .. } => RequestKey::Folders { token: *token },
            ApiRequest::FetchImages { token, .. } => RequestKey::Images { token: *token },
        }
    }
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    FoldersResult {
        path: String,
        token: u64,
        folders: Result<Vec<Folder>, anyhow::Error>,
    },

    ImagesResult {
        path: String,
        token: u64,
        resources: Result<Vec<ImageResource>, anyhow::Error>,
    },
}

/// Internal message for tracking completed requests
pub(crate) enum InternalMessage {
    Completed(RequestKey),
}

/// API service worker that processes requests in the background
pub struct ApiService {
    client: MediaStoreClient,
    request_queue: VecDeque<ApiRequest>,
    in_flight: HashSet<RequestKey>,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    completion_tx: mpsc::UnboundedSender<InternalMessage>,
    max_concurrent: usize,
}

impl ApiService {
    pub fn new(
        client: MediaStoreClient,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
        completion_tx: mpsc::UnboundedSender<InternalMessage>,
    ) -> Self {
        Self {
            client,
            request_queue: VecDeque::new(),
            in_flight: HashSet::new(),
            response_tx,
            completion_tx,
            max_concurrent: 4,
        }
    }

    fn enqueue(&mut self, request: ApiRequest) {
        // Tokens make every request unique, so no dedup here: a
        // superseded request still runs to completion and its reply is
        // dropped at the model's token gate instead.
        self.request_queue.push_back(request);
    }

    /// Process the next request from the queue
    fn process_next(&mut self) {
        if self.in_flight.len() >= self.max_concurrent {
            return; // At capacity, wait for some to complete
        }

        let Some(request) = self.request_queue.pop_front() else {
            return; // Queue is empty
        };

        let key = request.key();
        self.in_flight.insert(key.clone());

        let client = self.client.clone();
        let response_tx = self.response_tx.clone();
        let completion_tx = self.completion_tx.clone();

        tokio::spawn(async move {
            let response = Self::execute_request(&client, request).await;
            let _ = response_tx.send(response);
            let _ = completion_tx.send(InternalMessage::Completed(key));
        });
    }

    /// Execute an API request and return the response
    async fn execute_request(client: &MediaStoreClient, request: ApiRequest) -> ApiResponse {
        match request {
            ApiRequest::FetchFolders { path, token } => {
                let folders = client.fetch_folders(&path).await;
                if let Err(ref e) = folders {
                    log_debug(&format!(
                        "Folder fetch failed for path={} token={}: {}",
                        path, token, e
                    ));
                }
                ApiResponse::FoldersResult {
                    path,
                    token,
                    folders,
                }
            }

            ApiRequest::FetchImages { path, token } => {
                let resources = client.fetch_images(&path).await;
                if let Err(ref e) = resources {
                    log_debug(&format!(
                        "Image fetch failed for path={} token={}: {}",
                        path, token, e
                    ));
                }
                ApiResponse::ImagesResult {
                    path,
                    token,
                    resources,
                }
            }
        }
    }
}

/// Spawn the API service worker
pub fn spawn_api_service(
    client: MediaStoreClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<InternalMessage>();

    tokio::spawn(async move {
        let mut service = ApiService::new(client, response_tx, completion_tx);

        // Ticker for processing queue
        let mut tick = interval(Duration::from_millis(10));

        loop {
            tokio::select! {
                // Receive new requests
                Some(request) = request_rx.recv() => {
                    service.enqueue(request);
                }

                // Handle completion notifications
                Some(InternalMessage::Completed(key)) = completion_rx.recv() => {
                    service.in_flight.remove(&key);
                }

                // Process queue at regular intervals
                _ = tick.tick() => {
                    while !service.request_queue.is_empty()
                        && service.in_flight.len() < service.max_concurrent
                    {
                        service.process_next();
                    }
                }
            }
        }
    });

    (request_tx, response_rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_keys_distinguish_tokens() {
        let a = ApiRequest::FetchFolders {
            path: "/".to_string(),
            token: 1,
        };
        let b = ApiRequest::FetchFolders {
            path: "/".to_string(),
            token: 2,
        };
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn test_request_keys_distinguish_kinds() {
        let folders = ApiRequest::FetchFolders {
            path: "/x".to_string(),
            token: 1,
        };
        let images = ApiRequest::FetchImages {
            path: "/x".to_string(),
            token: 1,
        };
        assert_ne!(folders.key(), images.key());
    }
}
