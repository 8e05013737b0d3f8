use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::logic::path::DirRoute;

/// A browsable container of media assets
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Folder {
    pub name: String,
    /// Unique navigation key, e.g. "/events/2024"
    pub path: String,
    pub external_id: String,
}

/// A media asset record, keyed by its public identifier
///
/// Attributes beyond `public_id` are optional on the wire; anything the
/// store sends that we don't type explicitly lands in `extra` and is
/// passed through unmodified for display.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ImageResource {
    pub public_id: String,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub bytes: Option<u64>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub secure_url: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ImageResource {
    /// Last path component of the public id (grid cell label)
    pub fn display_name(&self) -> &str {
        self.public_id
            .rsplit('/')
            .next()
            .unwrap_or(&self.public_id)
    }
}

#[derive(Debug, Serialize)]
struct PathRequest<'a> {
    path: &'a str,
}

#[derive(Debug, Deserialize)]
struct DirListing {
    #[serde(default)]
    folders: Vec<Folder>,
}

#[derive(Debug, Deserialize)]
struct ImageListing {
    #[serde(default)]
    resources: Vec<ImageResource>,
}

/// HTTP client for the media store admin API
///
/// All listing endpoints are JSON-over-POST. A non-2xx status is treated
/// uniformly as failure; the body is not inspected for error detail.
#[derive(Clone)]
pub struct MediaStoreClient {
    base_url: String,
    auth_token: Option<String>,
    client: Client,
}

impl MediaStoreClient {
    pub fn new(base_url: String, auth_token: Option<String>) -> Self {
        Self {
            base_url,
            auth_token,
            client: Client::new(),
        }
    }

    fn post_json(&self, endpoint: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/api/cloudinary/{}", self.base_url, endpoint);
        let mut builder = self.client.post(&url);
        if let Some(ref token) = self.auth_token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// List the folders under `path`
    ///
    /// The root path goes to the `listDir` endpoint, every other path to
    /// `findDir`; both send `{path}` as the request body.
    pub async fn fetch_folders(&self, path: &str) -> Result<Vec<Folder>> {
        let endpoint = match DirRoute::for_path(path) {
            DirRoute::ListRoot => "listDir",
            DirRoute::FindDir => "findDir",
        };

        let response = self
            .post_json(endpoint)
            .json(&PathRequest { path })
            .send()
            .await
            .context("Failed to fetch folder listing")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Folder listing failed: HTTP {}", status);
        }

        let listing: DirListing = response
            .json()
            .await
            .context("Failed to parse folder listing")?;

        Ok(listing.folders)
    }

    /// Fetch the image resources stored under `path`
    pub async fn fetch_images(&self, path: &str) -> Result<Vec<ImageResource>> {
        let response = self
            .post_json("getImages")
            .json(&PathRequest { path })
            .send()
            .await
            .context("Failed to fetch images")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Image listing failed: HTTP {}", status);
        }

        let listing: ImageListing = response
            .json()
            .await
            .context("Failed to parse image listing")?;

        Ok(listing.resources)
    }

    /// Download raw asset bytes (preview popup)
    pub async fn fetch_asset_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to download asset")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Asset download failed: HTTP {}", status);
        }

        let bytes = response
            .bytes()
            .await
            .context("Failed to read asset body")?;

        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_deserializes() {
        let json = r#"{"name": "gala", "path": "/events/2024/gala", "external_id": "f0e1"}"#;
        let folder: Folder = serde_json::from_str(json).expect("valid folder");
        assert_eq!(folder.name, "gala");
        assert_eq!(folder.path, "/events/2024/gala");
        assert_eq!(folder.external_id, "f0e1");
    }

    #[test]
    fn test_image_resource_passes_unknown_attributes_through() {
        let json = r#"{
            "public_id": "events/2024/gala/stage-01",
            "format": "jpg",
            "bytes": 204800,
            "asset_folder": "gala",
            "access_mode": "public"
        }"#;
        let resource: ImageResource = serde_json::from_str(json).expect("valid resource");
        assert_eq!(resource.public_id, "events/2024/gala/stage-01");
        assert_eq!(resource.format.as_deref(), Some("jpg"));
        assert_eq!(
            resource.extra.get("asset_folder"),
            Some(&serde_json::Value::String("gala".to_string()))
        );
        assert_eq!(resource.extra.len(), 2);
    }

    #[test]
    fn test_image_resource_only_public_id_is_required() {
        let resource: ImageResource =
            serde_json::from_str(r#"{"public_id": "x"}"#).expect("minimal resource");
        assert!(resource.format.is_none());
        assert!(resource.extra.is_empty());
    }

    #[test]
    fn test_display_name_is_last_component() {
        let resource = ImageResource {
            public_id: "events/2024/stage-01".to_string(),
            ..Default::default()
        };
        assert_eq!(resource.display_name(), "stage-01");

        let flat = ImageResource {
            public_id: "banner".to_string(),
            ..Default::default()
        };
        assert_eq!(flat.display_name(), "banner");
    }

    #[test]
    fn test_empty_listing_bodies_default() {
        let dirs: DirListing = serde_json::from_str("{}").expect("empty dir listing");
        assert!(dirs.folders.is_empty());
        let imgs: ImageListing = serde_json::from_str("{}").expect("empty image listing");
        assert!(imgs.resources.is_empty());
    }
}
