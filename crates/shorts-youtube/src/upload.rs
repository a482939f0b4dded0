//! Video upload via the YouTube Data API v3.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shorts_models::UploadMetadata;
use tracing::{debug, info};

use crate::error::{YoutubeError, YoutubeResult};
use crate::oauth::AccessToken;

const DEFAULT_UPLOAD_BASE_URL: &str = "https://www.googleapis.com/upload/youtube/v3";

/// Category id sent with every upload. 22 = People & Blogs, which suits
/// Shorts.
const CATEGORY_ID: &str = "22";

/// Capability interface over the hosting collaborator's insert operation.
///
/// Returns the platform-assigned video id. The payload is handed over as
/// [`Bytes`] so the single in-memory copy read from the request is shared,
/// not duplicated, on its way to the wire.
#[async_trait]
pub trait VideoHost: Send + Sync {
    async fn insert(
        &self,
        token: &AccessToken,
        metadata: &UploadMetadata,
        payload: Bytes,
    ) -> YoutubeResult<String>;
}

/// Snippet + status metadata submitted alongside the payload.
#[derive(Debug, Serialize)]
struct VideoResource {
    snippet: VideoSnippet,
    status: VideoStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VideoSnippet {
    title: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<String>>,
    category_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VideoStatus {
    privacy_status: String,
    self_declared_made_for_kids: bool,
}

impl VideoResource {
    fn from_metadata(metadata: &UploadMetadata) -> Self {
        Self {
            snippet: VideoSnippet {
                title: metadata.title.clone(),
                description: metadata.description.clone(),
                tags: metadata.tags.clone(),
                category_id: CATEGORY_ID.to_string(),
            },
            status: VideoStatus {
                privacy_status: metadata.privacy_status.as_str().to_string(),
                self_declared_made_for_kids: false,
            },
        }
    }
}

/// Uploaded video resource as echoed back by the API.
#[derive(Debug, Deserialize)]
struct UploadedVideo {
    #[serde(default)]
    id: Option<String>,
}

/// Live client speaking the two-step resumable upload protocol.
pub struct YouTubeClient {
    upload_base_url: String,
    client: Client,
}

impl YouTubeClient {
    pub fn new() -> Self {
        Self {
            upload_base_url: DEFAULT_UPLOAD_BASE_URL.to_string(),
            client: Client::new(),
        }
    }

    /// Override the upload base URL (used by tests against a mock server).
    pub fn with_upload_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.upload_base_url = base_url.into();
        self
    }

    /// Open a resumable upload session and return the session URL.
    async fn init_session(
        &self,
        token: &AccessToken,
        metadata: &UploadMetadata,
        payload_len: usize,
    ) -> YoutubeResult<String> {
        let init_url = format!(
            "{}/videos?uploadType=resumable&part=snippet,status",
            self.upload_base_url
        );

        let resource = VideoResource::from_metadata(metadata);

        let response = self
            .client
            .post(&init_url)
            .bearer_auth(token.as_str())
            .header("X-Upload-Content-Type", &metadata.content_type)
            .header("X-Upload-Content-Length", payload_len.to_string())
            .json(&resource)
            .send()
            .await
            .map_err(|e| YoutubeError::request_failed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(YoutubeError::ApiStatus { status, body });
        }

        response
            .headers()
            .get("location")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| {
                YoutubeError::request_failed("missing upload session URL in response")
            })
    }
}

impl Default for YouTubeClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VideoHost for YouTubeClient {
    async fn insert(
        &self,
        token: &AccessToken,
        metadata: &UploadMetadata,
        payload: Bytes,
    ) -> YoutubeResult<String> {
        let payload_len = payload.len();
        let session_url = self.init_session(token, metadata, payload_len).await?;
        debug!(bytes = payload_len, "opened upload session");

        let response = self
            .client
            .put(&session_url)
            .bearer_auth(token.as_str())
            .header("Content-Type", &metadata.content_type)
            .body(payload)
            .send()
            .await
            .map_err(|e| YoutubeError::request_failed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(YoutubeError::ApiStatus { status, body });
        }

        let uploaded: UploadedVideo = response
            .json()
            .await
            .map_err(|e| YoutubeError::request_failed(format!("invalid upload response: {}", e)))?;

        let video_id = match uploaded.id {
            Some(id) if !id.is_empty() => id,
            _ => return Err(YoutubeError::MissingVideoId),
        };

        info!(video_id = %video_id, "video upload acknowledged");
        Ok(video_id)
    }
}

/// Deterministic host for tests; returns a fixed id and counts calls.
pub struct RecordingVideoHost {
    video_id: Option<String>,
    calls: std::sync::atomic::AtomicUsize,
}

impl RecordingVideoHost {
    /// Host that acknowledges every upload with the given id.
    pub fn succeeding(video_id: impl Into<String>) -> Self {
        Self {
            video_id: Some(video_id.into()),
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Host whose response carries no identifier.
    pub fn without_id() -> Self {
        Self {
            video_id: None,
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[async_trait]
impl VideoHost for RecordingVideoHost {
    async fn insert(
        &self,
        _token: &AccessToken,
        _metadata: &UploadMetadata,
        _payload: Bytes,
    ) -> YoutubeResult<String> {
        self.calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        match &self.video_id {
            Some(id) => Ok(id.clone()),
            None => Err(YoutubeError::MissingVideoId),
        }
    }
}
