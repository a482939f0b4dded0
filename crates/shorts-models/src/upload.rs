//! Upload metadata and result types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Watch URL template for a published video.
const WATCH_URL_PREFIX: &str = "https://youtube.com/watch?v=";

/// Visibility of an uploaded video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PrivacyStatus {
    Public,
    #[default]
    Unlisted,
    Private,
}

impl PrivacyStatus {
    /// Parse from a form field value. Unknown or empty values fall back to
    /// the unlisted default.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "public" => PrivacyStatus::Public,
            "private" => PrivacyStatus::Private,
            _ => PrivacyStatus::Unlisted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrivacyStatus::Public => "public",
            PrivacyStatus::Unlisted => "unlisted",
            PrivacyStatus::Private => "private",
        }
    }
}

impl fmt::Display for PrivacyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Metadata accompanying a video upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadMetadata {
    pub title: String,
    pub description: String,
    pub privacy_status: PrivacyStatus,
    pub tags: Option<Vec<String>>,
    /// Declared MIME type of the payload.
    pub content_type: String,
}

impl UploadMetadata {
    /// Create metadata with the unlisted default and no tags.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            privacy_status: PrivacyStatus::default(),
            tags: None,
            content_type: "video/mp4".to_string(),
        }
    }

    pub fn with_privacy(mut self, privacy_status: PrivacyStatus) -> Self {
        self.privacy_status = privacy_status;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }
}

/// Successful upload acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub video_id: String,
    pub video_url: String,
}

impl UploadResult {
    /// Derive the canonical watch URL from a platform-assigned id.
    pub fn from_video_id(video_id: impl Into<String>) -> Self {
        let video_id = video_id.into();
        let video_url = format!("{}{}", WATCH_URL_PREFIX, video_id);
        Self {
            video_id,
            video_url,
        }
    }
}

/// Split a comma-delimited tag field into trimmed, non-empty tags.
///
/// Returns `None` for an absent or effectively empty field so callers can
/// omit the tags list from upstream metadata entirely.
pub fn parse_tags(value: Option<&str>) -> Option<Vec<String>> {
    let value = value?;
    let tags: Vec<String> = value
        .split(',')
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect();
    if tags.is_empty() {
        None
    } else {
        Some(tags)
    }
}
