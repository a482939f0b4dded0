//! Video upload handler.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use shorts_models::{parse_tags, PrivacyStatus, UploadMetadata, UploadResult};
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Successful upload response envelope.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub video_url: String,
    pub video_id: String,
}

/// Fields collected from the multipart request.
#[derive(Default)]
struct UploadForm {
    /// Payload bytes plus declared content type; present only when the
    /// `video` part arrived as an actual file.
    video: Option<(Bytes, String)>,
    title: Option<String>,
    description: Option<String>,
    privacy_status: PrivacyStatus,
    tags: Option<Vec<String>>,
}

/// Publish a finished video through the hosting collaborator.
///
/// Linear pipeline: validate → credential check → eager token exchange →
/// streamed upload → URL construction. Input violations cost nothing; no
/// outbound call is made until validation and configuration both pass.
pub async fn upload_video(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let form = read_form(multipart).await?;
    let result = publish(&state, form).await?;

    info!(video_id = %result.video_id, "video published");

    Ok(Json(UploadResponse {
        success: true,
        video_url: result.video_url,
        video_id: result.video_id,
    }))
}

/// Drain the multipart body into an [`UploadForm`]. Unknown parts are
/// ignored; a `video` part without a filename does not count as a file.
async fn read_form(mut multipart: Multipart) -> ApiResult<UploadForm> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::invalid_input(format!("Malformed multipart request: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "video" => {
                if field.file_name().is_none() {
                    continue;
                }
                let content_type = field
                    .content_type()
                    .map(str::to_string)
                    .unwrap_or_else(|| "video/mp4".to_string());
                let bytes = field.bytes().await.map_err(|e| {
                    ApiError::invalid_input(format!("Failed to read video payload: {}", e))
                })?;
                form.video = Some((bytes, content_type));
            }
            "title" => form.title = Some(read_text(field).await?),
            "description" => form.description = Some(read_text(field).await?),
            "privacyStatus" => {
                form.privacy_status = PrivacyStatus::parse(&read_text(field).await?)
            }
            "tags" => form.tags = parse_tags(Some(&read_text(field).await?)),
            _ => {}
        }
    }

    Ok(form)
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> ApiResult<String> {
    field
        .text()
        .await
        .map_err(|e| ApiError::invalid_input(format!("Malformed multipart request: {}", e)))
}

/// Validate the form, then run the credential → token → upload chain.
async fn publish(state: &AppState, form: UploadForm) -> ApiResult<UploadResult> {
    // Validate: no credential or network access until this passes.
    let (payload, content_type) = form
        .video
        .ok_or_else(|| ApiError::invalid_input("Video file is required"))?;

    let title = form.title.filter(|t| !t.trim().is_empty());
    let description = form.description.filter(|d| !d.trim().is_empty());
    let (Some(title), Some(description)) = (title, description) else {
        return Err(ApiError::invalid_input(
            "Title and description are required",
        ));
    };

    // AuthorizeConfig
    let credential = state.credential.as_ref().ok_or_else(|| {
        ApiError::configuration(shorts_youtube::YoutubeError::MissingCredentials.to_string())
    })?;

    // TokenExchange: always eager, so the upload observes a fresh bearer
    // token instead of racing a lazy refresh.
    let token = state.token_exchanger.exchange(credential).await?;

    // StreamUpload
    let mut metadata = UploadMetadata::new(title, description)
        .with_privacy(form.privacy_status)
        .with_content_type(content_type);
    if let Some(tags) = form.tags {
        metadata = metadata.with_tags(tags);
    }

    let video_id = state.video_host.insert(&token, &metadata, payload).await?;

    // Finalize
    Ok(UploadResult::from_video_id(video_id))
}
