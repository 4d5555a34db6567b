use axum::{
    extract::Multipart,
    response::Json,
};
use crate::error::ApiError;
use crate::models::UploadResponse;

pub const VIDEO_FIELD: &str = "video";

// No storage yet, so every upload gets the same id
const PLACEHOLDER_VIDEO_ID: i64 = 1;

/// True for any `video/*` media type.
pub fn is_video(content_type: &str) -> bool {
    content_type.starts_with("video/")
}

// POST /api/upload-video - Accept a video file and acknowledge it
pub async fn upload_video(mut multipart: Multipart) -> Result<Json<UploadResponse>, ApiError> {
    while let Some(mut field) = multipart.next_field().await? {
        if field.name() != Some(VIDEO_FIELD) {
            continue;
        }

        let content_type = match field.content_type() {
            Some(ct) if is_video(ct) => ct.to_string(),
            _ => return Err(ApiError::InvalidInput("File must be a video".to_string())),
        };
        let filename = field.file_name().map(str::to_string);

        // Drain the body so oversized uploads hit the request limit.
        let mut received = 0usize;
        while let Some(chunk) = field.chunk().await? {
            received += chunk.len();
        }

        tracing::info!(
            "Received video {:?} ({}, {} bytes)",
            filename,
            content_type,
            received
        );

        return Ok(Json(UploadResponse {
            message: "Video uploaded successfully".to_string(),
            video_id: PLACEHOLDER_VIDEO_ID,
            filename,
            content_type,
        }));
    }

    Err(ApiError::InvalidInput(format!("Missing form field \"{}\"", VIDEO_FIELD)))
}
