//! Media API Handlers
//!
//! Files land under `{work_dir}/uploads` with a UUID filename; the
//! original name survives only as metadata. Identical content (by SHA-256)
//! reuses the earlier row instead of storing a second copy.

use axum::{
    Json,
    extract::{Multipart, Path, State},
    response::IntoResponse,
};
use http::{StatusCode, header};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::auth::{CurrentUser, permissions};
use crate::core::ServerState;
use crate::db::models::Media;
use crate::db::repository::{MediaInsert, MediaRepository};
use crate::utils::{AppError, AppResult};
use shared::response::DeletedBody;

/// Maximum upload size (5MB)
const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Accepted image content types
const SUPPORTED_TYPES: &[&str] = &["image/png", "image/jpeg", "image/webp"];

fn content_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// POST /media - multipart upload of a single image file
pub async fn upload(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    mut multipart: Multipart,
) -> AppResult<Json<Media>> {
    current_user.require(permissions::MEDIA_MANAGE)?;

    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::invalid(format!("Malformed multipart body: {}", e)))?
        .ok_or_else(|| AppError::invalid("Thiếu tệp tải lên"))?;

    let original_name = field.file_name().unwrap_or("unnamed").to_string();
    let mime_type = field
        .content_type()
        .map(|m| m.to_string())
        .unwrap_or_else(|| {
            mime_guess::from_path(&original_name)
                .first_or_octet_stream()
                .to_string()
        });

    if !SUPPORTED_TYPES.contains(&mime_type.as_str()) {
        return Err(AppError::validation(format!(
            "Định dạng tệp không được hỗ trợ: {}",
            mime_type
        )));
    }

    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::invalid(format!("Failed to read upload: {}", e)))?;

    if data.is_empty() {
        return Err(AppError::validation("Tệp tải lên rỗng"));
    }
    if data.len() > MAX_FILE_SIZE {
        return Err(AppError::validation("Tệp vượt quá giới hạn 5MB"));
    }

    let repo = MediaRepository::new(state.get_db());

    // Content-identical upload: hand back the existing row
    let hash = content_hash(&data);
    if let Some(existing) = repo.find_by_hash(&hash).await? {
        tracing::info!(media_id = existing.id, "Reused media by content hash");
        return Ok(Json(existing));
    }

    let extension = std::path::Path::new(&original_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("bin");
    let filename = format!("{}.{}", Uuid::new_v4(), extension);

    let uploads_dir = state.uploads_dir();
    tokio::fs::create_dir_all(&uploads_dir)
        .await
        .map_err(|e| AppError::internal(format!("Failed to create uploads dir: {}", e)))?;

    let file_path = uploads_dir.join(&filename);
    tokio::fs::write(&file_path, &data)
        .await
        .map_err(|e| AppError::internal(format!("Failed to store upload: {}", e)))?;

    let media = repo
        .create(MediaInsert {
            filename: filename.clone(),
            original_name,
            mime_type,
            size: data.len() as i64,
            path: file_path.to_string_lossy().to_string(),
            url: format!("/media/files/{}", filename),
            hash,
            uploader_id: current_user.id,
        })
        .await?;

    tracing::info!(media_id = media.id, size = media.size, "Stored uploaded media");
    Ok(Json(media))
}

/// GET /media - console listing
pub async fn list(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<Media>>> {
    current_user.require(permissions::MEDIA_MANAGE)?;

    let repo = MediaRepository::new(state.get_db());
    let media = repo.find_all().await?;
    Ok(Json(media))
}

/// GET /media/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Media>> {
    current_user.require(permissions::MEDIA_MANAGE)?;

    let repo = MediaRepository::new(state.get_db());
    let media = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Không tìm thấy tệp {}", id)))?;
    Ok(Json(media))
}

/// DELETE /media/{id} - soft delete the row and remove the file; catalog
/// references are left dangling and resolved at display time
pub async fn delete(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<DeletedBody>> {
    current_user.require(permissions::MEDIA_MANAGE)?;

    let repo = MediaRepository::new(state.get_db());
    let media = repo.delete(id).await?;

    if let Err(e) = tokio::fs::remove_file(&media.path).await {
        tracing::warn!(media_id = id, error = %e, "Failed to remove media file");
    }
    Ok(Json(DeletedBody::ok()))
}

/// GET /media/files/{filename} - serve a stored file (public)
pub async fn serve_file(
    State(state): State<ServerState>,
    Path(filename): Path<String>,
) -> impl IntoResponse {
    // Reject path traversal
    if filename.is_empty()
        || filename.contains("..")
        || filename.contains('/')
        || filename.contains('\\')
    {
        return (StatusCode::BAD_REQUEST, "Invalid filename").into_response();
    }

    let file_path = state.uploads_dir().join(&filename);
    match tokio::fs::read(&file_path).await {
        Ok(content) => {
            let mime = mime_guess::from_path(&filename)
                .first_or_octet_stream()
                .to_string();
            (StatusCode::OK, [(header::CONTENT_TYPE, mime)], content).into_response()
        }
        Err(_) => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}
