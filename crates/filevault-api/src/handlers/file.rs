//! File, image, and folder handlers.

use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::Response;

use filevault_core::error::AppError;
use filevault_service::CreateFileRequest;

use crate::dto::response::FileResponse;
use crate::error::ApiError;
use crate::extractors::path::parse_file_id;
use crate::extractors::{AuthUser, ListFilesQuery};
use crate::handlers::parse_body;
use crate::state::AppState;

/// POST /files
pub async fn create_file(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Bytes,
) -> Result<(StatusCode, Json<FileResponse>), ApiError> {
    let request: CreateFileRequest = parse_body(&body);
    let record = state.file_service.create(&auth, request).await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

/// GET /files/{id}
pub async fn get_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<FileResponse>, ApiError> {
    let id = parse_file_id(&id)?;
    let record = state.file_service.get(&auth, id).await?;
    Ok(Json(record.into()))
}

/// GET /files?parentId=&page=
///
/// A `parentId` that names no record yields an empty page.
pub async fn list_files(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListFilesQuery>,
) -> Result<Json<Vec<FileResponse>>, ApiError> {
    let Some(parent) = query.parent() else {
        return Ok(Json(Vec::new()));
    };

    let records = state
        .file_service
        .list(&auth, parent, query.page())
        .await?;
    Ok(Json(records.into_iter().map(FileResponse::from).collect()))
}

/// PUT /files/{id}/publish
pub async fn publish_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<FileResponse>, ApiError> {
    set_public(state, auth, id, true).await
}

/// PUT /files/{id}/unpublish
pub async fn unpublish_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<FileResponse>, ApiError> {
    set_public(state, auth, id, false).await
}

async fn set_public(
    state: AppState,
    auth: AuthUser,
    id: String,
    is_public: bool,
) -> Result<Json<FileResponse>, ApiError> {
    let id = parse_file_id(&id)?;
    let record = state.file_service.set_public(&auth, id, is_public).await?;
    Ok(Json(record.into()))
}

/// GET /files/{id}/data
pub async fn file_data(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_file_id(&id)?;
    let (record, data) = state.file_service.read_content(&auth, id).await?;

    let content_type = mime_guess::from_path(&record.name).first_or_octet_stream();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type.as_ref())
        .header(header::CONTENT_LENGTH, data.len())
        .body(Body::from(data))
        .map_err(|e| ApiError(AppError::internal(format!("Response build failed: {e}"))))
}
