use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::schools::dtos::{CreateSchoolDto, SchoolResponseDto, UpdateSchoolDto};
use crate::features::schools::services::SchoolService;
use crate::shared::types::{ApiResponse, MessageData};

/// List all schools
#[utoipa::path(
    get,
    path = "/api/v1/school",
    responses(
        (status = 200, description = "List of schools", body = ApiResponse<Vec<SchoolResponseDto>>),
        (status = 500, description = "Database error", body = ApiResponse<MessageData>)
    ),
    tag = "schools"
)]
pub async fn list_schools(
    State(service): State<Arc<SchoolService>>,
) -> Result<Json<ApiResponse<Vec<SchoolResponseDto>>>> {
    let schools = service.list().await?;
    Ok(Json(ApiResponse::success(schools)))
}

/// Get school by uuid
#[utoipa::path(
    get,
    path = "/api/v1/school/{id}",
    params(
        ("id" = String, Path, description = "School UUID (uppercase)")
    ),
    responses(
        (status = 200, description = "School found", body = ApiResponse<SchoolResponseDto>),
        (status = 404, description = "School not found", body = ApiResponse<MessageData>)
    ),
    tag = "schools"
)]
pub async fn get_school(
    State(service): State<Arc<SchoolService>>,
    AppPath(id): AppPath<String>,
) -> Result<Json<ApiResponse<SchoolResponseDto>>> {
    let school = service.get(&id).await?;
    Ok(Json(ApiResponse::success(school)))
}

/// Create a new school
#[utoipa::path(
    post,
    path = "/api/v1/school",
    request_body = CreateSchoolDto,
    responses(
        (status = 201, description = "School created", body = ApiResponse<SchoolResponseDto>),
        (status = 413, description = "Request body too large", body = ApiResponse<MessageData>),
        (status = 422, description = "Invalid request body", body = ApiResponse<MessageData>)
    ),
    tag = "schools"
)]
pub async fn create_school(
    State(service): State<Arc<SchoolService>>,
    AppJson(dto): AppJson<CreateSchoolDto>,
) -> Result<(StatusCode, Json<ApiResponse<SchoolResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let school = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(school))))
}

/// Update a school
///
/// Only the supplied attributes are overwritten. Identity and timestamps in
/// the body are ignored; the path identity is authoritative.
#[utoipa::path(
    put,
    path = "/api/v1/school/{id}",
    params(
        ("id" = String, Path, description = "School UUID (uppercase)")
    ),
    request_body = UpdateSchoolDto,
    responses(
        (status = 200, description = "School updated", body = ApiResponse<SchoolResponseDto>),
        (status = 404, description = "School not found", body = ApiResponse<MessageData>),
        (status = 422, description = "Invalid request body", body = ApiResponse<MessageData>)
    ),
    tag = "schools"
)]
pub async fn update_school(
    State(service): State<Arc<SchoolService>>,
    AppPath(id): AppPath<String>,
    AppJson(dto): AppJson<UpdateSchoolDto>,
) -> Result<Json<ApiResponse<SchoolResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let school = service.update(&id, dto).await?;
    Ok(Json(ApiResponse::success(school)))
}

/// Delete a school (hard delete)
#[utoipa::path(
    delete,
    path = "/api/v1/school/{id}",
    params(
        ("id" = String, Path, description = "School UUID (uppercase)")
    ),
    responses(
        (status = 200, description = "School deleted", body = ApiResponse<MessageData>),
        (status = 404, description = "School not found", body = ApiResponse<MessageData>)
    ),
    tag = "schools"
)]
pub async fn delete_school(
    State(service): State<Arc<SchoolService>>,
    AppPath(id): AppPath<String>,
) -> Result<Json<ApiResponse<MessageData>>> {
    service.delete(&id).await?;
    Ok(Json(ApiResponse::success(MessageData::new("School deleted"))))
}
