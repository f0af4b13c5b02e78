use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};
use sqlx::{Pool, Postgres};

use crate::error_convert::ValidateRequest;
use crate::repo;
use shared_types::{AppError, CreateHearingRequest, HearingResponse, UpdateHearingRequest};

/// POST /api/cases/{case_id}/hearings
#[utoipa::path(
    post,
    path = "/api/cases/{case_id}/hearings",
    request_body = CreateHearingRequest,
    params(("case_id" = i64, Path, description = "Case ID")),
    responses(
        (status = 201, description = "Hearing created", body = HearingResponse),
        (status = 400, description = "Invalid request", body = AppError),
        (status = 404, description = "Case not found", body = AppError)
    ),
    tag = "hearings"
)]
pub async fn create_hearing(
    State(pool): State<Pool<Postgres>>,
    Path(case_id): Path<i64>,
    Json(body): Json<CreateHearingRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<HearingResponse>), AppError> {
    body.validate_request()?;

    if !repo::case::exists(&pool, case_id).await? {
        return Err(AppError::not_found(format!(
            "Case with ID {case_id} not found"
        )));
    }

    let hearing = repo::hearing::create(&pool, case_id, body).await?;
    let location = format!("/api/cases/{case_id}/hearings/{}", hearing.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(HearingResponse::from(hearing)),
    ))
}

/// PUT /api/cases/{case_id}/hearings/{hearing_id}
///
/// The hearing must belong to the case named in the path; the ownership
/// check runs before any field is touched.
#[utoipa::path(
    put,
    path = "/api/cases/{case_id}/hearings/{hearing_id}",
    request_body = UpdateHearingRequest,
    params(
        ("case_id" = i64, Path, description = "Case ID"),
        ("hearing_id" = i64, Path, description = "Hearing ID")
    ),
    responses(
        (status = 204, description = "Hearing updated"),
        (status = 400, description = "Invalid request or wrong case", body = AppError),
        (status = 404, description = "Not found", body = AppError)
    ),
    tag = "hearings"
)]
pub async fn update_hearing(
    State(pool): State<Pool<Postgres>>,
    Path((case_id, hearing_id)): Path<(i64, i64)>,
    Json(body): Json<UpdateHearingRequest>,
) -> Result<StatusCode, AppError> {
    body.validate_request()?;

    repo::hearing::update(&pool, case_id, hearing_id, &body).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/cases/{case_id}/hearings/{hearing_id}
#[utoipa::path(
    delete,
    path = "/api/cases/{case_id}/hearings/{hearing_id}",
    params(
        ("case_id" = i64, Path, description = "Case ID"),
        ("hearing_id" = i64, Path, description = "Hearing ID")
    ),
    responses(
        (status = 204, description = "Hearing deleted"),
        (status = 400, description = "Hearing belongs to another case", body = AppError),
        (status = 404, description = "Not found", body = AppError)
    ),
    tag = "hearings"
)]
pub async fn delete_hearing(
    State(pool): State<Pool<Postgres>>,
    Path((case_id, hearing_id)): Path<(i64, i64)>,
) -> Result<StatusCode, AppError> {
    repo::hearing::soft_delete(&pool, case_id, hearing_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
