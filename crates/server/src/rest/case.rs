use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};
use sqlx::{Pool, Postgres};

use crate::error_convert::ValidateRequest;
use crate::repo;
use shared_types::{
    AppError, CaseDetailResponse, CasePartyResponse, CaseResponse, CreateCaseRequest,
    HearingResponse, UpdateCaseRequest,
};

/// Verify that a referenced judge resolves to a live row before a case
/// write takes a dependency on it.
async fn check_judge_reference(
    pool: &Pool<Postgres>,
    judge_id: Option<i64>,
) -> Result<(), AppError> {
    if let Some(id) = judge_id {
        repo::judge::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Judge with ID {id} not found")))?;
    }
    Ok(())
}

/// GET /api/cases
#[utoipa::path(
    get,
    path = "/api/cases",
    responses((status = 200, description = "List of cases", body = Vec<CaseResponse>)),
    tag = "cases"
)]
pub async fn list_cases(
    State(pool): State<Pool<Postgres>>,
) -> Result<Json<Vec<CaseResponse>>, AppError> {
    let cases = repo::case::list(&pool).await?;
    let responses: Vec<CaseResponse> = cases.into_iter().map(CaseResponse::from).collect();
    Ok(Json(responses))
}

/// GET /api/cases/{id}
///
/// Case detail with the judge name resolved and the live hearings and
/// party links eagerly loaded.
#[utoipa::path(
    get,
    path = "/api/cases/{id}",
    params(("id" = i64, Path, description = "Case ID")),
    responses(
        (status = 200, description = "Case detail", body = CaseDetailResponse),
        (status = 404, description = "Not found", body = AppError)
    ),
    tag = "cases"
)]
pub async fn get_case(
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<i64>,
) -> Result<Json<CaseDetailResponse>, AppError> {
    let row = repo::case::find_with_judge(&pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Case with ID {id} not found")))?;

    let hearings = repo::hearing::list_by_case(&pool, id).await?;
    let parties = repo::case_party::list_by_case(&pool, id).await?;

    let mut detail = CaseDetailResponse::from(row);
    detail.hearings = hearings.into_iter().map(HearingResponse::from).collect();
    detail.parties = parties.into_iter().map(CasePartyResponse::from).collect();
    Ok(Json(detail))
}

/// POST /api/cases
#[utoipa::path(
    post,
    path = "/api/cases",
    request_body = CreateCaseRequest,
    responses(
        (status = 201, description = "Case created", body = CaseResponse),
        (status = 400, description = "Invalid request", body = AppError),
        (status = 404, description = "Assigned judge not found", body = AppError)
    ),
    tag = "cases"
)]
pub async fn create_case(
    State(pool): State<Pool<Postgres>>,
    Json(body): Json<CreateCaseRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<CaseResponse>), AppError> {
    body.validate_request()?;
    if body.case_number.trim().is_empty() {
        return Err(AppError::bad_request("case_number must not be empty"));
    }
    if body.title.trim().is_empty() {
        return Err(AppError::bad_request("title must not be empty"));
    }
    check_judge_reference(&pool, body.assigned_judge_id).await?;

    let case = repo::case::create(&pool, body).await?;

    // Re-read through the join so the response carries the judge name.
    let row = repo::case::find_with_judge(&pool, case.id)
        .await?
        .ok_or_else(|| AppError::internal(format!("Case with ID {} vanished after insert", case.id)))?;

    let location = format!("/api/cases/{}", case.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CaseResponse::from(row)),
    ))
}

/// PUT /api/cases/{id}
///
/// Replaces all fields. An unchanged payload performs no write and
/// leaves the audit timestamp alone; either way the response is 204.
#[utoipa::path(
    put,
    path = "/api/cases/{id}",
    request_body = UpdateCaseRequest,
    params(("id" = i64, Path, description = "Case ID")),
    responses(
        (status = 204, description = "Case updated"),
        (status = 400, description = "Invalid request", body = AppError),
        (status = 404, description = "Not found", body = AppError)
    ),
    tag = "cases"
)]
pub async fn update_case(
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateCaseRequest>,
) -> Result<StatusCode, AppError> {
    body.validate_request()?;
    if body.case_number.trim().is_empty() {
        return Err(AppError::bad_request("case_number must not be empty"));
    }
    if body.title.trim().is_empty() {
        return Err(AppError::bad_request("title must not be empty"));
    }
    check_judge_reference(&pool, body.assigned_judge_id).await?;

    repo::case::update(&pool, id, &body).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/cases/{id}
#[utoipa::path(
    delete,
    path = "/api/cases/{id}",
    params(("id" = i64, Path, description = "Case ID")),
    responses(
        (status = 204, description = "Case deleted"),
        (status = 404, description = "Not found", body = AppError)
    ),
    tag = "cases"
)]
pub async fn delete_case(
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let deleted = repo::case::soft_delete(&pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(format!("Case with ID {id} not found")))
    }
}
