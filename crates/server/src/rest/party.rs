use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};
use sqlx::{Pool, Postgres};

use crate::error_convert::ValidateRequest;
use crate::repo;
use shared_types::{AppError, CreatePartyRequest, PartyResponse, UpdatePartyRequest};

/// GET /api/parties
#[utoipa::path(
    get,
    path = "/api/parties",
    responses((status = 200, description = "List of parties", body = Vec<PartyResponse>)),
    tag = "parties"
)]
pub async fn list_parties(
    State(pool): State<Pool<Postgres>>,
) -> Result<Json<Vec<PartyResponse>>, AppError> {
    let parties = repo::party::list(&pool).await?;
    let responses: Vec<PartyResponse> = parties.into_iter().map(PartyResponse::from).collect();
    Ok(Json(responses))
}

/// GET /api/parties/{id}
#[utoipa::path(
    get,
    path = "/api/parties/{id}",
    params(("id" = i64, Path, description = "Party ID")),
    responses(
        (status = 200, description = "Party found", body = PartyResponse),
        (status = 404, description = "Not found", body = AppError)
    ),
    tag = "parties"
)]
pub async fn get_party(
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<i64>,
) -> Result<Json<PartyResponse>, AppError> {
    let party = repo::party::find_by_id(&pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Party with ID {id} not found")))?;
    Ok(Json(PartyResponse::from(party)))
}

/// POST /api/parties
#[utoipa::path(
    post,
    path = "/api/parties",
    request_body = CreatePartyRequest,
    responses(
        (status = 201, description = "Party created", body = PartyResponse),
        (status = 400, description = "Invalid request", body = AppError)
    ),
    tag = "parties"
)]
pub async fn create_party(
    State(pool): State<Pool<Postgres>>,
    Json(body): Json<CreatePartyRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<PartyResponse>), AppError> {
    body.validate_request()?;

    let party = repo::party::create(&pool, body).await?;
    let location = format!("/api/parties/{}", party.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(PartyResponse::from(party)),
    ))
}

/// PUT /api/parties/{id}
///
/// Replaces all fields. An unchanged payload performs no write and
/// leaves the audit timestamp alone; either way the response is 204.
#[utoipa::path(
    put,
    path = "/api/parties/{id}",
    request_body = UpdatePartyRequest,
    params(("id" = i64, Path, description = "Party ID")),
    responses(
        (status = 204, description = "Party updated"),
        (status = 400, description = "Invalid request", body = AppError),
        (status = 404, description = "Not found", body = AppError)
    ),
    tag = "parties"
)]
pub async fn update_party(
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<i64>,
    Json(body): Json<UpdatePartyRequest>,
) -> Result<StatusCode, AppError> {
    body.validate_request()?;

    repo::party::update(&pool, id, &body).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/parties/{id}
#[utoipa::path(
    delete,
    path = "/api/parties/{id}",
    params(("id" = i64, Path, description = "Party ID")),
    responses(
        (status = 204, description = "Party deleted"),
        (status = 404, description = "Not found", body = AppError)
    ),
    tag = "parties"
)]
pub async fn delete_party(
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let deleted = repo::party::soft_delete(&pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(format!("Party with ID {id} not found")))
    }
}
