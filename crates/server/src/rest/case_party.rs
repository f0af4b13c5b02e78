use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};
use sqlx::{Pool, Postgres};

use crate::error_convert::ValidateRequest;
use crate::repo;
use shared_types::{AddCasePartyRequest, AppError, CasePartyResponse};

/// POST /api/cases/{case_id}/parties
///
/// Links an existing party to a case with a role. A party may appear on
/// a case at most once.
#[utoipa::path(
    post,
    path = "/api/cases/{case_id}/parties",
    request_body = AddCasePartyRequest,
    params(("case_id" = i64, Path, description = "Case ID")),
    responses(
        (status = 201, description = "Party linked to case", body = CasePartyResponse),
        (status = 400, description = "Invalid request", body = AppError),
        (status = 404, description = "Case or party not found", body = AppError),
        (status = 409, description = "Party already on this case", body = AppError)
    ),
    tag = "case-parties"
)]
pub async fn add_party_to_case(
    State(pool): State<Pool<Postgres>>,
    Path(case_id): Path<i64>,
    Json(body): Json<AddCasePartyRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<CasePartyResponse>), AppError> {
    body.validate_request()?;

    if !repo::case::exists(&pool, case_id).await? {
        return Err(AppError::not_found(format!(
            "Case with ID {case_id} not found"
        )));
    }

    let party = repo::party::find_by_id(&pool, body.party_id).await?.ok_or_else(|| {
        AppError::not_found(format!("Party with ID {} not found", body.party_id))
    })?;

    if repo::case_party::find_link(&pool, case_id, party.id).await?.is_some() {
        return Err(AppError::conflict(format!(
            "{} is already assigned to this case",
            party.full_name()
        )));
    }

    let link = repo::case_party::insert(&pool, case_id, party.id, &body.role).await?;

    let location = format!("/api/cases/{case_id}/parties/{}", party.id);
    let response = CasePartyResponse {
        party_id: party.id,
        full_name: party.full_name(),
        role: link.role,
    };
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(response),
    ))
}

/// DELETE /api/cases/{case_id}/parties/{party_id}
///
/// Removes only the association; the party and the case both survive.
#[utoipa::path(
    delete,
    path = "/api/cases/{case_id}/parties/{party_id}",
    params(
        ("case_id" = i64, Path, description = "Case ID"),
        ("party_id" = i64, Path, description = "Party ID")
    ),
    responses(
        (status = 204, description = "Party unlinked from case"),
        (status = 404, description = "No such link", body = AppError)
    ),
    tag = "case-parties"
)]
pub async fn remove_party_from_case(
    State(pool): State<Pool<Postgres>>,
    Path((case_id, party_id)): Path<(i64, i64)>,
) -> Result<StatusCode, AppError> {
    let removed = repo::case_party::remove(&pool, case_id, party_id).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(format!(
            "Party with ID {party_id} is not assigned to case {case_id}"
        )))
    }
}
