use shared_types::{AppError, CreateHearingRequest, Hearing, UpdateHearingRequest};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;
use crate::repo::{concurrent_modification, not_found, UpdateOutcome};

/// Base SELECT for live hearing rows. Every read in this module is
/// built from it so the soft-delete filter cannot be forgotten.
const SELECT_LIVE: &str = "SELECT id, case_id, description, hearing_date, location, \
     created_at, updated_at, is_deleted \
     FROM hearings WHERE is_deleted = FALSE";

/// List a case's live hearings in chronological order.
pub async fn list_by_case(pool: &Pool<Postgres>, case_id: i64) -> Result<Vec<Hearing>, AppError> {
    let sql = format!("{SELECT_LIVE} AND case_id = $1 ORDER BY hearing_date ASC");
    sqlx::query_as::<_, Hearing>(&sql)
        .bind(case_id)
        .fetch_all(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// Find a live hearing by ID.
pub async fn find_by_id(pool: &Pool<Postgres>, id: i64) -> Result<Option<Hearing>, AppError> {
    let sql = format!("{SELECT_LIVE} AND id = $1");
    sqlx::query_as::<_, Hearing>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// Schedule a hearing under a case. The caller verifies the case first.
pub async fn create(
    pool: &Pool<Postgres>,
    case_id: i64,
    req: CreateHearingRequest,
) -> Result<Hearing, AppError> {
    sqlx::query_as::<_, Hearing>(
        "INSERT INTO hearings (case_id, description, hearing_date, location) \
         VALUES ($1, $2, $3, $4) \
         RETURNING id, case_id, description, hearing_date, location, \
                   created_at, updated_at, is_deleted",
    )
    .bind(case_id)
    .bind(&req.description)
    .bind(req.hearing_date)
    .bind(&req.location)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Load a hearing addressed through a case's URL, enforcing ownership:
/// the hearing must exist and belong to that case. The ownership check
/// precedes any mutation built on top of this.
async fn find_owned(
    pool: &Pool<Postgres>,
    case_id: i64,
    hearing_id: i64,
) -> Result<Hearing, AppError> {
    let hearing = find_by_id(pool, hearing_id)
        .await?
        .ok_or_else(|| not_found("Hearing", hearing_id))?;
    if hearing.case_id != case_id {
        return Err(AppError::bad_request(format!(
            "Hearing {hearing_id} does not belong to case {case_id}"
        )));
    }
    Ok(hearing)
}

/// Update a hearing addressed through its owning case. Ownership is
/// checked before anything else; an identical payload writes nothing.
pub async fn update(
    pool: &Pool<Postgres>,
    case_id: i64,
    hearing_id: i64,
    req: &UpdateHearingRequest,
) -> Result<UpdateOutcome, AppError> {
    let current = find_owned(pool, case_id, hearing_id).await?;
    if !req.changes(&current) {
        return Ok(UpdateOutcome::Unchanged);
    }

    if write(pool, hearing_id, req).await? {
        return Ok(UpdateOutcome::Updated);
    }
    if find_by_id(pool, hearing_id).await?.is_none() {
        return Err(not_found("Hearing", hearing_id));
    }
    if write(pool, hearing_id, req).await? {
        return Ok(UpdateOutcome::Updated);
    }
    Err(concurrent_modification("Hearing", hearing_id))
}

async fn write(
    pool: &Pool<Postgres>,
    id: i64,
    req: &UpdateHearingRequest,
) -> Result<bool, AppError> {
    let result = sqlx::query(
        "UPDATE hearings SET description = $2, hearing_date = $3, location = $4, \
                updated_at = NOW() \
         WHERE id = $1 AND is_deleted = FALSE",
    )
    .bind(id)
    .bind(&req.description)
    .bind(req.hearing_date)
    .bind(&req.location)
    .execute(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(result.rows_affected() > 0)
}

/// Soft-delete a hearing addressed through its owning case, with the
/// same ownership check as update.
pub async fn soft_delete(
    pool: &Pool<Postgres>,
    case_id: i64,
    hearing_id: i64,
) -> Result<(), AppError> {
    let hearing = find_owned(pool, case_id, hearing_id).await?;
    let result = sqlx::query(
        "UPDATE hearings SET is_deleted = TRUE, updated_at = NOW() \
         WHERE id = $1 AND is_deleted = FALSE",
    )
    .bind(hearing.id)
    .execute(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    if result.rows_affected() == 0 {
        return Err(not_found("Hearing", hearing_id));
    }
    Ok(())
}
