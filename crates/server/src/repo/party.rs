use shared_types::{AppError, CreatePartyRequest, Party, UpdatePartyRequest};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;
use crate::repo::{concurrent_modification, not_found, UpdateOutcome};

/// Base SELECT for live party rows. Every read in this module is built
/// from it so the soft-delete filter cannot be forgotten.
const SELECT_LIVE: &str = "SELECT id, first_name, last_name, email, phone, \
     created_at, updated_at, is_deleted \
     FROM parties WHERE is_deleted = FALSE";

/// List live parties ordered by name.
pub async fn list(pool: &Pool<Postgres>) -> Result<Vec<Party>, AppError> {
    let sql = format!("{SELECT_LIVE} ORDER BY last_name ASC, first_name ASC");
    sqlx::query_as::<_, Party>(&sql)
        .fetch_all(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// Find a live party by ID.
pub async fn find_by_id(pool: &Pool<Postgres>, id: i64) -> Result<Option<Party>, AppError> {
    let sql = format!("{SELECT_LIVE} AND id = $1");
    sqlx::query_as::<_, Party>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// Insert a new party.
pub async fn create(pool: &Pool<Postgres>, req: CreatePartyRequest) -> Result<Party, AppError> {
    sqlx::query_as::<_, Party>(
        "INSERT INTO parties (first_name, last_name, email, phone) \
         VALUES ($1, $2, $3, $4) \
         RETURNING id, first_name, last_name, email, phone, \
                   created_at, updated_at, is_deleted",
    )
    .bind(&req.first_name)
    .bind(&req.last_name)
    .bind(&req.email)
    .bind(&req.phone)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Update a party. Compares against the stored snapshot first: an
/// identical payload writes nothing and leaves `updated_at` untouched.
pub async fn update(
    pool: &Pool<Postgres>,
    id: i64,
    req: &UpdatePartyRequest,
) -> Result<UpdateOutcome, AppError> {
    let current = find_by_id(pool, id).await?.ok_or_else(|| not_found("Party", id))?;
    if !req.changes(&current) {
        return Ok(UpdateOutcome::Unchanged);
    }

    if write(pool, id, req).await? {
        return Ok(UpdateOutcome::Updated);
    }
    // Zero rows affected: the row vanished between snapshot and write.
    if find_by_id(pool, id).await?.is_none() {
        return Err(not_found("Party", id));
    }
    // Still live, so a competing write interfered. Retry once.
    if write(pool, id, req).await? {
        return Ok(UpdateOutcome::Updated);
    }
    Err(concurrent_modification("Party", id))
}

async fn write(pool: &Pool<Postgres>, id: i64, req: &UpdatePartyRequest) -> Result<bool, AppError> {
    let result = sqlx::query(
        "UPDATE parties SET first_name = $2, last_name = $3, email = $4, phone = $5, \
                updated_at = NOW() \
         WHERE id = $1 AND is_deleted = FALSE",
    )
    .bind(id)
    .bind(&req.first_name)
    .bind(&req.last_name)
    .bind(&req.email)
    .bind(&req.phone)
    .execute(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(result.rows_affected() > 0)
}

/// Soft-delete a party. Returns true if a live row was marked.
pub async fn soft_delete(pool: &Pool<Postgres>, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query(
        "UPDATE parties SET is_deleted = TRUE, updated_at = NOW() \
         WHERE id = $1 AND is_deleted = FALSE",
    )
    .bind(id)
    .execute(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(result.rows_affected() > 0)
}
