use shared_types::{AppError, CreateJudgeRequest, Judge};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

/// Base SELECT for live judge rows. Every read in this module is built
/// from it so the soft-delete filter cannot be forgotten.
const SELECT_LIVE: &str = "SELECT id, first_name, last_name, court_room, is_active, \
     created_at, updated_at, is_deleted \
     FROM judges WHERE is_deleted = FALSE";

/// List active judges for selection lists, ordered by name.
pub async fn list_active(pool: &Pool<Postgres>) -> Result<Vec<Judge>, AppError> {
    let sql = format!("{SELECT_LIVE} AND is_active = TRUE ORDER BY last_name ASC, first_name ASC");
    sqlx::query_as::<_, Judge>(&sql)
        .fetch_all(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// Find a live judge by ID.
pub async fn find_by_id(pool: &Pool<Postgres>, id: i64) -> Result<Option<Judge>, AppError> {
    let sql = format!("{SELECT_LIVE} AND id = $1");
    sqlx::query_as::<_, Judge>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// Insert a new judge.
pub async fn create(pool: &Pool<Postgres>, req: CreateJudgeRequest) -> Result<Judge, AppError> {
    sqlx::query_as::<_, Judge>(
        "INSERT INTO judges (first_name, last_name, court_room, is_active) \
         VALUES ($1, $2, $3, $4) \
         RETURNING id, first_name, last_name, court_room, is_active, \
                   created_at, updated_at, is_deleted",
    )
    .bind(&req.first_name)
    .bind(&req.last_name)
    .bind(&req.court_room)
    .bind(req.is_active)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Count all judge rows, deleted included. Used by the seeder to decide
/// whether the database is fresh.
pub async fn count(pool: &Pool<Postgres>) -> Result<i64, AppError> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM judges")
        .fetch_one(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}
