use shared_types::{
    AppError, CaseWithJudgeRow, CourtCase, CreateCaseRequest, UpdateCaseRequest,
    DEFAULT_CASE_STATUS,
};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;
use crate::repo::{concurrent_modification, not_found, UpdateOutcome};

/// Base SELECT for live case rows. Every read in this module is built
/// from one of the two constants below so the soft-delete filter cannot
/// be forgotten.
const SELECT_LIVE: &str = "SELECT id, case_number, title, status, filing_date, \
     assigned_judge_id, created_at, updated_at, is_deleted \
     FROM court_cases WHERE is_deleted = FALSE";

/// Base SELECT joining each live case with its judge's name parts. The
/// join also filters soft-deleted judges, so a case whose judge was
/// removed projects as unassigned instead of failing.
const SELECT_LIVE_WITH_JUDGE: &str = "SELECT c.id, c.case_number, c.title, c.status, c.filing_date, \
     c.assigned_judge_id, c.created_at, c.updated_at, \
     j.first_name AS judge_first_name, j.last_name AS judge_last_name \
     FROM court_cases c \
     LEFT JOIN judges j ON j.id = c.assigned_judge_id AND j.is_deleted = FALSE \
     WHERE c.is_deleted = FALSE";

/// List live cases with resolved judge names, newest first.
pub async fn list(pool: &Pool<Postgres>) -> Result<Vec<CaseWithJudgeRow>, AppError> {
    let sql = format!("{SELECT_LIVE_WITH_JUDGE} ORDER BY c.created_at DESC");
    sqlx::query_as::<_, CaseWithJudgeRow>(&sql)
        .fetch_all(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// Find a live case with its judge's name parts.
pub async fn find_with_judge(
    pool: &Pool<Postgres>,
    id: i64,
) -> Result<Option<CaseWithJudgeRow>, AppError> {
    let sql = format!("{SELECT_LIVE_WITH_JUDGE} AND c.id = $1");
    sqlx::query_as::<_, CaseWithJudgeRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// Find a live case by ID (no join).
pub async fn find_by_id(pool: &Pool<Postgres>, id: i64) -> Result<Option<CourtCase>, AppError> {
    let sql = format!("{SELECT_LIVE} AND id = $1");
    sqlx::query_as::<_, CourtCase>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// True when a live case with this ID exists.
pub async fn exists(pool: &Pool<Postgres>, id: i64) -> Result<bool, AppError> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM court_cases WHERE id = $1 AND is_deleted = FALSE)",
    )
    .bind(id)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// File a new case: status defaults to Open, filing date is now.
pub async fn create(pool: &Pool<Postgres>, req: CreateCaseRequest) -> Result<CourtCase, AppError> {
    sqlx::query_as::<_, CourtCase>(
        "INSERT INTO court_cases (case_number, title, status, filing_date, assigned_judge_id) \
         VALUES ($1, $2, $3, NOW(), $4) \
         RETURNING id, case_number, title, status, filing_date, assigned_judge_id, \
                   created_at, updated_at, is_deleted",
    )
    .bind(&req.case_number)
    .bind(&req.title)
    .bind(DEFAULT_CASE_STATUS)
    .bind(req.assigned_judge_id)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Update a case. Compares against the stored snapshot first: an
/// identical payload writes nothing and leaves `updated_at` untouched.
/// A write that races a concurrent delete re-checks existence and
/// reports NotFound rather than a storage error.
pub async fn update(
    pool: &Pool<Postgres>,
    id: i64,
    req: &UpdateCaseRequest,
) -> Result<UpdateOutcome, AppError> {
    let current = find_by_id(pool, id).await?.ok_or_else(|| not_found("Case", id))?;
    if !req.changes(&current) {
        return Ok(UpdateOutcome::Unchanged);
    }

    if write(pool, id, req).await? {
        return Ok(UpdateOutcome::Updated);
    }
    if find_by_id(pool, id).await?.is_none() {
        return Err(not_found("Case", id));
    }
    if write(pool, id, req).await? {
        return Ok(UpdateOutcome::Updated);
    }
    Err(concurrent_modification("Case", id))
}

async fn write(pool: &Pool<Postgres>, id: i64, req: &UpdateCaseRequest) -> Result<bool, AppError> {
    let result = sqlx::query(
        "UPDATE court_cases SET case_number = $2, title = $3, status = $4, \
                assigned_judge_id = $5, updated_at = NOW() \
         WHERE id = $1 AND is_deleted = FALSE",
    )
    .bind(id)
    .bind(&req.case_number)
    .bind(&req.title)
    .bind(&req.status)
    .bind(req.assigned_judge_id)
    .execute(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(result.rows_affected() > 0)
}

/// Soft-delete a case. Returns true if a live row was marked.
pub async fn soft_delete(pool: &Pool<Postgres>, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query(
        "UPDATE court_cases SET is_deleted = TRUE, updated_at = NOW() \
         WHERE id = $1 AND is_deleted = FALSE",
    )
    .bind(id)
    .execute(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(result.rows_affected() > 0)
}
