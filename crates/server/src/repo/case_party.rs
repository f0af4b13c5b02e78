use shared_types::{AppError, CaseParty, CasePartyWithNameRow};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

/// List a case's party links resolved to name parts, ordered by party
/// name. Links to soft-deleted parties are filtered by the inner join.
pub async fn list_by_case(
    pool: &Pool<Postgres>,
    case_id: i64,
) -> Result<Vec<CasePartyWithNameRow>, AppError> {
    sqlx::query_as::<_, CasePartyWithNameRow>(
        "SELECT cp.party_id, p.first_name, p.last_name, cp.role \
         FROM case_parties cp \
         JOIN parties p ON p.id = cp.party_id AND p.is_deleted = FALSE \
         WHERE cp.case_id = $1 \
         ORDER BY p.last_name ASC, p.first_name ASC",
    )
    .bind(case_id)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Find the link between a case and a party, if any.
pub async fn find_link(
    pool: &Pool<Postgres>,
    case_id: i64,
    party_id: i64,
) -> Result<Option<CaseParty>, AppError> {
    sqlx::query_as::<_, CaseParty>(
        "SELECT case_id, party_id, role, created_at \
         FROM case_parties WHERE case_id = $1 AND party_id = $2",
    )
    .bind(case_id)
    .bind(party_id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Insert a link row. The composite primary key rejects a duplicate
/// (case, party) pair at the storage level; the caller checks first to
/// produce the friendlier message.
pub async fn insert(
    pool: &Pool<Postgres>,
    case_id: i64,
    party_id: i64,
    role: &str,
) -> Result<CaseParty, AppError> {
    sqlx::query_as::<_, CaseParty>(
        "INSERT INTO case_parties (case_id, party_id, role) \
         VALUES ($1, $2, $3) \
         RETURNING case_id, party_id, role, created_at",
    )
    .bind(case_id)
    .bind(party_id)
    .bind(role)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Hard-delete a link row. Only the association is removed; the case
/// and party rows are untouched. Returns true if a row was deleted.
pub async fn remove(pool: &Pool<Postgres>, case_id: i64, party_id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM case_parties WHERE case_id = $1 AND party_id = $2")
        .bind(case_id)
        .bind(party_id)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    Ok(result.rows_affected() > 0)
}
