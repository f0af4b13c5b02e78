use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

// ── DB row structs ──────────────────────────────────────────────────

/// Join row linking a party to a case with a role. Keyed on the
/// (case_id, party_id) composite; removal is a hard delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct CaseParty {
    pub case_id: i64,
    pub party_id: i64,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// A link row joined with the party's name parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct CasePartyWithNameRow {
    pub party_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

// ── API response types ──────────────────────────────────────────────

/// Link shape nested in case detail and returned on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CasePartyResponse {
    pub party_id: i64,
    pub full_name: String,
    pub role: String,
}

impl From<CasePartyWithNameRow> for CasePartyResponse {
    fn from(row: CasePartyWithNameRow) -> Self {
        Self {
            full_name: format!("{} {}", row.first_name, row.last_name),
            party_id: row.party_id,
            role: row.role,
        }
    }
}

// ── Request types ───────────────────────────────────────────────────

/// Request DTO for linking an existing party to a case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct AddCasePartyRequest {
    pub party_id: i64,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Role is required"))
    )]
    pub role: String,
}
