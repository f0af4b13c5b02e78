use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

// ── DB row struct ───────────────────────────────────────────────────

/// A scheduled hearing. Owned by exactly one case: a hearing cannot
/// outlive its case or be reassigned to another one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Hearing {
    pub id: i64,
    pub case_id: i64,
    pub description: String,
    pub hearing_date: DateTime<Utc>,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
}

// ── API response types ──────────────────────────────────────────────

/// Hearing shape nested in case detail and returned on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HearingResponse {
    pub id: i64,
    pub description: String,
    pub hearing_date: DateTime<Utc>,
    pub location: String,
}

impl From<Hearing> for HearingResponse {
    fn from(h: Hearing) -> Self {
        Self {
            id: h.id,
            description: h.description,
            hearing_date: h.hearing_date,
            location: h.location,
        }
    }
}

// ── Request types ───────────────────────────────────────────────────

/// Request DTO for scheduling a hearing under a case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct CreateHearingRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Description is required"))
    )]
    pub description: String,
    pub hearing_date: DateTime<Utc>,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Location is required"))
    )]
    pub location: String,
}

/// Request DTO for updating a hearing. All fields are replaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct UpdateHearingRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Description is required"))
    )]
    pub description: String,
    pub hearing_date: DateTime<Utc>,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Location is required"))
    )]
    pub location: String,
}

impl UpdateHearingRequest {
    /// True when applying this request would change the stored row.
    pub fn changes(&self, current: &Hearing) -> bool {
        self.description != current.description
            || self.hearing_date != current.hearing_date
            || self.location != current.location
    }
}
