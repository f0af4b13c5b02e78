use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── DB row struct ───────────────────────────────────────────────────

/// A judge who may be assigned to cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Judge {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub court_room: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
}

impl Judge {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// ── API response types ──────────────────────────────────────────────

/// Lightweight judge shape for selection lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct JudgeOptionResponse {
    pub id: i64,
    pub full_name: String,
}

impl From<Judge> for JudgeOptionResponse {
    fn from(j: Judge) -> Self {
        Self {
            full_name: j.full_name(),
            id: j.id,
        }
    }
}

// ── Request types ───────────────────────────────────────────────────

/// Request DTO for inserting a judge (used by the seeder; judges are not
/// created over the REST surface).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateJudgeRequest {
    pub first_name: String,
    pub last_name: String,
    pub court_room: String,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn judge(first: &str, last: &str) -> Judge {
        Judge {
            id: 1,
            first_name: first.to_string(),
            last_name: last.to_string(),
            court_room: "Room 101".to_string(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: None,
            is_deleted: false,
        }
    }

    #[test]
    fn full_name_joins_first_and_last() {
        assert_eq!(judge("Ann", "Lee").full_name(), "Ann Lee");
    }

    #[test]
    fn option_response_carries_id_and_full_name() {
        let opt = JudgeOptionResponse::from(judge("Judy", "Scheindlin"));
        assert_eq!(opt.id, 1);
        assert_eq!(opt.full_name, "Judy Scheindlin");
    }
}
