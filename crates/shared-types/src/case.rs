use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

use crate::{CasePartyResponse, HearingResponse};

// ── Validation constants ────────────────────────────────────────────

/// Conventional case status values. The column is free text and no
/// transition graph is enforced; a Closed case may legally reopen.
pub const CASE_STATUSES: &[&str] = &["Open", "Closed", "Suspended"];

/// Status assigned to newly filed cases.
pub const DEFAULT_CASE_STATUS: &str = "Open";

/// Judge name shown when a case has no assigned judge.
pub const UNASSIGNED_JUDGE: &str = "Unassigned";

// ── DB row structs ──────────────────────────────────────────────────

/// A court case record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct CourtCase {
    pub id: i64,
    pub case_number: String,
    pub title: String,
    pub status: String,
    pub filing_date: DateTime<Utc>,
    pub assigned_judge_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
}

/// A case row joined with its judge's name parts (LEFT JOIN, so both
/// name columns are null for unassigned cases).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct CaseWithJudgeRow {
    pub id: i64,
    pub case_number: String,
    pub title: String,
    pub status: String,
    pub filing_date: DateTime<Utc>,
    pub assigned_judge_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub judge_first_name: Option<String>,
    pub judge_last_name: Option<String>,
}

impl CaseWithJudgeRow {
    /// Resolved judge full name, or "Unassigned" when the case has no
    /// live judge reference. Never fails on a dangling reference.
    pub fn judge_name(&self) -> String {
        match (&self.judge_first_name, &self.judge_last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            _ => UNASSIGNED_JUDGE.to_string(),
        }
    }
}

// ── API response types ──────────────────────────────────────────────

/// Flat case shape for the case list: judge name resolved, no detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CaseResponse {
    pub id: i64,
    pub case_number: String,
    pub title: String,
    pub status: String,
    pub filing_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_judge_id: Option<i64>,
    pub assigned_judge_name: String,
}

impl From<CaseWithJudgeRow> for CaseResponse {
    fn from(row: CaseWithJudgeRow) -> Self {
        Self {
            assigned_judge_name: row.judge_name(),
            id: row.id,
            case_number: row.case_number,
            title: row.title,
            status: row.status,
            filing_date: row.filing_date,
            assigned_judge_id: row.assigned_judge_id,
        }
    }
}

/// Single-case detail: audit timestamps plus eagerly loaded hearings
/// and party links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CaseDetailResponse {
    pub id: i64,
    pub case_number: String,
    pub title: String,
    pub status: String,
    pub filing_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_judge_id: Option<i64>,
    pub assigned_judge_name: String,
    pub parties: Vec<CasePartyResponse>,
    pub hearings: Vec<HearingResponse>,
}

impl From<CaseWithJudgeRow> for CaseDetailResponse {
    fn from(row: CaseWithJudgeRow) -> Self {
        Self {
            assigned_judge_name: row.judge_name(),
            id: row.id,
            case_number: row.case_number,
            title: row.title,
            status: row.status,
            filing_date: row.filing_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
            assigned_judge_id: row.assigned_judge_id,
            parties: Vec::new(),
            hearings: Vec::new(),
        }
    }
}

// ── Request types ───────────────────────────────────────────────────

/// Request DTO for filing a new case. Status is server-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct CreateCaseRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Case number is required"))
    )]
    pub case_number: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Title is required"))
    )]
    pub title: String,
    pub assigned_judge_id: Option<i64>,
}

/// Request DTO for updating a case. All fields are replaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct UpdateCaseRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Case number is required"))
    )]
    pub case_number: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Title is required"))
    )]
    pub title: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Status is required"))
    )]
    pub status: String,
    pub assigned_judge_id: Option<i64>,
}

impl UpdateCaseRequest {
    /// True when applying this request would change the stored row.
    /// A no-op update must not write or touch the audit timestamp.
    pub fn changes(&self, current: &CourtCase) -> bool {
        self.case_number != current.case_number
            || self.title != current.title
            || self.status != current.status
            || self.assigned_judge_id != current.assigned_judge_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(judge: Option<(&str, &str)>) -> CaseWithJudgeRow {
        CaseWithJudgeRow {
            id: 3,
            case_number: "2025-CIV-010".to_string(),
            title: "Roe v. Roe".to_string(),
            status: "Open".to_string(),
            filing_date: Utc::now(),
            assigned_judge_id: judge.map(|_| 1),
            created_at: Utc::now(),
            updated_at: None,
            judge_first_name: judge.map(|(f, _)| f.to_string()),
            judge_last_name: judge.map(|(_, l)| l.to_string()),
        }
    }

    fn stored() -> CourtCase {
        CourtCase {
            id: 3,
            case_number: "2025-CIV-010".to_string(),
            title: "Roe v. Roe".to_string(),
            status: "Open".to_string(),
            filing_date: Utc::now(),
            assigned_judge_id: Some(1),
            created_at: Utc::now(),
            updated_at: None,
            is_deleted: false,
        }
    }

    #[test]
    fn list_projection_resolves_judge_name() {
        let resp = CaseResponse::from(row(Some(("Ann", "Lee"))));
        assert_eq!(resp.assigned_judge_name, "Ann Lee");
        assert_eq!(resp.case_number, "2025-CIV-010");
    }

    #[test]
    fn list_projection_falls_back_to_unassigned() {
        let resp = CaseResponse::from(row(None));
        assert_eq!(resp.assigned_judge_name, UNASSIGNED_JUDGE);
        assert_eq!(resp.assigned_judge_id, None);
    }

    #[test]
    fn detail_projection_starts_with_empty_collections() {
        let detail = CaseDetailResponse::from(row(Some(("Ann", "Lee"))));
        assert!(detail.parties.is_empty());
        assert!(detail.hearings.is_empty());
        assert_eq!(detail.assigned_judge_name, "Ann Lee");
    }

    #[test]
    fn identical_payload_is_a_no_op() {
        let req = UpdateCaseRequest {
            case_number: "2025-CIV-010".to_string(),
            title: "Roe v. Roe".to_string(),
            status: "Open".to_string(),
            assigned_judge_id: Some(1),
        };
        assert!(!req.changes(&stored()));
    }

    #[test]
    fn status_change_is_detected() {
        let req = UpdateCaseRequest {
            case_number: "2025-CIV-010".to_string(),
            title: "Roe v. Roe".to_string(),
            status: "Closed".to_string(),
            assigned_judge_id: Some(1),
        };
        assert!(req.changes(&stored()));
    }

    #[test]
    fn unassigning_the_judge_is_detected() {
        let req = UpdateCaseRequest {
            case_number: "2025-CIV-010".to_string(),
            title: "Roe v. Roe".to_string(),
            status: "Open".to_string(),
            assigned_judge_id: None,
        };
        assert!(req.changes(&stored()));
    }

    #[test]
    fn default_status_is_conventional() {
        assert!(CASE_STATUSES.contains(&DEFAULT_CASE_STATUS));
    }
}
