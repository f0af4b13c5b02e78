use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

// ── DB row struct ───────────────────────────────────────────────────

/// A person or organization that may be associated with cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Party {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
}

impl Party {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// ── API response types ──────────────────────────────────────────────

/// Flat party shape for list and single-party reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PartyResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl From<Party> for PartyResponse {
    fn from(p: Party) -> Self {
        Self {
            id: p.id,
            first_name: p.first_name,
            last_name: p.last_name,
            email: p.email,
            phone: p.phone,
        }
    }
}

// ── Request types ───────────────────────────────────────────────────

/// Request DTO for creating a party.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct CreatePartyRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "First name is required"))
    )]
    pub first_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Last name is required"))
    )]
    pub last_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Email must be a valid address"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Phone is required"))
    )]
    pub phone: String,
}

/// Request DTO for updating a party. All fields are replaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct UpdatePartyRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "First name is required"))
    )]
    pub first_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Last name is required"))
    )]
    pub last_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Email must be a valid address"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Phone is required"))
    )]
    pub phone: String,
}

impl UpdatePartyRequest {
    /// True when applying this request would change the stored row.
    /// A no-op update must not write or touch the audit timestamp.
    pub fn changes(&self, current: &Party) -> bool {
        self.first_name != current.first_name
            || self.last_name != current.last_name
            || self.email != current.email
            || self.phone != current.phone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn party() -> Party {
        Party {
            id: 7,
            first_name: "Max".to_string(),
            last_name: "Vue".to_string(),
            email: "max@x.com".to_string(),
            phone: "555-0001".to_string(),
            created_at: Utc::now(),
            updated_at: None,
            is_deleted: false,
        }
    }

    #[test]
    fn full_name_joins_first_and_last() {
        assert_eq!(party().full_name(), "Max Vue");
    }

    #[test]
    fn identical_payload_is_a_no_op() {
        let req = UpdatePartyRequest {
            first_name: "Max".to_string(),
            last_name: "Vue".to_string(),
            email: "max@x.com".to_string(),
            phone: "555-0001".to_string(),
        };
        assert!(!req.changes(&party()));
    }

    #[test]
    fn single_field_difference_is_a_change() {
        let req = UpdatePartyRequest {
            first_name: "Max".to_string(),
            last_name: "Vue".to_string(),
            email: "max@x.com".to_string(),
            phone: "555-0002".to_string(),
        };
        assert!(req.changes(&party()));
    }

    #[test]
    fn response_projection_drops_audit_fields() {
        let resp = PartyResponse::from(party());
        assert_eq!(resp.id, 7);
        assert_eq!(resp.email, "max@x.com");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("is_deleted"));
        assert!(!json.contains("created_at"));
    }
}
