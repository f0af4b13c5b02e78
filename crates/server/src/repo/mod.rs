pub mod case;
pub mod case_party;
pub mod hearing;
pub mod judge;
pub mod party;

use shared_types::AppError;

/// Outcome of a snapshot-compared update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Fields differed; the row was written and its audit timestamp stamped.
    Updated,
    /// The payload matched the stored row; nothing was written.
    Unchanged,
}

/// Standard not-found error carrying entity type and id.
pub(crate) fn not_found(entity: &str, id: i64) -> AppError {
    AppError::not_found(format!("{entity} with ID {id} not found"))
}

/// Error for a write that kept affecting zero rows while the target row
/// still exists — a competing mutation won the race twice.
pub(crate) fn concurrent_modification(entity: &str, id: i64) -> AppError {
    AppError::conflict(format!("{entity} with ID {id} was modified concurrently"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::AppErrorKind;

    #[test]
    fn not_found_names_entity_and_id() {
        let err = not_found("Case", 42);
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, "Case with ID 42 not found");
    }

    #[test]
    fn concurrent_modification_is_a_conflict() {
        let err = concurrent_modification("Party", 7);
        assert_eq!(err.kind, AppErrorKind::Conflict);
        assert!(err.message.contains("Party with ID 7"));
    }
}
