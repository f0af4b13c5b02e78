use shared_types::AppError;

/// Convert a sqlx::Error into an AppError.
pub fn sqlx_to_app_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::RowNotFound => AppError::not_found("Resource not found"),
        sqlx::Error::Database(db_err) => {
            match db_err.code().as_deref() {
                // Unique constraint violation. The only unique key besides
                // the serial ids is the (case_id, party_id) composite.
                Some("23505") => {
                    let friendly = if db_err.message().contains("case_parties") {
                        "This party is already assigned to this case"
                    } else {
                        "A record with this value already exists"
                    };
                    AppError::conflict(friendly)
                }
                // Foreign key violation: a referenced row vanished between
                // the existence check and the write.
                Some("23503") => AppError::bad_request("Referenced record does not exist"),
                _ => AppError::database(err.to_string()),
            }
        }
        _ => AppError::database(err.to_string()),
    }
}

/// Extension trait providing `.into_app_error()` on sqlx::Error.
pub trait SqlxErrorExt {
    fn into_app_error(self) -> AppError;
}

impl SqlxErrorExt for sqlx::Error {
    fn into_app_error(self) -> AppError {
        sqlx_to_app_error(self)
    }
}

/// Trait for validating request DTOs before processing.
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

impl<T: validator::Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}
