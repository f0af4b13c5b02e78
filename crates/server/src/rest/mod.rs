pub mod case;
pub mod case_party;
pub mod hearing;
pub mod judge;
pub mod party;

use crate::db::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

/// Build the REST API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        // Cases
        .route("/api/cases", get(case::list_cases).post(case::create_case))
        .route(
            "/api/cases/{id}",
            get(case::get_case)
                .put(case::update_case)
                .delete(case::delete_case),
        )
        // Judges (lookup)
        .route("/api/judges", get(judge::list_judges))
        // Parties
        .route(
            "/api/parties",
            get(party::list_parties).post(party::create_party),
        )
        .route(
            "/api/parties/{id}",
            get(party::get_party)
                .put(party::update_party)
                .delete(party::delete_party),
        )
        // Hearings (case sub-resource, ownership-checked)
        .route(
            "/api/cases/{case_id}/hearings",
            post(hearing::create_hearing),
        )
        .route(
            "/api/cases/{case_id}/hearings/{hearing_id}",
            put(hearing::update_hearing).delete(hearing::delete_hearing),
        )
        // Case-party links
        .route(
            "/api/cases/{case_id}/parties",
            post(case_party::add_party_to_case),
        )
        .route(
            "/api/cases/{case_id}/parties/{party_id}",
            delete(case_party::remove_party_from_case),
        )
}
