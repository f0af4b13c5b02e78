use axum::{extract::State, Json};
use sqlx::{Pool, Postgres};

use shared_types::{AppError, JudgeOptionResponse};

/// GET /api/judges
///
/// Lookup endpoint for populating judge selection lists: active judges
/// only, minimal shape.
#[utoipa::path(
    get,
    path = "/api/judges",
    responses((status = 200, description = "Active judges", body = Vec<JudgeOptionResponse>)),
    tag = "judges"
)]
pub async fn list_judges(
    State(pool): State<Pool<Postgres>>,
) -> Result<Json<Vec<JudgeOptionResponse>>, AppError> {
    let judges = crate::repo::judge::list_active(&pool).await?;
    let responses: Vec<JudgeOptionResponse> =
        judges.into_iter().map(JudgeOptionResponse::from).collect();
    Ok(Json(responses))
}
