use sqlx::{Pool, Postgres};

use crate::repo;
use shared_types::{AppError, CreateCaseRequest, CreateJudgeRequest, UpdateCaseRequest};

/// Insert demo judges and cases so a fresh install has something to
/// show. Runs only when the judges table is completely empty, so it is
/// safe to call on every startup.
pub async fn seed_demo_data(pool: &Pool<Postgres>) -> Result<(), AppError> {
    if repo::judge::count(pool).await? > 0 {
        return Ok(());
    }

    let judy = repo::judge::create(
        pool,
        CreateJudgeRequest {
            first_name: "Judy".to_string(),
            last_name: "Scheindlin".to_string(),
            court_room: "Room 101".to_string(),
            is_active: true,
        },
    )
    .await?;

    repo::judge::create(
        pool,
        CreateJudgeRequest {
            first_name: "Joseph".to_string(),
            last_name: "Wapner".to_string(),
            court_room: "Room 102".to_string(),
            is_active: false,
        },
    )
    .await?;

    let marilyn = repo::judge::create(
        pool,
        CreateJudgeRequest {
            first_name: "Marilyn".to_string(),
            last_name: "Milian".to_string(),
            court_room: "Room 205".to_string(),
            is_active: true,
        },
    )
    .await?;

    repo::case::create(
        pool,
        CreateCaseRequest {
            case_number: "2024-CIV-001".to_string(),
            title: "City of Orange vs. Construction Co.".to_string(),
            assigned_judge_id: Some(judy.id),
        },
    )
    .await?;

    // The second demo case is closed; cases are always filed Open, so
    // close it through the normal update path.
    let family_case = repo::case::create(
        pool,
        CreateCaseRequest {
            case_number: "2024-FAM-045".to_string(),
            title: "Doe vs. Doe".to_string(),
            assigned_judge_id: Some(marilyn.id),
        },
    )
    .await?;
    repo::case::update(
        pool,
        family_case.id,
        &UpdateCaseRequest {
            case_number: family_case.case_number,
            title: family_case.title,
            status: "Closed".to_string(),
            assigned_judge_id: family_case.assigned_judge_id,
        },
    )
    .await?;

    tracing::info!("seeded demo judges and cases");
    Ok(())
}
