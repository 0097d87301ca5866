use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::validation::require;
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::db::types::TestType;
use crate::repositories;
use crate::schemas::test::{
    QuestionsResponse, TeacherTestsResponse, TestCreate, TestCreateResponse, TestResponse,
};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/createTest", post(create_test))
        .route("/test/:test_id", get(get_test_questions))
        .route("/teacher/:teacher_id/tests", get(get_teacher_tests))
}

async fn create_test(
    State(state): State<AppState>,
    Json(payload): Json<TestCreate>,
) -> Result<Json<TestCreateResponse>, ApiError> {
    let teacher_id = require(payload.teacher_id, "teacherId")?;
    let test_type = payload.test_type.unwrap_or(TestType::Test);

    let teacher = repositories::teacher_users::find_by_id(state.db(), &teacher_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to look up teacher"))?;

    if teacher.is_none() {
        return Err(ApiError::Forbidden("Invalid teacher credentials"));
    }

    let test_id = allocate_test_id(state.db()).await?;

    let test = repositories::tests::create(
        state.db(),
        repositories::tests::CreateTest {
            test_id: &test_id,
            teacher_id: &teacher_id,
            test_type,
            created_at: primitive_now_utc(),
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to create test"))?;

    tracing::info!(test_id = %test.test_id, teacher_id = %test.teacher_id, "Test created");

    Ok(Json(TestCreateResponse { test_id: test.test_id, teacher_id: test.teacher_id }))
}

/// Random token checked against existing rows before acceptance; the previous
/// date+hour scheme collided within the hour.
async fn allocate_test_id(pool: &PgPool) -> Result<String, ApiError> {
    for _ in 0..3 {
        let candidate = format!("test_{}", Uuid::new_v4().simple());
        let taken = repositories::tests::exists(pool, &candidate)
            .await
            .map_err(|e| ApiError::internal(e, "Failed to check test id"))?;
        if !taken {
            return Ok(candidate);
        }
    }

    Err(ApiError::Internal("Failed to allocate a unique test id".to_string()))
}

async fn get_test_questions(
    Path(test_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let question_set = repositories::question_sets::find_by_test_id(state.db(), &test_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch questions"))?;

    let Some(question_set) = question_set else {
        return Err(ApiError::NotFound("Test questions not found".to_string()));
    };

    let test = repositories::tests::find_by_id(state.db(), &test_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch test"))?;

    Ok(Json(QuestionsResponse {
        questions: question_set.json_data.0,
        test_type: test.map(|t| t.test_type),
    }))
}

async fn get_teacher_tests(
    Path(teacher_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<TeacherTestsResponse>, ApiError> {
    let tests = repositories::tests::list_by_teacher(state.db(), &teacher_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch tests"))?;

    let tests: Vec<TestResponse> = tests.into_iter().map(TestResponse::from_db).collect();
    let count = tests.len();

    Ok(Json(TeacherTestsResponse { tests, count }))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    use crate::test_support;

    #[tokio::test]
    async fn create_test_requires_teacher_id() {
        let _guard = test_support::env_lock();
        test_support::set_test_env();
        let app = test_support::test_app();

        let response = app
            .oneshot(test_support::json_request(
                Method::POST,
                "/api/createTest",
                Some(json!({ "testType": "quiz" })),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = test_support::read_json(response).await;
        assert_eq!(json["detail"], "Missing teacherId");
    }

    #[tokio::test]
    async fn create_test_rejects_unknown_test_type() {
        let _guard = test_support::env_lock();
        test_support::set_test_env();
        let app = test_support::test_app();

        let response = app
            .oneshot(test_support::json_request(
                Method::POST,
                "/api/createTest",
                Some(json!({ "teacherId": "t1", "testType": "exam" })),
            ))
            .await
            .expect("response");

        // serde rejects the unknown enum variant before the handler runs
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
