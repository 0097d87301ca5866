use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::validation::{require, validate_payload};
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::repositories;
use crate::schemas::submission::{
    ResultEntry, SubmissionCreate, SubmissionResponse, TestResultsResponse,
};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/submitResult", post(submit_result))
        .route("/viewResult/:test_id", get(view_results))
}

async fn submit_result(
    State(state): State<AppState>,
    Json(payload): Json<SubmissionCreate>,
) -> Result<Json<SubmissionResponse>, ApiError> {
    validate_payload(&payload)?;

    let user_id = require(payload.user_id, "userId")?;
    let test_id = require(payload.test_id, "testId")?;
    let test_type = require(payload.test_type, "testType")?;
    let passed = require(payload.passed, "passed")?;
    let total_questions = require(payload.total_questions, "totalQuestions")?;

    let test_exists = repositories::tests::exists(state.db(), &test_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch test"))?;

    if !test_exists {
        return Err(ApiError::NotFound("Test not found".to_string()));
    }

    let submission = repositories::submissions::create(
        state.db(),
        repositories::submissions::CreateSubmission {
            id: &Uuid::new_v4().to_string(),
            user_id: &user_id,
            test_id: &test_id,
            test_type,
            passed,
            total_questions,
            submitted_at: primitive_now_utc(),
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to submit result"))?;

    Ok(Json(SubmissionResponse {
        msg: "Submission recorded".to_string(),
        user_id: submission.user_id,
        test_id: submission.test_id,
        test_type: submission.test_type,
        passed: submission.passed,
        total_questions: submission.total_questions,
    }))
}

async fn view_results(
    Path(test_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<TestResultsResponse>, ApiError> {
    let test_exists = repositories::tests::exists(state.db(), &test_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch test"))?;

    if !test_exists {
        return Err(ApiError::NotFound("Test not found".to_string()));
    }

    let submissions = repositories::submissions::list_by_test(state.db(), &test_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch results"))?;

    let results: Vec<ResultEntry> = submissions.into_iter().map(ResultEntry::from_db).collect();
    let count = results.len();

    Ok(Json(TestResultsResponse { results, count }))
}
