use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::time::format_primitive;
use crate::db::models::Submission;
use crate::db::types::TestType;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubmissionCreate {
    #[serde(default)]
    pub(crate) user_id: Option<String>,
    #[serde(default)]
    pub(crate) test_id: Option<String>,
    #[serde(default)]
    pub(crate) test_type: Option<TestType>,
    #[serde(default)]
    #[validate(range(min = 0, message = "passed must be non-negative"))]
    pub(crate) passed: Option<i32>,
    #[serde(default)]
    #[validate(range(min = 0, message = "totalQuestions must be non-negative"))]
    pub(crate) total_questions: Option<i32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubmissionResponse {
    pub(crate) msg: String,
    pub(crate) user_id: String,
    pub(crate) test_id: String,
    pub(crate) test_type: TestType,
    pub(crate) passed: i32,
    pub(crate) total_questions: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResultEntry {
    pub(crate) user_id: String,
    pub(crate) test_type: TestType,
    pub(crate) passed: i32,
    pub(crate) total_questions: i32,
    pub(crate) submitted_at: String,
}

impl ResultEntry {
    pub(crate) fn from_db(submission: Submission) -> Self {
        Self {
            user_id: submission.user_id,
            test_type: submission.test_type,
            passed: submission.passed,
            total_questions: submission.total_questions,
            submitted_at: format_primitive(submission.submitted_at),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TestResultsResponse {
    pub(crate) results: Vec<ResultEntry>,
    pub(crate) count: usize,
}
