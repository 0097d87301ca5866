use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use time::PrimitiveDateTime;

use crate::db::types::TestType;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Test {
    pub(crate) test_id: String,
    pub(crate) teacher_id: String,
    pub(crate) test_type: TestType,
    pub(crate) created_at: PrimitiveDateTime,
}

/// One row per test, written once after the upload pipeline completes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct QuestionSet {
    pub(crate) id: String,
    pub(crate) test_id: String,
    pub(crate) json_data: Json<serde_json::Value>,
    pub(crate) test_type: TestType,
    pub(crate) created_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Submission {
    pub(crate) id: String,
    pub(crate) user_id: String,
    pub(crate) test_id: String,
    pub(crate) test_type: TestType,
    pub(crate) passed: i32,
    pub(crate) total_questions: i32,
    pub(crate) submitted_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct TeacherUser {
    pub(crate) user_id: String,
    pub(crate) password: String,
    pub(crate) created_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct PromptLog {
    pub(crate) id: String,
    pub(crate) test_id: String,
    pub(crate) prompt: String,
    pub(crate) created_at: PrimitiveDateTime,
}
