use serde::{Deserialize, Serialize};

pub(crate) use crate::core::time::format_primitive;
use crate::db::models::Test;
use crate::db::types::TestType;

/// The deployed frontends speak camelCase; every wire DTO renames accordingly.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TestCreate {
    #[serde(default)]
    pub(crate) teacher_id: Option<String>,
    #[serde(default)]
    pub(crate) test_type: Option<TestType>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TestCreateResponse {
    pub(crate) test_id: String,
    pub(crate) teacher_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TestResponse {
    pub(crate) test_id: String,
    pub(crate) teacher_id: String,
    pub(crate) test_type: TestType,
    pub(crate) created_at: String,
}

impl TestResponse {
    pub(crate) fn from_db(test: Test) -> Self {
        Self {
            test_id: test.test_id,
            teacher_id: test.teacher_id,
            test_type: test.test_type,
            created_at: format_primitive(test.created_at),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TeacherTestsResponse {
    pub(crate) tests: Vec<TestResponse>,
    pub(crate) count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuestionsResponse {
    pub(crate) questions: serde_json::Value,
    pub(crate) test_type: Option<TestType>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UploadQuestionsResponse {
    pub(crate) msg: String,
    pub(crate) test_id: String,
    pub(crate) test_type: TestType,
}
