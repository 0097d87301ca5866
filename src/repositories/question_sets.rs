use sqlx::types::Json;
use sqlx::PgPool;
use time::PrimitiveDateTime;

use crate::db::models::QuestionSet;
use crate::db::types::TestType;

pub(crate) const COLUMNS: &str = "id, test_id, json_data, test_type, created_at";

pub(crate) struct CreateQuestionSet<'a> {
    pub(crate) id: &'a str,
    pub(crate) test_id: &'a str,
    pub(crate) json_data: &'a serde_json::Value,
    pub(crate) test_type: TestType,
    pub(crate) created_at: PrimitiveDateTime,
}

pub(crate) async fn create(
    pool: &PgPool,
    params: CreateQuestionSet<'_>,
) -> Result<QuestionSet, sqlx::Error> {
    sqlx::query_as::<_, QuestionSet>(&format!(
        "INSERT INTO question_sets (id, test_id, json_data, test_type, created_at) \
         VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
    ))
    .bind(params.id)
    .bind(params.test_id)
    .bind(Json(params.json_data))
    .bind(params.test_type)
    .bind(params.created_at)
    .fetch_one(pool)
    .await
}

pub(crate) async fn find_by_test_id(
    pool: &PgPool,
    test_id: &str,
) -> Result<Option<QuestionSet>, sqlx::Error> {
    sqlx::query_as::<_, QuestionSet>(&format!(
        "SELECT {COLUMNS} FROM question_sets WHERE test_id = $1"
    ))
    .bind(test_id)
    .fetch_optional(pool)
    .await
}
