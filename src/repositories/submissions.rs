use sqlx::PgPool;
use time::PrimitiveDateTime;

use crate::db::models::Submission;
use crate::db::types::TestType;

pub(crate) const COLUMNS: &str =
    "id, user_id, test_id, test_type, passed, total_questions, submitted_at";

pub(crate) struct CreateSubmission<'a> {
    pub(crate) id: &'a str,
    pub(crate) user_id: &'a str,
    pub(crate) test_id: &'a str,
    pub(crate) test_type: TestType,
    pub(crate) passed: i32,
    pub(crate) total_questions: i32,
    pub(crate) submitted_at: PrimitiveDateTime,
}

pub(crate) async fn create(
    pool: &PgPool,
    params: CreateSubmission<'_>,
) -> Result<Submission, sqlx::Error> {
    sqlx::query_as::<_, Submission>(&format!(
        "INSERT INTO submissions (id, user_id, test_id, test_type, passed, total_questions, submitted_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {COLUMNS}"
    ))
    .bind(params.id)
    .bind(params.user_id)
    .bind(params.test_id)
    .bind(params.test_type)
    .bind(params.passed)
    .bind(params.total_questions)
    .bind(params.submitted_at)
    .fetch_one(pool)
    .await
}

pub(crate) async fn list_by_test(
    pool: &PgPool,
    test_id: &str,
) -> Result<Vec<Submission>, sqlx::Error> {
    sqlx::query_as::<_, Submission>(&format!(
        "SELECT {COLUMNS} FROM submissions WHERE test_id = $1 ORDER BY submitted_at DESC"
    ))
    .bind(test_id)
    .fetch_all(pool)
    .await
}
