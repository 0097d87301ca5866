use sqlx::PgPool;

use crate::db::models::TeacherUser;

pub(crate) const COLUMNS: &str = "user_id, password, created_at";

pub(crate) async fn find_by_id(
    pool: &PgPool,
    user_id: &str,
) -> Result<Option<TeacherUser>, sqlx::Error> {
    sqlx::query_as::<_, TeacherUser>(&format!(
        "SELECT {COLUMNS} FROM teacher_users WHERE user_id = $1"
    ))
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Plaintext credential match; returns the row only when both columns match exactly.
pub(crate) async fn find_by_credentials(
    pool: &PgPool,
    user_id: &str,
    password: &str,
) -> Result<Option<TeacherUser>, sqlx::Error> {
    sqlx::query_as::<_, TeacherUser>(&format!(
        "SELECT {COLUMNS} FROM teacher_users WHERE user_id = $1 AND password = $2"
    ))
    .bind(user_id)
    .bind(password)
    .fetch_optional(pool)
    .await
}
