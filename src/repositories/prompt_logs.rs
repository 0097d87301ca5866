use sqlx::PgPool;
use time::PrimitiveDateTime;

pub(crate) struct CreatePromptLog<'a> {
    pub(crate) id: &'a str,
    pub(crate) test_id: &'a str,
    pub(crate) prompt: &'a str,
    pub(crate) created_at: PrimitiveDateTime,
}

pub(crate) async fn create(pool: &PgPool, params: CreatePromptLog<'_>) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO prompt_logs (id, test_id, prompt, created_at) VALUES ($1, $2, $3, $4)",
    )
    .bind(params.id)
    .bind(params.test_id)
    .bind(params.prompt)
    .bind(params.created_at)
    .execute(pool)
    .await?;
    Ok(())
}
