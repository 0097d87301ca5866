use axum::{
    extract::{Multipart, State},
    routing::post,
    Json, Router,
};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::repositories;
use crate::schemas::test::UploadQuestionsResponse;
use crate::services::{pdf_text, prompts};

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/uploadQuestions", post(upload_questions))
}

/// The whole pipeline: archive PDF, extract text, build prompt, call Gemini,
/// store the normalized question payload.
async fn upload_questions(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadQuestionsResponse>, ApiError> {
    let mut test_id: Option<String> = None;
    let mut pdf_bytes: Option<Vec<u8>> = None;
    let mut prompt_index: i64 = 0;
    let max_bytes = state.settings().storage().max_upload_size_mb * 1024 * 1024;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::BadRequest("Invalid multipart data".to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "pdf" => {
                let mut bytes = Vec::new();
                while let Some(chunk) = field
                    .chunk()
                    .await
                    .map_err(|_| ApiError::BadRequest("Failed to read pdf file".to_string()))?
                {
                    let next_size = bytes.len() as u64 + chunk.len() as u64;
                    if next_size > max_bytes {
                        return Err(ApiError::BadRequest(format!(
                            "File size exceeds {}MB limit",
                            state.settings().storage().max_upload_size_mb
                        )));
                    }
                    bytes.extend_from_slice(&chunk);
                }
                pdf_bytes = Some(bytes);
            }
            "testId" => {
                let text = field
                    .text()
                    .await
                    .map_err(|_| ApiError::BadRequest("Invalid testId field".to_string()))?;
                test_id = Some(text);
            }
            "promptIndex" => {
                let text = field
                    .text()
                    .await
                    .map_err(|_| ApiError::BadRequest("Invalid promptIndex field".to_string()))?;
                prompt_index = text
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| {
                        ApiError::BadRequest("promptIndex must be a valid integer".to_string())
                    })?
                    .max(0);
            }
            _ => {}
        }
    }

    let (Some(test_id), Some(pdf_bytes)) = (test_id, pdf_bytes) else {
        return Err(ApiError::BadRequest("Missing testId or pdf".to_string()));
    };
    // Refcounted so archival and extraction share one buffer.
    let pdf_bytes = bytes::Bytes::from(pdf_bytes);

    let test = repositories::tests::find_by_id(state.db(), &test_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch test"))?;

    let Some(test) = test else {
        return Err(ApiError::NotFound("Test not found".to_string()));
    };

    match state.storage() {
        Some(storage) => {
            let (size, sha256) = storage
                .upload_pdf(&test_id, pdf_bytes.clone())
                .await
                .map_err(|e| ApiError::internal(e, "Failed to upload PDF"))?;
            tracing::info!(test_id = %test_id, size, sha256 = %sha256, "PDF archived");
        }
        None => {
            tracing::warn!(test_id = %test_id, "Storage disabled; skipping PDF archival");
        }
    }

    let extracted = pdf_text::extract_text(pdf_bytes)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to extract text from PDF"))?;

    let prompt = prompts::build_prompt(test.test_type, &extracted);
    tracing::debug!(
        test_id = %test_id,
        test_type = test.test_type.as_str(),
        prompt_index,
        prompt_len = prompt.len(),
        "Prompt built"
    );

    // Audit trail; a failed insert must not abort the upload.
    let audit = repositories::prompt_logs::create(
        state.db(),
        repositories::prompt_logs::CreatePromptLog {
            id: &Uuid::new_v4().to_string(),
            test_id: &test_id,
            prompt: &prompt,
            created_at: primitive_now_utc(),
        },
    )
    .await;
    if let Err(err) = audit {
        tracing::warn!(error = %err, test_id = %test_id, "Failed to record prompt audit entry");
    }

    let questions = state
        .gemini()
        .generate_questions(&prompt)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to generate questions"))?;

    if questions.is_string() {
        tracing::warn!(test_id = %test_id, "Gemini reply was not parseable JSON; storing raw text");
    }

    repositories::question_sets::create(
        state.db(),
        repositories::question_sets::CreateQuestionSet {
            id: &Uuid::new_v4().to_string(),
            test_id: &test_id,
            json_data: &questions,
            test_type: test.test_type,
            created_at: primitive_now_utc(),
        },
    )
    .await
    .map_err(|err| match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            ApiError::Conflict("Questions already uploaded for this test".to_string())
        }
        _ => ApiError::internal(err, "Failed to save questions JSON"),
    })?;

    Ok(Json(UploadQuestionsResponse {
        msg: "Questions uploaded and processed".to_string(),
        test_id,
        test_type: test.test_type,
    }))
}
