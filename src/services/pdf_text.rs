use anyhow::{Context, Result};
use bytes::Bytes;

/// Extract plain text from PDF bytes. pdf-extract is blocking, so the work
/// runs on the blocking pool.
pub(crate) async fn extract_text(bytes: Bytes) -> Result<String> {
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .context("PDF extraction task failed")?
        .context("Failed to extract text from PDF")?;

    let text = text.trim().to_string();
    if text.is_empty() {
        anyhow::bail!("PDF contained no extractable text");
    }

    Ok(text)
}
