use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;
use sha2::{Digest, Sha256};

use crate::core::config::Settings;

/// Object storage for the uploaded source PDFs, keyed `tests/{test_id}.pdf`.
#[derive(Debug, Clone)]
pub(crate) struct StorageService {
    client: Client,
    bucket: String,
}

impl StorageService {
    pub(crate) async fn from_settings(settings: &Settings) -> anyhow::Result<Option<Self>> {
        if settings.s3().access_key.is_empty() || settings.s3().secret_key.is_empty() {
            return Ok(None);
        }

        let creds = Credentials::new(
            settings.s3().access_key.clone(),
            settings.s3().secret_key.clone(),
            None,
            None,
            "quizforge-static",
        );

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(aws_config::Region::new(settings.s3().region.clone()))
            .credentials_provider(creds);

        if !settings.s3().endpoint.is_empty() {
            loader = loader.endpoint_url(settings.s3().endpoint.clone());
        }

        let config = loader.load().await;
        let client = Client::new(&config);

        Ok(Some(Self { client, bucket: settings.s3().bucket.clone() }))
    }

    /// Takes `Bytes` so the caller can share the request buffer without
    /// copying it.
    pub(crate) async fn upload_pdf(
        &self,
        test_id: &str,
        bytes: Bytes,
    ) -> anyhow::Result<(i64, String)> {
        let key = pdf_key(test_id);
        let size = bytes.len() as i64;
        let hash_hex = hex::encode(Sha256::digest(&bytes));

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type("application/pdf")
            .body(ByteStream::from(bytes))
            .send()
            .await?;

        Ok((size, hash_hex))
    }
}

pub(crate) fn pdf_key(test_id: &str) -> String {
    format!("tests/{test_id}.pdf")
}
