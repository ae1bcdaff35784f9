//! File upload, download and deletion against the object store.

use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::http::ApiClient;

/// Metadata of an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadedFile {
    pub file_name: String,
    /// Object name within the store.
    pub file_path: String,
    pub file_url: String,
    pub file_size: u64,
    pub file_type: String,
}

/// `POST /files/upload`, `GET|DELETE /files/{bucket}/{object}`.
pub struct FileApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn files(&self) -> FileApi<'_> {
        FileApi { client: self }
    }
}

impl FileApi<'_> {
    /// Upload a file as multipart form data (field name `file`).
    pub async fn upload(
        &self,
        file_name: &str,
        content: Vec<u8>,
        content_type: Option<&str>,
    ) -> ApiResult<UploadedFile> {
        let mut part = reqwest::multipart::Part::bytes(content).file_name(file_name.to_owned());
        if let Some(mime) = content_type {
            part = part
                .mime_str(mime)
                .map_err(|err| ApiError::Decode(err.to_string()))?;
        }
        let form = reqwest::multipart::Form::new().part("file", part);
        self.client.post_multipart("/files/upload", form).await
    }

    /// Download raw file bytes; this endpoint bypasses the envelope.
    pub async fn download(&self, bucket: &str, object: &str) -> ApiResult<Vec<u8>> {
        self.client.get_bytes(&format!("/files/{bucket}/{object}")).await
    }

    pub async fn delete(&self, bucket: &str, object: &str) -> ApiResult<()> {
        self.client.delete(&format!("/files/{bucket}/{object}")).await
    }
}
