//! Resources needed to upload a file

use super::File;

#[derive(serde::Serialize)]
struct UploadParams {
    #[serde(rename = "uploadType")]
    upload_type: &'static str,
    fields: &'static str,
}

impl Default for UploadParams {
    fn default() -> Self {
        Self {
            upload_type: "multipart",
            fields: super::FIELDS,
        }
    }
}

#[derive(serde::Serialize)]
struct UploadMetadata<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parents: Option<Vec<&'a str>>,
}

/// Parameters to upload a file held in memory
///
/// # Example
///
/// ```no_run
/// use gdrive::file::upload::UploadFile;
///
/// # async fn example(client: &gdrive::Client) -> Result<(), gdrive::Error> {
/// let params = UploadFile::new("notes.txt", "text/plain", "hello world")
///     .with_parent("folder-id");
/// let file = client.upload_file(params).await?;
/// println!("uploaded {}", file.id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct UploadFile {
    pub name: String,
    pub mime_type: String,
    pub content: bytes::Bytes,
    pub parent: Option<String>,
}

impl UploadFile {
    pub fn new<N, M, C>(name: N, mime_type: M, content: C) -> Self
    where
        N: Into<String>,
        M: Into<String>,
        C: Into<bytes::Bytes>,
    {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            content: content.into(),
            parent: None,
        }
    }

    pub fn set_parent(&mut self, value: impl Into<String>) {
        self.parent = Some(value.into());
    }

    pub fn with_parent(mut self, value: impl Into<String>) -> Self {
        self.set_parent(value);
        self
    }
}

impl crate::Client {
    /// Uploads the in-memory payload as a new file.
    ///
    /// Without a parent set, the file lands in the root of the account
    /// the credentials belong to.
    pub async fn upload_file(&self, params: UploadFile) -> crate::Result<File> {
        let metadata = serde_json::to_string(&UploadMetadata {
            name: &params.name,
            parents: params.parent.as_deref().map(|parent| vec![parent]),
        })?;

        let metadata_part = reqwest::multipart::Part::text(metadata)
            .mime_str("application/json; charset=UTF-8")?;
        let media_part = reqwest::multipart::Part::bytes(params.content.to_vec())
            .file_name(params.name.clone())
            .mime_str(&params.mime_type)?;
        let form = reqwest::multipart::Form::new()
            .part("metadata", metadata_part)
            .part("media", media_part);

        self.post_upload(UploadParams::default(), form).await
    }
}
