use super::File;

#[derive(serde::Serialize)]
struct GetInfoParams {
    fields: &'static str,
}

impl crate::Client {
    /// Fetches the current metadata of a file or folder.
    ///
    /// The returned `webViewLink` reflects the permissions at the time
    /// of the call, unlike the one carried by creation responses.
    pub async fn get_file_info(&self, file_id: &str) -> crate::Result<File> {
        self.get_request(
            &format!("files/{}", file_id),
            GetInfoParams {
                fields: super::FIELDS,
            },
        )
        .await
    }
}
