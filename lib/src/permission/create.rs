use super::Permission;

#[derive(serde::Serialize)]
struct NoParams {}

#[derive(serde::Serialize)]
struct CreatePermissionBody {
    role: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
}

impl crate::Client {
    /// Grants "anyone with the link may read" on a file or folder.
    ///
    /// The shareable link of the resource only reflects the new
    /// permission after a metadata re-fetch.
    pub async fn grant_public_read(&self, file_id: &str) -> crate::Result<Permission> {
        self.post_request(
            &format!("files/{}/permissions", file_id),
            NoParams {},
            &CreatePermissionBody {
                role: "reader",
                kind: "anyone",
            },
        )
        .await
    }
}
