use super::File;

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct MoveFileParams<'a> {
    add_parents: &'a str,
    remove_parents: &'a str,
    fields: &'static str,
}

/// Drive expects a file resource body on update calls, even an empty one.
#[derive(serde::Serialize)]
struct EmptyBody {}

impl crate::Client {
    /// Re-parents a file in a single update call.
    ///
    /// The destination parent is added and the source parent removed
    /// atomically from the caller's point of view. The remote service is
    /// authoritative about whether the file actually resides under the
    /// source parent.
    pub async fn move_file(
        &self,
        file_id: &str,
        add_parent: &str,
        remove_parent: &str,
    ) -> crate::Result<File> {
        self.patch_request(
            &format!("files/{}", file_id),
            MoveFileParams {
                add_parents: add_parent,
                remove_parents: remove_parent,
                fields: super::FIELDS,
            },
            &EmptyBody {},
        )
        .await
    }
}
