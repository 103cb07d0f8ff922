use crate::file::File;

#[derive(serde::Serialize)]
struct CreateFolderParams {
    fields: &'static str,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateFolderBody<'a> {
    name: &'a str,
    mime_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parents: Option<Vec<&'a str>>,
}

/// Parameters to create a folder, optionally under a parent folder
#[derive(Debug)]
pub struct CreateFolder {
    pub name: String,
    pub parent: Option<String>,
}

impl CreateFolder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
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
    /// Creates a folder.
    ///
    /// Without a parent set, the folder is created in the root of the
    /// account the credentials belong to. The `webViewLink` of the
    /// creation response may not reflect later permission changes, use
    /// [`get_file_info`](crate::Client::get_file_info) after granting
    /// permissions.
    pub async fn create_folder(&self, params: CreateFolder) -> crate::Result<File> {
        self.post_request(
            "files",
            CreateFolderParams {
                fields: crate::file::FIELDS,
            },
            &CreateFolderBody {
                name: &params.name,
                mime_type: super::MIME_TYPE,
                parents: params.parent.as_deref().map(|parent| vec![parent]),
            },
        )
        .await
    }
}
