pub mod get_info;
pub mod movefile;
pub mod upload;

/// The metadata fields requested on every call
///
/// Creation responses may omit `webViewLink` until the resource is
/// fully indexed, which is why callers re-fetch after permission
/// changes.
pub const FIELDS: &str = "id,name,webViewLink,parents";

/// A file resource on Google Drive
///
/// Folders are files too, carrying the folder MIME type, so this
/// structure is shared between file and folder operations.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_view_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parents: Option<Vec<String>>,
}

impl Eq for File {}

impl PartialEq for File {
    fn eq(&self, other: &Self) -> bool {
        self.id.eq(&other.id)
    }
}
