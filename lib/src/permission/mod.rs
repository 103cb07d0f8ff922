pub mod create;

/// A permission attached to a file or folder
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct Permission {
    pub id: String,
    pub role: String,
    #[serde(rename = "type")]
    pub kind: String,
}
