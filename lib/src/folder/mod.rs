pub mod create;

/// The MIME type marking a file resource as a folder
pub const MIME_TYPE: &str = "application/vnd.google-apps.folder";
