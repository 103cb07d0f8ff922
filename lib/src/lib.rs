//! Minimal client for the [Google Drive v3 API](https://developers.google.com/drive/api/reference/rest/v3).
//!
//! Only the surface needed by the proxy server is covered: uploading
//! files, creating folders, moving files between folders, granting
//! public-read permissions and re-fetching metadata.

use std::borrow::Cow;

pub mod auth;
pub mod builder;
pub mod file;
pub mod folder;
pub mod permission;
mod request;

pub use builder::ClientBuilder;

/// The default user agent for the http client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
/// Base url of the Google API endpoints
pub const BASE_URL: &str = "https://www.googleapis.com";
/// Url used to exchange a refresh token for an access token
pub const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

pub type Result<T> = std::result::Result<T, Error>;

/// All the possible errors returned by the client and the API
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Server side error, properly handled, returning a code and a message
    #[error("{1} (code: {0})")]
    Protocol(u16, String),
    /// Transport level error from the underlying http client
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    /// Unable to serialize a request payload
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

/// The credentials used to authenticate against the API
///
/// Google only accepts bearer tokens, obtained from the OAuth token
/// endpoint. See [`RefreshTokenFlow`](crate::auth::RefreshTokenFlow) to
/// exchange a long lived refresh token for one.
#[derive(Clone, Debug)]
pub enum Credentials {
    AccessToken(String),
}

impl Credentials {
    /// Creates a credential based on the `GDRIVE_ACCESS_TOKEN` environment variable.
    pub fn from_env() -> Option<Self> {
        std::env::var("GDRIVE_ACCESS_TOKEN")
            .ok()
            .map(Self::AccessToken)
    }

    pub fn access_token<S: Into<String>>(value: S) -> Self {
        Self::AccessToken(value.into())
    }

    pub(crate) fn authorization(&self) -> String {
        match self {
            Self::AccessToken(token) => format!("Bearer {}", token),
        }
    }
}

impl From<auth::AccessToken> for Credentials {
    fn from(value: auth::AccessToken) -> Self {
        Self::AccessToken(value.access_token)
    }
}

/// Client for the Google Drive REST API
///
/// The client is immutable and cheap to clone, it can be shared across
/// concurrent tasks.
#[derive(Clone)]
pub struct Client {
    pub(crate) inner: reqwest::Client,
    pub(crate) base_url: Cow<'static, str>,
    pub(crate) credentials: Credentials,
}

impl Client {
    /// Creates a client targeting the given base url.
    pub fn new(
        base_url: impl Into<Cow<'static, str>>,
        credentials: Credentials,
    ) -> std::result::Result<Self, builder::Error> {
        ClientBuilder::default()
            .with_base_url(base_url)
            .with_credentials(credentials)
            .build()
    }
}
