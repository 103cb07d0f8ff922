//! Exchange of a long lived refresh token for a bearer access token, as
//! described in the [OAuth 2.0 documentation](https://developers.google.com/identity/protocols/oauth2/web-server#offline).
//!
//! The proxy performs this exchange once at startup and keeps the
//! resulting token for the lifetime of the process.

use std::borrow::Cow;

use crate::Error;

/// The token returned by the OAuth token endpoint
#[derive(Debug, serde::Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub expires_in: u64,
    pub token_type: String,
}

/// Error envelope of the OAuth token endpoint
#[derive(Debug, serde::Deserialize)]
struct TokenErrorPayload {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

#[derive(serde::Serialize)]
struct TokenParams<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    refresh_token: &'a str,
    grant_type: &'static str,
}

/// The `refresh_token` grant against the OAuth token endpoint
#[derive(Debug)]
pub struct RefreshTokenFlow {
    token_url: Cow<'static, str>,
    client_id: String,
    client_secret: String,
    refresh_token: String,
}

impl RefreshTokenFlow {
    pub fn new<I, S, R>(client_id: I, client_secret: S, refresh_token: R) -> Self
    where
        I: Into<String>,
        S: Into<String>,
        R: Into<String>,
    {
        Self {
            token_url: Cow::Borrowed(crate::TOKEN_URL),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            refresh_token: refresh_token.into(),
        }
    }

    /// Sets a custom token endpoint and returns the modified flow.
    pub fn with_token_url(mut self, token_url: impl Into<Cow<'static, str>>) -> Self {
        self.token_url = token_url.into();
        self
    }

    /// Exchanges the refresh token for an access token.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Protocol`] when the endpoint rejects the
    /// grant and [`crate::Error::Reqwest`] on transport failures.
    #[tracing::instrument(skip(self))]
    pub async fn exchange(&self) -> crate::Result<AccessToken> {
        let client = reqwest::ClientBuilder::new()
            .user_agent(crate::USER_AGENT)
            .build()?;
        let res = client
            .post(self.token_url.as_ref())
            .form(&TokenParams {
                client_id: &self.client_id,
                client_secret: &self.client_secret,
                refresh_token: &self.refresh_token,
                grant_type: "refresh_token",
            })
            .send()
            .await?;
        let status = res.status();
        if status.is_success() {
            res.json::<AccessToken>().await.map_err(Error::from)
        } else {
            let body = res.text().await?;
            match serde_json::from_str::<TokenErrorPayload>(&body) {
                Ok(payload) => Err(Error::Protocol(
                    status.as_u16(),
                    payload.error_description.unwrap_or(payload.error),
                )),
                Err(_) => Err(Error::Protocol(status.as_u16(), body)),
            }
        }
    }
}
