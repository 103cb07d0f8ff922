/// Configuration of the proxy, read from the arguments or the environment
#[derive(Debug, clap::Parser)]
#[command(about, version)]
pub(crate) struct Config {
    /// Address the server binds to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,
    /// Port the server binds to
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,
    /// OAuth client id of the server identity
    #[arg(long, env = "CLIENT_ID")]
    client_id: String,
    /// OAuth client secret of the server identity
    #[arg(long, env = "CLIENT_SECRET", hide_env_values = true)]
    client_secret: String,
    /// Redirect URI registered with the OAuth client
    #[arg(long, env = "REDIRECT_URI")]
    redirect_uri: String,
    /// Long lived refresh token granted to the server identity
    #[arg(long, env = "REFRESH_TOKEN", hide_env_values = true)]
    refresh_token: String,
}

impl Config {
    pub fn binding(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Exchanges the refresh token once and builds the process-wide client.
    ///
    /// The resulting client is immutable and shared by every request for
    /// the lifetime of the process.
    pub async fn client(&self) -> Result<gdrive::Client, Box<dyn std::error::Error>> {
        tracing::debug!(
            "authenticating client {} (redirect {})",
            self.client_id,
            self.redirect_uri
        );
        let token = gdrive::auth::RefreshTokenFlow::new(
            self.client_id.as_str(),
            self.client_secret.as_str(),
            self.refresh_token.as_str(),
        )
        .exchange()
        .await?;
        let client = gdrive::ClientBuilder::from_env()
            .with_credentials(token.into())
            .build()?;
        Ok(client)
    }
}
