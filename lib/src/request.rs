//! The shared request plumbing for the [Drive v3 REST protocol](https://developers.google.com/drive/api/reference/rest/v3)

use crate::Error;

/// Error envelope returned by the Google APIs on non 2xx statuses
#[derive(Debug, serde::Deserialize)]
struct ErrorPayload {
    error: ErrorDetail,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorDetail {
    code: u16,
    message: String,
}

async fn read_response<T: serde::de::DeserializeOwned>(res: reqwest::Response) -> Result<T, Error> {
    let status = res.status();
    tracing::debug!("responded with status {status:?}");
    if status.is_success() {
        res.json::<T>().await.map_err(Error::from)
    } else {
        let body = res.text().await?;
        match serde_json::from_str::<ErrorPayload>(&body) {
            Ok(payload) => Err(Error::Protocol(payload.error.code, payload.error.message)),
            Err(_) => Err(Error::Protocol(status.as_u16(), body)),
        }
    }
}

impl crate::Client {
    fn build_url(&self, path: &str) -> String {
        format!("{}/drive/v3/{}", self.base_url, path)
    }

    fn build_upload_url(&self) -> String {
        format!("{}/upload/drive/v3/files", self.base_url)
    }

    #[tracing::instrument(name = "get", skip(self, params))]
    pub(crate) async fn get_request<T: serde::de::DeserializeOwned, P: serde::Serialize>(
        &self,
        path: &str,
        params: P,
    ) -> Result<T, Error> {
        let uri = self.build_url(path);
        let res = self
            .inner
            .get(uri)
            .header(reqwest::header::AUTHORIZATION, self.credentials.authorization())
            .query(&params)
            .send()
            .await?;
        read_response(res).await
    }

    #[tracing::instrument(name = "post", skip(self, params, body))]
    pub(crate) async fn post_request<
        T: serde::de::DeserializeOwned,
        P: serde::Serialize,
        B: serde::Serialize,
    >(
        &self,
        path: &str,
        params: P,
        body: &B,
    ) -> Result<T, Error> {
        let uri = self.build_url(path);
        let res = self
            .inner
            .post(uri)
            .header(reqwest::header::AUTHORIZATION, self.credentials.authorization())
            .query(&params)
            .json(body)
            .send()
            .await?;
        read_response(res).await
    }

    #[tracing::instrument(name = "patch", skip(self, params, body))]
    pub(crate) async fn patch_request<
        T: serde::de::DeserializeOwned,
        P: serde::Serialize,
        B: serde::Serialize,
    >(
        &self,
        path: &str,
        params: P,
        body: &B,
    ) -> Result<T, Error> {
        let uri = self.build_url(path);
        let res = self
            .inner
            .patch(uri)
            .header(reqwest::header::AUTHORIZATION, self.credentials.authorization())
            .query(&params)
            .json(body)
            .send()
            .await?;
        read_response(res).await
    }

    #[tracing::instrument(name = "upload", skip(self, params, form))]
    pub(crate) async fn post_upload<T: serde::de::DeserializeOwned, P: serde::Serialize>(
        &self,
        params: P,
        form: reqwest::multipart::Form,
    ) -> Result<T, Error> {
        let uri = self.build_upload_url();
        let res = self
            .inner
            .post(uri)
            .header(reqwest::header::AUTHORIZATION, self.credentials.authorization())
            .query(&params)
            .multipart(form)
            .send()
            .await?;
        read_response(res).await
    }
}
