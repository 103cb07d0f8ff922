use axum::extract::Multipart;
use axum::{Extension, Json};
use gdrive::file::upload::UploadFile;

use crate::error::Error;

const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

#[derive(serde::Serialize)]
pub(crate) struct UploadResponse {
    message: &'static str,
    file: gdrive::file::File,
}

struct FilePart {
    name: String,
    mime_type: String,
    content: axum::body::Bytes,
}

/// Drains the multipart form, keeping the `file` payload and the
/// optional `folderId` field. Unknown fields are ignored.
async fn read_form(mut multipart: Multipart) -> Result<(Option<FilePart>, Option<String>), Error> {
    let mut file = None;
    let mut folder_id = None;
    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("file") => {
                // the uploaded file keeps its submitted name, a part
                // without one is a malformed form
                let name = field
                    .file_name()
                    .ok_or_else(|| Error::BadRequest("file part must have a filename".into()))?
                    .to_string();
                let mime_type = field
                    .content_type()
                    .unwrap_or(DEFAULT_MIME_TYPE)
                    .to_string();
                let content = field.bytes().await?;
                file = Some(FilePart {
                    name,
                    mime_type,
                    content,
                });
            }
            Some("folderId") => {
                folder_id = Some(field.text().await?);
            }
            _ => {}
        }
    }
    Ok((file, folder_id))
}

async fn run(
    client: gdrive::Client,
    multipart: Multipart,
    to_folder: bool,
) -> Result<UploadResponse, Error> {
    let (file, folder_id) = read_form(multipart).await?;
    let file = file.ok_or_else(|| Error::BadRequest("file field is required".into()))?;
    let mut params = UploadFile::new(file.name, file.mime_type, file.content);
    if to_folder {
        let folder_id =
            folder_id.ok_or_else(|| Error::BadRequest("folderId field is required".into()))?;
        params.set_parent(folder_id);
    }
    let file = client.upload_file(params).await?;
    Ok(UploadResponse {
        message: "アップロード成功",
        file,
    })
}

pub(crate) async fn to_root(
    Extension(client): Extension<gdrive::Client>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, Error> {
    run(client, multipart, false)
        .await
        .map(Json)
        .map_err(|err| err.log("アップロード失敗"))
}

pub(crate) async fn to_folder(
    Extension(client): Extension<gdrive::Client>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, Error> {
    run(client, multipart, true)
        .await
        .map(Json)
        .map_err(|err| err.log("フォルダへのアップロード失敗"))
}

#[cfg(test)]
mod tests {
    use crate::router::tests::{read_json, router};
    use mockito::Matcher;
    use tower::util::ServiceExt;

    const BOUNDARY: &str = "test-boundary";

    fn multipart_request(
        uri: &str,
        parts: &[(&str, Option<(&str, &str)>, &str)],
    ) -> axum::http::Request<axum::body::Body> {
        let mut body = String::new();
        for (name, file, content) in parts {
            body.push_str(&format!("--{}\r\n", BOUNDARY));
            match file {
                Some((filename, mime)) => {
                    body.push_str(&format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                        name, filename
                    ));
                    body.push_str(&format!("Content-Type: {}\r\n\r\n", mime));
                }
                None => {
                    body.push_str(&format!(
                        "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
                        name
                    ));
                }
            }
            body.push_str(content);
            body.push_str("\r\n");
        }
        body.push_str(&format!("--{}--\r\n", BOUNDARY));
        axum::http::Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                "content-type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(axum::body::Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn upload_to_root() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/upload/drive/v3/files")
            .match_query(Matcher::UrlEncoded("uploadType".into(), "multipart".into()))
            .match_body(Matcher::Any)
            .with_status(200)
            .with_body(
                r#"{
    "id": "file-1",
    "name": "hello.txt",
    "webViewLink": "https://drive.google.com/file/d/file-1/view"
}"#,
            )
            .expect(1)
            .create_async()
            .await;
        let app = router(server.url());
        let req = multipart_request(
            "/upload",
            &[("file", Some(("hello.txt", "text/plain")), "hello world")],
        );
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), axum::http::StatusCode::OK);
        let body = read_json(res).await;
        assert_eq!(body["message"], "アップロード成功");
        assert_eq!(body["file"]["id"], "file-1");
        assert_eq!(body["file"]["name"], "hello.txt");
        m.assert_async().await;
    }

    #[tokio::test]
    async fn upload_without_file_is_rejected() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/upload/drive/v3/files")
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let app = router(server.url());
        let req = multipart_request("/upload", &[("comment", None, "no file here")]);
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), axum::http::StatusCode::BAD_REQUEST);
        let body = read_json(res).await;
        assert_eq!(body["error"], "file field is required");
        m.assert_async().await;
    }

    #[tokio::test]
    async fn upload_file_without_filename_is_rejected() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/upload/drive/v3/files")
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let app = router(server.url());
        let req = multipart_request("/upload", &[("file", None, "hello world")]);
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), axum::http::StatusCode::BAD_REQUEST);
        let body = read_json(res).await;
        assert_eq!(body["error"], "file part must have a filename");
        m.assert_async().await;
    }

    #[tokio::test]
    async fn upload_to_folder() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/upload/drive/v3/files")
            .match_query(Matcher::UrlEncoded("uploadType".into(), "multipart".into()))
            .match_body(Matcher::Regex("folder-7".to_string()))
            .with_status(200)
            .with_body(
                r#"{
    "id": "file-2",
    "name": "hello.txt",
    "webViewLink": "https://drive.google.com/file/d/file-2/view",
    "parents": ["folder-7"]
}"#,
            )
            .expect(1)
            .create_async()
            .await;
        let app = router(server.url());
        let req = multipart_request(
            "/upload-to-folder",
            &[
                ("file", Some(("hello.txt", "text/plain")), "hello world"),
                ("folderId", None, "folder-7"),
            ],
        );
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), axum::http::StatusCode::OK);
        let body = read_json(res).await;
        assert_eq!(body["file"]["parents"][0], "folder-7");
        m.assert_async().await;
    }

    #[tokio::test]
    async fn upload_to_folder_without_folder_id_is_rejected() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/upload/drive/v3/files")
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let app = router(server.url());
        let req = multipart_request(
            "/upload-to-folder",
            &[("file", Some(("hello.txt", "text/plain")), "hello world")],
        );
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), axum::http::StatusCode::BAD_REQUEST);
        m.assert_async().await;
    }

    #[tokio::test]
    async fn upstream_failure_is_reported() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/upload/drive/v3/files")
            .match_query(Matcher::Any)
            .with_status(403)
            .with_body(
                r#"{ "error": { "code": 403, "message": "The user's Drive storage quota has been exceeded." } }"#,
            )
            .create_async()
            .await;
        let app = router(server.url());
        let req = multipart_request(
            "/upload",
            &[("file", Some(("hello.txt", "text/plain")), "hello world")],
        );
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(res).await;
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("Drive storage quota has been exceeded"));
        m.assert_async().await;
    }
}
