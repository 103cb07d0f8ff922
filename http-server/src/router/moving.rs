use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};

use crate::error::Error;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MoveFileRequest {
    file_id: String,
    source_folder_id: String,
    destination_folder_id: String,
}

#[derive(serde::Serialize)]
pub(crate) struct MoveFileResponse {
    message: &'static str,
    file: gdrive::file::File,
}

async fn run(client: gdrive::Client, payload: MoveFileRequest) -> Result<MoveFileResponse, Error> {
    let file = client
        .move_file(
            &payload.file_id,
            &payload.destination_folder_id,
            &payload.source_folder_id,
        )
        .await?;
    Ok(MoveFileResponse {
        message: "ファイル移動成功",
        file,
    })
}

pub(crate) async fn handle(
    Extension(client): Extension<gdrive::Client>,
    payload: Result<Json<MoveFileRequest>, JsonRejection>,
) -> Result<Json<MoveFileResponse>, Error> {
    let result = match payload {
        Ok(Json(payload)) => run(client, payload).await,
        Err(rejection) => Err(Error::BadRequest(rejection.body_text())),
    };
    result.map(Json).map_err(|err| err.log("ファイル移動失敗"))
}

#[cfg(test)]
mod tests {
    use crate::router::tests::{json_request, read_json, router};
    use mockito::Matcher;
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn single_update_call_with_both_parents() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("PATCH", "/drive/v3/files/file-42")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("addParents".into(), "dst".into()),
                Matcher::UrlEncoded("removeParents".into(), "src".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{
    "id": "file-42",
    "name": "report.pdf",
    "webViewLink": "https://drive.google.com/file/d/file-42/view",
    "parents": ["dst"]
}"#,
            )
            .expect(1)
            .create_async()
            .await;
        let app = router(server.url());
        let res = app
            .oneshot(json_request(
                "/move-file",
                serde_json::json!({
                    "fileId": "file-42",
                    "sourceFolderId": "src",
                    "destinationFolderId": "dst"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), axum::http::StatusCode::OK);
        let body = read_json(res).await;
        assert_eq!(body["message"], "ファイル移動成功");
        assert_eq!(body["file"]["parents"][0], "dst");
        m.assert_async().await;
    }

    #[tokio::test]
    async fn upstream_failure_is_reported() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("PATCH", "/drive/v3/files/file-42")
            .match_query(Matcher::Any)
            .with_status(404)
            .with_body(r#"{ "error": { "code": 404, "message": "File not found: file-42." } }"#)
            .create_async()
            .await;
        let app = router(server.url());
        let res = app
            .oneshot(json_request(
                "/move-file",
                serde_json::json!({
                    "fileId": "file-42",
                    "sourceFolderId": "src",
                    "destinationFolderId": "dst"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(res).await;
        assert!(body["error"].as_str().unwrap().contains("File not found"));
        m.assert_async().await;
    }
}
