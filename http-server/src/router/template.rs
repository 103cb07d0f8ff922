use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};
use gdrive::folder::create::CreateFolder;

use crate::error::Error;

/// The fixed names of the child folders, also the order of the
/// `children` array in the response.
pub(crate) const CHILD_NAMES: [&str; 3] = ["資料", "画像", "動画"];

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateTemplateRequest {
    root_name: String,
    #[serde(default)]
    make_public: bool,
}

#[derive(serde::Serialize)]
pub(crate) struct CreateTemplateResponse {
    message: &'static str,
    root: gdrive::file::File,
    children: Vec<gdrive::file::File>,
}

/// Creates the root folder and its three fixed children.
///
/// The children are created in parallel, as are the optional permission
/// grants and the final metadata re-fetches. Only the causal ordering
/// holds: the root exists before any child is created, and everything is
/// created and shared before the re-fetch. On partial failure the
/// already-created folders are left behind, nothing is rolled back.
async fn run(
    client: gdrive::Client,
    payload: CreateTemplateRequest,
) -> Result<CreateTemplateResponse, Error> {
    if payload.root_name.is_empty() {
        return Err(Error::BadRequest(
            "rootName must be a non-empty string".into(),
        ));
    }

    let root = client
        .create_folder(CreateFolder::new(payload.root_name.as_str()))
        .await?;
    let (first, second, third) = tokio::try_join!(
        client.create_folder(CreateFolder::new(CHILD_NAMES[0]).with_parent(root.id.as_str())),
        client.create_folder(CreateFolder::new(CHILD_NAMES[1]).with_parent(root.id.as_str())),
        client.create_folder(CreateFolder::new(CHILD_NAMES[2]).with_parent(root.id.as_str())),
    )?;

    if payload.make_public {
        tokio::try_join!(
            client.grant_public_read(&root.id),
            client.grant_public_read(&first.id),
            client.grant_public_read(&second.id),
            client.grant_public_read(&third.id),
        )?;
    }

    let (root, first, second, third) = tokio::try_join!(
        client.get_file_info(&root.id),
        client.get_file_info(&first.id),
        client.get_file_info(&second.id),
        client.get_file_info(&third.id),
    )?;

    Ok(CreateTemplateResponse {
        message: "テンプレートフォルダ作成成功",
        root,
        children: vec![first, second, third],
    })
}

pub(crate) async fn create(
    Extension(client): Extension<gdrive::Client>,
    payload: Result<Json<CreateTemplateRequest>, JsonRejection>,
) -> Result<Json<CreateTemplateResponse>, Error> {
    let result = match payload {
        Ok(Json(payload)) => run(client, payload).await,
        Err(rejection) => Err(Error::BadRequest(rejection.body_text())),
    };
    result
        .map(Json)
        .map_err(|err| err.log("テンプレートフォルダ作成失敗"))
}
